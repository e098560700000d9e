//! The embedded upload page.
//!
//! One self-contained HTML document: the drop-target upload widget, the
//! loading skeleton, the empty state, and the controller script that walks
//! the idle -> loading -> done/failed states. The skeleton and empty-state
//! markup comes from [`crate::render`] so the views have a single source.

use crate::render;

pub fn render() -> String {
    PAGE_TEMPLATE
        .replace("{{EMPTY_STATE}}", &render::empty_state())
        .replace("{{SKELETON}}", &render::loading_skeleton())
}

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Nature Identifier</title>
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
            background: linear-gradient(160deg, #f0fdf4 0%, #dcfce7 100%);
            min-height: 100vh;
            padding: 48px 16px;
            color: #1f2937;
        }

        .container {
            max-width: 760px;
            margin: 0 auto;
        }

        .masthead {
            text-align: center;
            margin-bottom: 32px;
        }

        .masthead-icons {
            font-size: 2.2em;
            letter-spacing: 12px;
            margin-bottom: 12px;
        }

        h1 {
            font-size: 2.4em;
            color: #14532d;
            margin-bottom: 8px;
        }

        .subtitle {
            color: #4b5563;
        }

        .panel {
            background: white;
            border-radius: 16px;
            box-shadow: 0 12px 40px rgba(20, 83, 45, 0.12);
            padding: 32px;
        }

        .upload-area {
            border: 3px dashed #16a34a;
            border-radius: 12px;
            padding: 48px 20px;
            text-align: center;
            cursor: pointer;
            transition: border-color 0.2s, background 0.2s;
            background: #f7fef9;
            margin-bottom: 24px;
        }

        .upload-area:hover {
            background: #ecfdf3;
        }

        .upload-area.dragover {
            border-color: #15803d;
            background: #dcfce7;
        }

        .upload-area.rejected {
            border-color: #dc2626;
            background: #fef2f2;
        }

        .upload-icon {
            font-size: 3em;
            margin-bottom: 12px;
        }

        .upload-text {
            color: #166534;
            font-size: 1.1em;
            font-weight: 600;
            margin-bottom: 6px;
        }

        .upload-hint {
            color: #6b7280;
            font-size: 0.9em;
        }

        .upload-area.rejected .upload-hint {
            color: #dc2626;
        }

        input[type="file"] {
            display: none;
        }

        .empty-state {
            text-align: center;
            color: #6b7280;
            padding: 48px 20px;
        }

        .empty-icons {
            font-size: 2em;
            letter-spacing: 10px;
            margin-bottom: 16px;
        }

        .empty-hint {
            font-size: 0.9em;
            margin-top: 6px;
        }

        .skeleton-card {
            padding: 24px 8px;
        }

        .skeleton-line {
            height: 16px;
            border-radius: 8px;
            background: linear-gradient(90deg, #e5e7eb 25%, #f3f4f6 50%, #e5e7eb 75%);
            background-size: 200% 100%;
            animation: shimmer 1.2s infinite;
            margin-bottom: 14px;
        }

        .skeleton-line.w-75 {
            width: 75%;
        }

        @keyframes shimmer {
            0% { background-position: 200% 0; }
            100% { background-position: -200% 0; }
        }

        .result-card {
            padding: 8px;
        }

        .result-photo {
            text-align: center;
            margin-bottom: 20px;
        }

        .result-photo img {
            max-width: 240px;
            max-height: 240px;
            border-radius: 10px;
            box-shadow: 0 4px 14px rgba(0, 0, 0, 0.12);
        }

        .result-header {
            display: flex;
            align-items: center;
            gap: 10px;
            margin-bottom: 10px;
        }

        .category-glyph {
            font-size: 1.6em;
        }

        .result-header h2 {
            font-size: 1.5em;
            color: #14532d;
        }

        .category-badge {
            display: inline-block;
            background: #dcfce7;
            color: #166534;
            padding: 4px 14px;
            border-radius: 999px;
            font-size: 0.85em;
            font-weight: 600;
            margin-bottom: 18px;
        }

        .result-card section {
            margin-bottom: 18px;
        }

        .result-card h3 {
            font-size: 1em;
            color: #166534;
            margin-bottom: 6px;
        }

        .result-card p {
            color: #374151;
            line-height: 1.6;
        }

        .result-card ul {
            list-style: disc inside;
            color: #374151;
            line-height: 1.7;
        }

        .toast {
            position: fixed;
            bottom: 24px;
            left: 50%;
            transform: translateX(-50%);
            background: #b91c1c;
            color: white;
            padding: 12px 24px;
            border-radius: 10px;
            box-shadow: 0 8px 24px rgba(0, 0, 0, 0.25);
            font-size: 0.95em;
        }
    </style>
</head>
<body>
    <div class="container">
        <header class="masthead">
            <div class="masthead-icons">&#128247; &#127807; &#128038;</div>
            <h1>Nature Identifier</h1>
            <p class="subtitle">Upload an image to identify animals, birds, or plants instantly</p>
        </header>

        <div class="panel">
            <div class="upload-area" id="uploadArea">
                <div class="upload-icon">&#128248;</div>
                <div class="upload-text">Drag and drop an image, or click to select</div>
                <div class="upload-hint" id="uploadHint">Supports JPG, PNG, WebP</div>
                <input type="file" id="fileInput" accept="image/*">
            </div>

            <div id="skeleton" hidden>{{SKELETON}}</div>
            <div id="resultContainer">{{EMPTY_STATE}}</div>
        </div>
    </div>

    <div class="toast" id="toast" hidden></div>

    <script>
        const uploadArea = document.getElementById('uploadArea');
        const fileInput = document.getElementById('fileInput');
        const uploadHint = document.getElementById('uploadHint');
        const skeleton = document.getElementById('skeleton');
        const resultContainer = document.getElementById('resultContainer');
        const toast = document.getElementById('toast');
        const defaultHint = uploadHint.textContent;
        let toastTimer = null;

        uploadArea.addEventListener('click', () => fileInput.click());

        uploadArea.addEventListener('dragover', (e) => {
            e.preventDefault();
            uploadArea.classList.add('dragover');
        });

        uploadArea.addEventListener('dragleave', () => {
            uploadArea.classList.remove('dragover');
        });

        uploadArea.addEventListener('drop', (e) => {
            e.preventDefault();
            uploadArea.classList.remove('dragover');
            acceptFiles(e.dataTransfer.files);
        });

        fileInput.addEventListener('change', () => {
            acceptFiles(fileInput.files);
            fileInput.value = '';
        });

        function acceptFiles(files) {
            if (files.length !== 1) {
                rejectUpload('Please choose a single image file.');
                return;
            }
            const file = files[0];
            if (!file.type.startsWith('image/')) {
                rejectUpload('That file type is not supported. Please choose an image.');
                return;
            }
            uploadArea.classList.remove('rejected');
            uploadHint.textContent = defaultHint;
            identify(file);
        }

        function rejectUpload(message) {
            uploadArea.classList.add('rejected');
            uploadHint.textContent = message;
        }

        async function identify(file) {
            skeleton.hidden = false;
            resultContainer.hidden = true;

            const formData = new FormData();
            formData.append('file', file);

            try {
                const response = await fetch('/identify', {
                    method: 'POST',
                    body: formData
                });

                if (!response.ok) {
                    let message = 'Failed to identify the image. Please try again.';
                    try {
                        const body = await response.json();
                        if (body.error) {
                            message = body.error;
                        }
                    } catch (ignored) {}
                    throw new Error(message);
                }

                resultContainer.innerHTML = await response.text();
            } catch (err) {
                showToast(err.message);
            } finally {
                skeleton.hidden = true;
                resultContainer.hidden = false;
            }
        }

        function showToast(message) {
            toast.textContent = message;
            toast.hidden = false;
            clearTimeout(toastTimer);
            toastTimer = setTimeout(() => { toast.hidden = true; }, 4000);
        }
    </script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_embeds_widget_and_idle_views() {
        let html = render();
        assert!(html.contains(r#"id="uploadArea""#));
        assert!(html.contains(r#"accept="image/*""#));
        assert!(html.contains("skeleton-card"));
        assert!(html.contains("Upload an image to identify the species"));
        assert!(!html.contains("{{SKELETON}}"));
        assert!(!html.contains("{{EMPTY_STATE}}"));
    }
}
