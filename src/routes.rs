//! HTTP surface: the page, the browser identification route, and the JSON
//! API variant. Both POST routes share one intake -> encode -> identify
//! pipeline; they differ only in how the result is presented.

use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use base64::engine::general_purpose;
use base64::Engine as _;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::IdentifyError;
use crate::gemini::GeminiClient;
use crate::page;
use crate::render;
use crate::types::IdentificationResult;

const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub gemini: GeminiClient,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/identify", post(identify_card))
        .route("/api/identify", post(identify_json))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Html<String> {
    Html(page::render())
}

/// POST /api/identify - multipart image in, identification JSON out.
async fn identify_json(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<IdentificationResult>, IdentifyError> {
    let upload = read_image_field(multipart).await?;
    let result = state
        .gemini
        .identify(&upload.base64, &upload.mime_type)
        .await?;
    log_identified(&result);
    Ok(Json(result))
}

/// POST /identify - same pipeline, but the reply is the rendered result card
/// the page swaps into its result container.
async fn identify_card(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, IdentifyError> {
    let upload = read_image_field(multipart).await?;
    let result = state
        .gemini
        .identify(&upload.base64, &upload.mime_type)
        .await?;
    log_identified(&result);
    Ok(Html(render::result_card(&result, Some(&upload.data_url()))))
}

fn log_identified(result: &IdentificationResult) {
    tracing::info!(
        name = result.name.as_deref().unwrap_or("unknown"),
        category = result.category.as_deref().unwrap_or("unknown"),
        "species identified"
    );
}

struct ImageUpload {
    base64: String,
    mime_type: String,
}

impl ImageUpload {
    fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64)
    }
}

/// Pulls the `file` field out of the multipart body and base64-encodes it.
///
/// The MIME type is taken from the part's declared content type when it looks
/// like an image type, then from byte sniffing, then defaults to JPEG. The
/// bytes themselves are forwarded untouched.
async fn read_image_field(mut multipart: Multipart) -> Result<ImageUpload, IdentifyError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| IdentifyError::Upstream(format!("unreadable multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let declared = field.content_type().map(str::to_owned);
        let data = field
            .bytes()
            .await
            .map_err(|e| IdentifyError::Upstream(format!("failed to read upload: {e}")))?;
        if data.is_empty() {
            continue;
        }
        let mime_type = declared
            .filter(|ct| ct.starts_with("image/"))
            .or_else(|| sniff_mime(&data).map(str::to_owned))
            .unwrap_or_else(|| "image/jpeg".to_string());
        return Ok(ImageUpload {
            base64: general_purpose::STANDARD.encode(&data),
            mime_type,
        });
    }
    Err(IdentifyError::MissingImage)
}

fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    match image::guess_format(bytes).ok()? {
        image::ImageFormat::Png => Some("image/png"),
        image::ImageFormat::Jpeg => Some("image/jpeg"),
        image::ImageFormat::Gif => Some("image/gif"),
        image::ImageFormat::WebP => Some("image/webp"),
        _ => None,
    }
}
