//! HTML rendering of the identification views.
//!
//! Pure string builders, no I/O. The card must survive any combination of
//! absent fields in the model output, substituting fixed placeholder lines
//! instead of dropping sections.

use crate::types::{Category, IdentificationResult};

const NO_DESCRIPTION: &str = "No description available.";
const NO_HABITAT: &str = "No habitat information available.";
const NO_CHARACTERISTICS: &str = "No characteristics available.";
const NO_FUN_FACTS: &str = "No fun facts available.";
const UNKNOWN_NAME: &str = "Unknown species";
const UNKNOWN_CATEGORY: &str = "Unknown";

/// Escapes model-supplied text for embedding in HTML.
fn esc(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn list_section(title: &str, items: &[String], fallback: &str) -> String {
    let body = if items.is_empty() {
        format!("<li>{}</li>", esc(fallback))
    } else {
        items
            .iter()
            .map(|item| format!("<li>{}</li>", esc(item)))
            .collect::<Vec<_>>()
            .join("")
    };
    format!("<section><h3>{title}</h3><ul>{body}</ul></section>")
}

fn text_section(title: &str, value: Option<&str>, fallback: &str) -> String {
    let text = match value {
        Some(v) if !v.trim().is_empty() => esc(v),
        _ => esc(fallback),
    };
    format!("<section><h3>{title}</h3><p>{text}</p></section>")
}

/// Renders the populated result card.
///
/// `image_data_url` is the uploaded image as a `data:` URL for redisplay
/// beside the identification; `None` omits the photo block.
pub fn result_card(result: &IdentificationResult, image_data_url: Option<&str>) -> String {
    let mut html = String::from(r#"<article class="result-card">"#);

    if let Some(src) = image_data_url {
        html.push_str(&format!(
            r#"<div class="result-photo"><img src="{src}" alt="Uploaded image"></div>"#
        ));
    }

    let name = result
        .name
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or(UNKNOWN_NAME);
    let category_label = result
        .category
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(UNKNOWN_CATEGORY);
    let glyph = Category::parse(result.category.as_deref()).glyph();

    html.push_str(&format!(
        r#"<header class="result-header"><span class="category-glyph">{glyph}</span><h2>{}</h2></header>"#,
        esc(name)
    ));
    html.push_str(&format!(
        r#"<span class="category-badge">{}</span>"#,
        esc(category_label)
    ));

    html.push_str(&text_section(
        "Description",
        result.description.as_deref(),
        NO_DESCRIPTION,
    ));
    html.push_str(&text_section(
        "Habitat",
        result.habitat.as_deref(),
        NO_HABITAT,
    ));
    html.push_str(&list_section(
        "Characteristics",
        &result.characteristics,
        NO_CHARACTERISTICS,
    ));
    html.push_str(&list_section("Fun Facts", &result.fun_facts, NO_FUN_FACTS));

    if let Some(specs) = result.specifications.as_deref().filter(|s| !s.is_empty()) {
        html.push_str(&list_section("Specifications", specs, ""));
    }
    if result.weight.is_some() {
        html.push_str(&text_section("Weight", result.weight.as_deref(), ""));
    }
    if result.dangerousness.is_some() {
        html.push_str(&text_section(
            "Dangerousness",
            result.dangerousness.as_deref(),
            "",
        ));
    }

    html.push_str("</article>");
    html
}

/// The prompt shown before any upload has happened.
pub fn empty_state() -> String {
    concat!(
        r#"<div class="empty-state">"#,
        "<div class=\"empty-icons\"><span>\u{1F426}</span><span>\u{1F33F}</span><span>\u{1F43E}</span></div>",
        r#"<p>Upload an image to identify the species</p>"#,
        r#"<p class="empty-hint">Animals, birds, and plants are supported.</p>"#,
        "</div>"
    )
    .to_string()
}

/// Placeholder card shown while an identification is in flight.
pub fn loading_skeleton() -> String {
    concat!(
        r#"<div class="skeleton-card">"#,
        r#"<div class="skeleton-line w-75"></div>"#,
        r#"<div class="skeleton-line"></div>"#,
        r#"<div class="skeleton-line"></div>"#,
        r#"<div class="skeleton-line w-75"></div>"#,
        "</div>"
    )
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fox() -> IdentificationResult {
        IdentificationResult {
            name: Some("Red Fox (Vulpes vulpes)".into()),
            category: Some("Animal".into()),
            description: Some("A small omnivorous canid.".into()),
            habitat: Some("Woodland and farmland.".into()),
            characteristics: vec!["Rust-red coat".into(), "White-tipped tail".into()],
            fun_facts: vec!["Hunts by pouncing".into()],
            ..Default::default()
        }
    }

    #[test]
    fn populated_card_lists_every_characteristic() {
        let html = result_card(&fox(), None);
        assert!(html.contains("Red Fox (Vulpes vulpes)"));
        assert!(html.contains(r#"<span class="category-badge">Animal</span>"#));
        assert!(html.contains("<li>Rust-red coat</li>"));
        assert!(html.contains("<li>White-tipped tail</li>"));
        assert!(html.contains("<li>Hunts by pouncing</li>"));
    }

    #[test]
    fn missing_characteristics_render_a_fallback_line() {
        let mut result = fox();
        result.characteristics.clear();
        let html = result_card(&result, None);
        assert!(html.contains("<li>No characteristics available.</li>"));
    }

    #[test]
    fn missing_description_renders_the_placeholder() {
        let mut result = fox();
        result.description = None;
        let html = result_card(&result, None);
        assert!(html.contains("No description available."));
    }

    #[test]
    fn unknown_category_falls_back_to_the_default_glyph() {
        let mut result = fox();
        result.category = Some("Fungus".into());
        let html = result_card(&result, None);
        assert!(html.contains(Category::Unknown.glyph()));
        assert!(html.contains("Fungus"));
        assert!(html.contains("Red Fox (Vulpes vulpes)"));
        assert!(html.contains("A small omnivorous canid."));
    }

    #[test]
    fn absent_category_still_renders_name_and_badge() {
        let mut result = fox();
        result.category = None;
        let html = result_card(&result, None);
        assert!(html.contains(r#"<span class="category-badge">Unknown</span>"#));
        assert!(html.contains("Red Fox (Vulpes vulpes)"));
    }

    #[test]
    fn model_text_is_escaped() {
        let mut result = fox();
        result.name = Some("<script>alert(1)</script>".into());
        let html = result_card(&result, None);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn image_data_url_is_embedded_when_present() {
        let html = result_card(&fox(), Some("data:image/jpeg;base64,AAAA"));
        assert!(html.contains(r#"src="data:image/jpeg;base64,AAAA""#));
    }

    #[test]
    fn extended_sections_appear_only_when_present() {
        let mut result = fox();
        let html = result_card(&result, None);
        assert!(!html.contains("Dangerousness"));

        result.dangerousness = Some("Generally shy of humans.".into());
        result.weight = Some("5-7 kg".into());
        result.specifications = Some(vec!["Body length 45-90 cm".into()]);
        let html = result_card(&result, None);
        assert!(html.contains("Dangerousness"));
        assert!(html.contains("5-7 kg"));
        assert!(html.contains("<li>Body length 45-90 cm</li>"));
    }

    #[test]
    fn idle_views_are_distinct_and_nonempty() {
        let empty = empty_state();
        let skeleton = loading_skeleton();
        assert!(empty.contains("Upload an image"));
        assert!(skeleton.contains("skeleton-card"));
        assert_ne!(empty, skeleton);
    }
}
