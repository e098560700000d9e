//! Cleanup and decoding of model replies.
//!
//! The model returns free-form text that usually wraps a JSON object in
//! markdown code fences. [`extract_json`] locates the object and strips the
//! wrapping; [`parse_identification`] turns it into a validated
//! [`IdentificationResult`].

use crate::error::IdentifyError;
use crate::types::IdentificationResult;

/// Extracts the best-effort JSON substring from a model reply.
///
/// Lookup order:
/// 1. the body of a ```` ```json ... ``` ```` fence,
/// 2. the span from the first `{` to the last `}`.
///
/// Embedded raw newlines are removed from the extracted span, so fenced
/// pretty-printed objects clean up to a single parseable line.
pub fn extract_json(response: &str) -> Result<String, IdentifyError> {
    let span = if let Some(open) = response.find("```json") {
        let body = &response[open + "```json".len()..];
        match body.find("```") {
            Some(close) => &body[..close],
            None => body,
        }
    } else {
        match (response.find('{'), response.rfind('}')) {
            (Some(start), Some(end)) if start < end => &response[start..=end],
            _ => {
                return Err(IdentifyError::Parse(
                    "no JSON object in model response".to_string(),
                ))
            }
        }
    };

    let cleaned = span
        .chars()
        .filter(|c| !matches!(c, '\n' | '\r'))
        .collect::<String>()
        .trim()
        .to_string();

    if cleaned.is_empty() {
        return Err(IdentifyError::Parse(
            "no JSON object in model response".to_string(),
        ));
    }
    Ok(cleaned)
}

/// Parses a raw model reply into a validated identification.
pub fn parse_identification(response: &str) -> Result<IdentificationResult, IdentifyError> {
    let json = extract_json(response)?;
    let result: IdentificationResult =
        serde_json::from_str(&json).map_err(|e| IdentifyError::Parse(e.to_string()))?;
    result.validate()?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOX_JSON: &str = r#"{"name":"Red Fox (Vulpes vulpes)","category":"Animal","description":"A small omnivorous canid.","habitat":"Woodland and farmland across the northern hemisphere.","characteristics":["Rust-red coat","White-tipped tail"],"funFacts":["Hunts by pouncing","Found on four continents"]}"#;

    #[test]
    fn fenced_reply_round_trips() {
        let expected: IdentificationResult = serde_json::from_str(FOX_JSON).unwrap();
        let pretty = serde_json::to_string_pretty(&expected).unwrap();
        let reply = format!("Here is the identification:\n```json\n{pretty}\n```\n");

        let cleaned = extract_json(&reply).unwrap();
        let parsed: IdentificationResult = serde_json::from_str(&cleaned).unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn bare_object_passes_through() {
        let cleaned = extract_json(FOX_JSON).unwrap();
        assert_eq!(cleaned, FOX_JSON);
    }

    #[test]
    fn object_is_found_inside_prose() {
        let reply = format!("Sure! The species is:\n{FOX_JSON}\nHope that helps.");
        let parsed = parse_identification(&reply).unwrap();
        assert_eq!(parsed.name.as_deref(), Some("Red Fox (Vulpes vulpes)"));
    }

    #[test]
    fn unlabeled_fences_still_yield_the_object() {
        let reply = format!("```\n{FOX_JSON}\n```");
        let parsed = parse_identification(&reply).unwrap();
        assert_eq!(parsed.category.as_deref(), Some("Animal"));
    }

    #[test]
    fn reply_without_json_is_a_parse_error() {
        let err = extract_json("I cannot identify this image.").unwrap_err();
        assert!(matches!(err, IdentifyError::Parse(_)));
    }

    #[test]
    fn unbalanced_braces_are_a_parse_error() {
        let err = extract_json("} nothing here {").unwrap_err();
        assert!(matches!(err, IdentifyError::Parse(_)));
    }

    #[test]
    fn valid_json_missing_name_fails_validation() {
        let reply = r#"{"category":"Animal","description":"Some creature."}"#;
        let err = parse_identification(reply).unwrap_err();
        assert!(matches!(err, IdentifyError::Validation(_)));
    }
}
