//! Shared identification result contract.
//!
//! The shape is whatever the vision model chose to return, coerced into JSON,
//! so every field is optional or defaulted and consumers substitute
//! placeholders rather than assuming presence.

use serde::{Deserialize, Serialize};

use crate::error::IdentifyError;

/// A single species identification as returned by the model.
///
/// Field names are camelCase on the wire. `habitat` also accepts the
/// `foundIn` spelling some model replies use.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct IdentificationResult {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "foundIn")]
    pub habitat: Option<String>,
    pub characteristics: Vec<String>,
    pub fun_facts: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specifications: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dangerousness: Option<String>,
}

impl IdentificationResult {
    /// Checks the minimum shape an identification must have before it is
    /// worth presenting: a name, a category, and a description.
    pub fn validate(&self) -> Result<(), IdentifyError> {
        let required = [
            ("name", &self.name),
            ("category", &self.category),
            ("description", &self.description),
        ];
        for (field, value) in required {
            match value {
                Some(text) if !text.trim().is_empty() => {}
                _ => {
                    return Err(IdentifyError::Validation(format!(
                        "missing required field `{field}`"
                    )))
                }
            }
        }
        Ok(())
    }
}

/// The closed category set the prompt asks for, plus a fallback for anything
/// else the model invents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Animal,
    Bird,
    Plant,
    Unknown,
}

impl Category {
    pub fn parse(label: Option<&str>) -> Self {
        match label {
            Some("Animal") => Category::Animal,
            Some("Bird") => Category::Bird,
            Some("Plant") => Category::Plant,
            _ => Category::Unknown,
        }
    }

    /// Display glyph for the category badge.
    pub fn glyph(self) -> &'static str {
        match self {
            Category::Animal => "\u{1F43E}",
            Category::Bird => "\u{1F426}",
            Category::Plant => "\u{1F33F}",
            Category::Unknown => "\u{2753}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_in_alias_lands_in_habitat() {
        let result: IdentificationResult =
            serde_json::from_str(r#"{"name":"Oak","foundIn":"Temperate forests"}"#).unwrap();
        assert_eq!(result.habitat.as_deref(), Some("Temperate forests"));
    }

    #[test]
    fn missing_fields_default_instead_of_failing() {
        let result: IdentificationResult = serde_json::from_str("{}").unwrap();
        assert!(result.name.is_none());
        assert!(result.characteristics.is_empty());
        assert!(result.fun_facts.is_empty());
        assert!(result.specifications.is_none());
    }

    #[test]
    fn validate_requires_name_category_description() {
        let mut result = IdentificationResult {
            name: Some("Red Fox (Vulpes vulpes)".into()),
            category: Some("Animal".into()),
            description: Some("A small omnivorous canid.".into()),
            ..Default::default()
        };
        assert!(result.validate().is_ok());

        result.category = Some("   ".into());
        let err = result.validate().unwrap_err();
        assert!(err.to_string().contains("category"));
    }

    #[test]
    fn unrecognized_categories_fall_back() {
        assert_eq!(Category::parse(Some("Bird")), Category::Bird);
        assert_eq!(Category::parse(Some("Fungus")), Category::Unknown);
        assert_eq!(Category::parse(None), Category::Unknown);
        assert_eq!(Category::parse(Some("animal")), Category::Unknown);
    }
}
