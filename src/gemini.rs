//! Client for the Gemini `generateContent` REST endpoint.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::IdentifyError;
use crate::parser;
use crate::types::IdentificationResult;

/// The fixed identification prompt. It pins the reply to an exact JSON shape
/// so the parser and renderer have a stable contract to work against.
const IDENTIFY_PROMPT: &str = r#"You are a nature expert. Please analyze this image and identify the species shown.
Provide a detailed response in this exact JSON format:
{
  "name": "[Common Name] ([Scientific Name])",
  "category": "[one of: Animal, Bird, or Plant]",
  "description": "[2-3 sentences describing the species]",
  "habitat": "[natural habitat and geographic distribution]",
  "characteristics": [
    "[physical characteristic 1]",
    "[physical characteristic 2]",
    "[physical characteristic 3]",
    "[physical characteristic 4]"
  ],
  "funFacts": [
    "[interesting fact 1]",
    "[interesting fact 2]",
    "[interesting fact 3]"
  ]
}"#;

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    InlineData { inline_data: InlineData },
    Text { text: String },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct CandidateContent {
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct CandidatePart {
    text: String,
}

/// A configured Gemini client. Construct once from [`Config`] and share via
/// application state.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model_name: String,
    api_base: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.gemini_api_key.clone(),
            model_name: config.model_name.clone(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Sends the image to the model and decodes the identification it
    /// returns. One network round trip, no retries.
    pub async fn identify(
        &self,
        image_base64: &str,
        mime_type: &str,
    ) -> Result<IdentificationResult, IdentifyError> {
        let reply = self.generate(image_base64, mime_type).await?;
        parser::parse_identification(&reply)
    }

    async fn generate(
        &self,
        image_base64: &str,
        mime_type: &str,
    ) -> Result<String, IdentifyError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.api_base, self.model_name, self.api_key
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: mime_type.to_string(),
                            data: image_base64.to_string(),
                        },
                    },
                    Part::Text {
                        text: IDENTIFY_PROMPT.to_string(),
                    },
                ],
            }],
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| IdentifyError::Upstream(format!("model request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, model = %self.model_name, "model endpoint returned an error");
            return Err(IdentifyError::Upstream(format!(
                "model endpoint returned {status}: {body}"
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| IdentifyError::Upstream(format!("unreadable model response: {e}")))?;

        body.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                IdentifyError::Upstream("no text candidate in model response".to_string())
            })
    }
}
