//! Error types for the identification pipeline.
//!
//! Every failure mode of a single identification attempt maps onto one
//! variant here; the [`IntoResponse`] impl turns them into the fixed JSON
//! error bodies the HTTP surface promises. No variant is fatal to the
//! process.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while identifying an uploaded image.
#[derive(Error, Debug)]
pub enum IdentifyError {
    /// The request carried no usable image file.
    #[error("no image file provided")]
    MissingImage,

    /// The call to the generative model failed (transport, HTTP status, or
    /// a reply with no text candidate).
    #[error("upstream model call failed: {0}")]
    Upstream(String),

    /// The model's text reply did not contain valid JSON after cleanup.
    #[error("model response is not valid JSON: {0}")]
    Parse(String),

    /// The parsed JSON is missing required identification fields.
    #[error("model response failed validation: {0}")]
    Validation(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl IdentifyError {
    fn status(&self) -> StatusCode {
        match self {
            IdentifyError::MissingImage => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The user-facing message. Upstream and parse detail is deliberately
    /// collapsed into generic text; the full variant is logged instead.
    fn public_message(&self) -> &'static str {
        match self {
            IdentifyError::MissingImage => "No image file provided",
            IdentifyError::Parse(_) | IdentifyError::Validation(_) => {
                "Failed to analyze the image. Please try again."
            }
            IdentifyError::Upstream(_) => "An unexpected error occurred. Please try again.",
        }
    }
}

impl IntoResponse for IdentifyError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "identification attempt failed");
        let body = ErrorBody {
            error: self.public_message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_image_is_a_bad_request() {
        assert_eq!(IdentifyError::MissingImage.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            IdentifyError::MissingImage.public_message(),
            "No image file provided"
        );
    }

    #[test]
    fn parse_and_validation_share_the_analysis_failure_message() {
        let parse = IdentifyError::Parse("bad json".into());
        let validation = IdentifyError::Validation("no name".into());
        assert_eq!(parse.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(parse.public_message(), validation.public_message());
    }

    #[test]
    fn upstream_failures_read_as_unexpected() {
        let err = IdentifyError::Upstream("connection refused".into());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.public_message(),
            "An unexpected error occurred. Please try again."
        );
    }
}
