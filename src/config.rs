use std::env;

/// Public Gemini REST endpoint base.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Runtime configuration, read once at startup and passed by reference into
/// the pieces that need it.
#[derive(Clone, Debug)]
pub struct Config {
    pub gemini_api_key: String,
    pub model_name: String,
    pub api_base: String,
    pub bind_addr: String,
}

impl Config {
    /// Loads configuration from the environment, consulting a `.env` file if
    /// one exists.
    ///
    /// A missing `GEMINI_API_KEY` is not a startup error: the key defaults to
    /// an empty string and the upstream call fails authentication at request
    /// time instead.
    pub fn load() -> Self {
        let _ = dotenvy::dotenv();

        let gemini_api_key = env::var("GEMINI_API_KEY").unwrap_or_else(|_| {
            tracing::warn!("GEMINI_API_KEY is not set; identification requests will fail upstream");
            String::new()
        });

        let model_name =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-1.5-flash".to_string());

        let api_base = env::var("GEMINI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        Self {
            gemini_api_key,
            model_name,
            api_base,
            bind_addr,
        }
    }
}
