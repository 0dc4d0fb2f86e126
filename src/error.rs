use thiserror::Error;

/// Raised while resolving configuration at startup. Always fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} not found. Set it as an environment variable or add it to a .env file.")]
    MissingApiKey { var: &'static str },

    #[error("could not build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// A user action was triggered without the input it needs.
/// Shown as a warning; the session is left as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please describe your dream first.")]
    EmptyDream,

    #[error("Generate a story first.")]
    MissingStory,
}

/// The remote text service did not produce any text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("the API key was rejected (HTTP {status})")]
    Unauthorized { status: u16 },

    #[error("service error (HTTP {status}): {message}")]
    Service { status: u16, message: String },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("the service returned no text{}", .reason.as_deref().map(|r| format!(" ({r})")).unwrap_or_default())]
    EmptyResponse { reason: Option<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_response_mentions_block_reason() {
        let err = GenerationError::EmptyResponse {
            reason: Some("SAFETY".into()),
        };
        assert_eq!(err.to_string(), "the service returned no text (SAFETY)");

        let err = GenerationError::EmptyResponse { reason: None };
        assert_eq!(err.to_string(), "the service returned no text");
    }

    #[test]
    fn http_client_error_keeps_its_source() {
        use std::error::Error as _;

        let reqwest_err = reqwest::blocking::Client::builder()
            .user_agent("bad\nagent")
            .build()
            .unwrap_err();
        let err = ConfigError::HttpClient(reqwest_err);

        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("could not build HTTP client: "));
    }

    #[test]
    fn missing_key_names_the_variable() {
        let err = ConfigError::MissingApiKey {
            var: "GEMINI_API_KEY",
        };
        assert!(err.to_string().starts_with("GEMINI_API_KEY not found."));
    }
}
