use thiserror::Error;

/// Failures from a generative backend.
///
/// Only [`MissingCredential`](GenerateError::MissingCredential) and
/// [`ClientBuild`](GenerateError::ClientBuild) reach callers as errors, at
/// construction time. Everything else is turned into user-visible
/// placeholder text by [`placeholder`](GenerateError::placeholder).
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("{var} is not set")]
    MissingCredential { var: &'static str },

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("API error: {message}")]
    Api { message: String },

    #[error("content blocked: {reason}")]
    Blocked { reason: String },

    #[error("response had no content")]
    EmptyCandidate,
}

pub const EMPTY_CANDIDATE_PLACEHOLDER: &str =
    "Sorry, I received an unexpected response format from the AI.";

impl GenerateError {
    /// Text shown to the user in place of generated output.
    pub fn placeholder(&self, provider: &str) -> String {
        match self {
            GenerateError::Blocked { reason } => format!("[Content blocked by API: {reason}]"),
            GenerateError::EmptyCandidate => EMPTY_CANDIDATE_PLACEHOLDER.to_string(),
            _ => format!("An error occurred while trying to generate text with {provider}."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders() {
        let blocked = GenerateError::Blocked {
            reason: "SAFETY".into(),
        };
        assert_eq!(blocked.placeholder("Gemini"), "[Content blocked by API: SAFETY]");
        assert_eq!(
            GenerateError::EmptyCandidate.placeholder("Gemini"),
            "Sorry, I received an unexpected response format from the AI."
        );
        let status = GenerateError::Status {
            status: 500,
            body: "boom".into(),
        };
        assert_eq!(
            status.placeholder("Gemini"),
            "An error occurred while trying to generate text with Gemini."
        );
        assert_eq!(
            GenerateError::Api {
                message: "model not found".into()
            }
            .placeholder("the local model"),
            "An error occurred while trying to generate text with the local model."
        );
    }

    #[test]
    fn missing_credential_message() {
        let err = GenerateError::MissingCredential {
            var: "GOOGLE_API_KEY",
        };
        assert_eq!(err.to_string(), "GOOGLE_API_KEY is not set");
    }
}
