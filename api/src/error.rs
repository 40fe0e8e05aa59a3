use thiserror::Error;

/// Failures surfaced by the API client.
///
/// None of these are retried automatically; callers decide whether to
/// offer the user another attempt.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned status {status}{}", message_suffix(.message))]
    Status {
        status: u16,
        message: Option<String>,
    },

    #[error("Credential storage error: {0}")]
    Storage(String),

    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

impl ApiError {
    /// Message suitable for showing next to a form: the server's own
    /// explanation when it sent one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}
