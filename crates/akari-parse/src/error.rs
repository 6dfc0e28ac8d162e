#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("authentication rejected by {provider}")]
    Auth { provider: &'static str },

    #[error("{provider} API error (status {status}): {message}")]
    Api {
        provider: &'static str,
        status: u16,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, ParseError>;
