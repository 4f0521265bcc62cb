use thiserror::Error;

/// Failure of one remote call, caught at the issuing feature's boundary.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (connection refused, CORS, DNS).
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered outside 2xx. `message` is the body's `error` field, if any.
    #[error("Server error {status}: {}", message.as_deref().unwrap_or("no details"))]
    Status { status: u16, message: Option<String> },

    /// The body did not have the shape the endpoint promises.
    #[error("Parse error: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn decode(message: impl Into<String>) -> Self {
        ApiError::Decode(message.into())
    }

    /// The backend-supplied error text of a non-2xx reply.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}
