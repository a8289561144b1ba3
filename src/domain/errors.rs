/// Simplified error system - one enum for the whole interaction layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Transport-level failure (request never produced a response).
    Network(String),
    /// Non-success HTTP status from the backend.
    Http(u16),
    /// Response body could not be decoded.
    Parse(String),
    /// Logical error reported by the backend in its JSON `error` field.
    Api(String),
    /// Local input validation failure.
    Validation(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network Error: {}", msg),
            AppError::Http(status) => write!(f, "HTTP Error: status {}", status),
            AppError::Parse(msg) => write!(f, "Parse Error: {}", msg),
            AppError::Api(msg) => write!(f, "API Error: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Message suitable for inline display. Backend-reported and validation
    /// errors are shown verbatim; transport and decode failures collapse into
    /// a generic notice.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Api(msg) | AppError::Validation(msg) => msg.clone(),
            AppError::Http(status) => format!("Request failed with status {}", status),
            AppError::Network(_) | AppError::Parse(_) => {
                "Unable to load data. Please try again.".to_string()
            }
        }
    }
}

pub type NetworkResult<T> = Result<T, AppError>;
