use derive_more::Display;

/// Simplified error system - one enum, contained at the cycle boundary
#[derive(Debug, Clone, PartialEq, Display)]
pub enum AppError {
    /// Transport failure or a non-2xx response
    #[display(fmt = "Network Error: {}", _0)]
    Network(String),
    /// Body is not JSON, or not a JSON object
    #[display(fmt = "Parse Error: {}", _0)]
    Parse(String),
    /// Missing host element or a failed DOM mutation
    #[display(fmt = "DOM Error: {}", _0)]
    Dom(String),
    #[display(fmt = "Rendering Error: {}", _0)]
    Rendering(String),
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

// Simple convenience type aliases
pub type NetworkResult<T> = Result<T, AppError>;
pub type RenderingResult<T> = Result<T, AppError>;
pub type DomResult<T> = Result<T, AppError>;
