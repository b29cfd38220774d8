use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudioError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Timeline error: {0}")]
    Timeline(String),
    #[error("Service error: {0}")]
    Service(String),
    #[error("Permission denied: {0}")]
    Permission(String),
    #[error("Capture error: {0}")]
    Capture(String),
    #[error("Operation already in flight: {0}")]
    Busy(String),
    #[error("Runtime error: {0}")]
    Runtime(String),
}
