use thiserror::Error;

#[derive(Debug, Error)]
pub enum NodeflowError {
    // Graph errors
    #[error("Circular dependency detected involving node {0}")]
    CircularDependency(String),

    #[error("Node not found: {0}")]
    NodeNotFound(String),

    // Executor errors
    #[error("No input text provided")]
    EmptyInput,

    #[error("No input received from previous nodes")]
    MissingInput,

    // Bridge errors
    #[error("Bridge request failed: {0}")]
    BridgeRequest(String),

    #[error("Bridge response parse error: {0}")]
    BridgeParse(String),

    // Config errors
    #[error("Config error: {0}")]
    Config(String),

    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NodeflowError>;
