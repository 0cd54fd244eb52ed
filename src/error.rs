//! Defines the unified error type for all pipeline operations.

use cascade_css::CssError;
use cascade_traits::{RepositoryError, SinkError};
use thiserror::Error;

/// The main error enum for all high-level operations within the engine.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Token repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("File sink error: {0}")]
    Sink(#[from] SinkError),
    #[error("CSS generation error: {0}")]
    Css(#[from] CssError),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Other pipeline error: {0}")]
    Other(String),
}
