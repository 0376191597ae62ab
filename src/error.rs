use thiserror::Error;

/// Errors that can occur while parsing a workflow document.
#[derive(Error, Debug, Clone)]
pub enum WorkflowLoadError {
    #[error("Failed to parse workflow XML: {0}")]
    Xml(String),

    #[error("Failed to read workflow file '{path}': {message}")]
    Io { path: String, message: String },
}

/// Errors raised by graph queries over a loaded workflow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Cycle detected in workflow connections, involving tool '{0}'")]
    CycleDetected(String),
}

/// Errors produced by a [`TextGenerator`](crate::convert::TextGenerator) implementation.
#[derive(Error, Debug, Clone)]
pub enum GenerateError {
    #[error("Text generation failed: {0}")]
    Generation(String),
}

/// Errors that can occur while planning and running a workflow conversion.
#[derive(Error, Debug, Clone)]
pub enum ConvertError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Generate(#[from] GenerateError),
}
