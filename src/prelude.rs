//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions so callers can bring
//! the whole surface in with one `use`.

// Loading and data model
pub use crate::workflow::{
    Connection, ContainerChildren, ToolNode, WorkflowDefinition, clean_container_children,
    container_children, load_workflow, load_workflow_file, parse_workflow,
};

// Graph queries
pub use crate::graph::{InputBinding, WorkflowGraph, adjust_order};

// Conversion planning
pub use crate::convert::{
    CodeTarget, ConversionOutput, ConversionPlanner, GuideBook, TextGenerator, ToolSnippet,
    tool_io_summary,
};

// Error types
pub use crate::error::{ConvertError, GenerateError, GraphError, WorkflowLoadError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
