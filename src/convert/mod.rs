//! Deterministic glue between the graph layer and a text-generating model:
//! prompt rendering, per-tool guidance lookup, and the two-phase conversion
//! planner. Everything here is plain string building; the model itself sits
//! behind the [`TextGenerator`] trait.

pub mod generator;
pub mod guide;
pub mod target;
pub mod template;

pub use generator::*;
pub use guide::*;
pub use target::*;
pub use template::{combine_prompt, input_names, output_names, stream_name, tool_io_summary, tool_prompt};
