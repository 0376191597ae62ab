//! # ayxflow - Alteryx Workflow Graph Extraction and Conversion Planning
//!
//! **ayxflow** turns Alteryx workflow XML into a queryable node/edge model and
//! plans the prompts needed to convert each tool into Python or SQL with a
//! text-generating model. The deterministic core is the graph layer: loading
//! the document into flat node and connection tables, computing a topological
//! execution order, and answering reachability and I/O questions about
//! individual tools. The model call itself sits behind a trait; this crate
//! never talks to a network.
//!
//! ## Core Workflow
//!
//! 1. **Load**: [`workflow::load_workflow`] parses the document into a
//!    [`workflow::WorkflowDefinition`] (one row per tool, one row per
//!    connection). Malformed documents degrade to an empty definition with a
//!    logged warning instead of an error.
//! 2. **Analyze**: [`graph::WorkflowGraph`] answers ordering questions -
//!    execution order, predecessors/successors, named outputs, linear chains.
//! 3. **Plan**: [`convert::ConversionPlanner`] renders one prompt per tool
//!    (configuration payload, I/O variable names, optional per-type guidance)
//!    and a final combine prompt, feeding them to your
//!    [`convert::TextGenerator`] implementation.
//!
//! ## Quick Start
//!
//! ```rust
//! use ayxflow::graph::WorkflowGraph;
//! use ayxflow::workflow::load_workflow;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let xml = r#"
//! <AlteryxDocument yxmdVer="2021.4">
//!   <Nodes>
//!     <Node ToolID="1">
//!       <GuiSettings Plugin="AlteryxBasePluginsGui.DbFileInput.DbFileInput" />
//!     </Node>
//!     <Node ToolID="2">
//!       <GuiSettings Plugin="AlteryxBasePluginsGui.Filter.Filter" />
//!     </Node>
//!   </Nodes>
//!   <Connections>
//!     <Connection>
//!       <Origin ToolID="1" Connection="Output" />
//!       <Destination ToolID="2" Connection="Input" />
//!     </Connection>
//!   </Connections>
//! </AlteryxDocument>
//! "#;
//!
//! let def = load_workflow(xml);
//! assert_eq!(def.nodes.len(), 2);
//! assert_eq!(def.nodes[1].tool_type, "Filter");
//!
//! let graph = WorkflowGraph::new(&def);
//! let order = graph.execution_order()?;
//! assert_eq!(order, vec!["1".to_string(), "2".to_string()]);
//! assert_eq!(graph.successors("1"), vec!["2".to_string()]);
//! # Ok(())
//! # }
//! ```

pub mod convert;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod workflow;
