//! Ordering and reachability queries over a loaded workflow.
//!
//! All queries are pure functions over the node and connection tables; the
//! graph borrows the definition it was built from and performs no I/O.

mod chains;
mod io;
mod order;

pub use io::InputBinding;
pub use order::adjust_order;

use crate::error::GraphError;
use crate::workflow::{Connection, ToolNode, WorkflowDefinition};

/// The directed graph whose vertices are tool ids and whose edges are
/// connections collapsed to (origin, destination) pairs.
pub struct WorkflowGraph<'a> {
    node_ids: Vec<&'a str>,
    connections: &'a [Connection],
}

impl<'a> WorkflowGraph<'a> {
    pub fn new(def: &'a WorkflowDefinition) -> Self {
        Self::from_parts(&def.nodes, &def.connections)
    }

    pub fn from_parts(nodes: &'a [ToolNode], connections: &'a [Connection]) -> Self {
        Self {
            node_ids: nodes.iter().map(|n| n.id.as_str()).collect(),
            connections,
        }
    }

    /// Returns all tool ids in a valid execution order.
    ///
    /// Fails with [`GraphError::CycleDetected`] when no such order exists; a
    /// valid workflow is acyclic, so a cycle means a malformed document or a
    /// parsing defect. No partial result is produced in that case.
    pub fn execution_order(&self) -> Result<Vec<String>, GraphError> {
        order::execution_order(&self.node_ids, self.connections)
    }

    /// Distinct origin ids of all connections arriving at `tool_id`.
    pub fn predecessors(&self, tool_id: &str) -> Vec<String> {
        io::predecessors(self.connections, tool_id)
    }

    /// Distinct destination ids of all connections leaving `tool_id`.
    pub fn successors(&self, tool_id: &str) -> Vec<String> {
        io::successors(self.connections, tool_id)
    }

    /// Tools with no incoming connection, ascending id order.
    pub fn source_tools(&self) -> Vec<String> {
        io::source_tools(self.connections)
    }

    /// Distinct outgoing port names of `tool_id`, in first-use order.
    pub fn output_ports(&self, tool_id: &str) -> Vec<String> {
        io::output_ports(self.connections, tool_id)
    }

    /// One binding per incoming connection of `tool_id`, multiplicity preserved.
    pub fn input_bindings(&self, tool_id: &str) -> Vec<InputBinding> {
        io::input_bindings(self.connections, tool_id)
    }

    /// Maximal linear chains over the connection set: an edge-partition into
    /// simple paths whose interior vertices have exactly one input and one
    /// output.
    pub fn linear_chains(&self) -> Vec<Vec<String>> {
        chains::linear_chains(self.connections)
    }
}
