use ahash::AHashSet;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::workflow::Connection;

/// One incoming connection of a tool: where the data comes from and which
/// input port it lands on. Multiplicity is preserved, so a tool with three
/// incoming edges yields three bindings even if two share an origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputBinding {
    pub source_id: String,
    pub source_port: String,
    pub input_port: String,
}

pub(super) fn predecessors(connections: &[Connection], tool_id: &str) -> Vec<String> {
    connections
        .iter()
        .filter(|c| c.destination_id == tool_id)
        .map(|c| c.origin_id.clone())
        .unique()
        .collect()
}

pub(super) fn successors(connections: &[Connection], tool_id: &str) -> Vec<String> {
    connections
        .iter()
        .filter(|c| c.origin_id == tool_id)
        .map(|c| c.destination_id.clone())
        .unique()
        .collect()
}

/// Tools that appear as an origin but never as a destination.
pub(super) fn source_tools(connections: &[Connection]) -> Vec<String> {
    let destinations: AHashSet<&str> = connections
        .iter()
        .map(|c| c.destination_id.as_str())
        .collect();

    connections
        .iter()
        .map(|c| c.origin_id.as_str())
        .filter(|id| !destinations.contains(id))
        .unique()
        .sorted_unstable()
        .map(str::to_string)
        .collect()
}

/// Distinct outgoing port names of a tool, in first-use order. Each distinct
/// port is one named output stream for the code-generation layer.
pub(super) fn output_ports(connections: &[Connection], tool_id: &str) -> Vec<String> {
    connections
        .iter()
        .filter(|c| c.origin_id == tool_id)
        .map(|c| c.origin_port.clone())
        .unique()
        .collect()
}

pub(super) fn input_bindings(connections: &[Connection], tool_id: &str) -> Vec<InputBinding> {
    connections
        .iter()
        .filter(|c| c.destination_id == tool_id)
        .map(|c| InputBinding {
            source_id: c.origin_id.clone(),
            source_port: c.origin_port.clone(),
            input_port: c.destination_port.clone(),
        })
        .collect()
}
