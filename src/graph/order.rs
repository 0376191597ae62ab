use ahash::AHashMap;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};

use crate::error::GraphError;
use crate::workflow::Connection;

/// Computes a topological execution order over all graph vertices.
///
/// Vertices are the node-table ids plus every connection endpoint, so dangling
/// endpoints still take part in the ordering. Vertices are inserted in
/// ascending id order, which makes the result deterministic across repeated
/// calls on the same input; the order among unconstrained vertices is
/// otherwise unspecified.
pub(super) fn execution_order(
    node_ids: &[&str],
    connections: &[Connection],
) -> Result<Vec<String>, GraphError> {
    let mut vertex_ids: Vec<&str> = node_ids.to_vec();
    vertex_ids.extend(
        connections
            .iter()
            .flat_map(|c| [c.origin_id.as_str(), c.destination_id.as_str()]),
    );
    vertex_ids.sort_unstable();
    vertex_ids.dedup();

    let mut graph: StableDiGraph<&str, ()> = StableDiGraph::new();
    let mut index_map: AHashMap<&str, NodeIndex> = AHashMap::with_capacity(vertex_ids.len());
    for id in vertex_ids {
        index_map.insert(id, graph.add_node(id));
    }

    // Ports are collapsed away; parallel edges are harmless for ordering.
    for connection in connections {
        if let (Some(&origin), Some(&destination)) = (
            index_map.get(connection.origin_id.as_str()),
            index_map.get(connection.destination_id.as_str()),
        ) {
            graph.add_edge(origin, destination, ());
        }
    }

    match petgraph::algo::toposort(&graph, None) {
        Ok(order) => Ok(order
            .into_iter()
            .filter_map(|index| graph.node_weight(index).map(|id| (*id).to_string()))
            .collect()),
        Err(cycle) => {
            let tool_id = graph
                .node_weight(cycle.node_id())
                .map(|id| (*id).to_string())
                .unwrap_or_default();
            Err(GraphError::CycleDetected(tool_id))
        }
    }
}

/// Reorders an arbitrary subset of tool ids to match a reference execution order.
///
/// Ids absent from the reference are placed after all known ids, keeping their
/// original relative order among themselves (stable sort).
pub fn adjust_order(tool_ids: &[String], execution_sequence: &[String]) -> Vec<String> {
    let position: AHashMap<&str, usize> = execution_sequence
        .iter()
        .enumerate()
        .map(|(index, id)| (id.as_str(), index))
        .collect();

    let mut ordered = tool_ids.to_vec();
    ordered.sort_by_key(|id| position.get(id.as_str()).copied().unwrap_or(usize::MAX));
    ordered
}
