use ahash::{AHashMap, AHashSet};

use crate::workflow::Connection;

/// Partitions the connection set into maximal linear chains.
///
/// A chain is a simple path where every interior vertex has exactly one
/// incoming and one outgoing edge. Branch points, merge points and true
/// sources start new chains; every collapsed edge is consumed exactly once.
/// This is an edge-partition, not a vertex-partition: a vertex with degree
/// greater than one appears as the shared endpoint of several chains.
pub(super) fn linear_chains(connections: &[Connection]) -> Vec<Vec<String>> {
    let mut adjacency: AHashMap<&str, Vec<&str>> = AHashMap::new();
    let mut in_degree: AHashMap<&str, usize> = AHashMap::new();
    let mut out_degree: AHashMap<&str, usize> = AHashMap::new();

    for connection in connections {
        let origin = connection.origin_id.as_str();
        let destination = connection.destination_id.as_str();
        adjacency.entry(origin).or_default().push(destination);
        *out_degree.entry(origin).or_default() += 1;
        *in_degree.entry(destination).or_default() += 1;
    }

    // Scan origins in ascending id order so the chain set is deterministic.
    let mut origins: Vec<&str> = adjacency.keys().copied().collect();
    origins.sort_unstable();

    let mut used: AHashSet<(&str, &str)> = AHashSet::new();
    let mut chains = Vec::new();

    for origin in origins {
        for &next in &adjacency[origin] {
            if used.insert((origin, next)) {
                chains.push(build_chain(
                    origin,
                    next,
                    &adjacency,
                    &in_degree,
                    &out_degree,
                    &mut used,
                ));
            }
        }
    }

    chains
}

/// Extends a chain forward from the edge (origin -> next) while the current
/// vertex stays strictly linear.
fn build_chain<'a>(
    origin: &'a str,
    next: &'a str,
    adjacency: &AHashMap<&'a str, Vec<&'a str>>,
    in_degree: &AHashMap<&'a str, usize>,
    out_degree: &AHashMap<&'a str, usize>,
    used: &mut AHashSet<(&'a str, &'a str)>,
) -> Vec<String> {
    let mut chain = vec![origin.to_string(), next.to_string()];
    let mut current = next;

    while in_degree.get(current).copied().unwrap_or(0) == 1
        && out_degree.get(current).copied().unwrap_or(0) == 1
    {
        let Some(&following) = adjacency.get(current).and_then(|targets| targets.first()) else {
            break;
        };
        if !used.insert((current, following)) {
            break;
        }
        chain.push(following.to_string());
        current = following;
    }

    chain
}
