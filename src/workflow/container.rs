use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::definition::{BROWSE_TYPE, CONTAINER_TYPE, WorkflowDefinition};

/// Id tokens inside a container payload look like `ToolID="123"`.
static TOOL_ID_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"ToolID="(\d+)""#).expect("hard-coded pattern compiles"));

/// The tools a container visually groups, derived from its configuration payload.
///
/// This is a best-effort text-derived relation, not a structural graph edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerChildren {
    pub container_id: String,
    pub child_ids: Vec<String>,
}

/// Scans every container node's payload for id-like tokens, excluding the
/// container's own id. First occurrence wins; duplicates are dropped.
pub fn container_children(def: &WorkflowDefinition) -> Vec<ContainerChildren> {
    def.nodes
        .iter()
        .filter(|n| n.tool_type.eq_ignore_ascii_case(CONTAINER_TYPE))
        .map(|container| {
            let child_ids = TOOL_ID_TOKEN
                .captures_iter(&container.config_xml)
                .map(|captures| captures[1].to_string())
                .filter(|id| *id != container.id)
                .unique()
                .collect();
            ContainerChildren {
                container_id: container.id.clone(),
                child_ids,
            }
        })
        .collect()
}

/// Removes child ids whose node type is itself a container or a terminal
/// browse tool. A child id not found among the loaded nodes is retained.
pub fn clean_container_children(
    raw: &[ContainerChildren],
    def: &WorkflowDefinition,
) -> Vec<ContainerChildren> {
    raw.iter()
        .map(|entry| {
            let child_ids = entry
                .child_ids
                .iter()
                .filter(|child_id| match def.node_type(child_id) {
                    Some(tool_type) => {
                        !tool_type.eq_ignore_ascii_case(CONTAINER_TYPE)
                            && !tool_type.eq_ignore_ascii_case(BROWSE_TYPE)
                    }
                    None => true,
                })
                .cloned()
                .collect();
            ContainerChildren {
                container_id: entry.container_id.clone(),
                child_ids,
            }
        })
        .collect()
}
