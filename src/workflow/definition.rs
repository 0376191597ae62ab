use serde::{Deserialize, Serialize};

/// Canonical type name of a container tool, as produced by [`canonical_type_name`].
pub const CONTAINER_TYPE: &str = "Toolcontainer";

/// Canonical type name of the terminal browse tool.
pub const BROWSE_TYPE: &str = "Browsev2";

/// A single processing step in a workflow, uniquely identified within its document.
///
/// Created once at load time and immutable afterward. The `config_xml` payload is
/// the verbatim serialized inner markup of the tool element; this crate never
/// interprets it beyond the container-membership scan, it is pass-through text
/// for the code-generation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolNode {
    pub id: String,
    pub tool_type: String,
    pub config_xml: String,
}

/// A directed, ported edge linking one tool's output slot to another tool's input slot.
///
/// Multiple connections may share an origin (fan-out) or a destination (fan-in).
/// Endpoint ids referencing tools absent from the node table are tolerated; such
/// ids still participate in graph traversal but resolve to no type or payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub origin_id: String,
    pub origin_port: String,
    pub destination_id: String,
    pub destination_port: String,
}

/// The two base tables extracted from one workflow document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowDefinition {
    pub nodes: Vec<ToolNode>,
    pub connections: Vec<Connection>,
}

impl WorkflowDefinition {
    /// Returns true when both tables are empty, e.g. after a failed load.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.connections.is_empty()
    }

    /// Looks up a tool node by id.
    pub fn node(&self, id: &str) -> Option<&ToolNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Looks up the canonical type of a tool, if the id is known.
    pub fn node_type(&self, id: &str) -> Option<&str> {
        self.node(id).map(|n| n.tool_type.as_str())
    }
}

/// Normalizes a dotted plugin class name into its canonical display form.
///
/// Takes the last dot-separated segment, strips a trailing call-parentheses
/// marker, and title-cases the result: `AlteryxBasePluginsGui.Filter.Filter`
/// becomes `Filter`, `ToolContainer` becomes `Toolcontainer`.
pub fn canonical_type_name(plugin: &str) -> String {
    let last = plugin.rsplit('.').next().unwrap_or(plugin);
    let last = last.strip_suffix("()").unwrap_or(last);
    title_case(last)
}

/// Title-casing with the same word-boundary rule as Python's `str.title()`:
/// a letter following a non-letter starts a new word.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut word_start = true;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(ch);
            word_start = true;
        }
    }
    out
}
