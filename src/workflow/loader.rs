use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::definition::{Connection, ToolNode, WorkflowDefinition, canonical_type_name};
use crate::error::WorkflowLoadError;

/// Parses a workflow document into its node and connection tables.
///
/// Tool nodes are collected depth-first from every `<Node>` element carrying a
/// `ToolID` attribute, including nodes nested inside container payloads. The
/// connection table is read from the document-root `<Connections>` section only.
pub fn parse_workflow(xml: &str) -> Result<WorkflowDefinition, WorkflowLoadError> {
    Ok(WorkflowDefinition {
        nodes: parse_nodes(xml)?,
        connections: parse_connections(xml)?,
    })
}

/// Loads a workflow document, degrading to an empty definition on parse failure.
///
/// The failure is reported once as a warning and never propagated; callers can
/// detect it via [`WorkflowDefinition::is_empty`] and decide how to react.
pub fn load_workflow(xml: &str) -> WorkflowDefinition {
    match parse_workflow(xml) {
        Ok(def) => def,
        Err(err) => {
            tracing::warn!("failed to load workflow document: {err}");
            WorkflowDefinition::default()
        }
    }
}

/// Reads and loads a workflow file with the same lossy semantics as [`load_workflow`].
pub fn load_workflow_file(path: impl AsRef<Path>) -> WorkflowDefinition {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(xml) => load_workflow(&xml),
        Err(err) => {
            let err = WorkflowLoadError::Io {
                path: path.display().to_string(),
                message: err.to_string(),
            };
            tracing::warn!("failed to load workflow file: {err}");
            WorkflowDefinition::default()
        }
    }
}

/// An open `<Node>` element during the scan. `node_index` is `None` for tool
/// elements without a `ToolID`, which are skipped but still visited.
struct NodeFrame {
    node_index: Option<usize>,
    inner_start: usize,
}

fn parse_nodes(xml: &str) -> Result<Vec<ToolNode>, WorkflowLoadError> {
    let mut reader = Reader::from_str(xml);
    let mut nodes: Vec<ToolNode> = Vec::new();
    let mut stack: Vec<NodeFrame> = Vec::new();

    loop {
        let pos = reader.buffer_position() as usize;
        match reader.read_event().map_err(xml_error)? {
            Event::Start(e) => match e.name().as_ref() {
                b"Node" => {
                    let node_index = attribute(&e, "ToolID")?.map(|id| {
                        nodes.push(ToolNode {
                            id,
                            tool_type: String::new(),
                            config_xml: String::new(),
                        });
                        nodes.len() - 1
                    });
                    stack.push(NodeFrame {
                        node_index,
                        inner_start: reader.buffer_position() as usize,
                    });
                }
                b"GuiSettings" => apply_plugin(&e, &stack, &mut nodes)?,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"Node" => {
                    if let Some(id) = attribute(&e, "ToolID")? {
                        nodes.push(ToolNode {
                            id,
                            tool_type: String::new(),
                            config_xml: String::new(),
                        });
                    }
                }
                b"GuiSettings" => apply_plugin(&e, &stack, &mut nodes)?,
                _ => {}
            },
            Event::End(e) => {
                if e.name().as_ref() == b"Node"
                    && let Some(frame) = stack.pop()
                    && let Some(index) = frame.node_index
                {
                    nodes[index].config_xml =
                        xml.get(frame.inner_start..pos).unwrap_or_default().to_string();
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(nodes)
}

/// Binds a `<GuiSettings Plugin="...">` attribute to the innermost open node.
fn apply_plugin(
    e: &BytesStart<'_>,
    stack: &[NodeFrame],
    nodes: &mut [ToolNode],
) -> Result<(), WorkflowLoadError> {
    if let Some(frame) = stack.last()
        && let Some(index) = frame.node_index
        && nodes[index].tool_type.is_empty()
        && let Some(plugin) = attribute(e, "Plugin")?
    {
        nodes[index].tool_type = canonical_type_name(&plugin);
    }
    Ok(())
}

fn parse_connections(xml: &str) -> Result<Vec<Connection>, WorkflowLoadError> {
    let mut reader = Reader::from_str(xml);
    let mut connections = Vec::new();

    let mut depth = 0usize;
    let mut in_connections = false;
    let mut in_connection = false;
    let mut origin: Option<(String, String)> = None;
    let mut destination: Option<(String, String)> = None;

    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(e) => {
                match e.name().as_ref() {
                    // Only the root-level section counts; container payloads may
                    // embed their own markup at deeper levels.
                    b"Connections" if depth == 1 => in_connections = true,
                    b"Connection" if in_connections => {
                        in_connection = true;
                        origin = None;
                        destination = None;
                    }
                    b"Origin" if in_connection => origin = endpoint(&e)?,
                    b"Destination" if in_connection => destination = endpoint(&e)?,
                    _ => {}
                }
                depth += 1;
            }
            Event::Empty(e) if in_connection => match e.name().as_ref() {
                b"Origin" => origin = endpoint(&e)?,
                b"Destination" => destination = endpoint(&e)?,
                _ => {}
            },
            Event::End(e) => {
                depth = depth.saturating_sub(1);
                match e.name().as_ref() {
                    b"Connection" if in_connection => {
                        // Entries missing either endpoint are skipped.
                        if let (Some((origin_id, origin_port)), Some((destination_id, destination_port))) =
                            (origin.take(), destination.take())
                        {
                            connections.push(Connection {
                                origin_id,
                                origin_port,
                                destination_id,
                                destination_port,
                            });
                        }
                        in_connection = false;
                    }
                    b"Connections" if depth == 1 => in_connections = false,
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(connections)
}

/// Reads one `<Origin>`/`<Destination>` endpoint as `(tool id, port name)`.
/// A missing `ToolID` makes the endpoint unusable; a missing port name is
/// recorded as an empty string.
fn endpoint(e: &BytesStart<'_>) -> Result<Option<(String, String)>, WorkflowLoadError> {
    let Some(tool_id) = attribute(e, "ToolID")? else {
        return Ok(None);
    };
    let port = attribute(e, "Connection")?.unwrap_or_default();
    Ok(Some((tool_id, port)))
}

fn attribute(e: &BytesStart<'_>, name: &str) -> Result<Option<String>, WorkflowLoadError> {
    let attr = e.try_get_attribute(name).map_err(xml_error)?;
    attr.map(|a| a.unescape_value().map(|v| v.into_owned()).map_err(xml_error))
        .transpose()
}

fn xml_error(err: impl std::fmt::Display) -> WorkflowLoadError {
    WorkflowLoadError::Xml(err.to_string())
}
