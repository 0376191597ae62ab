//! Common test utilities for building workflow definitions and documents.
use ayxflow::prelude::*;

#[allow(dead_code)]
pub fn node(id: &str, tool_type: &str, config_xml: &str) -> ToolNode {
    ToolNode {
        id: id.to_string(),
        tool_type: tool_type.to_string(),
        config_xml: config_xml.to_string(),
    }
}

#[allow(dead_code)]
pub fn conn(origin_id: &str, origin_port: &str, destination_id: &str, destination_port: &str) -> Connection {
    Connection {
        origin_id: origin_id.to_string(),
        origin_port: origin_port.to_string(),
        destination_id: destination_id.to_string(),
        destination_port: destination_port.to_string(),
    }
}

/// Four tools with a branch: A -> B, then B -> C on "True" and B -> D on "False".
#[allow(dead_code)]
pub fn branching_workflow() -> WorkflowDefinition {
    WorkflowDefinition {
        nodes: vec![
            node("A", "Dbfileinput", ""),
            node("B", "Filter", ""),
            node("C", "Summarize", ""),
            node("D", "Browsev2", ""),
        ],
        connections: vec![
            conn("A", "Output", "B", "Input"),
            conn("B", "True", "C", "Input"),
            conn("B", "False", "D", "Input"),
        ],
    }
}

/// A realistic workflow document: two top-level tools, a container with three
/// nested tools (a select, a browse, and a nested empty container), and a
/// root-level connections section.
#[allow(dead_code)]
pub const SAMPLE_XML: &str = r#"<?xml version="1.0"?>
<AlteryxDocument yxmdVer="2021.4">
  <Nodes>
    <Node ToolID="1">
      <GuiSettings Plugin="AlteryxBasePluginsGui.DbFileInput.DbFileInput" />
      <Properties>
        <Configuration>
          <File>sales.csv</File>
        </Configuration>
      </Properties>
    </Node>
    <Node ToolID="2">
      <GuiSettings Plugin="AlteryxBasePluginsGui.Filter.Filter" />
      <Properties>
        <Configuration>
          <Expression>Sales &gt; 100</Expression>
        </Configuration>
      </Properties>
    </Node>
    <Node ToolID="12">
      <GuiSettings Plugin="AlteryxGuiToolkit.ToolContainer.ToolContainer" />
      <Properties>
        <Configuration>
          <Caption>Staging</Caption>
        </Configuration>
      </Properties>
      <ChildNodes>
        <Node ToolID="45">
          <GuiSettings Plugin="AlteryxBasePluginsGui.AlteryxSelect.AlteryxSelect" />
          <Properties>
            <Configuration />
          </Properties>
        </Node>
        <Node ToolID="88">
          <GuiSettings Plugin="AlteryxBasePluginsGui.BrowseV2.BrowseV2" />
        </Node>
        <Node ToolID="99">
          <GuiSettings Plugin="AlteryxGuiToolkit.ToolContainer.ToolContainer" />
          <ChildNodes />
        </Node>
      </ChildNodes>
    </Node>
  </Nodes>
  <Connections>
    <Connection>
      <Origin ToolID="1" Connection="Output" />
      <Destination ToolID="2" Connection="Input" />
    </Connection>
    <Connection>
      <Origin ToolID="2" Connection="True" />
      <Destination ToolID="45" Connection="Input" />
    </Connection>
    <Connection>
      <Origin ToolID="45" Connection="Output" />
      <Destination ToolID="88" Connection="Input" />
    </Connection>
  </Connections>
</AlteryxDocument>
"#;
