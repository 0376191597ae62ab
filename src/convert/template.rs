use std::borrow::Cow;

use itertools::Itertools;

use super::generator::ToolSnippet;
use super::target::CodeTarget;
use crate::graph::WorkflowGraph;
use crate::workflow::ToolNode;

/// Configuration payloads longer than this are truncated in prompts to stay
/// within model token limits.
const MAX_CONFIG_CHARS: usize = 8000;

/// Variable name of one output stream: `df_<tool id>_<port>`.
pub fn stream_name(tool_id: &str, port: &str) -> String {
    format!("df_{tool_id}_{port}")
}

/// The variable names of a tool's named outputs, one per distinct origin port.
pub fn output_names(graph: &WorkflowGraph<'_>, tool_id: &str) -> Vec<String> {
    graph
        .output_ports(tool_id)
        .iter()
        .map(|port| stream_name(tool_id, port))
        .collect()
}

/// `(source variable name, input port)` pairs for each incoming connection.
pub fn input_names(graph: &WorkflowGraph<'_>, tool_id: &str) -> Vec<(String, String)> {
    graph
        .input_bindings(tool_id)
        .iter()
        .map(|binding| {
            (
                stream_name(&binding.source_id, &binding.source_port),
                binding.input_port.clone(),
            )
        })
        .collect()
}

/// Renders the I/O sentence embedded in a per-tool generation prompt, telling
/// the model which variable names to read from and write to.
pub fn tool_io_summary(graph: &WorkflowGraph<'_>, tool_id: &str) -> String {
    let inputs = input_names(graph, tool_id);
    let outputs = output_names(graph, tool_id);

    let input_str = if inputs.is_empty() {
        "No inputs".to_string()
    } else {
        inputs
            .iter()
            .map(|(name, port)| format!("{name} connects to the '{port}'"))
            .join(", ")
    };

    let output_str = if outputs.is_empty() {
        "No outputs".to_string()
    } else {
        outputs
            .iter()
            .enumerate()
            .map(|(index, name)| format!("name the {} output as {name}", ordinal(index)))
            .join(", ")
    };

    format!(
        "This tool with id {tool_id} has {} input(s), their variable name is {input_str}. \
         Use {input_str} as the input for this tool And {output_str}.",
        inputs.len()
    )
}

/// Renders the generation prompt for a single tool.
pub fn tool_prompt(
    target: CodeTarget,
    node: &ToolNode,
    io_info: &str,
    guide: Option<&str>,
) -> String {
    let language = target.language();
    let config = truncate_config(&node.config_xml);
    let additional_instructions = guide
        .map(|text| {
            format!(
                "Refer to this additional information for \"{}\" tool - {text}",
                node.tool_type
            )
        })
        .unwrap_or_default();

    format!(
        "You are an expert data engineer. Convert the following Alteryx tool configuration \
         into equivalent {language} code.\n\
         Tool type: {}\n\
         Configuration details: {config}\n\
         I/O details: {io_info}\n\
         Additional instructions: {additional_instructions}\n\
         \n\
         Rules:\n\
         1. Return only the {language} code that reproduces the functionality of this tool.\n\
         2. Include import or setup statements as comments.\n\
         3. Don't include any function definitions or docstrings.\n\
         4. Don't include sample data, just the code.\n",
        node.tool_type
    )
}

/// Renders the final prompt that asks the model to merge per-tool snippets
/// into one script, in the given execution sequence.
pub fn combine_prompt(
    target: CodeTarget,
    snippets: &[ToolSnippet],
    execution_sequence: &[String],
    extra_user_instructions: &str,
) -> String {
    let language = target.language();
    let all_tool_code = snippets
        .iter()
        .map(|snippet| format!("Tool {} code:\n{}", snippet.tool_id, snippet.code))
        .join("\n\n");
    let sequence = execution_sequence.join(", ");

    format!(
        "You are an expert data engineer. We have multiple {language} code snippets translated \
         from different Alteryx tools, and we want to combine them into a single coherent \
         {language} script.\n\
         \n\
         Code snippets:\n{all_tool_code}\n\
         \n\
         Extra user instructions: {extra_user_instructions}\n\
         \n\
         Requirements:\n\
         1. Return only the combined {language} script, without surrounding code fences.\n\
         2. Do not repeat setup statements that common environments provide; keep custom \
         setup as comments.\n\
         3. Merge the snippets in a logical order that respects the data processing flow.\n\
         4. Eliminate redundant or conflicting statements.\n\
         5. Add concise comments to help understand the code.\n\
         6. When combining the snippets, strictly follow this order: {sequence}\n\
         \n\
         Provide only the merged code below:\n"
    )
}

fn truncate_config(config: &str) -> Cow<'_, str> {
    match config.char_indices().nth(MAX_CONFIG_CHARS) {
        Some((byte_index, _)) => Cow::Owned(format!("{}... [truncated]", &config[..byte_index])),
        None => Cow::Borrowed(config),
    }
}

fn ordinal(index: usize) -> String {
    match index {
        0 => "1st".to_string(),
        1 => "2nd".to_string(),
        2 => "3rd".to_string(),
        n => format!("{}th", n + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals() {
        assert_eq!(ordinal(0), "1st");
        assert_eq!(ordinal(1), "2nd");
        assert_eq!(ordinal(2), "3rd");
        assert_eq!(ordinal(3), "4th");
        assert_eq!(ordinal(10), "11th");
    }

    #[test]
    fn long_configs_are_truncated() {
        let config = "x".repeat(MAX_CONFIG_CHARS + 100);
        let truncated = truncate_config(&config);
        assert!(truncated.ends_with("... [truncated]"));
        assert!(truncated.len() < config.len() + 20);

        let short = "short config";
        assert_eq!(truncate_config(short), short);
    }
}
