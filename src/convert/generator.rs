use serde::{Deserialize, Serialize};

use super::guide::GuideBook;
use super::target::CodeTarget;
use super::template;
use crate::error::{ConvertError, GenerateError};
use crate::graph::{WorkflowGraph, adjust_order};
use crate::workflow::WorkflowDefinition;

/// Capability abstraction over a text-generating model.
///
/// The crate contains no implementation backed by a real model; callers plug
/// in whatever client they use. Retry and progress reporting belong to the
/// implementation, not to the planner.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}

/// Generated code for one tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSnippet {
    pub tool_id: String,
    pub tool_type: String,
    pub code: String,
}

/// The result of converting a set of tools: per-tool snippets in execution
/// order, the merged script, and the combine prompt that produced it.
#[derive(Debug, Clone)]
pub struct ConversionOutput {
    pub snippets: Vec<ToolSnippet>,
    pub script: String,
    pub combine_prompt: String,
}

/// Drives the two-phase conversion: one generation call per tool, then a
/// combine call that merges the snippets in execution order.
pub struct ConversionPlanner<'a> {
    target: CodeTarget,
    guides: GuideBook,
    generator: &'a dyn TextGenerator,
    extra_instructions: String,
}

impl<'a> ConversionPlanner<'a> {
    pub fn new(target: CodeTarget, generator: &'a dyn TextGenerator) -> Self {
        Self {
            target,
            guides: GuideBook::new(),
            generator,
            extra_instructions: String::new(),
        }
    }

    pub fn with_guides(mut self, guides: GuideBook) -> Self {
        self.guides = guides;
        self
    }

    pub fn with_extra_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.extra_instructions = instructions.into();
        self
    }

    /// Converts the given subset of tools into a single script.
    ///
    /// The subset is first reordered to match the workflow's execution order;
    /// ids with no matching node still produce a placeholder comment so the
    /// combine step sees every requested tool.
    pub fn convert_tools(
        &self,
        def: &WorkflowDefinition,
        tool_ids: &[String],
    ) -> Result<ConversionOutput, ConvertError> {
        let graph = WorkflowGraph::new(def);
        let execution_sequence = graph.execution_order()?;
        let ordered = adjust_order(tool_ids, &execution_sequence);

        let mut snippets = Vec::with_capacity(ordered.len());
        for tool_id in &ordered {
            let snippet = match def.node(tool_id) {
                Some(node) => {
                    let io_info = template::tool_io_summary(&graph, tool_id);
                    let guide = self.guides.get(&node.tool_type);
                    let prompt = template::tool_prompt(self.target, node, &io_info, guide);
                    tracing::debug!(tool_id = %tool_id, tool_type = %node.tool_type, "generating tool snippet");
                    let code = self.generator.generate(&prompt)?;
                    ToolSnippet {
                        tool_id: tool_id.clone(),
                        tool_type: node.tool_type.clone(),
                        code: code.trim().to_string(),
                    }
                }
                None => ToolSnippet {
                    tool_id: tool_id.clone(),
                    tool_type: String::new(),
                    code: format!(
                        "{} No code found for tool {tool_id}",
                        self.target.comment_prefix()
                    ),
                },
            };
            snippets.push(snippet);
        }

        let combine_prompt = template::combine_prompt(
            self.target,
            &snippets,
            &ordered,
            &self.extra_instructions,
        );
        tracing::debug!(tools = snippets.len(), "combining tool snippets");
        let script = self.generator.generate(&combine_prompt)?.trim().to_string();

        Ok(ConversionOutput {
            snippets,
            script,
            combine_prompt,
        })
    }
}
