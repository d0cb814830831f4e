use tracing::debug;

use nodeflow_core::error::{NodeflowError, Result};
use nodeflow_core::types::{Edge, ExecutionContext, Node, NodeOutput};

use super::{content_text, upstream_input};

/// Format upstream output for display.
///
/// String content is shown raw; structured content is pretty-printed JSON.
pub(super) fn run(node: &Node, context: &ExecutionContext, edges: &[Edge]) -> Result<NodeOutput> {
    let content = upstream_input(&node.id, edges, context).ok_or(NodeflowError::MissingInput)?;

    let formatted = match &content {
        serde_json::Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| content_text(other)),
    };

    debug!(node_id = %node.id, "Formatted output");
    Ok(NodeOutput::output(content, formatted))
}
