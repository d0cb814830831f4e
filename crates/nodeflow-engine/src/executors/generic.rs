use tracing::warn;

use nodeflow_core::error::Result;
use nodeflow_core::types::{Edge, ExecutionContext, Node, NodeOutput};

use super::upstream_input;

/// Pass upstream content through unchanged for unrecognized node types,
/// recording the original type tag. Never fails.
pub(super) fn run(node: &Node, context: &ExecutionContext, edges: &[Edge]) -> Result<NodeOutput> {
    warn!(
        node_id = %node.id,
        node_type = %node.node_type,
        "Unknown node type, using generic passthrough"
    );

    let content = upstream_input(&node.id, edges, context)
        .unwrap_or_else(|| serde_json::Value::String("No input data".to_string()));

    Ok(NodeOutput::generic(content, node.node_type.as_str()))
}
