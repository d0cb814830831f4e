use tracing::debug;

use nodeflow_core::error::{NodeflowError, Result};
use nodeflow_core::types::{Node, NodeOutput};

/// Capture literal text from the node's own payload.
///
/// Checks the legacy key locations in order: `text`, `message`,
/// `inputs.text`. Empty strings fall through to the next location. Input
/// nodes are sources — they never read upstream context.
pub(super) fn run(node: &Node) -> Result<NodeOutput> {
    let data = &node.data;

    let text = data
        .get("text")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .or_else(|| {
            data.get("message")
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
        })
        .or_else(|| {
            data.get("inputs")
                .and_then(|v| v.get("text"))
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
        })
        .unwrap_or("");

    if text.trim().is_empty() {
        return Err(NodeflowError::EmptyInput);
    }

    debug!(node_id = %node.id, "Captured input text");
    Ok(NodeOutput::text(text))
}
