//! Per-kind node execution.
//!
//! Dispatch is a closed match on [`NodeKind`], with unrecognized type tags
//! handled by the generic passthrough. Executors never mutate the node or
//! prior context entries; they read upstream data through
//! [`upstream_input`] and return a fresh [`NodeOutput`].

mod generic;
mod input;
mod model;
mod output;

use std::sync::Arc;

use nodeflow_core::error::Result;
use nodeflow_core::traits::ModelBridge;
use nodeflow_core::types::{Edge, ExecutionContext, Node, NodeKind, NodeOutput};

/// Execute one node against the accumulated context.
pub async fn execute_node(
    node: &Node,
    context: &ExecutionContext,
    edges: &[Edge],
    bridge: &Arc<dyn ModelBridge>,
) -> Result<NodeOutput> {
    match NodeKind::from_tag(&node.node_type) {
        NodeKind::TextInput => input::run(node),
        NodeKind::Model(provider) => model::run(node, context, edges, bridge, provider).await,
        NodeKind::TextOutput => output::run(node, context, edges),
        NodeKind::Generic => generic::run(node, context, edges),
    }
}

/// Resolve a node's effective input from the context.
///
/// The first edge targeting the node wins when there are several — the
/// single-input pipeline contract. Returns the source output's content.
pub fn upstream_input(
    node_id: &str,
    edges: &[Edge],
    context: &ExecutionContext,
) -> Option<serde_json::Value> {
    let edge = edges.iter().find(|e| e.target == node_id)?;
    let source = context.get(&edge.source)?;
    Some(source.content.clone())
}

/// Render a content value as prompt/display text.
pub(crate) fn content_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
