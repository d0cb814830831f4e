use std::sync::Arc;

use tracing::{info, warn};

use nodeflow_core::error::{NodeflowError, Result};
use nodeflow_core::traits::ModelBridge;
use nodeflow_core::types::{Edge, ExecutionContext, Node, NodeOutput, Provider};

use nodeflow_bridge::fallback::offline_response;

use super::{content_text, upstream_input};

/// Run an AI model node: upstream text becomes the prompt, the bridge is
/// asked for a real response, and any bridge failure degrades to the local
/// heuristic responder with the output marked `fallback`.
pub(super) async fn run(
    node: &Node,
    context: &ExecutionContext,
    edges: &[Edge],
    bridge: &Arc<dyn ModelBridge>,
    provider: Provider,
) -> Result<NodeOutput> {
    let prompt = upstream_input(&node.id, edges, context)
        .map(|v| content_text(&v))
        .filter(|s| !s.trim().is_empty())
        .ok_or(NodeflowError::MissingInput)?;

    let model_name = node
        .data
        .get("model")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| provider.default_model().to_string());

    let parameters = node
        .data
        .get("parameters")
        .cloned()
        .unwrap_or_else(|| serde_json::json!({}));

    info!(node_id = %node.id, %provider, model = %model_name, "Executing model node");

    match bridge
        .execute_model(provider, &model_name, &prompt, &parameters)
        .await
    {
        Ok(Some(resp)) => {
            info!(
                node_id = %node.id,
                is_mock = resp.is_mock,
                "Model responded via bridge"
            );
            Ok(NodeOutput::ai_response(
                resp.content,
                model_name,
                provider,
                false,
            ))
        }
        Ok(None) => {
            warn!(node_id = %node.id, %provider, "No bridge response, using local fallback");
            Ok(NodeOutput::ai_response(
                offline_response(&prompt),
                model_name,
                provider,
                true,
            ))
        }
        Err(e) => {
            warn!(node_id = %node.id, %provider, error = %e, "Bridge error, using local fallback");
            Ok(NodeOutput::ai_response(
                offline_response(&prompt),
                model_name,
                provider,
                true,
            ))
        }
    }
}
