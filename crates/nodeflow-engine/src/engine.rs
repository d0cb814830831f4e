use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info};

use nodeflow_core::error::{NodeflowError, Result};
use nodeflow_core::event::EventBus;
use nodeflow_core::traits::ModelBridge;
use nodeflow_core::types::{Edge, ExecutionContext, ExecutionResult, Node, NodeStatusEvent};

use crate::executors;
use crate::order::execution_order;

/// Drives one workflow run: resolves the execution order, invokes executors
/// strictly sequentially, accumulates outputs into the shared context, and
/// stops at the first failure.
///
/// Status changes are broadcast through the injected [`EventBus`];
/// publishing is fire-and-forget and a missing subscriber never affects the
/// run.
pub struct WorkflowEngine {
    bridge: Arc<dyn ModelBridge>,
    events: Arc<EventBus>,
}

impl WorkflowEngine {
    pub fn new(bridge: Arc<dyn ModelBridge>) -> Self {
        Self {
            bridge,
            events: Arc::new(EventBus::default()),
        }
    }

    /// Replace the default event bus, e.g. with one the UI already
    /// subscribes to.
    pub fn with_events(mut self, events: Arc<EventBus>) -> Self {
        self.events = events;
        self
    }

    /// The bus this engine publishes node status changes on.
    pub fn events(&self) -> &Arc<EventBus> {
        &self.events
    }

    /// Execute the workflow.
    ///
    /// A circular dependency propagates as `Err` — no node runs. Per-node
    /// failures are recorded in the returned result (`success: false`) and
    /// halt the loop; they never surface as `Err` from this method.
    pub async fn execute(&self, nodes: &[Node], edges: &[Edge]) -> Result<ExecutionResult> {
        let execution_order = execution_order(nodes, edges)?;
        info!(order = ?execution_order, "Starting workflow execution");

        let mut results = ExecutionContext::new();
        let mut errors: Vec<String> = Vec::new();

        for node_id in &execution_order {
            self.events
                .publish(NodeStatusEvent::executing(node_id.as_str()));

            let started = Instant::now();
            let outcome = match nodes.iter().find(|n| n.id == *node_id) {
                Some(node) => {
                    debug!(node_id = %node.id, node_type = %node.node_type, "Executing node");
                    executors::execute_node(node, &results, edges, &self.bridge).await
                }
                None => Err(NodeflowError::NodeNotFound(node_id.clone())),
            };
            let elapsed_ms = started.elapsed().as_millis() as u64;

            match outcome {
                Ok(output) => {
                    debug!(node_id = %node_id, elapsed_ms, "Node completed");
                    self.events
                        .publish(NodeStatusEvent::completed(node_id.as_str(), &output));
                    results.insert(node_id.clone(), output);
                }
                Err(e) => {
                    error!(node_id = %node_id, elapsed_ms, error = %e, "Node failed");
                    errors.push(format!("{}: {}", node_id, e));
                    self.events
                        .publish(NodeStatusEvent::failed(node_id.as_str(), e.to_string()));
                    // Stop execution on first error
                    break;
                }
            }
        }

        Ok(ExecutionResult {
            success: errors.is_empty(),
            results,
            errors,
            execution_order,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodeflow_bridge::OfflineBridge;
    use nodeflow_core::types::NodeStatus;

    fn engine() -> WorkflowEngine {
        WorkflowEngine::new(Arc::new(OfflineBridge))
    }

    fn text_input(id: &str, text: &str) -> Node {
        Node::new(id, "text-input").with_data("text", serde_json::json!(text))
    }

    #[tokio::test]
    async fn test_stop_on_first_failure() {
        // B has an empty payload, so it fails; C must never run.
        let nodes = vec![
            text_input("A", "start"),
            Node::new("B", "text-input"),
            Node::new("C", "text-output"),
        ];
        let edges = vec![Edge::new("A", "B"), Edge::new("B", "C")];

        let result = engine().execute(&nodes, &edges).await.unwrap();

        assert!(!result.success);
        assert_eq!(result.results.len(), 1);
        assert!(result.results.contains("A"));
        assert!(!result.results.contains("C"));
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].starts_with("B:"));
    }

    #[tokio::test]
    async fn test_cycle_aborts_before_execution() {
        let nodes = vec![text_input("A", "x"), Node::new("B", "text-output")];
        let edges = vec![Edge::new("A", "B"), Edge::new("B", "A")];

        let err = engine().execute(&nodes, &edges).await.unwrap_err();
        assert!(matches!(err, NodeflowError::CircularDependency(_)));
    }

    #[tokio::test]
    async fn test_missing_node_is_per_node_failure() {
        let nodes = vec![Node::new("B", "text-output")];
        let edges = vec![Edge::new("ghost", "B")];

        let result = engine().execute(&nodes, &edges).await.unwrap();
        assert!(!result.success);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].starts_with("ghost:"));
        assert!(result.results.is_empty());
    }

    #[tokio::test]
    async fn test_status_events_emitted() {
        let engine = engine();
        let mut rx = engine.events().subscribe();

        let nodes = vec![text_input("A", "hello")];
        let result = engine.execute(&nodes, &[]).await.unwrap();
        assert!(result.success);

        let ev = rx.recv().await.unwrap();
        assert_eq!(ev.node_id, "A");
        assert_eq!(ev.status, NodeStatus::Executing);

        let ev = rx.recv().await.unwrap();
        assert_eq!(ev.status, NodeStatus::Completed);
        assert!(ev.payload.is_some());
    }

    #[tokio::test]
    async fn test_first_edge_wins_with_fan_in() {
        // Two inputs feed one output; only the first edge's source counts.
        let nodes = vec![
            text_input("first", "alpha"),
            text_input("second", "beta"),
            Node::new("sink", "text-output"),
        ];
        let edges = vec![Edge::new("first", "sink"), Edge::new("second", "sink")];

        let result = engine().execute(&nodes, &edges).await.unwrap();
        assert!(result.success);
        let sink = result.results.get("sink").unwrap();
        assert_eq!(sink.content, serde_json::json!("alpha"));
    }

    #[tokio::test]
    async fn test_disconnected_components_all_run() {
        let nodes = vec![
            text_input("a1", "one"),
            Node::new("a2", "text-output"),
            text_input("b1", "two"),
        ];
        let edges = vec![Edge::new("a1", "a2")];

        let result = engine().execute(&nodes, &edges).await.unwrap();
        assert!(result.success);
        assert_eq!(result.results.len(), 3);
        assert_eq!(result.execution_order.len(), 3);
    }
}
