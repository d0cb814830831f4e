//! NodeFlow — client-side execution engine for AI workflow graphs.
//!
//! The visual editor hands the engine a graph of typed nodes and directed
//! edges; the engine orders it topologically, runs each node in sequence
//! (input capture, AI provider calls through the backend bridge, output
//! formatting), and returns per-node outputs plus an overall result.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use nodeflow::{Edge, Node, OfflineBridge, WorkflowEngine};
//!
//! # async fn run() -> nodeflow::Result<()> {
//! let nodes = vec![
//!     Node::new("1", "text-input").with_data("text", serde_json::json!("Capital of India?")),
//!     Node::new("2", "openai"),
//!     Node::new("3", "text-output"),
//! ];
//! let edges = vec![Edge::new("1", "2"), Edge::new("2", "3")];
//!
//! let engine = WorkflowEngine::new(Arc::new(OfflineBridge));
//! let result = engine.execute(&nodes, &edges).await?;
//! assert!(result.success);
//! # Ok(())
//! # }
//! ```

pub use nodeflow_core::config::ApiConfig;
pub use nodeflow_core::error::{NodeflowError, Result};
pub use nodeflow_core::event::EventBus;
pub use nodeflow_core::traits::ModelBridge;
pub use nodeflow_core::types::{
    BridgeResponse, Edge, ExecutionContext, ExecutionResult, ModelConfigEntry, Node, NodeKind,
    NodeOutput, NodeStatus, NodeStatusEvent, OutputKind, Provider,
};

pub use nodeflow_bridge::{offline_response, ApiBridge, OfflineBridge};
pub use nodeflow_engine::{execution_order, WorkflowEngine};
