//! Workflow execution engine.
//!
//! A workflow is a directed acyclic graph of typed [`Node`]s connected by
//! [`Edge`]s. The engine topologically orders the nodes, executes each one
//! strictly sequentially according to its kind (input capture, AI provider
//! call, output formatting, generic passthrough), flows data along edges
//! through a shared per-run context, and stops at the first failure.
//!
//! [`Node`]: nodeflow_core::types::Node
//! [`Edge`]: nodeflow_core::types::Edge

pub mod engine;
pub mod executors;
pub mod order;

pub use engine::WorkflowEngine;
pub use executors::{execute_node, upstream_input};
pub use order::execution_order;
