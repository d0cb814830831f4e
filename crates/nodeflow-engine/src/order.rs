use std::collections::HashSet;

use nodeflow_core::error::{NodeflowError, Result};
use nodeflow_core::types::{Edge, Node};

/// Compute a topological execution order for the graph.
///
/// Depth-first: every node's dependencies (sources of edges into it) are
/// ordered before the node itself. Deterministic for a given node and edge
/// order. Isolated nodes and disconnected components are all included; ids
/// that appear only as edge sources are ordered too and left for the engine
/// to report as missing.
pub fn execution_order(nodes: &[Node], edges: &[Edge]) -> Result<Vec<String>> {
    let mut visited: HashSet<String> = HashSet::new();
    let mut visiting: HashSet<String> = HashSet::new();
    let mut order: Vec<String> = Vec::with_capacity(nodes.len());

    for node in nodes {
        visit(&node.id, edges, &mut visiting, &mut visited, &mut order)?;
    }

    Ok(order)
}

fn visit(
    node_id: &str,
    edges: &[Edge],
    visiting: &mut HashSet<String>,
    visited: &mut HashSet<String>,
    order: &mut Vec<String>,
) -> Result<()> {
    if visiting.contains(node_id) {
        return Err(NodeflowError::CircularDependency(node_id.to_string()));
    }
    if visited.contains(node_id) {
        return Ok(());
    }

    visiting.insert(node_id.to_string());

    for edge in edges.iter().filter(|e| e.target == node_id) {
        visit(&edge.source, edges, visiting, visited, order)?;
    }

    visiting.remove(node_id);
    visited.insert(node_id.to_string());
    order.push(node_id.to_string());

    Ok(())
}
