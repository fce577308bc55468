//! Circuit graph structure.
//!
//! [`CircuitGraph`] holds the placed components and drawn connections in the
//! same shape the editing UI produces, and answers the adjacency queries the
//! evaluator needs. Queries are pure; mutation is confined to the small
//! editing API the board layer drives.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::types::{base_terminal, ComponentKind, ComponentNode, ConnectionEdge};
use crate::error::{Result, VoltlabError};

/// A snapshot of the board: all placed components and drawn connections.
///
/// Collection order is irrelevant to evaluation semantics but is preserved,
/// which keeps traversal (and therefore output) deterministic for a given
/// document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CircuitGraph {
    pub nodes: Vec<ComponentNode>,
    pub edges: Vec<ConnectionEdge>,
}

impl CircuitGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from parts.
    pub fn from_parts(nodes: Vec<ComponentNode>, edges: Vec<ConnectionEdge>) -> Self {
        Self { nodes, edges }
    }

    /// Decode a graph from the UI's JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(VoltlabError::graph_format)
    }

    /// Encode the graph back to JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|source| VoltlabError::Encode { source })
    }

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&ComponentNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Look up an edge by id.
    pub fn edge(&self, id: &str) -> Option<&ConnectionEdge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// All battery nodes, in placement order.
    pub fn batteries(&self) -> impl Iterator<Item = &ComponentNode> {
        self.nodes
            .iter()
            .filter(|n| n.kind == ComponentKind::Battery)
    }

    /// Whether at least one node of the given kind is placed.
    pub fn contains_kind(&self, kind: ComponentKind) -> bool {
        self.nodes.iter().any(|n| n.kind == kind)
    }

    /// Edges leaving `node_id` at the given terminal, excluding edges the
    /// caller has already traversed.
    ///
    /// Both the query terminal and each edge's source handle are normalized,
    /// so a connection drawn from a directional handle variant still matches
    /// the base terminal.
    pub fn outgoing_edges<'a>(
        &'a self,
        node_id: &'a str,
        terminal: &'a str,
        visited: &'a HashSet<String>,
    ) -> impl Iterator<Item = &'a ConnectionEdge> {
        let terminal = base_terminal(terminal);
        self.edges.iter().filter(move |edge| {
            edge.source == node_id
                && base_terminal(&edge.source_handle) == terminal
                && !visited.contains(&edge.id)
        })
    }

    /// Place a component on the board.
    pub fn add_node(&mut self, node: ComponentNode) {
        self.nodes.push(node);
    }

    /// Remove a component and every connection referencing it.
    pub fn remove_node(&mut self, id: &str) {
        self.nodes.retain(|n| n.id != id);
        self.edges.retain(|e| e.source != id && e.target != id);
    }

    /// Draw a connection.
    pub fn add_edge(&mut self, edge: ConnectionEdge) {
        self.edges.push(edge);
    }

    /// Remove a single connection by id.
    pub fn remove_edge(&mut self, id: &str) {
        self.edges.retain(|e| e.id != id);
    }
}
