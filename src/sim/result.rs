//! Evaluation result and aggregation.
//!
//! The tracer produces raw material (powered nodes, complete paths); this
//! module folds it into the summary the rendering layer consumes.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::circuit::{base_terminal, handles, CircuitGraph, ComponentKind};

/// One step of a traced path: the node current passed through and the
/// terminal it continued from (for the final step, the sink battery's
/// `negative` terminal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStep {
    pub node: String,
    pub terminal: String,
}

impl PathStep {
    pub fn new(node: impl Into<String>, terminal: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            terminal: terminal.into(),
        }
    }
}

/// A directed route from a battery's positive terminal back to a battery's
/// negative terminal, with no repeated edge. Retained for diagnostics.
///
/// `steps` always has exactly one more entry than `edges`: step `i + 1` was
/// reached by traversing edge `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletePath {
    pub steps: Vec<PathStep>,
    pub edges: Vec<String>,
}

/// The outcome of evaluating a graph snapshot. Recomputed on every relevant
/// graph change, never persisted.
///
/// The summary sets are computed independently of each other: powered only
/// requires reachability, active requires lying on a complete path, and lit
/// additionally requires polarity-correct entry. No subset relation between
/// them is assumed anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    /// Nodes reached by traversal from some battery's positive terminal.
    pub powered_nodes: BTreeSet<String>,
    /// Nodes through which current flows on some complete path.
    pub active_components: BTreeSet<String>,
    /// LEDs entered through the anode on some complete path.
    pub lit_leds: BTreeSet<String>,
    /// Edges used by some complete path. Edges are directed and traversal
    /// only ever follows them source to target, so membership alone
    /// determines the direction of flow for rendering.
    pub energized_edges: BTreeSet<String>,
    /// Whether at least one complete circuit exists.
    pub is_complete: bool,
    /// Every complete path found, in traversal order.
    pub complete_paths: Vec<CompletePath>,
}

impl Evaluation {
    /// Fold the tracer's output into the summary.
    ///
    /// Every node on a complete path becomes powered and active. An LED on a
    /// path lights only if the edge immediately preceding its step enters
    /// through the (normalized) anode; entry through the cathode never
    /// lights it, regardless of other paths.
    pub(crate) fn aggregate(
        graph: &CircuitGraph,
        powered_nodes: BTreeSet<String>,
        complete_paths: Vec<CompletePath>,
    ) -> Self {
        let mut result = Evaluation {
            powered_nodes,
            is_complete: !complete_paths.is_empty(),
            ..Evaluation::default()
        };

        for path in &complete_paths {
            for (i, step) in path.steps.iter().enumerate() {
                result.powered_nodes.insert(step.node.clone());
                result.active_components.insert(step.node.clone());

                if i == 0 {
                    continue; // path origin, no incoming edge
                }
                let is_led = graph
                    .node(&step.node)
                    .map(|n| n.kind == ComponentKind::Led)
                    .unwrap_or(false);
                let entered_anode = graph
                    .edge(&path.edges[i - 1])
                    .map(|e| base_terminal(&e.target_handle) == handles::ANODE)
                    .unwrap_or(false);
                if is_led && entered_anode {
                    result.lit_leds.insert(step.node.clone());
                }
            }

            for edge_id in &path.edges {
                result.energized_edges.insert(edge_id.clone());
            }
        }

        result.complete_paths = complete_paths;
        result
    }
}
