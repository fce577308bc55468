//! Path tracing.
//!
//! Depth-first enumeration of every directed route from a battery's positive
//! terminal back to a battery's negative terminal. Each recursive branch
//! carries its own copy of the visited-edge set: a pruned or exhausted
//! sibling must not hide edges from the branches next to it, otherwise
//! parallel routes past a shared edge would be missed.

use std::collections::{BTreeSet, HashSet};

use log::{debug, trace};

use crate::circuit::{base_terminal, handles, CircuitGraph, ComponentKind};

use super::result::{CompletePath, PathStep};
use super::rules;

/// One traversal over a graph snapshot.
pub(crate) struct Tracer<'a> {
    graph: &'a CircuitGraph,
    powered: BTreeSet<String>,
    paths: Vec<CompletePath>,
}

impl<'a> Tracer<'a> {
    pub(crate) fn new(graph: &'a CircuitGraph) -> Self {
        Self {
            graph,
            powered: BTreeSet::new(),
            paths: Vec::new(),
        }
    }

    /// Trace from every battery and return the powered-node set and every
    /// complete path found. Batteries are visited in placement order and
    /// edges in drawing order, so the output is deterministic for a given
    /// document.
    pub(crate) fn run(mut self) -> (BTreeSet<String>, Vec<CompletePath>) {
        let batteries: Vec<String> = self.graph.batteries().map(|b| b.id.clone()).collect();
        for battery_id in &batteries {
            debug!("tracing from battery '{battery_id}'");
            self.trace(battery_id, handles::POSITIVE, &HashSet::new(), &[], &[]);
        }
        debug!(
            "trace finished: {} complete path(s), {} powered node(s)",
            self.paths.len(),
            self.powered.len()
        );
        (self.powered, self.paths)
    }

    /// Extend the path at `(node_id, terminal)`, where `terminal` is the
    /// terminal current continues from.
    ///
    /// Terminates because every recursion consumes one unvisited edge from
    /// its branch's candidate pool; short cycles simply run out of edges
    /// without producing a path.
    fn trace(
        &mut self,
        node_id: &str,
        terminal: &str,
        visited: &HashSet<String>,
        steps: &[PathStep],
        edge_trail: &[String],
    ) {
        let graph = self.graph;
        self.powered.insert(node_id.to_string());

        let mut steps = steps.to_vec();
        steps.push(PathStep::new(node_id, terminal));

        let candidates: Vec<_> = graph.outgoing_edges(node_id, terminal, visited).collect();

        for edge in candidates {
            // Copy-on-branch: siblings must not see this edge as visited.
            let mut branch_visited = visited.clone();
            branch_visited.insert(edge.id.clone());

            let Some(target) = graph.node(&edge.target) else {
                trace!(
                    "edge '{}' targets missing node '{}', skipping",
                    edge.id,
                    edge.target
                );
                continue;
            };

            let mut trail = edge_trail.to_vec();
            trail.push(edge.id.clone());

            let entry = base_terminal(&edge.target_handle);

            if target.kind == ComponentKind::Battery && entry == handles::NEGATIVE {
                let mut complete = steps.clone();
                complete.push(PathStep::new(&target.id, handles::NEGATIVE));
                trace!(
                    "complete path into battery '{}' over {} edge(s)",
                    target.id,
                    trail.len()
                );
                self.paths.push(CompletePath {
                    steps: complete,
                    edges: trail,
                });
                continue;
            }

            if target.kind == ComponentKind::Switch && !target.is_closed() {
                trace!("open switch '{}' blocks edge '{}'", target.id, edge.id);
                continue;
            }

            for next in rules::continuations(target.kind, entry) {
                self.trace(&target.id, next, &branch_visited, &steps, &trail);
            }
        }
    }
}
