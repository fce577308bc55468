//! Circuit evaluation.
//!
//! Given an immutable snapshot of the board, [`evaluate`] determines whether
//! current can flow from a battery's positive terminal back to a negative
//! terminal, which components it flows through, and which LEDs light.
//!
//! Evaluation is a pure, synchronous computation: no I/O, no shared state,
//! and no mutation of its input. The caller re-invokes it on every graph
//! change; identical snapshots always yield identical results.

mod result;
mod rules;
mod trace;

pub use result::{CompletePath, Evaluation, PathStep};
pub use rules::continuations;

use crate::circuit::CircuitGraph;

use trace::Tracer;

/// Evaluate a graph snapshot.
///
/// Path enumeration is exhaustive and worst-case exponential in the number
/// of parallel branches. Target use is small hand-placed educational
/// circuits (tens of components), where it completes in microseconds; this
/// is a known scaling limit, not something the engine guards against.
///
/// This is sequential traversal over directed edges, not nodal analysis: a
/// bridge topology carrying simultaneous current in both directions through
/// one component is out of scope.
pub fn evaluate(graph: &CircuitGraph) -> Evaluation {
    if graph.batteries().next().is_none() {
        return Evaluation::default();
    }

    let (powered, paths) = Tracer::new(graph).run();
    Evaluation::aggregate(graph, powered, paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::{ComponentKind, ComponentNode, ConnectionEdge};

    fn node(id: &str, kind: ComponentKind) -> ComponentNode {
        ComponentNode::new(id, kind)
    }

    fn edge(id: &str, s: &str, sh: &str, t: &str, th: &str) -> ConnectionEdge {
        ConnectionEdge::new(id, s, sh, t, th)
    }

    /// battery(+) -> resistor -> LED(anode..cathode) -> battery(-)
    fn series_circuit() -> CircuitGraph {
        CircuitGraph::from_parts(
            vec![
                node("bat", ComponentKind::Battery),
                node("res", ComponentKind::Resistor),
                node("led", ComponentKind::Led),
            ],
            vec![
                edge("e1", "bat", "positive", "res", "pin1"),
                edge("e2", "res", "pin2", "led", "anode"),
                edge("e3", "led", "cathode", "bat", "negative"),
            ],
        )
    }

    #[test]
    fn test_empty_graph() {
        let result = evaluate(&CircuitGraph::new());
        assert!(!result.is_complete);
        assert!(result.powered_nodes.is_empty());
        assert!(result.complete_paths.is_empty());
    }

    #[test]
    fn test_no_battery_yields_empty_result() {
        let graph = CircuitGraph::from_parts(
            vec![
                node("res", ComponentKind::Resistor),
                node("led", ComponentKind::Led),
            ],
            vec![edge("e1", "res", "pin2", "led", "anode")],
        );

        let result = evaluate(&graph);
        assert!(!result.is_complete);
        assert!(result.powered_nodes.is_empty());
        assert!(result.active_components.is_empty());
        assert!(result.lit_leds.is_empty());
    }

    #[test]
    fn test_series_circuit_lights_led() {
        let result = evaluate(&series_circuit());

        assert!(result.is_complete);
        assert!(result.lit_leds.contains("led"));
        assert!(result.active_components.contains("res"));
        assert!(result.powered_nodes.contains("bat"));
        assert_eq!(result.complete_paths.len(), 1);

        let path = &result.complete_paths[0];
        assert_eq!(path.edges, vec!["e1", "e2", "e3"]);
        assert_eq!(path.steps.len(), 4);
        assert_eq!(path.steps[0].terminal, "positive");
        assert_eq!(path.steps[3].terminal, "negative");
    }

    #[test]
    fn test_reversed_led_blocks_circuit() {
        // Same wiring, LED flipped: current would have to enter the cathode.
        let graph = CircuitGraph::from_parts(
            vec![
                node("bat", ComponentKind::Battery),
                node("res", ComponentKind::Resistor),
                node("led", ComponentKind::Led),
            ],
            vec![
                edge("e1", "bat", "positive", "res", "pin1"),
                edge("e2", "res", "pin2", "led", "cathode"),
                edge("e3", "led", "anode", "bat", "negative"),
            ],
        );

        let result = evaluate(&graph);
        assert!(!result.is_complete);
        assert!(result.lit_leds.is_empty());
        // Traversal still reached the resistor before the LED blocked it.
        assert!(result.powered_nodes.contains("res"));
    }

    #[test]
    fn test_open_switch_breaks_circuit() {
        let graph = CircuitGraph::from_parts(
            vec![
                node("bat", ComponentKind::Battery),
                ComponentNode::switch("sw", false),
            ],
            vec![
                edge("e1", "bat", "positive", "sw", "pin1"),
                edge("e2", "sw", "pin2", "bat", "negative"),
            ],
        );

        assert!(!evaluate(&graph).is_complete);
    }

    #[test]
    fn test_closing_the_switch_completes_circuit() {
        let graph = CircuitGraph::from_parts(
            vec![
                node("bat", ComponentKind::Battery),
                ComponentNode::switch("sw", true),
            ],
            vec![
                edge("e1", "bat", "positive", "sw", "pin1"),
                edge("e2", "sw", "pin2", "bat", "negative"),
            ],
        );

        let result = evaluate(&graph);
        assert!(result.is_complete);
        assert!(result.active_components.contains("sw"));
    }

    #[test]
    fn test_switch_state_defaults_to_closed() {
        let graph = CircuitGraph::from_parts(
            vec![
                node("bat", ComponentKind::Battery),
                node("sw", ComponentKind::Switch),
            ],
            vec![
                edge("e1", "bat", "positive", "sw", "pin1"),
                edge("e2", "sw", "pin2", "bat", "negative"),
            ],
        );

        assert!(evaluate(&graph).is_complete);
    }

    #[test]
    fn test_parallel_branches_both_light() {
        let mut nodes = vec![node("bat", ComponentKind::Battery)];
        let mut edges = Vec::new();
        for branch in ["a", "b"] {
            nodes.push(node(&format!("res-{branch}"), ComponentKind::Resistor));
            nodes.push(node(&format!("led-{branch}"), ComponentKind::Led));
            edges.push(edge(
                &format!("e1-{branch}"),
                "bat",
                "positive",
                &format!("res-{branch}"),
                "pin1",
            ));
            edges.push(edge(
                &format!("e2-{branch}"),
                &format!("res-{branch}"),
                "pin2",
                &format!("led-{branch}"),
                "anode",
            ));
            edges.push(edge(
                &format!("e3-{branch}"),
                &format!("led-{branch}"),
                "cathode",
                "bat",
                "negative",
            ));
        }
        let graph = CircuitGraph::from_parts(nodes, edges);

        let result = evaluate(&graph);
        assert!(result.is_complete);
        assert!(result.lit_leds.contains("led-a"));
        assert!(result.lit_leds.contains("led-b"));
        assert!(result.complete_paths.len() >= 2);
    }

    #[test]
    fn test_directional_handles_normalize_end_to_end() {
        // The UI wires the LED's cathode through its "cathode-in" variant.
        let graph = CircuitGraph::from_parts(
            vec![
                node("bat", ComponentKind::Battery),
                node("led", ComponentKind::Led),
            ],
            vec![
                edge("e1", "bat", "positive", "led", "anode"),
                edge("e2", "led", "cathode-in", "bat", "negative"),
            ],
        );

        let result = evaluate(&graph);
        assert!(result.is_complete);
        assert!(result.lit_leds.contains("led"));
    }

    #[test]
    fn test_unknown_kind_is_a_dead_end() {
        let graph = CircuitGraph::from_parts(
            vec![
                node("bat", ComponentKind::Battery),
                node("buzz", ComponentKind::Unknown),
            ],
            vec![
                edge("e1", "bat", "positive", "buzz", "pin1"),
                edge("e2", "buzz", "pin2", "bat", "negative"),
            ],
        );

        assert!(!evaluate(&graph).is_complete);
    }

    #[test]
    fn test_every_lit_led_is_powered() {
        let result = evaluate(&series_circuit());
        for led in &result.lit_leds {
            assert!(result.powered_nodes.contains(led));
        }
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let graph = series_circuit();
        let first = evaluate(&graph);
        let second = evaluate(&graph);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
