//! Solution checking.
//!
//! Runs once per explicit "check solution" action. Without an authored
//! solution spec, the check is generic ("did the circuit work"); with one,
//! a short-circuiting sequence of checks produces the first applicable
//! failure. Verdicts are feedback strings, never errors: a wrong circuit is
//! a normal outcome, not an exceptional one.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VoltlabError};
use crate::sim::{evaluate, Evaluation};

use super::graph::CircuitGraph;
use super::types::ComponentKind;

const FEEDBACK_NOT_COMPLETE: &str =
    "Circuit is not complete. Make sure to connect all components properly.";
const FEEDBACK_LED_NOT_LIT: &str =
    "The circuit is closed but the LED is not lit. Check the LED polarity.";
const FEEDBACK_COMPLETE_LED_LIT: &str = "Circuit is complete and LED is lit!";
const FEEDBACK_COMPLETE: &str = "Circuit is complete!";
const FEEDBACK_MISSING_COMPONENTS: &str = "Not all required components are placed.";
const FEEDBACK_MISSING_CONNECTIONS: &str =
    "Some required connections are missing or incorrect.";
const FEEDBACK_LED_SHOULD_BE_LIT: &str =
    "The LED should be lit. Check your connections and the LED polarity.";
const FEEDBACK_LED_SHOULD_NOT_BE_LIT: &str =
    "The LED should not be lit in this configuration.";
const FEEDBACK_CORRECT: &str = "Perfect! Your circuit is correct and working as expected!";

/// A required component in an authored solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredComponent {
    #[serde(rename = "type")]
    pub kind: ComponentKind,
}

/// A required direct connection between two component kinds. Matching is by
/// kind only, never by id or terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredConnection {
    pub from: ComponentKind,
    pub to: ComponentKind,
}

/// An authored target specification for an experiment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedSolution {
    #[serde(default)]
    pub components: Vec<RequiredComponent>,
    #[serde(default)]
    pub connections: Vec<RequiredConnection>,
    #[serde(rename = "shouldLightLED", skip_serializing_if = "Option::is_none")]
    pub should_light_led: Option<bool>,
}

impl ExpectedSolution {
    /// Decode a solution spec from the experiment's JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(VoltlabError::solution_format)
    }

    /// Whether this spec expects a lit LED. Unset defaults to true.
    pub fn should_light_led(&self) -> bool {
        self.should_light_led.unwrap_or(true)
    }
}

/// The verdict of a solution check, with the evaluation that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    pub is_correct: bool,
    pub feedback: String,
    pub simulation: Evaluation,
}

impl Validation {
    fn new(is_correct: bool, feedback: &str, simulation: Evaluation) -> Self {
        Self {
            is_correct,
            feedback: feedback.to_string(),
            simulation,
        }
    }
}

/// Check a graph against an authored solution, or generically when none is
/// supplied.
///
/// Generic mode: correct iff the circuit is complete and, when any LED is
/// placed, at least one is lit.
///
/// Target mode short-circuits at the first failing check, in order:
/// required components, completeness, required connections, LED expectation.
pub fn validate_solution(
    graph: &CircuitGraph,
    expected: Option<&ExpectedSolution>,
) -> Validation {
    let simulation = evaluate(graph);

    let Some(expected) = expected else {
        return validate_generic(graph, simulation);
    };

    let has_all_components = expected
        .components
        .iter()
        .all(|required| graph.contains_kind(required.kind));
    if !has_all_components {
        return Validation::new(false, FEEDBACK_MISSING_COMPONENTS, simulation);
    }

    if !simulation.is_complete {
        return Validation::new(false, FEEDBACK_NOT_COMPLETE, simulation);
    }

    let has_required_connections = expected.connections.iter().all(|conn| {
        graph.edges.iter().any(|edge| {
            let source_kind = graph.node(&edge.source).map(|n| n.kind);
            let target_kind = graph.node(&edge.target).map(|n| n.kind);
            source_kind == Some(conn.from) && target_kind == Some(conn.to)
        })
    });
    if !has_required_connections {
        return Validation::new(false, FEEDBACK_MISSING_CONNECTIONS, simulation);
    }

    let led_is_lit = !simulation.lit_leds.is_empty();
    if expected.should_light_led() && !led_is_lit {
        return Validation::new(false, FEEDBACK_LED_SHOULD_BE_LIT, simulation);
    }
    if !expected.should_light_led() && led_is_lit {
        return Validation::new(false, FEEDBACK_LED_SHOULD_NOT_BE_LIT, simulation);
    }

    Validation::new(true, FEEDBACK_CORRECT, simulation)
}

fn validate_generic(graph: &CircuitGraph, simulation: Evaluation) -> Validation {
    if !simulation.is_complete {
        return Validation::new(false, FEEDBACK_NOT_COMPLETE, simulation);
    }

    let has_led = graph.contains_kind(ComponentKind::Led);
    if has_led && simulation.lit_leds.is_empty() {
        return Validation::new(false, FEEDBACK_LED_NOT_LIT, simulation);
    }

    let feedback = if has_led {
        FEEDBACK_COMPLETE_LED_LIT
    } else {
        FEEDBACK_COMPLETE
    };
    Validation::new(true, feedback, simulation)
}
