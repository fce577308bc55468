//! WASM bindings for Voltlab Core.
//!
//! JavaScript-friendly bindings for the browser UI. The boundary is JSON
//! strings in both directions, matching the React Flow document the editor
//! already holds.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { evaluate_circuit, check_solution } from 'voltlab_core';
//!
//! await init();
//!
//! const doc = JSON.stringify({ nodes, edges });
//! const evaluation = JSON.parse(evaluate_circuit(doc));
//! setGlow(evaluation.poweredNodes, evaluation.litLeds);
//!
//! // On the "check solution" button:
//! const verdict = JSON.parse(check_solution(doc, JSON.stringify(experiment.solution)));
//! showFeedback(verdict.isCorrect, verdict.feedback);
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::{validate_solution, CircuitGraph, ExpectedSolution};
use crate::sim::evaluate;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Evaluate a board graph document.
///
/// # Arguments
/// * `graph_json` - The board as `{"nodes": [...], "edges": [...]}`
///
/// # Returns
/// The evaluation result as a JSON string, or an error for a malformed
/// document.
#[wasm_bindgen]
pub fn evaluate_circuit(graph_json: &str) -> Result<String, JsValue> {
    let graph =
        CircuitGraph::from_json(graph_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let result = evaluate(&graph);
    serde_json::to_string(&result).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Check a board against an experiment's solution spec.
///
/// # Arguments
/// * `graph_json` - The board as `{"nodes": [...], "edges": [...]}`
/// * `solution_json` - The solution spec, or `undefined` for the generic
///   "did it work" check
///
/// # Returns
/// The validation verdict as a JSON string:
/// `{"isCorrect": ..., "feedback": ..., "simulation": {...}}`.
#[wasm_bindgen]
pub fn check_solution(
    graph_json: &str,
    solution_json: Option<String>,
) -> Result<String, JsValue> {
    let graph =
        CircuitGraph::from_json(graph_json).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let expected = solution_json
        .as_deref()
        .map(ExpectedSolution::from_json)
        .transpose()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let result = validate_solution(&graph, expected.as_ref());
    serde_json::to_string(&result).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
