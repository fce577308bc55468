//! # Voltlab Core
//!
//! The circuit evaluation engine behind an educational electronics lab.
//!
//! The surrounding game lets learners place components (batteries, LEDs,
//! resistors, switches, wires) on a board and wire their terminals together.
//! This library answers the only non-trivial question in that loop: given
//! the resulting graph, can current flow from a battery's positive terminal
//! back to a negative terminal, which components does it pass through, and
//! do the LEDs light (respecting polarity)?
//!
//! ## Architecture
//!
//! - [`circuit`] - Graph model (nodes, edges, terminals) and solution checking
//! - [`sim`] - Conduction rules, path tracing and result aggregation
//!
//! The engine is pure: it consumes an immutable graph snapshot and produces
//! an [`Evaluation`] with no I/O and no shared state. The UI recomputes it
//! on every board change and reads the summary sets to drive glow and
//! active-highlight rendering; [`validate_solution`] runs once per explicit
//! "check solution" action.
//!
//! ## Usage
//!
//! ```
//! use voltlab_core::{evaluate, CircuitGraph};
//!
//! let graph = CircuitGraph::from_json(r#"{
//!     "nodes": [
//!         {"id": "bat", "type": "battery", "data": {"voltage": "9V"}},
//!         {"id": "led", "type": "led", "data": {"color": "red"}}
//!     ],
//!     "edges": [
//!         {"id": "e1", "source": "bat", "sourceHandle": "positive",
//!          "target": "led", "targetHandle": "anode"},
//!         {"id": "e2", "source": "led", "sourceHandle": "cathode",
//!          "target": "bat", "targetHandle": "negative"}
//!     ]
//! }"#).unwrap();
//!
//! let result = evaluate(&graph);
//! assert!(result.is_complete);
//! assert!(result.lit_leds.contains("led"));
//! ```
//!
//! ### Native CLI
//!
//! ```bash
//! voltlab board.json --solution experiment.json
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import init, { evaluate_circuit } from 'voltlab_core';
//!
//! await init();
//! const result = JSON.parse(evaluate_circuit(JSON.stringify({ nodes, edges })));
//! ```

pub mod circuit;
pub mod error;
pub mod sim;

// Re-export main types for convenience
pub use circuit::{
    validate_solution, CircuitGraph, ComponentKind, ComponentNode, ConnectionEdge,
    ExpectedSolution, Validation,
};
pub use error::{Result, VoltlabError};
pub use sim::{evaluate, Evaluation};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::{check_solution, evaluate_circuit};
