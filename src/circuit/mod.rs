//! Circuit graph representation and solution checking.
//!
//! This module holds the board state in the editing UI's shape: placed
//! components as nodes, user-drawn wires as edges between named terminals.
//! [`CircuitGraph`] answers the adjacency queries the evaluator needs and
//! [`validate_solution`] checks a board against an experiment's expectations.

mod graph;
mod types;
mod validate;

pub use graph::CircuitGraph;
pub use types::*;
pub use validate::{
    validate_solution, ExpectedSolution, RequiredComponent, RequiredConnection, Validation,
};
