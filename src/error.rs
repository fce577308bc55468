//! Error types for the Voltlab circuit evaluator.
//!
//! This module provides a unified error type [`VoltlabError`] covering the
//! I/O boundary of the crate: reading graph documents, decoding the UI's
//! JSON wire format, and the WASM bridge.
//!
//! Evaluation itself is a total function over well-formed graphs and never
//! returns an error: dangling edges are skipped, unknown component kinds
//! dead-end, and a graph without a battery simply yields an empty result.

use thiserror::Error;

/// Result type alias using [`VoltlabError`].
pub type Result<T> = std::result::Result<T, VoltlabError>;

/// Unified error type for all Voltlab operations.
#[derive(Error, Debug)]
pub enum VoltlabError {
    // ============ Wire Format Errors ============
    /// The graph document could not be decoded.
    #[error("Malformed circuit graph: {source}")]
    GraphFormat {
        #[source]
        source: serde_json::Error,
    },

    /// The expected-solution document could not be decoded.
    #[error("Malformed solution spec: {source}")]
    SolutionFormat {
        #[source]
        source: serde_json::Error,
    },

    /// A result could not be encoded back to JSON.
    #[error("Failed to encode result: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },

    // ============ I/O Errors ============
    /// Error reading a graph or solution file.
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ============ WASM Errors ============
    /// WASM-specific error
    #[cfg(feature = "wasm")]
    #[error("WASM error: {message}")]
    WasmError { message: String },
}

impl VoltlabError {
    /// Create a graph decode error.
    pub fn graph_format(source: serde_json::Error) -> Self {
        Self::GraphFormat { source }
    }

    /// Create a solution decode error.
    pub fn solution_format(source: serde_json::Error) -> Self {
        Self::SolutionFormat { source }
    }

    /// Create a file read error.
    pub fn file_read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }
}
