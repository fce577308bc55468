//! Core types for the circuit graph.
//!
//! Nodes and edges mirror the editing UI's wire format: a node carries a
//! string id, a component kind and a free-form `data` blob; an edge connects
//! two nodes at named terminals ("handles").

use std::fmt;

use serde::{Deserialize, Serialize};

/// Terminal names used by the stock component kinds.
pub mod handles {
    pub const POSITIVE: &str = "positive";
    pub const NEGATIVE: &str = "negative";
    pub const ANODE: &str = "anode";
    pub const CATHODE: &str = "cathode";
    pub const PIN1: &str = "pin1";
    pub const PIN2: &str = "pin2";
    pub const END1: &str = "end1";
    pub const END2: &str = "end2";
}

/// The kind of a placed component. Determines its conduction rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Battery,
    Led,
    Resistor,
    Switch,
    Wire,
    /// Any kind string the evaluator does not recognize. Conducts nothing.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComponentKind::Battery => "battery",
            ComponentKind::Led => "led",
            ComponentKind::Resistor => "resistor",
            ComponentKind::Switch => "switch",
            ComponentKind::Wire => "wire",
            ComponentKind::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

/// Kind-specific attributes carried on a node.
///
/// The UI stores these in a single `data` object regardless of kind; fields
/// that do not apply to a kind are simply absent. The LED's lit state is
/// derived per evaluation and never stored here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentData {
    /// Battery voltage label, e.g. "9V".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voltage: Option<String>,
    /// LED color label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Resistor resistance label, e.g. "220Ω".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resistance: Option<String>,
    /// Switch state. Absent means closed.
    #[serde(rename = "isClosed", skip_serializing_if = "Option::is_none")]
    pub is_closed: Option<bool>,
}

/// A component placed on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentNode {
    /// Unique id, stable for the lifetime of the placement.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    #[serde(default)]
    pub data: ComponentData,
}

impl ComponentNode {
    /// Create a node with default attributes.
    pub fn new(id: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            id: id.into(),
            kind,
            data: ComponentData::default(),
        }
    }

    /// Create a switch node with an explicit state.
    pub fn switch(id: impl Into<String>, closed: bool) -> Self {
        Self {
            id: id.into(),
            kind: ComponentKind::Switch,
            data: ComponentData {
                is_closed: Some(closed),
                ..ComponentData::default()
            },
        }
    }

    /// Whether this node conducts as a closed switch.
    /// Unset state defaults to closed; non-switch kinds are unaffected by this.
    pub fn is_closed(&self) -> bool {
        self.data.is_closed.unwrap_or(true)
    }
}

/// A user-drawn connection between two node terminals.
///
/// Edges are directed: traversal follows them from `(source, source_handle)`
/// to `(target, target_handle)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "sourceHandle", default)]
    pub source_handle: String,
    #[serde(rename = "targetHandle", default)]
    pub target_handle: String,
}

impl ConnectionEdge {
    /// Create an edge between two terminals.
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        source_handle: impl Into<String>,
        target: impl Into<String>,
        target_handle: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            source_handle: source_handle.into(),
            target_handle: target_handle.into(),
        }
    }
}

/// Normalize a handle id to its base terminal name.
///
/// Bidirectional components expose the same physical pin under two handle
/// ids, one acting as a current sink and one as a source (the UI renders
/// e.g. `cathode` and `cathode-in` for an LED). Rule lookup works on the
/// base name, so a single directional suffix is stripped.
pub fn base_terminal(handle: &str) -> &str {
    handle
        .strip_suffix("-in")
        .or_else(|| handle.strip_suffix("-out"))
        .unwrap_or(handle)
}
