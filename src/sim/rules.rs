//! Conduction rules.
//!
//! The entire domain model of "what conducts": for each component kind, the
//! terminals current may continue from after entering at a given terminal.
//! The LED is the only strictly directional component (a diode); everything
//! else that is not a source is a bidirectional pass-through. A switch's
//! pass-through is additionally gated by its state, which the tracer checks
//! before consulting this table.

use crate::circuit::{handles, ComponentKind};

/// Terminals current may continue from after entering `kind` at the
/// (already normalized) `terminal`.
///
/// Battery terminals yield nothing here: `positive` is a source (the tracer
/// starts there, current never passes through it) and `negative` is a sink
/// the tracer recognizes as path completion before ever looking it up.
/// Unknown kinds and unknown terminals are dead ends.
pub fn continuations(kind: ComponentKind, terminal: &str) -> &'static [&'static str] {
    match (kind, terminal) {
        (ComponentKind::Battery, _) => &[],
        (ComponentKind::Led, handles::ANODE) => &[handles::CATHODE],
        // Current may not flow backward through an LED.
        (ComponentKind::Led, handles::CATHODE) => &[],
        (ComponentKind::Resistor, handles::PIN1) => &[handles::PIN2],
        (ComponentKind::Resistor, handles::PIN2) => &[handles::PIN1],
        (ComponentKind::Switch, handles::PIN1) => &[handles::PIN2],
        (ComponentKind::Switch, handles::PIN2) => &[handles::PIN1],
        (ComponentKind::Wire, handles::END1) => &[handles::END2],
        (ComponentKind::Wire, handles::END2) => &[handles::END1],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_battery_terminals_do_not_pass_through() {
        assert!(continuations(ComponentKind::Battery, handles::POSITIVE).is_empty());
        assert!(continuations(ComponentKind::Battery, handles::NEGATIVE).is_empty());
    }

    #[test]
    fn test_led_conducts_forward_only() {
        assert_eq!(
            continuations(ComponentKind::Led, handles::ANODE),
            &[handles::CATHODE]
        );
        assert!(continuations(ComponentKind::Led, handles::CATHODE).is_empty());
    }

    #[test]
    fn test_passthrough_kinds_are_bidirectional() {
        assert_eq!(
            continuations(ComponentKind::Resistor, handles::PIN1),
            &[handles::PIN2]
        );
        assert_eq!(
            continuations(ComponentKind::Resistor, handles::PIN2),
            &[handles::PIN1]
        );
        assert_eq!(
            continuations(ComponentKind::Switch, handles::PIN2),
            &[handles::PIN1]
        );
        assert_eq!(
            continuations(ComponentKind::Wire, handles::END1),
            &[handles::END2]
        );
    }

    #[test]
    fn test_unknown_kind_or_terminal_is_dead_end() {
        assert!(continuations(ComponentKind::Unknown, handles::PIN1).is_empty());
        assert!(continuations(ComponentKind::Wire, "pin1").is_empty());
        assert!(continuations(ComponentKind::Resistor, "").is_empty());
    }
}
