//! Bounded input knobs of the signal generator.

use serde::{Deserialize, Serialize};

pub const KNOB_MIN_VOLTS: f64 = -5.0;
pub const KNOB_MAX_VOLTS: f64 = 5.0;
pub const KNOB_STEP_VOLTS: f64 = 0.1;
const STEPS_PER_VOLT: f64 = 10.0;

pub const DEFAULT_INPUT_A_VOLTS: f64 = 2.0;
pub const DEFAULT_INPUT_B_VOLTS: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Knob {
    value: f64,
}

impl Knob {
    pub fn new(value: f64) -> Self {
        Self {
            value: quantize(value),
        }
    }

    pub fn value(self) -> f64 {
        self.value
    }

    /// Stores `value` clamped to the knob range and snapped to 0.1 V.
    pub fn set(&mut self, value: f64) -> f64 {
        self.value = quantize(value);
        self.value
    }

    pub fn readout(self) -> String {
        format!("{:.2}V", self.value)
    }
}

fn quantize(value: f64) -> f64 {
    let snapped = (value * STEPS_PER_VOLT).round() / STEPS_PER_VOLT;
    // -0.0 would otherwise render as "-0.00V".
    let snapped = if snapped == 0.0 { 0.0 } else { snapped };
    snapped.clamp(KNOB_MIN_VOLTS, KNOB_MAX_VOLTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snaps_to_tenths() {
        let mut knob = Knob::new(0.0);
        assert_eq!(knob.set(0.34), 0.3);
        assert_eq!(knob.set(-1.26), -1.3);
        assert_eq!(knob.set(1.5), 1.5);
    }

    #[test]
    fn clamps_to_range() {
        let mut knob = Knob::new(9.0);
        assert_eq!(knob.value(), KNOB_MAX_VOLTS);
        assert_eq!(knob.set(-12.0), KNOB_MIN_VOLTS);
    }

    #[test]
    fn readout_uses_two_decimals() {
        assert_eq!(Knob::new(DEFAULT_INPUT_B_VOLTS).readout(), "1.50V");
        assert_eq!(Knob::new(-5.0).readout(), "-5.00V");
    }

    #[test]
    fn small_negative_values_snap_to_positive_zero() {
        let mut knob = Knob::new(1.0);
        let value = knob.set(-0.04);
        assert_eq!(value, 0.0);
        assert!(value.is_sign_positive());
        assert_eq!(knob.readout(), "0.00V");
    }
}
