//! DC transfer model of the adder/subtractor board.
//!
//! U1 and U2 run at unity gain (all calculation resistors 10k), so the op-amp
//! outputs are exact sums and differences of the inputs. The CD4053 passes one
//! of them to UY, and the U3/U4 comparators watch the raw op-amp outputs, which
//! makes both flags independent of the switch position.

use shared::domain::{DerivedState, Mode};

/// U3 lights FC when U_ADD rises strictly above this level.
pub const CARRY_THRESHOLD_VOLTS: f64 = 5.0;
/// U4 lights FB when U_SUB falls strictly below this level.
pub const BORROW_THRESHOLD_VOLTS: f64 = 0.0;

/// Derives every circuit quantity from the two inputs and the switch mode.
///
/// Inputs are not clamped; values outside the knob range still produce the
/// ideal unity-gain result.
pub fn compute(input_a: f64, input_b: f64, mode: Mode) -> DerivedState {
    let sum = input_a + input_b;
    let difference = input_a - input_b;

    DerivedState {
        input_a,
        input_b,
        mode,
        sum,
        difference,
        output: select_output(mode, sum, difference),
        carry: sum > CARRY_THRESHOLD_VOLTS,
        borrow: difference < BORROW_THRESHOLD_VOLTS,
    }
}

fn select_output(mode: Mode, sum: f64, difference: f64) -> f64 {
    match mode {
        Mode::Add => sum,
        Mode::Sub => difference,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sum_at_threshold_is_not_carry() {
        assert!(!compute(3.0, 2.0, Mode::Add).carry);
        assert!(compute(3.0, 2.01, Mode::Add).carry);
    }

    #[test]
    fn zero_difference_is_not_borrow() {
        assert!(!compute(2.0, 2.0, Mode::Sub).borrow);
        assert!(compute(2.0, 2.01, Mode::Sub).borrow);
    }

    #[test]
    fn mode_switch_only_moves_output() {
        let add = compute(2.0, 1.5, Mode::Add);
        assert_eq!(add.sum, 3.5);
        assert_eq!(add.difference, 0.5);
        assert_eq!(add.output, 3.5);
        assert!(!add.carry);
        assert!(!add.borrow);

        let sub = compute(2.0, 1.5, Mode::Sub);
        assert_eq!(sub.output, 0.5);
        assert_eq!(sub.carry, add.carry);
        assert_eq!(sub.borrow, add.borrow);
    }

    #[test]
    fn accepts_values_outside_knob_range() {
        let state = compute(12.0, -7.5, Mode::Sub);
        assert_eq!(state.output, 19.5);
        assert!(!state.borrow);

        let add = compute(12.0, 7.5, Mode::Add);
        assert_eq!(add.output, 19.5);
        assert!(add.sum > CARRY_THRESHOLD_VOLTS);
        assert!(add.carry);

        let below = compute(-12.0, 7.5, Mode::Sub);
        assert_eq!(below.difference, -19.5);
        assert!(below.borrow);
    }

    proptest! {
        #[test]
        fn sum_and_difference_ignore_mode(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6) {
            let add = compute(a, b, Mode::Add);
            let sub = compute(a, b, Mode::Sub);
            prop_assert_eq!(add.sum, a + b);
            prop_assert_eq!(sub.sum, a + b);
            prop_assert_eq!(add.difference, a - b);
            prop_assert_eq!(sub.difference, a - b);
            prop_assert_eq!(add.carry, sub.carry);
            prop_assert_eq!(add.borrow, sub.borrow);
        }

        #[test]
        fn output_is_selected_not_blended(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6) {
            prop_assert_eq!(compute(a, b, Mode::Add).output, a + b);
            prop_assert_eq!(compute(a, b, Mode::Sub).output, a - b);
        }

        #[test]
        fn repeated_compute_is_identical(a in -5.0f64..5.0, b in -5.0f64..5.0, sub in any::<bool>()) {
            let mode = if sub { Mode::Sub } else { Mode::Add };
            prop_assert_eq!(compute(a, b, mode), compute(a, b, mode));
        }
    }
}
