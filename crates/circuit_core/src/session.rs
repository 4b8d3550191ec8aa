use shared::domain::{DerivedState, Mode};
use tokio::sync::watch;
use tracing::debug;

use crate::{
    controls::{Knob, DEFAULT_INPUT_A_VOLTS, DEFAULT_INPUT_B_VOLTS},
    sampler::TransferChart,
    status::StatusReport,
    transfer::compute,
};

/// Live editing state of one simulator window.
///
/// Every setter recomputes the snapshot before returning and publishes it to
/// subscribers, so readers never observe inputs and outputs out of step.
pub struct CircuitSession {
    input_a: Knob,
    input_b: Knob,
    mode: Mode,
    state_tx: watch::Sender<DerivedState>,
}

impl CircuitSession {
    pub fn new() -> Self {
        Self::with_inputs(DEFAULT_INPUT_A_VOLTS, DEFAULT_INPUT_B_VOLTS, Mode::default())
    }

    pub fn with_inputs(input_a: f64, input_b: f64, mode: Mode) -> Self {
        let input_a = Knob::new(input_a);
        let input_b = Knob::new(input_b);
        let (state_tx, _) = watch::channel(compute(input_a.value(), input_b.value(), mode));
        Self {
            input_a,
            input_b,
            mode,
            state_tx,
        }
    }

    pub fn input_a(&self) -> Knob {
        self.input_a
    }

    pub fn input_b(&self) -> Knob {
        self.input_b
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_input_a(&mut self, value: f64) -> DerivedState {
        self.input_a.set(value);
        self.recompute()
    }

    pub fn set_input_b(&mut self, value: f64) -> DerivedState {
        self.input_b.set(value);
        self.recompute()
    }

    pub fn set_mode(&mut self, mode: Mode) -> DerivedState {
        self.mode = mode;
        self.recompute()
    }

    pub fn state(&self) -> DerivedState {
        *self.state_tx.borrow()
    }

    pub fn status(&self) -> StatusReport {
        StatusReport::from(&self.state())
    }

    /// Chart for the current input A and mode; input B does not affect it.
    pub fn chart(&self) -> TransferChart {
        TransferChart::new(self.input_a.value(), self.mode)
    }

    pub fn subscribe(&self) -> watch::Receiver<DerivedState> {
        self.state_tx.subscribe()
    }

    fn recompute(&mut self) -> DerivedState {
        let state = compute(self.input_a.value(), self.input_b.value(), self.mode);
        debug!(
            input_a = state.input_a,
            input_b = state.input_b,
            mode = ?state.mode,
            output = state.output,
            carry = state.carry,
            borrow = state.borrow,
            "recomputed circuit state"
        );
        self.state_tx.send_replace(state);
        state
    }
}

impl Default for CircuitSession {
    fn default() -> Self {
        Self::new()
    }
}
