use serde::Serialize;
use shared::domain::{DerivedState, SwitchLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagState {
    Active,
    Off,
}

impl FlagState {
    pub fn is_active(self) -> bool {
        self == FlagState::Active
    }

    pub fn label(self) -> &'static str {
        match self {
            FlagState::Active => "ACTIVE",
            FlagState::Off => "OFF",
        }
    }
}

impl From<bool> for FlagState {
    fn from(lit: bool) -> Self {
        if lit {
            FlagState::Active
        } else {
            FlagState::Off
        }
    }
}

/// Text the status card and schematic annotations show for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReport {
    pub carry: FlagState,
    pub borrow: FlagState,
    pub switch: SwitchLevel,
    pub input_a: String,
    pub input_b: String,
    pub sum: String,
    pub difference: String,
    pub output: String,
}

impl From<&DerivedState> for StatusReport {
    fn from(state: &DerivedState) -> Self {
        Self {
            carry: state.carry.into(),
            borrow: state.borrow.into(),
            switch: state.mode.switch_level(),
            input_a: format!("{:.1}V", state.input_a),
            input_b: format!("{:.1}V", state.input_b),
            sum: format!("{:.2}V", state.sum),
            difference: format!("{:.2}V", state.difference),
            output: format!("{:.2}V", state.output),
        }
    }
}
