use serde::{Deserialize, Serialize};

/// Selects which combination of the two inputs drives the output UY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mode {
    #[default]
    Add,
    Sub,
}

/// Logic level on the CD4053 control pin (A, pin 11) driven by button S1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwitchLevel {
    /// Button pressed, pin pulled to Vee.
    Low,
    /// Button released, pin pulled to Vdd.
    High,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Add => "ADD (A + B)",
            Mode::Sub => "SUB (A - B)",
        }
    }

    pub fn curve_name(self) -> &'static str {
        match self {
            Mode::Add => "UY (Addition)",
            Mode::Sub => "UY (Subtraction)",
        }
    }

    pub fn switch_level(self) -> SwitchLevel {
        match self {
            Mode::Add => SwitchLevel::Low,
            Mode::Sub => SwitchLevel::High,
        }
    }
}

impl SwitchLevel {
    pub fn label(self) -> &'static str {
        match self {
            SwitchLevel::Low => "0 (Vee)",
            SwitchLevel::High => "1 (Vdd)",
        }
    }
}

/// Snapshot of every quantity the circuit derives from one input triple.
///
/// Produced wholesale by the transfer model; consumers only read it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedState {
    pub input_a: f64,
    pub input_b: f64,
    pub mode: Mode,
    /// U_ADD, output of the U1 adder.
    pub sum: f64,
    /// U_SUB, output of the U2 differential amplifier.
    pub difference: f64,
    /// UY, whichever of `sum`/`difference` the switch passes through.
    pub output: f64,
    /// FC, driven by the U3 comparator.
    pub carry: bool,
    /// FB, driven by the U4 comparator.
    pub borrow: bool,
}

/// One sample of the transfer sweep over input B.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub input_b: f64,
    pub sum: f64,
    pub difference: f64,
    pub active: f64,
}
