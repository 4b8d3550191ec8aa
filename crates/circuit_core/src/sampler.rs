//! Transfer-characteristic sweep: UY against UB with UA held constant.

use serde::Serialize;
use shared::domain::{CurvePoint, Mode};

use crate::transfer::{compute, BORROW_THRESHOLD_VOLTS, CARRY_THRESHOLD_VOLTS};

pub const SWEEP_START_VOLTS: f64 = -5.0;
pub const SWEEP_END_VOLTS: f64 = 5.0;
pub const SWEEP_STEP_VOLTS: f64 = 0.5;
pub const SWEEP_POINTS: usize = 21;

/// Output axis range shown on the chart.
pub const CHART_Y_DOMAIN: (f64, f64) = (-10.0, 10.0);

/// Sweeps input B across the full knob range for a fixed input A.
///
/// The live value of input B plays no part here. Abscissae are derived from
/// the index rather than accumulated so the last point lands exactly on
/// [`SWEEP_END_VOLTS`].
pub fn sample(input_a: f64, mode: Mode) -> Vec<CurvePoint> {
    (0..SWEEP_POINTS)
        .map(|i| {
            let input_b = SWEEP_START_VOLTS + i as f64 * SWEEP_STEP_VOLTS;
            let state = compute(input_a, input_b, mode);
            CurvePoint {
                input_b,
                sum: state.sum,
                difference: state.difference,
                active: state.output,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceLine {
    pub axis: Axis,
    pub value: f64,
    pub label: Option<&'static str>,
    /// Dashed comparator threshold rather than a plain axis line.
    pub threshold: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Sum,
    Difference,
    Active,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveSeries {
    pub kind: SeriesKind,
    pub name: &'static str,
    pub visible: bool,
}

/// Everything the chart collaborator draws for one (input A, mode) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferChart {
    pub input_a: f64,
    pub mode: Mode,
    pub points: Vec<CurvePoint>,
    pub y_domain: (f64, f64),
    pub reference_lines: Vec<ReferenceLine>,
    pub series: Vec<CurveSeries>,
}

impl TransferChart {
    pub fn new(input_a: f64, mode: Mode) -> Self {
        Self {
            input_a,
            mode,
            points: sample(input_a, mode),
            y_domain: CHART_Y_DOMAIN,
            reference_lines: reference_lines(),
            series: vec![
                CurveSeries {
                    kind: SeriesKind::Sum,
                    name: "Add Curve (Reference)",
                    visible: mode != Mode::Add,
                },
                CurveSeries {
                    kind: SeriesKind::Difference,
                    name: "Sub Curve (Reference)",
                    visible: mode != Mode::Sub,
                },
                CurveSeries {
                    kind: SeriesKind::Active,
                    name: mode.curve_name(),
                    visible: true,
                },
            ],
        }
    }

    pub fn title(&self) -> String {
        format!(
            "Transfer Characteristics (Constant UA = {:.1}V)",
            self.input_a
        )
    }

    pub fn x_label(&self) -> &'static str {
        "Input UB (V)"
    }

    pub fn y_label(&self) -> &'static str {
        "Output (V)"
    }

    pub fn x_domain(&self) -> (f64, f64) {
        (SWEEP_START_VOLTS, SWEEP_END_VOLTS)
    }

    /// `(input_b, value)` pairs for one series, in sweep order.
    pub fn series_values(&self, kind: SeriesKind) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|point| {
                let value = match kind {
                    SeriesKind::Sum => point.sum,
                    SeriesKind::Difference => point.difference,
                    SeriesKind::Active => point.active,
                };
                (point.input_b, value)
            })
            .collect()
    }
}

fn reference_lines() -> Vec<ReferenceLine> {
    vec![
        ReferenceLine {
            axis: Axis::Y,
            value: 0.0,
            label: None,
            threshold: false,
        },
        ReferenceLine {
            axis: Axis::X,
            value: 0.0,
            label: None,
            threshold: false,
        },
        ReferenceLine {
            axis: Axis::Y,
            value: CARRY_THRESHOLD_VOLTS,
            label: Some("Carry (>5V)"),
            threshold: true,
        },
        ReferenceLine {
            axis: Axis::Y,
            value: BORROW_THRESHOLD_VOLTS,
            label: Some("Borrow (<0V)"),
            threshold: true,
        },
    ]
}
