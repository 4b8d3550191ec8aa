//! UI layer for desktop GUI: app shell and chart painting.

pub mod app;
pub mod chart;

pub use app::SimulatorApp;
