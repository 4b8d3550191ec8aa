//! Simulation core for the InfoCup analog adder/subtractor board.

pub mod controls;
pub mod sampler;
mod session;
pub mod status;
pub mod transfer;

pub use controls::Knob;
pub use sampler::{sample, TransferChart};
pub use session::CircuitSession;
pub use status::{FlagState, StatusReport};
pub use transfer::compute;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
