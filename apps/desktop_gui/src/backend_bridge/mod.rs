//! Bridge between the egui thread and the async assistant worker.

pub mod commands;
pub mod runtime;
