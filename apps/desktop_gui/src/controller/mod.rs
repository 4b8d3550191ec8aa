//! Controller layer: UI events and command orchestration.

pub mod chat_view;
pub mod events;
pub mod orchestration;
