//! Controller layer: widget events and their dispatch into the layout controller.

pub mod events;
pub mod orchestration;
