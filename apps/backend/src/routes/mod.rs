//! HTTP endpoints, one module per component.

pub mod countdowns;
pub mod eisenhower;
pub mod habits;
pub mod runs;
pub mod settings;
pub mod todos;
pub mod workouts;
