//! Domain models for the consultorio system.

mod patient;

pub use patient::*;
