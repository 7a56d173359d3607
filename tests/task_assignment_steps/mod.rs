//! Step definitions for task assignment scenarios.

mod given;
mod then;
mod when;
pub mod world;
