//! Adapter implementations of the repository ports.

pub mod memory;
pub mod postgres;
