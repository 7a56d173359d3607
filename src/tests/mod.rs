//! Unit tests for the domain model and the board services.

mod support;
