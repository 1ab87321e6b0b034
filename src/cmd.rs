//! Commands which the tool executes.

pub mod update;
