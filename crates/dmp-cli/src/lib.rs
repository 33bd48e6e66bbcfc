//! CLI library components for the research output schema mapper.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
