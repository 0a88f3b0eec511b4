//! # brandkit
//!
//! Generates the brand's logo artwork: lockups of the logomark with the
//! wordmark, the standalone logotype, and an HTML sheet comparing the
//! wordmark across candidate fonts.

pub mod cli;
pub mod pipeline;

pub use cli::{AppError, Cli, Command};
pub use pipeline::{
    explore, generate_lockups, write_exploration, ExplorationReport, LockupSummary, PipelineError,
    SkippedFont,
};
