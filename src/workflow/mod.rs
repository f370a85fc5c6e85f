//! Run orchestration
//!
//! This module wires discovery, classification, planning, and application
//! together into a single run.

mod context;
mod engine;

pub use context::{RunContext, RunOptions, RunStats};
pub use engine::{run, run_from_matches};
