//! File operation functionality
//!
//! This module applies a rename plan to the filesystem, refusing to
//! overwrite anything that already exists.

mod actions;

pub use actions::{apply_plan, verify_plan};
