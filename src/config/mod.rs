//! Settings handling
//!
//! This module contains the optional settings file that provides defaults
//! for the command-line flags.

mod loader;
mod model;

pub use loader::{load_settings, read_or_create};
pub use model::Settings;
