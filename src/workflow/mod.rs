//! Workflow module
//!
//! This module contains components for orchestrating the workflow steps.

mod context;
mod engine;

pub use context::{FileFailure, RunContext, RunStats};
pub use engine::{process_files, process_files_with, ProcessingOptions};
