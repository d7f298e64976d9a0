//! File operations module
//!
//! This module contains the checks and preparations done on the output side
//! before anything is written.

mod destination;

pub use destination::{destination_for, ensure_output_dir, resolve_destination};
