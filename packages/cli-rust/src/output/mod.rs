//! Output utilities for CLI commands
//!
//! Credentials go to stdout; everything else (notes, warnings, errors)
//! goes to stderr.

pub mod errors;
