//! Core utilities for the classgen generator.
//!
//! This crate provides the pieces shared by the model loader, the code
//! generator, and the CLI: atomic output-file commits and the generator
//! version stamp.

mod file;
mod version;

pub use file::{OutputFile, WriteError};
pub use version::Version;
