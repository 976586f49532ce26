//! Chromapick - color conversion and palette extraction
//!
//! Command-line front end for `chroma-core`.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
