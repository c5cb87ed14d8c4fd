//! Common utilities for the Quokka top-layer runtime.
//!
//! This crate provides shared infrastructure used by all runtime components:
//! - **Warning System** - deduplicated, colored terminal diagnostics

pub mod warning;
