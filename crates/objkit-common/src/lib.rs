//! Common utilities for the objkit crates.
//!
//! This crate provides shared infrastructure used by the other crates:
//! - **Warning System** - colored terminal output for unusual input

pub mod warning;
