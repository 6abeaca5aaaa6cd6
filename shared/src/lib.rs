//! # AuthKit Shared
//!
//! Configuration structures, wire types and small utilities shared across
//! the AuthKit workspace crates.

pub mod config;
pub mod types;
pub mod utils;
