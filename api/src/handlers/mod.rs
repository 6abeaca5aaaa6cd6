//! Shared handler utilities

pub mod error;
