//! Command implementations for the sitetool CLI

pub mod flags;
pub mod options;
pub mod sources;
pub mod style;
