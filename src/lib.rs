//! sitetool - build-site tooling for C firmware projects
//!
//! This library provides the build-configuration helpers that used to live
//! in a firmware project's SCons site tools: recursive source-file globbing
//! relative to a build origin, logging-configuration injection as compiler
//! defines, and a style-check wrapper around an external lint tool.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod globber;
pub mod logconfig;
pub mod options;
pub mod output;
pub mod paths;
pub mod style;
