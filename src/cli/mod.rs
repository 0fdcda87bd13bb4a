//! CLI surface for sitetool

mod app;
mod commands;

pub use app::run;
