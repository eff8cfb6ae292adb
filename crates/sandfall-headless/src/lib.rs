//! # Sandfall Headless
//!
//! Runs the falling-sand simulation without a window: builds a sandbox from
//! layered configuration, paints a starting scene and prints the grid as text.

pub mod config;
pub mod runner;
pub mod scene;
pub mod tools;

pub use config::HeadlessConfig;
pub use runner::Runner;
