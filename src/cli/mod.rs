//! Command Line Interface (CLI) layer for muonbatch.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that turns flags into
//! `BatchParams` and drives `muonbatch::run_batch`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
