//! Core building blocks: run parameters, directory traversal, and the
//! subprocess runners. These are consumed by the high-level `api` module.
pub mod exec;
pub mod params;
pub mod traversal;
