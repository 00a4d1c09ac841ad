//! Utilities used for testing, benchmarking and profiling.

pub mod perft;
pub use perft::run_perft;
