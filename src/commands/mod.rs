//! Command implementations

pub mod benchmark;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use simple::{SimpleConfig, run_simple};
pub use solve::{SolveResult, SolveStep, solve_word};
