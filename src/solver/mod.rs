//! Complete search for timetable constraint satisfaction.
//!
//! Implements systematic backtracking with forward-checking propagation
//! over the compiled variable space. Written for feasibility only: there
//! is no objective function, the first satisfying assignment wins.
//!
//! # Key Components
//!
//! - [`SearchEngine`] — single-use backtracking engine
//! - [`SolverConfig`] — wall-clock budget (default 60 s)
//! - [`SearchOutcome`] / [`SolverStatus`] / [`SearchStats`] — results

mod config;
mod engine;
mod types;

pub use config::SolverConfig;
pub use engine::SearchEngine;
pub use types::{SearchOutcome, SearchStats, SolverStatus};
