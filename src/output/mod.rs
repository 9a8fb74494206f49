//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_solve_report, print_stats_report};
