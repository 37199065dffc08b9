//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_audit_report, print_evaluation, print_progress, write_board, write_outcome,
};
