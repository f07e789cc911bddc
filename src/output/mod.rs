//! Terminal output formatting
//!
//! Board rendering and pretty-printing of command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_check_report, print_crosswordle, print_daily_report, print_double,
    print_outcome, print_score_result, print_session, print_stress_report, print_waffle,
    print_waffle_outcome, print_waffle_solution,
};
