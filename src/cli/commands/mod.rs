//! Command implementation modules
//!
//! Each command renders its result to a string; the router decides where it
//! is written.

pub mod charts;
pub mod options;
pub mod report;

// Re-export command execution functions
pub use charts::{run_chart_command, Chart};
pub use options::run_options_command;
pub use report::run_report_command;
