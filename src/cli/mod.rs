//! CLI command handlers
//!
//! This module contains all CLI-related functionality including:
//! - Argument parsing structures
//! - Command implementations
//! - Output rendering

pub mod args;
pub mod commands;
pub mod logging;
pub mod output;
pub mod router;

// Re-export the main CLI structures for convenience
pub use args::{Cli, Commands};
pub use logging::{get_log_level, init_tracing};
pub use output::OutputFormat;
pub use router::{describe_failure, execute_command, exit_code_for, load_config};
