//! Command handlers, one module per top-level subcommand.

pub mod checks;
pub mod config_cmd;
pub mod customers;
pub mod files;
pub mod orders;
pub mod reminders;
pub mod stats;
