//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Core commands (init, reset, serve) and shared utilities (open_db)
//! - `ledger` - Transaction entry and listing (add, sms, list, delete, export)
//! - `reports` - Dashboard, forecast, alert, and credit commands
//! - `notify` - Notification and preference commands

pub mod core;
pub mod ledger;
pub mod notify;
pub mod reports;

// Re-export command functions for main.rs
pub use core::*;
pub use ledger::*;
pub use notify::*;
pub use reports::*;
