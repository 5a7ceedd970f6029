//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod alerts;
pub mod credit;
pub mod dashboard;
pub mod export;
pub mod notifications;
pub mod preferences;
pub mod transactions;

// Re-export all handlers for use in router
pub use alerts::*;
pub use credit::*;
pub use dashboard::*;
pub use export::*;
pub use notifications::*;
pub use preferences::*;
pub use transactions::*;
