//! Application services and ports.

#![forbid(unsafe_code)]

mod retention_cleanup_service;
mod retention_ports;

pub use retention_cleanup_service::{CleanupReport, RetentionCleanupService, SweepOutcome};
pub use retention_ports::RetentionStore;
