//! Domain values and invariants for retention sweeps.

#![forbid(unsafe_code)]

mod retention;
mod sweep_target;

pub use retention::{DEFAULT_RETENTION_DAYS, RetentionPolicy};
pub use sweep_target::{CollectionName, FieldName, SweepTarget};
