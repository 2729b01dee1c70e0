//! # harvestplan-store
//!
//! Persistence and configuration for the harvestplan scheduling engine.
//!
//! This crate provides:
//! - YAML round-tripping for workers and field definitions
//! - Task-table ingestion with configurable column bindings
//! - The per-run plan configuration value object
//!
//! The scheduler core never touches the filesystem; this crate hydrates its
//! inputs (a `Workforce`, a task table, start dates) and nothing more.

use thiserror::Error;

pub mod config;
pub mod fieldbook;
pub mod tasks;
pub mod workers;

pub use config::{load_config, PlanConfig};
pub use fieldbook::{load_field_book, save_field_book};
pub use tasks::{read_field_table, TableBindings};
pub use workers::{load_workforce, save_workforce};

use harvestplan_core::{FieldError, WorkforceError};

/// Persistence error
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Workforce(#[from] WorkforceError),

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("invalid weekday name '{0}'")]
    InvalidWeekday(String),

    #[error("row {row} is missing column '{column}'")]
    MissingColumn { column: String, row: usize },

    #[error("row {row} has an invalid value in column '{column}'")]
    InvalidValue { column: String, row: usize },
}
