//! # harvestplan-core
//!
//! Core domain model and traits for the harvestplan scheduling engine.
//!
//! This crate provides:
//! - Domain types: `Worker`, `Workforce`, `WorkPeriod`, `FieldTask`, `ScheduleEntry`
//! - Core traits: `CapacityCalendar`, `Renderer`
//! - Error types
//!
//! ## Example
//!
//! ```rust
//! use chrono::{NaiveDate, Weekday};
//! use harvestplan_core::{WorkPeriod, Worker, Workforce};
//!
//! let period = WorkPeriod::new(
//!     NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2025, 10, 31).unwrap(),
//!     8.0,
//!     vec![Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri],
//! ).unwrap();
//!
//! let mut workforce = Workforce::new();
//! workforce.add_worker(Worker::new("anna").with_period(period).unwrap()).unwrap();
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod fieldbook;
pub mod workforce;

pub use fieldbook::{FieldBook, FieldSpec};
pub use workforce::{WorkPeriod, Worker, Workforce};

// ============================================================================
// Type Aliases
// ============================================================================

/// Identifier for a field (a physical plot)
pub type FieldId = String;

/// Identifier for a variety group (early/main/late harvest cohort)
pub type GroupId = String;

// ============================================================================
// Money
// ============================================================================

/// Monetary amount with currency
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub amount: Decimal,
    pub currency: String,
}

impl Money {
    pub fn new(amount: impl Into<Decimal>, currency: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            currency: currency.into(),
        }
    }
}

// ============================================================================
// Field Tasks (scheduler input rows)
// ============================================================================

/// A row in the scheduler's input table: one harvesting pass over one field.
///
/// Rows arrive already in the desired processing order; the scheduler never
/// reorders within a variety group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldTask {
    /// Field identifier
    pub field: FieldId,
    /// Variety group the field belongs to (drives the applicable start date)
    pub variety_group: GroupId,
    /// Harvest round label (second picking etc.), carried through unchanged
    pub harvest_round: u32,
    /// Total labor hours required to complete this pass
    pub required_hours: f64,
}

impl FieldTask {
    /// Create a task for the first harvest round
    pub fn new(
        field: impl Into<FieldId>,
        variety_group: impl Into<GroupId>,
        required_hours: f64,
    ) -> Self {
        Self {
            field: field.into(),
            variety_group: variety_group.into(),
            harvest_round: 1,
            required_hours,
        }
    }

    /// Set the harvest round label
    pub fn harvest_round(mut self, round: u32) -> Self {
        self.harvest_round = round;
        self
    }
}

// ============================================================================
// Schedule Entries (scheduler output rows)
// ============================================================================

/// A scheduled interval for one field task.
///
/// Invariants upheld by the solver: `end_date >= start_date`, entries within
/// one variety group never overlap and keep input row order, and `end_date`
/// is rounded to the nearest hour (except for zero-effort tasks, where
/// `start_date == end_date` exactly).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub field: FieldId,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    /// Echo of the task's required hours
    pub total_hours: f64,
    pub harvest_round: u32,
    pub variety_group: GroupId,
}

// ============================================================================
// Traits
// ============================================================================

/// Daily capacity queries the field scheduler consumes.
///
/// Both queries are total: any date maps to a (possibly zero) capacity.
/// `daily_worker_count` is an FTE figure normalized against the longest
/// working day among active workers, so a half-day worker counts as a
/// fraction of a head, not a full unit of parallel throughput.
pub trait CapacityCalendar {
    /// Total labor hours available on `date`
    fn daily_work_hours(&self, date: NaiveDate) -> f64;

    /// Effective concurrent worker count on `date`; 0 iff no hours available
    fn daily_worker_count(&self, date: NaiveDate) -> f64;
}

/// Output rendering for a computed schedule
pub trait Renderer {
    type Output;

    /// Render schedule entries to the output format
    fn render(&self, entries: &[ScheduleEntry]) -> Result<Self::Output, RenderError>;
}

// ============================================================================
// Errors
// ============================================================================

/// Workforce model error
#[derive(Debug, Error)]
pub enum WorkforceError {
    #[error("work period start {start} must be strictly before end {end}")]
    InvalidPeriod { start: NaiveDate, end: NaiveDate },

    #[error("work period hours must be non-negative, got {0}")]
    InvalidHours(f64),

    #[error("worker '{worker}' already has a period overlapping {start}..={end}")]
    PeriodOverlap {
        worker: String,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("worker '{0}' already exists in the workforce")]
    DuplicateWorker(String),

    #[error("worker '{0}' not found in the workforce")]
    UnknownWorker(String),
}

/// Field catalog error
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("field '{field}' with variety '{variety}' already exists")]
    DuplicateField { field: String, variety: String },

    #[error("field '{field}' with variety '{variety}' not found")]
    UnknownField { field: String, variety: String },
}

/// Rendering error
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error: {0}")]
    Format(String),
}
