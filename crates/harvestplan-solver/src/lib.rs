//! # harvestplan-solver
//!
//! Greedy, time-stepping scheduler that allocates predicted labor hours for
//! field-work tasks across a workforce capacity calendar.
//!
//! This crate provides:
//! - [`FieldScheduler`]: the forward-greedy allocation pass
//! - [`StartDates`]: uniform or per-variety-group start instants
//! - [`rounds::expand_harvest_rounds`]: task-table expansion by harvest round
//!
//! ## Example
//!
//! ```rust,ignore
//! use harvestplan_core::FieldTask;
//! use harvestplan_solver::{FieldScheduler, StartDates};
//!
//! let tasks = vec![FieldTask::new("north-3", "hauptsorte", 20.0)];
//! let outcome = FieldScheduler::new().schedule(&tasks, &workforce, &starts);
//! ```

pub mod rounds;
pub mod scheduler;

pub use rounds::expand_harvest_rounds;
pub use scheduler::{
    default_day_start, round_to_nearest_hour, FieldScheduler, ScheduleOutcome, ScheduleWarning,
    StartDates,
};
