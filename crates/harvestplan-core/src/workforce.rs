//! Workforce capacity model.
//!
//! Aggregates individual worker availability (date-range- and weekday-gated
//! work periods) into two per-date figures: total labor hours and effective
//! (FTE) worker count. The solver queries these through [`CapacityCalendar`].
//!
//! Aggregates are recomputed on every query. The calendar is small and the
//! scheduler samples it at most once per simulated day per field, so caching
//! daily totals is not worth the invalidation bookkeeping.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::{CapacityCalendar, Money, WorkforceError};

// ============================================================================
// WorkPeriod
// ============================================================================

/// A contiguous employment period with fixed daily hours.
///
/// The date range is inclusive on both ends; the period is only active on
/// the listed weekdays. Immutable once validated.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkPeriod {
    start_date: NaiveDate,
    end_date: NaiveDate,
    work_hours: f64,
    work_days: Vec<Weekday>,
}

impl WorkPeriod {
    /// Create a validated period. The start must be strictly before the end
    /// and the daily hours non-negative.
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        work_hours: f64,
        work_days: Vec<Weekday>,
    ) -> Result<Self, WorkforceError> {
        if start_date >= end_date {
            return Err(WorkforceError::InvalidPeriod {
                start: start_date,
                end: end_date,
            });
        }
        if work_hours < 0.0 {
            return Err(WorkforceError::InvalidHours(work_hours));
        }
        Ok(Self {
            start_date,
            end_date,
            work_hours,
            work_days,
        })
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn work_hours(&self) -> f64 {
        self.work_hours
    }

    pub fn work_days(&self) -> &[Weekday] {
        &self.work_days
    }

    /// Whether this period is active on `date`
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date && self.work_days.contains(&date.weekday())
    }

    /// Whether the date ranges of two periods intersect, weekdays ignored
    fn overlaps(&self, other: &Self) -> bool {
        self.start_date <= other.end_date && other.start_date <= self.end_date
    }
}

// ============================================================================
// Worker
// ============================================================================

/// A worker with a name, an ordered list of work periods, and an optional
/// pay rate.
///
/// Periods are kept sorted by start date and may not overlap in their date
/// ranges; `add_period` rejects an overlapping insert rather than leaving a
/// first-match ambiguity for capacity queries.
#[derive(Clone, Debug, PartialEq)]
pub struct Worker {
    name: String,
    periods: Vec<WorkPeriod>,
    rate: Option<Money>,
}

impl Worker {
    /// Create a worker with no periods
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            periods: Vec::new(),
            rate: None,
        }
    }

    /// Set the pay rate
    pub fn with_rate(mut self, rate: Money) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Add a period, builder style
    pub fn with_period(mut self, period: WorkPeriod) -> Result<Self, WorkforceError> {
        self.add_period(period)?;
        Ok(self)
    }

    /// Add a work period, keeping periods sorted by start date.
    /// Fails if the new period's date range overlaps an existing one.
    pub fn add_period(&mut self, period: WorkPeriod) -> Result<(), WorkforceError> {
        if self.periods.iter().any(|p| p.overlaps(&period)) {
            return Err(WorkforceError::PeriodOverlap {
                worker: self.name.clone(),
                start: period.start_date,
                end: period.end_date,
            });
        }
        let at = self
            .periods
            .partition_point(|p| p.start_date < period.start_date);
        self.periods.insert(at, period);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn periods(&self) -> &[WorkPeriod] {
        &self.periods
    }

    pub fn rate(&self) -> Option<&Money> {
        self.rate.as_ref()
    }

    /// Hours this worker contributes on `date`: the hours of the first
    /// covering period, else 0
    pub fn daily_work_hours(&self, date: NaiveDate) -> f64 {
        self.periods
            .iter()
            .find(|p| p.covers(date))
            .map_or(0.0, WorkPeriod::work_hours)
    }
}

// ============================================================================
// Workforce
// ============================================================================

/// An insertion-ordered collection of workers, unique by name.
///
/// Owns its workers outright; a worker never holds a back-reference to the
/// collection. Read-only during a scheduling pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Workforce {
    workers: Vec<Worker>,
}

impl Workforce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a worker. Fails if the name is already present.
    pub fn add_worker(&mut self, worker: Worker) -> Result<(), WorkforceError> {
        if self.workers.iter().any(|w| w.name == worker.name) {
            return Err(WorkforceError::DuplicateWorker(worker.name));
        }
        self.workers.push(worker);
        Ok(())
    }

    /// Replace the worker called `name` in place. Fails if `name` is absent,
    /// or if the replacement renames onto another existing worker.
    pub fn update_worker(&mut self, name: &str, worker: Worker) -> Result<(), WorkforceError> {
        let at = self
            .workers
            .iter()
            .position(|w| w.name == name)
            .ok_or_else(|| WorkforceError::UnknownWorker(name.to_string()))?;
        if worker.name != name && self.workers.iter().any(|w| w.name == worker.name) {
            return Err(WorkforceError::DuplicateWorker(worker.name));
        }
        self.workers[at] = worker;
        Ok(())
    }

    /// Remove and return the worker called `name`
    pub fn remove_worker(&mut self, name: &str) -> Result<Worker, WorkforceError> {
        let at = self
            .workers
            .iter()
            .position(|w| w.name == name)
            .ok_or_else(|| WorkforceError::UnknownWorker(name.to_string()))?;
        Ok(self.workers.remove(at))
    }

    pub fn get_worker(&self, name: &str) -> Option<&Worker> {
        self.workers.iter().find(|w| w.name == name)
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    /// Sum of active workers' hours on `date`
    pub fn daily_work_hours(&self, date: NaiveDate) -> f64 {
        self.workers.iter().map(|w| w.daily_work_hours(date)).sum()
    }

    /// Effective worker count on `date`: each active worker counts as the
    /// fraction of the longest working day anyone puts in that date, so a
    /// 4-hour worker next to an 8-hour worker is half a head, not a full one.
    pub fn daily_worker_count(&self, date: NaiveDate) -> f64 {
        let hours: Vec<f64> = self
            .workers
            .iter()
            .map(|w| w.daily_work_hours(date))
            .filter(|h| *h > 0.0)
            .collect();
        let longest = hours.iter().copied().fold(0.0_f64, f64::max);
        if longest <= 0.0 {
            return 0.0;
        }
        hours.iter().map(|h| h / longest).sum()
    }
}

impl CapacityCalendar for Workforce {
    fn daily_work_hours(&self, date: NaiveDate) -> f64 {
        Workforce::daily_work_hours(self, date)
    }

    fn daily_worker_count(&self, date: NaiveDate) -> f64 {
        Workforce::daily_worker_count(self, date)
    }
}
