//! Greedy Field-Work Scheduler
//!
//! Converts an ordered table of (field, required-hours, variety-group) rows
//! plus a daily capacity calendar into concrete start/end timestamps per
//! field.
//!
//! # Algorithm
//!
//! 1. Partition rows by variety group, preserving row order within a group.
//! 2. Order groups by nominal start instant (stable, so ties keep first
//!    appearance order).
//! 3. Clamp each group's effective start to the latest end reached by any
//!    earlier group: one shared workforce never works two groups at once.
//! 4. Walk each group's rows in table order, consuming daily capacity;
//!    `1` task-hour takes `1 / daily_worker_count` wall-clock hours.
//! 5. Days without capacity are skipped to the next day at the group's
//!    nominal clock time; a day-of-year 365 guard aborts the pass with
//!    partial results if capacity never returns.
//!
//! The pass is strictly forward: completed allocations are never revisited.

use std::collections::HashMap;
use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use tracing::{debug, warn};

use harvestplan_core::{CapacityCalendar, FieldTask, GroupId, ScheduleEntry};

/// Simulated dates at this day-of-year abort the pass. Guards against an
/// unbounded walk when no worker is ever available again.
const HORIZON_DAY_OF_YEAR: u32 = 365;

/// Clock time assumed when a start date carries no time of day
pub fn default_day_start() -> NaiveTime {
    NaiveTime::from_hms_opt(8, 0, 0).unwrap()
}

// ============================================================================
// Start dates
// ============================================================================

/// Nominal start instants for the scheduling pass: one instant for every
/// group, or an explicit per-group mapping. Groups present in the task table
/// but absent from the mapping are skipped with a warning.
#[derive(Clone, Debug, PartialEq)]
pub enum StartDates {
    Uniform(NaiveDateTime),
    PerGroup(HashMap<GroupId, NaiveDateTime>),
}

impl StartDates {
    /// One start instant for every group
    pub fn uniform(start: NaiveDateTime) -> Self {
        Self::Uniform(start)
    }

    /// One start date for every group, normalized to 08:00
    pub fn uniform_date(start: NaiveDate) -> Self {
        Self::Uniform(start.and_time(default_day_start()))
    }

    /// Explicit per-group start instants
    pub fn per_group(starts: impl IntoIterator<Item = (GroupId, NaiveDateTime)>) -> Self {
        Self::PerGroup(starts.into_iter().collect())
    }

    /// Explicit per-group start dates, each normalized to 08:00
    pub fn per_group_dates(starts: impl IntoIterator<Item = (GroupId, NaiveDate)>) -> Self {
        Self::PerGroup(
            starts
                .into_iter()
                .map(|(group, date)| (group, date.and_time(default_day_start())))
                .collect(),
        )
    }

    /// Nominal start for `group`, if one is declared
    fn resolve(&self, group: &str) -> Option<NaiveDateTime> {
        match self {
            Self::Uniform(start) => Some(*start),
            Self::PerGroup(starts) => starts.get(group).copied(),
        }
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// Non-fatal degradations of a scheduling pass. The pass still returns
/// whatever it could place; the caller decides how to surface the gap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScheduleWarning {
    /// A group named in the task table has no declared start date; its rows
    /// were dropped from the output
    MissingStartDate { group: GroupId },
    /// The simulated date reached the end-of-year safety bound before all
    /// fields were placed; the output is truncated
    HorizonExceeded { last_date: NaiveDate },
}

impl fmt::Display for ScheduleWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStartDate { group } => {
                write!(f, "no start date specified for group '{group}', skipped")
            }
            Self::HorizonExceeded { last_date } => write!(
                f,
                "could not finish all fields within the year (stopped at {last_date}); \
                 review the workforce or field requirements"
            ),
        }
    }
}

/// Result of a scheduling pass: placed intervals plus any degradation
/// warnings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScheduleOutcome {
    /// Scheduled intervals, grouped by variety group in processing order,
    /// rows within a group in input order
    pub entries: Vec<ScheduleEntry>,
    pub warnings: Vec<ScheduleWarning>,
}

impl ScheduleOutcome {
    /// Whether every input row was placed
    pub fn is_complete(&self) -> bool {
        self.warnings.is_empty()
    }
}

// ============================================================================
// Scheduler
// ============================================================================

/// The greedy allocation pass. Stateless between calls; each invocation is a
/// single deterministic sweep over the task table.
#[derive(Clone, Copy, Debug, Default)]
pub struct FieldScheduler;

impl FieldScheduler {
    pub fn new() -> Self {
        Self
    }

    /// Schedule `tasks` against `capacity`, honoring per-group start dates.
    ///
    /// The capacity calendar is only read, never mutated; callers must not
    /// mutate it concurrently with the pass.
    pub fn schedule<C: CapacityCalendar + ?Sized>(
        &self,
        tasks: &[FieldTask],
        capacity: &C,
        start_dates: &StartDates,
    ) -> ScheduleOutcome {
        let mut entries: Vec<ScheduleEntry> = Vec::with_capacity(tasks.len());
        let mut warnings: Vec<ScheduleWarning> = Vec::new();

        // Partition by group, keeping row order within each group and
        // first-appearance order across groups.
        let mut groups: Vec<(GroupId, Vec<&FieldTask>)> = Vec::new();
        for task in tasks {
            match groups.iter_mut().find(|(g, _)| *g == task.variety_group) {
                Some((_, rows)) => rows.push(task),
                None => groups.push((task.variety_group.clone(), vec![task])),
            }
        }

        // Resolve nominal starts; groups without one are dropped, not deferred.
        let mut runs: Vec<(GroupId, NaiveDateTime, Vec<&FieldTask>)> = Vec::new();
        for (group, rows) in groups {
            match start_dates.resolve(&group) {
                Some(start) => runs.push((group, start, rows)),
                None => {
                    warn!(group = %group, "no start date specified for group, skipping");
                    warnings.push(ScheduleWarning::MissingStartDate { group });
                }
            }
        }

        // Pin group order: nominal start first, first appearance as tie-break
        // (stable sort), so the global-cursor clamping below is deterministic.
        runs.sort_by_key(|(_, start, _)| *start);

        // Latest end instant reached by any processed group. Groups run
        // sequentially against the one shared workforce, never in parallel.
        let mut global_cursor: Option<NaiveDateTime> = None;

        for (group, nominal_start, rows) in runs {
            let mut cursor = match global_cursor {
                Some(reached) => nominal_start.max(reached),
                None => nominal_start,
            };
            let mut current_date = cursor.date();
            let mut remaining_capacity = capacity.daily_work_hours(current_date);
            let mut worker_count = capacity.daily_worker_count(current_date);

            for task in rows {
                let field_start = cursor;
                let mut remaining_hours = task.required_hours;

                // Zero-effort rows complete instantly; skipping the rounding
                // keeps start == end even off the hour.
                if remaining_hours <= 0.0 {
                    entries.push(make_entry(task, &group, field_start, field_start));
                    continue;
                }

                while remaining_hours > 0.0 {
                    if cursor.date() != current_date {
                        current_date = cursor.date();
                        remaining_capacity = capacity.daily_work_hours(current_date);
                        worker_count = capacity.daily_worker_count(current_date);
                    }

                    if remaining_capacity <= 0.0 || worker_count <= 0.0 {
                        // Nothing left today: next calendar day at the
                        // group's nominal clock time, consuming no hours.
                        let next_day = current_date.succ_opt().unwrap_or(current_date);
                        cursor = next_day.and_time(nominal_start.time());
                        if cursor.date().ordinal() >= HORIZON_DAY_OF_YEAR {
                            warn!(
                                last_date = %cursor.date(),
                                "could not finish all fields within the year"
                            );
                            warnings.push(ScheduleWarning::HorizonExceeded {
                                last_date: cursor.date(),
                            });
                            return ScheduleOutcome { entries, warnings };
                        }
                        continue;
                    }

                    let hours_to_work = remaining_hours.min(remaining_capacity);
                    cursor += elapsed(hours_to_work / worker_count);
                    remaining_hours -= hours_to_work;
                    remaining_capacity -= hours_to_work;
                }

                let field_end = round_to_nearest_hour(cursor);
                debug!(
                    field = %task.field,
                    group = %group,
                    round = task.harvest_round,
                    end = %field_end,
                    "finished field"
                );
                entries.push(make_entry(task, &group, field_start, field_end));

                // The rounded end seeds the next field; the rounding error is
                // carried forward, not compensated.
                cursor = field_end;
            }

            global_cursor = Some(cursor);
        }

        ScheduleOutcome { entries, warnings }
    }
}

fn make_entry(
    task: &FieldTask,
    group: &str,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> ScheduleEntry {
    ScheduleEntry {
        field: task.field.clone(),
        start_date: start,
        end_date: end,
        total_hours: task.required_hours,
        harvest_round: task.harvest_round,
        variety_group: group.to_string(),
    }
}

/// Wall-clock time taken by `hours` of elapsed work, to whole seconds
fn elapsed(hours: f64) -> chrono::Duration {
    chrono::Duration::seconds((hours * 3600.0).round() as i64)
}

/// Round to the nearest hour, half up: minute 30 and later rounds up.
pub fn round_to_nearest_hour(dt: NaiveDateTime) -> NaiveDateTime {
    let floor = dt
        .date()
        .and_time(NaiveTime::from_hms_opt(dt.hour(), 0, 0).unwrap());
    if dt.minute() >= 30 {
        floor + chrono::Duration::hours(1)
    } else {
        floor
    }
}
