//! Worker list persistence.
//!
//! Workers round-trip through a YAML list keyed by name; loading rebuilds
//! the `Workforce` through its own `add_worker`/`add_period` mutations, so
//! duplicate names and overlapping periods are rejected at load time rather
//! than smuggled past validation.

use std::path::Path;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::warn;

use harvestplan_core::{Money, WorkPeriod, Worker, Workforce};

use crate::StoreError;

#[derive(Debug, Serialize, Deserialize)]
struct PeriodRecord {
    start_date: NaiveDate,
    end_date: NaiveDate,
    work_hours: f64,
    work_days: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WorkerRecord {
    name: String,
    #[serde(default)]
    periods: Vec<PeriodRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rate: Option<Money>,
}

/// Load a workforce from a YAML worker list. A missing file is not an
/// error: planning often starts before anyone is hired.
pub fn load_workforce(path: &Path) -> Result<Workforce, StoreError> {
    if !path.exists() {
        warn!(path = %path.display(), "worker file not found, starting with empty workforce");
        return Ok(Workforce::new());
    }

    let contents = std::fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Ok(Workforce::new());
    }
    let records: Vec<WorkerRecord> = serde_yaml::from_str(&contents)?;

    let mut workforce = Workforce::new();
    for record in records {
        let mut worker = Worker::new(record.name);
        if let Some(rate) = record.rate {
            worker = worker.with_rate(rate);
        }
        for period in record.periods {
            worker.add_period(WorkPeriod::new(
                period.start_date,
                period.end_date,
                period.work_hours,
                parse_work_days(&period.work_days)?,
            )?)?;
        }
        workforce.add_worker(worker)?;
    }
    Ok(workforce)
}

/// Save a workforce as a YAML worker list
pub fn save_workforce(path: &Path, workforce: &Workforce) -> Result<(), StoreError> {
    let records: Vec<WorkerRecord> = workforce
        .workers()
        .iter()
        .map(|worker| WorkerRecord {
            name: worker.name().to_string(),
            periods: worker
                .periods()
                .iter()
                .map(|p| PeriodRecord {
                    start_date: p.start_date(),
                    end_date: p.end_date(),
                    work_hours: p.work_hours(),
                    work_days: p.work_days().iter().map(ToString::to_string).collect(),
                })
                .collect(),
            rate: worker.rate().cloned(),
        })
        .collect();

    std::fs::write(path, serde_yaml::to_string(&records)?)?;
    Ok(())
}

fn parse_work_days(names: &[String]) -> Result<Vec<Weekday>, StoreError> {
    names
        .iter()
        .map(|name| {
            name.parse::<Weekday>()
                .map_err(|_| StoreError::InvalidWeekday(name.clone()))
        })
        .collect()
}
