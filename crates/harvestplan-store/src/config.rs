//! Plan configuration.
//!
//! One immutable value object per run, constructed from a YAML file and then
//! passed by reference; nothing mutates it after loading.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use harvestplan_solver::{default_day_start, StartDates};

use crate::tasks::TableBindings;
use crate::StoreError;

/// Per-run planning configuration
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PlanConfig {
    /// Uniform start date, applied to every group when `start_dates` is empty
    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    /// Per-group start dates; takes precedence over `start_date`
    #[serde(default)]
    pub start_dates: BTreeMap<String, NaiveDate>,

    /// Clock time work begins each day (default 08:00)
    #[serde(default)]
    pub start_time: Option<NaiveTime>,

    /// Processing order of fields; also drives harvest-round expansion.
    /// Empty means: take the task table as-is.
    #[serde(default)]
    pub field_order: Vec<String>,

    /// Harvest passes per field (default 1)
    #[serde(default)]
    pub harvest_rounds: BTreeMap<String, u32>,

    /// Task-table column bindings
    #[serde(default)]
    pub bindings: TableBindings,
}

impl PlanConfig {
    /// Build the solver's start-date input, if the config declares one
    pub fn to_start_dates(&self) -> Option<StartDates> {
        let time = self.start_time.unwrap_or_else(default_day_start);
        if !self.start_dates.is_empty() {
            return Some(StartDates::per_group(
                self.start_dates
                    .iter()
                    .map(|(group, date)| (group.clone(), date.and_time(time))),
            ));
        }
        self.start_date
            .map(|date| StartDates::uniform(date.and_time(time)))
    }
}

/// Load a plan configuration from a YAML file
pub fn load_config(path: &Path) -> Result<PlanConfig, StoreError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&contents)?)
}
