//! # harvestplan-render
//!
//! Rendering backends for computed harvest schedules.
//!
//! This crate provides:
//! - [`TextTableRenderer`]: fixed-width table for terminals
//! - [`MermaidGantt`]: Mermaid Gantt chart text for Markdown embedding

pub mod mermaid;
pub mod text;

pub use mermaid::MermaidGantt;
pub use text::TextTableRenderer;

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{NaiveDate, NaiveDateTime};
    use harvestplan_core::ScheduleEntry;

    pub fn dt(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    pub fn sample_entries() -> Vec<ScheduleEntry> {
        vec![
            ScheduleEntry {
                field: "north-3".into(),
                start_date: dt(2025, 9, 1, 8),
                end_date: dt(2025, 9, 3, 12),
                total_hours: 20.0,
                harvest_round: 1,
                variety_group: "fruehsorte".into(),
            },
            ScheduleEntry {
                field: "south-1".into(),
                start_date: dt(2025, 9, 3, 12),
                end_date: dt(2025, 9, 4, 16),
                total_hours: 12.0,
                harvest_round: 2,
                variety_group: "fruehsorte".into(),
            },
            ScheduleEntry {
                field: "west-2".into(),
                start_date: dt(2025, 9, 17, 8),
                end_date: dt(2025, 9, 18, 16),
                total_hours: 16.0,
                harvest_round: 1,
                variety_group: "hauptsorte".into(),
            },
        ]
    }
}
