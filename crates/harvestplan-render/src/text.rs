//! Fixed-width text table renderer.

use harvestplan_core::{RenderError, Renderer, ScheduleEntry};

const HEADERS: [&str; 6] = ["Field", "Start", "End", "Hours", "Round", "Group"];
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Renders schedule entries as an aligned plain-text table
#[derive(Clone, Copy, Debug, Default)]
pub struct TextTableRenderer;

impl TextTableRenderer {
    pub fn new() -> Self {
        Self
    }

    fn row(entry: &ScheduleEntry) -> [String; 6] {
        [
            entry.field.clone(),
            entry.start_date.format(DATE_FORMAT).to_string(),
            entry.end_date.format(DATE_FORMAT).to_string(),
            format!("{:.1}", entry.total_hours),
            entry.harvest_round.to_string(),
            entry.variety_group.clone(),
        ]
    }
}

impl Renderer for TextTableRenderer {
    type Output = String;

    fn render(&self, entries: &[ScheduleEntry]) -> Result<String, RenderError> {
        let rows: Vec<[String; 6]> = entries.iter().map(Self::row).collect();

        let mut widths: [usize; 6] = HEADERS.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.len());
            }
        }

        let mut out = String::new();
        push_row(&mut out, &HEADERS.map(String::from), &widths);
        push_row(
            &mut out,
            &widths.map(|w| "-".repeat(w)),
            &widths,
        );
        for row in &rows {
            push_row(&mut out, row, &widths);
        }
        Ok(out)
    }
}

fn push_row(out: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    let line = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
