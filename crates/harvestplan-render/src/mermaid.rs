//! Mermaid Gantt chart renderer.
//!
//! Generates text-based Gantt charts in Mermaid format, suitable for
//! embedding in Markdown documentation, GitHub, wikis, and other platforms.
//!
//! ## Example Output
//!
//! ```text
//! gantt
//!     title Harvest plan
//!     dateFormat YYYY-MM-DD HH:mm
//!     axisFormat %d.%m
//!
//!     section fruehsorte
//!     north-3 (round 1) :t0, 2025-09-01 08:00, 2025-09-03 12:00
//! ```

use harvestplan_core::{RenderError, Renderer, ScheduleEntry};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Mermaid Gantt chart renderer, one section per variety group
#[derive(Clone, Debug)]
pub struct MermaidGantt {
    /// Chart title
    pub title: String,
    /// Mermaid `dateFormat` directive matching the emitted timestamps
    pub date_format: String,
    /// Optional `axisFormat` directive
    pub axis_format: Option<String>,
}

impl Default for MermaidGantt {
    fn default() -> Self {
        Self {
            title: "Harvest plan".into(),
            date_format: "YYYY-MM-DD HH:mm".into(),
            axis_format: Some("%d.%m".into()),
        }
    }
}

impl MermaidGantt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the chart title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Drop the axisFormat directive
    pub fn no_axis_format(mut self) -> Self {
        self.axis_format = None;
        self
    }

    /// Mermaid is sensitive to colons and commas in task names
    fn sanitize(name: &str) -> String {
        name.replace([':', ';', ','], "-").replace('#', "")
    }
}

impl Renderer for MermaidGantt {
    type Output = String;

    fn render(&self, entries: &[ScheduleEntry]) -> Result<String, RenderError> {
        let mut out = String::from("gantt\n");
        out.push_str(&format!("    title {}\n", Self::sanitize(&self.title)));
        out.push_str(&format!("    dateFormat {}\n", self.date_format));
        if let Some(axis) = &self.axis_format {
            out.push_str(&format!("    axisFormat {axis}\n"));
        }

        let mut current_section: Option<&str> = None;
        for (index, entry) in entries.iter().enumerate() {
            if current_section != Some(entry.variety_group.as_str()) {
                out.push_str(&format!(
                    "\n    section {}\n",
                    Self::sanitize(&entry.variety_group)
                ));
                current_section = Some(entry.variety_group.as_str());
            }
            out.push_str(&format!(
                "    {} (round {}) :t{}, {}, {}\n",
                Self::sanitize(&entry.field),
                entry.harvest_round,
                index,
                entry.start_date.format(DATE_FORMAT),
                entry.end_date.format(DATE_FORMAT),
            ));
        }

        Ok(out)
    }
}
