//! Harvest-round expansion.
//!
//! Turns a per-field prediction table into the scheduler's input table: one
//! row per harvest pass, in the configured field order. Fields absent from
//! the order are dropped, and fields without a configured round count get a
//! single pass.

use std::collections::BTreeMap;

use harvestplan_core::FieldTask;

/// Expand `rows` into one task per harvest round, ordered by `field_order`.
///
/// Every round of a field inherits that field's required hours: a second
/// picking is budgeted like the first. Rounds are numbered from 1.
pub fn expand_harvest_rounds(
    rows: &[FieldTask],
    field_order: &[String],
    rounds_per_field: &BTreeMap<String, u32>,
) -> Vec<FieldTask> {
    let mut expanded = Vec::new();

    for field in field_order {
        let rounds = rounds_per_field.get(field).copied().unwrap_or(1).max(1);
        for round in 1..=rounds {
            for row in rows.iter().filter(|r| &r.field == field) {
                expanded.push(row.clone().harvest_round(round));
            }
        }
    }

    expanded
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn order(fields: &[&str]) -> Vec<String> {
        fields.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn expands_configured_rounds_in_order() {
        let rows = vec![
            FieldTask::new("south-1", "g", 10.0),
            FieldTask::new("north-3", "g", 20.0),
        ];
        let mut rounds = BTreeMap::new();
        rounds.insert("north-3".to_string(), 2);

        let expanded = expand_harvest_rounds(&rows, &order(&["north-3", "south-1"]), &rounds);

        let labels: Vec<(&str, u32)> = expanded
            .iter()
            .map(|t| (t.field.as_str(), t.harvest_round))
            .collect();
        assert_eq!(
            labels,
            vec![("north-3", 1), ("north-3", 2), ("south-1", 1)]
        );
        // hours are duplicated per round, not split
        assert_eq!(expanded[1].required_hours, 20.0);
    }

    #[test]
    fn fields_missing_from_order_are_dropped() {
        let rows = vec![
            FieldTask::new("kept", "g", 1.0),
            FieldTask::new("dropped", "g", 1.0),
        ];
        let expanded = expand_harvest_rounds(&rows, &order(&["kept"]), &BTreeMap::new());
        assert_eq!(expanded.len(), 1);
        assert_eq!(expanded[0].field, "kept");
    }

    #[test]
    fn unconfigured_field_gets_one_round() {
        let rows = vec![FieldTask::new("a", "g", 1.0)];
        let expanded = expand_harvest_rounds(&rows, &order(&["a"]), &BTreeMap::new());
        assert_eq!(expanded.len(), 1);
        assert_eq!(expanded[0].harvest_round, 1);
    }

    #[test]
    fn zero_round_count_is_treated_as_one() {
        let rows = vec![FieldTask::new("a", "g", 1.0)];
        let mut rounds = BTreeMap::new();
        rounds.insert("a".to_string(), 0);
        let expanded = expand_harvest_rounds(&rows, &order(&["a"]), &rounds);
        assert_eq!(expanded.len(), 1);
    }

    #[test]
    fn empty_order_yields_empty_table() {
        let rows = vec![FieldTask::new("a", "g", 1.0)];
        let expanded = expand_harvest_rounds(&rows, &[], &BTreeMap::new());
        assert!(expanded.is_empty());
    }
}
