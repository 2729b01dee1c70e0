//! Field catalog.
//!
//! Persisted field definitions: which plots exist, which variety grows on
//! them, and how many harvest rounds each gets. Unique by (field, variety).

use serde::{Deserialize, Serialize};

use crate::FieldError;

fn default_rounds() -> u32 {
    1
}

/// A field definition as persisted in the catalog
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field identifier
    pub field: String,
    /// Variety grown on the field
    pub variety: String,
    /// Number of harvest passes over the season
    #[serde(default = "default_rounds")]
    pub harvest_rounds: u32,
    /// Optional explicit position in the processing order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

impl FieldSpec {
    pub fn new(field: impl Into<String>, variety: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            variety: variety.into(),
            harvest_rounds: 1,
            order: None,
        }
    }

    /// Set the number of harvest rounds
    pub fn harvest_rounds(mut self, rounds: u32) -> Self {
        self.harvest_rounds = rounds;
        self
    }

    /// Set the explicit processing order position
    pub fn order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }
}

/// Insertion-ordered collection of field definitions, unique by
/// (field, variety). Lifecycle mirrors [`crate::Workforce`]: explicit
/// add/update/remove, each an O(n) scan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldBook {
    specs: Vec<FieldSpec>,
}

impl FieldBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field definition. Fails if (field, variety) already exists.
    pub fn add_field(&mut self, spec: FieldSpec) -> Result<(), FieldError> {
        if self.position(&spec.field, &spec.variety).is_some() {
            return Err(FieldError::DuplicateField {
                field: spec.field,
                variety: spec.variety,
            });
        }
        self.specs.push(spec);
        Ok(())
    }

    /// Replace the definition for (field, variety) in place
    pub fn update_field(
        &mut self,
        field: &str,
        variety: &str,
        spec: FieldSpec,
    ) -> Result<(), FieldError> {
        let at = self
            .position(field, variety)
            .ok_or_else(|| FieldError::UnknownField {
                field: field.to_string(),
                variety: variety.to_string(),
            })?;
        self.specs[at] = spec;
        Ok(())
    }

    /// Remove and return the definition for (field, variety)
    pub fn remove_field(&mut self, field: &str, variety: &str) -> Result<FieldSpec, FieldError> {
        let at = self
            .position(field, variety)
            .ok_or_else(|| FieldError::UnknownField {
                field: field.to_string(),
                variety: variety.to_string(),
            })?;
        Ok(self.specs.remove(at))
    }

    pub fn get_field(&self, field: &str, variety: &str) -> Option<&FieldSpec> {
        self.position(field, variety).map(|at| &self.specs[at])
    }

    pub fn specs(&self) -> &[FieldSpec] {
        &self.specs
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    fn position(&self, field: &str, variety: &str) -> Option<usize> {
        self.specs
            .iter()
            .position(|s| s.field == field && s.variety == variety)
    }
}
