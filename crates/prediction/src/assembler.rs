//! Feature Vector Assembler.
//!
//! Turns a loosely keyed [`RawInputRecord`] into the exact row layout a
//! [`FeatureSchema`] declares:
//!
//! - schema name present in the record → that value
//! - schema name absent from the record → `0.0`
//! - record name absent from the schema → dropped
//!
//! The zero-fill also hides misspelled names. The persisted scaler and
//! classifier were fitted under this reindex contract, so it is kept as is.

use std::collections::BTreeMap;

use tracing::debug;

use crate::errors::AssembleError;
use crate::schema::{FeatureKind, FeatureSchema};
use crate::types::{FireObservation, Month, NumericField, Weekday};

/// Feature name → value mapping, built up field by field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawInputRecord {
    values: BTreeMap<String, f64>,
}

impl RawInputRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `name`. Integer inputs are coerced to `f64`.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<f64>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<f64>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Clear every month and day flag the schema declares, then raise the
    /// two selected ones.
    pub fn select_categories(&mut self, schema: &FeatureSchema, month: Month, day: Weekday) {
        for entry in schema.categorical_entries() {
            self.values.insert(entry.name.clone(), 0.0);
        }
        self.values.insert(month.flag_name(), 1.0);
        self.values.insert(day.flag_name(), 1.0);
    }

    /// Same as [`select_categories`](Self::select_categories) for raw form
    /// selections. Values outside the vocabulary are rejected.
    pub fn select_categories_str(
        &mut self,
        schema: &FeatureSchema,
        month: &str,
        day: &str,
    ) -> Result<(), AssembleError> {
        let month: Month = month.parse()?;
        let day: Weekday = day.parse()?;
        self.select_categories(schema, month, day);
        Ok(())
    }

    pub fn from_observation(schema: &FeatureSchema, observation: &FireObservation) -> Self {
        let mut record = Self::new();
        record.select_categories(schema, observation.month, observation.day);
        for field in NumericField::ALL {
            record.insert(field.feature_name(), observation.value(field));
        }
        record
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for RawInputRecord {
    fn from_iter<T: IntoIterator<Item = (K, f64)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Reindex `record` onto `schema`, zero-filling absent names.
pub fn assemble(schema: &FeatureSchema, record: &RawInputRecord) -> Vec<f64> {
    let mut zero_filled = 0usize;
    let row: Vec<f64> = schema
        .entries()
        .iter()
        .map(|entry| match record.get(&entry.name) {
            Some(v) => v,
            None => {
                zero_filled += 1;
                0.0
            }
        })
        .collect();

    let dropped = record
        .iter()
        .filter(|(name, _)| schema.position(name).is_none())
        .count();
    debug!(
        width = row.len(),
        zero_filled,
        dropped,
        "assembled feature row"
    );
    row
}

/// Count of raised flags per one-hot group in an assembled row.
pub fn flag_totals(schema: &FeatureSchema, row: &[f64]) -> (f64, f64) {
    schema
        .entries()
        .iter()
        .zip(row)
        .fold((0.0, 0.0), |(months, days), (entry, v)| match entry.kind {
            FeatureKind::MonthFlag(_) => (months + v, days),
            FeatureKind::DayFlag(_) => (months, days + v),
            _ => (months, days),
        })
}
