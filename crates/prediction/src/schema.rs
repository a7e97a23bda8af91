//! Typed view of the persisted feature order.
//!
//! The artifact only stores names. Each name is classified once, when the
//! schema is built, so request-time code never has to sniff prefixes.

use crate::constants::{DAY_PREFIX, MONTH_PREFIX};
use crate::types::{Month, NumericField, Weekday};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    MonthFlag(Month),
    DayFlag(Weekday),
    Numeric(NumericField),
    /// A column the form never supplies (e.g. the legacy `area`). Always zero-filled.
    Other,
}

impl FeatureKind {
    pub fn classify(name: &str) -> Self {
        if let Some(code) = name.strip_prefix(MONTH_PREFIX) {
            return Month::ALL
                .into_iter()
                .find(|m| m.as_str() == code)
                .map_or(Self::Other, Self::MonthFlag);
        }
        if let Some(code) = name.strip_prefix(DAY_PREFIX) {
            return Weekday::ALL
                .into_iter()
                .find(|d| d.as_str() == code)
                .map_or(Self::Other, Self::DayFlag);
        }
        NumericField::from_feature_name(name).map_or(Self::Other, Self::Numeric)
    }

    pub fn is_categorical(self) -> bool {
        matches!(self, Self::MonthFlag(_) | Self::DayFlag(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaEntry {
    pub name: String,
    pub kind: FeatureKind,
}

/// Ordered `(name, kind)` list; the authoritative layout of every assembled row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    entries: Vec<SchemaEntry>,
}

impl FeatureSchema {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = names
            .into_iter()
            .map(|name| {
                let name = name.into();
                let kind = FeatureKind::classify(&name);
                SchemaEntry { name, kind }
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SchemaEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    pub fn categorical_entries(&self) -> impl Iterator<Item = &SchemaEntry> {
        self.entries.iter().filter(|e| e.kind.is_categorical())
    }

    /// Names the form cannot supply; these positions always end up 0.0.
    pub fn unsupplied_names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.kind == FeatureKind::Other)
            .map(|e| e.name.as_str())
            .collect()
    }
}
