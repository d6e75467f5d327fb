use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;

use crate::foundation::error::{StimError, StimResult};

/// Ordered mapping from context name to intensity.
///
/// Immutable once built: [`ContextTable::without`] returns a copy, so a table shared by
/// many generator calls can never be contaminated by one of them.
#[derive(Clone, Debug, PartialEq)]
pub struct ContextTable {
    entries: Vec<(String, f64)>,
}

impl ContextTable {
    /// Build a table from `(name, intensity)` pairs, keeping their order.
    pub fn new<S: Into<String>>(entries: impl IntoIterator<Item = (S, f64)>) -> StimResult<Self> {
        let mut out: Vec<(String, f64)> = Vec::new();
        for (name, value) in entries {
            let name = name.into();
            if name.is_empty() {
                return Err(StimError::validation("context names must be non-empty"));
            }
            if out.iter().any(|(n, _)| *n == name) {
                return Err(StimError::validation(format!(
                    "context '{name}' is listed twice"
                )));
            }
            out.push((name, value));
        }
        if out.is_empty() {
            return Err(StimError::validation("context table must not be empty"));
        }
        Ok(Self { entries: out })
    }

    /// Number of contexts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `name` is a known context.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Intensity of a named context.
    pub fn get(&self, name: &str) -> StimResult<f64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
            .ok_or_else(|| StimError::unknown_context(name))
    }

    /// Context names in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Intensities in table order.
    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, v)| *v).collect()
    }

    /// Intensities in reverse table order.
    pub fn reversed_values(&self) -> Vec<f64> {
        self.entries.iter().rev().map(|(_, v)| *v).collect()
    }

    /// Copy of the table minus `name`, together with the removed intensity.
    ///
    /// The returned table may be empty when `self` holds a single entry.
    pub fn without(&self, name: &str) -> StimResult<(ContextTable, f64)> {
        let removed = self.get(name)?;
        let entries = self
            .entries
            .iter()
            .filter(|(n, _)| n != name)
            .cloned()
            .collect();
        Ok((ContextTable { entries }, removed))
    }
}

impl Default for ContextTable {
    fn default() -> Self {
        Self {
            entries: vec![("black".to_string(), 0.0), ("white".to_string(), 1.0)],
        }
    }
}

impl serde::Serialize for ContextTable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> serde::Deserialize<'de> for ContextTable {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = ContextTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from context name to intensity")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, value)) = access.next_entry::<String, f64>()? {
                    entries.push((name, value));
                }
                ContextTable::new(entries).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/context/table.rs"]
mod tests;
