//! Per-field bijection between observed category strings and integer codes.

use crate::error::{Result, RiskError};
use serde::Serialize;

/// Distinct values of one categorical field, sorted; a value's code is its index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeTable {
    field: &'static str,
    values: Vec<String>,
}

impl CodeTable {
    /// Deduplicate and sort `values`. Fails if nothing was observed.
    pub fn from_values<I, S>(field: &'static str, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut values: Vec<String> = values.into_iter().map(Into::into).collect();
        values.sort_unstable();
        values.dedup();
        if values.is_empty() {
            return Err(RiskError::EmptyReference { field });
        }
        Ok(Self { field, values })
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn code(&self, value: &str) -> Result<u32> {
        self.values
            .binary_search_by(|v| v.as_str().cmp(value))
            .map(|i| i as u32)
            .map_err(|_| RiskError::UnknownCategory {
                field: self.field,
                value: value.to_string(),
            })
    }

    pub fn value(&self, code: u32) -> Option<&str> {
        self.values.get(code as usize).map(String::as_str)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.code(value).is_ok()
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, v)| (i as u32, v.as_str()))
    }
}
