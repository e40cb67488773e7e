// crates/shared-kernel/src/value_objects/job_record.rs
use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use super::salary::SalaryValue;

/// The two salary columns a job listing carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SalaryField {
    #[serde(rename = "min_salary")]
    Min,
    #[serde(rename = "max_salary")]
    Max,
}

impl SalaryField {
    pub const ALL: [Self; 2] = [Self::Min, Self::Max];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Min => "min_salary",
            Self::Max => "max_salary",
        }
    }
}

impl fmt::Display for SalaryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One job listing: field name to raw string value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobRecord(BTreeMap<String, String>);

impl JobRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Raw text of a salary column, if present.
    pub fn salary_text(&self, field: SalaryField) -> Option<&str> {
        self.get(field.as_str())
    }

    /// Salary column wrapped for validation, if present.
    pub fn salary_value(&self, field: SalaryField) -> Option<SalaryValue> {
        self.salary_text(field).map(SalaryValue::from)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(field.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for JobRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for JobRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}
