// series.rs - Labeled per-sample alpha diversity series

use serde::{Deserialize, Serialize};

/// Per-sample diversity values labeled with the metric that produced them.
///
/// Sample order is preserved from the source table. The id and value
/// vectors always have the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlphaSeries {
    name: String,
    sample_ids: Vec<String>,
    values: Vec<f64>,
}

impl AlphaSeries {
    /// Create a series; fails if ids and values differ in length
    pub fn new(
        name: impl Into<String>,
        sample_ids: Vec<String>,
        values: Vec<f64>,
    ) -> Result<Self, String> {
        if sample_ids.len() != values.len() {
            return Err(format!(
                "Series length mismatch: {} sample ids vs {} values",
                sample_ids.len(),
                values.len()
            ));
        }
        Ok(Self {
            name: name.into(),
            sample_ids,
            values,
        })
    }

    /// The metric label attached to this series
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the metric label
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn len(&self) -> usize {
        self.sample_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sample_ids.is_empty()
    }

    /// Ordered sample identifiers (the series index)
    pub fn sample_ids(&self) -> &[String] {
        &self.sample_ids
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Look up the value for a sample id
    pub fn get(&self, sample_id: &str) -> Option<f64> {
        self.sample_ids
            .iter()
            .position(|id| id == sample_id)
            .map(|i| self.values[i])
    }

    /// Iterate over (sample id, value) pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.sample_ids
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}
