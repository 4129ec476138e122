// table.rs - Feature table capability and in-memory sparse implementation

use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;

use crate::metrics::DenseCounts;

/// Capability a count table must provide to the dispatch layer.
///
/// `dense_counts` materializes the table as samples × features, whatever
/// the implementation's native orientation is.
pub trait FeatureTable {
    /// Number of stored (non-zero) entries
    fn num_entries(&self) -> usize;

    /// True when the table stores no entries
    fn is_empty(&self) -> bool {
        self.num_entries() == 0
    }

    /// Materialize a dense samples-by-features count matrix
    fn dense_counts(&self) -> DenseCounts;

    /// Ordered sample identifiers, matching the rows of `dense_counts`
    fn sample_ids(&self) -> Vec<String>;
}

/// Occupancy summary for a sparse count table
#[derive(Debug, Clone, Serialize)]
pub struct TableSummary {
    pub num_samples: usize,
    pub num_features: usize,
    pub stored_entries: usize,
    pub total_count: u64,
    pub density: f64,
    pub density_category: &'static str,
}

/// In-memory sparse feature table, stored feature-major.
///
/// Rows are features, columns are samples; `counts[f]` maps sample index
/// to a non-zero count. Zero counts are never stored.
#[derive(Debug, Clone)]
pub struct SparseCountTable {
    sample_ids: Vec<String>,
    feature_ids: Vec<String>,
    counts: Vec<HashMap<usize, u64>>,
    sample_index: HashMap<String, usize>,
    feature_index: HashMap<String, usize>,
}

impl SparseCountTable {
    /// Create an empty table over the given axes; ids must be unique
    pub fn new(sample_ids: Vec<String>, feature_ids: Vec<String>) -> Result<Self, String> {
        let sample_index = Self::build_index(&sample_ids, "sample")?;
        let feature_index = Self::build_index(&feature_ids, "feature")?;
        let counts = vec![HashMap::new(); feature_ids.len()];
        Ok(Self {
            sample_ids,
            feature_ids,
            counts,
            sample_index,
            feature_index,
        })
    }

    fn build_index(ids: &[String], axis: &str) -> Result<HashMap<String, usize>, String> {
        let mut index = HashMap::with_capacity(ids.len());
        for (i, id) in ids.iter().enumerate() {
            if index.insert(id.clone(), i).is_some() {
                return Err(format!("Duplicate {} id: {}", axis, id));
            }
        }
        Ok(index)
    }

    /// Set the count for a (feature, sample) cell; zero clears the cell
    pub fn insert(&mut self, feature_id: &str, sample_id: &str, count: u64) -> Result<(), String> {
        let fi = *self
            .feature_index
            .get(feature_id)
            .ok_or_else(|| format!("Unknown feature id: {}", feature_id))?;
        let si = *self
            .sample_index
            .get(sample_id)
            .ok_or_else(|| format!("Unknown sample id: {}", sample_id))?;

        if count == 0 {
            self.counts[fi].remove(&si);
        } else {
            self.counts[fi].insert(si, count);
        }
        Ok(())
    }

    /// Stored count for a cell (zero when absent)
    pub fn get(&self, feature_id: &str, sample_id: &str) -> Option<u64> {
        let fi = self.feature_index.get(feature_id)?;
        let si = self.sample_index.get(sample_id)?;
        Some(self.counts[*fi].get(si).copied().unwrap_or(0))
    }

    pub fn num_samples(&self) -> usize {
        self.sample_ids.len()
    }

    pub fn num_features(&self) -> usize {
        self.feature_ids.len()
    }

    /// Ordered feature identifiers
    pub fn feature_ids(&self) -> &[String] {
        &self.feature_ids
    }

    /// Calculate occupancy statistics for the table
    pub fn summary(&self) -> TableSummary {
        // Per-feature aggregation in parallel
        let (stored_entries, total_count) = self
            .counts
            .par_iter()
            .map(|row| (row.len(), row.values().sum::<u64>()))
            .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1));

        let total_cells = self.sample_ids.len() * self.feature_ids.len();
        let density = if total_cells == 0 {
            0.0
        } else {
            stored_entries as f64 / total_cells as f64
        };

        let density_category = if density < 0.1 {
            "Sparse"
        } else if density < 0.5 {
            "Moderate"
        } else {
            "Dense"
        };

        TableSummary {
            num_samples: self.sample_ids.len(),
            num_features: self.feature_ids.len(),
            stored_entries,
            total_count,
            density,
            density_category,
        }
    }

    /// Print table statistics
    pub fn print_table_statistics(&self, phase: &str) {
        let summary = self.summary();
        println!("\n📊 === TABLE STATISTICS ({}) ===", phase);
        println!(
            "  📏 Dimensions: {} samples × {} features = {} total cells",
            summary.num_samples,
            summary.num_features,
            summary.num_samples * summary.num_features
        );
        println!(
            "  🔢 Stored entries: {} ({} total observations)",
            summary.stored_entries, summary.total_count
        );
        print!(
            "  📈 Occupancy: {:.2}% ({})",
            summary.density * 100.0,
            summary.density_category
        );
        if summary.stored_entries == 0 {
            println!("  🔴 EMPTY: table holds no observations");
        } else if summary.density < 0.1 {
            println!("  🟡 Typical for high-throughput surveys");
        } else {
            println!("  🟢 Well populated");
        }
    }
}

impl FeatureTable for SparseCountTable {
    fn num_entries(&self) -> usize {
        self.counts.iter().map(|row| row.len()).sum()
    }

    fn dense_counts(&self) -> DenseCounts {
        // Transpose feature-major storage into samples × features
        let mut dense = vec![vec![0u64; self.feature_ids.len()]; self.sample_ids.len()];
        for (fi, row) in self.counts.iter().enumerate() {
            for (&si, &count) in row {
                dense[si][fi] = count;
            }
        }
        dense
    }

    fn sample_ids(&self) -> Vec<String> {
        self.sample_ids.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_three() -> SparseCountTable {
        let mut table = SparseCountTable::new(
            vec!["S1".to_string(), "S2".to_string()],
            vec!["F1".to_string(), "F2".to_string(), "F3".to_string()],
        )
        .unwrap();
        table.insert("F1", "S1", 4).unwrap();
        table.insert("F2", "S2", 2).unwrap();
        table.insert("F3", "S1", 1).unwrap();
        table
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = SparseCountTable::new(
            vec!["S1".to_string(), "S1".to_string()],
            vec!["F1".to_string()],
        )
        .unwrap_err();
        assert!(err.contains("Duplicate sample id: S1"));

        let err = SparseCountTable::new(
            vec!["S1".to_string()],
            vec!["F1".to_string(), "F1".to_string()],
        )
        .unwrap_err();
        assert!(err.contains("Duplicate feature id: F1"));
    }

    #[test]
    fn test_insert_unknown_ids() {
        let mut table = two_by_three();
        assert!(table.insert("F9", "S1", 1).unwrap_err().contains("F9"));
        assert!(table.insert("F1", "S9", 1).unwrap_err().contains("S9"));
    }

    #[test]
    fn test_zero_counts_not_stored() {
        let mut table = two_by_three();
        assert_eq!(table.num_entries(), 3);

        table.insert("F1", "S1", 0).unwrap();
        assert_eq!(table.num_entries(), 2);
        assert_eq!(table.get("F1", "S1"), Some(0));
    }

    #[test]
    fn test_empty_table() {
        let table = SparseCountTable::new(
            vec!["S1".to_string()],
            vec!["F1".to_string()],
        )
        .unwrap();
        assert_eq!(table.num_entries(), 0);
        assert!(table.is_empty());
    }

    #[test]
    fn test_dense_counts_orientation() {
        let table = two_by_three();
        // Storage is feature-major; dense output must be samples × features
        let dense = table.dense_counts();
        assert_eq!(dense, vec![vec![4, 0, 1], vec![0, 2, 0]]);
        assert_eq!(table.sample_ids(), vec!["S1".to_string(), "S2".to_string()]);
    }

    #[test]
    fn test_summary() {
        let table = two_by_three();
        let summary = table.summary();
        assert_eq!(summary.num_samples, 2);
        assert_eq!(summary.num_features, 3);
        assert_eq!(summary.stored_entries, 3);
        assert_eq!(summary.total_count, 7);
        assert!((summary.density - 0.5).abs() < 1e-9);
        assert_eq!(summary.density_category, "Dense");
    }
}
