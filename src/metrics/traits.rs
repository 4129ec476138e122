// traits.rs - Engine contracts for the external diversity collaborators

use std::fmt::Debug;
use std::path::Path;

use super::catalog::NonPhylogeneticMetric;
use crate::data::AlphaSeries;

/// Dense samples-by-features count matrix handed to count-based engines
pub type DenseCounts = Vec<Vec<u64>>;

/// Generic count-based diversity computation routine.
///
/// Implementations own the numeric semantics of every count-based metric;
/// this crate only validates and forwards. The returned series must carry
/// one value per entry of `sample_ids`, in the same order.
pub trait AlphaDiversity: Send + Sync + Debug {
    /// Compute `metric` over a dense samples-by-features count matrix
    fn compute(
        &self,
        metric: NonPhylogeneticMetric,
        counts: &DenseCounts,
        sample_ids: &[String],
    ) -> Result<AlphaSeries, String>;

    /// Get a human-readable name for this engine
    fn name(&self) -> &'static str;

    /// Get a description of this engine
    fn description(&self) -> &'static str;
}

/// Phylogenetic diversity computation routine.
///
/// Consumes file references only; reading and interpreting the feature
/// table and tree is entirely the engine's concern.
pub trait PhylogeneticDiversity: Send + Sync + Debug {
    /// Compute diversity from a feature table file and a tree file
    fn compute(&self, table: &Path, phylogeny: &Path) -> Result<AlphaSeries, String>;

    /// Get a human-readable name for this engine
    fn name(&self) -> &'static str;

    /// Get a description of this engine
    fn description(&self) -> &'static str;
}
