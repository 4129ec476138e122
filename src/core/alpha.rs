// alpha.rs - Alpha diversity dispatch functions

use std::path::Path;

use crate::data::{AlphaSeries, FeatureTable};
use crate::metrics::{
    AlphaDiversity, NonPhylogeneticMetric, PhylogeneticMetric, PhylogeneticRegistry,
};

/// Compute a phylogenetic alpha diversity metric.
///
/// `table` and `phylogeny` are file references forwarded untouched to the
/// registered engine; this layer never opens them. Engine failures
/// propagate unchanged. The returned series is relabeled with the metric
/// name.
pub fn alpha_phylogenetic(
    table: &Path,
    phylogeny: &Path,
    metric: &str,
    registry: &PhylogeneticRegistry,
) -> Result<AlphaSeries, String> {
    let metric: PhylogeneticMetric = metric.parse()?;

    let engine = registry.engine_for(metric);
    let mut result = engine.compute(table, phylogeny)?;

    result.set_name(metric.as_str());
    Ok(result)
}

/// Compute a count-based alpha diversity metric.
///
/// The metric name is validated first, then the table is rejected if it
/// holds no entries. The dense samples-by-features matrix and the ordered
/// sample ids are handed to the engine; its failures propagate unchanged.
pub fn alpha(
    table: &dyn FeatureTable,
    metric: &str,
    engine: &dyn AlphaDiversity,
) -> Result<AlphaSeries, String> {
    let metric: NonPhylogeneticMetric = metric.parse()?;

    if table.is_empty() {
        return Err("The provided table object is empty".to_string());
    }

    let counts = table.dense_counts();
    let sample_ids = table.sample_ids();

    let mut result = engine.compute(metric, &counts, &sample_ids)?;

    result.set_name(metric.as_str());
    Ok(result)
}
