// registry.rs - Engine registry for phylogenetic metrics

use super::catalog::PhylogeneticMetric;
use super::traits::PhylogeneticDiversity;

/// Registry mapping each phylogenetic metric to its engine.
///
/// One field per metric: the registry cannot be constructed without an
/// engine for every catalog entry, and `engine_for` resolves through an
/// exhaustive match, so catalog and registry cannot drift apart.
pub struct PhylogeneticRegistry {
    faith_pd: Box<dyn PhylogeneticDiversity>,
}

impl PhylogeneticRegistry {
    pub fn new(faith_pd: Box<dyn PhylogeneticDiversity>) -> Self {
        Self { faith_pd }
    }

    /// Get the engine registered for a metric
    pub fn engine_for(&self, metric: PhylogeneticMetric) -> &dyn PhylogeneticDiversity {
        match metric {
            PhylogeneticMetric::FaithPd => self.faith_pd.as_ref(),
        }
    }

    /// Check if a metric name resolves to a registered engine
    pub fn has_engine(&self, name: &str) -> bool {
        name.parse::<PhylogeneticMetric>().is_ok()
    }

    /// List all registered engines as (metric name, engine name) pairs
    pub fn list_engines(&self) -> Vec<(&'static str, &'static str)> {
        PhylogeneticMetric::ALL
            .iter()
            .map(|m| (m.as_str(), self.engine_for(*m).name()))
            .collect()
    }

    /// Get all metric names this registry serves
    pub fn metric_names(&self) -> Vec<&'static str> {
        PhylogeneticMetric::ALL.iter().map(|m| m.as_str()).collect()
    }
}
