// mod.rs - Metrics module root

pub mod catalog;
pub mod registry;
pub mod traits;

// Re-export main types for convenience
pub use catalog::{non_phylogenetic_metrics, phylogenetic_metrics};
pub use catalog::{NonPhylogeneticMetric, PhylogeneticMetric};
pub use registry::PhylogeneticRegistry;
pub use traits::{AlphaDiversity, DenseCounts, PhylogeneticDiversity};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::AlphaSeries;
    use std::path::Path;

    #[derive(Debug)]
    struct StubPhyloEngine;

    impl PhylogeneticDiversity for StubPhyloEngine {
        fn compute(&self, _table: &Path, _phylogeny: &Path) -> Result<AlphaSeries, String> {
            AlphaSeries::new("stub", vec!["S1".to_string()], vec![1.0])
        }

        fn name(&self) -> &'static str {
            "stub"
        }

        fn description(&self) -> &'static str {
            "Fixed-output engine for tests"
        }
    }

    #[test]
    fn test_phylogenetic_metric_names() {
        let names = phylogenetic_metrics();
        assert_eq!(names.len(), 1);
        assert!(names.contains("faith_pd"));
    }

    #[test]
    fn test_non_phylogenetic_metric_names() {
        let names = non_phylogenetic_metrics();
        assert_eq!(names.len(), 30);
        assert!(names.contains("shannon"));
        assert!(names.contains("observed_otus"));
        assert!(names.contains("michaelis_menten_fit"));
        assert!(!names.contains("faith_pd"));
    }

    #[test]
    fn test_metric_sets_are_disjoint() {
        let phylo = phylogenetic_metrics();
        let non_phylo = non_phylogenetic_metrics();
        assert!(phylo.is_disjoint(&non_phylo));
    }

    #[test]
    fn test_metric_name_round_trip() {
        for metric in NonPhylogeneticMetric::ALL {
            let parsed: NonPhylogeneticMetric = metric.as_str().parse().unwrap();
            assert_eq!(parsed, metric);
        }
        for metric in PhylogeneticMetric::ALL {
            let parsed: PhylogeneticMetric = metric.as_str().parse().unwrap();
            assert_eq!(parsed, metric);
        }
    }

    #[test]
    fn test_unknown_metric_errors_name_the_metric() {
        let err = "not_a_real_metric"
            .parse::<NonPhylogeneticMetric>()
            .unwrap_err();
        assert!(err.contains("not_a_real_metric"));

        let err = "shannon".parse::<PhylogeneticMetric>().unwrap_err();
        assert!(err.contains("shannon"));
        assert!(err.contains("phylogenetic"));
    }

    #[test]
    fn test_metric_serde_names_match_catalog() {
        let json = serde_json::to_string(&NonPhylogeneticMetric::Chao1Ci).unwrap();
        assert_eq!(json, "\"chao1_ci\"");
        let json = serde_json::to_string(&PhylogeneticMetric::FaithPd).unwrap();
        assert_eq!(json, "\"faith_pd\"");
    }

    #[test]
    fn test_registry_serves_every_metric() {
        let registry = PhylogeneticRegistry::new(Box::new(StubPhyloEngine));
        for metric in PhylogeneticMetric::ALL {
            assert_eq!(registry.engine_for(metric).name(), "stub");
        }
        assert!(registry.has_engine("faith_pd"));
        assert!(!registry.has_engine("shannon"));
        assert_eq!(registry.list_engines(), vec![("faith_pd", "stub")]);
        assert_eq!(registry.metric_names(), vec!["faith_pd"]);
    }
}
