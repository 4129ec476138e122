// lib.rs - alphadiv library root

//! # alphadiv - Alpha diversity metric dispatch for microbiome feature tables
//!
//! This library validates and dispatches alpha diversity (within-sample
//! diversity) computations over microbiome/ecological count data. It owns the
//! closed metric catalogs, input validation and result shaping; the numeric
//! routines themselves are external collaborators plugged in through traits.
//!
//! ## Features
//!
//! - **Closed metric catalogs**: 30 count-based metrics plus Faith's PD, fixed at compile time
//! - **Pluggable engines**: count-based and phylogenetic collaborators behind trait seams
//! - **Typed validation**: unknown metrics and empty tables rejected before any numeric work
//! - **Labeled results**: per-sample series tagged with the metric that produced them
//! - **Multiple formats**: TSV, CSV, JSON series export
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use alphadiv::prelude::*;
//! # use alphadiv::metrics::{AlphaDiversity, DenseCounts, NonPhylogeneticMetric};
//! # #[derive(Debug)]
//! # struct MyEngine;
//! # impl AlphaDiversity for MyEngine {
//! #     fn compute(
//! #         &self,
//! #         metric: NonPhylogeneticMetric,
//! #         _counts: &DenseCounts,
//! #         sample_ids: &[String],
//! #     ) -> Result<AlphaSeries, String> {
//! #         AlphaSeries::new(metric.as_str(), sample_ids.to_vec(), vec![0.0; sample_ids.len()])
//! #     }
//! #     fn name(&self) -> &'static str { "example" }
//! #     fn description(&self) -> &'static str { "example engine" }
//! # }
//!
//! // Build a small in-memory feature table (2 samples × 3 features)
//! let mut table = SparseCountTable::new(
//!     vec!["S1".into(), "S2".into()],
//!     vec!["F1".into(), "F2".into(), "F3".into()],
//! )?;
//! table.insert("F1", "S1", 4)?;
//! table.insert("F3", "S2", 1)?;
//!
//! // Dispatch to a count-based diversity engine
//! let engine = MyEngine;
//! let series = alpha(&table, "shannon", &engine)?;
//! println!("{}: {} samples", series.name(), series.len());
//! # Ok::<(), String>(())
//! ```

// Re-export all main modules
pub mod core;
pub mod data;
pub mod metrics;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::core::{alpha, alpha_phylogenetic};
    pub use crate::data::{AlphaSeries, FeatureTable, SparseCountTable, TableSummary};
    pub use crate::metrics::{non_phylogenetic_metrics, phylogenetic_metrics};
    pub use crate::metrics::{AlphaDiversity, PhylogeneticDiversity, PhylogeneticRegistry};
    pub use crate::metrics::{DenseCounts, NonPhylogeneticMetric, PhylogeneticMetric};
    pub use crate::output::write_series;
}

// Re-export main types at the root level for convenience
pub use crate::core::{alpha, alpha_phylogenetic};
pub use crate::data::{AlphaSeries, FeatureTable, SparseCountTable, TableSummary};
pub use crate::metrics::{AlphaDiversity, PhylogeneticDiversity, PhylogeneticRegistry};
pub use crate::metrics::{NonPhylogeneticMetric, PhylogeneticMetric};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "alphadiv v{} - Alpha diversity dispatch for feature tables",
        VERSION
    )
}
