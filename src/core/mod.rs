// mod.rs - Core dispatch module

pub mod alpha;

// Re-export main entry points for convenience
pub use alpha::{alpha, alpha_phylogenetic};
