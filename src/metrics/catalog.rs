// catalog.rs - Closed catalogs of supported alpha diversity metrics

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::{self, Display};
use std::str::FromStr;

/// Metrics that require a phylogenetic tree in addition to counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhylogeneticMetric {
    FaithPd,
}

impl PhylogeneticMetric {
    /// Every supported phylogenetic metric
    pub const ALL: [PhylogeneticMetric; 1] = [PhylogeneticMetric::FaithPd];

    pub fn as_str(&self) -> &'static str {
        match self {
            PhylogeneticMetric::FaithPd => "faith_pd",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PhylogeneticMetric::FaithPd => "Faith's phylogenetic diversity",
        }
    }
}

impl FromStr for PhylogeneticMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|m| m.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Unknown phylogenetic metric: {}", s))
    }
}

impl Display for PhylogeneticMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Metrics computed from feature counts alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonPhylogeneticMetric {
    Ace,
    BergerParkerD,
    BrillouinD,
    Chao1,
    Chao1Ci,
    Dominance,
    Doubles,
    Enspie,
    EstyCi,
    FisherAlpha,
    GiniIndex,
    GoodsCoverage,
    HeipE,
    KemptonTaylorQ,
    LladserCi,
    LladserPe,
    Margalef,
    McintoshD,
    McintoshE,
    Menhinick,
    MichaelisMentenFit,
    ObservedOtus,
    Osd,
    PielouE,
    Robbins,
    Shannon,
    Simpson,
    SimpsonE,
    Singles,
    Strong,
}

impl NonPhylogeneticMetric {
    /// Every supported count-based metric
    pub const ALL: [NonPhylogeneticMetric; 30] = [
        NonPhylogeneticMetric::Ace,
        NonPhylogeneticMetric::BergerParkerD,
        NonPhylogeneticMetric::BrillouinD,
        NonPhylogeneticMetric::Chao1,
        NonPhylogeneticMetric::Chao1Ci,
        NonPhylogeneticMetric::Dominance,
        NonPhylogeneticMetric::Doubles,
        NonPhylogeneticMetric::Enspie,
        NonPhylogeneticMetric::EstyCi,
        NonPhylogeneticMetric::FisherAlpha,
        NonPhylogeneticMetric::GiniIndex,
        NonPhylogeneticMetric::GoodsCoverage,
        NonPhylogeneticMetric::HeipE,
        NonPhylogeneticMetric::KemptonTaylorQ,
        NonPhylogeneticMetric::LladserCi,
        NonPhylogeneticMetric::LladserPe,
        NonPhylogeneticMetric::Margalef,
        NonPhylogeneticMetric::McintoshD,
        NonPhylogeneticMetric::McintoshE,
        NonPhylogeneticMetric::Menhinick,
        NonPhylogeneticMetric::MichaelisMentenFit,
        NonPhylogeneticMetric::ObservedOtus,
        NonPhylogeneticMetric::Osd,
        NonPhylogeneticMetric::PielouE,
        NonPhylogeneticMetric::Robbins,
        NonPhylogeneticMetric::Shannon,
        NonPhylogeneticMetric::Simpson,
        NonPhylogeneticMetric::SimpsonE,
        NonPhylogeneticMetric::Singles,
        NonPhylogeneticMetric::Strong,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NonPhylogeneticMetric::Ace => "ace",
            NonPhylogeneticMetric::BergerParkerD => "berger_parker_d",
            NonPhylogeneticMetric::BrillouinD => "brillouin_d",
            NonPhylogeneticMetric::Chao1 => "chao1",
            NonPhylogeneticMetric::Chao1Ci => "chao1_ci",
            NonPhylogeneticMetric::Dominance => "dominance",
            NonPhylogeneticMetric::Doubles => "doubles",
            NonPhylogeneticMetric::Enspie => "enspie",
            NonPhylogeneticMetric::EstyCi => "esty_ci",
            NonPhylogeneticMetric::FisherAlpha => "fisher_alpha",
            NonPhylogeneticMetric::GiniIndex => "gini_index",
            NonPhylogeneticMetric::GoodsCoverage => "goods_coverage",
            NonPhylogeneticMetric::HeipE => "heip_e",
            NonPhylogeneticMetric::KemptonTaylorQ => "kempton_taylor_q",
            NonPhylogeneticMetric::LladserCi => "lladser_ci",
            NonPhylogeneticMetric::LladserPe => "lladser_pe",
            NonPhylogeneticMetric::Margalef => "margalef",
            NonPhylogeneticMetric::McintoshD => "mcintosh_d",
            NonPhylogeneticMetric::McintoshE => "mcintosh_e",
            NonPhylogeneticMetric::Menhinick => "menhinick",
            NonPhylogeneticMetric::MichaelisMentenFit => "michaelis_menten_fit",
            NonPhylogeneticMetric::ObservedOtus => "observed_otus",
            NonPhylogeneticMetric::Osd => "osd",
            NonPhylogeneticMetric::PielouE => "pielou_e",
            NonPhylogeneticMetric::Robbins => "robbins",
            NonPhylogeneticMetric::Shannon => "shannon",
            NonPhylogeneticMetric::Simpson => "simpson",
            NonPhylogeneticMetric::SimpsonE => "simpson_e",
            NonPhylogeneticMetric::Singles => "singles",
            NonPhylogeneticMetric::Strong => "strong",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            NonPhylogeneticMetric::Ace => "Abundance-based coverage estimator of richness",
            NonPhylogeneticMetric::BergerParkerD => "Berger-Parker dominance",
            NonPhylogeneticMetric::BrillouinD => "Brillouin's index",
            NonPhylogeneticMetric::Chao1 => "Chao1 richness estimator",
            NonPhylogeneticMetric::Chao1Ci => "Confidence interval for Chao1",
            NonPhylogeneticMetric::Dominance => "Simpson's dominance index",
            NonPhylogeneticMetric::Doubles => "Number of double-occurrence features",
            NonPhylogeneticMetric::Enspie => "Effective number of species (ENS_PIE)",
            NonPhylogeneticMetric::EstyCi => "Esty's confidence interval for unobserved probability",
            NonPhylogeneticMetric::FisherAlpha => "Fisher's alpha",
            NonPhylogeneticMetric::GiniIndex => "Gini index of abundance inequality",
            NonPhylogeneticMetric::GoodsCoverage => "Good's coverage estimator",
            NonPhylogeneticMetric::HeipE => "Heip's evenness",
            NonPhylogeneticMetric::KemptonTaylorQ => "Kempton-Taylor Q index",
            NonPhylogeneticMetric::LladserCi => "Lladser's interval for the unobserved fraction",
            NonPhylogeneticMetric::LladserPe => "Lladser's point estimate of the unobserved fraction",
            NonPhylogeneticMetric::Margalef => "Margalef's richness index",
            NonPhylogeneticMetric::McintoshD => "McIntosh dominance",
            NonPhylogeneticMetric::McintoshE => "McIntosh evenness",
            NonPhylogeneticMetric::Menhinick => "Menhinick's richness index",
            NonPhylogeneticMetric::MichaelisMentenFit => "Michaelis-Menten richness fit",
            NonPhylogeneticMetric::ObservedOtus => "Number of observed features",
            NonPhylogeneticMetric::Osd => "Observed features, singles and doubles",
            NonPhylogeneticMetric::PielouE => "Pielou's evenness",
            NonPhylogeneticMetric::Robbins => "Robbins' estimator of unobserved probability",
            NonPhylogeneticMetric::Shannon => "Shannon entropy",
            NonPhylogeneticMetric::Simpson => "Simpson's diversity index",
            NonPhylogeneticMetric::SimpsonE => "Simpson's evenness",
            NonPhylogeneticMetric::Singles => "Number of single-occurrence features",
            NonPhylogeneticMetric::Strong => "Strong's dominance index",
        }
    }
}

impl FromStr for NonPhylogeneticMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|m| m.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Unknown metric: {}", s))
    }
}

impl Display for NonPhylogeneticMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Names of all supported phylogenetic metrics
pub fn phylogenetic_metrics() -> HashSet<&'static str> {
    PhylogeneticMetric::ALL.iter().map(|m| m.as_str()).collect()
}

/// Names of all supported count-based metrics
pub fn non_phylogenetic_metrics() -> HashSet<&'static str> {
    NonPhylogeneticMetric::ALL
        .iter()
        .map(|m| m.as_str())
        .collect()
}
