//! Synthetic pedigree generator.
//!
//! Produces [`FamilyFile`] instances with founder couples, several
//! generations of children, marriages into the tree from outside, and
//! remarriages that leave half-siblings and one-sided spouse pointers
//! behind.

pub mod names;
pub mod pedigree;

use kinship_core::FamilyFile;
use rand::SeedableRng;
use rand::rngs::StdRng;

use pedigree::build_pedigree;

/// Configuration for the pedigree generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of married couples in the first generation.
    pub founder_couples: usize,
    /// Number of generations, founders included.
    pub generations: usize,
    /// Children per couple are drawn uniformly from `0..=max_children`.
    pub max_children: usize,
    /// Probability that a child marries someone from outside the tree.
    pub marriage_rate: f64,
    /// Probability that a married child marries a second time.
    pub remarriage_rate: f64,
    /// Probability that a child's second parent row is left out.
    pub missing_parent_rate: f64,
    /// Fraction of parent links written as reversed `child` rows.
    pub child_row_rate: f64,
    /// Whether to add one parent row that closes an ancestry loop.
    pub inject_cycles: bool,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// Hundreds of people over four generations.
    Small,
    /// About a thousand people over six generations.
    Medium,
    /// Several thousand people over eight generations.
    Large,
    /// Tens of thousands of people over nine generations.
    XLarge,
    /// Hundreds of thousands of people; written to disk by `gen-family`.
    Huge,
}

impl SizeTier {
    /// Returns the default [`GeneratorConfig`] for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let base = GeneratorConfig {
            seed,
            founder_couples: 4,
            generations: 4,
            max_children: 4,
            marriage_rate: 0.8,
            remarriage_rate: 0.1,
            missing_parent_rate: 0.05,
            child_row_rate: 0.25,
            inject_cycles: false,
        };
        match self {
            SizeTier::Small => base,
            SizeTier::Medium => GeneratorConfig {
                founder_couples: 12,
                generations: 6,
                ..base
            },
            SizeTier::Large => GeneratorConfig {
                founder_couples: 30,
                generations: 8,
                ..base
            },
            SizeTier::XLarge => GeneratorConfig {
                founder_couples: 60,
                generations: 9,
                ..base
            },
            SizeTier::Huge => GeneratorConfig {
                founder_couples: 200,
                generations: 11,
                ..base
            },
        }
    }
}

/// Generates a family document from the given configuration.
///
/// All randomness is deterministic, seeded from `config.seed`.
pub fn generate_family(config: &GeneratorConfig) -> FamilyFile {
    let mut rng = StdRng::seed_from_u64(config.seed);
    build_pedigree(config, &mut rng)
}
