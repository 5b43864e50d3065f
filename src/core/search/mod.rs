pub mod autocomplete;
pub mod matcher;

pub use matcher::{MatcherConfig, ScoredCandidate, best_alignment, exact_match, rank, score};
