//! Relevance scoring for catalog labels against a live query.
//!
//! The scorer rewards candidates containing long prefixes of the query as
//! substrings, with a smooth falloff as the prefix shrinks, and penalizes
//! very short candidates so they cannot dominate on weak evidence.

/// Scoring knobs. The first-character bonus is the refined behavior; the
/// legacy variant without it is kept for compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatcherConfig {
    pub first_char_bonus: bool,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            first_char_bonus: true,
        }
    }
}

impl MatcherConfig {
    pub fn legacy() -> Self {
        Self {
            first_char_bonus: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredCandidate {
    pub index: usize,
    pub score: i32,
}

/// Scores `candidate` against `query`. Case-insensitive (ASCII folding),
/// pure, and total: an empty query scores as the base penalty alone.
pub fn score(query: &str, candidate: &str, config: MatcherConfig) -> i32 {
    let candidate_lower = candidate.to_ascii_lowercase();
    let query_lower = query.to_ascii_lowercase();
    let query_chars: Vec<char> = query_lower.chars().collect();

    // Base penalty, capped so long names are not punished unboundedly.
    let candidate_len = candidate_lower.chars().count() as i32;
    let mut total = -candidate_len.min(10);

    if config.first_char_bonus {
        if let (Some(first_q), Some(first_c)) = (query_chars.first(), candidate_lower.chars().next())
        {
            if *first_q == first_c {
                total += 3;
            }
        }
    }

    // Each right-truncated query prefix that appears in the candidate
    // contributes its length: the full query is worth len(query), the
    // shortest surviving prefix is worth 1.
    for cut in 0..query_chars.len() {
        let keep = query_chars.len() - cut;
        let prefix: String = query_chars[..keep].iter().collect();
        if candidate_lower.contains(&prefix) {
            total += keep as i32;
        }
    }

    total
}

/// Ranks `catalog` by descending score, ties broken by catalog order, and
/// truncates to the top `k`. `k == 0` or an empty catalog yields nothing.
pub fn rank(query: &str, catalog: &[String], k: usize, config: MatcherConfig) -> Vec<ScoredCandidate> {
    if k == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<ScoredCandidate> = catalog
        .iter()
        .enumerate()
        .map(|(index, candidate)| ScoredCandidate {
            index,
            score: score(query, candidate, config),
        })
        .collect();

    // Stable sort keeps the catalog order on equal scores.
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(k);
    ranked
}

/// Case-insensitive whole-string lookup, used to bypass ranking when the
/// query already names a catalog entry outright.
pub fn exact_match(query: &str, catalog: &[String]) -> Option<usize> {
    if query.is_empty() {
        return None;
    }
    catalog
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(query))
}

/// Char range of the longest query prefix found in `candidate`, for
/// highlighting the aligned part of a suggestion.
pub fn best_alignment(query: &str, candidate: &str) -> Option<(usize, usize)> {
    let candidate_lower = candidate.to_ascii_lowercase();
    let query_lower = query.to_ascii_lowercase();
    let query_chars: Vec<char> = query_lower.chars().collect();

    for cut in 0..query_chars.len() {
        let keep = query_chars.len() - cut;
        let prefix: String = query_chars[..keep].iter().collect();
        if let Some(byte_start) = candidate_lower.find(&prefix) {
            let start = candidate_lower[..byte_start].chars().count();
            return Some((start, start + keep));
        }
    }
    None
}
