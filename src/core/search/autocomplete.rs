use crate::core::search::matcher::ScoredCandidate;

/// The top-ranked label, if it extends the query as a prefix. Anything
/// else would surprise as a Tab completion.
pub fn suggest(query: &str, ranked: &[ScoredCandidate], catalog: &[String]) -> Option<String> {
    if query.trim().is_empty() {
        return None;
    }

    let best = ranked.first()?;
    let candidate = catalog.get(best.index)?;

    if candidate
        .to_ascii_lowercase()
        .starts_with(&query.to_ascii_lowercase())
    {
        Some(candidate.clone())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::search::matcher::{MatcherConfig, rank};

    fn catalog(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn completes_prefix_of_top_match() {
        let catalog = catalog(&["Argentina", "Germany", "Greece"]);
        let ranked = rank("arg", &catalog, 3, MatcherConfig::default());
        assert_eq!(suggest("arg", &ranked, &catalog), Some("Argentina".to_string()));
    }

    #[test]
    fn rejects_non_prefix_top_match() {
        let catalog = catalog(&["Germany"]);
        let ranked = rank("man", &catalog, 3, MatcherConfig::default());
        assert_eq!(suggest("man", &ranked, &catalog), None);
    }

    #[test]
    fn empty_query_suggests_nothing() {
        let catalog = catalog(&["Germany"]);
        let ranked = rank("", &catalog, 3, MatcherConfig::default());
        assert_eq!(suggest("", &ranked, &catalog), None);
        assert_eq!(suggest("   ", &ranked, &catalog), None);
    }

    #[test]
    fn empty_ranking_suggests_nothing() {
        let catalog = catalog(&["Germany"]);
        assert_eq!(suggest("ger", &[], &catalog), None);
    }
}
