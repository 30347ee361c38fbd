//! Relevance tag matching.

/// Number of entries in `wanted` that appear in `mission_tags`.
///
/// Duplicates in `wanted` count once each, so a tag requested twice weighs
/// twice as much. The preference profile relies on this.
pub fn tag_overlap<M, W>(mission_tags: &[M], wanted: &[W]) -> usize
where
    M: AsRef<str>,
    W: AsRef<str>,
{
    wanted
        .iter()
        .filter(|w| mission_tags.iter().any(|m| m.as_ref() == w.as_ref()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_counts_matches() {
        let mission = ["budget", "cooking"];
        assert_eq!(tag_overlap(&mission, &["cooking", "city"]), 1);
        assert_eq!(tag_overlap(&mission, &["budget", "cooking"]), 2);
        assert_eq!(tag_overlap(&mission, &["social"]), 0);
    }

    #[test]
    fn test_overlap_duplicates_in_wanted_weigh_more() {
        let mission = ["cooking"];
        assert_eq!(tag_overlap(&mission, &["cooking", "fitness", "cooking"]), 2);
    }

    #[test]
    fn test_overlap_empty() {
        let none: [&str; 0] = [];
        assert_eq!(tag_overlap(&["city"], &none), 0);
        assert_eq!(tag_overlap(&none, &["city"]), 0);
    }
}
