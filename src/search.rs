//! Substring search over the fact collection.
//!
//! A pure derived computation: the order-preserving subsequence of facts
//! that contain the search term as a case-insensitive substring. An empty
//! or whitespace-only term yields an empty result, so the search section
//! stays blank until the user actually types something.

/// Indices of facts matching `term`, in collection order.
///
/// Emptiness is decided on the trimmed term; matching itself is not, so
/// `"  "` matches nothing while `" light"` must literally contain a
/// leading space to match.
pub fn matching_indices(facts: &[String], term: &str) -> Vec<usize> {
    if term.trim().is_empty() {
        return Vec::new();
    }
    let needle = term.to_lowercase();
    facts
        .iter()
        .enumerate()
        .filter(|(_, fact)| fact.to_lowercase().contains(&needle))
        .map(|(index, _)| index)
        .collect()
}

/// The matching facts themselves, in collection order.
pub fn filter_facts<'a>(facts: &'a [String], term: &str) -> Vec<&'a str> {
    matching_indices(facts, term)
        .into_iter()
        .map(|index| facts[index].as_str())
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
