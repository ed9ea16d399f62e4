//! The fact collection: an ordered, immutable set of displayable facts.
//!
//! Loaded exactly once at startup, either from the embedded collection or
//! from a user-supplied JSON file, and never mutated afterwards. An empty
//! collection is a configuration error: construction refuses it, so every
//! `FactSet` that exists is non-empty and a uniform random index is always
//! well defined.

use std::fmt;
use std::fs;
use std::path::Path;

use rand::Rng;
use serde::Deserialize;

/// Embedded default collection, compiled into the binary.
const BUILTIN_FACTS: &str = include_str!("../assets/facts.json");

// ============================================================================
// ERRORS
// ============================================================================

/// Why a fact collection failed to load.
#[derive(Debug)]
pub enum FactsError {
    /// The file could not be read.
    Read(std::io::Error),
    /// The JSON did not parse into the expected shape.
    Parse(serde_json::Error),
    /// The collection parsed but contains no facts.
    Empty,
}

impl fmt::Display for FactsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactsError::Read(e) => write!(f, "cannot read facts file: {}", e),
            FactsError::Parse(e) => write!(f, "malformed facts file: {}", e),
            FactsError::Empty => write!(f, "the fact collection is empty"),
        }
    }
}

impl std::error::Error for FactsError {}

// ============================================================================
// FACT SET
// ============================================================================

/// On-disk shape: `{ "facts": ["...", ...] }`.
#[derive(Debug, Deserialize)]
struct FactsFile {
    facts: Vec<String>,
}

/// The ordered fact collection. Non-empty by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct FactSet {
    facts: Vec<String>,
}

impl FactSet {
    /// Build from an explicit list, rejecting an empty one.
    pub fn from_vec(facts: Vec<String>) -> Result<Self, FactsError> {
        if facts.is_empty() {
            return Err(FactsError::Empty);
        }
        Ok(FactSet { facts })
    }

    /// Parse a JSON document in the `{ "facts": [...] }` shape.
    pub fn from_json(json: &str) -> Result<Self, FactsError> {
        let file: FactsFile = serde_json::from_str(json).map_err(FactsError::Parse)?;
        Self::from_vec(file.facts)
    }

    /// The embedded default collection.
    pub fn builtin() -> Result<Self, FactsError> {
        Self::from_json(BUILTIN_FACTS)
    }

    /// Load a user-supplied collection from disk.
    pub fn from_path(path: &Path) -> Result<Self, FactsError> {
        let json = fs::read_to_string(path).map_err(FactsError::Read)?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.facts.get(index).map(String::as_str)
    }

    /// All facts in collection order.
    pub fn all(&self) -> &[String] {
        &self.facts
    }

    /// Uniform random index over the collection.
    pub fn random_index(&self, rng: &mut impl Rng) -> usize {
        rng.random_range(0..self.facts.len())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write as _;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample() -> FactSet {
        FactSet::from_vec(vec![
            "A fact about gravity.".to_string(),
            "A fact about photons.".to_string(),
            "A fact about entropy.".to_string(),
            "A fact about neurons.".to_string(),
        ])
        .unwrap()
    }

    #[test]
    fn test_builtin_collection_loads_and_is_non_empty() {
        let facts = FactSet::builtin().unwrap();
        assert!(facts.len() > 10);
        assert!(!facts.is_empty());
    }

    #[test]
    fn test_empty_list_is_rejected() {
        let result = FactSet::from_vec(Vec::new());
        assert!(matches!(result, Err(FactsError::Empty)));
    }

    #[test]
    fn test_empty_json_collection_is_rejected() {
        let result = FactSet::from_json(r#"{ "facts": [] }"#);
        assert!(matches!(result, Err(FactsError::Empty)));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let result = FactSet::from_json("not json at all");
        assert!(matches!(result, Err(FactsError::Parse(_))));
    }

    #[test]
    fn test_wrong_shape_is_a_parse_error() {
        let result = FactSet::from_json(r#"["just", "an", "array"]"#);
        assert!(matches!(result, Err(FactsError::Parse(_))));
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "facts": ["One.", "Two."] }}"#).unwrap();

        let facts = FactSet::from_path(file.path()).unwrap();
        assert_eq!(facts.len(), 2);
        assert_eq!(facts.get(0), Some("One."));
        assert_eq!(facts.get(1), Some("Two."));
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let result = FactSet::from_path(Path::new("/nonexistent/facts.json"));
        assert!(matches!(result, Err(FactsError::Read(_))));
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        let facts = sample();
        assert_eq!(facts.get(4), None);
    }

    #[test]
    fn test_all_preserves_order() {
        let facts = sample();
        assert_eq!(facts.all()[1], "A fact about photons.");
        assert_eq!(facts.all().len(), facts.len());
    }

    #[test]
    fn test_random_index_is_always_in_range() {
        let facts = sample();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(facts.random_index(&mut rng) < facts.len());
        }
    }

    #[test]
    fn test_random_index_is_roughly_uniform() {
        let facts = sample();
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0usize; 4];
        for _ in 0..8000 {
            counts[facts.random_index(&mut rng)] += 1;
        }
        // 8000 draws over 4 buckets: each expects 2000, allow a wide band.
        for count in counts {
            assert!((1800..=2200).contains(&count), "skewed bucket: {}", count);
        }
    }
}
