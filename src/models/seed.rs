//! Seed file model used to bootstrap read-only collections.

use serde::Deserialize;

use super::{NewSubject, NewTopic};

/// Contents of the optional seed file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub topics: Vec<NewTopic>,
    #[serde(default)]
    pub subjects: Vec<NewSubject>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_seed_file() {
        let seed: SeedData = serde_json::from_str(
            r#"{ "subjects": [ { "id": 1, "name": "Rust" }, { "name": "No id" } ] }"#,
        )
        .unwrap();
        assert!(seed.topics.is_empty());
        assert_eq!(seed.subjects.len(), 2);
        assert_eq!(seed.subjects[0].subject_id, Some(1));
        assert_eq!(seed.subjects[1].subject_id, None);
    }
}
