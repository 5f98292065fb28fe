//! Optional bootstrap of the read-only collections from a JSON file.

use std::path::Path;

use super::Repository;
use crate::errors::AppError;
use crate::models::SeedData;

/// How many documents a seed run inserted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub topics: usize,
    pub subjects: usize,
}

/// Read `path` and populate whichever of topics/subjects is empty.
pub async fn seed_from_file(repo: &Repository, path: &Path) -> Result<SeedReport, AppError> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::Internal(format!("Failed to read seed file {}: {}", path.display(), e))
    })?;
    let data: SeedData = serde_json::from_str(&raw)?;
    seed(repo, &data).await
}

/// Insert seed documents into empty collections. Non-empty ones are left alone.
pub async fn seed(repo: &Repository, data: &SeedData) -> Result<SeedReport, AppError> {
    let mut report = SeedReport::default();

    if repo.count_topics().await? == 0 {
        for topic in &data.topics {
            repo.insert_topic(topic).await?;
            report.topics += 1;
        }
    } else {
        tracing::debug!("Topics already present, skipping topic seed");
    }

    if repo.count_subjects().await? == 0 {
        for subject in &data.subjects {
            repo.insert_subject(subject).await?;
            report.subjects += 1;
        }
    } else {
        tracing::debug!("Subjects already present, skipping subject seed");
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_database;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_seed_only_fills_empty_collections() {
        let temp_dir = TempDir::new().unwrap();
        let url = format!("sqlite:{}", temp_dir.path().join("seed.sqlite").display());
        let repo = Repository::new(init_database(&url).await.unwrap());

        let seed_path = temp_dir.path().join("seed.json");
        std::fs::write(
            &seed_path,
            r#"{
                "topics": [ { "title": "Hello", "topic_id": 1 } ],
                "subjects": [ { "id": 1, "name": "General" }, { "id": 2, "name": "Off-topic" } ]
            }"#,
        )
        .unwrap();

        let first = seed_from_file(&repo, &seed_path).await.unwrap();
        assert_eq!(
            first,
            SeedReport {
                topics: 1,
                subjects: 2
            }
        );

        let second = seed_from_file(&repo, &seed_path).await.unwrap();
        assert_eq!(second, SeedReport::default());
        assert_eq!(repo.count_subjects().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_missing_seed_file_is_an_error() {
        let repo = Repository::disconnected();
        let result = seed_from_file(&repo, Path::new("/definitely/not/here.json")).await;
        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
