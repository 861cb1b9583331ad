//! Contribution write path: users report a problem they were asked.
//! See ARCHITECTURE.md §4.
//!
//! Deduplication is by canonical URL. A known problem gets its frequency
//! bumped and the reporting company unioned into its tags; an unknown URL
//! becomes a fresh record starting at frequency 1.

use hireverse_common::{Difficulty, Problem, Result};
use tracing::info;

use crate::problems::ProblemRepository;

/// Record one user contribution. Returns the id of the touched record.
pub async fn record_contribution(
    repo: &dyn ProblemRepository,
    url: &str,
    title: &str,
    difficulty: &str,
    company: Option<&str>,
) -> Result<String> {
    // Validate before touching the store so a malformed difficulty can never
    // be persisted.
    let _: Difficulty = difficulty.parse()?;

    match repo.find_by_url(url).await? {
        Some(mut existing) => {
            existing.frequency += 1.0;
            if let Some(company) = company {
                // Union semantics: never a duplicate tag.
                if !existing.has_company_tag(company) {
                    existing.company_tags.push(company.to_string());
                }
            }
            let id = repo.save(&existing).await?;
            info!(%id, frequency = existing.frequency, "bumped contributed problem");
            Ok(id)
        }
        None => {
            let fresh = Problem {
                id: String::new(),
                title: title.to_string(),
                difficulty: difficulty.to_string(),
                frequency: 1.0,
                company_tags: company.map(String::from).into_iter().collect(),
                completed: false,
                url: Some(url.to_string()),
                created_at: None,
                extra: serde_json::Map::new(),
            };
            let id = repo.save(&fresh).await?;
            info!(%id, %url, "added contributed problem");
            Ok(id)
        }
    }
}

/// Toggle a user's completion marker on a problem.
pub async fn set_completed(repo: &dyn ProblemRepository, id: &str, completed: bool) -> Result<()> {
    repo.update_field(id, "completed", serde_json::Value::Bool(completed))
        .await
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::MemoryProblemStore;
    use hireverse_common::HireverseError;
    use pretty_assertions::assert_eq;

    const URL: &str = "https://leetcode.com/problems/two-sum/";

    #[tokio::test]
    async fn test_new_contribution_inserts_at_frequency_one() {
        let store = MemoryProblemStore::new();
        let id = record_contribution(&store, URL, "Two Sum", "Easy", Some("Google"))
            .await
            .unwrap();

        let saved = store.find_by_url(URL).await.unwrap().unwrap();
        assert_eq!(saved.id, id);
        assert_eq!(saved.frequency, 1.0);
        assert_eq!(saved.company_tags, vec!["Google"]);
        assert!(saved.created_at.is_some());
    }

    #[tokio::test]
    async fn test_repeat_contribution_bumps_and_unions() {
        let store = MemoryProblemStore::new();
        let first = record_contribution(&store, URL, "Two Sum", "Easy", Some("Google"))
            .await
            .unwrap();
        let second = record_contribution(&store, URL, "Two Sum", "Easy", Some("Amazon"))
            .await
            .unwrap();
        let third = record_contribution(&store, URL, "Two Sum", "Easy", Some("Google"))
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(second, third);

        let saved = store.find_by_url(URL).await.unwrap().unwrap();
        assert_eq!(saved.frequency, 3.0);
        // Google reported twice, stored once.
        assert_eq!(saved.company_tags, vec!["Google", "Amazon"]);
    }

    #[tokio::test]
    async fn test_contribution_rejects_bad_difficulty() {
        let store = MemoryProblemStore::new();
        let err = record_contribution(&store, URL, "Two Sum", "Trivial", None)
            .await
            .unwrap_err();
        assert!(matches!(err, HireverseError::InvalidDifficulty(_)));
        // Nothing was persisted.
        assert!(store.fetch_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_set_completed_round_trip() {
        let store = MemoryProblemStore::new();
        let id = record_contribution(&store, URL, "Two Sum", "Easy", None)
            .await
            .unwrap();

        set_completed(&store, &id, true).await.unwrap();
        assert!(store.find_by_url(URL).await.unwrap().unwrap().completed);

        set_completed(&store, &id, false).await.unwrap();
        assert!(!store.find_by_url(URL).await.unwrap().unwrap().completed);
    }
}
