//! Problem repository contract and its in-memory reference implementation.
//!
//! Production deployments wrap the managed document store behind
//! [`ProblemRepository`]; the ranking engine and the contribution workflow
//! only ever see the trait.

use async_trait::async_trait;
use chrono::Utc;
use hireverse_common::{HireverseError, Problem, Result};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Access to the persisted problem collection.
///
/// Implementations can use:
/// - the managed document store (production)
/// - an in-memory collection (tests, local tooling)
#[async_trait]
pub trait ProblemRepository: Send + Sync {
    /// Every known problem, in stable storage order. No pagination or
    /// filtering is guaranteed; callers needing a subset filter themselves.
    async fn fetch_all(&self) -> Result<Vec<Problem>>;

    /// Problems whose `company_tags` contains `name` (exact match).
    async fn fetch_by_company(&self, name: &str) -> Result<Vec<Problem>>;

    /// Look up a problem by its canonical URL.
    async fn find_by_url(&self, url: &str) -> Result<Option<Problem>>;

    /// Persist a problem, assigning an id and a `created_at` stamp when the
    /// record has none. Returns the id. An existing id overwrites in place.
    async fn save(&self, problem: &Problem) -> Result<String>;

    /// Patch a single field on an existing record. Unknown ids error with
    /// [`HireverseError::NotFound`].
    async fn update_field(&self, id: &str, field: &str, value: serde_json::Value) -> Result<()>;
}

// ── In-memory implementation ────────────────────────────────────────────────

/// In-memory problem store. Insertion order is preserved so `fetch_all` is
/// deterministic, which the ranking tests rely on for tie-breaking.
pub struct MemoryProblemStore {
    records: RwLock<Vec<Problem>>,
}

impl MemoryProblemStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Seed a problem (builder style, for tests).
    pub fn with(mut self, problem: Problem) -> Self {
        self.records.get_mut().push(problem);
        self
    }
}

impl Default for MemoryProblemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProblemRepository for MemoryProblemStore {
    async fn fetch_all(&self) -> Result<Vec<Problem>> {
        Ok(self.records.read().await.clone())
    }

    async fn fetch_by_company(&self, name: &str) -> Result<Vec<Problem>> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|p| p.has_company_tag(name))
            .cloned()
            .collect())
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<Problem>> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|p| p.url.as_deref() == Some(url))
            .cloned())
    }

    async fn save(&self, problem: &Problem) -> Result<String> {
        let mut record = problem.clone();
        if record.id.is_empty() {
            record.id = Uuid::new_v4().to_string();
        }
        if record.created_at.is_none() {
            record.created_at = Some(Utc::now());
        }
        let id = record.id.clone();

        let mut records = self.records.write().await;
        match records.iter_mut().find(|p| p.id == id) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
        debug!(%id, "saved problem");
        Ok(id)
    }

    async fn update_field(&self, id: &str, field: &str, value: serde_json::Value) -> Result<()> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| HireverseError::NotFound(id.to_string()))?;

        // Patch through JSON so known and drifted fields go through the same
        // path, exactly like the document store's single-field update.
        let mut doc = serde_json::to_value(&*record)?;
        doc.as_object_mut()
            .ok_or_else(|| HireverseError::Store("problem did not serialize to an object".into()))?
            .insert(field.to_string(), value);
        *record = serde_json::from_value(doc)?;
        debug!(%id, field, "updated problem field");
        Ok(())
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
