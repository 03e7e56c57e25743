// src/store.rs
//! Analysis persistence boundary. The engine only produces values; storage
//! is injected behind `AnalysisStore` so the default in-memory map can be
//! swapped for any keyed store without touching the engine or handlers.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::types::Analysis;

/// Keyed analysis storage. Creation assigns-and-appends atomically with
/// respect to concurrent uploads; retrieval is safe to call concurrently
/// with unrelated insertions. Records are immutable once created: there is
/// deliberately no update or delete operation.
#[async_trait]
pub trait AnalysisStore: Send + Sync {
    async fn create(&self, analysis: Analysis) -> Uuid;
    async fn get(&self, id: Uuid) -> Option<Analysis>;
}

/// Default store: a mutex-guarded in-memory map. No persistence, no
/// eviction; suitable for a single-process deployment.
#[derive(Default)]
pub struct InMemoryStore {
    records: RwLock<HashMap<Uuid, Analysis>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AnalysisStore for InMemoryStore {
    async fn create(&self, analysis: Analysis) -> Uuid {
        let id = analysis.id;
        self.records.write().await.insert(id, analysis);
        id
    }

    async fn get(&self, id: Uuid) -> Option<Analysis> {
        self.records.read().await.get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalyzerConfig;
    use crate::engine::AnalysisEngine;
    use std::sync::Arc;

    const RESUME: &str = "\
Jane Doe
jane.doe@email.com
(555) 987-6543

EDUCATION
M.S. Data Science

EXPERIENCE
Analyzed customer churn models

SKILLS
Python, Pandas, SQL
";

    fn sample_analysis() -> Analysis {
        AnalysisEngine::new(AnalyzerConfig::default())
            .analyze(RESUME, "Data Scientist", "jane.txt")
            .unwrap()
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let store = InMemoryStore::new();
        let analysis = sample_analysis();
        let id = store.create(analysis.clone()).await;

        let fetched = store.get(id).await.expect("record should exist");
        assert_eq!(fetched.id, analysis.id);
        assert_eq!(fetched.overall_score, analysis.overall_score);
    }

    #[tokio::test]
    async fn unknown_id_returns_none_not_a_fault() {
        let store = InMemoryStore::new();
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn concurrent_creates_yield_distinct_retrievable_ids() {
        let store = Arc::new(InMemoryStore::new());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.create(sample_analysis()).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }

        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 16);
        for id in ids {
            assert!(store.get(id).await.is_some());
        }
    }
}
