use std::collections::HashMap;

use async_trait::async_trait;
use redis::Client as RedisClient;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::analysis::report::AnalysisResult;
use crate::errors::AppError;

/// Storage for each session's current analysis.
///
/// Carried in `AppState` as `Arc<dyn AnalysisStore>`.
#[async_trait]
pub trait AnalysisStore: Send + Sync {
    async fn load(&self, session_id: Uuid) -> Result<Option<AnalysisResult>, AppError>;

    /// Replaces whatever the session held before.
    async fn save(&self, session_id: Uuid, analysis: &AnalysisResult) -> Result<(), AppError>;
}

/// In-process store, used when no Redis URL is configured and in tests.
#[derive(Default)]
pub struct MemoryAnalysisStore {
    analyses: RwLock<HashMap<Uuid, AnalysisResult>>,
}

impl MemoryAnalysisStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AnalysisStore for MemoryAnalysisStore {
    async fn load(&self, session_id: Uuid) -> Result<Option<AnalysisResult>, AppError> {
        Ok(self.analyses.read().await.get(&session_id).cloned())
    }

    async fn save(&self, session_id: Uuid, analysis: &AnalysisResult) -> Result<(), AppError> {
        self.analyses
            .write()
            .await
            .insert(session_id, analysis.clone());
        Ok(())
    }
}

/// Redis-backed store. Each analysis is one JSON string with a TTL.
pub struct RedisAnalysisStore {
    client: RedisClient,
    ttl_secs: u64,
}

impl RedisAnalysisStore {
    pub fn new(client: RedisClient, ttl_secs: u64) -> Self {
        Self { client, ttl_secs }
    }
}

fn analysis_key(session_id: Uuid) -> String {
    format!("skillmap:analysis:{session_id}")
}

#[async_trait]
impl AnalysisStore for RedisAnalysisStore {
    async fn load(&self, session_id: Uuid) -> Result<Option<AnalysisResult>, AppError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let raw: Option<String> = redis::cmd("GET")
            .arg(analysis_key(session_id))
            .query_async(&mut conn)
            .await?;

        // An unreadable record is treated as absent; the next upload overwrites it.
        Ok(raw.and_then(|json| serde_json::from_str(&json).ok()))
    }

    async fn save(&self, session_id: Uuid, analysis: &AnalysisResult) -> Result<(), AppError> {
        let json = serde_json::to_string(analysis)
            .map_err(|e| AppError::Session(format!("Failed to encode analysis: {e}")))?;

        let mut conn = self.client.get_multiplexed_async_connection().await?;
        redis::cmd("SET")
            .arg(analysis_key(session_id))
            .arg(json)
            .arg("EX")
            .arg(self.ttl_secs)
            .query_async::<_, ()>(&mut conn)
            .await?;

        debug!("Stored analysis {} for session {session_id}", analysis.analysis_id);
        Ok(())
    }
}
