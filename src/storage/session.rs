use std::{collections::HashMap, sync::Arc, time::Duration as StdDuration};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tokio::{sync::Mutex, task::JoinHandle};

use crate::{db::DbPool, error::AppResult};

/// State attached to a logged-in session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    pub user_id: i32,
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Expired sessions read as absent.
    async fn get(&self, sid: &str) -> AppResult<Option<SessionData>>;
    async fn set(&self, sid: &str, data: SessionData, ttl: Duration) -> AppResult<()>;
    async fn destroy(&self, sid: &str) -> AppResult<()>;
    /// Drop expired sessions, returning how many were removed.
    async fn prune(&self) -> AppResult<u64>;
}

#[derive(Default)]
pub struct MemorySessionStore {
    sessions: Mutex<HashMap<String, (SessionData, DateTime<Utc>)>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, sid: &str) -> AppResult<Option<SessionData>> {
        let sessions = self.sessions.lock().await;
        Ok(sessions
            .get(sid)
            .filter(|(_, expires)| *expires > Utc::now())
            .map(|(data, _)| data.clone()))
    }

    async fn set(&self, sid: &str, data: SessionData, ttl: Duration) -> AppResult<()> {
        let expires = Utc::now() + ttl;
        self.sessions
            .lock()
            .await
            .insert(sid.to_string(), (data, expires));
        Ok(())
    }

    async fn destroy(&self, sid: &str) -> AppResult<()> {
        self.sessions.lock().await.remove(sid);
        Ok(())
    }

    async fn prune(&self) -> AppResult<u64> {
        let now = Utc::now();
        let mut sessions = self.sessions.lock().await;
        let before = sessions.len();
        sessions.retain(|_, (_, expires)| *expires > now);
        Ok((before - sessions.len()) as u64)
    }
}

/// Sessions in the `session` table, created on first connect.
pub struct PgSessionStore {
    pool: DbPool,
}

impl PgSessionStore {
    pub async fn new(pool: DbPool) -> AppResult<Self> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS session (
                sid VARCHAR NOT NULL PRIMARY KEY,
                sess JSONB NOT NULL,
                expire TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await?;
        sqlx::query(r#"CREATE INDEX IF NOT EXISTS "IDX_session_expire" ON session (expire)"#)
            .execute(&pool)
            .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl SessionStore for PgSessionStore {
    async fn get(&self, sid: &str) -> AppResult<Option<SessionData>> {
        let row: Option<(serde_json::Value,)> =
            sqlx::query_as("SELECT sess FROM session WHERE sid = $1 AND expire > now()")
                .bind(sid)
                .fetch_optional(&self.pool)
                .await?;

        match row {
            Some((sess,)) => match serde_json::from_value(sess) {
                Ok(data) => Ok(Some(data)),
                Err(err) => {
                    tracing::warn!(error = %err, "discarding unreadable session");
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    async fn set(&self, sid: &str, data: SessionData, ttl: Duration) -> AppResult<()> {
        let sess = serde_json::to_value(&data).map_err(|e| anyhow::anyhow!(e))?;
        sqlx::query(
            r#"
            INSERT INTO session (sid, sess, expire)
            VALUES ($1, $2, $3)
            ON CONFLICT (sid) DO UPDATE SET sess = EXCLUDED.sess, expire = EXCLUDED.expire
            "#,
        )
        .bind(sid)
        .bind(sess)
        .bind(Utc::now() + ttl)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn destroy(&self, sid: &str) -> AppResult<()> {
        sqlx::query("DELETE FROM session WHERE sid = $1")
            .bind(sid)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn prune(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM session WHERE expire <= now()")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

/// Prune `store` every `every` (at least one second); the first run happens
/// one interval after start.
pub fn spawn_session_pruner(store: Arc<dyn SessionStore>, every: StdDuration) -> JoinHandle<()> {
    let every = every.max(StdDuration::from_secs(1));
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            match store.prune().await {
                Ok(removed) => tracing::debug!(removed, "pruned expired sessions"),
                Err(err) => tracing::warn!(error = %err, "session prune failed"),
            }
        }
    })
}
