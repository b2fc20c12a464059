use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_redis::{redis::AsyncCommands, Pool};

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::auth::application::ports::outgoing::{
    TokenRevocationError, TokenRevocationRepository,
};

/// Revoked session tokens in Redis.
///
/// ```text
/// auth:revoked:token:{token_hash} -> "{user_id}"   (TTL = token lifetime left)
/// auth:revoked:user:{user_id}     -> SET(token_hash)
/// ```
///
/// Keys expire with the token, so nothing needs sweeping.
#[derive(Clone)]
pub struct RedisTokenRevocationRepository {
    pool: Arc<Pool>,
}

impl RedisTokenRevocationRepository {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn token_key(token_hash: &str) -> String {
        format!("auth:revoked:token:{token_hash}")
    }

    fn user_key(user_id: UserId) -> String {
        format!("auth:revoked:user:{user_id}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, TokenRevocationError> {
        self.pool
            .get()
            .await
            .map_err(|e| TokenRevocationError::StoreError(format!("Pool error: {}", e)))
    }
}

/// Seconds until `expires_at`, or `None` once it has passed.
fn remaining_ttl(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> Option<i64> {
    let ttl = (expires_at - now).num_seconds();
    (ttl > 0).then_some(ttl)
}

#[async_trait]
impl TokenRevocationRepository for RedisTokenRevocationRepository {
    async fn revoke(
        &self,
        token_hash: &str,
        user_id: UserId,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRevocationError> {
        let ttl = remaining_ttl(expires_at, Utc::now()).ok_or(TokenRevocationError::AlreadyExpired)?;

        let token_key = Self::token_key(token_hash);
        let user_key = Self::user_key(user_id);

        let mut conn = self.get_conn().await?;

        // MULTI/EXEC so the index never outlives a missing token key
        deadpool_redis::redis::pipe()
            .atomic()
            .cmd("SET")
            .arg(&token_key)
            .arg(user_id.to_string())
            .ignore()
            .cmd("EXPIRE")
            .arg(&token_key)
            .arg(ttl)
            .ignore()
            .cmd("SADD")
            .arg(&user_key)
            .arg(token_hash)
            .ignore()
            .cmd("EXPIRE")
            .arg(&user_key)
            .arg(ttl)
            .ignore()
            .query_async::<()>(&mut *conn)
            .await
            .map_err(|e| TokenRevocationError::StoreError(e.to_string()))?;

        tracing::debug!(user_id = %user_id, ttl, "Session token revoked");
        Ok(())
    }

    async fn is_revoked(&self, token_hash: &str) -> Result<bool, TokenRevocationError> {
        let mut conn = self.get_conn().await?;

        conn.exists(Self::token_key(token_hash))
            .await
            .map_err(|e| TokenRevocationError::StoreError(e.to_string()))
    }
}
