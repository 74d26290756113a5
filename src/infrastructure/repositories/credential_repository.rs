use crate::domain::recipe::UserId;
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use sqlx::PgExecutor;
use std::sync::Arc;

/// Resolves opaque access tokens to the owning user.
pub struct CredentialRepository {
    pool: Arc<DbPool>,
}

impl CredentialRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Find the user owning `token`
    pub async fn resolve(&self, token: &str) -> AppResult<Option<UserId>> {
        resolve_user_id(self.pool.as_ref(), token).await
    }
}

/// Token lookup usable inside an open transaction. An empty token never matches.
pub async fn resolve_user_id<'e, E>(executor: E, token: &str) -> AppResult<Option<UserId>>
where
    E: PgExecutor<'e>,
{
    if token.is_empty() {
        return Ok(None);
    }

    let user_id = sqlx::query_scalar::<_, UserId>(
        r#"
        SELECT id
        FROM users
        WHERE access_token = $1
        "#,
    )
    .bind(token)
    .fetch_optional(executor)
    .await?;

    Ok(user_id)
}
