use sqlx::PgPool;

/// Matches `users.id SERIAL` (INT4), also used by `cards.fk_cards_users`.
pub type UserId = i32;

/// Users are managed elsewhere; this service only checks that one exists.
pub struct User;

impl User {
    /// Returns true when a `users` row with this id exists
    pub async fn exists(pool: &PgPool, id: UserId) -> Result<bool, sqlx::Error> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)
            "#,
        )
        .bind(id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }
}
