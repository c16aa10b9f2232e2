use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{CardFields, CardId, DiscountCard, User, UserId};

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence port for discount cards.
///
/// Mutations take the owner as well as the card id and must only touch rows
/// where both match. They report whether such a row existed.
#[async_trait]
pub trait CardStore: Send + Sync {
    /// Returns true when the user row exists.
    async fn user_exists(&self, user_id: UserId) -> Result<bool, StoreError>;

    /// Inserts a new card for `owner_id` and returns its id.
    async fn insert_card(&self, owner_id: UserId, fields: &CardFields)
        -> Result<CardId, StoreError>;

    async fn update_owned(
        &self,
        card_id: CardId,
        owner_id: UserId,
        fields: &CardFields,
    ) -> Result<bool, StoreError>;

    async fn list_by_owner(&self, owner_id: UserId) -> Result<Vec<DiscountCard>, StoreError>;

    async fn delete_owned(&self, card_id: CardId, owner_id: UserId) -> Result<bool, StoreError>;

    /// Round-trips to the backing store, used by the health check.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// `CardStore` backed by the PostgreSQL pool
#[derive(Clone)]
pub struct PgCardStore {
    pool: PgPool,
}

impl PgCardStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CardStore for PgCardStore {
    async fn user_exists(&self, user_id: UserId) -> Result<bool, StoreError> {
        Ok(User::exists(&self.pool, user_id).await?)
    }

    async fn insert_card(
        &self,
        owner_id: UserId,
        fields: &CardFields,
    ) -> Result<CardId, StoreError> {
        Ok(DiscountCard::create(&self.pool, owner_id, fields).await?)
    }

    async fn update_owned(
        &self,
        card_id: CardId,
        owner_id: UserId,
        fields: &CardFields,
    ) -> Result<bool, StoreError> {
        Ok(DiscountCard::update_owned(&self.pool, card_id, owner_id, fields).await?)
    }

    async fn list_by_owner(&self, owner_id: UserId) -> Result<Vec<DiscountCard>, StoreError> {
        Ok(DiscountCard::list_by_owner(&self.pool, owner_id).await?)
    }

    async fn delete_owned(&self, card_id: CardId, owner_id: UserId) -> Result<bool, StoreError> {
        Ok(DiscountCard::delete_owned(&self.pool, card_id, owner_id).await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
