use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use super::user::UserId;

/// Matches `cards.id SERIAL` (INT4); a BIGSERIAL column would not decode.
pub type CardId = i32;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DiscountCard {
    pub id: CardId,
    pub card_number: String,
    pub card_name: String,
    /// Read from `DOUBLE PRECISION` (FLOAT8); REAL or NUMERIC columns fail to decode.
    pub discount: f64,
    #[sqlx(rename = "fk_cards_users")]
    pub owner_id: UserId,
}

/// Client-supplied card fields for create and update.
///
/// The owner is never taken from the body; an `fk_cards_users` field sent by
/// older clients is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CardFields {
    pub card_number: String,
    pub card_name: String,
    pub discount: f64,
}

/// Public projection returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub card_number: String,
    pub card_name: String,
    pub discount: f64,
}

impl From<DiscountCard> for CardView {
    fn from(card: DiscountCard) -> Self {
        Self {
            card_number: card.card_number,
            card_name: card.card_name,
            discount: card.discount,
        }
    }
}

impl DiscountCard {
    /// Inserts a card owned by `owner_id` and returns the assigned id
    pub async fn create(
        pool: &PgPool,
        owner_id: UserId,
        fields: &CardFields,
    ) -> Result<CardId, sqlx::Error> {
        let id = sqlx::query_scalar::<_, CardId>(
            r#"
            INSERT INTO cards (card_number, card_name, discount, fk_cards_users)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&fields.card_number)
        .bind(&fields.card_name)
        .bind(fields.discount)
        .bind(owner_id)
        .fetch_one(pool)
        .await?;

        Ok(id)
    }

    /// Replaces the fields of a card, but only if `owner_id` owns it.
    /// Returns whether a row matched.
    pub async fn update_owned(
        pool: &PgPool,
        id: CardId,
        owner_id: UserId,
        fields: &CardFields,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE cards
            SET card_number = $1, card_name = $2, discount = $3
            WHERE id = $4 AND fk_cards_users = $5
            "#,
        )
        .bind(&fields.card_number)
        .bind(&fields.card_name)
        .bind(fields.discount)
        .bind(id)
        .bind(owner_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Lists every card owned by `owner_id`, oldest first
    pub async fn list_by_owner(pool: &PgPool, owner_id: UserId) -> Result<Vec<Self>, sqlx::Error> {
        let cards = sqlx::query_as::<_, Self>(
            r#"
            SELECT id, card_number, card_name, discount, fk_cards_users
            FROM cards
            WHERE fk_cards_users = $1
            ORDER BY id
            "#,
        )
        .bind(owner_id)
        .fetch_all(pool)
        .await?;

        Ok(cards)
    }

    /// Deletes a card if `owner_id` owns it. Returns whether a row matched.
    pub async fn delete_owned(
        pool: &PgPool,
        id: CardId,
        owner_id: UserId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM cards WHERE id = $1 AND fk_cards_users = $2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
