use std::sync::Arc;

use crate::db::{CardStore, StoreError};
use crate::models::{CardFields, CardId, CardView, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(CardId),
    UserNotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    /// No card with this id belongs to the caller; nothing was written.
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// Ownership-scoped card operations. Every call acts only on rows whose
/// owner equals the caller id it is given.
#[derive(Clone)]
pub struct CardService {
    store: Arc<dyn CardStore>,
}

impl CardService {
    pub fn new(store: Arc<dyn CardStore>) -> Self {
        Self { store }
    }

    /// Creates a card for `owner` after checking that the user row exists
    #[tracing::instrument(skip(self, fields))]
    pub async fn create(
        &self,
        owner: UserId,
        fields: CardFields,
    ) -> Result<CreateOutcome, StoreError> {
        if !self.store.user_exists(owner).await? {
            tracing::warn!(user_id = owner, "Card creation for unknown user");
            return Ok(CreateOutcome::UserNotFound);
        }

        let card_id = self.store.insert_card(owner, &fields).await?;
        tracing::info!(user_id = owner, card_id, "Card created");

        Ok(CreateOutcome::Created(card_id))
    }

    /// Replaces all fields of an owned card
    #[tracing::instrument(skip(self, fields))]
    pub async fn update(
        &self,
        owner: UserId,
        card_id: CardId,
        fields: CardFields,
    ) -> Result<UpdateOutcome, StoreError> {
        if self.store.update_owned(card_id, owner, &fields).await? {
            tracing::info!(user_id = owner, card_id, "Card updated");
            Ok(UpdateOutcome::Updated)
        } else {
            tracing::warn!(user_id = owner, card_id, "Update skipped, card not owned or missing");
            Ok(UpdateOutcome::NotFound)
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn list(&self, owner: UserId) -> Result<Vec<CardView>, StoreError> {
        let cards = self.store.list_by_owner(owner).await?;
        tracing::debug!(user_id = owner, count = cards.len(), "Listed cards");

        Ok(cards.into_iter().map(CardView::from).collect())
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, owner: UserId, card_id: CardId) -> Result<DeleteOutcome, StoreError> {
        if self.store.delete_owned(card_id, owner).await? {
            tracing::info!(user_id = owner, card_id, "Card deleted");
            Ok(DeleteOutcome::Deleted)
        } else {
            tracing::warn!(user_id = owner, card_id, "Delete refused, card not owned or missing");
            Ok(DeleteOutcome::NotFound)
        }
    }

    /// Checks that the backing store answers
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }
}
