//! In-memory `CardStore` for tests.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;

use super::store::{CardStore, StoreError};
use crate::models::{CardFields, CardId, DiscountCard, UserId};

#[derive(Default)]
struct Tables {
    users: HashSet<UserId>,
    cards: BTreeMap<CardId, DiscountCard>,
    next_id: CardId,
}

#[derive(Default)]
pub struct MemoryCardStore {
    tables: Mutex<Tables>,
    /// When set, every call fails as if the database were unreachable.
    broken: bool,
}

impl MemoryCardStore {
    pub fn with_users(users: &[UserId]) -> Self {
        let store = Self::default();
        store.tables.lock().unwrap().users.extend(users.iter().copied());
        store
    }

    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    /// Every stored card regardless of owner
    pub fn all_cards(&self) -> Vec<DiscountCard> {
        self.tables.lock().unwrap().cards.values().cloned().collect()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.broken {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl CardStore for MemoryCardStore {
    async fn user_exists(&self, user_id: UserId) -> Result<bool, StoreError> {
        self.check()?;
        Ok(self.tables.lock().unwrap().users.contains(&user_id))
    }

    async fn insert_card(
        &self,
        owner_id: UserId,
        fields: &CardFields,
    ) -> Result<CardId, StoreError> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        tables.next_id += 1;
        let id = tables.next_id;
        tables.cards.insert(
            id,
            DiscountCard {
                id,
                card_number: fields.card_number.clone(),
                card_name: fields.card_name.clone(),
                discount: fields.discount,
                owner_id,
            },
        );
        Ok(id)
    }

    async fn update_owned(
        &self,
        card_id: CardId,
        owner_id: UserId,
        fields: &CardFields,
    ) -> Result<bool, StoreError> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        match tables.cards.get_mut(&card_id) {
            Some(card) if card.owner_id == owner_id => {
                card.card_number = fields.card_number.clone();
                card.card_name = fields.card_name.clone();
                card.discount = fields.discount;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn list_by_owner(&self, owner_id: UserId) -> Result<Vec<DiscountCard>, StoreError> {
        self.check()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .cards
            .values()
            .filter(|card| card.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn delete_owned(&self, card_id: CardId, owner_id: UserId) -> Result<bool, StoreError> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        let owned = tables
            .cards
            .get(&card_id)
            .is_some_and(|card| card.owner_id == owner_id);
        if owned {
            tables.cards.remove(&card_id);
        }
        Ok(owned)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check()
    }
}
