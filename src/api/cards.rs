use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use serde_json::{json, Value};

use crate::api::middleware::{auth::CurrentUser, state::AppState};
use crate::error::Result;
use crate::models::{CardFields, CardId};
use crate::services::cards::{CardService, CreateOutcome, DeleteOutcome};

const CARD_CREATED: &str = "Дисконтная карта успешно добавлена!.";
const USER_NOT_FOUND: &str = "Пользователь не найден.";

async fn create_card(
    CurrentUser(user_id): CurrentUser,
    State(cards): State<CardService>,
    Json(fields): Json<CardFields>,
) -> Result<Json<Value>> {
    let body = match cards.create(user_id, fields).await? {
        CreateOutcome::Created(id) => json!({ "message": CARD_CREATED, "id": id }),
        CreateOutcome::UserNotFound => json!({ "error": USER_NOT_FOUND }),
    };

    Ok(Json(body))
}

/// Existing clients expect the same confirmation whether or not the card
/// matched, so the outcome only shows up in the logs.
async fn update_card(
    CurrentUser(user_id): CurrentUser,
    State(cards): State<CardService>,
    Path(card_id): Path<CardId>,
    Json(fields): Json<CardFields>,
) -> Result<Json<Value>> {
    let card_name = fields.card_name.clone();
    cards.update(user_id, card_id, fields).await?;

    Ok(Json(json!({
        "done": format!("Дисконтная карта {card_name} успешно обновлена!")
    })))
}

async fn list_cards(
    CurrentUser(user_id): CurrentUser,
    State(cards): State<CardService>,
) -> Result<Json<Value>> {
    let cards = cards.list(user_id).await?;

    Ok(Json(json!({ "cards": cards })))
}

async fn delete_card(
    CurrentUser(user_id): CurrentUser,
    State(cards): State<CardService>,
    Path(card_id): Path<CardId>,
) -> Result<Json<Value>> {
    let body = match cards.delete(user_id, card_id).await? {
        DeleteOutcome::Deleted => json!({
            "message": format!("Дисконтная карта {card_id} успешно удалена.")
        }),
        DeleteOutcome::NotFound => json!({
            "error": format!("Дисконтная карта {card_id} не найдена или не принадлежит пользователю.")
        }),
    };

    Ok(Json(body))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cards", get(list_cards).post(create_card))
        .route("/cards/:card_id", put(update_card).delete(delete_card))
}
