use axum::extract::FromRef;
use std::sync::Arc;

use crate::services::{cards::CardService, token::TokenVerifier};

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub cards: CardService,
    pub verifier: Arc<TokenVerifier>,
}

impl FromRef<AppState> for CardService {
    fn from_ref(state: &AppState) -> CardService {
        state.cards.clone()
    }
}
