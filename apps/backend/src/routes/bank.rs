//! Learner-facing question bank endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/questions/choice-bank
/// Returns every choice question and flashcard
pub async fn choice_bank(State(state): State<AppState>) -> Result<Json<ChoiceBankResponse>> {
    let questions = state.db.list_questions().await?;
    let flashcards = state.db.list_flashcards().await?;

    Ok(Json(ChoiceBankResponse {
        choice_questions: questions.iter().map(|q| q.to_core()).collect(),
        flashcards: flashcards.iter().map(|f| f.to_core()).collect(),
    }))
}

/// GET /api/questions/cloze-bank
/// Returns every cloze passage
pub async fn cloze_bank(State(state): State<AppState>) -> Result<Json<ClozeBankResponse>> {
    let passages = state.db.list_cloze_passages().await?;

    Ok(Json(ClozeBankResponse {
        cloze_questions: passages.iter().map(|p| p.to_core()).collect(),
    }))
}
