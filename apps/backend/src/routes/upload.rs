//! Admin upload endpoints
//!
//! Each endpoint takes a multipart form with one spreadsheet in the `file`
//! field. Rows are parsed up front and inserted one by one, in sheet order,
//! inside a single transaction: a failed batch leaves nothing behind.

use axum::{
    extract::{Multipart, State},
    Json,
};
use quiz_core::{parse_choice_rows, parse_cloze_rows, parse_flashcard_rows, SheetRow};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::spreadsheet;
use crate::services::upload::plan_flashcards;
use crate::AppState;

/// Name of the multipart field carrying the spreadsheet.
const FILE_FIELD: &str = "file";

/// POST /api/admin/upload/choice
pub async fn choice(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    let rows = read_upload(multipart).await?;
    let questions = parse_choice_rows(&rows)?;

    state.db.insert_question_batch(&questions).await?;

    tracing::info!("Uploaded {} choice questions", questions.len());

    Ok(Json(UploadResponse::new(
        "Choice questions uploaded",
        questions.len(),
    )))
}

/// POST /api/admin/upload/flashcard
/// Links each flashcard to a choice question unless the sheet names one
pub async fn flashcard(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    let rows = read_upload(multipart).await?;
    let records = parse_flashcard_rows(&rows)?;

    let questions: Vec<ChoiceQuestion> = state
        .db
        .list_questions()
        .await?
        .iter()
        .map(|q| q.to_core())
        .collect();

    let plan = plan_flashcards(records, &questions);

    let batch: Vec<_> = plan.iter().map(|p| (&p.record, p.question_id)).collect();
    state.db.insert_flashcard_batch(batch).await?;

    let linked = plan.iter().filter(|p| p.question_id.is_some()).count();
    tracing::info!("Uploaded {} flashcards ({} linked)", plan.len(), linked);

    let count = plan.len();
    let results = plan.into_iter().map(|p| p.result).collect();

    Ok(Json(
        UploadResponse::new("Flashcards uploaded", count).with_results(results),
    ))
}

/// POST /api/admin/upload/cloze
pub async fn cloze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    let rows = read_upload(multipart).await?;
    let passages = parse_cloze_rows(&rows)?;

    state.db.insert_cloze_batch(&passages).await?;

    tracing::info!("Uploaded {} cloze passages", passages.len());

    Ok(Json(UploadResponse::new(
        "Cloze passages uploaded",
        passages.len(),
    )))
}

/// Pull the spreadsheet out of the form and decode its rows.
async fn read_upload(mut multipart: Multipart) -> Result<Vec<SheetRow>> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("<unnamed>").to_string();
        let bytes = field.bytes().await?;
        tracing::debug!("Received upload {} ({} bytes)", file_name, bytes.len());

        let rows = spreadsheet::read_rows(bytes.to_vec())?;
        return Ok(rows);
    }

    Err(ApiError::NoFile)
}
