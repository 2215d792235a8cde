//! Upload planning for flashcard batches.
//!
//! Decides the question link of every uploaded flashcard before anything is
//! written, so the handler only has to persist the plan in order.

use quiz_core::{resolve_link, ChoiceQuestion, NewFlashcard};

use crate::models::FlashcardUploadResult;

/// A flashcard ready to be inserted, with its resolved link.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedFlashcard {
    pub record: NewFlashcard,
    pub question_id: Option<i64>,
    pub result: FlashcardUploadResult,
}

/// Resolve links for a batch of flashcards, keeping upload order.
pub fn plan_flashcards(records: Vec<NewFlashcard>, questions: &[ChoiceQuestion]) -> Vec<PlannedFlashcard> {
    records
        .into_iter()
        .map(|record| {
            let link = resolve_link(&record, record.question_id, questions);
            PlannedFlashcard {
                question_id: link.primary_question_id,
                result: FlashcardUploadResult {
                    word: record.word.clone(),
                    question_id: link.primary_question_id,
                    matched_questions: link.candidates,
                },
                record,
            }
        })
        .collect()
}
