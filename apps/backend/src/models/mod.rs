//! Database models and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Re-export shared types from quiz-core
pub use quiz_core::types::{
    ChoiceQuestion, ClozePassage, Flashcard, MatchCandidate, MatchResult, NewChoiceQuestion,
    NewClozePassage, NewFlashcard,
};

// === Database Entity Types ===

/// Choice question stored in PostgreSQL
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbChoiceQuestion {
    pub id: i64,
    pub question: String,
    pub option_a: Option<String>,
    pub option_b: Option<String>,
    pub option_c: Option<String>,
    pub option_d: Option<String>,
    pub correct_answer: String,
    pub created_at: DateTime<Utc>,
}

impl DbChoiceQuestion {
    /// Convert to quiz-core question type
    pub fn to_core(&self) -> ChoiceQuestion {
        ChoiceQuestion {
            id: self.id,
            question: self.question.clone(),
            option_a: self.option_a.clone(),
            option_b: self.option_b.clone(),
            option_c: self.option_c.clone(),
            option_d: self.option_d.clone(),
            correct_answer: self.correct_answer.clone(),
        }
    }
}

/// Flashcard stored in PostgreSQL
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbFlashcard {
    pub id: i64,
    pub word: String,
    pub meaning: Option<String>,
    pub example: Option<String>,
    pub explanation: Option<String>,
    pub part_of_speech: Option<String>,
    pub question_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl DbFlashcard {
    /// Convert to quiz-core flashcard type
    pub fn to_core(&self) -> Flashcard {
        Flashcard {
            id: self.id,
            word: self.word.clone(),
            meaning: self.meaning.clone(),
            example: self.example.clone(),
            explanation: self.explanation.clone(),
            part_of_speech: self.part_of_speech.clone(),
            question_id: self.question_id,
        }
    }
}

/// Cloze passage stored in PostgreSQL
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbClozePassage {
    pub id: i64,
    pub passage: String,
    pub correct_answers: String,
    pub created_at: DateTime<Utc>,
}

impl DbClozePassage {
    /// Convert to quiz-core cloze type
    pub fn to_core(&self) -> ClozePassage {
        ClozePassage {
            id: self.id,
            passage: self.passage.clone(),
            correct_answers: self.correct_answers.clone(),
        }
    }
}

// === API Response Types ===

/// Response for GET /api/questions/choice-bank
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceBankResponse {
    pub choice_questions: Vec<ChoiceQuestion>,
    pub flashcards: Vec<Flashcard>,
}

/// Response for GET /api/questions/cloze-bank
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClozeBankResponse {
    pub cloze_questions: Vec<ClozePassage>,
}

/// Link outcome for one uploaded flashcard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardUploadResult {
    pub word: String,
    pub question_id: Option<i64>,
    pub matched_questions: Vec<MatchCandidate>,
}

/// Response for the upload endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub count: usize,
    /// Per-row link outcomes, flashcard uploads only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<FlashcardUploadResult>>,
}

impl UploadResponse {
    pub fn new(message: &str, count: usize) -> Self {
        Self {
            message: message.to_string(),
            count,
            results: None,
        }
    }

    pub fn with_results(mut self, results: Vec<FlashcardUploadResult>) -> Self {
        self.results = Some(results);
        self
    }
}
