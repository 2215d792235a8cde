//! Core types for the quiz bank.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidOptionLabel;

/// Label of one of the four answer options of a choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionLabel {
    A,
    B,
    C,
    D,
}

impl OptionLabel {
    /// All labels in presentation order.
    pub const ALL: [OptionLabel; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// Get the label as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

/// Parse from string (case-insensitive, surrounding whitespace ignored).
impl FromStr for OptionLabel {
    type Err = InvalidOptionLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            _ => Err(InvalidOptionLabel(s.to_string())),
        }
    }
}

/// Multiple-choice question as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceQuestion {
    pub id: i64,
    pub question: String,
    pub option_a: Option<String>,
    pub option_b: Option<String>,
    pub option_c: Option<String>,
    pub option_d: Option<String>,
    pub correct_answer: String,
}

impl ChoiceQuestion {
    /// Get the text of an option, if present.
    pub fn option(&self, label: OptionLabel) -> Option<&str> {
        match label {
            OptionLabel::A => self.option_a.as_deref(),
            OptionLabel::B => self.option_b.as_deref(),
            OptionLabel::C => self.option_c.as_deref(),
            OptionLabel::D => self.option_d.as_deref(),
        }
    }

    /// Iterate over present options in label order.
    pub fn options(&self) -> impl Iterator<Item = (OptionLabel, &str)> + '_ {
        OptionLabel::ALL
            .into_iter()
            .filter_map(move |label| self.option(label).map(|text| (label, text)))
    }
}

/// Vocabulary flashcard as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: i64,
    pub word: String,
    pub meaning: Option<String>,
    pub example: Option<String>,
    pub explanation: Option<String>,
    pub part_of_speech: Option<String>,
    /// Linked choice question, if any.
    pub question_id: Option<i64>,
}

/// Cloze (fill-in-the-blank) passage as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClozePassage {
    pub id: i64,
    pub passage: String,
    pub correct_answers: String,
}

/// Choice question parsed from an upload, before an ID is assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewChoiceQuestion {
    pub question: String,
    pub option_a: Option<String>,
    pub option_b: Option<String>,
    pub option_c: Option<String>,
    pub option_d: Option<String>,
    pub correct_answer: String,
}

/// Flashcard parsed from an upload, before an ID is assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFlashcard {
    pub word: String,
    pub meaning: Option<String>,
    pub example: Option<String>,
    pub explanation: Option<String>,
    pub part_of_speech: Option<String>,
    /// Question ID given explicitly in the upload.
    pub question_id: Option<i64>,
}

/// Cloze passage parsed from an upload, before an ID is assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewClozePassage {
    pub passage: String,
    pub correct_answers: String,
}

/// A question whose options lexically relate to a flashcard's word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCandidate {
    #[serde(rename = "id")]
    pub question_id: i64,
    #[serde(rename = "question")]
    pub question_text: String,
    #[serde(rename = "matchedOption")]
    pub matched_option: String,
}

/// Outcome of linking one flashcard to the known questions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The chosen link. Always the first candidate's ID when matching ran.
    pub primary_question_id: Option<i64>,
    /// Every matching question, in question order.
    pub candidates: Vec<MatchCandidate>,
}

impl MatchResult {
    /// Result with no link and no candidates.
    pub fn unmatched() -> Self {
        Self::default()
    }

    /// Result for an explicitly supplied link. No candidates are reported.
    pub fn explicit(question_id: i64) -> Self {
        Self {
            primary_question_id: Some(question_id),
            candidates: Vec::new(),
        }
    }

    /// Build from candidates found in question order.
    pub fn from_candidates(candidates: Vec<MatchCandidate>) -> Self {
        Self {
            primary_question_id: candidates.first().map(|c| c.question_id),
            candidates,
        }
    }

    /// Whether more than one question matched.
    pub fn is_ambiguous(&self) -> bool {
        self.candidates.len() > 1
    }
}
