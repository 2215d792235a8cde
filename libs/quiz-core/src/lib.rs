//! Core quiz bank library used by the backend.
//!
//! Provides:
//! - Shared types (ChoiceQuestion, Flashcard, ClozePassage, MatchResult, etc.)
//! - Flashcard to question matching by answer options
//! - Row-record reader for uploaded content sheets

pub mod error;
pub mod matching;
pub mod parser;
pub mod types;

pub use error::{InvalidOptionLabel, ParseError, Result};
pub use matching::{match_word, resolve_link};
pub use parser::{parse_choice_rows, parse_cloze_rows, parse_flashcard_rows, SheetRow};
pub use types::{
    ChoiceQuestion, ClozePassage, Flashcard, MatchCandidate, MatchResult, NewChoiceQuestion,
    NewClozePassage, NewFlashcard, OptionLabel,
};
