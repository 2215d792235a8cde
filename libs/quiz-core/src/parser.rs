//! Row-record reader for uploaded content sheets.
//!
//! Each row is a set of named fields keyed by the sheet's header row. Columns
//! that are not recognized (a serial-number column, notes) are ignored.
//!
//! | Kind      | Required                      | Optional                                              |
//! |-----------|-------------------------------|-------------------------------------------------------|
//! | choice    | `question`, `correct_answer`  | `option_a`..`option_d`                                |
//! | flashcard | `word`                        | `meaning`, `example`, `explanation`, `part_of_speech`, `question_id` |
//! | cloze     | `passage`, `correct_answers`  |                                                       |

use std::collections::HashMap;

use crate::error::{ParseError, Result};
use crate::types::{NewChoiceQuestion, NewClozePassage, NewFlashcard, OptionLabel};

/// One data row of an uploaded sheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetRow {
    /// Row number in the sheet (1-indexed, header is row 1).
    pub line: usize,
    pub fields: HashMap<String, String>,
}

impl SheetRow {
    pub fn new(line: usize) -> Self {
        Self {
            line,
            fields: HashMap::new(),
        }
    }

    /// Builder-style field insertion.
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.fields.insert(name.to_string(), value.to_string());
        self
    }

    /// Trimmed field value, `None` when absent or blank.
    pub fn get(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    fn require(&self, name: &'static str) -> Result<String> {
        self.get(name).ok_or(ParseError::MissingField {
            line: self.line,
            field: name,
        })
    }
}

/// Read choice question rows.
pub fn parse_choice_rows(rows: &[SheetRow]) -> Result<Vec<NewChoiceQuestion>> {
    rows.iter()
        .map(|row| {
            let question = row.require("question")?;
            let correct_answer = row.require("correct_answer")?;
            Ok(NewChoiceQuestion {
                question,
                option_a: row.get("option_a"),
                option_b: row.get("option_b"),
                option_c: row.get("option_c"),
                option_d: row.get("option_d"),
                correct_answer: match correct_answer.parse::<OptionLabel>() {
                    Ok(label) => label.as_str().to_string(),
                    Err(_) => correct_answer,
                },
            })
        })
        .collect()
}

/// Read flashcard rows.
pub fn parse_flashcard_rows(rows: &[SheetRow]) -> Result<Vec<NewFlashcard>> {
    rows.iter()
        .map(|row| {
            Ok(NewFlashcard {
                word: row.require("word")?,
                meaning: row.get("meaning"),
                example: row.get("example"),
                explanation: row.get("explanation"),
                part_of_speech: row.get("part_of_speech"),
                question_id: parse_question_id(row)?,
            })
        })
        .collect()
}

/// Read cloze passage rows.
pub fn parse_cloze_rows(rows: &[SheetRow]) -> Result<Vec<NewClozePassage>> {
    rows.iter()
        .map(|row| {
            Ok(NewClozePassage {
                passage: row.require("passage")?,
                correct_answers: row.require("correct_answers")?,
            })
        })
        .collect()
}

/// Explicit question link of a flashcard row.
///
/// Blank and zero mean "no explicit link". Spreadsheet numbers may arrive as
/// `"12.0"`, which is accepted when integral.
fn parse_question_id(row: &SheetRow) -> Result<Option<i64>> {
    let Some(value) = row.get("question_id") else {
        return Ok(None);
    };

    let invalid = || ParseError::InvalidQuestionId {
        line: row.line,
        value: value.clone(),
    };

    let id = match value.parse::<i64>() {
        Ok(id) => id,
        Err(_) => {
            let float = value.parse::<f64>().map_err(|_| invalid())?;
            // `as` saturates, so out-of-range values must be rejected first
            if !float.is_finite()
                || float.fract() != 0.0
                || float < i64::MIN as f64
                || float >= i64::MAX as f64
            {
                return Err(invalid());
            }
            float as i64
        }
    };

    Ok(if id == 0 { None } else { Some(id) })
}
