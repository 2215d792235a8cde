//! Linking flashcards to choice questions by their answer options.

use crate::types::{ChoiceQuestion, MatchCandidate, MatchResult, NewFlashcard};

/// Find the questions a word plausibly answers.
///
/// Questions are scanned in the given order and each contributes at most one
/// candidate: its first option (A to D) that relates to the word. The primary
/// link is the first candidate found, regardless of how close the match is.
pub fn match_word(word: &str, questions: &[ChoiceQuestion]) -> MatchResult {
    let word_lower = word.to_lowercase();

    let candidates: Vec<MatchCandidate> = questions
        .iter()
        .filter_map(|question| {
            question
                .options()
                .find(|(_, option)| option_matches(&word_lower, option))
                .map(|(_, option)| MatchCandidate {
                    question_id: question.id,
                    question_text: question.question.clone(),
                    matched_option: option.to_string(),
                })
        })
        .collect();

    let result = MatchResult::from_candidates(candidates);

    if result.is_ambiguous() {
        let matched: Vec<String> = result
            .candidates
            .iter()
            .map(|c| format!("{}: {}", c.question_id, c.matched_option))
            .collect();
        tracing::info!(
            word,
            count = result.candidates.len(),
            matched = ?matched,
            "Word matched multiple questions"
        );
    }

    result
}

/// Decide the link for an uploaded flashcard.
///
/// An explicit question ID wins and is used as-is, without checking that the
/// question exists and without running the matcher.
pub fn resolve_link(
    flashcard: &NewFlashcard,
    explicit_question_id: Option<i64>,
    questions: &[ChoiceQuestion],
) -> MatchResult {
    match explicit_question_id {
        Some(id) => MatchResult::explicit(id),
        None => match_word(&flashcard.word, questions),
    }
}

/// Substring containment in either direction, on lowercased text.
fn option_matches(word_lower: &str, option: &str) -> bool {
    let option_lower = option.to_lowercase();
    option_lower.contains(word_lower) || word_lower.contains(option_lower.as_str())
}
