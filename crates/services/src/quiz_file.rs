//! Question-set file I/O: a JSON array of question records.
//!
//! Loading never partially applies: any rejected file leaves the caller's
//! state untouched, and every failure maps to a user-visible
//! [`QuizFileError`].

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use quiz_core::Clock;
use quiz_core::model::{QuestionDraft, QuestionSet};

use crate::error::QuizFileError;

/// Parses the contents of a quiz file into a validated [`QuestionSet`].
///
/// # Errors
///
/// - `Parse` when the input is not valid JSON (or a record has the wrong
///   shape),
/// - `NotAnArray` when the top level is not a JSON array,
/// - `EmptySet` for an empty array,
/// - `InvalidQuestion` when a record fails validation.
pub fn parse_question_set(input: &str) -> Result<QuestionSet, QuizFileError> {
    let value: serde_json::Value = serde_json::from_str(input).inspect_err(|err| {
        warn!(%err, "rejected quiz file: not valid JSON");
    })?;
    let serde_json::Value::Array(items) = value else {
        warn!("rejected quiz file: top level is not an array");
        return Err(QuizFileError::NotAnArray);
    };

    let mut questions = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let draft: QuestionDraft = serde_json::from_value(item)?;
        let question = draft
            .validate()
            .map_err(|source| QuizFileError::InvalidQuestion {
                position: index + 1,
                source,
            })?;
        questions.push(question);
    }

    let set = QuestionSet::new(questions).map_err(|_| {
        warn!("rejected quiz file: empty array");
        QuizFileError::EmptySet
    })?;
    info!(questions = set.len(), "parsed question set");
    Ok(set)
}

/// Serializes a question set back to the wire shape, pretty-printed.
///
/// # Errors
///
/// Propagates the (practically unreachable) serializer failure as `Parse`.
pub fn export_question_set(set: &QuestionSet) -> Result<String, QuizFileError> {
    Ok(serde_json::to_string_pretty(set.questions())?)
}

/// Reads and parses a quiz file from disk.
///
/// # Errors
///
/// `Io` for filesystem failures, otherwise as [`parse_question_set`].
pub fn load_question_set(path: &Path) -> Result<QuestionSet, QuizFileError> {
    let contents = fs::read_to_string(path)?;
    parse_question_set(&contents)
}

/// Writes a question set to disk, pretty-printed.
///
/// # Errors
///
/// `Io` for filesystem failures.
pub fn save_question_set(path: &Path, set: &QuestionSet) -> Result<(), QuizFileError> {
    let json = export_question_set(set)?;
    fs::write(path, json)?;
    info!(path = %path.display(), questions = set.len(), "question set written");
    Ok(())
}

/// Default file name for an export: `quiz_<unix-millis>.json`.
#[must_use]
pub fn default_export_filename(clock: &Clock) -> String {
    format!("quiz_{}.json", clock.now().timestamp_millis())
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
