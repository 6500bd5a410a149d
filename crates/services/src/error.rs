//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::QuestionValidationError;

/// Errors emitted while loading or writing question-set files.
///
/// All of these are recoverable: the caller's session state is left
/// untouched and the message is suitable for showing to the presenter.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizFileError {
    #[error("file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("a quiz file must contain a JSON array of questions")]
    NotAnArray,

    #[error("the quiz file contains no questions")]
    EmptySet,

    #[error("question {position} is invalid: {source}")]
    InvalidQuestion {
        /// 1-based position in the file, for the error message.
        position: usize,
        #[source]
        source: QuestionValidationError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors emitted by `AuthoringSession`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthoringError {
    #[error("add at least one question before exporting")]
    Empty,

    #[error(transparent)]
    Question(#[from] QuestionValidationError),

    #[error(transparent)]
    File(#[from] QuizFileError),
}
