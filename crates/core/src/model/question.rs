use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

//
// ─── OPTION LABEL ──────────────────────────────────────────────────────────────
//

/// One of the four answer slots. On the wire this is a single lowercase
/// letter; parsing accepts any case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionLabel {
    A,
    B,
    C,
    D,
}

impl OptionLabel {
    pub const ALL: [OptionLabel; 4] = [
        OptionLabel::A,
        OptionLabel::B,
        OptionLabel::C,
        OptionLabel::D,
    ];

    /// Wire form: lowercase letter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OptionLabel::A => "a",
            OptionLabel::B => "b",
            OptionLabel::C => "c",
            OptionLabel::D => "d",
        }
    }

    /// Display form: uppercase letter.
    #[must_use]
    pub fn letter(self) -> &'static str {
        match self {
            OptionLabel::A => "A",
            OptionLabel::B => "B",
            OptionLabel::C => "C",
            OptionLabel::D => "D",
        }
    }
}

impl fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

impl FromStr for OptionLabel {
    type Err = QuestionValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(OptionLabel::A),
            "b" => Ok(OptionLabel::B),
            "c" => Ok(OptionLabel::C),
            "d" => Ok(OptionLabel::D),
            _ => Err(QuestionValidationError::InvalidCorrectOption {
                raw: s.to_string(),
            }),
        }
    }
}

impl Serialize for OptionLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OptionLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

//
// ─── VALIDATION ERRORS ─────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestionValidationError {
    #[error("question text cannot be empty")]
    EmptyPrompt,

    #[error("option {0} cannot be empty")]
    EmptyOption(OptionLabel),

    #[error("correct option must be one of a-d, got {raw:?}")]
    InvalidCorrectOption { raw: String },

    #[error("question number must be >= 1")]
    InvalidSequenceNumber,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestionSetError {
    #[error("a question set must contain at least one question")]
    Empty,
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// Unvalidated question input, as typed in the builder form or read from a
/// quiz file. Field names match the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub no: u32,
    pub question: String,
    pub a: String,
    pub b: String,
    pub c: String,
    pub d: String,
    pub correct: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl QuestionDraft {
    /// Empty draft numbered for the next position in a list of `len` entries.
    #[must_use]
    pub fn empty(len: usize) -> Self {
        Self {
            no: u32::try_from(len).unwrap_or(u32::MAX).saturating_add(1),
            question: String::new(),
            a: String::new(),
            b: String::new(),
            c: String::new(),
            d: String::new(),
            correct: "a".to_string(),
            explanation: None,
        }
    }

    /// Checks the draft and freezes it into an immutable [`Question`].
    ///
    /// Validation is deliberately shallow: prompt and all four options
    /// non-empty (ignoring surrounding whitespace), correct one of a-d,
    /// sequence number positive.
    ///
    /// # Errors
    ///
    /// Returns the first failing `QuestionValidationError`.
    pub fn validate(self) -> Result<Question, QuestionValidationError> {
        if self.no == 0 {
            return Err(QuestionValidationError::InvalidSequenceNumber);
        }
        if self.question.trim().is_empty() {
            return Err(QuestionValidationError::EmptyPrompt);
        }
        for (label, text) in [
            (OptionLabel::A, &self.a),
            (OptionLabel::B, &self.b),
            (OptionLabel::C, &self.c),
            (OptionLabel::D, &self.d),
        ] {
            if text.trim().is_empty() {
                return Err(QuestionValidationError::EmptyOption(label));
            }
        }
        let correct = self.correct.parse::<OptionLabel>()?;

        Ok(Question {
            number: self.no,
            prompt: self.question,
            a: self.a,
            b: self.b,
            c: self.c,
            d: self.d,
            correct,
            explanation: self.explanation,
        })
    }
}

/// A validated question, immutable once loaded into a session.
///
/// Serializes to the wire shape `no, question, a, b, c, d, correct,
/// explanation`; an absent explanation stays absent so export/import
/// round-trips field for field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    #[serde(rename = "no")]
    number: u32,
    #[serde(rename = "question")]
    prompt: String,
    a: String,
    b: String,
    c: String,
    d: String,
    correct: OptionLabel,
    #[serde(skip_serializing_if = "Option::is_none")]
    explanation: Option<String>,
}

impl Question {
    /// Display label for the question (not an index).
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn option(&self, label: OptionLabel) -> &str {
        match label {
            OptionLabel::A => &self.a,
            OptionLabel::B => &self.b,
            OptionLabel::C => &self.c,
            OptionLabel::D => &self.d,
        }
    }

    #[must_use]
    pub fn correct(&self) -> OptionLabel {
        self.correct
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    /// Thaws the question back into a draft for editing.
    #[must_use]
    pub fn to_draft(&self) -> QuestionDraft {
        QuestionDraft {
            no: self.number,
            question: self.prompt.clone(),
            a: self.a.clone(),
            b: self.b.clone(),
            c: self.c.clone(),
            d: self.d.clone(),
            correct: self.correct.as_str().to_string(),
            explanation: self.explanation.clone(),
        }
    }
}

//
// ─── QUESTION SET ──────────────────────────────────────────────────────────────
//

/// Ordered, non-empty collection of questions for one session. Order is
/// presentation order; there is no reordering during a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    /// # Errors
    ///
    /// Returns `QuestionSetError::Empty` for an empty list.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionSetError> {
        if questions.is_empty() {
            return Err(QuestionSetError::Empty);
        }
        Ok(Self { questions })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    // A set is never empty, but clippy expects the pair.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
