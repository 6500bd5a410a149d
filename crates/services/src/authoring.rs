//! Builder-side question list editing.
//!
//! An [`AuthoringSession`] is the state behind the quiz builder form: the
//! draft being typed, the list of committed questions, and which list entry
//! (if any) the draft is editing. Import replaces the list wholesale;
//! export refuses an empty list.

use tracing::info;

use quiz_core::model::{Question, QuestionDraft, QuestionSet};

use crate::error::AuthoringError;
use crate::quiz_file;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthoringSession {
    questions: Vec<Question>,
    draft: QuestionDraft,
    editing: Option<usize>,
}

impl AuthoringSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            questions: Vec::new(),
            draft: QuestionDraft::empty(0),
            editing: None,
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn draft(&self) -> &QuestionDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut QuestionDraft {
        &mut self.draft
    }

    /// Index of the list entry the draft is editing, if any.
    #[must_use]
    pub fn editing(&self) -> Option<usize> {
        self.editing
    }

    /// Validates the draft and commits it: appended as a new question, or
    /// replacing the entry being edited. On success the form resets to an
    /// empty draft numbered for the next position.
    ///
    /// On failure the draft (and any editing selection) is kept so the user
    /// can fix the form.
    ///
    /// # Errors
    ///
    /// Returns the validation failure for an incomplete draft.
    pub fn commit_draft(&mut self) -> Result<(), AuthoringError> {
        let question = self.draft.clone().validate()?;
        match self.editing.take() {
            Some(index) if index < self.questions.len() => {
                self.questions[index] = question;
            }
            _ => self.questions.push(question),
        }
        self.reset_draft();
        Ok(())
    }

    /// Loads a committed question back into the form. Out-of-range indexes
    /// are ignored.
    pub fn edit(&mut self, index: usize) {
        if let Some(question) = self.questions.get(index) {
            self.draft = question.to_draft();
            self.editing = Some(index);
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.reset_draft();
    }

    /// Deletes a committed question. If the form was editing that entry the
    /// form resets; an edit of a later entry keeps following it.
    pub fn remove(&mut self, index: usize) {
        if index >= self.questions.len() {
            return;
        }
        self.questions.remove(index);
        match self.editing {
            Some(editing) if editing == index => {
                self.editing = None;
                self.reset_draft();
            }
            Some(editing) if editing > index => {
                self.editing = Some(editing - 1);
            }
            _ => {}
        }
    }

    /// Replaces the whole list with an imported set and resets the form.
    pub fn import(&mut self, set: QuestionSet) {
        info!(questions = set.len(), "imported question set into builder");
        self.questions = set.questions().to_vec();
        self.editing = None;
        self.reset_draft();
    }

    /// The committed list as a loadable set.
    ///
    /// # Errors
    ///
    /// Returns `AuthoringError::Empty` when nothing has been committed.
    pub fn to_question_set(&self) -> Result<QuestionSet, AuthoringError> {
        QuestionSet::new(self.questions.clone()).map_err(|_| AuthoringError::Empty)
    }

    /// Pretty-printed JSON of the committed list, for export or clipboard.
    ///
    /// # Errors
    ///
    /// Returns `AuthoringError::Empty` when nothing has been committed.
    pub fn export_json(&self) -> Result<String, AuthoringError> {
        let set = self.to_question_set()?;
        Ok(quiz_file::export_question_set(&set)?)
    }

    fn reset_draft(&mut self) {
        self.draft = QuestionDraft::empty(self.questions.len());
    }
}

impl Default for AuthoringSession {
    fn default() -> Self {
        Self::new()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
