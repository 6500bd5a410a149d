mod question;
mod settings;

pub use question::{
    OptionLabel, Question, QuestionDraft, QuestionSet, QuestionSetError, QuestionValidationError,
};
pub use settings::{PresenterSettings, SettingsError};
