#![forbid(unsafe_code)]

pub mod authoring;
pub mod error;
pub mod presenter;
pub mod quiz_file;

pub use quiz_core::Clock;

pub use authoring::AuthoringSession;
pub use error::{AuthoringError, QuizFileError};
pub use presenter::{AUTO_ADVANCE_DELAY_SECS, Presenter, PresenterPhase, TickEvent};
pub use quiz_file::{
    default_export_filename, export_question_set, load_question_set, parse_question_set,
    save_question_set,
};
