use thiserror::Error;

use crate::engine::lexicon::LexiconError;
use crate::input::InputError;
use crate::report::ReportError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Lexicon(#[from] LexiconError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("invalid log filter: {0}")]
    LogFilter(String),
}
