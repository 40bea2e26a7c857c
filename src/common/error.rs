#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("{0}")]
    Validation(String),
    #[error("unknown command: {0}. type `help` for the list of commands")]
    UnknownCommand(String),
}

impl AppError {
    /// Errors caused by what the user typed, as opposed to storage failures.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AppError::Parse(_) | AppError::Validation(_) | AppError::UnknownCommand(_)
        )
    }
}
