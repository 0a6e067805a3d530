/// The three user-visible failure kinds. Every variant already carries the
/// final localized message shown in the page's single error area.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Transport(String),
}

impl UiError {
    pub fn message(&self) -> &str {
        match self {
            UiError::Validation(m) | UiError::NotFound(m) | UiError::Transport(m) => m,
        }
    }
}
