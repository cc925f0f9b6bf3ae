//! Error types for the simulator and its batch harness.

use thiserror::Error;

/// Errors surfaced by the simulator library.
///
/// Game play itself never fails: supply exhaustion is a `Lost` outcome.
/// These errors cover precondition violations and harness setup.
#[derive(Debug, Error)]
pub enum SimError {
    /// Most-common-letter selection was asked to pick from empty counts.
    #[error("no candidate letters: letter counts are empty")]
    NoCandidateLetters,

    /// A letter outside `a..=z` was given where a guessable letter is required.
    #[error("invalid letter {0:?}: expected a lowercase letter a-z")]
    InvalidLetter(char),

    /// The worker pool could not be built.
    #[error("failed to build worker pool: {0}")]
    WorkerPool(String),

    /// A word list could not be read.
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for simulator operations.
pub type SimResult<T> = Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        assert_eq!(
            SimError::NoCandidateLetters.to_string(),
            "no candidate letters: letter counts are empty"
        );
        assert_eq!(
            SimError::InvalidLetter('Q').to_string(),
            "invalid letter 'Q': expected a lowercase letter a-z"
        );
        assert_eq!(
            SimError::WorkerPool("zero threads".into()).to_string(),
            "failed to build worker pool: zero threads"
        );
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SimError = io.into();
        assert!(matches!(err, SimError::Io(_)));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SimError>();
    }
}
