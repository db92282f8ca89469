//! Todo Errors
//!
//! Everything that can land in a `TodoState` error slot.

use thiserror::Error;

use crate::storage::SaveError;
use crate::validation::ValidationError;

/// How an error should be surfaced to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Input must be corrected; shown next to the input box
    Validation,
    /// Persistence is disabled for the session
    Critical,
    /// Non-blocking, in-memory state is still authoritative
    Warning,
}

/// The single active error of a `TodoState`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("localStorage is not available. Please enable it to use this app.")]
    StorageUnavailable,
    #[error("Failed to load tasks. Starting with an empty list.")]
    LoadFailed,
    #[error(transparent)]
    Save(#[from] SaveError),
    #[error("No more task IDs are available.")]
    IdsExhausted,
}

impl TodoError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TodoError::Validation(_) => ErrorSeverity::Validation,
            TodoError::StorageUnavailable => ErrorSeverity::Critical,
            TodoError::LoadFailed | TodoError::Save(_) | TodoError::IdsExhausted => {
                ErrorSeverity::Warning
            }
        }
    }

    /// Storage-level errors get a banner instead of inline text
    pub fn is_storage_error(&self) -> bool {
        self.severity() != ErrorSeverity::Validation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity() {
        assert_eq!(TodoError::from(ValidationError::EmptyTask).severity(), ErrorSeverity::Validation);
        assert_eq!(TodoError::StorageUnavailable.severity(), ErrorSeverity::Critical);
        assert_eq!(TodoError::LoadFailed.severity(), ErrorSeverity::Warning);
        assert_eq!(TodoError::from(SaveError::QuotaExceeded).severity(), ErrorSeverity::Warning);
        assert_eq!(TodoError::IdsExhausted.severity(), ErrorSeverity::Warning);
        assert!(!TodoError::from(ValidationError::EmptyTask).is_storage_error());
        assert!(TodoError::LoadFailed.is_storage_error());
    }

    #[test]
    fn test_messages_pass_through() {
        assert_eq!(
            TodoError::from(ValidationError::EmptyTask).to_string(),
            "Task cannot be empty"
        );
        assert_eq!(
            TodoError::from(SaveError::WriteFailed("disk on fire".into())).to_string(),
            "Failed to save to localStorage: disk on fire"
        );
    }
}
