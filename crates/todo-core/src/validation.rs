//! Task Validation
//!
//! Rules applied to task text before it becomes a todo.

use thiserror::Error;

/// Maximum raw task length, in UTF-16 code units
pub const MAX_TASK_CHARS: usize = 128;

/// Rejection of input text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Task cannot be empty")]
    EmptyTask,
    #[error("Task must be {max} characters or less")]
    TooLong { max: usize },
}

/// Validate task text against the default length limit
pub fn validate_task(text: &str) -> Result<(), ValidationError> {
    validate_task_with_limit(text, MAX_TASK_CHARS)
}

/// Validate task text against `max` UTF-16 code units.
///
/// Emptiness is checked on the trimmed text, length on the raw text. Length is
/// measured as the browser measures string length, so characters outside the
/// Basic Multilingual Plane count twice.
pub fn validate_task_with_limit(text: &str, max: usize) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyTask);
    }
    if text.encode_utf16().count() > max {
        return Err(ValidationError::TooLong { max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace_rejected() {
        for text in ["", " ", "   ", "\t", "\n", " \t\r\n "] {
            assert_eq!(validate_task(text), Err(ValidationError::EmptyTask), "{:?}", text);
        }
    }

    #[test]
    fn test_too_long_rejected() {
        for len in [129, 130, 500] {
            let text = "a".repeat(len);
            assert_eq!(validate_task(&text), Err(ValidationError::TooLong { max: 128 }));
        }
    }

    #[test]
    fn test_boundary_lengths_accepted() {
        assert_eq!(validate_task("a"), Ok(()));
        assert_eq!(validate_task(&"a".repeat(128)), Ok(()));
        assert_eq!(validate_task("Buy milk"), Ok(()));
    }

    #[test]
    fn test_length_counts_untrimmed_text() {
        // 127 visible chars padded with two spaces is 129 raw
        let text = format!(" {} ", "a".repeat(127));
        assert_eq!(validate_task(&text), Err(ValidationError::TooLong { max: 128 }));
    }

    #[test]
    fn test_length_counts_utf16_units_not_bytes() {
        let text = "é".repeat(128);
        assert!(text.len() > 128);
        assert_eq!(validate_task(&text), Ok(()));
    }

    #[test]
    fn test_astral_characters_count_twice() {
        // 65 emoji are 130 UTF-16 units
        let text = "😀".repeat(65);
        assert_eq!(text.chars().count(), 65);
        assert_eq!(validate_task(&text), Err(ValidationError::TooLong { max: 128 }));
        assert_eq!(validate_task(&"😀".repeat(64)), Ok(()));
    }

    #[test]
    fn test_messages() {
        assert_eq!(ValidationError::EmptyTask.to_string(), "Task cannot be empty");
        assert_eq!(
            ValidationError::TooLong { max: 128 }.to_string(),
            "Task must be 128 characters or less"
        );
    }

    #[test]
    fn test_custom_limit() {
        assert_eq!(validate_task_with_limit("abcd", 3), Err(ValidationError::TooLong { max: 3 }));
        assert_eq!(validate_task_with_limit("abc", 3), Ok(()));
    }
}
