//! Validated user input.
//!
//! Raw strings from request bodies are trimmed and checked here before any
//! persistence call. A [`ListName`] or [`ChoiceText`] can only be obtained
//! through `parse`, so holding one proves the value is storable.

use std::fmt;

use crate::error::PickerError;

/// Maximum length of a list name, in characters.
pub const MAX_LIST_NAME_CHARS: usize = 200;

/// A trimmed, non-empty list name of at most [`MAX_LIST_NAME_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListName(String);

impl ListName {
    /// Trims `raw` and validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::Validation`] if the trimmed name is empty or
    /// longer than [`MAX_LIST_NAME_CHARS`].
    pub fn parse(raw: &str) -> Result<Self, PickerError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PickerError::Validation("name must not be empty".to_string()));
        }
        if trimmed.chars().count() > MAX_LIST_NAME_CHARS {
            return Err(PickerError::Validation(format!(
                "name must be at most {MAX_LIST_NAME_CHARS} characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A trimmed, non-empty choice text. No length limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceText(String);

impl ChoiceText {
    /// Trims `raw` and validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::Validation`] if the trimmed text is empty.
    pub fn parse(raw: &str) -> Result<Self, PickerError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PickerError::Validation("text must not be empty".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the text as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn list_name_is_trimmed() {
        let Ok(name) = ListName::parse("  Dinner \t") else {
            panic!("valid name rejected");
        };
        assert_eq!(name.as_str(), "Dinner");
    }

    #[test]
    fn blank_list_name_rejected() {
        for raw in ["", "   ", "\n\t "] {
            let result = ListName::parse(raw);
            assert!(matches!(result, Err(PickerError::Validation(_))), "{raw:?}");
        }
    }

    #[test]
    fn list_name_length_limit_counts_chars() {
        let at_limit = "é".repeat(MAX_LIST_NAME_CHARS);
        assert!(ListName::parse(&at_limit).is_ok());

        let over = "x".repeat(MAX_LIST_NAME_CHARS + 1);
        assert!(matches!(
            ListName::parse(&over),
            Err(PickerError::Validation(_))
        ));
    }

    #[test]
    fn choice_text_is_trimmed_and_unbounded() {
        let Ok(text) = ChoiceText::parse("  Pizza  ") else {
            panic!("valid text rejected");
        };
        assert_eq!(text.as_str(), "Pizza");

        let long = "a".repeat(10_000);
        assert!(ChoiceText::parse(&long).is_ok());
    }

    #[test]
    fn blank_choice_text_rejected() {
        assert!(matches!(
            ChoiceText::parse(" \r\n "),
            Err(PickerError::Validation(_))
        ));
    }
}
