//! A single fix-up request as entered by the user.

use layoutfix_keyboard::{transform_text, ConfigurationError, Language};

/// Rejected before the transform runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Text is required")]
    EmptyText,

    #[error("Languages should be different")]
    SameLanguage,
}

/// Text plus the layout it was typed in and the layout it was meant for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformRequest {
    pub text: String,
    pub lang_from: Language,
    pub lang_to: Language,
}

impl TransformRequest {
    pub fn new(text: impl Into<String>, lang_from: Language, lang_to: Language) -> Self {
        Self {
            text: text.into(),
            lang_from,
            lang_to,
        }
    }

    /// Exchange source and target layouts.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.lang_from, &mut self.lang_to);
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.text.is_empty() {
            return Err(ValidationError::EmptyText);
        }
        if self.lang_from == self.lang_to {
            return Err(ValidationError::SameLanguage);
        }
        Ok(())
    }

    pub fn run(&self) -> Result<String, ConfigurationError> {
        transform_text(&self.text, self.lang_from, self.lang_to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ok() {
        let request = TransformRequest::new("ghbdsn", Language::Eng, Language::Ukr);
        assert_eq!(request.validate(), Ok(()));
        assert_eq!(request.run().unwrap(), "привіт");
    }

    #[test]
    fn test_validate_empty_text() {
        let request = TransformRequest::new("", Language::Eng, Language::Ukr);
        assert_eq!(request.validate(), Err(ValidationError::EmptyText));
    }

    #[test]
    fn test_validate_same_language() {
        let request = TransformRequest::new("text", Language::Ukr, Language::Ukr);
        assert_eq!(request.validate(), Err(ValidationError::SameLanguage));
        assert_eq!(
            ValidationError::SameLanguage.to_string(),
            "Languages should be different"
        );
        // The transform itself still tolerates it.
        assert_eq!(request.run().unwrap(), "text");
    }

    #[test]
    fn test_swap() {
        let mut request = TransformRequest::new("руддщ", Language::Eng, Language::Ukr);
        request.swap();
        assert_eq!(request.lang_from, Language::Ukr);
        assert_eq!(request.lang_to, Language::Eng);
        assert_eq!(request.run().unwrap(), "hello");
    }
}
