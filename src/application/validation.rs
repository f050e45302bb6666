//! Collect-all validation.
//!
//! Input checks push every failure into a [`ValidationErrors`] list instead
//! of returning on the first one, so a caller sees the complete set of
//! problems in a single response.

use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

pub const ARTICLE_NULL: &str = "articleNull";
pub const EMPTY_TITLE: &str = "emptyTitle";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, code: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            code: code.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.errors.iter().any(|err| err.code == code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn into_vec(self) -> Vec<FieldError> {
        self.errors
    }

    /// `Ok(())` when nothing was recorded, otherwise the whole list.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for err in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", err.code, err.message)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }

    #[test]
    fn keeps_every_error_in_order() {
        let mut errors = ValidationErrors::new();
        errors.add(ARTICLE_NULL, "article object is mandatory");
        errors.add(EMPTY_TITLE, "article title is mandatory");

        let errors = errors.into_result().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(ARTICLE_NULL));
        assert!(errors.contains(EMPTY_TITLE));
        assert_eq!(
            errors.to_string(),
            "articleNull: article object is mandatory; emptyTitle: article title is mandatory"
        );
    }
}
