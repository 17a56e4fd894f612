// file: src/utils/validation.rs
// description: data validation utilities and helpers
// reference: elasticsearch index naming rules

use crate::error::{MapperError, Result};

const INDEX_NAME_MAX_BYTES: usize = 255;
const INDEX_NAME_FORBIDDEN: &[char] = &['\\', '/', '*', '?', '"', '<', '>', '|', ' ', ',', '#', ':'];

pub struct Validator;

impl Validator {
    pub fn validate_index_name(name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(MapperError::Validation(
                "Index name cannot be empty".to_string(),
            ));
        }

        if name == "." || name == ".." {
            return Err(MapperError::Validation(format!(
                "Index name cannot be {}",
                name
            )));
        }

        if name.len() > INDEX_NAME_MAX_BYTES {
            return Err(MapperError::Validation(format!(
                "Index name too long ({} bytes, max {})",
                name.len(),
                INDEX_NAME_MAX_BYTES
            )));
        }

        if name.starts_with(['-', '_', '+']) {
            return Err(MapperError::Validation(format!(
                "Index name cannot start with '-', '_' or '+': {}",
                name
            )));
        }

        if name.chars().any(|c| c.is_uppercase()) {
            return Err(MapperError::Validation(format!(
                "Index name must be lowercase: {}",
                name
            )));
        }

        if let Some(c) = name.chars().find(|c| INDEX_NAME_FORBIDDEN.contains(c)) {
            return Err(MapperError::Validation(format!(
                "Index name contains forbidden character {:?}: {}",
                c, name
            )));
        }

        Ok(())
    }

    pub fn validate_doc_type(doc_type: &str) -> Result<()> {
        if doc_type.trim().is_empty() {
            return Err(MapperError::Validation(
                "Document type cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_index_name() {
        assert!(Validator::validate_index_name("ipythonsearch").is_ok());
        assert!(Validator::validate_index_name("google-results.2024").is_ok());
        assert!(Validator::validate_index_name("").is_err());
        assert!(Validator::validate_index_name("..").is_err());
        assert!(Validator::validate_index_name("_hidden").is_err());
        assert!(Validator::validate_index_name("Upper").is_err());
        assert!(Validator::validate_index_name("with space").is_err());
        assert!(Validator::validate_index_name("a/b").is_err());
        assert!(Validator::validate_index_name(&"a".repeat(256)).is_err());
    }

    #[test]
    fn test_validate_doc_type() {
        assert!(Validator::validate_doc_type("website").is_ok());
        assert!(Validator::validate_doc_type("").is_err());
        assert!(Validator::validate_doc_type("  ").is_err());
    }
}
