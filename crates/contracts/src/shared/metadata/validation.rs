//! Validation rules for form fields

use serde_json::Value;
use std::fmt;

use crate::shared::coercion::is_truthy;

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            min: None,
            max: None,
        }
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Check a draft value against the required flag.
    ///
    /// Empty strings, `null`, `0` and `false` all count as missing.
    pub fn validate_required(
        &self,
        field: &'static str,
        label: &'static str,
        value: &Value,
    ) -> Result<(), ValidationError> {
        if self.required && !is_truthy(value) {
            return Err(ValidationError::missing(field, label));
        }
        Ok(())
    }
}

/// A required form field holds no value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn missing(field: &'static str, label: &str) -> Self {
        Self {
            field,
            message: format!("El campo {} es obligatorio", label),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}
