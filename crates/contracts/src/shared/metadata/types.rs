//! Core metadata types for entity schemas and form fields
//!
//! All types use 'static lifetimes for zero-cost compile-time constants.

use super::field_kind::FieldKind;
use super::validation::ValidationRules;
use crate::enums::entity_kind::EntityKind;

// ============================================================================
// Entity-level metadata
// ============================================================================

/// Static description of one entity type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntitySchema {
    pub kind: EntityKind,
    /// Field holding the record identifier
    pub id_field: &'static str,
    /// Form fields, in display order
    pub fields: &'static [FieldDescriptor],
    /// Keys the backend returns for a record of this type
    pub record_fields: &'static [&'static str],
    /// Values the `estado` field can take (empty when the type has no status)
    pub statuses: &'static [&'static str],
    pub ui: EntityUiMetadata,
}

impl EntitySchema {
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn has_status(&self) -> bool {
        !self.statuses.is_empty()
    }
}

/// UI names for an entity type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityUiMetadata {
    /// Singular, lower case ("producto")
    pub element_name: &'static str,
    /// Plural, capitalised ("Productos")
    pub list_name: &'static str,
    pub icon: Option<&'static str>,
}

// ============================================================================
// Field-level metadata
// ============================================================================

/// One `(value, label)` entry of a select input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl SelectOption {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// Metadata for a single form field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub validation: ValidationRules,
    pub options: &'static [SelectOption],
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            validation: ValidationRules::none(),
            options: &[],
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub const fn textarea(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::TextArea)
    }

    pub const fn number(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Number)
    }

    pub const fn email(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    pub const fn select(
        name: &'static str,
        label: &'static str,
        options: &'static [SelectOption],
    ) -> Self {
        Self {
            options,
            ..Self::new(name, label, FieldKind::Select)
        }
    }

    pub const fn date(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Date)
    }

    /// Mark the field as required
    pub const fn required(self) -> Self {
        Self {
            validation: ValidationRules {
                required: true,
                ..self.validation
            },
            ..self
        }
    }

    /// Lower bound for numeric inputs
    pub const fn min(self, min: f64) -> Self {
        Self {
            validation: ValidationRules {
                min: Some(min),
                ..self.validation
            },
            ..self
        }
    }

    /// Upper bound for numeric inputs
    pub const fn max(self, max: f64) -> Self {
        Self {
            validation: ValidationRules {
                max: Some(max),
                ..self.validation
            },
            ..self
        }
    }

    pub fn is_required(&self) -> bool {
        self.validation.is_required()
    }

    /// Minimum for the rendered input; numeric fields default to 0
    pub fn input_min(&self) -> Option<f64> {
        match self.kind {
            FieldKind::Number => Some(self.validation.min.unwrap_or(0.0)),
            _ => self.validation.min,
        }
    }

    pub fn input_max(&self) -> Option<f64> {
        self.validation.max
    }

    /// Label with the required marker, e.g. "Nombre*"
    pub fn display_label(&self) -> String {
        if self.is_required() {
            format!("{}*", self.label)
        } else {
            self.label.to_string()
        }
    }
}
