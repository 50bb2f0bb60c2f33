//! Input kind enumeration for form fields

/// Kind of input rendered for a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    TextArea,
    Number,
    Email,
    Select,
    Date,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::TextArea => "textarea",
            Self::Number => "number",
            Self::Email => "email",
            Self::Select => "select",
            Self::Date => "date",
        }
    }

    /// `type` attribute for kinds rendered as a plain `<input>`.
    ///
    /// `TextArea` and `Select` have their own elements and return `None`.
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            Self::TextArea | Self::Select => None,
            other => Some(other.as_str()),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number)
    }
}
