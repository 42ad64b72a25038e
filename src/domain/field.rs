//! Submission field values

/// A free-text field as submitted through the issue form.
///
/// Issue-form payloads carry either a single string (possibly multi-line
/// textarea input) or a list of strings. Any other shape is unrepresentable
/// here, so the "invalid field type" failure of a dynamically-typed caller
/// has no runtime counterpart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Scalar(String),
    List(Vec<String>),
}

impl FieldValue {
    pub fn scalar(value: impl Into<String>) -> Self {
        Self::Scalar(value.into())
    }

    pub fn list(values: Vec<String>) -> Self {
        Self::List(values)
    }

    /// Resolve the field to an ordered list of entries.
    ///
    /// Scalar input is split on newlines with each segment trimmed and empty
    /// segments dropped, supporting several names entered in one textarea.
    /// List input is passed through untouched.
    pub fn normalize(&self) -> Vec<String> {
        match self {
            Self::Scalar(value) => value
                .lines()
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .map(String::from)
                .collect(),
            Self::List(values) => values.clone(),
        }
    }
}
