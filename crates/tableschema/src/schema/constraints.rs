//! Per-field constraint set.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Constraints declared for one field.
///
/// Recognized keys are `required`, `index`, `minLength`, `maxLength` and
/// `pattern`. Any other key is kept in [`unknown`](Self::unknown) and
/// otherwise ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    /// Value must be non-empty.
    #[serde(default)]
    pub required: bool,
    /// Explicit 1-based column position, used under index resolution.
    /// Zero, negative and non-numeric indices deserialize as `None`.
    #[serde(
        default,
        deserialize_with = "positive_index",
        skip_serializing_if = "Option::is_none"
    )]
    pub index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Regular expression the value must contain a match for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Unrecognized keys, in document order.
    #[serde(flatten)]
    pub unknown: IndexMap<String, Value>,
}

impl Constraints {
    /// Create an empty constraint set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the explicit column index. Zero is treated as absent.
    pub fn index(mut self, index: usize) -> Self {
        self.index = (index > 0).then_some(index);
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Whether no recognized constraint is set.
    pub fn is_empty(&self) -> bool {
        !self.required
            && self.index.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.pattern.is_none()
    }
}

fn positive_index<'de, D>(deserializer: D) -> std::result::Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_u64)
        .filter(|&i| i > 0)
        .and_then(|i| usize::try_from(i).ok()))
}
