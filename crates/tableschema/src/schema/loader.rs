//! Building schemas from JSON table documents.

use std::fs;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{LoadError, Result, SchemaError};

use super::constraints::Constraints;
use super::field::Field;
use super::table::Schema;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Serialized form of a schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaDocument {
    /// A `null` field list reads as empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub fields: Vec<FieldDocument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Accepts `true`/`false` or the strings `"true"`/`"false"`.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub uses_index: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub validate_header_name: bool,
}

/// Serialized form of a field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDocument {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub constraints: Constraints,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FieldDocument {
    fn into_field(self) -> Result<Field> {
        let mut field = Field::new(self.name, self.constraints)?;
        if let Some(title) = self.title {
            field = field.with_title(title);
        }
        if let Some(description) = self.description {
            field = field.with_description(description);
        }
        Ok(field)
    }
}

impl SchemaDocument {
    /// Build a schema identified by `uri`.
    pub fn into_schema(self, uri: impl Into<String>) -> Result<Schema> {
        let fields = self
            .fields
            .into_iter()
            .map(FieldDocument::into_field)
            .collect::<Result<Vec<_>>>()?;

        let mut schema = Schema::new(uri, fields)
            .uses_index(self.uses_index)
            .validate_header_name(self.validate_header_name);
        if let Some(title) = self.title {
            schema = schema.with_title(title);
        }
        if let Some(description) = self.description {
            schema = schema.with_description(description);
        }
        Ok(schema)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_bool<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        _ => false,
    })
}

impl Schema {
    /// Build a schema from an already-parsed JSON table document.
    pub fn from_json_table(uri: impl Into<String>, json: &Value) -> Result<Schema> {
        if !json.is_object() {
            return Err(SchemaError::InvalidSchema(
                "schema document must be a JSON object".to_string(),
            ));
        }
        let document = SchemaDocument::deserialize(json)?;
        document.into_schema(uri)
    }

    /// Fetch and parse a JSON table document.
    ///
    /// `http://` and `https://` URIs are fetched over the network;
    /// `file://` URIs and bare paths are read from disk.
    pub fn load_from_json_table(uri: &str) -> std::result::Result<Schema, LoadError> {
        let body = fetch(uri)?;
        let parse_error = |source| LoadError::Parse {
            uri: uri.to_string(),
            source,
        };

        let json: Value =
            serde_json::from_str(&body).map_err(|e| parse_error(e.into()))?;
        let schema = Schema::from_json_table(uri, &json).map_err(parse_error)?;
        debug!(uri, fields = schema.fields().len(), "loaded schema");
        Ok(schema)
    }

    /// Like [`load_from_json_table`](Self::load_from_json_table) but
    /// collapses every failure to `None`.
    pub fn load_or_none(uri: &str) -> Option<Schema> {
        match Schema::load_from_json_table(uri) {
            Ok(schema) => Some(schema),
            Err(e) => {
                warn!(uri, error = %e, "schema unavailable");
                None
            }
        }
    }
}

fn fetch(uri: &str) -> std::result::Result<String, LoadError> {
    let fetch_error = |message: String| LoadError::Fetch {
        uri: uri.to_string(),
        message,
    };

    if uri.starts_with("http://") || uri.starts_with("https://") {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| fetch_error(e.to_string()))?;
        let response = client
            .get(uri)
            .send()
            .map_err(|e| fetch_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(format!("HTTP status {}", status)));
        }
        response.text().map_err(|e| fetch_error(e.to_string()))
    } else {
        let path = Path::new(uri.strip_prefix("file://").unwrap_or(uri));
        fs::read_to_string(path)
            .map_err(|e| fetch_error(format!("{}: {}", path.display(), e)))
    }
}
