/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! Form bodies
//!
//! [`FormFields`] is the structured input a service hands to the façade;
//! [`FormData`] is the flat, ordered list of entries that ends up on the wire
//! as `multipart/form-data`. The conversion follows these rules, per key:
//!
//! - sequences append every element under the same key (`key[]` when array
//!   brackets are enabled), keeping element order
//! - files are appended as they are
//! - nested objects are appended as JSON text
//! - any other value is appended as its string form
//! - `null` values produce no entry

use crate::constants::ARRAY_KEY_SUFFIX;
use crate::error::AppError;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use serde_json::{Map, Value};

/// Binary payload sent as a file part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    /// File contents
    pub bytes: Bytes,
    /// File name reported to the server
    pub file_name: Option<String>,
    /// MIME type of the contents
    pub mime_type: Option<String>,
}

impl FilePart {
    /// Creates a file part from raw bytes
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self {
            bytes: bytes.into(),
            file_name: None,
            mime_type: None,
        }
    }

    /// Set the file name
    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Set the MIME type
    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    fn into_part(self) -> Result<Part, AppError> {
        let mut part = Part::bytes(self.bytes.to_vec());
        if let Some(file_name) = self.file_name {
            part = part.file_name(file_name);
        }
        if let Some(mime_type) = self.mime_type {
            part = part.mime_str(&mime_type)?;
        }
        Ok(part)
    }
}

/// Value of a single form field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Plain JSON value
    Value(Value),
    /// Binary file
    File(FilePart),
    /// Sequence of values sent under the same key
    List(Vec<FieldValue>),
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        FieldValue::Value(value)
    }
}

impl From<FilePart> for FieldValue {
    fn from(file: FilePart) -> Self {
        FieldValue::File(file)
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Value(Value::String(text.to_string()))
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Value(Value::String(text))
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        FieldValue::List(items.into_iter().map(Into::into).collect())
    }
}

/// Ordered set of named fields that may carry files
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    fields: Vec<(String, FieldValue)>,
}

impl FormFields {
    /// Creates an empty field set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, builder style
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds a field, replacing any previous field with the same key in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Iterates the fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when there are no fields
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Converts the fields to a JSON object
    ///
    /// Fails when a field holds a file, which has no JSON representation.
    pub fn to_json(&self) -> Result<Value, AppError> {
        let mut map = Map::with_capacity(self.fields.len());
        for (key, value) in &self.fields {
            map.insert(key.clone(), field_to_json(key, value)?);
        }
        Ok(Value::Object(map))
    }
}

impl From<Map<String, Value>> for FormFields {
    fn from(map: Map<String, Value>) -> Self {
        Self {
            fields: map
                .into_iter()
                .map(|(k, v)| (k, FieldValue::Value(v)))
                .collect(),
        }
    }
}

fn field_to_json(key: &str, value: &FieldValue) -> Result<Value, AppError> {
    match value {
        FieldValue::Value(v) => Ok(v.clone()),
        FieldValue::File(_) => Err(AppError::InvalidInput(format!(
            "field '{key}' holds a file and can only be sent as multipart/form-data"
        ))),
        FieldValue::List(items) => items
            .iter()
            .map(|item| field_to_json(key, item))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
    }
}

/// A single multipart entry
#[derive(Debug, Clone, PartialEq)]
pub enum FormEntry {
    /// Text entry
    Text(String),
    /// File entry
    File(FilePart),
}

impl FormEntry {
    /// Text content, if this is a text entry
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormEntry::Text(text) => Some(text),
            FormEntry::File(_) => None,
        }
    }
}

/// Ordered multipart form entries
///
/// Keys may repeat; entries are sent in the order they were appended.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    entries: Vec<(String, FormEntry)>,
}

impl FormData {
    /// Creates an empty form
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the form for a set of fields
    #[must_use]
    pub fn from_fields(fields: &FormFields, array_brackets: bool) -> Self {
        let mut form = Self::new();
        for (key, value) in fields.iter() {
            form.append_field(key, value, array_brackets);
        }
        form
    }

    /// Builds the form for a JSON object
    ///
    /// Arrays use element indices as keys. Primitive values have no keys
    /// and produce an empty form.
    #[must_use]
    pub fn from_value(value: &Value, array_brackets: bool) -> Self {
        let mut form = Self::new();
        match value {
            Value::Object(map) => {
                for (key, v) in map {
                    form.append_value(key, v, array_brackets);
                }
            }
            Value::Array(items) => {
                for (index, v) in items.iter().enumerate() {
                    form.append_value(&index.to_string(), v, array_brackets);
                }
            }
            _ => {}
        }
        form
    }

    /// Appends a text entry
    pub fn append_text(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .push((key.into(), FormEntry::Text(value.into())));
    }

    /// Appends a file entry
    pub fn append_file(&mut self, key: impl Into<String>, file: FilePart) {
        self.entries.push((key.into(), FormEntry::File(file)));
    }

    /// All entries in order
    #[must_use]
    pub fn entries(&self) -> &[(String, FormEntry)] {
        &self.entries
    }

    /// All entries stored under `key`, in order
    #[must_use]
    pub fn get_all(&self, key: &str) -> Vec<&FormEntry> {
        self.entries
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v)
            .collect()
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the form has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when at least one entry is a file
    #[must_use]
    pub fn has_files(&self) -> bool {
        self.entries
            .iter()
            .any(|(_, entry)| matches!(entry, FormEntry::File(_)))
    }

    /// Converts the entries into a `reqwest` multipart form
    pub fn into_multipart(self) -> Result<Form, AppError> {
        let mut form = Form::new();
        for (key, entry) in self.entries {
            form = match entry {
                FormEntry::Text(text) => form.text(key, text),
                FormEntry::File(file) => form.part(key, file.into_part()?),
            };
        }
        Ok(form)
    }

    fn append_field(&mut self, key: &str, value: &FieldValue, array_brackets: bool) {
        match value {
            FieldValue::Value(v) => self.append_value(key, v, array_brackets),
            FieldValue::File(file) => self.append_file(key, file.clone()),
            FieldValue::List(items) => {
                let key = array_key(key, array_brackets);
                for item in items {
                    self.append_element(&key, item);
                }
            }
        }
    }

    fn append_value(&mut self, key: &str, value: &Value, array_brackets: bool) {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                let key = array_key(key, array_brackets);
                for item in items.iter().filter(|item| !item.is_null()) {
                    self.append_text(key.clone(), value_text(item));
                }
            }
            other => self.append_text(key, value_text(other)),
        }
    }

    // Nested lists are flattened under the same key.
    fn append_element(&mut self, key: &str, item: &FieldValue) {
        match item {
            FieldValue::Value(Value::Null) => {}
            FieldValue::Value(v) => self.append_text(key, value_text(v)),
            FieldValue::File(file) => self.append_file(key, file.clone()),
            FieldValue::List(items) => {
                for nested in items {
                    self.append_element(key, nested);
                }
            }
        }
    }
}

fn array_key(key: &str, array_brackets: bool) -> String {
    if array_brackets {
        format!("{key}{ARRAY_KEY_SUFFIX}")
    } else {
        key.to_string()
    }
}

/// String form of a value: strings as-is, everything else as compact JSON
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
