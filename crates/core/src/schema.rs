use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

/// Fatal schema introspection failures.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The column declares neither a type nor a named target.
    #[error("Unable to recognize type of the column: {0}")]
    UnresolvableType(String),
}

/// Display type of a documented field: a primitive wire tag, or the name of
/// the schema construct the column delegates to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    Str,
    Int,
    Float,
    Bool,
    Date,
    DateTime,
    List,
    Dict,
    Url,
    File,
    Attachment,
    Named(String),
}

impl FieldType {
    /// Name used in documentation tables and metadata payloads.
    pub fn name(&self) -> &str {
        match self {
            FieldType::Str => "str",
            FieldType::Int => "int",
            FieldType::Float => "float",
            FieldType::Bool => "bool",
            FieldType::Date => "date",
            FieldType::DateTime => "datetime",
            FieldType::List => "list",
            FieldType::Dict => "dict",
            FieldType::Url => "url",
            FieldType::File => "file",
            FieldType::Attachment => "attachment",
            FieldType::Named(name) => name,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for FieldType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Declared default of a column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnDefault {
    /// A literal value, reproduced in the documentation as-is.
    Literal(Value),
    /// Produced by a function at insert time; not representable literally.
    Computed,
}

impl ColumnDefault {
    /// Cell text for documentation tables and metadata payloads.
    pub fn display(&self) -> String {
        match self {
            ColumnDefault::Literal(Value::String(text)) => text.clone(),
            ColumnDefault::Literal(value) => value.to_string(),
            ColumnDefault::Computed => "function(...)".to_string(),
        }
    }
}

/// Free-form annotations attached to a column.
///
/// `json` is the public wire name and is always required; everything else is
/// optional documentation and validation metadata.
#[derive(Debug, Clone)]
pub struct ColumnInfo {
    pub json: String,
    pub attachment: bool,
    pub unreadable: bool,
    pub pattern: Option<String>,
    pub max_length: Option<usize>,
    pub min_length: Option<usize>,
    pub message: Option<String>,
    pub watermark: Option<String>,
}

impl ColumnInfo {
    pub fn new(json: impl Into<String>) -> Self {
        Self {
            json: json.into(),
            attachment: false,
            unreadable: false,
            pattern: None,
            max_length: None,
            min_length: None,
            message: None,
            watermark: None,
        }
    }
}

/// Declared column type plus its intrinsic length, when the backend has one.
#[derive(Debug, Clone)]
pub struct ColumnType {
    pub kind: FieldType,
    pub length: Option<usize>,
}

impl ColumnType {
    pub fn new(kind: FieldType) -> Self {
        Self { kind, length: None }
    }

    pub fn with_length(kind: FieldType, length: usize) -> Self {
        Self {
            kind,
            length: Some(length),
        }
    }
}

/// One introspected schema column.
#[derive(Debug, Clone)]
pub struct Column {
    pub key: String,
    pub nullable: Option<bool>,
    pub default: Option<ColumnDefault>,
    pub type_: Option<ColumnType>,
    /// Named construct the column delegates to when it has no type of its
    /// own, e.g. a foreign relationship.
    pub target: Option<String>,
    pub info: ColumnInfo,
}

impl Column {
    pub fn new(key: impl Into<String>, info: ColumnInfo) -> Self {
        Self {
            key: key.into(),
            nullable: None,
            default: None,
            type_: None,
            target: None,
            info,
        }
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = Some(nullable);
        self
    }

    pub fn default(mut self, default: ColumnDefault) -> Self {
        self.default = Some(default);
        self
    }

    pub fn typed(mut self, type_: ColumnType) -> Self {
        self.type_ = Some(type_);
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }
}

/// Schema introspection contract: yields the columns eligible for
/// documentation, with relationships and read-only fields already excluded.
pub trait Schema {
    fn documentable_columns(&self) -> Vec<Column>;
}

/// Resolve the display type of a column.
///
/// Priority: an `unreadable` annotation forces `str`; then the declared
/// type; then the name of the column's target. A column matching none of
/// these cannot be documented and fails loudly.
pub fn resolve_type(column: &Column) -> Result<FieldType, SchemaError> {
    if column.info.unreadable {
        return Ok(FieldType::Str);
    }
    if let Some(type_) = &column.type_ {
        return Ok(type_.kind.clone());
    }
    if let Some(target) = &column.target {
        return Ok(FieldType::Named(target.clone()));
    }
    Err(SchemaError::UnresolvableType(column.key.clone()))
}
