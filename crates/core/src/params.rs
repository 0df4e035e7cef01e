use std::hash::{Hash, Hasher};

use serde_json::Value;

use crate::schema::{resolve_type, Column, ColumnDefault, FieldType, SchemaError};

/// One documented form parameter.
///
/// Identity is the wire name alone: a later merge pass fills unset type,
/// optionality and default without ever touching caller-provided values.
#[derive(Debug, Clone)]
pub struct FormParameter {
    pub name: String,
    /// Example value shown in the docs and sent on the wire.
    pub value: Option<Value>,
    pub type_: Option<FieldType>,
    pub optional: Option<bool>,
    pub default: Option<ColumnDefault>,
}

impl FormParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            type_: None,
            optional: None,
            default: None,
        }
    }

    /// A file-upload parameter; `path` is the file to send.
    pub fn file(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(name)
            .with_type(FieldType::File)
            .with_value(Value::String(path.into()))
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_type(mut self, type_: FieldType) -> Self {
        self.type_ = Some(type_);
        self
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = Some(optional);
        self
    }

    pub fn with_default(mut self, default: ColumnDefault) -> Self {
        self.default = Some(default);
        self
    }

    /// Display name of the parameter type, empty while still unknown.
    pub fn type_name(&self) -> &str {
        self.type_.as_ref().map(FieldType::name).unwrap_or("")
    }

    /// Example cell text: file uploads show the basename, booleans render
    /// lowercase, strings render unquoted.
    pub fn example(&self) -> String {
        match (&self.type_, &self.value) {
            (_, None) => String::new(),
            (Some(FieldType::File), Some(Value::String(path))) => path
                .rsplit('/')
                .next()
                .map(str::to_string)
                .unwrap_or_default(),
            (_, Some(Value::String(text))) => text.clone(),
            (_, Some(value)) => value.to_string(),
        }
    }

    /// Raw value for dispatch; unlike [`FormParameter::example`], file paths
    /// are kept whole.
    pub fn wire_value(&self) -> String {
        match &self.value {
            None => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(value) => value.to_string(),
        }
    }
}

impl PartialEq for FormParameter {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for FormParameter {}

impl Hash for FormParameter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// Merge schema-derived metadata into the caller's parameter list.
///
/// Every column is represented exactly once afterwards: existing parameters
/// get their default refreshed and their type/optionality backfilled when
/// unset; missing ones are synthesized and appended in column order after
/// the caller-supplied parameters.
pub fn merge_schema_params(
    params: &mut Vec<FormParameter>,
    columns: &[Column],
) -> Result<(), SchemaError> {
    for column in columns {
        let type_ = if column.info.attachment {
            FieldType::Attachment
        } else {
            resolve_type(column)?
        };

        if let Some(param) = params.iter_mut().find(|p| p.name == column.info.json) {
            param.default = column.default.clone();
            if param.type_.is_none() {
                param.type_ = Some(type_);
            }
            if param.optional.is_none() {
                param.optional = column.nullable;
            }
        } else {
            params.push(FormParameter {
                name: column.info.json.clone(),
                value: None,
                type_: Some(type_),
                optional: column.nullable,
                default: column.default.clone(),
            });
        }
    }
    Ok(())
}
