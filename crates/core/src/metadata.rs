use serde::{Serialize, Serializer};

use crate::schema::{resolve_type, Column, ColumnDefault, FieldType, SchemaError};

/// One documentable aspect of a schema column.
///
/// Serializes to the payload returned by metadata endpoints, with camelCase
/// length keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescriptor {
    #[serde(rename = "name")]
    pub json_name: String,
    pub key: String,
    #[serde(rename = "type_")]
    pub type_: FieldType,
    #[serde(serialize_with = "serialize_default")]
    pub default: Option<ColumnDefault>,
    pub optional: Option<bool>,
    pub pattern: Option<String>,
    #[serde(rename = "maxLength")]
    pub max_length: Option<usize>,
    #[serde(rename = "minLength")]
    pub min_length: Option<usize>,
    pub message: String,
    pub watermark: Option<String>,
}

fn serialize_default<S: Serializer>(
    default: &Option<ColumnDefault>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match default {
        None => serializer.serialize_str(""),
        Some(ColumnDefault::Literal(value)) => value.serialize(serializer),
        Some(ColumnDefault::Computed) => serializer.serialize_str("function(...)"),
    }
}

/// Leading-underscore internal keys are published without the underscore.
fn strip_key(key: &str) -> String {
    key.strip_prefix('_').unwrap_or(key).to_string()
}

impl FieldDescriptor {
    /// Extract the field descriptors of one schema column.
    ///
    /// Normally one descriptor; attachment columns expand to two, because an
    /// uploaded attachment is represented on the wire by a URL plus a
    /// thumbnail map, never by the raw field.
    pub fn from_column(column: &Column) -> Result<Vec<FieldDescriptor>, SchemaError> {
        let json_name = &column.info.json;

        if column.info.attachment {
            let message = column
                .info
                .message
                .clone()
                .unwrap_or_else(|| "Invalid File".to_string());

            return Ok(vec![
                FieldDescriptor {
                    json_name: format!("{json_name}Url"),
                    key: strip_key(&format!("{}_url", column.key)),
                    type_: FieldType::Url,
                    default: None,
                    optional: None,
                    pattern: None,
                    max_length: None,
                    min_length: None,
                    message: message.clone(),
                    watermark: None,
                },
                FieldDescriptor {
                    json_name: format!("{json_name}Thumbnails"),
                    key: strip_key(&format!("{}_thumbnails", column.key)),
                    type_: FieldType::Dict,
                    default: None,
                    optional: None,
                    pattern: None,
                    max_length: None,
                    min_length: None,
                    message,
                    watermark: None,
                },
            ]);
        }

        let type_ = resolve_type(column)?;

        Ok(vec![FieldDescriptor {
            json_name: json_name.clone(),
            key: strip_key(&column.key),
            type_,
            default: column.default.clone(),
            optional: column.nullable,
            pattern: column.info.pattern.clone(),
            max_length: column
                .info
                .max_length
                .or_else(|| column.type_.as_ref().and_then(|t| t.length)),
            min_length: column.info.min_length,
            message: column
                .info
                .message
                .clone()
                .unwrap_or_else(|| "Invalid Value".to_string()),
            watermark: column.info.watermark.clone(),
        }])
    }

    /// JSON payload of this field, as served by metadata endpoints.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ColumnInfo, ColumnType};
    use serde_json::json;

    #[test]
    fn test_attachment_column_expands_to_url_and_thumbnails() {
        let mut info = ColumnInfo::new("photo");
        info.attachment = true;
        let column = Column::new("_photo", info);

        let fields = FieldDescriptor::from_column(&column).unwrap();
        assert_eq!(fields.len(), 2);

        assert_eq!(fields[0].json_name, "photoUrl");
        assert_eq!(fields[0].key, "photo_url");
        assert_eq!(fields[0].type_, FieldType::Url);
        assert_eq!(fields[0].message, "Invalid File");

        assert_eq!(fields[1].json_name, "photoThumbnails");
        assert_eq!(fields[1].key, "photo_thumbnails");
        assert_eq!(fields[1].type_, FieldType::Dict);
        assert_eq!(fields[1].message, "Invalid File");
    }

    #[test]
    fn test_attachment_column_carries_custom_message() {
        let mut info = ColumnInfo::new("photo");
        info.attachment = true;
        info.message = Some("Picture is required".to_string());
        let column = Column::new("photo", info);

        let fields = FieldDescriptor::from_column(&column).unwrap();
        assert_eq!(fields[0].message, "Picture is required");
        assert_eq!(fields[1].message, "Picture is required");
    }

    #[test]
    fn test_plain_column_resolves_default_and_optionality() {
        let column = Column::new("title", ColumnInfo::new("title"))
            .typed(ColumnType::new(FieldType::Str))
            .nullable(true)
            .default(ColumnDefault::Literal(json!("untitled")));

        let fields = FieldDescriptor::from_column(&column).unwrap();
        assert_eq!(fields.len(), 1);
        let field = &fields[0];
        assert_eq!(field.json_name, "title");
        assert_eq!(field.type_, FieldType::Str);
        assert_eq!(field.optional, Some(true));
        assert_eq!(field.default, Some(ColumnDefault::Literal(json!("untitled"))));
        assert_eq!(field.message, "Invalid Value");
    }

    #[test]
    fn test_computed_default_is_an_opaque_marker() {
        let column = Column::new("created_at", ColumnInfo::new("createdAt"))
            .typed(ColumnType::new(FieldType::DateTime))
            .default(ColumnDefault::Computed);

        let fields = FieldDescriptor::from_column(&column).unwrap();
        assert_eq!(fields[0].default, Some(ColumnDefault::Computed));
        assert_eq!(fields[0].to_json()["default"], json!("function(...)"));
    }

    #[test]
    fn test_leading_underscore_is_stripped_from_key() {
        let column =
            Column::new("_email", ColumnInfo::new("email")).typed(ColumnType::new(FieldType::Str));
        let fields = FieldDescriptor::from_column(&column).unwrap();
        assert_eq!(fields[0].key, "email");
    }

    #[test]
    fn test_unreadable_column_is_documented_as_str() {
        let mut info = ColumnInfo::new("password");
        info.unreadable = true;
        let column = Column::new("password", info).typed(ColumnType::new(FieldType::Dict));
        let fields = FieldDescriptor::from_column(&column).unwrap();
        assert_eq!(fields[0].type_, FieldType::Str);
    }

    #[test]
    fn test_target_name_used_when_column_has_no_type() {
        let column = Column::new("owner_id", ColumnInfo::new("ownerId")).target("member");
        let fields = FieldDescriptor::from_column(&column).unwrap();
        assert_eq!(fields[0].type_, FieldType::Named("member".to_string()));
    }

    #[test]
    fn test_unresolvable_type_is_fatal() {
        let column = Column::new("mystery", ColumnInfo::new("mystery"));
        assert_eq!(
            FieldDescriptor::from_column(&column),
            Err(SchemaError::UnresolvableType("mystery".to_string()))
        );
    }

    #[test]
    fn test_max_length_falls_back_to_type_length() {
        let column = Column::new("title", ColumnInfo::new("title"))
            .typed(ColumnType::with_length(FieldType::Str, 50));
        let fields = FieldDescriptor::from_column(&column).unwrap();
        assert_eq!(fields[0].max_length, Some(50));
    }

    #[test]
    fn test_explicit_max_length_overrides_type_length() {
        let mut info = ColumnInfo::new("title");
        info.max_length = Some(32);
        let column = Column::new("title", info).typed(ColumnType::with_length(FieldType::Str, 50));
        let fields = FieldDescriptor::from_column(&column).unwrap();
        assert_eq!(fields[0].max_length, Some(32));
    }

    #[test]
    fn test_to_json_uses_camel_case_length_keys() {
        let mut info = ColumnInfo::new("title");
        info.max_length = Some(32);
        info.min_length = Some(4);
        info.pattern = Some("^[a-z]+$".to_string());
        info.watermark = Some("Title".to_string());
        let column = Column::new("title", info).typed(ColumnType::new(FieldType::Str));

        let json = FieldDescriptor::from_column(&column).unwrap()[0].to_json();
        assert_eq!(json["name"], json!("title"));
        assert_eq!(json["type_"], json!("str"));
        assert_eq!(json["maxLength"], json!(32));
        assert_eq!(json["minLength"], json!(4));
        assert_eq!(json["pattern"], json!("^[a-z]+$"));
        assert_eq!(json["watermark"], json!("Title"));
        assert_eq!(json["default"], json!(""));
    }
}
