//! Validation schemas for raw field and model input.
//!
//! One input shape per field kind, discriminated by the literal `type` tag.
//! Parsing is structural (serde); `validate` walks the parsed input and
//! collects every violated constraint with its path, so a caller sees all
//! problems in one pass.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::KNOWN_FIELD_KINDS;
use crate::error::{FieldError, Issue, Result, ValidationError};
use crate::linked_content::{RenderAs, SortDirection};

/// Text-backed field input (Text, LongText, Html).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFieldInput {
    pub name: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
}

/// Integer field input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegerFieldInput {
    pub name: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<i64>,
}

/// Decimal field input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecimalFieldInput {
    pub name: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<f64>,
}

/// Boolean field input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BooleanFieldInput {
    pub name: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<bool>,
}

/// Date field input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateFieldInput {
    pub name: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_time: Option<bool>,
}

/// One dropdown option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownChoiceInput {
    pub label: String,
    pub value: String,
}

/// Dropdown list field input. At least one choice is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropdownListFieldInput {
    pub name: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    pub choices: Vec<DropdownChoiceInput>,
}

/// Input for kinds with no attributes beyond the base shape
/// (FileAttachment, ImageAttachment, Link).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentFieldInput {
    pub name: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

/// Linked content field input (the generic `Content` wire shape).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentFieldInput {
    pub name: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    pub content_definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_view: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render_as: Option<RenderAs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_content_dropdown_text_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_content_dropdown_value_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_column_attribute_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<SortDirection>,
    #[serde(default, rename = "sortIDFieldName", skip_serializing_if = "Option::is_none")]
    pub sort_id_field_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_columns: Option<String>,
}

/// The discriminated union over all twelve field kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FieldInput {
    Text(TextFieldInput),
    LongText(TextFieldInput),
    Html(TextFieldInput),
    Integer(IntegerFieldInput),
    Decimal(DecimalFieldInput),
    Boolean(BooleanFieldInput),
    Date(DateFieldInput),
    DropdownList(DropdownListFieldInput),
    FileAttachment(AttachmentFieldInput),
    ImageAttachment(AttachmentFieldInput),
    Link(AttachmentFieldInput),
    Content(ContentFieldInput),
}

fn join_path(prefix: &str, key: &str) -> String {
    match (prefix.is_empty(), key.is_empty()) {
        (true, _) => key.to_string(),
        (_, true) => prefix.to_string(),
        _ => format!("{prefix}.{key}"),
    }
}

fn check_min_chars(issues: &mut Vec<Issue>, path: String, value: &str, min: usize) {
    if value.chars().count() < min {
        issues.push(Issue::new(
            path,
            format!("must contain at least {min} character(s)"),
        ));
    }
}

impl FieldInput {
    /// Parse a raw JSON value. A `type` tag outside the known union is an
    /// [`FieldError::UnrecognizedKind`]; anything else malformed is a
    /// validation error.
    pub fn from_value(value: &Value) -> Result<Self> {
        let kind = match value.get("type").and_then(Value::as_str) {
            Some(kind) => kind,
            None => {
                return Err(ValidationError::single(
                    "type",
                    "missing or non-string field kind tag",
                )
                .into())
            }
        };
        if !KNOWN_FIELD_KINDS.contains(&kind) {
            return Err(FieldError::UnrecognizedKind {
                kind: kind.to_string(),
            });
        }
        serde_json::from_value(value.clone())
            .map_err(|err| ValidationError::single("", err.to_string()).into())
    }

    /// The literal `type` tag of this input.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldInput::Text(_) => "Text",
            FieldInput::LongText(_) => "LongText",
            FieldInput::Html(_) => "Html",
            FieldInput::Integer(_) => "Integer",
            FieldInput::Decimal(_) => "Decimal",
            FieldInput::Boolean(_) => "Boolean",
            FieldInput::Date(_) => "Date",
            FieldInput::DropdownList(_) => "DropdownList",
            FieldInput::FileAttachment(_) => "FileAttachment",
            FieldInput::ImageAttachment(_) => "ImageAttachment",
            FieldInput::Link(_) => "Link",
            FieldInput::Content(_) => "Content",
        }
    }

    fn identity(&self) -> (&str, &str) {
        match self {
            FieldInput::Text(input) | FieldInput::LongText(input) | FieldInput::Html(input) => {
                (&input.name, &input.label)
            }
            FieldInput::Integer(input) => (&input.name, &input.label),
            FieldInput::Decimal(input) => (&input.name, &input.label),
            FieldInput::Boolean(input) => (&input.name, &input.label),
            FieldInput::Date(input) => (&input.name, &input.label),
            FieldInput::DropdownList(input) => (&input.name, &input.label),
            FieldInput::FileAttachment(input)
            | FieldInput::ImageAttachment(input)
            | FieldInput::Link(input) => (&input.name, &input.label),
            FieldInput::Content(input) => (&input.name, &input.label),
        }
    }

    /// Collect every violated constraint, locating each by `prefix`.
    pub fn collect_issues(&self, prefix: &str, issues: &mut Vec<Issue>) {
        let (name, label) = self.identity();
        check_min_chars(issues, join_path(prefix, "name"), name, 2);
        check_min_chars(issues, join_path(prefix, "label"), label, 2);

        match self {
            FieldInput::Text(input) | FieldInput::LongText(input) | FieldInput::Html(input) => {
                if input.length == Some(0) {
                    issues.push(Issue::new(
                        join_path(prefix, "length"),
                        "must be greater than 0",
                    ));
                }
            }
            FieldInput::DropdownList(input) => {
                if input.choices.is_empty() {
                    issues.push(Issue::new(
                        join_path(prefix, "choices"),
                        "array must contain at least 1 element",
                    ));
                }
            }
            FieldInput::Content(input) => {
                check_min_chars(
                    issues,
                    join_path(prefix, "contentDefinition"),
                    &input.content_definition,
                    1,
                );
            }
            _ => {}
        }
    }

    /// Validate a standalone field input.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        let mut issues = Vec::new();
        self.collect_issues("", &mut issues);
        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(issues))
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawModelInput {
    id: i64,
    display_name: String,
    reference_name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    fields: Vec<Value>,
}

/// Raw model input: identity plus an ordered field list (empty is legal).
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInput {
    /// `-1` means a new model; anything else is a server-assigned id.
    pub id: i64,
    pub display_name: String,
    pub reference_name: String,
    pub description: Option<String>,
    pub fields: Vec<FieldInput>,
}

impl ModelInput {
    /// Parse a raw JSON value into a model input. Unknown field kind tags
    /// and per-field parse failures are reported as validation issues at
    /// their `fields[i]` path.
    pub fn from_value(value: &Value) -> Result<Self> {
        let raw: RawModelInput = serde_json::from_value(value.clone())
            .map_err(|err| ValidationError::single("", err.to_string()))?;

        let mut issues = Vec::new();
        let mut fields = Vec::with_capacity(raw.fields.len());
        for (index, field_value) in raw.fields.iter().enumerate() {
            let prefix = format!("fields[{index}]");
            match FieldInput::from_value(field_value) {
                Ok(field) => fields.push(field),
                Err(FieldError::UnrecognizedKind { kind }) => issues.push(Issue::new(
                    join_path(&prefix, "type"),
                    format!("unrecognized field kind: {kind}"),
                )),
                Err(FieldError::Validation(err)) => issues.extend(
                    err.issues
                        .into_iter()
                        .map(|issue| Issue::new(join_path(&prefix, &issue.path), issue.message)),
                ),
            }
        }
        if !issues.is_empty() {
            return Err(ValidationError::new(issues).into());
        }

        Ok(Self {
            id: raw.id,
            display_name: raw.display_name,
            reference_name: raw.reference_name,
            description: raw.description,
            fields,
        })
    }

    /// Validate identity constraints and every field in place.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        let mut issues = Vec::new();
        check_min_chars(&mut issues, "displayName".to_string(), &self.display_name, 2);
        check_min_chars(
            &mut issues,
            "referenceName".to_string(),
            &self.reference_name,
            2,
        );
        for (index, field) in self.fields.iter().enumerate() {
            field.collect_issues(&format!("fields[{index}]"), &mut issues);
        }
        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(issues))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_input_parses_from_tagged_json() {
        let input = FieldInput::from_value(&json!({
            "type": "Text",
            "name": "title",
            "label": "Title",
            "required": true,
            "length": 200
        }))
        .unwrap();
        match &input {
            FieldInput::Text(text) => {
                assert_eq!(text.name, "title");
                assert_eq!(text.length, Some(200));
            }
            other => panic!("expected Text input, got {other:?}"),
        }
        assert!(input.validate().is_ok());
    }

    #[test]
    fn unknown_tag_is_unrecognized_kind() {
        let err = FieldInput::from_value(&json!({
            "type": "Bogus",
            "name": "x1",
            "label": "X1"
        }))
        .unwrap_err();
        match err {
            FieldError::UnrecognizedKind { kind } => assert_eq!(kind, "Bogus"),
            other => panic!("expected UnrecognizedKind, got {other:?}"),
        }
    }

    #[test]
    fn missing_tag_is_a_validation_error() {
        let err = FieldInput::from_value(&json!({
            "name": "x1",
            "label": "X1"
        }))
        .unwrap_err();
        match err {
            FieldError::Validation(err) => assert_eq!(err.issues[0].path, "type"),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn short_name_and_label_both_reported() {
        let input = FieldInput::from_value(&json!({
            "type": "Text",
            "name": "a",
            "label": "b"
        }))
        .unwrap();
        let err = input.validate().unwrap_err();
        let paths: Vec<&str> = err.issues.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, vec!["name", "label"]);
    }

    #[test]
    fn zero_length_rejected() {
        let input = FieldInput::from_value(&json!({
            "type": "LongText",
            "name": "body",
            "label": "Body",
            "length": 0
        }))
        .unwrap();
        let err = input.validate().unwrap_err();
        assert_eq!(err.issues[0].path, "length");
    }

    #[test]
    fn empty_choices_rejected_with_element_count_message() {
        let input = FieldInput::from_value(&json!({
            "type": "DropdownList",
            "name": "status",
            "label": "Status",
            "choices": []
        }))
        .unwrap();
        let err = input.validate().unwrap_err();
        assert_eq!(err.issues[0].path, "choices");
        assert_eq!(err.issues[0].message, "array must contain at least 1 element");
    }

    #[test]
    fn empty_content_definition_rejected() {
        let input = FieldInput::from_value(&json!({
            "type": "Content",
            "name": "related",
            "label": "Related",
            "contentDefinition": ""
        }))
        .unwrap();
        let err = input.validate().unwrap_err();
        assert_eq!(err.issues[0].path, "contentDefinition");
    }

    #[test]
    fn invalid_render_mode_fails_at_parse() {
        let err = FieldInput::from_value(&json!({
            "type": "Content",
            "name": "related",
            "label": "Related",
            "contentDefinition": "posts",
            "renderAs": "carousel"
        }))
        .unwrap_err();
        assert!(matches!(err, FieldError::Validation(_)));
    }

    #[test]
    fn sort_id_field_name_uses_upper_case_id_key() {
        let input = FieldInput::from_value(&json!({
            "type": "Content",
            "name": "items",
            "label": "Items",
            "contentDefinition": "childitem",
            "sort": "ItemOrder",
            "sortIDFieldName": "contentID"
        }))
        .unwrap();
        match input {
            FieldInput::Content(content) => {
                assert_eq!(content.sort_id_field_name.as_deref(), Some("contentID"));
            }
            other => panic!("expected Content input, got {other:?}"),
        }
    }

    #[test]
    fn model_with_empty_field_list_is_legal() {
        let model = ModelInput::from_value(&json!({
            "id": -1,
            "displayName": "Blog Post",
            "referenceName": "blogpost",
            "fields": []
        }))
        .unwrap();
        assert!(model.validate().is_ok());
        assert!(model.fields.is_empty());
    }

    #[test]
    fn model_reports_field_issues_with_indexed_paths() {
        let model = ModelInput::from_value(&json!({
            "id": -1,
            "displayName": "Blog Post",
            "referenceName": "blogpost",
            "fields": [
                { "type": "Text", "name": "title", "label": "Title" },
                { "type": "DropdownList", "name": "status", "label": "Status", "choices": [] }
            ]
        }))
        .unwrap();
        let err = model.validate().unwrap_err();
        assert_eq!(err.issues.len(), 1);
        assert_eq!(err.issues[0].path, "fields[1].choices");
    }

    #[test]
    fn model_rejects_unknown_kind_during_parse() {
        let err = ModelInput::from_value(&json!({
            "id": -1,
            "displayName": "Blog Post",
            "referenceName": "blogpost",
            "fields": [
                { "type": "Bogus", "name": "x1", "label": "X1" }
            ]
        }))
        .unwrap_err();
        match err {
            FieldError::Validation(err) => {
                assert_eq!(err.issues[0].path, "fields[0].type");
                assert!(err.issues[0].message.contains("Bogus"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn model_identity_constraints_checked() {
        let model = ModelInput::from_value(&json!({
            "id": 12,
            "displayName": "B",
            "referenceName": "b",
            "fields": []
        }))
        .unwrap();
        let err = model.validate().unwrap_err();
        let paths: Vec<&str> = err.issues.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, vec!["displayName", "referenceName"]);
    }

    #[test]
    fn field_input_serializes_with_type_tag() {
        let input = FieldInput::Boolean(BooleanFieldInput {
            name: "featured".into(),
            label: "Featured".into(),
            description: None,
            required: None,
            default_value: Some(true),
        });
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["type"], "Boolean");
        assert_eq!(value["defaultValue"], true);
    }
}
