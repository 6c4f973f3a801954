//! The field taxonomy: one typed description per content attribute.
//!
//! The source of truth for a field's configuration is the flat settings map
//! the management API stores (see [`crate::settings`]). Each kind knows
//! which keys it contributes; [`Field::settings`] is the single exhaustive
//! dispatch over the whole taxonomy.

use crate::linked_content::LinkedContent;
use crate::settings::{put_bool, put_str, SettingsMap};

/// Attributes shared by most non-relation field kinds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BaseAttributes {
    pub required: Option<bool>,
    pub unique: Option<bool>,
    pub hide_when_formula: Option<String>,
    pub regex_validation_pattern: Option<String>,
    pub regex_validation_message: Option<String>,
}

impl BaseAttributes {
    /// The settings every kind computes first. A key is present exactly
    /// when the attribute is set.
    pub(crate) fn base_settings(&self) -> SettingsMap {
        let mut settings = SettingsMap::new();
        put_bool(&mut settings, "Required", self.required);
        put_bool(&mut settings, "Unique", self.unique);
        put_str(
            &mut settings,
            "HideWhenFormula",
            self.hide_when_formula.as_deref(),
        );
        put_str(
            &mut settings,
            "RegexValidationPattern",
            self.regex_validation_pattern.as_deref(),
        );
        put_str(
            &mut settings,
            "RegexValidationMessage",
            self.regex_validation_message.as_deref(),
        );
        settings
    }
}

/// Attributes for text-backed kinds (Text, LongText, Html, DropdownList).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextAttributes {
    pub base: BaseAttributes,
    pub default_value: Option<String>,
    pub length: Option<u32>,
    pub copy_across_all_languages: Option<bool>,
}

impl TextAttributes {
    /// Base settings overlaid with the text-specific keys.
    pub(crate) fn text_settings(&self) -> SettingsMap {
        let mut settings = self.base.base_settings();
        if let Some(default_value) = &self.default_value {
            settings.insert("DefaultValue".to_string(), default_value.clone());
        }
        if let Some(length) = self.length {
            settings.insert("Length".to_string(), length.to_string());
        }
        put_bool(
            &mut settings,
            "CopyAcrossAllLanguages",
            self.copy_across_all_languages,
        );
        settings
    }
}

/// Attributes for the Integer kind.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IntegerAttributes {
    pub base: BaseAttributes,
    pub default_value: Option<i64>,
}

/// Attributes for the Decimal kind.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DecimalAttributes {
    pub base: BaseAttributes,
    pub default_value: Option<f64>,
}

/// Attributes for the Boolean kind.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BooleanAttributes {
    pub base: BaseAttributes,
    pub default_value: Option<bool>,
}

/// Attributes for the Date kind.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DateAttributes {
    pub base: BaseAttributes,
    pub show_time: Option<bool>,
}

/// One option in a dropdown list. Order is significant: it defines the
/// ordering presented in the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownChoice {
    pub label: String,
    pub value: String,
}

impl DropdownChoice {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Attributes for the DropdownList kind. Invariant: at least one choice —
/// enforced by the validation schema before a field is built.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DropdownAttributes {
    pub text: TextAttributes,
    pub choices: Vec<DropdownChoice>,
}

/// The kind of a field — determines which settings keys it emits.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text(TextAttributes),
    LongText(TextAttributes),
    Html(TextAttributes),
    Integer(IntegerAttributes),
    Decimal(DecimalAttributes),
    Boolean(BooleanAttributes),
    Date(DateAttributes),
    DropdownList(DropdownAttributes),
    FileAttachment(BaseAttributes),
    ImageAttachment(BaseAttributes),
    Link(BaseAttributes),
    Content(LinkedContent),
}

impl FieldKind {
    /// The wire tag for this kind. Relation variants all persist as
    /// `Content`; the render mode lives in the settings map.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Text(_) => "Text",
            FieldKind::LongText(_) => "LongText",
            FieldKind::Html(_) => "Html",
            FieldKind::Integer(_) => "Integer",
            FieldKind::Decimal(_) => "Decimal",
            FieldKind::Boolean(_) => "Boolean",
            FieldKind::Date(_) => "Date",
            FieldKind::DropdownList(_) => "DropdownList",
            FieldKind::FileAttachment(_) => "FileAttachment",
            FieldKind::ImageAttachment(_) => "ImageAttachment",
            FieldKind::Link(_) => "Link",
            FieldKind::Content(_) => "Content",
        }
    }
}

/// A typed description of one content attribute, convertible to the flat
/// settings map the management API consumes.
///
/// Construction assumes already-valid attributes: `name` and `label` length
/// constraints and the dropdown choice minimum are enforced by the
/// validation schemas before a `Field` exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub label: String,
    pub description: Option<String>,
    pub kind: FieldKind,
}

impl Field {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            description: None,
            kind,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Produce the settings map for this field. Every value is a string;
    /// absent attributes contribute no key.
    pub fn settings(&self) -> SettingsMap {
        match &self.kind {
            FieldKind::Text(attrs) | FieldKind::LongText(attrs) | FieldKind::Html(attrs) => {
                attrs.text_settings()
            }
            FieldKind::Integer(attrs) => {
                let mut settings = attrs.base.base_settings();
                if let Some(default_value) = attrs.default_value {
                    settings.insert("DefaultValue".to_string(), default_value.to_string());
                }
                settings
            }
            FieldKind::Decimal(attrs) => {
                let mut settings = attrs.base.base_settings();
                if let Some(default_value) = attrs.default_value {
                    settings.insert("DefaultValue".to_string(), default_value.to_string());
                }
                settings
            }
            FieldKind::Boolean(attrs) => {
                let mut settings = attrs.base.base_settings();
                put_bool(&mut settings, "DefaultValue", attrs.default_value);
                settings
            }
            FieldKind::Date(attrs) => {
                let mut settings = attrs.base.base_settings();
                put_bool(&mut settings, "ShowTime", attrs.show_time);
                settings
            }
            FieldKind::DropdownList(attrs) => {
                let mut settings = attrs.text.text_settings();
                let choices = attrs
                    .choices
                    .iter()
                    .map(|choice| format!("{}|{}", choice.label, choice.value))
                    .collect::<Vec<_>>()
                    .join("\n");
                settings.insert("Choices".to_string(), choices);
                settings
            }
            FieldKind::FileAttachment(base)
            | FieldKind::ImageAttachment(base)
            | FieldKind::Link(base) => base.base_settings(),
            FieldKind::Content(linked) => linked.settings(),
        }
    }
}
