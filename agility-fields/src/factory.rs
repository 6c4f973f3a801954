//! Builds concrete fields from validated input.
//!
//! Input is expected to have passed schema validation already; the factory
//! only dispatches on the `type` tag and forwards attributes. Companion
//! attributes are wired together or not at all: the dropdown
//! text/value/display-column settings apply only as a trio, and grid
//! sub-settings only when a sort field was given.

use serde_json::Value;

use crate::error::Result;
use crate::field::{
    BaseAttributes, BooleanAttributes, DateAttributes, DecimalAttributes, DropdownAttributes,
    DropdownChoice, Field, FieldKind, IntegerAttributes, TextAttributes,
};
use crate::linked_content::{GridSort, LinkedContent};
use crate::schema::{ContentFieldInput, FieldInput, TextFieldInput};

fn text_attributes(input: TextFieldInput) -> TextAttributes {
    TextAttributes {
        base: BaseAttributes {
            required: input.required,
            unique: input.unique,
            ..Default::default()
        },
        default_value: input.default_value,
        length: input.length,
        copy_across_all_languages: None,
    }
}

fn linked_content(input: ContentFieldInput) -> LinkedContent {
    let mut linked = LinkedContent::Generic {
        base: BaseAttributes {
            required: input.required,
            ..Default::default()
        },
        content_model: input.content_definition.into(),
        content_view: input.content_view,
        render_as: input.render_as,
        dropdown_text_field: None,
        dropdown_value_field: None,
        display_column: None,
        sort: None,
        sort_direction: None,
        sort_id_field_name: None,
        default_columns: None,
    };

    if let (Some(text_field), Some(value_field), Some(display_column)) = (
        input.linked_content_dropdown_text_field,
        input.linked_content_dropdown_value_field,
        input.display_column_attribute_name,
    ) {
        if let LinkedContent::Generic {
            dropdown_text_field,
            dropdown_value_field,
            display_column: column,
            ..
        } = &mut linked
        {
            *dropdown_text_field = Some(text_field);
            *dropdown_value_field = Some(value_field);
            *column = Some(display_column);
        }
    }

    if let Some(sort) = input.sort {
        let grid_sort = GridSort {
            field: sort,
            direction: input.sort_direction.unwrap_or_default(),
            id_field_name: input.sort_id_field_name,
        };
        linked = linked.with_sorting(grid_sort);
        if let Some(columns) = input.default_columns {
            linked = linked.with_default_columns(columns);
        }
    }

    linked
}

/// Construct the concrete field a validated input describes.
pub fn field_from_input(input: FieldInput) -> Field {
    match input {
        FieldInput::Text(input) => Field {
            name: input.name.clone(),
            label: input.label.clone(),
            description: input.description.clone(),
            kind: FieldKind::Text(text_attributes(input)),
        },
        FieldInput::LongText(input) => Field {
            name: input.name.clone(),
            label: input.label.clone(),
            description: input.description.clone(),
            kind: FieldKind::LongText(text_attributes(input)),
        },
        FieldInput::Html(input) => Field {
            name: input.name.clone(),
            label: input.label.clone(),
            description: input.description.clone(),
            kind: FieldKind::Html(text_attributes(input)),
        },
        FieldInput::Integer(input) => Field {
            name: input.name,
            label: input.label,
            description: input.description,
            kind: FieldKind::Integer(IntegerAttributes {
                base: BaseAttributes {
                    required: input.required,
                    unique: input.unique,
                    ..Default::default()
                },
                default_value: input.default_value,
            }),
        },
        FieldInput::Decimal(input) => Field {
            name: input.name,
            label: input.label,
            description: input.description,
            kind: FieldKind::Decimal(DecimalAttributes {
                base: BaseAttributes {
                    required: input.required,
                    unique: input.unique,
                    ..Default::default()
                },
                default_value: input.default_value,
            }),
        },
        FieldInput::Boolean(input) => Field {
            name: input.name,
            label: input.label,
            description: input.description,
            kind: FieldKind::Boolean(BooleanAttributes {
                base: BaseAttributes {
                    required: input.required,
                    ..Default::default()
                },
                default_value: input.default_value,
            }),
        },
        FieldInput::Date(input) => Field {
            name: input.name,
            label: input.label,
            description: input.description,
            kind: FieldKind::Date(DateAttributes {
                base: BaseAttributes {
                    required: input.required,
                    ..Default::default()
                },
                show_time: input.show_time,
            }),
        },
        FieldInput::DropdownList(input) => Field {
            name: input.name,
            label: input.label,
            description: input.description,
            kind: FieldKind::DropdownList(DropdownAttributes {
                text: TextAttributes {
                    base: BaseAttributes {
                        required: input.required,
                        ..Default::default()
                    },
                    default_value: input.default_value,
                    length: None,
                    copy_across_all_languages: None,
                },
                choices: input
                    .choices
                    .into_iter()
                    .map(|choice| DropdownChoice::new(choice.label, choice.value))
                    .collect(),
            }),
        },
        FieldInput::FileAttachment(input) => Field {
            name: input.name,
            label: input.label,
            description: input.description,
            kind: FieldKind::FileAttachment(BaseAttributes {
                required: input.required,
                ..Default::default()
            }),
        },
        FieldInput::ImageAttachment(input) => Field {
            name: input.name,
            label: input.label,
            description: input.description,
            kind: FieldKind::ImageAttachment(BaseAttributes {
                required: input.required,
                ..Default::default()
            }),
        },
        FieldInput::Link(input) => Field {
            name: input.name,
            label: input.label,
            description: input.description,
            kind: FieldKind::Link(BaseAttributes {
                required: input.required,
                ..Default::default()
            }),
        },
        FieldInput::Content(input) => Field {
            name: input.name.clone(),
            label: input.label.clone(),
            description: input.description.clone(),
            kind: FieldKind::Content(linked_content(input)),
        },
    }
}

/// Construct a field straight from raw JSON. A `type` tag outside the
/// known union fails with [`crate::FieldError::UnrecognizedKind`] naming
/// the tag.
pub fn field_from_value(value: &Value) -> Result<Field> {
    Ok(field_from_input(FieldInput::from_value(value)?))
}
