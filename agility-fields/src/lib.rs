//! Field taxonomy and settings codec for Agility content models
//!
//! `agility-fields` is a pure, schema-only crate: it validates raw field
//! and model descriptions, builds typed field objects, and serializes them
//! into the flat string-keyed settings representation the management API
//! stores. It performs no I/O and holds no state, so it is safe to call
//! from any number of concurrent request handlers.
//!
//! # Architecture
//!
//! - **Taxonomy**: [`Field`] + [`FieldKind`], a closed sum over the twelve
//!   field kinds; relation fields live in [`LinkedContent`]
//! - **Codec**: [`Field::settings`] — the single exhaustive dispatch
//!   producing a [`SettingsMap`] (string keys, string values, stable order)
//! - **Schemas**: [`FieldInput`]/[`ModelInput`] — structural parsing plus a
//!   path-collecting validation pass
//! - **Factory**: [`field_from_input`]/[`field_from_value`] — tag dispatch
//!   from validated input to concrete fields

pub mod constants;
pub mod error;
pub mod factory;
pub mod field;
pub mod linked_content;
pub mod model;
pub mod schema;
pub mod settings;

pub use constants::{DEFAULT_SORT_FIELD, KNOWN_FIELD_KINDS, NESTED_CONTENT_VIEW};
pub use error::{FieldError, Issue, Result, ValidationError};
pub use factory::{field_from_input, field_from_value};
pub use field::{
    BaseAttributes, BooleanAttributes, DateAttributes, DecimalAttributes, DropdownAttributes,
    DropdownChoice, Field, FieldKind, IntegerAttributes, TextAttributes,
};
pub use linked_content::{GridSort, LinkedContent, ModelRef, RenderAs, SortDirection};
pub use model::{
    fields_to_payload, validate_and_build_model, DefinitionType, Model, ModelFieldPayload,
    ModelPayload, NEW_MODEL_ID,
};
pub use schema::{
    AttachmentFieldInput, BooleanFieldInput, ContentFieldInput, DateFieldInput, DecimalFieldInput,
    DropdownChoiceInput, DropdownListFieldInput, FieldInput, IntegerFieldInput, ModelInput,
    TextFieldInput,
};
pub use settings::SettingsMap;
