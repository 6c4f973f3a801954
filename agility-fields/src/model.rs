//! Content model assembly: validated input in, settings-bearing payload out.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::factory::field_from_input;
use crate::field::Field;
use crate::schema::ModelInput;
use crate::settings::SettingsMap;

/// Sentinel id for a model that has not been persisted yet.
pub const NEW_MODEL_ID: i64 = -1;

/// What a model definition describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum DefinitionType {
    /// A content list definition.
    #[default]
    Content,
    /// A component (page module) definition.
    Component,
}

impl DefinitionType {
    pub fn id(self) -> i64 {
        match self {
            DefinitionType::Content => 1,
            DefinitionType::Component => 2,
        }
    }
}

impl From<DefinitionType> for i64 {
    fn from(definition_type: DefinitionType) -> Self {
        definition_type.id()
    }
}

impl TryFrom<i64> for DefinitionType {
    type Error = String;

    fn try_from(id: i64) -> std::result::Result<Self, Self::Error> {
        match id {
            1 => Ok(DefinitionType::Content),
            2 => Ok(DefinitionType::Component),
            other => Err(format!("unknown content definition type id: {other}")),
        }
    }
}

/// A validated content model: identity plus an ordered field list.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// [`NEW_MODEL_ID`] for a new model, the server-assigned id otherwise.
    pub id: i64,
    pub display_name: String,
    pub reference_name: String,
    pub description: Option<String>,
    /// Field order defines the persisted item order, 1-based.
    pub fields: Vec<Field>,
    pub definition_type: DefinitionType,
}

impl Model {
    /// Build a model from an already-parsed and validated input.
    pub fn from_input(input: ModelInput) -> Self {
        Self {
            id: input.id,
            display_name: input.display_name,
            reference_name: input.reference_name,
            description: input.description,
            fields: input.fields.into_iter().map(field_from_input).collect(),
            definition_type: DefinitionType::Content,
        }
    }

    /// Mark this model as a component definition.
    pub fn with_definition_type(mut self, definition_type: DefinitionType) -> Self {
        self.definition_type = definition_type;
        self
    }

    /// The wire payload the save-model operation posts.
    pub fn to_payload(&self) -> ModelPayload {
        ModelPayload {
            id: self.id,
            display_name: self.display_name.clone(),
            reference_name: self.reference_name.clone(),
            description: self.description.clone(),
            fields: fields_to_payload(&self.fields),
            content_definition_type_id: self.definition_type.id(),
        }
    }
}

/// Validate raw model input and build the typed model, surfacing every
/// violated constraint with its field path.
pub fn validate_and_build_model(value: &Value) -> Result<Model> {
    let input = ModelInput::from_value(value)?;
    input.validate()?;
    Ok(Model::from_input(input))
}

/// One settings-bearing field record in the save-model payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelFieldPayload {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub settings: SettingsMap,
    /// 1-based position within the model's field list.
    pub item_order: u32,
}

/// The save-model wire shape. The API returns the same shape with a
/// server-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelPayload {
    pub id: i64,
    pub display_name: String,
    pub reference_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<ModelFieldPayload>,
    #[serde(rename = "contentDefinitionTypeID")]
    pub content_definition_type_id: i64,
}

/// Convert fields to settings-bearing records with 1-based item order.
pub fn fields_to_payload(fields: &[Field]) -> Vec<ModelFieldPayload> {
    fields
        .iter()
        .enumerate()
        .map(|(index, field)| ModelFieldPayload {
            name: field.name.clone(),
            label: field.label.clone(),
            type_: field.kind.name().to_string(),
            description: field.description.clone(),
            settings: field.settings(),
            item_order: index as u32 + 1,
        })
        .collect()
}
