//! Save a content model or component from raw input.

use agility_fields::{validate_and_build_model, DefinitionType, ModelPayload};
use serde_json::Value;
use tracing::info;

use crate::client::ManagementApi;
use crate::error::Result;

async fn save_with_type(
    api: &dyn ManagementApi,
    instance_guid: &str,
    input: &Value,
    definition_type: DefinitionType,
) -> Result<ModelPayload> {
    let model = validate_and_build_model(input)?.with_definition_type(definition_type);
    let payload = model.to_payload();
    info!(
        reference_name = %payload.reference_name,
        fields = payload.fields.len(),
        "saving model definition"
    );
    api.save_model(instance_guid, &payload).await
}

/// Validate raw model input, build the settings payload and persist it as
/// a content model. Returns the stored model with its server-assigned id.
pub async fn save_model(
    api: &dyn ManagementApi,
    instance_guid: &str,
    input: &Value,
) -> Result<ModelPayload> {
    save_with_type(api, instance_guid, input, DefinitionType::Content).await
}

/// Same as [`save_model`] but persists a component definition.
pub async fn save_component(
    api: &dyn ManagementApi,
    instance_guid: &str,
    input: &Value,
) -> Result<ModelPayload> {
    save_with_type(api, instance_guid, input, DefinitionType::Component).await
}
