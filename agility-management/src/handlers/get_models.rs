//! List model and component definitions.

use agility_fields::ModelPayload;
use tracing::debug;

use crate::client::ManagementApi;
use crate::error::Result;

/// List the instance's content models, excluding built-in defaults and
/// page modules.
pub async fn get_models(
    api: &dyn ManagementApi,
    instance_guid: &str,
) -> Result<Vec<ModelPayload>> {
    let models = api.get_models(instance_guid, false, false).await?;
    debug!(count = models.len(), "fetched content models");
    Ok(models)
}

/// List the instance's component definitions, excluding built-in defaults.
pub async fn get_components(
    api: &dyn ManagementApi,
    instance_guid: &str,
) -> Result<Vec<ModelPayload>> {
    let components = api.get_components(instance_guid, false).await?;
    debug!(count = components.len(), "fetched components");
    Ok(components)
}
