//! Persist a domain container.

use agility_containers::{to_domain, to_native, Container};
use tracing::info;

use crate::client::ManagementApi;
use crate::error::Result;

/// Convert a validated domain container to the native shape, persist it
/// and hand back the stored container, converted again.
pub async fn save_container(
    api: &dyn ManagementApi,
    instance_guid: &str,
    container: &Container,
) -> Result<Container> {
    container.validate()?;
    let record = to_native(container);
    info!(reference_name = ?container.reference_name, "saving container");
    let saved = api.save_container(instance_guid, &record).await?;
    Ok(to_domain(&saved)?)
}
