//! List containers, filtered and converted to the domain shape.

use agility_containers::{containers_to_domain, filter_listable, Container};
use tracing::debug;

use crate::client::ManagementApi;
use crate::error::Result;

/// Fetch the container listing: system lists, component-backed containers
/// and anything neither shared nor a dynamic page list are dropped before
/// conversion.
pub async fn get_containers(
    api: &dyn ManagementApi,
    instance_guid: &str,
) -> Result<Vec<Container>> {
    let records = api.get_container_list(instance_guid).await?;
    let total = records.len();
    let listable = filter_listable(records);
    debug!(total, kept = listable.len(), "filtered container listing");
    Ok(containers_to_domain(&listable)?)
}
