//! The management API seam and its HTTP implementation.
//!
//! [`ManagementApi`] is the narrow interface the handler layer consumes;
//! [`HttpManagementApi`] backs it with reqwest. Calls are stateless and
//! carry bearer-token auth. Failures map to [`ManagementError`]: transport
//! problems pass through as `Http`, non-success statuses become `Api` with
//! the response body as the message. No retries happen here.

use std::time::Duration;

use agility_containers::ContainerRecord;
use agility_fields::ModelPayload;
use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::debug;

use crate::error::{ManagementError, Result};
use crate::options::ClientOptions;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Operations the management API exposes to this toolkit.
#[async_trait]
pub trait ManagementApi: Send + Sync {
    /// Persist a model. Returns the stored shape with a server-assigned id.
    async fn save_model(&self, instance_guid: &str, payload: &ModelPayload)
        -> Result<ModelPayload>;

    /// List content model definitions.
    async fn get_models(
        &self,
        instance_guid: &str,
        include_defaults: bool,
        include_modules: bool,
    ) -> Result<Vec<ModelPayload>>;

    /// List component (page module) definitions.
    async fn get_components(
        &self,
        instance_guid: &str,
        include_defaults: bool,
    ) -> Result<Vec<ModelPayload>>;

    /// Fetch the raw container listing, unfiltered.
    async fn get_container_list(&self, instance_guid: &str) -> Result<Vec<ContainerRecord>>;

    /// Persist a container in its native shape.
    async fn save_container(
        &self,
        instance_guid: &str,
        record: &ContainerRecord,
    ) -> Result<ContainerRecord>;
}

/// reqwest-backed [`ManagementApi`].
#[derive(Debug, Clone)]
pub struct HttpManagementApi {
    client: Client,
    options: ClientOptions,
}

impl HttpManagementApi {
    pub fn new(options: ClientOptions) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("agility-model-kit/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, options })
    }

    fn endpoint(&self, instance_guid: &str, path: &str) -> String {
        format!(
            "{}/api/v1/instance/{}/{}",
            self.options.base_url.trim_end_matches('/'),
            instance_guid,
            path
        )
    }

    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(ManagementError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ManagementApi for HttpManagementApi {
    async fn save_model(
        &self,
        instance_guid: &str,
        payload: &ModelPayload,
    ) -> Result<ModelPayload> {
        let url = self.endpoint(instance_guid, "model");
        debug!(%url, reference_name = %payload.reference_name, "saving model");
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.options.token)
            .json(payload)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn get_models(
        &self,
        instance_guid: &str,
        include_defaults: bool,
        include_modules: bool,
    ) -> Result<Vec<ModelPayload>> {
        let url = self.endpoint(instance_guid, &format!("model/list/{include_defaults}"));
        debug!(%url, "listing models");
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.options.token)
            .query(&[("includeModules", include_modules)])
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn get_components(
        &self,
        instance_guid: &str,
        include_defaults: bool,
    ) -> Result<Vec<ModelPayload>> {
        let url = self.endpoint(
            instance_guid,
            &format!("pagemodule/list/{include_defaults}"),
        );
        debug!(%url, "listing components");
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.options.token)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn get_container_list(&self, instance_guid: &str) -> Result<Vec<ContainerRecord>> {
        let url = self.endpoint(instance_guid, "container/list");
        debug!(%url, "listing containers");
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.options.token)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn save_container(
        &self,
        instance_guid: &str,
        record: &ContainerRecord,
    ) -> Result<ContainerRecord> {
        let url = self.endpoint(instance_guid, "container");
        debug!(%url, reference_name = ?record.reference_name, "saving container");
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.options.token)
            .json(record)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }
}
