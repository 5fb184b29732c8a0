//! Outgoing webhooks and their delivery logs.
//!
//! Webhooks carry no version stamp, so edits are plain PATCHes.

use crate::models::{Webhook, WebhookLog};
use crate::params::ProjectScope;
use crate::resource::ListEnvelope;
use crate::Result;
use reqwest::Response;
use serde_json::json;
use taiga_core::query::QueryString;
use taiga_core::types::Endpoint;
use taiga_core::{Error, TaigaClient};
use url::Url;
use validator::Validate;

/// Webhook CRUD plus delivery logs, optionally bound to a default project.
#[derive(Debug, Clone)]
pub struct WebhookService {
    client: TaigaClient,
    default_project: Option<i64>,
}

impl WebhookService {
    /// Create a service not bound to any project.
    #[must_use]
    pub const fn new(client: TaigaClient) -> Self {
        Self {
            client,
            default_project: None,
        }
    }

    /// Create a service whose unfiltered lists are scoped to `project_id`.
    #[must_use]
    pub fn for_project(client: TaigaClient, project_id: i64) -> Self {
        Self {
            client,
            default_project: (project_id != 0).then_some(project_id),
        }
    }

    /// List webhooks.
    pub async fn list(&self, filter: Option<&ProjectScope>) -> Result<Vec<Webhook>> {
        let scope = filter.copied().unwrap_or(ProjectScope {
            project: self.default_project,
        });
        let url = self
            .client
            .make_url(&[Endpoint::Webhooks.as_str()], &scope.to_pairs())?;
        let listed: ListEnvelope<Webhook> = self.client.get_json(url).await?;
        Ok(listed.into_items())
    }

    /// Fetch a webhook by ID.
    pub async fn get(&self, webhook_id: i64) -> Result<Webhook> {
        self.client.get_json(self.item_url(webhook_id)?).await
    }

    /// Create a webhook after checking its mandatory fields.
    pub async fn create(&self, webhook: &Webhook) -> Result<Webhook> {
        webhook.validate().map_err(|errors| {
            Error::ValidationError(format!("a mandatory Webhook field is missing: {errors}"))
        })?;

        let url = self.client.make_url(&[Endpoint::Webhooks.as_str()], &[])?;
        self.client.post_json(url, webhook).await
    }

    /// Save changes to an existing webhook.
    pub async fn edit(&self, webhook: &Webhook) -> Result<Webhook> {
        if webhook.id == 0 {
            return Err(Error::ValidationError(
                "passed Webhook does not have an ID yet. Does it exist?".into(),
            ));
        }

        self.client
            .patch_json(self.item_url(webhook.id)?, webhook)
            .await
    }

    /// Delete a webhook and return the raw response.
    pub async fn delete(&self, webhook_id: i64) -> Result<Response> {
        self.client.delete(self.item_url(webhook_id)?).await
    }

    /// Send a test delivery and return its log.
    pub async fn test(&self, webhook_id: i64) -> Result<WebhookLog> {
        let url = self.client.make_url(
            &[Endpoint::Webhooks.as_str(), &webhook_id.to_string(), "test"],
            &[],
        )?;
        self.client.post_json(url, &json!({})).await
    }

    /// List the delivery logs of a webhook.
    pub async fn list_logs(&self, webhook_id: i64) -> Result<Vec<WebhookLog>> {
        let url = self.client.make_url(
            &[Endpoint::WebhookLogs.as_str()],
            &[("webhook", webhook_id.to_string())],
        )?;
        let listed: ListEnvelope<WebhookLog> = self.client.get_json(url).await?;
        Ok(listed.into_items())
    }

    /// Fetch one delivery log.
    pub async fn get_log(&self, log_id: i64) -> Result<WebhookLog> {
        let url = self
            .client
            .make_url(&[Endpoint::WebhookLogs.as_str(), &log_id.to_string()], &[])?;
        self.client.get_json(url).await
    }

    /// Redeliver a logged request and return the new log.
    pub async fn resend_log(&self, log_id: i64) -> Result<WebhookLog> {
        let url = self.client.make_url(
            &[Endpoint::WebhookLogs.as_str(), &log_id.to_string(), "resend"],
            &[],
        )?;
        self.client.post_json(url, &json!({})).await
    }

    fn item_url(&self, webhook_id: i64) -> Result<Url> {
        self.client
            .make_url(&[Endpoint::Webhooks.as_str(), &webhook_id.to_string()], &[])
    }
}
