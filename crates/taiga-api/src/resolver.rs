//! Resolve slugs and refs to numeric IDs.

use crate::models::ResolverResult;
use crate::params::ResolverQuery;
use crate::Result;
use taiga_core::query::QueryString;
use taiga_core::types::Endpoint;
use taiga_core::{Error, TaigaClient};

/// Client for the `resolver` endpoint.
#[derive(Debug, Clone)]
pub struct ResolverService {
    client: TaigaClient,
}

impl ResolverService {
    /// Create a new resolver service.
    #[must_use]
    pub const fn new(client: TaigaClient) -> Self {
        Self { client }
    }

    /// Resolve the slugs and refs in `query`, all scoped to one project slug.
    pub async fn resolve(&self, query: &ResolverQuery) -> Result<ResolverResult> {
        if query.project.is_empty() {
            return Err(Error::ValidationError(
                "a project slug is required to resolve references".into(),
            ));
        }

        let url = self
            .client
            .make_url(&[Endpoint::Resolver.as_str()], &query.to_pairs())?;
        self.client.get_json(url).await
    }
}
