//! User accounts.

use crate::models::User;
use crate::params::ProjectScope;
use crate::resource::ListEnvelope;
use crate::Result;
use taiga_core::query::QueryString;
use taiga_core::types::Endpoint;
use taiga_core::TaigaClient;

/// Read access to user accounts, optionally bound to a default project.
#[derive(Debug, Clone)]
pub struct UserService {
    client: TaigaClient,
    default_project: Option<i64>,
}

impl UserService {
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

    /// List users, restricted to the members of a project when one is given or bound.
    pub async fn list(&self, filter: Option<&ProjectScope>) -> Result<Vec<User>> {
        let scope = filter.copied().unwrap_or(ProjectScope {
            project: self.default_project,
        });
        let url = self
            .client
            .make_url(&[Endpoint::Users.as_str()], &scope.to_pairs())?;
        let listed: ListEnvelope<User> = self.client.get_json(url).await?;
        Ok(listed.into_items())
    }

    /// Fetch a user by ID.
    pub async fn get(&self, user_id: i64) -> Result<User> {
        let url = self
            .client
            .make_url(&[Endpoint::Users.as_str(), &user_id.to_string()], &[])?;
        self.client.get_json(url).await
    }

    /// The authenticated user.
    pub async fn me(&self) -> Result<User> {
        let url = self.client.make_url(&[Endpoint::Users.as_str(), "me"], &[])?;
        self.client.get_json(url).await
    }
}
