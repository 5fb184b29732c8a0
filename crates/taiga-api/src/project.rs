//! Project-specific operations and the per-project service set.

use crate::auth::AuthService;
use crate::models::{Epic, Issue, Milestone, Project, Task, UserStory, WikiPage};
use crate::resolver::ResolverService;
use crate::resource::ResourceService;
use crate::stats::StatsService;
use crate::user::UserService;
use crate::webhook::WebhookService;
use crate::Result;
use taiga_core::types::Endpoint;
use tracing::debug;

/// Every entity service, bound to one project.
///
/// Built by [`ResourceService::<Project>::configure_mapped_services`].
#[derive(Debug, Clone)]
pub struct MappedServices {
    /// Authentication.
    pub auth: AuthService,
    /// Epics of the project.
    pub epic: ResourceService<Epic>,
    /// Issues of the project.
    pub issue: ResourceService<Issue>,
    /// Sprints of the project.
    pub milestone: ResourceService<Milestone>,
    /// Slug and ref resolution.
    pub resolver: ResolverService,
    /// Statistics of the project.
    pub stats: StatsService,
    /// Tasks of the project.
    pub task: ResourceService<Task>,
    /// User stories of the project.
    pub user_story: ResourceService<UserStory>,
    /// Members of the project.
    pub user: UserService,
    /// Webhooks of the project.
    pub webhook: WebhookService,
    /// Wiki pages of the project.
    pub wiki: ResourceService<WikiPage>,
    project_id: i64,
    configured: bool,
}

impl MappedServices {
    /// The project every service is bound to.
    #[must_use]
    pub const fn project_id(&self) -> i64 {
        self.project_id
    }

    /// Returns true once every service has been bound.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.configured
    }
}

impl ResourceService<Project> {
    /// Fetch a project by slug.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Project> {
        let url = self.client().make_url(
            &[Endpoint::Projects.as_str(), "by_slug"],
            &[("slug", slug.to_string())],
        )?;
        self.client().get_json(url).await
    }

    /// Build every entity service bound to `project_id`.
    #[must_use]
    pub fn configure_mapped_services(&self, project_id: i64) -> MappedServices {
        let client = self.client().clone();
        debug!(project_id, "Configuring project-bound services");

        MappedServices {
            auth: AuthService::new(client.clone()),
            epic: ResourceService::for_project(client.clone(), project_id),
            issue: ResourceService::for_project(client.clone(), project_id),
            milestone: ResourceService::for_project(client.clone(), project_id),
            resolver: ResolverService::new(client.clone()),
            stats: StatsService::for_project(client.clone(), project_id),
            task: ResourceService::for_project(client.clone(), project_id),
            user_story: ResourceService::for_project(client.clone(), project_id),
            user: UserService::for_project(client.clone(), project_id),
            webhook: WebhookService::for_project(client.clone(), project_id),
            wiki: ResourceService::for_project(client, project_id),
            project_id,
            configured: true,
        }
    }
}
