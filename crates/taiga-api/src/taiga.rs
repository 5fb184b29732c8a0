//! Entry point bundling every service over one client.

use crate::attachment::AttachmentService;
use crate::auth::AuthService;
use crate::history::HistoryService;
use crate::models::{Epic, Issue, Milestone, Project, Task, UserStory, WikiPage};
use crate::project::MappedServices;
use crate::resolver::ResolverService;
use crate::resource::ResourceService;
use crate::stats::StatsService;
use crate::user::UserService;
use crate::webhook::WebhookService;
use crate::Result;
use taiga_core::{TaigaClient, TaigaClientConfig};

/// Unbound services for every Taiga resource, plus an optional project-bound set.
///
/// ```no_run
/// # async fn run() -> taiga_api::Result<()> {
/// use taiga_api::Taiga;
///
/// let mut taiga = Taiga::new("https://api.taiga.io")?;
/// let session = taiga.auth.login("ana", "hunter2").await?;
/// taiga.set_token(&session.auth_token);
///
/// let project = taiga.project.get_by_slug("ana-roadmap").await?;
/// let mapped = taiga.configure_mapped_services(project.id);
/// let open_issues = mapped.issue.list(None).await?;
/// # let _ = open_issues;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Taiga {
    client: TaigaClient,
    /// Attachments of any attachable resource.
    pub attachment: AttachmentService,
    /// Authentication.
    pub auth: AuthService,
    /// Epics.
    pub epic: ResourceService<Epic>,
    /// Change history and comments.
    pub history: HistoryService,
    /// Issues.
    pub issue: ResourceService<Issue>,
    /// Sprints.
    pub milestone: ResourceService<Milestone>,
    /// Projects.
    pub project: ResourceService<Project>,
    /// Slug and ref resolution.
    pub resolver: ResolverService,
    /// Statistics.
    pub stats: StatsService,
    /// Tasks.
    pub task: ResourceService<Task>,
    /// User stories.
    pub user_story: ResourceService<UserStory>,
    /// Users.
    pub user: UserService,
    /// Webhooks.
    pub webhook: WebhookService,
    /// Wiki pages.
    pub wiki: ResourceService<WikiPage>,
    mapped: Option<MappedServices>,
}

impl Taiga {
    /// Connect to a Taiga host with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn new(api_url: impl Into<String>) -> Result<Self> {
        Ok(Self::from_client(TaigaClient::new(api_url)?))
    }

    /// Connect using a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_config(config: TaigaClientConfig) -> Result<Self> {
        Ok(Self::from_client(TaigaClient::builder(config).build()?))
    }

    /// Wrap an existing client.
    #[must_use]
    pub fn from_client(client: TaigaClient) -> Self {
        Self {
            attachment: AttachmentService::new(client.clone()),
            auth: AuthService::new(client.clone()),
            epic: ResourceService::new(client.clone()),
            history: HistoryService::new(client.clone()),
            issue: ResourceService::new(client.clone()),
            milestone: ResourceService::new(client.clone()),
            project: ResourceService::new(client.clone()),
            resolver: ResolverService::new(client.clone()),
            stats: StatsService::new(client.clone()),
            task: ResourceService::new(client.clone()),
            user_story: ResourceService::new(client.clone()),
            user: UserService::new(client.clone()),
            webhook: WebhookService::new(client.clone()),
            wiki: ResourceService::new(client.clone()),
            client,
            mapped: None,
        }
    }

    /// The shared transport.
    #[must_use]
    pub const fn client(&self) -> &TaigaClient {
        &self.client
    }

    /// Authenticate every service with a bearer token.
    ///
    /// Rebuilds all services, including the project-bound set if one was configured.
    pub fn set_token(&mut self, token: &str) {
        let project_id = self.mapped.as_ref().map(MappedServices::project_id);
        *self = Self::from_client(self.client.with_token(token));
        if let Some(project_id) = project_id {
            self.configure_mapped_services(project_id);
        }
    }

    /// Bind every entity service to `project_id`, replacing any previous binding.
    pub fn configure_mapped_services(&mut self, project_id: i64) -> &MappedServices {
        self.mapped
            .insert(self.project.configure_mapped_services(project_id))
    }

    /// Returns true once [`Taiga::configure_mapped_services`] has been called.
    #[must_use]
    pub fn are_mapped_services_configured(&self) -> bool {
        self.mapped.as_ref().is_some_and(MappedServices::is_configured)
    }

    /// The project-bound services, if configured.
    #[must_use]
    pub const fn mapped(&self) -> Option<&MappedServices> {
        self.mapped.as_ref()
    }
}
