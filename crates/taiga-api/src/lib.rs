//! Typed services for the Taiga project-management REST API.
//!
//! Every versioned resource (projects, epics, user stories, tasks, issues, milestones,
//! wiki pages) is served by one generic [`ResourceService`]. Attachments, history,
//! webhooks, users, statistics, the resolver and authentication have their own
//! services. [`Taiga`] bundles all of them over one [`TaigaClient`].

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

pub mod attachment;
pub mod auth;
pub mod history;
pub mod models;
pub mod params;
pub mod project;
pub mod resolver;
pub mod resource;
pub mod stats;
pub mod taiga;
pub mod user;
pub mod webhook;
mod wiki;

pub use attachment::{AttachmentService, AttachmentUpload};
pub use auth::AuthService;
pub use history::HistoryService;
pub use models::{
    Attachment, AuthDetail, Epic, HistoryEntry, HistoryUser, Issue, IssuesStats, Milestone,
    Project, ProjectListEntry, ProjectStats, RefreshedToken, ResolverResult, Task, User,
    UserStory, Webhook, WebhookLog, WikiPage,
};
pub use params::{
    EpicListParams, IssueListParams, MilestoneListParams, ProjectListParams, ProjectScope,
    ResolverQuery, TaskListParams, UserStoryListParams,
};
pub use project::MappedServices;
pub use resolver::ResolverService;
pub use resource::{Attachable, ListEnvelope, Referenced, Resource, ResourceService, TaigaObject};
pub use stats::StatsService;
pub use taiga::Taiga;
pub use taiga_core::{
    Endpoint, Error, ProjectRef, TaigaClient, TaigaClientBuilder, TaigaClientConfig,
};
pub use user::UserService;
pub use webhook::WebhookService;

/// Projects.
pub type ProjectService = ResourceService<Project>;
/// Epics.
pub type EpicService = ResourceService<Epic>;
/// Issues.
pub type IssueService = ResourceService<Issue>;
/// Sprints.
pub type MilestoneService = ResourceService<Milestone>;
/// Tasks.
pub type TaskService = ResourceService<Task>;
/// User stories.
pub type UserStoryService = ResourceService<UserStory>;
/// Wiki pages.
pub type WikiService = ResourceService<WikiPage>;

/// Convenient result alias that reuses the core error type.
pub type Result<T> = taiga_core::Result<T>;
