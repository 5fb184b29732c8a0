//! Query parameters for list endpoints.
//!
//! Every field is optional; unset fields are left out of the query string and the
//! server applies its defaults.

use taiga_core::query::{QueryParams, QueryString};

fn join_ids(ids: &[i64]) -> Option<String> {
    if ids.is_empty() {
        None
    } else {
        Some(
            ids.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}

fn join_tags(tags: &[String]) -> Option<String> {
    if tags.is_empty() {
        None
    } else {
        Some(tags.join(","))
    }
}

/// Filters for the project list.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProjectListParams {
    /// Projects the user is a member of.
    pub member: Option<i64>,
    /// Projects any of these users are members of.
    pub members: Vec<i64>,
    /// Projects looking for people.
    pub is_looking_for_people: Option<bool>,
    /// Featured projects.
    pub is_featured: Option<bool>,
    /// Projects with the backlog enabled.
    pub is_backlog_activated: Option<bool>,
    /// Projects with kanban enabled.
    pub is_kanban_activated: Option<bool>,
    /// Ordering (e.g. `total_fans`, `memberships__user_order`).
    pub order_by: Option<String>,
}

impl QueryString for ProjectListParams {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();

        params.push_opt("member", self.member);
        params.push_opt("members", join_ids(&self.members));
        params.push_opt("is_looking_for_people", self.is_looking_for_people);
        params.push_opt("is_featured", self.is_featured);
        params.push_opt("is_backlog_activated", self.is_backlog_activated);
        params.push_opt("is_kanban_activated", self.is_kanban_activated);
        params.push_opt("order_by", self.order_by.as_deref());

        params.into_pairs()
    }
}

/// Filters for the issue list.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IssueListParams {
    /// Project ID.
    pub project: Option<i64>,
    /// Status ID.
    pub status: Option<i64>,
    /// Severity ID.
    pub severity: Option<i64>,
    /// Priority ID.
    pub priority: Option<i64>,
    /// Issue type ID.
    pub issue_type: Option<i64>,
    /// Owner user ID.
    pub owner: Option<i64>,
    /// Assigned user ID.
    pub assigned_to: Option<i64>,
    /// Role ID.
    pub role: Option<i64>,
    /// Watcher user ID.
    pub watchers: Option<i64>,
    /// Tags (all must match).
    pub tags: Vec<String>,
    /// Only open (`false`) or only closed (`true`) issues.
    pub status_is_closed: Option<bool>,
    /// Ordering (e.g. `-created_date`).
    pub order_by: Option<String>,
}

impl QueryString for IssueListParams {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();

        params.push_opt("project", self.project);
        params.push_opt("status", self.status);
        params.push_opt("severity", self.severity);
        params.push_opt("priority", self.priority);
        params.push_opt("type", self.issue_type);
        params.push_opt("owner", self.owner);
        params.push_opt("assigned_to", self.assigned_to);
        params.push_opt("role", self.role);
        params.push_opt("watchers", self.watchers);
        params.push_opt("tags", join_tags(&self.tags));
        params.push_opt("status__is_closed", self.status_is_closed);
        params.push_opt("order_by", self.order_by.as_deref());

        params.into_pairs()
    }
}

/// Filters for the task list.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskListParams {
    /// Project ID.
    pub project: Option<i64>,
    /// Status ID.
    pub status: Option<i64>,
    /// Parent user story ID.
    pub user_story: Option<i64>,
    /// Sprint ID.
    pub milestone: Option<i64>,
    /// Owner user ID.
    pub owner: Option<i64>,
    /// Assigned user ID.
    pub assigned_to: Option<i64>,
    /// Role ID.
    pub role: Option<i64>,
    /// Watcher user ID.
    pub watchers: Option<i64>,
    /// Tags (all must match).
    pub tags: Vec<String>,
    /// Only open (`false`) or only closed (`true`) tasks.
    pub status_is_closed: Option<bool>,
}

impl QueryString for TaskListParams {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();

        params.push_opt("project", self.project);
        params.push_opt("status", self.status);
        params.push_opt("user_story", self.user_story);
        params.push_opt("milestone", self.milestone);
        params.push_opt("owner", self.owner);
        params.push_opt("assigned_to", self.assigned_to);
        params.push_opt("role", self.role);
        params.push_opt("watchers", self.watchers);
        params.push_opt("tags", join_tags(&self.tags));
        params.push_opt("status__is_closed", self.status_is_closed);

        params.into_pairs()
    }
}

/// Filters for the epic list.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EpicListParams {
    /// Project ID.
    pub project: Option<i64>,
    /// Project slug.
    pub project_slug: Option<String>,
    /// Assigned user ID.
    pub assigned_to: Option<i64>,
    /// Only open (`false`) or only closed (`true`) epics.
    pub status_is_closed: Option<bool>,
}

impl QueryString for EpicListParams {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();

        params.push_opt("project", self.project);
        params.push_opt("project__slug", self.project_slug.as_deref());
        params.push_opt("assigned_to", self.assigned_to);
        params.push_opt("status__is_closed", self.status_is_closed);

        params.into_pairs()
    }
}

/// Filters for the user story list.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UserStoryListParams {
    /// Project ID.
    pub project: Option<i64>,
    /// Sprint ID.
    pub milestone: Option<i64>,
    /// Only stories without (`true`) or with (`false`) a sprint.
    pub milestone_is_null: Option<bool>,
    /// Status ID.
    pub status: Option<i64>,
    /// Only archived (`true`) or unarchived (`false`) statuses.
    pub status_is_archived: Option<bool>,
    /// Epic ID.
    pub epic: Option<i64>,
    /// Assigned user ID.
    pub assigned_to: Option<i64>,
    /// Role ID.
    pub role: Option<i64>,
    /// Watcher user ID.
    pub watchers: Option<i64>,
    /// Tags (all must match).
    pub tags: Vec<String>,
    /// Only open (`false`) or only closed (`true`) stories.
    pub status_is_closed: Option<bool>,
}

impl QueryString for UserStoryListParams {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();

        params.push_opt("project", self.project);
        params.push_opt("milestone", self.milestone);
        params.push_opt("milestone__isnull", self.milestone_is_null);
        params.push_opt("status", self.status);
        params.push_opt("status__is_archived", self.status_is_archived);
        params.push_opt("epic", self.epic);
        params.push_opt("assigned_to", self.assigned_to);
        params.push_opt("role", self.role);
        params.push_opt("watchers", self.watchers);
        params.push_opt("tags", join_tags(&self.tags));
        params.push_opt("status__is_closed", self.status_is_closed);

        params.into_pairs()
    }
}

/// Filters for the milestone list.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MilestoneListParams {
    /// Project ID.
    pub project: Option<i64>,
    /// Only closed (`true`) or open (`false`) sprints.
    pub closed: Option<bool>,
}

impl QueryString for MilestoneListParams {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();

        params.push_opt("project", self.project);
        params.push_opt("closed", self.closed);

        params.into_pairs()
    }
}

/// Filters shared by endpoints that only scope by project (wiki, users, webhooks).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProjectScope {
    /// Project ID.
    pub project: Option<i64>,
}

impl ProjectScope {
    /// Scope to a single project.
    #[must_use]
    pub const fn new(project: i64) -> Self {
        Self {
            project: Some(project),
        }
    }
}

impl QueryString for ProjectScope {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push_opt("project", self.project);
        params.into_pairs()
    }
}

/// Lookup performed by the resolver endpoint.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResolverQuery {
    /// Project slug (mandatory).
    pub project: String,
    /// User story ref.
    pub us: Option<i64>,
    /// Issue ref.
    pub issue: Option<i64>,
    /// Task ref.
    pub task: Option<i64>,
    /// Epic ref.
    pub epic: Option<i64>,
    /// Milestone slug.
    pub milestone: Option<String>,
    /// Wiki page slug.
    pub wikipage: Option<String>,
    /// Ref of any kind.
    pub reference: Option<i64>,
}

impl ResolverQuery {
    /// Resolve a project slug.
    #[must_use]
    pub fn project(slug: impl Into<String>) -> Self {
        Self {
            project: slug.into(),
            ..Self::default()
        }
    }

    /// Also resolve a user story ref.
    #[must_use]
    pub const fn with_user_story(mut self, reference: i64) -> Self {
        self.us = Some(reference);
        self
    }

    /// Also resolve an issue ref.
    #[must_use]
    pub const fn with_issue(mut self, reference: i64) -> Self {
        self.issue = Some(reference);
        self
    }

    /// Also resolve a task ref.
    #[must_use]
    pub const fn with_task(mut self, reference: i64) -> Self {
        self.task = Some(reference);
        self
    }

    /// Also resolve an epic ref.
    #[must_use]
    pub const fn with_epic(mut self, reference: i64) -> Self {
        self.epic = Some(reference);
        self
    }

    /// Also resolve a milestone slug.
    #[must_use]
    pub fn with_milestone(mut self, slug: impl Into<String>) -> Self {
        self.milestone = Some(slug.into());
        self
    }

    /// Also resolve a wiki page slug.
    #[must_use]
    pub fn with_wikipage(mut self, slug: impl Into<String>) -> Self {
        self.wikipage = Some(slug.into());
        self
    }

    /// Resolve a ref without knowing its kind.
    #[must_use]
    pub const fn with_ref(mut self, reference: i64) -> Self {
        self.reference = Some(reference);
        self
    }
}

impl QueryString for ResolverQuery {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();

        params.push_opt("project", Some(self.project.as_str()));
        params.push_opt("us", self.us);
        params.push_opt("issue", self.issue);
        params.push_opt("task", self.task);
        params.push_opt("epic", self.epic);
        params.push_opt("milestone", self.milestone.as_deref());
        params.push_opt("wikipage", self.wikipage.as_deref());
        params.push_opt("ref", self.reference);

        params.into_pairs()
    }
}
