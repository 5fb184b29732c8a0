//! Taiga resource models.
//!
//! Server-assigned fields (`id`, `ref`, `version`, timestamps) are omitted from request
//! bodies while unset, so the same struct is used to create, edit and decode a
//! resource. Mandatory fields for creation are declared with `validator` attributes.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(value: &i64) -> bool {
    *value == 0
}

/// A Taiga project.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
pub struct Project {
    /// Project ID.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: i64,
    /// Project name.
    #[validate(length(min = 1, message = "name is mandatory"))]
    #[serde(default)]
    pub name: String,
    /// URL slug.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub slug: String,
    /// Description.
    #[validate(length(min = 1, message = "description is mandatory"))]
    #[serde(default)]
    pub description: String,
    /// OCC version stamp.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub version: i64,
    /// Whether the project is private.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    /// Backlog module enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_backlog_activated: Option<bool>,
    /// Kanban module enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_kanban_activated: Option<bool>,
    /// Wiki module enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_wiki_activated: Option<bool>,
    /// Issues module enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_issues_activated: Option<bool>,
    /// Epics module enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_epics_activated: Option<bool>,
    /// Whether the project is looking for people.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_looking_for_people: Option<bool>,
    /// Planned number of sprints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_milestones: Option<i64>,
    /// Planned story points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_story_points: Option<f64>,
    /// Template the project was created from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_template: Option<i64>,
    /// Tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    /// Last modification timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<DateTime<Utc>>,
}

/// Project as returned by the list endpoint, including per-user metadata.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProjectListEntry {
    /// Canonical project fields.
    #[serde(flatten)]
    pub project: Project,
    /// Whether the current user is a fan.
    #[serde(default)]
    pub is_fan: Option<bool>,
    /// Whether the current user watches the project.
    #[serde(default)]
    pub is_watcher: Option<bool>,
    /// Permissions held by the current user.
    #[serde(default)]
    pub my_permissions: Vec<String>,
    /// Whether the current user owns the project.
    #[serde(default)]
    pub i_am_owner: Option<bool>,
}

impl From<ProjectListEntry> for Project {
    fn from(entry: ProjectListEntry) -> Self {
        entry.project
    }
}

/// A Taiga issue.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
pub struct Issue {
    /// Issue ID.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: i64,
    /// Project-scoped reference number.
    #[serde(rename = "ref", default, skip_serializing_if = "is_zero")]
    pub reference: i64,
    /// Owning project ID.
    #[validate(range(min = 1, message = "project is mandatory"))]
    #[serde(default)]
    pub project: i64,
    /// Subject line.
    #[validate(length(min = 1, message = "subject is mandatory"))]
    #[serde(default)]
    pub subject: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// OCC version stamp.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub version: i64,
    /// Status ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
    /// Priority ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    /// Severity ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<i64>,
    /// Issue type ID.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub issue_type: Option<i64>,
    /// Assigned user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<i64>,
    /// Owner user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<i64>,
    /// Sprint ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone: Option<i64>,
    /// Watcher user IDs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watchers: Option<Vec<i64>>,
    /// Tags, either names or `[name, color]` pairs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Value>>,
    /// Whether the issue is blocked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_blocked: Option<bool>,
    /// Reason for blocking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocked_note: Option<String>,
    /// Whether the issue is closed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_closed: Option<bool>,
    /// Due date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    /// Last modification timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<DateTime<Utc>>,
}

/// A Taiga task.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
pub struct Task {
    /// Task ID.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: i64,
    /// Project-scoped reference number.
    #[serde(rename = "ref", default, skip_serializing_if = "is_zero")]
    pub reference: i64,
    /// Owning project ID.
    #[validate(range(min = 1, message = "project is mandatory"))]
    #[serde(default)]
    pub project: i64,
    /// Subject line.
    #[validate(length(min = 1, message = "subject is mandatory"))]
    #[serde(default)]
    pub subject: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// OCC version stamp.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub version: i64,
    /// Status ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
    /// Parent user story ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_story: Option<i64>,
    /// Sprint ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone: Option<i64>,
    /// Assigned user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<i64>,
    /// Owner user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<i64>,
    /// Watcher user IDs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watchers: Option<Vec<i64>>,
    /// Tags, either names or `[name, color]` pairs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Value>>,
    /// Whether the task is blocked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_blocked: Option<bool>,
    /// Reason for blocking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocked_note: Option<String>,
    /// Whether the task is part of the sprint's iocaine dose.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_iocaine: Option<bool>,
    /// Whether the task is closed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_closed: Option<bool>,
    /// Order within the user story.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub us_order: Option<i64>,
    /// Order on the taskboard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taskboard_order: Option<i64>,
    /// Due date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    /// Last modification timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<DateTime<Utc>>,
}

/// A Taiga epic.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
pub struct Epic {
    /// Epic ID.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: i64,
    /// Project-scoped reference number.
    #[serde(rename = "ref", default, skip_serializing_if = "is_zero")]
    pub reference: i64,
    /// Owning project ID.
    #[validate(range(min = 1, message = "project is mandatory"))]
    #[serde(default)]
    pub project: i64,
    /// Subject line.
    #[validate(length(min = 1, message = "subject is mandatory"))]
    #[serde(default)]
    pub subject: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// OCC version stamp.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub version: i64,
    /// Status ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
    /// Display color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Assigned user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<i64>,
    /// Owner user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<i64>,
    /// Whether the epic belongs to the client requirements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_requirement: Option<bool>,
    /// Whether the epic belongs to the team requirements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_requirement: Option<bool>,
    /// Order among epics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epics_order: Option<i64>,
    /// Watcher user IDs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watchers: Option<Vec<i64>>,
    /// Tags, either names or `[name, color]` pairs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Value>>,
    /// Whether the epic is blocked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_blocked: Option<bool>,
    /// Reason for blocking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocked_note: Option<String>,
    /// Whether the epic is closed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_closed: Option<bool>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    /// Last modification timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<DateTime<Utc>>,
}

/// A Taiga user story.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
pub struct UserStory {
    /// User story ID.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: i64,
    /// Project-scoped reference number.
    #[serde(rename = "ref", default, skip_serializing_if = "is_zero")]
    pub reference: i64,
    /// Owning project ID.
    #[validate(range(min = 1, message = "project is mandatory"))]
    #[serde(default)]
    pub project: i64,
    /// Subject line.
    #[validate(length(min = 1, message = "subject is mandatory"))]
    #[serde(default)]
    pub subject: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// OCC version stamp.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub version: i64,
    /// Status ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
    /// Sprint ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone: Option<i64>,
    /// Assigned user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<i64>,
    /// Owner user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<i64>,
    /// Points per role (`role id -> points id`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<Value>,
    /// Order in the backlog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backlog_order: Option<i64>,
    /// Order in the sprint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint_order: Option<i64>,
    /// Order on the kanban board.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kanban_order: Option<i64>,
    /// Whether the story belongs to the client requirements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_requirement: Option<bool>,
    /// Whether the story belongs to the team requirements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_requirement: Option<bool>,
    /// Watcher user IDs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watchers: Option<Vec<i64>>,
    /// Tags, either names or `[name, color]` pairs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Value>>,
    /// Whether the story is blocked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_blocked: Option<bool>,
    /// Reason for blocking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocked_note: Option<String>,
    /// Whether the story is closed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_closed: Option<bool>,
    /// Due date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    /// Last modification timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<DateTime<Utc>>,
}

/// A sprint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
pub struct Milestone {
    /// Milestone ID.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: i64,
    /// Owning project ID.
    #[validate(range(min = 1, message = "project is mandatory"))]
    #[serde(default)]
    pub project: i64,
    /// Sprint name.
    #[validate(length(min = 1, message = "name is mandatory"))]
    #[serde(default)]
    pub name: String,
    /// URL slug.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub slug: String,
    /// Planned start.
    #[validate(required(message = "estimated_start is mandatory"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_start: Option<NaiveDate>,
    /// Planned finish.
    #[validate(required(message = "estimated_finish is mandatory"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_finish: Option<NaiveDate>,
    /// OCC version stamp.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub version: i64,
    /// Whether the sprint is closed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,
    /// Disponibility (team capacity).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disponibility: Option<f64>,
    /// Order among sprints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    /// Total points planned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_points: Option<f64>,
    /// Points already closed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_points: Option<f64>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    /// Last modification timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<DateTime<Utc>>,
}

/// A wiki page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
pub struct WikiPage {
    /// Page ID.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: i64,
    /// Owning project ID.
    #[validate(range(min = 1, message = "project is mandatory"))]
    #[serde(default)]
    pub project: i64,
    /// Page slug.
    #[validate(length(min = 1, message = "slug is mandatory"))]
    #[serde(default)]
    pub slug: String,
    /// Markdown content.
    #[validate(length(min = 1, message = "content is mandatory"))]
    #[serde(default)]
    pub content: String,
    /// OCC version stamp.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub version: i64,
    /// Rendered HTML.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Owner user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<i64>,
    /// Last modifier user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modifier: Option<i64>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    /// Last modification timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<DateTime<Utc>>,
}

/// File attached to an epic, user story, task, issue or wiki page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Attachment {
    /// Attachment ID.
    #[serde(default)]
    pub id: i64,
    /// ID of the object the file is attached to.
    #[serde(default)]
    pub object_id: i64,
    /// Owning project ID.
    #[serde(default)]
    pub project: i64,
    /// Original file name.
    #[serde(default)]
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Size in bytes.
    #[serde(default)]
    pub size: Option<u64>,
    /// Download URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Preview image URL.
    #[serde(default)]
    pub preview_url: Option<String>,
    /// Card thumbnail URL.
    #[serde(default)]
    pub thumbnail_card_url: Option<String>,
    /// Uploader user ID.
    #[serde(default)]
    pub owner: Option<i64>,
    /// Whether the file is marked as deprecated.
    #[serde(default)]
    pub is_deprecated: bool,
    /// Ordering among attachments.
    #[serde(default)]
    pub order: Option<i64>,
    /// SHA-1 of the content.
    #[serde(default)]
    pub sha1: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
    /// Last modification timestamp.
    #[serde(default)]
    pub modified_date: Option<DateTime<Utc>>,
}

/// Author of a history entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HistoryUser {
    /// User ID.
    #[serde(default)]
    pub pk: Option<i64>,
    /// Username.
    #[serde(default)]
    pub username: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Avatar URL.
    #[serde(default)]
    pub photo: Option<String>,
    /// Whether the account is active.
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// One entry of a resource's change history.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    /// Entry ID.
    #[serde(default)]
    pub id: String,
    /// Author.
    #[serde(default)]
    pub user: Option<HistoryUser>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Entry type (1 = change, 2 = creation, 3 = deletion).
    #[serde(rename = "type", default)]
    pub entry_type: Option<i64>,
    /// Internal object key.
    #[serde(default)]
    pub key: Option<String>,
    /// Raw field diff.
    #[serde(default)]
    pub diff: Option<Value>,
    /// Human-readable values referenced by the diff.
    #[serde(default)]
    pub values: Option<Value>,
    /// Human-readable diff.
    #[serde(default)]
    pub values_diff: Option<Value>,
    /// Comment text; the only field this client writes.
    #[serde(default)]
    pub comment: String,
    /// Rendered comment.
    #[serde(default)]
    pub comment_html: Option<String>,
    /// When the comment was last edited.
    #[serde(default)]
    pub edit_comment_date: Option<DateTime<Utc>>,
    /// When the comment was deleted.
    #[serde(default)]
    pub delete_comment_date: Option<DateTime<Utc>>,
    /// Whether the entry is hidden.
    #[serde(default)]
    pub is_hidden: Option<bool>,
    /// Whether the entry is a snapshot.
    #[serde(default)]
    pub is_snapshot: Option<bool>,
}

impl HistoryEntry {
    /// A new entry carrying only a comment.
    #[must_use]
    pub fn comment(text: impl Into<String>) -> Self {
        Self {
            comment: text.into(),
            ..Self::default()
        }
    }
}

/// A Taiga user account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// User ID.
    pub id: i64,
    /// Username.
    #[serde(default)]
    pub username: String,
    /// Full name.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Name shown in the UI.
    #[serde(default)]
    pub full_name_display: Option<String>,
    /// Email address (only visible to the account owner and admins).
    #[serde(default)]
    pub email: Option<String>,
    /// Biography.
    #[serde(default)]
    pub bio: Option<String>,
    /// Avatar URL.
    #[serde(default)]
    pub photo: Option<String>,
    /// Large avatar URL.
    #[serde(default)]
    pub big_photo: Option<String>,
    /// Preferred language.
    #[serde(default)]
    pub lang: Option<String>,
    /// Preferred timezone.
    #[serde(default)]
    pub timezone: Option<String>,
    /// Whether the account is active.
    #[serde(default)]
    pub is_active: Option<bool>,
    /// Registration timestamp.
    #[serde(default)]
    pub date_joined: Option<DateTime<Utc>>,
}

/// Authenticated user returned by a login.
#[derive(Clone, Deserialize, PartialEq)]
pub struct AuthDetail {
    /// User ID.
    pub id: i64,
    /// Username.
    #[serde(default)]
    pub username: String,
    /// Full name.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Bearer token for subsequent requests.
    pub auth_token: String,
    /// Token used to obtain a new bearer token.
    #[serde(default)]
    pub refresh: Option<String>,
}

impl std::fmt::Debug for AuthDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthDetail")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("auth_token", &"[REDACTED]")
            .field("refresh", &self.refresh.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Token pair returned by a refresh.
#[derive(Clone, Deserialize, PartialEq)]
pub struct RefreshedToken {
    /// New bearer token.
    pub auth_token: String,
    /// New refresh token.
    #[serde(default)]
    pub refresh: Option<String>,
}

impl std::fmt::Debug for RefreshedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshedToken")
            .field("auth_token", &"[REDACTED]")
            .field("refresh", &self.refresh.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// An outgoing webhook.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
pub struct Webhook {
    /// Webhook ID.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: i64,
    /// Owning project ID.
    #[validate(range(min = 1, message = "project is mandatory"))]
    #[serde(default)]
    pub project: i64,
    /// Display name.
    #[validate(length(min = 1, message = "name is mandatory"))]
    #[serde(default)]
    pub name: String,
    /// Target URL.
    #[validate(length(min = 1, message = "url is mandatory"))]
    #[serde(default)]
    pub url: String,
    /// Signing key.
    #[validate(length(min = 1, message = "key is mandatory"))]
    #[serde(default)]
    pub key: String,
    /// Number of recorded deliveries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logs_counter: Option<i64>,
}

/// A recorded webhook delivery.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WebhookLog {
    /// Log ID.
    pub id: i64,
    /// Webhook ID.
    #[serde(default)]
    pub webhook: i64,
    /// Target URL.
    #[serde(default)]
    pub url: String,
    /// HTTP status returned by the target.
    #[serde(default)]
    pub status: Option<i64>,
    /// Request payload.
    #[serde(default)]
    pub request_data: Option<Value>,
    /// Request headers.
    #[serde(default)]
    pub request_headers: Option<Value>,
    /// Response body.
    #[serde(default)]
    pub response_data: Option<String>,
    /// Response headers.
    #[serde(default)]
    pub response_headers: Option<Value>,
    /// Delivery duration in seconds.
    #[serde(default)]
    pub duration: Option<f64>,
    /// Delivery timestamp.
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

/// IDs resolved from slugs and refs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolverResult {
    /// Project ID.
    #[serde(default)]
    pub project: Option<i64>,
    /// User story ID.
    #[serde(default)]
    pub us: Option<i64>,
    /// Issue ID.
    #[serde(default)]
    pub issue: Option<i64>,
    /// Task ID.
    #[serde(default)]
    pub task: Option<i64>,
    /// Epic ID.
    #[serde(default)]
    pub epic: Option<i64>,
    /// Milestone ID.
    #[serde(default)]
    pub milestone: Option<i64>,
    /// Wiki page ID.
    #[serde(default)]
    pub wikipage: Option<i64>,
}

/// Sprint burndown statistics for a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProjectStats {
    /// Project name.
    #[serde(default)]
    pub name: Option<String>,
    /// Planned sprints.
    #[serde(default)]
    pub total_milestones: Option<i64>,
    /// Planned points.
    #[serde(default)]
    pub total_points: Option<f64>,
    /// Closed points.
    #[serde(default)]
    pub closed_points: Option<f64>,
    /// Points defined on stories.
    #[serde(default)]
    pub defined_points: Option<f64>,
    /// Points assigned to sprints.
    #[serde(default)]
    pub assigned_points: Option<f64>,
    /// Average points closed per sprint.
    #[serde(default)]
    pub speed: Option<f64>,
    /// Per-sprint breakdown.
    #[serde(default)]
    pub milestones: Vec<Value>,
}

/// Issue statistics for a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IssuesStats {
    /// All issues.
    #[serde(default)]
    pub total_issues: i64,
    /// Open issues.
    #[serde(default)]
    pub opened_issues: i64,
    /// Closed issues.
    #[serde(default)]
    pub closed_issues: i64,
    /// Counts grouped by type.
    #[serde(default)]
    pub issues_per_type: Option<Value>,
    /// Counts grouped by status.
    #[serde(default)]
    pub issues_per_status: Option<Value>,
    /// Counts grouped by priority.
    #[serde(default)]
    pub issues_per_priority: Option<Value>,
    /// Counts grouped by severity.
    #[serde(default)]
    pub issues_per_severity: Option<Value>,
    /// Counts grouped by assignee.
    #[serde(default)]
    pub issues_per_assigned_to: Option<Value>,
    /// Counts grouped by owner.
    #[serde(default)]
    pub issues_per_owner: Option<Value>,
}
