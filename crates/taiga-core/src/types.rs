//! Core Taiga domain types.
//!
//! Endpoint names for every Taiga resource collection and the two ways a project can
//! be addressed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix every Taiga API path lives under.
pub const API_PREFIX: &str = "api/v1";

/// Taiga resource collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endpoint {
    /// `auth`
    Auth,
    /// `epics`
    Epics,
    /// `history`
    History,
    /// `issues`
    Issues,
    /// `milestones`
    Milestones,
    /// `projects`
    Projects,
    /// `resolver`
    Resolver,
    /// `stats`
    Stats,
    /// `tasks`
    Tasks,
    /// `userstories`
    UserStories,
    /// `users`
    Users,
    /// `webhooks`
    Webhooks,
    /// `webhooklogs`
    WebhookLogs,
    /// `wiki`
    Wiki,
}

impl Endpoint {
    /// Returns the collection path segment.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Epics => "epics",
            Self::History => "history",
            Self::Issues => "issues",
            Self::Milestones => "milestones",
            Self::Projects => "projects",
            Self::Resolver => "resolver",
            Self::Stats => "stats",
            Self::Tasks => "tasks",
            Self::UserStories => "userstories",
            Self::Users => "users",
            Self::Webhooks => "webhooks",
            Self::WebhookLogs => "webhooklogs",
            Self::Wiki => "wiki",
        }
    }

    /// Singular name used by the history API (`history/<singular>/<id>`).
    ///
    /// Endpoints without a history feed map to an empty string, which yields a
    /// `history//<id>` path the server rejects.
    #[must_use]
    pub const fn history_name(&self) -> &'static str {
        match self {
            Self::UserStories => "userstory",
            Self::Tasks => "task",
            Self::Epics => "epic",
            Self::Issues => "issue",
            Self::Wiki => "wiki",
            _ => "",
        }
    }

    /// Returns true if the collection accepts attachments.
    #[must_use]
    pub const fn supports_attachments(&self) -> bool {
        matches!(
            self,
            Self::Epics | Self::Issues | Self::Tasks | Self::UserStories | Self::Wiki
        )
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// A project addressed either by numeric ID or by slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProjectRef {
    /// Numeric project ID
    Id(i64),
    /// Project slug
    Slug(String),
}

impl ProjectRef {
    /// Query pair identifying the project (`project` or `project__slug`).
    #[must_use]
    pub fn query_pair(&self) -> (&'static str, String) {
        match self {
            Self::Id(id) => ("project", id.to_string()),
            Self::Slug(slug) => ("project__slug", slug.clone()),
        }
    }
}

impl From<i64> for ProjectRef {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for ProjectRef {
    fn from(slug: &str) -> Self {
        Self::Slug(slug.to_string())
    }
}

impl From<String> for ProjectRef {
    fn from(slug: String) -> Self {
        Self::Slug(slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_names_cover_commentable_endpoints() {
        assert_eq!(Endpoint::UserStories.history_name(), "userstory");
        assert_eq!(Endpoint::Tasks.history_name(), "task");
        assert_eq!(Endpoint::Epics.history_name(), "epic");
        assert_eq!(Endpoint::Issues.history_name(), "issue");
    }

    #[test]
    fn unmapped_history_name_is_empty() {
        assert_eq!(Endpoint::Projects.history_name(), "");
        assert_eq!(Endpoint::Webhooks.history_name(), "");
    }

    #[test]
    fn project_ref_query_pair() {
        assert_eq!(ProjectRef::from(5).query_pair(), ("project", "5".into()));
        assert_eq!(
            ProjectRef::from("kanban").query_pair(),
            ("project__slug", "kanban".into())
        );
    }

    #[test]
    fn endpoint_display() {
        assert_eq!(Endpoint::UserStories.to_string(), "userstories");
        assert!(Endpoint::Issues.supports_attachments());
        assert!(!Endpoint::Projects.supports_attachments());
    }
}
