//! Change history and comments.

use crate::models::HistoryEntry;
use crate::resource::{TaigaObject, VersionStamp};
use crate::Result;
use serde::Serialize;
use taiga_core::types::Endpoint;
use taiga_core::TaigaClient;
use tracing::debug;

#[derive(Serialize)]
struct CommentPatch<'a> {
    version: i64,
    comment: &'a str,
}

/// History operations for epics, user stories, tasks, issues and wiki pages.
#[derive(Debug, Clone)]
pub struct HistoryService {
    client: TaigaClient,
}

impl HistoryService {
    /// Create a new history service.
    #[must_use]
    pub const fn new(client: TaigaClient) -> Self {
        Self { client }
    }

    /// List every history entry recorded for an object, in server order.
    ///
    /// Endpoints without history map to an empty path segment and are left to the
    /// server to reject.
    pub async fn list_complete_history(
        &self,
        object_id: i64,
        endpoint: Endpoint,
    ) -> Result<Vec<HistoryEntry>> {
        let url = self.client.make_url(
            &["history", endpoint.history_name(), &object_id.to_string()],
            &[],
        )?;
        self.client.get_json(url).await
    }

    /// Add a comment to `parent`.
    ///
    /// Only the comment is written; entries with an empty comment are skipped without
    /// any request. The parent's current version is fetched first so the comment is
    /// never rejected for a stale version held by the caller.
    pub async fn create_history_entry(
        &self,
        entry: &HistoryEntry,
        parent: &impl TaigaObject,
        endpoint: Endpoint,
    ) -> Result<()> {
        if entry.comment.is_empty() {
            debug!(%endpoint, id = parent.id(), "Skipping history entry without comment");
            return Ok(());
        }

        let url = self
            .client
            .make_url(&[endpoint.as_str(), &parent.id().to_string()], &[])?;
        let current: VersionStamp = self.client.get_json(url.clone()).await?;

        let patch = CommentPatch {
            version: current.version,
            comment: &entry.comment,
        };
        self.client.patch(url, &patch).await?;
        Ok(())
    }
}
