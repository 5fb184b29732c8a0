//! Project statistics.

use crate::models::{IssuesStats, ProjectStats};
use crate::Result;
use serde::de::DeserializeOwned;
use taiga_core::types::Endpoint;
use taiga_core::{Error, TaigaClient};

/// Burndown and issue statistics, optionally bound to a default project.
#[derive(Debug, Clone)]
pub struct StatsService {
    client: TaigaClient,
    default_project: Option<i64>,
}

impl StatsService {
    /// Create a service not bound to any project.
    #[must_use]
    pub const fn new(client: TaigaClient) -> Self {
        Self {
            client,
            default_project: None,
        }
    }

    /// Create a service that falls back to `project_id`.
    #[must_use]
    pub fn for_project(client: TaigaClient, project_id: i64) -> Self {
        Self {
            client,
            default_project: (project_id != 0).then_some(project_id),
        }
    }

    /// Sprint and points statistics of a project.
    pub async fn project_stats(&self, project_id: Option<i64>) -> Result<ProjectStats> {
        self.fetch(project_id, "stats").await
    }

    /// Issue breakdown of a project.
    pub async fn issues_stats(&self, project_id: Option<i64>) -> Result<IssuesStats> {
        self.fetch(project_id, "issues_stats").await
    }

    async fn fetch<T: DeserializeOwned>(&self, project_id: Option<i64>, kind: &str) -> Result<T> {
        let project = project_id.or(self.default_project).ok_or_else(|| {
            Error::ValidationError("no project given and no default project bound".into())
        })?;

        let url = self.client.make_url(
            &[Endpoint::Projects.as_str(), &project.to_string(), kind],
            &[],
        )?;
        self.client.get_json(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn bound_project_is_used_by_default() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/projects/5/stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "Roadmap", "total_milestones": 4, "total_points": 120.0,
                "closed_points": 45.5, "speed": 11.0, "milestones": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let stats = StatsService::for_project(TaigaClient::new(server.uri()).unwrap(), 5);
        let project = stats.project_stats(None).await.unwrap();
        assert_eq!(project.total_milestones, Some(4));
        assert_eq!(project.closed_points, Some(45.5));
    }

    #[tokio::test]
    async fn explicit_project_wins() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/projects/9/issues_stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total_issues": 10, "opened_issues": 7, "closed_issues": 3
            })))
            .expect(1)
            .mount(&server)
            .await;

        let stats = StatsService::for_project(TaigaClient::new(server.uri()).unwrap(), 5);
        let issues = stats.issues_stats(Some(9)).await.unwrap();
        assert_eq!(issues.opened_issues, 7);
    }

    #[tokio::test]
    async fn unbound_without_project_fails() {
        let server = MockServer::start().await;
        let stats = StatsService::new(TaigaClient::new(server.uri()).unwrap());
        let err = stats.project_stats(None).await.unwrap_err();
        assert!(matches!(err, Error::ValidationError(_)));
    }
}
