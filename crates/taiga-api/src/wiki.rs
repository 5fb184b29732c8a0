//! Wiki page lookups.

use crate::models::WikiPage;
use crate::resource::ResourceService;
use crate::Result;
use taiga_core::types::Endpoint;
use taiga_core::Error;

impl ResourceService<WikiPage> {
    /// Fetch a wiki page by slug.
    ///
    /// Slugs are unique per project, so the project comes from `project_id` or the
    /// bound default.
    pub async fn get_by_slug(&self, slug: &str, project_id: Option<i64>) -> Result<WikiPage> {
        let project = project_id.or(self.default_project()).ok_or_else(|| {
            Error::ValidationError("a project is required to look up a wiki page".into())
        })?;

        let url = self.client().make_url(
            &[Endpoint::Wiki.as_str(), "by_slug"],
            &[("slug", slug.to_string()), ("project", project.to_string())],
        )?;
        self.client().get_json(url).await
    }
}
