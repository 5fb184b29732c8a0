//! Generic CRUD service shared by every versioned Taiga resource.
//!
//! A resource type describes itself through [`Resource`]: its endpoint, the wrapper
//! type the list endpoint returns, its filter type and its mandatory fields. One
//! [`ResourceService`] then provides list/get/create/edit/delete for it.
//!
//! `edit` follows Taiga's optimistic concurrency protocol: the current version is
//! fetched from the server immediately before the PATCH and always replaces the
//! version held by the caller.

use crate::attachment::{AttachmentService, AttachmentUpload};
use crate::models::{
    Attachment, Epic, Issue, Milestone, Project, ProjectListEntry, Task, UserStory, WikiPage,
};
use crate::params::{
    EpicListParams, IssueListParams, MilestoneListParams, ProjectListParams, ProjectScope,
    TaskListParams, UserStoryListParams,
};
use crate::Result;
use reqwest::Response;
use serde::de::{self, DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;
use taiga_core::query::QueryString;
use taiga_core::types::{Endpoint, ProjectRef};
use taiga_core::{Error, TaigaClient};
use tracing::debug;
use validator::Validate;

/// Identity shared by every Taiga object: numeric ID, owning project and version.
pub trait TaigaObject {
    /// Numeric ID (`0` until the server assigned one).
    fn id(&self) -> i64;

    /// ID of the owning project.
    fn project_id(&self) -> i64;

    /// OCC version stamp.
    fn version(&self) -> i64;
}

/// A resource served by a [`ResourceService`].
pub trait Resource:
    TaigaObject + Validate + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Collection endpoint.
    const ENDPOINT: Endpoint;

    /// Human-readable name used in error messages.
    const NAME: &'static str;

    /// Element type returned by the list endpoint.
    type Listed: DeserializeOwned + Into<Self>;

    /// Filter accepted by `list`.
    type Query: QueryString + Send + Sync;

    /// Overwrite the OCC version stamp.
    fn set_version(&mut self, version: i64);

    /// Check that every field the server requires on creation is present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] naming the missing fields.
    fn check_mandatory(&self) -> Result<()> {
        self.validate().map_err(|errors| {
            Error::ValidationError(format!(
                "a mandatory {} field is missing: {errors}",
                Self::NAME
            ))
        })
    }
}

/// Resources that accept file attachments.
pub trait Attachable: Resource {}

/// Resources addressable by their project-scoped ref.
pub trait Referenced: Resource {}

/// List responses, either a bare array or a paginated envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEnvelope<T> {
    /// Unpaginated list.
    Plain(Vec<T>),
    /// Paginated page.
    Paged {
        /// Items on this page.
        results: Vec<T>,
        /// Total number of items.
        count: Option<u64>,
        /// URL of the next page.
        next: Option<String>,
        /// URL of the previous page.
        previous: Option<String>,
    },
}

impl<T> ListEnvelope<T> {
    /// Unwrap the items in server order.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Plain(items) | Self::Paged { results: items, .. } => items,
        }
    }
}

// Decoded by hand so an element's own error (and its position) reaches the caller.
impl<'de, T: DeserializeOwned> Deserialize<'de> for ListEnvelope<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Array(items) => decode_items(items).map(Self::Plain),
            Value::Object(mut page) => {
                let results = match page.remove("results") {
                    Some(Value::Array(items)) => decode_items(items)?,
                    Some(other) => {
                        return Err(D::Error::custom(format!(
                            "`results` must be an array, found {other}"
                        )))
                    }
                    None => return Err(D::Error::missing_field("results")),
                };
                let text = |key: &str| page.get(key).and_then(Value::as_str).map(String::from);

                Ok(Self::Paged {
                    results,
                    count: page.get("count").and_then(Value::as_u64),
                    next: text("next"),
                    previous: text("previous"),
                })
            }
            other => Err(D::Error::custom(format!(
                "expected a list or a paginated page, found {other}"
            ))),
        }
    }
}

fn decode_items<T, E>(items: Vec<Value>) -> std::result::Result<Vec<T>, E>
where
    T: DeserializeOwned,
    E: de::Error,
{
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item)
                .map_err(|err| E::custom(format!("list item {index}: {err}")))
        })
        .collect()
}

/// Version stamp of a remote object, decoded from a full resource body.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
pub(crate) struct VersionStamp {
    #[serde(default)]
    pub version: i64,
}

/// CRUD operations for one resource type, optionally bound to a default project.
pub struct ResourceService<R> {
    client: TaigaClient,
    default_project: Option<i64>,
    endpoint: Endpoint,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            default_project: self.default_project,
            endpoint: self.endpoint,
            _resource: PhantomData,
        }
    }
}

impl<R> fmt::Debug for ResourceService<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceService")
            .field("endpoint", &self.endpoint)
            .field("default_project", &self.default_project)
            .finish_non_exhaustive()
    }
}

impl<R: Resource> ResourceService<R> {
    /// Create a service not bound to any project.
    #[must_use]
    pub fn new(client: TaigaClient) -> Self {
        Self {
            client,
            default_project: None,
            endpoint: R::ENDPOINT,
            _resource: PhantomData,
        }
    }

    /// Create a service whose unfiltered lists are scoped to `project_id`.
    #[must_use]
    pub fn for_project(client: TaigaClient, project_id: i64) -> Self {
        Self::new(client).with_default_project(project_id)
    }

    /// Bind unfiltered lists to `project_id`.
    #[must_use]
    pub fn with_default_project(mut self, project_id: i64) -> Self {
        self.default_project = (project_id != 0).then_some(project_id);
        self
    }

    /// The project unfiltered lists are scoped to.
    #[must_use]
    pub const fn default_project(&self) -> Option<i64> {
        self.default_project
    }

    /// The collection endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    /// The underlying transport.
    #[must_use]
    pub const fn client(&self) -> &TaigaClient {
        &self.client
    }

    /// List resources.
    ///
    /// The filter's query string is used when given; otherwise a bound service
    /// filters by its default project.
    pub async fn list(&self, filter: Option<&R::Query>) -> Result<Vec<R>> {
        let query = match (filter, self.default_project) {
            (Some(filter), _) => filter.to_pairs(),
            (None, Some(project)) => vec![("project", project.to_string())],
            (None, None) => Vec::new(),
        };

        let url = self.client.make_url(&[self.endpoint.as_str()], &query)?;
        let listed: ListEnvelope<R::Listed> = self.client.get_json(url).await?;
        Ok(listed.into_items().into_iter().map(Into::into).collect())
    }

    /// Fetch a resource by ID.
    pub async fn get(&self, id: i64) -> Result<R> {
        let url = self.item_url(id)?;
        self.client.get_json(url).await
    }

    /// Create a resource after checking its mandatory fields.
    pub async fn create(&self, resource: &R) -> Result<R> {
        resource.check_mandatory()?;

        let url = self.client.make_url(&[self.endpoint.as_str()], &[])?;
        self.client.post_json(url, resource).await
    }

    /// Edit a resource using Taiga's optimistic concurrency control.
    ///
    /// Fetches the current remote version, writes it into `resource` and PATCHes the
    /// full object. The server rejects the write if another edit lands in between.
    pub async fn edit(&self, resource: &mut R) -> Result<R> {
        let id = resource.id();
        if id == 0 {
            return Err(Error::ValidationError(format!(
                "passed {} does not have an ID yet. Does it exist?",
                R::NAME
            )));
        }

        let remote = self.get(id).await?;
        debug!(
            endpoint = %self.endpoint,
            id,
            local_version = resource.version(),
            remote_version = remote.version(),
            "Refreshed version before edit"
        );
        resource.set_version(remote.version());

        let url = self.item_url(id)?;
        self.client.patch_json(url, &*resource).await
    }

    /// Delete a resource by ID and return the raw response.
    pub async fn delete(&self, id: i64) -> Result<Response> {
        let url = self.item_url(id)?;
        self.client.delete(url).await
    }

    fn item_url(&self, id: i64) -> Result<url::Url> {
        self.client
            .make_url(&[self.endpoint.as_str(), &id.to_string()], &[])
    }
}

impl<R: Referenced> ResourceService<R> {
    /// Fetch a resource by its project-scoped ref.
    pub async fn get_by_ref(&self, reference: i64, project: impl Into<ProjectRef>) -> Result<R> {
        let url = self.client.make_url(
            &[self.endpoint.as_str(), "by_ref"],
            &[("ref", reference.to_string()), project.into().query_pair()],
        )?;
        self.client.get_json(url).await
    }
}

impl<R: Attachable> ResourceService<R> {
    /// Fetch one of this resource type's attachments.
    pub async fn get_attachment(&self, attachment_id: i64) -> Result<Attachment> {
        self.attachments()
            .get_attachment(attachment_id, self.endpoint)
            .await
    }

    /// List the attachments of `parent`.
    pub async fn list_attachments(&self, parent: &R) -> Result<Vec<Attachment>> {
        self.attachments()
            .list_attachments(parent, self.endpoint)
            .await
    }

    /// Upload a file and attach it to `parent`.
    pub async fn create_attachment(
        &self,
        upload: AttachmentUpload,
        parent: &R,
    ) -> Result<Attachment> {
        self.attachments()
            .create_attachment(upload, parent, self.endpoint)
            .await
    }

    fn attachments(&self) -> AttachmentService {
        AttachmentService::new(self.client.clone())
    }
}

macro_rules! resource {
    ($ty:ty, $endpoint:expr, listed = $listed:ty, query = $query:ty, project = $project:ident) => {
        impl TaigaObject for $ty {
            fn id(&self) -> i64 {
                self.id
            }

            fn project_id(&self) -> i64 {
                self.$project
            }

            fn version(&self) -> i64 {
                self.version
            }
        }

        impl Resource for $ty {
            const ENDPOINT: Endpoint = $endpoint;
            const NAME: &'static str = stringify!($ty);

            type Listed = $listed;
            type Query = $query;

            fn set_version(&mut self, version: i64) {
                self.version = version;
            }
        }
    };
}

resource!(
    Project,
    Endpoint::Projects,
    listed = ProjectListEntry,
    query = ProjectListParams,
    project = id
);
resource!(
    Issue,
    Endpoint::Issues,
    listed = Issue,
    query = IssueListParams,
    project = project
);
resource!(
    Task,
    Endpoint::Tasks,
    listed = Task,
    query = TaskListParams,
    project = project
);
resource!(
    Epic,
    Endpoint::Epics,
    listed = Epic,
    query = EpicListParams,
    project = project
);
resource!(
    UserStory,
    Endpoint::UserStories,
    listed = UserStory,
    query = UserStoryListParams,
    project = project
);
resource!(
    Milestone,
    Endpoint::Milestones,
    listed = Milestone,
    query = MilestoneListParams,
    project = project
);
resource!(
    WikiPage,
    Endpoint::Wiki,
    listed = WikiPage,
    query = ProjectScope,
    project = project
);

impl Attachable for Issue {}
impl Attachable for Task {}
impl Attachable for Epic {}
impl Attachable for UserStory {}
impl Attachable for WikiPage {}

impl Referenced for Issue {}
impl Referenced for Task {}
impl Referenced for Epic {}
impl Referenced for UserStory {}
