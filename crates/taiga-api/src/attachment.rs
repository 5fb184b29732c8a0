//! Attachments for epics, user stories, tasks, issues and wiki pages.

use crate::models::Attachment;
use crate::resource::{ListEnvelope, TaigaObject};
use crate::Result;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use std::path::Path;
use taiga_core::query::{QueryParams, QueryString};
use taiga_core::types::Endpoint;
use taiga_core::{Error, TaigaClient};

/// A file to upload as an attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentUpload {
    /// File name sent with the file part.
    pub file_name: String,
    /// File contents.
    pub data: Bytes,
    /// Optional description.
    pub description: Option<String>,
    /// MIME type of the file part.
    pub content_type: Option<String>,
    /// Upload the attachment already marked as deprecated.
    pub is_deprecated: bool,
}

impl AttachmentUpload {
    /// Create an upload from in-memory contents.
    #[must_use]
    pub fn new(file_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            data: data.into(),
            description: None,
            content_type: None,
            is_deprecated: false,
        }
    }

    /// Read an upload from disk, named after the file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IoError`] if the file cannot be read.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                Error::IoError(format!("`{}` does not name a file", path.display()))
            })?
            .to_string();
        let data = tokio::fs::read(path).await?;
        Ok(Self::new(file_name, data))
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the MIME type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Mark the attachment as deprecated.
    #[must_use]
    pub const fn deprecated(mut self) -> Self {
        self.is_deprecated = true;
        self
    }

    fn into_form(self, object_id: i64, project: i64) -> Result<Form> {
        let length = self.data.len() as u64;
        let mut file = Part::stream_with_length(self.data, length).file_name(self.file_name);
        if let Some(content_type) = &self.content_type {
            file = file.mime_str(content_type)?;
        }

        let mut form = Form::new()
            .text("object_id", object_id.to_string())
            .text("project", project.to_string());
        if let Some(description) = self.description {
            form = form.text("description", description);
        }
        if self.is_deprecated {
            form = form.text("is_deprecated", "true");
        }

        Ok(form.part("attached_file", file))
    }
}

struct AttachmentFilter {
    object_id: i64,
    project: i64,
}

impl QueryString for AttachmentFilter {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push_nonzero("object_id", self.object_id);
        params.push_nonzero("project", self.project);
        params.into_pairs()
    }
}

/// Attachment operations for any attachable endpoint.
#[derive(Debug, Clone)]
pub struct AttachmentService {
    client: TaigaClient,
}

impl AttachmentService {
    /// Create a new attachment service.
    #[must_use]
    pub const fn new(client: TaigaClient) -> Self {
        Self { client }
    }

    /// Fetch an attachment by ID.
    pub async fn get_attachment(&self, attachment_id: i64, endpoint: Endpoint) -> Result<Attachment> {
        let url = self.client.make_url(
            &[endpoint.as_str(), "attachments", &attachment_id.to_string()],
            &[],
        )?;
        self.client.get_json(url).await
    }

    /// List the attachments of `parent`.
    pub async fn list_attachments(
        &self,
        parent: &impl TaigaObject,
        endpoint: Endpoint,
    ) -> Result<Vec<Attachment>> {
        let filter = AttachmentFilter {
            object_id: parent.id(),
            project: parent.project_id(),
        };
        let url = self
            .client
            .make_url(&[endpoint.as_str(), "attachments"], &filter.to_pairs())?;
        let listed: ListEnvelope<Attachment> = self.client.get_json(url).await?;
        Ok(listed.into_items())
    }

    /// Upload a file and attach it to `parent`.
    pub async fn create_attachment(
        &self,
        upload: AttachmentUpload,
        parent: &impl TaigaObject,
        endpoint: Endpoint,
    ) -> Result<Attachment> {
        if parent.id() == 0 {
            return Err(Error::ValidationError(
                "cannot attach a file to an object without an ID".into(),
            ));
        }

        let form = upload.into_form(parent.id(), parent.project_id())?;
        let url = self.client.make_url(&[endpoint.as_str(), "attachments"], &[])?;
        self.client.post_multipart(url, form).await
    }
}
