//! Video publishing, the one multi-step write operation.

use crate::client::{request_error, AparatApiClient};
use crate::errors::{ApiError, HttpError, Result};
use aparat_core::models::{UploadForm, UploadOptions, UploadPostEnvelope, Video};
use log::{debug, error, info};
use reqwest::multipart::{Form, Part};
use std::path::Path;

impl AparatApiClient {
    /// Publish a video file and return the created video's full entity.
    ///
    /// Four steps, each a failure point: assemble the multipart fields,
    /// attach the file as a streamed `video` part, POST to the form's
    /// server-assigned `formAction` URL, then look the fresh video up by the
    /// acknowledged `uid`. Every failure, including a lookup that comes back
    /// empty after the server accepted the POST, is logged with its cause
    /// and collapsed into the opaque [`ApiError::UploadFailed`].
    ///
    /// The file is streamed once and never buffered whole. There is no retry;
    /// a caller adding one must reopen the file before resubmitting, and
    /// should know that resubmitting the POST may create a duplicate video.
    pub async fn upload_post(
        &self,
        video_path: impl AsRef<Path>,
        title: &str,
        category: u32,
        form: &UploadForm,
        options: &UploadOptions,
    ) -> Result<Video> {
        match self
            .try_upload(video_path.as_ref(), title, category, form, options)
            .await
        {
            Ok(video) => Ok(video),
            Err(cause) => {
                error!("Upload failed: {}", cause);
                Err(ApiError::UploadFailed)
            }
        }
    }

    async fn try_upload(
        &self,
        video_path: &Path,
        title: &str,
        category: u32,
        form: &UploadForm,
        options: &UploadOptions,
    ) -> Result<Video> {
        debug!(
            "Uploading {} to {}",
            video_path.display(),
            form.form_action
        );

        let file = tokio::fs::File::open(video_path).await?;
        let length = file.metadata().await?.len();
        let file_name = video_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "video".to_string());

        let video_part = Part::stream_with_length(file, length)
            .file_name(file_name)
            .mime_str("application/octet-stream")
            .map_err(request_error)?;

        let mut body = Form::new();
        for (key, value) in upload_text_fields(&form.frm_id, title, category, options) {
            body = body.text(key, value);
        }
        let body = body.part("video", video_part);

        // Uploads target the server-assigned URL, not the fixed base path
        let response = self
            .client
            .post(&form.form_action)
            .multipart(body)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                error!("POST request failed for {}: {:?}", form.form_action, e);
                HttpError::Request(e)
            })?;

        debug!("Response status: {}", response.status());
        let response = self.handle_response(response).await?;

        let envelope: UploadPostEnvelope = response.json().await.map_err(request_error)?;
        let receipt = envelope.uploadpost.ok_or_else(|| {
            HttpError::UnexpectedResponse("upload acknowledgment carried no uploadpost".to_string())
        })?;

        info!("Upload accepted, created video {}", receipt.uid);

        // The acknowledgment is thin; hand back the fully populated entity
        let video = self.video(&receipt.uid).await?;
        video.ok_or_else(|| {
            HttpError::UnexpectedResponse(format!(
                "created video {} not visible on lookup",
                receipt.uid
            ))
            .into()
        })
    }
}

/// Assemble the text fields of the upload body in wire order.
///
/// Required fields first, then each present optional field under its
/// server-specific key. Absent options contribute nothing at all: the server
/// treats an omitted field and an empty one differently.
fn upload_text_fields(
    frm_id: &str,
    title: &str,
    category: u32,
    options: &UploadOptions,
) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("frm-id", frm_id.to_string()),
        ("data[title]", title.to_string()),
        ("data[category]", category.to_string()),
    ];

    if let Some(tags) = &options.tags {
        fields.push(("data[tags]", tags.join(",")));
    }
    if let Some(allow) = options.allow_comment {
        fields.push(("data[comment]", allow.to_string()));
    }
    if let Some(descr) = &options.description {
        fields.push(("data[descr]", descr.clone()));
    }
    if let Some(pass) = &options.video_pass {
        fields.push(("data[video_pass]", pass.clone()));
    }

    fields
}
