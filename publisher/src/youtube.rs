use async_trait::async_trait;
use bytes::Bytes;
use redact::Secret;
use reqwest::header;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::instrument;

use crate::client::{PlatformClient, PostOutcome};

pub const UPLOAD_URL: &str = "https://www.googleapis.com/upload/youtube/v3/videos";

/// People & Blogs
const DEFAULT_CATEGORY_ID: &str = "22";

const SHORTS_HASHTAGS: &str = "#shorts #youtube #viral";

const DEFAULT_TITLE: &str = "Video Title";

#[derive(Error, Debug)]
pub enum YouTubeError {
    #[error("Failed to download video: {0}")]
    Download(reqwest::Error),
    #[error("request to YouTube failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to initiate upload: {0}")]
    InitiateUpload(String),
    #[error("No upload URL received from YouTube")]
    MissingUploadLocation,
    #[error("Upload failed: {0}")]
    Upload(String),
    #[error("Token refresh not implemented - needs OAuth client credentials")]
    TokenRefreshUnsupported,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrivacyStatus {
    #[default]
    Public,
    Unlisted,
    Private,
}

#[derive(Debug, Clone, Default)]
pub struct VideoOptions {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub privacy_status: PrivacyStatus,
    pub category_id: Option<String>,
}

/// Where the video binary comes from.
#[derive(Debug, Clone)]
pub enum VideoSource {
    /// Downloaded before uploading.
    Url(String),
    Bytes(Bytes),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedVideo {
    pub video_id: String,
    pub url: String,
    pub short_url: String,
}

impl UploadedVideo {
    fn new(video_id: String) -> Self {
        Self {
            url: format!("https://www.youtube.com/watch?v={video_id}"),
            short_url: format!("https://youtu.be/{video_id}"),
            video_id,
        }
    }
}

#[derive(Deserialize)]
struct UploadResponse {
    id: String,
}

/// YouTube Data API client acting on behalf of one connected account.
pub struct YouTubeApi {
    http_client: reqwest::Client,
    access_token: Secret<String>,
    upload_url: String,
}

impl YouTubeApi {
    #[must_use]
    pub fn new(
        http_client: reqwest::Client,
        access_token: Secret<String>,
        upload_url: &str,
    ) -> Self {
        Self {
            http_client,
            access_token,
            upload_url: upload_url.to_string(),
        }
    }

    /// Upload a video with the resumable protocol: post the metadata to
    /// obtain an upload location, then put the binary there. Neither step is
    /// retried.
    ///
    /// # Errors
    /// If downloading the source, either upload step, or parsing the final
    /// response fails.
    #[instrument(skip(self, source))]
    pub async fn upload_video(
        &self,
        source: VideoSource,
        options: &VideoOptions,
    ) -> Result<UploadedVideo, YouTubeError> {
        let video = self.fetch_video(source).await?;

        let upload_location = self.initiate_upload(options).await?;

        tracing::info!("Uploading {} bytes to YouTube", video.len());
        let response = self
            .http_client
            .put(&upload_location)
            .bearer_auth(self.access_token.expose_secret())
            .header(header::CONTENT_TYPE, "video/*")
            .body(video)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(YouTubeError::Upload(response.status().to_string()));
        }

        let result: UploadResponse = response.json().await?;

        Ok(UploadedVideo::new(result.id))
    }

    async fn fetch_video(&self, source: VideoSource) -> Result<Bytes, YouTubeError> {
        match source {
            VideoSource::Bytes(bytes) => Ok(bytes),
            VideoSource::Url(url) => {
                tracing::info!("Downloading video file: {}", url);
                let response = self
                    .http_client
                    .get(&url)
                    .send()
                    .await
                    .and_then(reqwest::Response::error_for_status)
                    .map_err(YouTubeError::Download)?;

                response.bytes().await.map_err(YouTubeError::Download)
            }
        }
    }

    /// Returns the session URI YouTube sends back in the `Location` header.
    ///
    /// # Errors
    /// If the request is rejected or the header is absent.
    pub async fn initiate_upload(
        &self,
        options: &VideoOptions,
    ) -> Result<String, YouTubeError> {
        let response = self
            .http_client
            .post(&self.upload_url)
            .query(&[("uploadType", "resumable"), ("part", "snippet,status")])
            .bearer_auth(self.access_token.expose_secret())
            .json(&json!({
                "snippet": {
                    "title": options.title,
                    "description": options.description,
                    "tags": options.tags,
                    "categoryId": options
                        .category_id
                        .as_deref()
                        .unwrap_or(DEFAULT_CATEGORY_ID),
                },
                "status": {
                    "privacyStatus": options.privacy_status,
                    "selfDeclaredMadeForKids": false,
                },
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(YouTubeError::InitiateUpload(format!("{status}: {body}")));
        }

        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(YouTubeError::MissingUploadLocation)?;

        Ok(location.to_string())
    }

    /// Publish a public Short from a hosted video.
    ///
    /// # Errors
    /// See [`Self::upload_video`].
    pub async fn publish_short(
        &self,
        video_url: &str,
        title: &str,
        description: &str,
    ) -> Result<UploadedVideo, YouTubeError> {
        self.upload_video(
            VideoSource::Url(video_url.to_string()),
            &VideoOptions {
                title: title.to_string(),
                description: format!("{description}\n\n{SHORTS_HASHTAGS}"),
                privacy_status: PrivacyStatus::Public,
                ..Default::default()
            },
        )
        .await
    }

    /// # Errors
    /// Always; refreshing requires the OAuth client credentials, which this
    /// client does not hold.
    pub async fn refresh_access_token(
        &self,
        _refresh_token: &str,
    ) -> Result<String, YouTubeError> {
        Err(YouTubeError::TokenRefreshUnsupported)
    }
}

#[async_trait]
impl PlatformClient for YouTubeApi {
    async fn post_video(&self, video_url: &str, caption: &str) -> PostOutcome {
        match self.publish_short(video_url, DEFAULT_TITLE, caption).await {
            Ok(video) => PostOutcome {
                success: true,
                post_id: Some(video.video_id),
                url: Some(video.url),
                short_url: Some(video.short_url),
                error: None,
            },
            Err(e) => {
                tracing::error!("YouTube upload error: {}", e);
                PostOutcome::failure(e.to_string())
            }
        }
    }
}
