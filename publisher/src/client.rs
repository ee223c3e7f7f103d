use std::time::Duration;

use async_trait::async_trait;
use types::Platform;

/// What a platform API reported for one post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostOutcome {
    pub success: bool,
    pub post_id: Option<String>,
    pub url: Option<String>,
    pub short_url: Option<String>,
    pub error: Option<String>,
}

impl PostOutcome {
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Default::default()
        }
    }
}

#[async_trait]
pub trait PlatformClient: Send + Sync {
    async fn post_video(&self, video_url: &str, caption: &str) -> PostOutcome;
}

/// Simulated platform API: waits a fixed delay and reports success.
#[derive(Debug, Clone)]
pub struct StubClient {
    tag: &'static str,
    url: &'static str,
    delay: Duration,
}

impl StubClient {
    /// Returns `None` for platforms without a stub.
    #[must_use]
    pub const fn for_platform(platform: &Platform, delay: Duration) -> Option<Self> {
        let (tag, url) = match platform {
            Platform::TikTok => ("tiktok", "https://tiktok.com/@user/video/123"),
            Platform::Reels => ("reels", "https://instagram.com/p/123"),
            Platform::YouTube => ("youtube", "https://youtube.com/shorts/123"),
            Platform::X => ("x", "https://x.com/user/status/123"),
            Platform::LinkedIn => ("linkedin", "https://linkedin.com/feed/update/123"),
            Platform::Other(_) => return None,
        };

        Some(Self { tag, url, delay })
    }
}

#[async_trait]
impl PlatformClient for StubClient {
    async fn post_video(&self, video_url: &str, caption: &str) -> PostOutcome {
        tracing::debug!(
            platform = self.tag,
            video_url,
            caption,
            "simulating platform post"
        );

        tokio::time::sleep(self.delay).await;

        PostOutcome {
            success: true,
            post_id: Some(format!(
                "{}_{}",
                self.tag,
                chrono::Utc::now().timestamp_millis()
            )),
            url: Some(self.url.to_string()),
            ..Default::default()
        }
    }
}
