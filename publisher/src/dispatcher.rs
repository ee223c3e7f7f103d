use std::collections::HashMap;
use std::time::Duration;

use redact::Secret;
use tracing::instrument;
use types::{Platform, PlatformPostResult};

use crate::client::{PlatformClient, PostOutcome, StubClient};
use crate::scheduler::{self, CAPTION_BASE};
use crate::youtube::YouTubeApi;

/// Posts one video to a list of platforms, one after another.
#[derive(Debug, Clone)]
pub struct PostDispatcher {
    http_client: reqwest::Client,
    stub_delay: Duration,
    youtube_upload_url: String,
}

impl PostDispatcher {
    #[must_use]
    pub fn new(
        http_client: reqwest::Client,
        stub_delay: Duration,
        youtube_upload_url: &str,
    ) -> Self {
        Self {
            http_client,
            stub_delay,
            youtube_upload_url: youtube_upload_url.to_string(),
        }
    }

    fn client_for(
        &self,
        platform: &Platform,
        youtube_access_token: Option<&Secret<String>>,
    ) -> Option<Box<dyn PlatformClient>> {
        match (platform, youtube_access_token) {
            (Platform::YouTube, Some(token)) => Some(Box::new(YouTubeApi::new(
                self.http_client.clone(),
                token.clone(),
                &self.youtube_upload_url,
            ))),
            _ => StubClient::for_platform(platform, self.stub_delay)
                .map(|stub| Box::new(stub) as Box<dyn PlatformClient>),
        }
    }

    /// Platforms are processed strictly in the given order with no
    /// parallelism. Unknown tags yield a failed result instead of an error.
    #[instrument(skip(self, youtube_access_token))]
    pub async fn dispatch(
        &self,
        video_url: &str,
        platforms: &[Platform],
        youtube_access_token: Option<&Secret<String>>,
    ) -> HashMap<String, PlatformPostResult> {
        let mut results = HashMap::with_capacity(platforms.len());

        for platform in platforms {
            let optimal_time = scheduler::optimal_posting_time(platform);
            let caption = scheduler::generate_caption(platform, CAPTION_BASE);

            let outcome = match self.client_for(platform, youtube_access_token) {
                Some(client) => client.post_video(video_url, &caption).await,
                None => {
                    tracing::warn!("unknown platform: {}", platform);
                    PostOutcome::failure("Unknown platform")
                }
            };

            tracing::info!(
                platform = platform.tag(),
                success = outcome.success,
                "posted video"
            );

            results.insert(
                platform.tag().to_string(),
                PlatformPostResult {
                    success: outcome.success,
                    post_id: outcome.post_id,
                    url: outcome.url,
                    short_url: outcome.short_url,
                    optimal_time: optimal_time.to_string(),
                    caption,
                    error: outcome.error,
                },
            );
        }

        results
    }
}
