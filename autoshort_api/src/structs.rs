use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use agents::{OpenAiModel, Pipeline};
use publisher::{GoogleOAuthSettings, PostDispatcher, oauth, youtube};
use redact::Secret;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub openai_api_key: Option<Secret<String>>,
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
    #[serde(default)]
    pub openai_base_url: Option<String>,

    #[serde(default)]
    pub google_client_id: String,
    #[serde(default = "empty_secret")]
    pub google_client_secret: Secret<String>,
    #[serde(default = "default_google_auth_url")]
    pub google_auth_url: String,
    #[serde(default = "default_google_token_url")]
    pub google_token_url: String,
    #[serde(default = "default_youtube_upload_url")]
    pub youtube_upload_url: String,

    /// Application root the OAuth flow redirects back to.
    #[serde(default = "default_app_url")]
    pub app_url: String,

    #[serde(default = "default_post_delay_ms")]
    pub post_delay_ms: u64,
    #[serde(default = "default_listen_addr")]
    pub listen_addr: SocketAddr,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_openai_model() -> String {
    "gpt-4-turbo-preview".to_string()
}

fn empty_secret() -> Secret<String> {
    Secret::new(String::new())
}

fn default_google_auth_url() -> String {
    oauth::AUTH_URL.to_string()
}

fn default_google_token_url() -> String {
    oauth::TOKEN_URL.to_string()
}

fn default_youtube_upload_url() -> String {
    youtube::UPLOAD_URL.to_string()
}

fn default_app_url() -> String {
    "http://localhost:3000".to_string()
}

const fn default_post_delay_ms() -> u64 {
    1000
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

fn default_user_agent() -> String {
    concat!("autoshort/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Config {
    #[must_use]
    pub fn redirect_url(&self) -> String {
        format!(
            "{}/api/auth/youtube/callback",
            self.app_url.trim_end_matches('/')
        )
    }

    #[must_use]
    pub fn oauth_settings(&self) -> GoogleOAuthSettings {
        GoogleOAuthSettings {
            client_id: self.google_client_id.clone(),
            client_secret: self.google_client_secret.clone(),
            auth_url: self.google_auth_url.clone(),
            token_url: self.google_token_url.clone(),
            redirect_url: self.redirect_url(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub pipeline: Pipeline,
    pub dispatcher: PostDispatcher,
}

impl AppState {
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("failed to build http client: {:?}", e);
                reqwest::Client::new()
            });

        if config.openai_api_key.is_none() {
            tracing::warn!(
                "OPENAI_API_KEY is not set, generation will use built-in defaults"
            );
        }

        let model = OpenAiModel::new(
            config.openai_api_key.as_ref(),
            &config.openai_model,
            config.openai_base_url.as_deref(),
        );

        let dispatcher = PostDispatcher::new(
            http_client,
            Duration::from_millis(config.post_delay_ms),
            &config.youtube_upload_url,
        );

        Self {
            config: Arc::new(config),
            pipeline: Pipeline::new(Arc::new(model)),
            dispatcher,
        }
    }
}

impl as_app::ContextProvider<Config> for AppState {
    async fn new(config: Config) -> Self {
        Self::from_config(config)
    }
}
