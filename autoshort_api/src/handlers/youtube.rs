use axum::{
    extract::{Query, State},
    response::Redirect,
};
use publisher::{OAuthError, TokenGrant, oauth};
use reqwest::Url;
use tracing::instrument;
use types::{YouTubeAuthQuery, YouTubeCallbackQuery};

use super::non_empty;
use crate::error::{ApiError, ApiResult};
use crate::structs::{AppState, Config};

/// Starts the OAuth flow by sending the browser to Google's consent screen.
#[instrument(skip(state))]
pub async fn youtube_auth_handler(
    State(state): State<AppState>,
    Query(query): Query<YouTubeAuthQuery>,
) -> ApiResult<Redirect> {
    if query.action.as_deref() != Some("connect") {
        return Err(ApiError::bad_request("Invalid action"));
    }

    let client =
        oauth::get_oauth_client(&state.config.oauth_settings()).map_err(|e| {
            tracing::error!("failed to get YouTube OAuth client: {:?}", e);
            ApiError::internal(e.to_string())
        })?;

    Ok(Redirect::temporary(oauth::authorization_url(&client).as_str()))
}

/// Google redirects here after the user approves (or denies) access. The
/// access token is handed back to the browser; nothing is stored.
#[instrument(skip(state, query))]
pub async fn youtube_callback_handler(
    State(state): State<AppState>,
    Query(query): Query<YouTubeCallbackQuery>,
) -> ApiResult<Redirect> {
    if let Some(error) = non_empty(query.error) {
        tracing::warn!("authorization denied: {}", error);
        return app_redirect(&state.config, &[("error", error.as_str())]);
    }

    let Some(code) = non_empty(query.code) else {
        return Err(ApiError::bad_request("No authorization code"));
    };

    match exchange(&state.config, &code).await {
        Ok(grant) => {
            tracing::info!("YouTube account connected");

            let expires_in = grant.expires_in.map(|d| d.as_secs().to_string());
            let mut params = vec![
                ("youtube_connected", "true"),
                ("access_token", grant.access_token.expose_secret().as_str()),
            ];
            if let Some(expires_in) = expires_in.as_deref() {
                params.push(("expires_in", expires_in));
            }

            app_redirect(&state.config, &params)
        }
        Err(e) => {
            tracing::error!("OAuth callback error: {}", e);
            let message = e.to_string();
            app_redirect(
                &state.config,
                &[("error", "oauth_failed"), ("message", message.as_str())],
            )
        }
    }
}

async fn exchange(config: &Config, code: &str) -> Result<TokenGrant, OAuthError> {
    let client = oauth::get_oauth_client(&config.oauth_settings())?;

    oauth::exchange_code(&client, code).await
}

fn app_redirect(config: &Config, params: &[(&str, &str)]) -> ApiResult<Redirect> {
    let url = Url::parse_with_params(&config.app_url, params).map_err(|e| {
        tracing::error!("invalid app url {:?}: {:?}", config.app_url, e);
        ApiError::internal("invalid application url")
    })?;

    Ok(Redirect::temporary(url.as_str()))
}
