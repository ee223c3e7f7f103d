use std::time::Duration;

use oauth2::{
    AuthType, AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken,
    RedirectUrl, Scope, TokenResponse, TokenUrl, basic::BasicClient,
};
use redact::Secret;
use thiserror::Error;

pub const AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const YOUTUBE_UPLOAD_SCOPE: &str =
    "https://www.googleapis.com/auth/youtube.upload";

#[derive(Error, Debug)]
pub enum OAuthError {
    #[error("invalid OAuth endpoint: {0}")]
    InvalidUrl(#[from] oauth2::url::ParseError),
    #[error("Failed to exchange code for token: {0}")]
    Exchange(String),
}

#[derive(Debug, Clone)]
pub struct GoogleOAuthSettings {
    pub client_id: String,
    pub client_secret: Secret<String>,
    pub auth_url: String,
    pub token_url: String,
    pub redirect_url: String,
}

/// Tokens obtained from an authorization code. Nothing is stored server side.
#[derive(Debug)]
pub struct TokenGrant {
    pub access_token: Secret<String>,
    pub expires_in: Option<Duration>,
}

/// # Errors
/// If one of the configured endpoints is not a valid URL.
pub fn get_oauth_client(
    settings: &GoogleOAuthSettings,
) -> Result<BasicClient, OAuthError> {
    let client = BasicClient::new(
        ClientId::new(settings.client_id.clone()),
        Some(ClientSecret::new(
            settings.client_secret.expose_secret().clone(),
        )),
        AuthUrl::new(settings.auth_url.clone())?,
        Some(TokenUrl::new(settings.token_url.clone())?),
    )
    // credentials go in the form body, not a basic auth header
    .set_auth_type(AuthType::RequestBody)
    .set_redirect_uri(RedirectUrl::new(settings.redirect_url.clone())?);

    Ok(client)
}

/// Consent screen URL requesting offline access to YouTube uploads.
#[must_use]
pub fn authorization_url(client: &BasicClient) -> oauth2::url::Url {
    let (authorize_url, _csrf_state) = client
        .authorize_url(CsrfToken::new_random)
        .add_scope(Scope::new(YOUTUBE_UPLOAD_SCOPE.to_string()))
        .add_extra_param("access_type", "offline")
        .add_extra_param("prompt", "consent")
        .url();

    authorize_url
}

/// # Errors
/// If the token endpoint cannot be reached or rejects the code.
pub async fn exchange_code(
    client: &BasicClient,
    code: &str,
) -> Result<TokenGrant, OAuthError> {
    let token_response = client
        .exchange_code(AuthorizationCode::new(code.to_string()))
        .request_async(oauth2::reqwest::async_http_client)
        .await
        .map_err(|e| OAuthError::Exchange(e.to_string()))?;

    Ok(TokenGrant {
        access_token: Secret::new(
            token_response.access_token().secret().clone(),
        ),
        expires_in: token_response.expires_in(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings(token_url: &str) -> GoogleOAuthSettings {
        GoogleOAuthSettings {
            client_id: "client-123".to_string(),
            client_secret: Secret::new("shh".to_string()),
            auth_url: AUTH_URL.to_string(),
            token_url: token_url.to_string(),
            redirect_url: "http://localhost:3000/api/auth/youtube/callback"
                .to_string(),
        }
    }

    #[test]
    fn test_authorization_url_parameters() {
        let client = get_oauth_client(&settings(TOKEN_URL)).unwrap();

        let url = authorization_url(&client);
        let params: std::collections::HashMap<String, String> =
            url.query_pairs().into_owned().collect();

        assert!(url.as_str().starts_with(AUTH_URL));
        assert_eq!(params["client_id"], "client-123");
        assert_eq!(params["response_type"], "code");
        assert_eq!(params["scope"], YOUTUBE_UPLOAD_SCOPE);
        assert_eq!(params["access_type"], "offline");
        assert_eq!(params["prompt"], "consent");
        assert_eq!(
            params["redirect_uri"],
            "http://localhost:3000/api/auth/youtube/callback"
        );
    }

    #[test]
    fn test_invalid_endpoint_is_rejected() {
        assert!(matches!(
            get_oauth_client(&settings("not a url")),
            Err(OAuthError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_exchange_code_returns_access_token() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .and(body_string_contains("code=4%2F0Abc"))
            .and(body_string_contains("grant_type=authorization_code"))
            .and(body_string_contains("client_secret=shh"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "ya29.fresh",
                "token_type": "bearer",
                "expires_in": 3599,
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            get_oauth_client(&settings(&format!("{}/token", server.uri())))
                .unwrap();

        let grant = exchange_code(&client, "4/0Abc").await.unwrap();

        assert_eq!(grant.access_token.expose_secret(), "ya29.fresh");
        assert_eq!(grant.expires_in, Some(Duration::from_secs(3599)));
    }

    #[tokio::test]
    async fn test_exchange_code_surfaces_rejection() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "invalid_grant",
            })))
            .mount(&server)
            .await;

        let client =
            get_oauth_client(&settings(&format!("{}/token", server.uri())))
                .unwrap();

        let result = exchange_code(&client, "expired").await;

        assert!(matches!(result, Err(OAuthError::Exchange(_))));
    }
}
