/*!
 * Posting generated videos to social platforms.
 *
 * TikTok, Reels, X and LinkedIn (and YouTube without a connected account)
 * are simulated by stub clients. YouTube with an access token goes through
 * the real resumable upload API.
 */
pub mod client;
pub mod dispatcher;
pub mod oauth;
pub mod scheduler;
pub mod youtube;

pub use client::{PlatformClient, PostOutcome, StubClient};
pub use dispatcher::PostDispatcher;
pub use oauth::{GoogleOAuthSettings, OAuthError, TokenGrant};
pub use youtube::{YouTubeApi, YouTubeError};
