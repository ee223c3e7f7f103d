use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Target social network for a post.
///
/// Any scalar deserializes: strings are matched exactly against the known
/// tags, and numbers or booleans become [`Platform::Other`] so one bad
/// entry is reported per platform instead of rejecting the request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Platform {
    TikTok,
    Reels,
    YouTube,
    X,
    LinkedIn,
    Other(String),
}

impl Platform {
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::TikTok => "tiktok",
            Self::Reels => "reels",
            Self::YouTube => "youtube",
            Self::X => "x",
            Self::LinkedIn => "linkedin",
            Self::Other(tag) => tag,
        }
    }

    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for Platform {
    fn from(tag: &str) -> Self {
        match tag {
            "tiktok" => Self::TikTok,
            "reels" => Self::Reels,
            "youtube" => Self::YouTube,
            "x" => Self::X,
            "linkedin" => Self::LinkedIn,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Platform {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<Platform> for String {
    fn from(platform: Platform) -> Self {
        platform.tag().to_string()
    }
}

struct PlatformVisitor;

impl Visitor<'_> for PlatformVisitor {
    type Value = Platform;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a platform tag")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Platform, E> {
        Ok(Platform::from(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Platform, E> {
        Ok(Platform::Other(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Platform, E> {
        Ok(Platform::Other(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Platform, E> {
        Ok(Platform::Other(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Platform, E> {
        Ok(Platform::Other(v.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Platform, E> {
        Ok(Platform::Other("null".to_string()))
    }
}

impl<'de> Deserialize<'de> for Platform {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PlatformVisitor)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
