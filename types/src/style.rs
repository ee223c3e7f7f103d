use std::fmt;

use serde::{Deserialize, Serialize};

/// Tone/visual theme requested for a video.
///
/// Unrecognized tags are kept verbatim so they can still be passed to the
/// language model; lookups treat them with each table's default entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Style {
    Professional,
    Brainrot,
    InfoEducational,
    Other(String),
}

impl Style {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Professional => "professional",
            Self::Brainrot => "brainrot",
            Self::InfoEducational => "infoeducational",
            Self::Other(tag) => tag,
        }
    }
}

impl From<&str> for Style {
    fn from(tag: &str) -> Self {
        match tag {
            "professional" => Self::Professional,
            "brainrot" => Self::Brainrot,
            "infoeducational" => Self::InfoEducational,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Style {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<Style> for String {
    fn from(style: Style) -> Self {
        style.as_str().to_string()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_tags() {
        assert_eq!(Style::from("professional"), Style::Professional);
        assert_eq!(Style::from("brainrot"), Style::Brainrot);
        assert_eq!(Style::from("infoeducational"), Style::InfoEducational);
        assert_eq!(Style::from("Professional"), Style::Other("Professional".into()));
        assert_eq!(Style::from("vaporwave").as_str(), "vaporwave");
    }
}
