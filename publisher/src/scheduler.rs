use types::Platform;

/// Caption text every platform-specific caption starts from.
pub const CAPTION_BASE: &str = "Check out this video!";

pub const DEFAULT_POSTING_TIME: &str = "12:00 PM";

#[must_use]
pub const fn optimal_posting_time(platform: &Platform) -> &'static str {
    match platform {
        Platform::TikTok => "6:00 PM",
        Platform::Reels => "7:00 PM",
        Platform::YouTube => "3:00 PM",
        Platform::X => "12:00 PM",
        Platform::LinkedIn => "8:00 AM",
        Platform::Other(_) => DEFAULT_POSTING_TIME,
    }
}

#[must_use]
pub const fn hashtags(platform: &Platform) -> Option<&'static str> {
    match platform {
        Platform::TikTok => Some("#fyp #viral #trending"),
        Platform::Reels => Some("#reels #instagram #viral"),
        Platform::YouTube => Some("#shorts #youtube #trending"),
        Platform::X => Some("#viral #trending"),
        Platform::LinkedIn => Some("#professional #business #tips"),
        Platform::Other(_) => None,
    }
}

/// Unknown platforms get the text unchanged.
#[must_use]
pub fn generate_caption(platform: &Platform, text: &str) -> String {
    match hashtags(platform) {
        Some(tags) => format!("{text} {tags}"),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posting_times() {
        assert_eq!(optimal_posting_time(&Platform::TikTok), "6:00 PM");
        assert_eq!(optimal_posting_time(&Platform::LinkedIn), "8:00 AM");
        assert_eq!(optimal_posting_time(&Platform::from("bebo")), "12:00 PM");
    }

    #[test]
    fn test_captions_end_with_platform_hashtags() {
        assert_eq!(
            generate_caption(&Platform::Reels, CAPTION_BASE),
            "Check out this video! #reels #instagram #viral"
        );
        assert_eq!(
            generate_caption(&Platform::X, CAPTION_BASE),
            "Check out this video! #viral #trending"
        );
        assert_eq!(generate_caption(&Platform::from("bebo"), CAPTION_BASE), CAPTION_BASE);
    }
}
