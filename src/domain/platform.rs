//! Per-platform copy and URL rules.
//!
//! Every lookup is keyed by the lower-cased platform name the session was
//! opened with. Platforms missing from a table fall back to a generic
//! template, except URL validation, where a missing allow-list means the
//! platform is unsupported.

use crate::error::ValidationError;

struct PlatformProfile {
    key: &'static str,
    url_example: Option<&'static str>,
    url_examples: &'static str,
    domains: &'static [&'static str],
}

const PROFILES: &[PlatformProfile] = &[
    PlatformProfile {
        key: "instagram",
        url_example: Some("https://instagram.com/username"),
        url_examples: "https://instagram.com/username or https://www.instagram.com/username",
        domains: &["instagram.com", "www.instagram.com", "ig.com", "www.ig.com"],
    },
    PlatformProfile {
        key: "tiktok",
        url_example: Some("https://tiktok.com/@username"),
        url_examples: "https://tiktok.com/@username or https://www.tiktok.com/@username",
        domains: &["tiktok.com", "www.tiktok.com", "vm.tiktok.com", "m.tiktok.com"],
    },
    PlatformProfile {
        key: "twitter",
        url_example: Some("https://twitter.com/username"),
        url_examples: "https://twitter.com/username or https://x.com/username",
        domains: &[
            "twitter.com",
            "www.twitter.com",
            "x.com",
            "www.x.com",
            "mobile.twitter.com",
        ],
    },
    PlatformProfile {
        key: "youtube",
        url_example: Some("https://youtube.com/@channelname"),
        url_examples: "https://youtube.com/@channel or https://youtu.be/channelid",
        domains: &[
            "youtube.com",
            "www.youtube.com",
            "youtu.be",
            "www.youtu.be",
            "m.youtube.com",
        ],
    },
    PlatformProfile {
        key: "snapchat",
        // allow-listed, but prompts with the generic example
        url_example: None,
        url_examples: "https://snapchat.com/add/username or https://t.snapchat.com/username",
        domains: &["snapchat.com", "www.snapchat.com", "t.snapchat.com"],
    },
];

/// Greeting copy per (platform, service).
const GREETINGS: &[(&str, &str, &str)] = &[
    ("instagram", "followers", "Hey buddy! Ready to boost your Instagram presence? How many followers would you like to add to your account?"),
    ("instagram", "likes", "Hey buddy! Let's get your Instagram posts trending! How many likes do you need?"),
    ("instagram", "comments", "Hey buddy! Want to spark engagement on your Instagram? How many comments would you like?"),
    ("instagram", "views", "Hey buddy! Time to increase your Instagram reach! How many views do you want?"),
    ("tiktok", "followers", "Hey buddy! Ready to go viral on TikTok? How many followers should we add?"),
    ("tiktok", "likes", "Hey buddy! Let's make your TikTok blow up! How many likes do you need?"),
    ("tiktok", "comments", "Hey buddy! Want your TikTok to get buzzing? How many comments would you like?"),
    ("tiktok", "views", "Hey buddy! Time to boost your TikTok views! How many views do you want?"),
    ("twitter", "followers", "Hey buddy! Ready to grow your Twitter influence? How many followers do you need?"),
    ("twitter", "likes", "Hey buddy! Let's get your tweets noticed! How many likes would you like?"),
    ("twitter", "comments", "Hey buddy! Want more engagement on Twitter? How many comments do you need?"),
    ("twitter", "views", "Hey buddy! Time to expand your Twitter reach! How many views do you want?"),
    ("youtube", "followers", "Hey buddy! Ready to build your YouTube channel? How many subscribers do you need?"),
    ("youtube", "likes", "Hey buddy! Let's boost your YouTube videos! How many likes would you like?"),
    ("youtube", "comments", "Hey buddy! Want more interaction on YouTube? How many comments do you need?"),
    ("youtube", "views", "Hey buddy! Time to increase your YouTube views! How many views do you want?"),
];

fn profile(platform: &str) -> Option<&'static PlatformProfile> {
    let key = platform.to_lowercase();
    PROFILES.iter().find(|p| p.key == key)
}

fn generic_url(platform: &str) -> String {
    format!("https://{}.com/username", platform.to_lowercase())
}

/// Opening line of a conversation.
pub fn greeting(platform: &str, service: &str) -> String {
    let platform_key = platform.to_lowercase();
    let service_key = service.to_lowercase();
    GREETINGS
        .iter()
        .find(|(p, s, _)| *p == platform_key && *s == service_key)
        .map(|(_, _, text)| (*text).to_string())
        .unwrap_or_else(|| {
            format!("Hey buddy! How many {service_key} do you want for your {platform} account?")
        })
}

/// Single example URL shown when asking for the profile link.
pub fn url_example(platform: &str) -> String {
    profile(platform)
        .and_then(|p| p.url_example)
        .map(str::to_string)
        .unwrap_or_else(|| generic_url(platform))
}

/// Example URLs listed after a rejected link.
pub fn url_examples(platform: &str) -> String {
    profile(platform)
        .map(|p| p.url_examples.to_string())
        .unwrap_or_else(|| generic_url(platform))
}

/// Checks a pasted link against the platform's domain allow-list.
pub fn validate_url(platform: &str, text: &str) -> Result<(), ValidationError> {
    let domains = profile(platform)
        .map(|p| p.domains)
        .ok_or_else(|| ValidationError::UnsupportedPlatform(platform.to_string()))?;

    let cleaned = text.trim().to_lowercase();
    let has_domain = domains.iter().any(|d| cleaned.contains(d));
    // Implied by `has_domain`; kept so the acceptance rule stays two-part.
    let looks_like_url = cleaned.contains("http")
        || cleaned.contains("www.")
        || domains.iter().any(|d| cleaned.contains(d));

    if has_domain && looks_like_url {
        Ok(())
    } else {
        Err(ValidationError::InvalidUrl(platform.to_string()))
    }
}
