//! Social platform detection from URLs

use crate::types::PlatformTag;

/// Platform to domain table, checked in order; the first hit wins
pub static PLATFORM_DOMAINS: &[(PlatformTag, &str)] = &[
    (PlatformTag::Twitter, "twitter.com"),
    (PlatformTag::Facebook, "facebook.com"),
    (PlatformTag::Instagram, "instagram.com"),
    (PlatformTag::Linkedin, "linkedin.com"),
    (PlatformTag::Reddit, "reddit.com"),
    (PlatformTag::Youtube, "youtube.com"),
];

/// Identify the social platform a URL belongs to
///
/// Matching is a case-insensitive substring test against each domain, so
/// `mobile.twitter.com` and `https://www.reddit.com/r/rust` both resolve.
pub fn identify(url: &str) -> PlatformTag {
    let lowered = url.to_lowercase();
    PLATFORM_DOMAINS
        .iter()
        .find(|(_, domain)| lowered.contains(*domain))
        .map(|(tag, _)| *tag)
        .unwrap_or(PlatformTag::Unknown)
}
