//! Image pool for data assets
//!
//! The default pool mixes working placeholder URLs with malformed entries
//! so downstream consumers see broken images too.

use url::Url;

/// Built-in image references. The empty entry means "no image".
pub const DEFAULT_IMAGES: &[&str] = &[
    "https://picsum.photos/200/300",
    "https://picsum.photos/200",
    "https://picsum.photos/480/640",
    "https://picsum.photos/48",
    "https://picsum.photos/640/480",
    "https://picsum.photos/20/100",
    "https://picsum.photos/100/20",
    "https://picsum.photos/50/200",
    "https://picsum.photos/200/50",
    "invalid_url",
    "invalid.png",
    "",
];

/// What kind of reference an image pool entry is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    /// Parses as an absolute URL
    Absolute,
    /// Anything else that is non-empty (emitted as-is)
    Invalid,
    /// No image; the asset gets no `schema:image`
    Empty,
}

/// Classify an image pool entry
pub fn classify(image: &str) -> ImageKind {
    if image.is_empty() {
        ImageKind::Empty
    } else if Url::parse(image).is_ok() {
        ImageKind::Absolute
    } else {
        ImageKind::Invalid
    }
}

/// The default pool as owned strings
pub fn default_pool() -> Vec<String> {
    DEFAULT_IMAGES.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pool_contents() {
        let pool = default_pool();
        assert_eq!(pool.len(), 12);
        assert_eq!(
            pool.iter()
                .filter(|i| classify(i) == ImageKind::Absolute)
                .count(),
            9
        );
        assert_eq!(pool.last().map(String::as_str), Some(""));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("https://picsum.photos/48"), ImageKind::Absolute);
        assert_eq!(classify("invalid_url"), ImageKind::Invalid);
        assert_eq!(classify("invalid.png"), ImageKind::Invalid);
        assert_eq!(classify(""), ImageKind::Empty);
    }
}
