use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static SLUG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]+-[a-z]+$").expect("slug pattern is valid"));

/// A stored paste, one document per paste.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paste {
    pub slug: String,
    pub data: String,
}

/// Check that a slug is two lowercase words joined by a dash.
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_PATTERN.is_match(slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_two_lowercase_words() {
        assert!(is_valid_slug("tangible-hornet"));
        assert!(is_valid_slug("a-b"));
    }

    #[test]
    fn rejects_other_shapes() {
        for slug in [
            "",
            "hornet",
            "invalid_sluggy_slug",
            "three-word-slug",
            "Upper-case",
            "digits-42",
            "-leading",
            "trailing-",
            "tangible-hornet\n",
        ] {
            assert!(!is_valid_slug(slug), "{slug:?} should be rejected");
        }
    }
}
