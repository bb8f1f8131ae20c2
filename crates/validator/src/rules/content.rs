//! Format rules
//!
//! Email, URL, and caller-supplied regex checks. The fixed patterns are
//! compiled once and shared via `LazyLock`.

use std::sync::LazyLock;

use crate::foundation::ValidationError;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

static URL_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap());

// ============================================================================
// EMAIL
// ============================================================================

crate::rule! {
    /// The input must look like an email address.
    ///
    /// Uses a simple but effective regex pattern; it does not attempt full
    /// RFC 5322 coverage.
    pub Email;
    check(input) { EMAIL_REGEX.is_match(input) }
    describe() { ValidationError::invalid_format("email") }
    fn email();
}

// ============================================================================
// URL
// ============================================================================

crate::rule! {
    /// The input must be an `http://` or `https://` URL.
    pub Url;
    check(input) { URL_REGEX.is_match(input) }
    describe() { ValidationError::invalid_format("url") }
    fn url();
}

// ============================================================================
// CALLER-SUPPLIED PATTERN
// ============================================================================

crate::rule! {
    /// The input must match a caller-supplied regular expression.
    ///
    /// Construction fails if the pattern does not compile; the fluent
    /// [`Validator::matches_pattern`](crate::Validator::matches_pattern)
    /// path degrades an invalid pattern to an always-failing rule instead.
    pub MatchesPattern { pattern: regex::Regex };
    check(self, input) { self.pattern.is_match(input) }
    describe(self) {
        ValidationError::new("pattern", "Must match the expected pattern")
            .with_param("pattern", self.pattern.as_str().to_string())
    }
    new(pattern: &str) -> regex::Error {
        Ok(Self { pattern: regex::Regex::new(pattern)? })
    }
    fn matches_pattern(pattern: &str) -> regex::Error;
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Rule;

    #[test]
    fn test_email() {
        let rule = email();
        assert!(rule.validate("user@example.com"));
        assert!(rule.validate("first.last+tag@sub.example.co"));
        assert!(!rule.validate("invalid"));
        assert!(!rule.validate("@example.com"));
        assert!(!rule.validate("user@"));
        assert!(!rule.validate(""));
    }

    #[test]
    fn test_url() {
        let rule = url();
        assert!(rule.validate("http://example.com"));
        assert!(rule.validate("https://example.com/path?q=1"));
        assert!(!rule.validate("invalid"));
        assert!(!rule.validate("ftp://example.com"));
    }

    #[test]
    fn test_matches_pattern() {
        let rule = matches_pattern(r"^\d{3}-\d{4}$").unwrap();
        assert!(rule.validate("123-4567"));
        assert!(!rule.validate("1234567"));
    }

    #[test]
    fn test_matches_pattern_rejects_bad_pattern() {
        assert!(matches_pattern("(unclosed").is_err());
    }

    #[test]
    fn test_describe_carries_pattern() {
        let err = matches_pattern(r"^\d+$").unwrap().describe();
        assert_eq!(err.code, "pattern");
        assert_eq!(err.param("pattern"), Some(r"^\d+$"));
    }
}
