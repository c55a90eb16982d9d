use regex::Regex;
use std::sync::LazyLock;

/// Version 1 of the structural email grammar.
///
/// Accepts `local-part@domain.tld` where:
/// - the local part is one or more dot-separated atoms of letters, digits and
///   the RFC 5322 `atext` symbols (no leading, trailing or doubled dots)
/// - the domain is one or more hyphenated labels, each followed by a dot
/// - the top-level label is purely alphabetic
///
/// This is a syntax check only. It says nothing about deliverability.
pub const EMAIL_GRAMMAR_V1: &str = r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]+$";

/// Overall length limit from RFC 5321.
pub const MAX_EMAIL_LENGTH: usize = 254;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_GRAMMAR_V1).expect("EMAIL_GRAMMAR_V1 is a valid regex"));

/// Checks that `email` has the shape `local-part@domain.tld`.
///
/// # Examples
/// ```
/// use user_service::validation::email::is_valid_email;
///
/// assert!(is_valid_email("bob@yandex.com"));
/// assert!(is_valid_email("first.last+tag@mail.example.org"));
/// assert!(!is_valid_email("bob"));
/// assert!(!is_valid_email("bob@localhost"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    email.len() <= MAX_EMAIL_LENGTH && EMAIL_REGEX.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_standard_emails() {
        assert!(is_valid_email("bob@yandex.com"));
        assert!(is_valid_email("simple@example.com"));
        assert!(is_valid_email("very.common@example.com"));
        assert!(is_valid_email("x@example.io"));
        assert!(is_valid_email("user+tag@sub.example.co"));
        assert!(is_valid_email("USER@EXAMPLE.COM"));
    }

    #[test]
    fn valid_special_chars_in_local_part() {
        assert!(is_valid_email("!#$%&'*+-/=?^_`{}|~@example.com"));
        assert!(is_valid_email("o'brien@example.com"));
    }

    #[test]
    fn invalid_missing_at() {
        assert!(!is_valid_email("bob"));
        assert!(!is_valid_email("missing.example.com"));
        assert!(!is_valid_email("missing@"));
        assert!(!is_valid_email("@missing.com"));
        assert!(!is_valid_email("@"));
    }

    #[test]
    fn invalid_domain_suffix() {
        // No dot-separated suffix at all
        assert!(!is_valid_email("bob@localhost"));
        // Suffix must contain a letter
        assert!(!is_valid_email("bob@example.123"));
        assert!(!is_valid_email("bob@example."));
        assert!(!is_valid_email("bob@.com"));
    }

    #[test]
    fn invalid_local_parts() {
        assert!(!is_valid_email("no..dots@example.com"));
        assert!(!is_valid_email(".leading@example.com"));
        assert!(!is_valid_email("trailing.@example.com"));
        assert!(!is_valid_email("spaces unquoted@example.com"));
    }

    #[test]
    fn invalid_domains() {
        assert!(!is_valid_email("user@-hyphenstart.com"));
        assert!(!is_valid_email("user@hyphenend-.com"));
        assert!(!is_valid_email("user@double..dot.com"));
        assert!(!is_valid_email("user@under_score.com"));
        assert!(!is_valid_email("two@at@example.com"));
    }

    #[test]
    fn invalid_special_cases() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("   "));
        assert!(!is_valid_email(" bob@yandex.com"));
        assert!(!is_valid_email("bob@yandex.com\n"));
    }

    #[test]
    fn length_limit() {
        let local = "a".repeat(64);
        let domain = format!("{}.com", "b".repeat(MAX_EMAIL_LENGTH - 64 - 1 - 4));
        let at_limit = format!("{}@{}", local, domain);
        assert_eq!(at_limit.len(), MAX_EMAIL_LENGTH);
        assert!(is_valid_email(&at_limit));

        let over_limit = format!("a{}", at_limit);
        assert!(!is_valid_email(&over_limit));
    }
}
