//! Input validation for signup fields.
//!
//! Pure functions with no side effects. The store enforces these inside
//! `register`; they are also public so form layers can check fields
//! before submitting.

/// Structural sanity check for an email address: `local@domain.tld`.
///
/// One or more non-whitespace, non-`@` characters, then `@`, then a
/// domain part containing a dot with at least one character on each
/// side. Deliberately not RFC-complete.
#[must_use]
pub fn is_valid_email(text: &str) -> bool {
    let valid_char = |c: char| !c.is_whitespace() && c != '@';

    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    if local.is_empty() || !local.chars().all(valid_char) {
        return false;
    }
    if domain.is_empty() || !domain.chars().all(valid_char) {
        return false;
    }

    // A dot somewhere strictly inside the domain part
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Exactly 10 ASCII digits, no separators.
#[must_use]
pub fn is_valid_phone(text: &str) -> bool {
    text.len() == 10 && text.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@example.co.uk"));
        assert!(is_valid_email("x@y.z"));
        assert!(is_valid_email("weird!#$%@domain.tld"));
    }

    #[test]
    fn test_email_structure_required() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@no.local"));
        assert!(!is_valid_email("nodomain@"));
        assert!(!is_valid_email("a@nodot"));
        assert!(!is_valid_email("a@.leadingdot"));
        assert!(!is_valid_email("a@trailingdot."));
    }

    #[test]
    fn test_email_rejects_whitespace_and_extra_at() {
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@b c.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn test_phone_valid() {
        assert!(is_valid_phone("1234567890"));
        assert!(is_valid_phone("0000000000"));
    }

    #[test]
    fn test_phone_invalid() {
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("123456789")); // 9 digits
        assert!(!is_valid_phone("12345678901")); // 11 digits
        assert!(!is_valid_phone("123-456-78"));
        assert!(!is_valid_phone("12345 6789"));
        assert!(!is_valid_phone("١٢٣٤٥٦٧٨٩٠")); // non-ASCII digits
    }
}
