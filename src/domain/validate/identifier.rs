//! Syntactic checks on natural identifiers (slugs) supplied by callers.
//!
//! Validation never touches storage. A slug is rejected when it is empty,
//! contains any whitespace, or contains one of `! @ # $ % ^ & * ( )`.
//! Country codes are looked up directly and do not pass through here.

use crate::domain::error::LookupError;

/// Characters that may never appear in a slug.
pub const DISALLOWED_CHARS: &[char] = &['!', '@', '#', '$', '%', '^', '&', '*', '(', ')'];

/// Returns `true` if `identifier` is a syntactically acceptable slug.
pub fn is_valid_identifier(identifier: &str) -> bool {
    !identifier.is_empty()
        && !identifier
            .chars()
            .any(|c| c.is_whitespace() || DISALLOWED_CHARS.contains(&c))
}

/// Validates a caller-supplied slug, failing with `InvalidIdentifier`.
pub fn validate_identifier(identifier: &str) -> Result<(), LookupError> {
    if is_valid_identifier(identifier) {
        Ok(())
    } else {
        Err(LookupError::InvalidIdentifier {
            identifier: identifier.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_slugs() {
        for slug in ["greater-accra", "ashanti", "ho_west", "tema-1", "GH", "kpone-katamanso"] {
            assert!(validate_identifier(slug).is_ok(), "{slug} should be valid");
        }
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            validate_identifier(""),
            Err(LookupError::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn rejects_any_whitespace() {
        for slug in ["has space", " leading", "trailing ", "tab\there", "new\nline", "nbsp\u{00a0}x"] {
            assert!(!is_valid_identifier(slug), "{slug:?} should be invalid");
        }
    }

    #[test]
    fn rejects_each_disallowed_character() {
        for c in DISALLOWED_CHARS {
            let slug = format!("region{c}");
            assert!(!is_valid_identifier(&slug), "{slug} should be invalid");
        }
    }

    #[test]
    fn allows_punctuation_outside_the_disallowed_set() {
        for slug in ["a.b", "a+b", "a:b", "a'b", "a/b", "a~b"] {
            assert!(is_valid_identifier(slug), "{slug} should be valid");
        }
    }

    #[test]
    fn error_carries_the_rejected_identifier() {
        match validate_identifier("bad slug") {
            Err(LookupError::InvalidIdentifier { identifier }) => assert_eq!(identifier, "bad slug"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
