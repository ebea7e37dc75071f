//! Form validation shared by the create and edit modals.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::domains::users::form::UserFields;

pub const MIN_NAME_LEN: usize = 3;
pub const MIN_USERNAME_LEN: usize = 3;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\S+@\S+\.\S+").expect("email pattern is a valid regex")
});

/// First rule a draft fails. Rules are checked name, email, username.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required and should be at least 3 characters")]
    Name,

    #[error("A valid email is required")]
    Email,

    #[error("Username is required and should be at least 3 characters")]
    Username,
}

/// Check `draft` against the rules in order, stopping at the first failure.
///
/// Lengths count Unicode scalar values, not UTF-16 code units, so a name like
/// `"😀a"` is two characters long and fails the name rule.
pub fn validate(draft: &impl UserFields) -> Result<(), ValidationError> {
    if draft.name().chars().count() < MIN_NAME_LEN {
        return Err(ValidationError::Name);
    }
    if !is_valid_email(draft.email()) {
        return Err(ValidationError::Email);
    }
    if draft.username().chars().count() < MIN_USERNAME_LEN {
        return Err(ValidationError::Username);
    }
    Ok(())
}

/// The message of the first failing rule, or an empty string when the draft
/// is valid.
pub fn validation_message(draft: &impl UserFields) -> String {
    validate(draft).err().map(|e| e.to_string()).unwrap_or_default()
}

pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && EMAIL_PATTERN.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use userdesk_model::NewUser;

    fn draft(name: &str, email: &str, username: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            username: username.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn short_name_wins_over_every_other_failure() {
        for (name, email, username) in [
            ("", "", ""),
            ("Al", "ann@x.com", "ann1"),
            ("Al", "not-an-email", "a"),
        ] {
            assert_eq!(
                validate(&draft(name, email, username)),
                Err(ValidationError::Name),
                "{name:?} {email:?} {username:?}"
            );
        }
    }

    #[test]
    fn email_is_checked_after_name() {
        for email in ["", "ann", "ann@x", "@x.com", "ann@.com", "ann @x.com"] {
            assert_eq!(
                validate(&draft("Ann", email, "")),
                Err(ValidationError::Email),
                "{email:?}"
            );
        }
    }

    #[test]
    fn pattern_is_unanchored_like_a_search() {
        // Matches because "b@x.com" is a substring with no whitespace
        assert!(is_valid_email("a b@x.com"));
        assert!(is_valid_email("first.last@sub.domain.org"));
    }

    #[test]
    fn username_is_checked_last() {
        assert_eq!(
            validate(&draft("Ann", "ann@x.com", "an")),
            Err(ValidationError::Username)
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert_eq!(validate(&draft("Zoë", "zoe@x.com", "zoë")), Ok(()));
    }

    #[test]
    fn astral_characters_count_once() {
        // Two scalar values, even though UTF-16 would see three units
        assert_eq!(
            validate(&draft("😀a", "ann@x.com", "ann1")),
            Err(ValidationError::Name)
        );
        assert_eq!(validate(&draft("😀ab", "ann@x.com", "ann1")), Ok(()));
    }

    #[test]
    fn valid_draft_yields_empty_message() {
        let valid = draft("Bob T", "bob@x.com", "bobt");
        assert_eq!(validate(&valid), Ok(()));
        assert_eq!(validation_message(&valid), "");
        assert_eq!(
            validation_message(&draft("Bob T", "bob", "bobt")),
            "A valid email is required"
        );
    }
}
