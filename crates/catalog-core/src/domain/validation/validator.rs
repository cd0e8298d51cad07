use crate::domain::validation::{Notification, ValidationError};

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 255;

/// Field rules for the `Genre` aggregate.
///
/// Stateless; every violation is appended to the caller's report and later
/// rules keep running. Name rules short-circuit among themselves, so one
/// pass yields at most one name error.
pub struct GenreValidator;

impl GenreValidator {
    /// Append every violation for the candidate fields to `notification`.
    ///
    /// The active flag carries no rule; it is accepted so the signature
    /// covers every field the aggregate validates.
    pub fn validate(name: Option<&str>, _active: bool, notification: &mut Notification) {
        Self::check_name_constraints(name, notification);
    }

    /// Validate into a fresh report.
    pub fn check(name: Option<&str>, active: bool) -> Notification {
        let mut notification = Notification::create();
        Self::validate(name, active, &mut notification);
        notification
    }

    fn check_name_constraints(name: Option<&str>, notification: &mut Notification) {
        let Some(name) = name else {
            notification.append(ValidationError::new("'name' should not be null"));
            return;
        };

        let trimmed = trim_controls(name);
        if trimmed.is_empty() {
            notification.append(ValidationError::new("'name' should not be empty"));
            return;
        }

        let length = trimmed.chars().count();
        if !(NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&length) {
            notification.append(ValidationError::new(format!(
                "'name' must be between {} and {} characters",
                NAME_MIN_LENGTH, NAME_MAX_LENGTH
            )));
        }
    }
}

/// Strip leading and trailing spaces and control characters (`<= U+0020`).
/// Other Unicode whitespace, such as U+3000, counts toward the name.
fn trim_controls(name: &str) -> &str {
    name.trim_matches(|c: char| c <= ' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(name: Option<&str>) -> Vec<String> {
        GenreValidator::check(name, true)
            .errors()
            .iter()
            .map(|e| e.message().to_string())
            .collect()
    }

    #[test]
    fn null_name_reports_only_null() {
        assert_eq!(messages(None), ["'name' should not be null"]);
    }

    #[test]
    fn blank_name_reports_empty() {
        assert_eq!(messages(Some("")), ["'name' should not be empty"]);
        assert_eq!(messages(Some("   ")), ["'name' should not be empty"]);
    }

    #[test]
    fn only_ascii_space_and_controls_are_trimmed() {
        assert_eq!(messages(Some("\t\n \r")), ["'name' should not be empty"]);
        assert!(messages(Some("\u{3000}\u{3000}\u{3000}")).is_empty());
        assert_eq!(
            messages(Some("\u{3000}\u{3000}")),
            ["'name' must be between 3 and 255 characters"]
        );
    }

    #[test]
    fn short_name_after_trim_reports_length() {
        assert_eq!(
            messages(Some("Fi ")),
            ["'name' must be between 3 and 255 characters"]
        );
    }

    #[test]
    fn long_name_reports_length() {
        let name = "a".repeat(256);
        assert_eq!(
            messages(Some(&name)),
            ["'name' must be between 3 and 255 characters"]
        );
    }

    #[test]
    fn boundary_lengths_are_accepted() {
        assert!(messages(Some("abc")).is_empty());
        assert!(messages(Some(&"a".repeat(255))).is_empty());
        assert!(messages(Some("  abc  ")).is_empty());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 3 characters, 5 bytes.
        assert!(messages(Some("Açã")).is_empty());
        assert!(messages(Some(&"ç".repeat(255))).is_empty());
    }

    #[test]
    fn active_flag_has_no_rule() {
        assert!(!GenreValidator::check(Some("Drama"), false).has_error());
    }

    #[test]
    fn appends_after_existing_errors() {
        let mut notification = Notification::from_error(ValidationError::new("earlier"));
        GenreValidator::validate(None, true, &mut notification);
        assert_eq!(
            notification.to_string(),
            "earlier; 'name' should not be null"
        );
    }
}
