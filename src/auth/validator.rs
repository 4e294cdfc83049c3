//! Format validators
//!
//! Pure boolean checks on username and password shape. No side effects and
//! no store access; callers decide what a failure means.

/// Validates the username shape: one or more lowercase ASCII letters
/// followed by zero or more ASCII digits. Uppercase letters, whitespace,
/// symbols, and any digit appearing before a letter all fail.
pub fn validate_username(username: &str) -> bool {
    let mut seen_letter = false;
    let mut seen_digit = false;

    for c in username.chars() {
        if c.is_ascii_lowercase() {
            if seen_digit {
                return false;
            }
            seen_letter = true;
        } else if c.is_ascii_digit() {
            if !seen_letter {
                return false;
            }
            seen_digit = true;
        } else {
            return false;
        }
    }

    seen_letter
}

/// Validates password strength: at least 6 characters with at least one
/// letter, one digit, and one character that is neither. Anything outside
/// the letter and digit classes counts as "special".
pub fn validate_password(password: &str) -> bool {
    if password.len() < 6 {
        return false;
    }

    let mut has_letter = false;
    let mut has_digit = false;
    let mut has_special = false;

    for c in password.chars() {
        if c.is_ascii_alphabetic() {
            has_letter = true;
        } else if c.is_ascii_digit() {
            has_digit = true;
        } else {
            has_special = true;
        }
    }

    has_letter && has_digit && has_special
}
