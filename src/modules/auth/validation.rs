use lazy_static::lazy_static;
use regex::Regex;

use super::store::AuthError;

pub const USERNAME_MIN_LENGTH: usize = 3;
pub const USERNAME_MAX_LENGTH: usize = 17;
pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_SYMBOLS: &str = "@$!%*?&";

lazy_static! {
    static ref USERNAME_CHARS: Regex = Regex::new(r"^[a-zA-Z0-9_.]+$").unwrap();
    // A single mailbox: `local@domain`, optionally followed by a `(comment)`,
    // or `Display Name <local@domain>`. Both halves of the address are dot-atoms
    // and the display name is a run of words or quoted strings.
    static ref MAILBOX: Regex = {
        let atom = r"[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+";
        let dot_atom = format!(r"{atom}(?:\.{atom})*");
        let address = format!("{dot_atom}@{dot_atom}");
        let word = format!(r#"(?:{atom}|"[^"\\]*")"#);
        let phrase = format!(r"{word}(?:\s+{word})*");
        Regex::new(&format!(
            r"^(?:{address}(?:\s+\([^()]*\))?|(?:{phrase}\s*)?<{address}>)$"
        ))
        .unwrap()
    };
}

/// Function to validate a username against the length and character policy
pub fn validate_username(username: &str) -> Result<(), AuthError> {
    if username.len() < USERNAME_MIN_LENGTH {
        return Err(AuthError::UsernameTooShort);
    }
    if username.len() > USERNAME_MAX_LENGTH {
        return Err(AuthError::UsernameTooLong);
    }
    if !USERNAME_CHARS.is_match(username) {
        return Err(AuthError::UsernameInvalidChars);
    }
    Ok(())
}

/// Function to validate password strength
pub fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < PASSWORD_MIN_LENGTH {
        return Err(AuthError::PasswordTooShort);
    }
    let rules: [fn(char) -> bool; 4] = [
        |c| c.is_ascii_lowercase(),
        |c| c.is_ascii_uppercase(),
        |c| c.is_ascii_digit(),
        |c| PASSWORD_SYMBOLS.contains(c),
    ];
    if !rules.iter().all(|rule| password.chars().any(rule)) {
        return Err(AuthError::PasswordInvalidChars);
    }
    Ok(())
}

/// Function to validate email format
pub fn validate_email(email: &str) -> Result<(), AuthError> {
    if MAILBOX.is_match(email.trim()) {
        Ok(())
    } else {
        Err(AuthError::InvalidEmail)
    }
}
