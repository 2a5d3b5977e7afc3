use std::collections::HashMap;
use std::path::Path;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::password::{hash_password_with_rounds, verify_password};
use super::validation::{validate_email, validate_password, validate_username};
use crate::modules::utils::csv_file::{read_records, write_records, StorageError};
use crate::PASSWORD_HASH_ROUNDS;

/// Errors from registration and login. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    UsernameTooShort,
    UsernameTooLong,
    UsernameInvalidChars,
    PasswordTooShort,
    PasswordInvalidChars,
    InvalidEmail,
    UserNotFound,
    UsernameTaken,
    EmailTaken,
    WrongPassword,
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            AuthError::UsernameTooShort => "Username must be at least 3 characters long",
            AuthError::UsernameTooLong => "Username must be below 17 characters long",
            AuthError::UsernameInvalidChars => {
                "Username cannot contain spaces or special characters beside underscores and dots"
            }
            AuthError::PasswordTooShort => "Password must have at least 8 characters",
            AuthError::PasswordInvalidChars => {
                "Password must contain at least one uppercase and lowercase letter, one number and one of the following symbols: @$!%*?&"
            }
            AuthError::InvalidEmail => "Your email address is not in a valid format",
            AuthError::UserNotFound => "User not found",
            AuthError::UsernameTaken => "This username has already been registered",
            AuthError::EmailTaken => "This email has already been registered",
            AuthError::WrongPassword => "Incorrect password",
        };
        f.write_str(message)
    }
}

impl std::error::Error for AuthError {}

/// Represents a single registered account
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub password_hash: String,
}

/// Every registered user, reachable by email or by username
#[derive(Debug)]
pub struct UserDatabase {
    users: HashMap<Uuid, User>,
    users_by_email: HashMap<String, Uuid>,
    users_by_username: HashMap<String, Uuid>,
    hash_rounds: u32,
}

impl Default for UserDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl UserDatabase {
    pub fn new() -> Self {
        Self::with_hash_rounds(PASSWORD_HASH_ROUNDS)
    }

    /// Database whose new password hashes use `hash_rounds` PBKDF2 iterations
    pub fn with_hash_rounds(hash_rounds: u32) -> Self {
        Self {
            users: HashMap::new(),
            users_by_email: HashMap::new(),
            users_by_username: HashMap::new(),
            hash_rounds,
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// All users ordered by username
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users
            .values()
            .sorted_by(|a, b| a.username.cmp(&b.username))
    }

    /// Look a user up by email first, then by username
    pub fn get_user(&self, id: &str) -> Result<&User, AuthError> {
        self.users_by_email
            .get(id)
            .or_else(|| self.users_by_username.get(id))
            .and_then(|user_id| self.users.get(user_id))
            .ok_or(AuthError::UserNotFound)
    }

    /// Add an already-hashed user, as read back from disk
    pub fn insert(&mut self, user: User) -> Result<(), AuthError> {
        if self.users_by_email.contains_key(&user.email) {
            return Err(AuthError::EmailTaken);
        }
        if self.users_by_username.contains_key(&user.username) {
            return Err(AuthError::UsernameTaken);
        }
        self.users_by_email.insert(user.email.clone(), user.id);
        self.users_by_username.insert(user.username.clone(), user.id);
        self.users.insert(user.id, user);
        Ok(())
    }

    /// Drop a user from the record map and both indices
    pub fn remove(&mut self, id: &Uuid) -> Option<User> {
        let user = self.users.remove(id)?;
        self.users_by_email.remove(&user.email);
        self.users_by_username.remove(&user.username);
        Some(user)
    }

    /// Validate, hash and store a new account
    pub fn register_user(
        &mut self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let email = email.trim();
        validate_email(email)?;
        validate_username(username)?;
        validate_password(password)?;

        if self.get_user(email).is_ok() {
            return Err(AuthError::EmailTaken);
        }
        if self.get_user(username).is_ok() {
            return Err(AuthError::UsernameTaken);
        }

        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            username: username.to_string(),
            password_hash: hash_password_with_rounds(password, self.hash_rounds),
        };
        self.insert(user.clone())?;
        Ok(user)
    }

    /// Check credentials; `id` is a username or an email
    pub fn log_in(&self, id: &str, password: &str) -> Result<User, AuthError> {
        let user = self.get_user(id)?;
        if verify_password(password, &user.password_hash) {
            Ok(user.clone())
        } else {
            Err(AuthError::WrongPassword)
        }
    }
}

/// Read the users file. A missing file is an empty database.
pub fn load_users(path: &Path) -> Result<UserDatabase, StorageError> {
    load_users_with_rounds(path, PASSWORD_HASH_ROUNDS)
}

pub fn load_users_with_rounds(path: &Path, hash_rounds: u32) -> Result<UserDatabase, StorageError> {
    let mut users = UserDatabase::with_hash_rounds(hash_rounds);
    for (index, user) in read_records::<User>(path)?.into_iter().enumerate() {
        let username = user.username.clone();
        users.insert(user).map_err(|e| {
            StorageError::InvalidRecord(format!("row {} ({}): {}", index + 1, username, e))
        })?;
    }
    Ok(users)
}

/// Rewrite the users file from the database
pub fn save_users(path: &Path, users: &UserDatabase) -> Result<(), StorageError> {
    write_records(path, users.users())
}
