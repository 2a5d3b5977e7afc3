pub mod password;
pub mod store;
pub mod user_interface;
pub mod validation;

// Re-export the main types and functions
pub use password::{hash_password, hash_password_with_rounds, verify_password};
pub use store::{AuthError, User, UserDatabase};
pub use user_interface::main_auth_flow;
pub use validation::{validate_email, validate_password, validate_username};
