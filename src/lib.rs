//! Terminal to-do lists with per-user accounts, kept in CSV files.

mod modules;

pub use modules::{auth, config, state, tasks, utils};

pub use modules::auth::store::{User, UserDatabase};
pub use modules::config::AppConfig;
pub use modules::state::AppState;
pub use modules::tasks::model::Task;
pub use modules::tasks::list::{TaskList, UserTasks};
pub use modules::utils::io::Console;

/// Where the data files live unless `--data-dir` says otherwise
pub const DEFAULT_DATA_DIR: &str = "data";
pub const USERS_FILE: &str = "users.csv";
pub const TASKS_FILE: &str = "tasks.csv";
pub const LOG_FILE: &str = "application.log";
pub const PASSWORD_HASH_ROUNDS: u32 = 100_000;

/// PRF used for password key derivation
pub type HmacSha256 = hmac::Hmac<sha2::Sha256>;
