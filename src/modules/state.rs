use log::info;

use crate::modules::auth::store::{load_users, save_users, UserDatabase};
use crate::modules::config::AppConfig;
use crate::modules::tasks::list::UserTasks;
use crate::modules::tasks::storage::{load_tasks, save_tasks};
use crate::modules::utils::csv_file::StorageError;

/// Everything a running session reads and mutates
pub struct AppState {
    pub config: AppConfig,
    pub users: UserDatabase,
    pub tasks: UserTasks,
}

impl AppState {
    /// Load both data files named by `config`
    pub fn load(config: AppConfig) -> Result<Self, StorageError> {
        let users = load_users(&config.users_file)?;
        let tasks = load_tasks(&config.tasks_file)?;
        info!(
            "Loaded {} users from {} and {} tasks from {}",
            users.len(),
            config.users_file.display(),
            tasks.task_count(),
            config.tasks_file.display()
        );
        Ok(Self::new(config, users, tasks))
    }

    pub fn new(config: AppConfig, users: UserDatabase, tasks: UserTasks) -> Self {
        Self {
            config,
            users,
            tasks,
        }
    }

    pub fn persist_users(&self) -> Result<(), StorageError> {
        save_users(&self.config.users_file, &self.users)
    }

    pub fn persist_tasks(&self) -> Result<(), StorageError> {
        save_tasks(&self.config.tasks_file, &self.tasks)
    }
}
