use std::path::Path;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::list::UserTasks;
use super::model::{Task, TaskStatus};
use crate::modules::utils::csv_file::{read_records, write_records, StorageError};

/// One row of the tasks file
#[derive(Serialize, Deserialize, Debug)]
struct TaskRecord {
    user_id: Uuid,
    task_id: u32,
    name: String,
    description: String,
    date: String,
    status: TaskStatus,
}

impl TaskRecord {
    fn new(user_id: Uuid, task: &Task) -> Self {
        Self {
            user_id,
            task_id: task.id,
            name: task.name.trim().to_string(),
            description: task.description.trim().to_string(),
            date: task.date.trim().to_string(),
            status: task.status,
        }
    }

    fn into_task(self) -> (Uuid, Task) {
        let task = Task {
            id: self.task_id,
            name: self.name,
            description: self.description,
            date: self.date,
            status: self.status,
        };
        (self.user_id, task)
    }
}

/// Function to load every user's tasks from the tasks file
pub fn load_tasks(path: &Path) -> Result<UserTasks, StorageError> {
    let mut all = UserTasks::new();

    for (index, record) in read_records::<TaskRecord>(path)?.into_iter().enumerate() {
        if record.task_id == 0 {
            return Err(StorageError::InvalidRecord(format!(
                "row {}: task number must be positive",
                index + 1
            )));
        }
        let (user_id, task) = record.into_task();
        let list = all.for_user_mut(user_id);
        if list.get_task(task.id).is_ok() {
            return Err(StorageError::InvalidRecord(format!(
                "row {}: duplicate task number {}",
                index + 1,
                task.id
            )));
        }
        list.insert(task);
    }

    Ok(all)
}

/// Function to save every user's tasks, ordered by user then task number
pub fn save_tasks(path: &Path, all: &UserTasks) -> Result<(), StorageError> {
    let records = all
        .iter()
        .sorted_by_key(|(user_id, _)| **user_id)
        .flat_map(|(user_id, list)| list.iter().map(move |task| TaskRecord::new(*user_id, task)));
    write_records(path, records)
}
