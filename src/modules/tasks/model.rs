use serde::{Deserialize, Serialize};

/// Errors from task operations. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    TaskNotFound,
    InvalidDate,
    EmptyName,
    InvalidField,
    TaskLimitReached,
}

impl std::fmt::Display for TaskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            TaskError::TaskNotFound => "Task not found",
            TaskError::InvalidDate => "Date format is invalid",
            TaskError::EmptyName => "Task cannot have an empty name",
            TaskError::InvalidField => "The selected field does not exist",
            TaskError::TaskLimitReached => "No more task numbers are available",
        };
        f.write_str(message)
    }
}

impl std::error::Error for TaskError {}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Complete,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Complete => "complete",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Editable task fields, selectable by name or by menu number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Name,
    Description,
    Date,
}

impl std::str::FromStr for TaskField {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" | "1" => Ok(TaskField::Name),
            "description" | "2" => Ok(TaskField::Description),
            "date" | "3" => Ok(TaskField::Date),
            _ => Err(TaskError::InvalidField),
        }
    }
}

/// A single to-do entry; `date` holds the due date as entered (`DD-MM-YYYY`)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub date: String,
    pub status: TaskStatus,
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.-\t{:?}\t{:?}\t{:?}\t{:?}",
            self.id,
            self.name.trim(),
            self.description,
            self.date,
            self.status.as_str()
        )
    }
}
