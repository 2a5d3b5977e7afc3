use std::collections::{BTreeMap, HashMap};

use uuid::Uuid;

use super::model::{Task, TaskError, TaskField, TaskStatus};
use crate::modules::utils::date::{format_due_date, parse_due_date};

/// One user's tasks keyed by task number
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: BTreeMap<u32, Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    /// Store a task under its own id, replacing any task with that id
    pub fn insert(&mut self, task: Task) {
        self.tasks.insert(task.id, task);
    }

    pub fn get_task(&self, id: u32) -> Result<&Task, TaskError> {
        self.tasks.get(&id).ok_or(TaskError::TaskNotFound)
    }

    fn get_task_mut(&mut self, id: u32) -> Result<&mut Task, TaskError> {
        self.tasks.get_mut(&id).ok_or(TaskError::TaskNotFound)
    }

    /// One past the highest id; fails once `u32::MAX` is taken
    fn next_id(&self) -> Result<u32, TaskError> {
        match self.tasks.keys().next_back() {
            Some(last) => last.checked_add(1).ok_or(TaskError::TaskLimitReached),
            None => Ok(1),
        }
    }

    /// Create a pending task and return a copy of it
    pub fn add_task(&mut self, name: &str, description: &str, date: &str) -> Result<Task, TaskError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TaskError::EmptyName);
        }
        let date = parse_due_date(date).ok_or(TaskError::InvalidDate)?;

        let task = Task {
            id: self.next_id()?,
            name: name.to_string(),
            description: description.trim().to_string(),
            date: format_due_date(date),
            status: TaskStatus::Pending,
        };
        self.insert(task.clone());
        Ok(task)
    }

    pub fn delete_task(&mut self, id: u32) -> Result<(), TaskError> {
        self.tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(TaskError::TaskNotFound)
    }

    /// Change one field of a task, named as in `TaskField`
    pub fn update_field(&mut self, id: u32, field: &str, new_value: &str) -> Result<Task, TaskError> {
        let task = self.get_task_mut(id)?;
        let new_value = new_value.trim();

        match field.parse::<TaskField>()? {
            TaskField::Name => {
                if new_value.is_empty() {
                    return Err(TaskError::EmptyName);
                }
                task.name = new_value.to_string();
            }
            TaskField::Description => task.description = new_value.to_string(),
            TaskField::Date => {
                let date = parse_due_date(new_value).ok_or(TaskError::InvalidDate)?;
                task.date = format_due_date(date);
            }
        }
        Ok(task.clone())
    }

    pub fn complete_task(&mut self, id: u32) -> Result<(), TaskError> {
        self.get_task_mut(id)?.status = TaskStatus::Complete;
        Ok(())
    }
}

/// Task lists for every user, keyed by user id
#[derive(Debug, Clone, Default)]
pub struct UserTasks {
    lists: HashMap<Uuid, TaskList>,
}

impl UserTasks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_user(&self, user_id: &Uuid) -> Option<&TaskList> {
        self.lists.get(user_id)
    }

    /// The user's list, created empty on first use
    pub fn for_user_mut(&mut self, user_id: Uuid) -> &mut TaskList {
        self.lists.entry(user_id).or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Uuid, &TaskList)> {
        self.lists.iter()
    }

    /// Total number of tasks across all users
    pub fn task_count(&self) -> usize {
        self.lists.values().map(TaskList::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        Task {
            id: 1,
            name: "Make a test function".to_string(),
            description: "Jesse we need to test".to_string(),
            date: "31-05-2024".to_string(),
            status: TaskStatus::Pending,
        }
    }

    fn sample_list() -> TaskList {
        let mut list = TaskList::new();
        list.insert(sample_task());
        list
    }

    #[test]
    fn test_get_task() {
        let list = sample_list();
        assert_eq!(list.get_task(1).unwrap(), &sample_task());
        assert_eq!(list.get_task(2).unwrap_err(), TaskError::TaskNotFound);
    }

    #[test]
    fn test_add_task() {
        let mut list = TaskList::new();
        let cases = [
            ("valid task", ("Make a test function", "Jesse we need to test", "20-03-2014"), None),
            ("empty name", ("", "lol", "02-06-2024"), Some(TaskError::EmptyName)),
            ("blank name", ("   ", "lol", "02-06-2024"), Some(TaskError::EmptyName)),
            ("invalid date", ("yea", "lol", "wtf wrong date?"), Some(TaskError::InvalidDate)),
        ];

        for (name, (task_name, description, date), expected_error) in cases {
            let result = list.add_task(task_name, description, date);
            match expected_error {
                None => {
                    let added = result.unwrap();
                    assert_eq!(added.name, task_name, "case: {}", name);
                    assert_eq!(added.description, description, "case: {}", name);
                    assert_eq!(added.date, date, "case: {}", name);
                    assert_eq!(added.status, TaskStatus::Pending, "case: {}", name);
                    assert_eq!(list.get_task(added.id).unwrap(), &added, "case: {}", name);
                }
                Some(error) => assert_eq!(result.unwrap_err(), error, "case: {}", name),
            }
        }
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_add_trims_fields() {
        let mut list = TaskList::new();
        let task = list
            .add_task("  Buy milk\n", " semi-skimmed \n", " 01-01-2025 ")
            .unwrap();
        assert_eq!(task.name, "Buy milk");
        assert_eq!(task.description, "semi-skimmed");
        assert_eq!(task.date, "01-01-2025");
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut list = TaskList::new();
        let first = list.add_task("one", "", "01-01-2025").unwrap();
        let second = list.add_task("two", "", "01-01-2025").unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        list.delete_task(1).unwrap();
        let third = list.add_task("three", "", "01-01-2025").unwrap();
        assert_eq!(third.id, 3);
        assert_eq!(list.get_task(2).unwrap().name, "two");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_add_after_highest_possible_id() {
        let mut list = TaskList::new();
        list.insert(Task {
            id: u32::MAX,
            ..sample_task()
        });

        assert_eq!(
            list.add_task("one more", "", "01-01-2025").unwrap_err(),
            TaskError::TaskLimitReached
        );
        assert_eq!(list.len(), 1);

        // Freeing the top id makes room again
        list.delete_task(u32::MAX).unwrap();
        assert_eq!(list.add_task("one more", "", "01-01-2025").unwrap().id, 1);
    }

    #[test]
    fn test_delete_task() {
        let mut list = sample_list();
        assert!(list.delete_task(1).is_ok());
        assert_eq!(list.get_task(1).unwrap_err(), TaskError::TaskNotFound);
        assert_eq!(list.delete_task(420).unwrap_err(), TaskError::TaskNotFound);
    }

    #[test]
    fn test_update_field() {
        let mut list = sample_list();
        let cases = [
            ("no fields given", "", "", Some(TaskError::InvalidField)),
            ("updating name", "name", "new name", None),
            ("updating description", "description", "jesse we tested", None),
            ("updating date", "date", "08-10-2024", None),
            ("updating name mixed case", "namE", "newer name", None),
            ("updating description mixed case", "descriptIon", "jesse we tested again", None),
            ("updating date mixed case", "dAte", "09-10-2024", None),
            ("untrimmed field name", "dAte ", "10-10-2024", None),
            ("update date with number", "3", "11-10-2024", None),
            ("update name with number", "1", "numbered name", None),
            ("invalid date", "date", "32-10-2024", Some(TaskError::InvalidDate)),
            ("empty name", "name", "  ", Some(TaskError::EmptyName)),
        ];

        for (name, field, value, expected_error) in cases {
            let before = list.get_task(1).unwrap().clone();
            let result = list.update_field(1, field, value);
            match expected_error {
                None => {
                    let updated = result.unwrap();
                    let stored = list.get_task(1).unwrap();
                    assert_eq!(&updated, stored, "case: {}", name);
                    let actual = match field.parse::<TaskField>().unwrap() {
                        TaskField::Name => &stored.name,
                        TaskField::Description => &stored.description,
                        TaskField::Date => &stored.date,
                    };
                    assert_eq!(actual, value, "case: {}", name);
                }
                Some(error) => {
                    assert_eq!(result.unwrap_err(), error, "case: {}", name);
                    assert_eq!(list.get_task(1).unwrap(), &before, "case: {}", name);
                }
            }
        }
    }

    #[test]
    fn test_update_nonexisting_task() {
        let mut list = sample_list();
        // A missing task is reported before an unknown field
        assert_eq!(
            list.update_field(3, "lol", "a").unwrap_err(),
            TaskError::TaskNotFound
        );
    }

    #[test]
    fn test_complete_task() {
        let mut list = sample_list();
        list.complete_task(1).unwrap();
        assert_eq!(list.get_task(1).unwrap().status, TaskStatus::Complete);

        // Completing twice is harmless
        list.complete_task(1).unwrap();
        assert_eq!(list.get_task(1).unwrap().status, TaskStatus::Complete);

        assert_eq!(list.complete_task(9).unwrap_err(), TaskError::TaskNotFound);
    }

    #[test]
    fn test_user_tasks() {
        let mut all = UserTasks::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        assert!(all.for_user(&alice).is_none());
        all.for_user_mut(alice).add_task("a", "", "01-01-2025").unwrap();
        all.for_user_mut(alice).add_task("b", "", "01-01-2025").unwrap();
        all.for_user_mut(bob).add_task("c", "", "01-01-2025").unwrap();

        assert_eq!(all.for_user(&alice).unwrap().len(), 2);
        // Ids are per user
        assert_eq!(all.for_user(&bob).unwrap().get_task(1).unwrap().name, "c");
        assert_eq!(all.task_count(), 3);
    }
}
