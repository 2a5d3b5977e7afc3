// src/modules/tasks/user_interface.rs
use std::io::{self, BufRead, Write};

use comfy_table::{presets, Table};

use super::list::TaskList;
use super::model::TaskError;
use crate::modules::auth::store::User;
use crate::modules::state::AppState;
use crate::modules::utils::io::Console;
use crate::modules::utils::logging::log_data_operation;

const TABLE_HEADER: [&str; 5] = ["Task Number", "Name", "Description", "Date", "Task Status"];

/// Choices on the per-user menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionChoice {
    AddTask,
    ListTasks,
    EditTask,
    DeleteTask,
    CompleteTask,
    LogOut,
}

impl SessionChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" | "add" => Some(SessionChoice::AddTask),
            "2" | "list" => Some(SessionChoice::ListTasks),
            "3" | "edit" => Some(SessionChoice::EditTask),
            "4" | "delete" => Some(SessionChoice::DeleteTask),
            "5" | "complete" => Some(SessionChoice::CompleteTask),
            "6" | "logout" => Some(SessionChoice::LogOut),
            _ => None,
        }
    }
}

/// Actions that pick one task by number and ask before applying
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfirmedAction {
    Delete,
    Complete,
}

impl ConfirmedAction {
    fn verb(self) -> &'static str {
        match self {
            ConfirmedAction::Delete => "delete",
            ConfirmedAction::Complete => "complete",
        }
    }

    fn in_progress(self) -> &'static str {
        match self {
            ConfirmedAction::Delete => "Deleting",
            ConfirmedAction::Complete => "Completing",
        }
    }

    fn done(self) -> &'static str {
        match self {
            ConfirmedAction::Delete => "deleted",
            ConfirmedAction::Complete => "marked as complete",
        }
    }

    fn apply(self, tasks: &mut TaskList, id: u32) -> Result<(), TaskError> {
        match self {
            ConfirmedAction::Delete => tasks.delete_task(id),
            ConfirmedAction::Complete => tasks.complete_task(id),
        }
    }
}

/// Render a user's tasks as a table ordered by task number
pub fn render_task_table(tasks: Option<&TaskList>) -> String {
    let mut table = Table::new();
    table.load_preset(presets::ASCII_MARKDOWN);
    table.set_header(TABLE_HEADER);

    for task in tasks.into_iter().flat_map(|list| list.iter()) {
        table.add_row(vec![
            task.id.to_string(),
            task.name.clone(),
            task.description.clone(),
            task.date.clone(),
            task.status.to_string(),
        ]);
    }

    table.to_string()
}

pub fn show_session_options<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    user: &User,
) -> io::Result<()> {
    console.say(format!(
        "\nWelcome {:?}, what would you like to do today",
        user.username
    ))?;
    console.say("1.- Add task")?;
    console.say("2.- See all tasks")?;
    console.say("3.- Edit task")?;
    console.say("4.- Delete task")?;
    console.say("5.- Mark task as complete")?;
    console.say("6.- Log out")
}

/// Per-user menu loop; returns when the user logs out
pub fn session_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &mut AppState,
    user: &User,
) -> io::Result<()> {
    loop {
        show_session_options(console, user)?;
        let choice = console.read_line()?;

        match SessionChoice::parse(&choice) {
            Some(SessionChoice::AddTask) => handle_add_command(console, state, user)?,
            Some(SessionChoice::ListTasks) => handle_list_command(console, state, user)?,
            Some(SessionChoice::EditTask) => handle_edit_command(console, state, user)?,
            Some(SessionChoice::DeleteTask) => {
                handle_confirmed_command(console, state, user, ConfirmedAction::Delete)?
            }
            Some(SessionChoice::CompleteTask) => {
                handle_confirmed_command(console, state, user, ConfirmedAction::Complete)?
            }
            Some(SessionChoice::LogOut) => return Ok(()),
            None => console.say("Invalid option. Please enter a number between 1 and 6.")?,
        }
    }
}

/// Handle the 'add' command, asking again until the task is valid
pub fn handle_add_command<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &mut AppState,
    user: &User,
) -> io::Result<()> {
    loop {
        let name = console.prompt("Enter the name of the task:")?;
        let description = console.prompt("Enter the description of the task:")?;
        let date = console.prompt("Enter the date when you want to complete the task (DD-MM-YYYY):")?;

        match state
            .tasks
            .for_user_mut(user.id)
            .add_task(&name, &description, &date)
        {
            Ok(task) => {
                console.say(format!("Successfully added new task: {}", task))?;
                return persist_tasks(console, state, user, "add_task", task.id);
            }
            Err(TaskError::TaskLimitReached) => return console.say(TaskError::TaskLimitReached),
            Err(e) => console.say(e)?,
        }
    }
}

/// Handle the 'list' command
pub fn handle_list_command<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &AppState,
    user: &User,
) -> io::Result<()> {
    let tasks = state.tasks.for_user(&user.id);
    console.say("Your tasks")?;
    console.say(render_task_table(tasks))?;
    if tasks.map_or(true, TaskList::is_empty) {
        console.say("No tasks available.")?;
    }
    Ok(())
}

/// Handle the 'edit' command: `<task number> <field> <new value>`
pub fn handle_edit_command<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &mut AppState,
    user: &User,
) -> io::Result<()> {
    loop {
        console.say("Enter the number of the task you want to edit, the field you want to change and the new value, or 0 to return to the previous menu. (example: '2 name New Name')")?;
        console.say(render_task_table(state.tasks.for_user(&user.id)))?;

        let input = console.read_line()?;
        if input == "0" {
            return Ok(());
        }

        let words: Vec<&str> = input.split_whitespace().collect();
        if words.len() < 3 {
            console.say("Please enter an appropriate input")?;
            continue;
        }
        let Ok(id) = words[0].parse::<u32>() else {
            console.say("Please enter a valid input for the task number")?;
            continue;
        };
        let new_value = words[2..].join(" ");

        match state
            .tasks
            .for_user_mut(user.id)
            .update_field(id, words[1], &new_value)
        {
            Ok(task) => {
                console.say(format!("Task updated: {}", task))?;
                return persist_tasks(console, state, user, "edit_task", task.id);
            }
            Err(e) => console.say(e)?,
        }
    }
}

/// Handle the 'delete' and 'complete' commands
fn handle_confirmed_command<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &mut AppState,
    user: &User,
    action: ConfirmedAction,
) -> io::Result<()> {
    loop {
        console.say(format!(
            "Select the number of the task you wish to {} or 0 to return to the previous menu",
            action.verb()
        ))?;
        console.say(render_task_table(state.tasks.for_user(&user.id)))?;

        let input = console.read_line()?;
        let id = match input.parse::<u32>() {
            Ok(0) => return Ok(()),
            Ok(id) => id,
            Err(_) => {
                console.say("Please enter a valid input for the task number")?;
                continue;
            }
        };

        let confirmed = console.confirm(&format!(
            "{} task #{}, type Y to confirm, any other input to cancel",
            action.in_progress(),
            id
        ))?;
        if !confirmed {
            continue;
        }

        match action.apply(state.tasks.for_user_mut(user.id), id) {
            Ok(()) => {
                console.say(format!("Task #{} {}", id, action.done()))?;
                let operation = format!("{}_task", action.verb());
                return persist_tasks(console, state, user, &operation, id);
            }
            Err(e) => console.say(e)?,
        }
    }
}

/// Write the tasks file after a change, reporting rather than failing on errors
fn persist_tasks<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &AppState,
    user: &User,
    operation: &str,
    task_id: u32,
) -> io::Result<()> {
    let resource = format!("task #{}", task_id);
    match state.persist_tasks() {
        Ok(()) => {
            log_data_operation(operation, &user.username, &resource, true, None);
            Ok(())
        }
        Err(e) => {
            log_data_operation(operation, &user.username, &resource, false, Some(&e.to_string()));
            console.say(format!("Error saving tasks: {}", e))
        }
    }
}
