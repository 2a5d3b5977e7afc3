// src/modules/auth/user_interface.rs
use std::io::{self, BufRead, Write};

use super::store::User;
use crate::modules::state::AppState;
use crate::modules::tasks::user_interface::session_menu;
use crate::modules::utils::io::{is_input_closed, Console};
use crate::modules::utils::logging::{log_auth_event, log_data_operation};

const PASSWORD_POLICY: &str = "Please enter your password (Password must have at least 8 characters, and must contain at least one uppercase and lowercase letter, one number and one of the following symbols: @$!%*?&)";

/// Choices on the first menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuChoice {
    Register,
    Login,
    Exit,
}

impl MainMenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" | "register" => Some(MainMenuChoice::Register),
            "2" | "login" => Some(MainMenuChoice::Login),
            "3" | "exit" | "quit" => Some(MainMenuChoice::Exit),
            _ => None,
        }
    }
}

/// Function to show initial options when starting the program
pub fn show_initial_options<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    console.say("\nWelcome to the best to do list app")?;
    console.say("1.- Register")?;
    console.say("2.- Login")?;
    console.say("3.- Exit")
}

/// Main loop: register or log in, run the session, repeat until exit.
/// Closing the input ends the program like choosing exit.
pub fn main_auth_flow<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &mut AppState,
) -> io::Result<()> {
    match run_main_menu(console, state) {
        Err(e) if is_input_closed(&e) => console.say("cya"),
        other => other,
    }
}

fn run_main_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &mut AppState,
) -> io::Result<()> {
    loop {
        show_initial_options(console)?;
        let choice = console.read_line()?;

        let user = match MainMenuChoice::parse(&choice) {
            Some(MainMenuChoice::Register) => handle_interactive_registration(console, state)?,
            Some(MainMenuChoice::Login) => authenticate_user(console, state)?,
            Some(MainMenuChoice::Exit) => {
                console.say("cya")?;
                return Ok(());
            }
            None => {
                console.say("Invalid option. Please enter 1, 2 or 3.")?;
                continue;
            }
        };

        if let Some(user) = user {
            session_menu(console, state, &user)?;
            log_auth_event("logout", &user.username, true, None);
        }
    }
}

/// Prompt for the new account's details and register it.
/// Returns the new user, already logged in, or `None` after reporting the failure.
pub fn handle_interactive_registration<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &mut AppState,
) -> io::Result<Option<User>> {
    let email = console.prompt("Please enter your email")?;
    let username = console.prompt("Please enter your username")?;
    let password = console.prompt_secret(PASSWORD_POLICY)?;

    let user = match state.users.register_user(&email, &username, &password) {
        Ok(user) => user,
        Err(e) => {
            log_auth_event("register", &username, false, Some(&e.to_string()));
            console.say(e)?;
            return Ok(None);
        }
    };
    log_auth_event("register", &user.username, true, None);

    let users_file = state.config.users_file.display().to_string();
    if let Err(e) = state.persist_users() {
        // Roll back: the account never reached disk
        state.users.remove(&user.id);
        log_data_operation("save_users", &user.username, &users_file, false, Some(&e.to_string()));
        console.say(format!("Error writing to file: {}", e))?;
        return Ok(None);
    }
    log_data_operation("save_users", &user.username, &users_file, true, None);

    Ok(Some(user))
}

/// Prompt for credentials. Returns the user on success, `None` after reporting the failure.
pub fn authenticate_user<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &AppState,
) -> io::Result<Option<User>> {
    let id = console.prompt("Please enter your username or email")?;
    let password = console.prompt_secret("Please enter your password")?;

    match state.users.log_in(&id, &password) {
        Ok(user) => {
            log_auth_event("login", &user.username, true, None);
            Ok(Some(user))
        }
        Err(e) => {
            log_auth_event("login", &id, false, Some(&e.to_string()));
            console.say(e)?;
            Ok(None)
        }
    }
}
