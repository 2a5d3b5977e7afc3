use std::path::{Path, PathBuf};

use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::{DEFAULT_DATA_DIR, LOG_FILE, TASKS_FILE, USERS_FILE};

/// Where the application keeps its files and how loudly it logs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub users_file: PathBuf,
    pub tasks_file: PathBuf,
    pub log_file: PathBuf,
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_data_dir(DEFAULT_DATA_DIR)
    }
}

impl AppConfig {
    /// Default file names inside `data_dir`
    pub fn with_data_dir(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            users_file: data_dir.join(USERS_FILE),
            tasks_file: data_dir.join(TASKS_FILE),
            log_file: PathBuf::from(LOG_FILE),
            verbose: false,
        }
    }

    /// Resolve the configuration from parsed command-line arguments
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let data_dir = matches
            .get_one::<PathBuf>("data-dir")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        let mut config = Self::with_data_dir(data_dir);

        if let Some(users_file) = matches.get_one::<PathBuf>("users-file") {
            config.users_file = users_file.clone();
        }
        if let Some(tasks_file) = matches.get_one::<PathBuf>("tasks-file") {
            config.tasks_file = tasks_file.clone();
        }
        if let Some(log_file) = matches.get_one::<PathBuf>("log-file") {
            config.log_file = log_file.clone();
        }
        config.verbose = matches.get_flag("verbose");
        config
    }
}

/// Define the command-line interface
pub fn build_cli() -> Command {
    Command::new("todo-ledger")
        .about("A terminal to-do list with user accounts")
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .value_name("DIR")
                .help("Directory holding users.csv and tasks.csv")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("users-file")
                .long("users-file")
                .value_name("FILE")
                .help("Users file, overriding the one in the data directory")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("tasks-file")
                .long("tasks-file")
                .value_name("FILE")
                .help("Tasks file, overriding the one in the data directory")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .value_name("FILE")
                .help("Where to append log output")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug details")
                .action(ArgAction::SetTrue),
        )
}
