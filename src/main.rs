use log::{error, info};

use todo_ledger::auth::main_auth_flow;
use todo_ledger::config::build_cli;
use todo_ledger::utils::logging::initialize_logging;
use todo_ledger::{AppConfig, AppState, Console};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = build_cli().get_matches();
    let config = AppConfig::from_matches(&matches);

    initialize_logging(&config.log_file, config.verbose)?;

    let mut state = match AppState::load(config) {
        Ok(state) => state,
        Err(e) => {
            error!("Failed to load data files: {}", e);
            eprintln!("Could not load data files: {}", e);
            return Err(e.into());
        }
    };

    let mut console = Console::stdio();
    let session = main_auth_flow(&mut console, &mut state);

    // Each change is written as it happens; this catches anything left over,
    // also when the session stopped on an I/O error
    let saved = state.persist_tasks();
    if let Err(e) = &session {
        error!("Session aborted: {}", e);
    }
    if let Err(e) = &saved {
        error!("Failed to save tasks on exit: {}", e);
    }
    session?;
    saved?;
    info!("Session ended");
    Ok(())
}
