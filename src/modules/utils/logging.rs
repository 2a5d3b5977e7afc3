use env_logger::{Builder, WriteStyle};
use log::{error, info, warn, LevelFilter};
use std::fs::{self, OpenOptions};
use std::path::Path;

/// Initialize the logging system.
///
/// Everything goes to the log file; the terminal belongs to the menus.
pub fn initialize_logging(log_file: &Path, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = log_file.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    // Create or append to log file
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    Builder::new()
        .filter_level(level)
        .format_timestamp_secs()
        .format_module_path(true)
        .write_style(WriteStyle::Never)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;

    info!("Logging system initialized at level {}", level);
    Ok(())
}

/// Mask an identifier, keeping two characters on each end
fn format_sensitive(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}***{}", head, tail)
}

/// Structured logging for authentication events
pub fn log_auth_event(event_type: &str, user: &str, success: bool, details: Option<&str>) {
    if success {
        info!(
            "Auth event: type={}, user={}, success=true, details={:?}",
            event_type,
            format_sensitive(user),
            details
        );
    } else {
        warn!(
            "Auth event: type={}, user={}, success=false, details={:?}",
            event_type,
            format_sensitive(user),
            details
        );
    }
}

/// Structured logging for task and file operations
pub fn log_data_operation(
    operation: &str,
    user: &str,
    resource: &str,
    success: bool,
    details: Option<&str>,
) {
    if success {
        info!(
            "Data operation: op={}, user={}, resource={}, success=true, details={:?}",
            operation,
            format_sensitive(user),
            resource,
            details
        );
    } else {
        error!(
            "Data operation: op={}, user={}, resource={}, success=false, details={:?}",
            operation,
            format_sensitive(user),
            resource,
            details
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_sensitive_data_formatting() {
        assert_eq!(format_sensitive("password"), "pa***rd");
        assert_eq!(format_sensitive("key"), "***");
        assert_eq!(format_sensitive("mail@gmail.com"), "ma***om");
        assert_eq!(format_sensitive(""), "");
        assert_eq!(format_sensitive("ñandú.user"), "ña***er");
    }

    #[test]
    fn test_logging_initialization() {
        let dir = tempdir().unwrap();
        let log_file = dir.path().join("logs").join("application.log");

        let result = initialize_logging(&log_file, false);

        // Another test may have installed the global logger first
        assert!(
            result.is_ok()
                || result
                    .unwrap_err()
                    .to_string()
                    .contains("logger")
        );
        assert!(log_file.exists());
    }
}
