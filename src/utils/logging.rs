use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the log filter.
pub const LOG_FILTER_ENV: &str = "CHATLINE_LOG";

const FILE_DEFAULT_FILTER: &str = "chatline=debug";
const STDERR_DEFAULT_FILTER: &str = "chatline=warn";

/// Installs the global tracing subscriber.
///
/// Stdout belongs to the chat UI, so diagnostics go to `log_file` when one is
/// given and to stderr otherwise (warnings only unless `CHATLINE_LOG` says
/// otherwise).
pub fn init_tracing(log_file: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(build_filter(FILE_DEFAULT_FILTER))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|err| err as Box<dyn std::error::Error>)?;
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(build_filter(STDERR_DEFAULT_FILTER))
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|err| err as Box<dyn std::error::Error>)?;
        }
    }
    Ok(())
}

fn build_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}
