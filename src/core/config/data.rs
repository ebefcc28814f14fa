use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Contents of `config.json`. Every field is optional; the accessors in
/// `defaults.rs` supply the fallbacks.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Chat server host name or address
    pub server_host: Option<String>,
    /// Chat server TCP port
    pub server_port: Option<u16>,
    /// Seconds to wait for the TCP handshake
    pub connect_timeout_secs: Option<u64>,
    /// Seconds to wait for a complete reply; 0 waits forever
    pub read_timeout_secs: Option<u64>,
    /// Upper bound for a single socket read
    pub receive_buffer_bytes: Option<usize>,
    /// Longest reply line kept; longer lines are dropped
    pub max_frame_bytes: Option<usize>,
    /// Whether the server greets new connections with one line
    pub expect_welcome: Option<bool>,
    /// Shown locally when the server answers NOTIFICATIONS with a blank line
    pub empty_notifications_text: Option<String>,
}

/// Get a user-friendly display string for a path
/// Converts absolute paths to use ~ notation on Unix-like systems when possible
///
/// # Examples
/// - Unix: `/home/user/.config/chatline/config.json` → `~/.config/chatline/config.json`
/// - Windows: paths are shown unchanged
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}
