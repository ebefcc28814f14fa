use std::time::Duration;

use crate::core::config::data::Config;
use crate::core::config::io::ConfigError;
use crate::transport::framing::DEFAULT_MAX_FRAME_BYTES;
use crate::transport::ConnectionOptions;
use crate::transport::Endpoint;

pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 5000;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_RECEIVE_BUFFER_BYTES: usize = 1024;
pub const DEFAULT_EMPTY_NOTIFICATIONS_TEXT: &str = "No new notifications.";

impl Config {
    pub fn server_host(&self) -> &str {
        self.server_host.as_deref().unwrap_or(DEFAULT_SERVER_HOST)
    }

    pub fn server_port(&self) -> u16 {
        self.server_port.unwrap_or(DEFAULT_SERVER_PORT)
    }

    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new(self.server_host(), self.server_port())
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(
            self.connect_timeout_secs
                .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS),
        )
    }

    /// `None` means replies are awaited without a bound.
    pub fn read_timeout(&self) -> Option<Duration> {
        match self.read_timeout_secs.unwrap_or(DEFAULT_READ_TIMEOUT_SECS) {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    pub fn receive_buffer_bytes(&self) -> usize {
        self.receive_buffer_bytes
            .unwrap_or(DEFAULT_RECEIVE_BUFFER_BYTES)
    }

    /// Longest reply line accepted before it is discarded.
    pub fn max_frame_bytes(&self) -> usize {
        self.max_frame_bytes.unwrap_or(DEFAULT_MAX_FRAME_BYTES)
    }

    pub fn expect_welcome(&self) -> bool {
        self.expect_welcome.unwrap_or(true)
    }

    pub fn empty_notifications_text(&self) -> &str {
        self.empty_notifications_text
            .as_deref()
            .unwrap_or(DEFAULT_EMPTY_NOTIFICATIONS_TEXT)
    }

    pub fn connection_options(&self) -> ConnectionOptions {
        ConnectionOptions {
            receive_buffer_bytes: self.receive_buffer_bytes(),
            read_timeout: self.read_timeout(),
            max_frame_bytes: self.max_frame_bytes(),
        }
    }

    /// Rejects values that cannot work at all.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server_host().trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "server_host",
                reason: "must not be empty".to_string(),
            });
        }
        if self.server_port() == 0 {
            return Err(ConfigError::Invalid {
                field: "server_port",
                reason: "must be between 1 and 65535".to_string(),
            });
        }
        if self.receive_buffer_bytes() == 0 {
            return Err(ConfigError::Invalid {
                field: "receive_buffer_bytes",
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.max_frame_bytes() == 0 {
            return Err(ConfigError::Invalid {
                field: "max_frame_bytes",
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.connect_timeout_secs == Some(0) {
            return Err(ConfigError::Invalid {
                field: "connect_timeout_secs",
                reason: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
