use crate::core::config::data::{path_display, Config};
use std::path::Path;

impl Config {
    pub fn print_all(&self, source: &Path) {
        for line in self.describe(source) {
            println!("{line}");
        }
    }

    pub(crate) fn describe(&self, source: &Path) -> Vec<String> {
        let read_timeout = match self.read_timeout() {
            Some(limit) => format!("{}s", limit.as_secs()),
            None => "off".to_string(),
        };
        vec![
            format!("Current configuration ({}):", path_display(source)),
            format!("  server: {}", self.endpoint()),
            format!("  connect-timeout: {}s", self.connect_timeout().as_secs()),
            format!("  read-timeout: {read_timeout}"),
            format!("  receive-buffer: {} bytes", self.receive_buffer_bytes()),
            format!("  max-frame: {} bytes", self.max_frame_bytes()),
            format!(
                "  welcome-line: {}",
                if self.expect_welcome() { "expected" } else { "not expected" }
            ),
            format!(
                "  empty-notifications-text: {}",
                self.empty_notifications_text()
            ),
        ]
    }
}
