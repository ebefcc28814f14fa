//! Line-oriented terminal I/O.
//!
//! Mode controllers never touch stdin/stdout directly; they go through a
//! [`Console`], so the whole session can be driven from a script.

use std::io::{self, BufRead, Write};

/// Source of user input lines and sink for rendered output.
pub trait Console {
    /// Shows `prompt` and reads one line without its terminator.
    /// Returns `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Option<String>;

    /// Writes one block of output followed by a newline.
    fn print(&mut self, text: &str);
}

/// [`Console`] over the process's stdin and stdout.
pub struct StdioConsole {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl StdioConsole {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for StdioConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdioConsole {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        {
            let mut out = self.stdout.lock();
            let _ = write!(out, "{prompt}");
            let _ = out.flush();
        }

        let mut input = String::new();
        match self.stdin.lock().read_line(&mut input) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let trimmed = input.trim_end_matches(['\n', '\r']).len();
                input.truncate(trimmed);
                Some(input)
            }
        }
    }

    fn print(&mut self, text: &str) {
        let mut out = self.stdout.lock();
        let _ = writeln!(out, "{text}");
    }
}
