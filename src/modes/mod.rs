//! Mode controllers.
//!
//! Each mode runs its own input loop against a [`ModeContext`] lent by the
//! session controller. All network traffic goes through [`exchange`], which
//! sends one command, waits for its reply, and turns failures into console
//! text. Only a closed connection ends a mode early.

use crate::core::config::Config;
use crate::core::session::Session;
use crate::protocol::{Command, ProtocolError, Response};
use crate::transport::{Connection, Transport};
use crate::ui::Console;
use crate::utils::input::sanitize_text_input;

pub mod global;
pub mod group;
pub mod help;
pub mod notifications;
pub mod private;
pub mod profile;


/// Everything a mode may touch while it runs.
pub struct ModeContext<'a, T: Transport> {
    pub session: &'a mut Session,
    pub connection: &'a mut Connection<T>,
    pub console: &'a mut dyn Console,
    pub config: &'a Config,
}

/// How a mode handed control back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeExit {
    /// The exit token was entered, or the mode finished its work.
    Menu,
    /// The server closed the connection.
    Disconnected,
    /// User input ran out.
    EndOfInput,
}

/// Outcome of one command exchange, after it has been reported.
#[derive(Debug)]
pub enum Exchange {
    Reply(Response),
    /// A transient failure, already shown to the user.
    Failed,
    /// The connection is gone, already shown to the user.
    Disconnected,
}

/// Sends `command`, waits for the reply, and prints any server lines that
/// arrived outside the exchange. Failures are printed, never returned.
pub async fn exchange<T: Transport>(ctx: &mut ModeContext<'_, T>, command: &Command) -> Exchange {
    let result = ctx.connection.request(command).await;

    for pushed in ctx.connection.drain_backlog() {
        ctx.console.print(&format!("[server] {pushed}"));
    }

    match result {
        Ok(reply) => Exchange::Reply(reply),
        Err(err) if err.is_fatal() => {
            ctx.console.print(&format!("❌ {err}"));
            Exchange::Disconnected
        }
        Err(err) => {
            ctx.console.print(&format!("⚠️  {err}"));
            Exchange::Failed
        }
    }
}

/// [`exchange`] plus rendering the reply verbatim. Returns `Some` when the
/// mode has to stop.
pub async fn send_and_render<T: Transport>(
    ctx: &mut ModeContext<'_, T>,
    command: &Command,
) -> Option<ModeExit> {
    match exchange(ctx, command).await {
        Exchange::Reply(reply) => {
            ctx.console.print(reply.text());
            None
        }
        Exchange::Failed => None,
        Exchange::Disconnected => Some(ModeExit::Disconnected),
    }
}

/// The prompt/send/print loop shared by the chat-style modes.
///
/// Every non-blank line other than `exit_token` is sanitized and passed to
/// `build`; a rejected command is reported locally without touching the
/// connection. Returns [`ModeExit::Menu`] only for the exit token.
pub async fn run_line_loop<T, F>(
    ctx: &mut ModeContext<'_, T>,
    prompt: &str,
    exit_token: &str,
    mut build: F,
) -> ModeExit
where
    T: Transport,
    F: FnMut(&str) -> Result<Command, ProtocolError>,
{
    loop {
        let Some(line) = ctx.console.read_line(prompt) else {
            return ModeExit::EndOfInput;
        };
        if line.trim() == exit_token {
            return ModeExit::Menu;
        }

        let text = sanitize_text_input(&line);
        if text.trim().is_empty() {
            continue;
        }

        let command = match build(&text) {
            Ok(command) => command,
            Err(err) => {
                ctx.console.print(&format!("⚠️  {err}"));
                continue;
            }
        };

        if let Some(exit) = send_and_render(ctx, &command).await {
            return exit;
        }
    }
}

/// Result of asking the user for a single value.
pub(crate) enum Prompted<V = String> {
    Value(V),
    /// The user typed the mode's exit token instead of a value.
    Cancelled,
    EndOfInput,
}

/// Prompts until the user gives a non-blank value that `check` accepts.
pub(crate) fn prompt_for<T, F>(
    ctx: &mut ModeContext<'_, T>,
    prompt: &str,
    cancel_token: Option<&str>,
    mut check: F,
) -> Prompted
where
    T: Transport,
    F: FnMut(&str) -> Result<(), ProtocolError>,
{
    loop {
        let Some(line) = ctx.console.read_line(prompt) else {
            return Prompted::EndOfInput;
        };
        let value = sanitize_text_input(&line);
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        if Some(value) == cancel_token {
            return Prompted::Cancelled;
        }
        match check(value) {
            Ok(()) => return Prompted::Value(value.to_string()),
            Err(err) => ctx.console.print(&format!("⚠️  {err}")),
        }
    }
}
