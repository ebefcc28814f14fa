//! Top-level session state machine.
//!
//! [`SessionController`] owns the configuration, the single [`Connection`],
//! and the [`Session`]. It reads main-menu selections, lends the session and
//! connection to the chosen mode, and moves back to the main menu when the
//! mode returns. `Terminated` is absorbing: the connection is closed exactly
//! once on the way in.

use tracing::{debug, info, warn};

use crate::core::config::Config;
use crate::core::session::{Mode, Session};
use crate::modes::{self, ModeContext, ModeExit};
use crate::transport::{Connection, Connector, ExchangeError, TcpConnector, TransportError};
use crate::ui::menu::{self, MenuAction};
use crate::ui::{Console, StdioConsole};

const MENU_PROMPT: &str = "Select an option: ";

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    Logout,
    EndOfInput,
    Disconnected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub reason: EndReason,
    /// Commands sent over every connection of this run.
    pub commands_sent: usize,
}

/// Result of handling one main-menu line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Terminated(EndReason),
}

pub struct SessionController<C: Connector> {
    connector: C,
    config: Config,
    connection: Option<Connection<C::Transport>>,
    session: Option<Session>,
    terminated: bool,
    commands_sent: usize,
}

impl<C: Connector> SessionController<C> {
    pub fn new(connector: C, config: Config) -> Self {
        Self {
            connector,
            config,
            connection: None,
            session: None,
            terminated: false,
            commands_sent: 0,
        }
    }

    /// Current state of the state machine.
    pub fn mode(&self) -> Mode {
        if self.terminated {
            return Mode::Terminated;
        }
        self.session
            .as_ref()
            .map_or(Mode::MainMenu, |session| session.mode)
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_connected(&self) -> bool {
        self.connection
            .as_ref()
            .is_some_and(|connection| connection.is_open())
    }

    /// Runs the interactive loop until logout, end of input, or a closed
    /// connection.
    pub async fn run(&mut self, console: &mut dyn Console) -> SessionSummary {
        if let Err(err) = self.connect(console).await {
            console.print(&format!("❌ {err}"));
        }

        loop {
            let connected_to = self
                .connection
                .as_ref()
                .filter(|connection| connection.is_open())
                .map(|connection| connection.endpoint().clone());
            console.print(&menu::render_menu(connected_to.as_ref()));

            let step = match console.read_line(MENU_PROMPT) {
                Some(input) => self.handle_selection(&input, console).await,
                None => self.terminate(EndReason::EndOfInput).await,
            };
            if let Step::Terminated(reason) = step {
                return SessionSummary {
                    reason,
                    commands_sent: self.commands_sent,
                };
            }
        }
    }

    /// Opens the connection and creates the session. Does nothing when
    /// already connected. On failure no session exists afterwards.
    pub async fn connect(&mut self, console: &mut dyn Console) -> Result<(), TransportError> {
        if self.is_connected() {
            console.print("Already connected.");
            return Ok(());
        }

        let endpoint = self.config.endpoint();
        console.print(&format!("Connecting to {endpoint}..."));
        let transport = match self.connector.connect(&endpoint).await {
            Ok(transport) => transport,
            Err(err) => {
                warn!(endpoint = %endpoint, error = %err, "Connection attempt failed");
                return Err(err);
            }
        };
        let mut connection =
            Connection::new(transport, endpoint.clone(), self.config.connection_options());

        if self.config.expect_welcome() {
            match connection.read_welcome().await {
                Ok(welcome) => console.print(welcome.text()),
                Err(ExchangeError::Transport(err)) if err.is_closed() => {
                    connection.close().await;
                    return Err(err);
                }
                Err(err) => console.print(&format!("⚠️  No welcome from server: {err}")),
            }
        }

        info!(endpoint = %endpoint, "Connected to chat server");
        console.print(&format!("✅ Connected to {endpoint}"));
        self.connection = Some(connection);
        self.session = Some(Session::new());
        Ok(())
    }

    /// Applies one line of main-menu input.
    pub async fn handle_selection(&mut self, input: &str, console: &mut dyn Console) -> Step {
        if self.terminated {
            return Step::Terminated(EndReason::Logout);
        }

        let action = match menu::parse_selection(input) {
            Ok(action) => action,
            Err(err) => {
                console.print(&format!("⚠️  {err}"));
                return Step::Continue;
            }
        };

        match action {
            MenuAction::Logout => {
                console.print("Logging out...");
                self.terminate(EndReason::Logout).await
            }
            MenuAction::Reconnect => {
                if let Err(err) = self.connect(console).await {
                    console.print(&format!("❌ {err}"));
                }
                Step::Continue
            }
            MenuAction::Enter(mode) => self.enter_mode(mode, console).await,
        }
    }

    async fn enter_mode(&mut self, mode: Mode, console: &mut dyn Console) -> Step {
        let (Some(session), Some(connection)) = (self.session.as_mut(), self.connection.as_mut())
        else {
            console.print("⚠️  Not connected. Choose Reconnect first.");
            return Step::Continue;
        };

        debug!(mode = %mode, "Entering mode");
        session.mode = mode;
        let mut ctx = ModeContext {
            session,
            connection,
            console,
            config: &self.config,
        };
        let exit = match mode {
            Mode::Global => modes::global::run(&mut ctx).await,
            Mode::Private => modes::private::run(&mut ctx).await,
            Mode::Group => modes::group::run(&mut ctx).await,
            Mode::Notifications => modes::notifications::run(&mut ctx).await,
            Mode::Profile => modes::profile::run(&mut ctx).await,
            Mode::Help => modes::help::run(&mut ctx).await,
            Mode::MainMenu | Mode::Terminated => ModeExit::Menu,
        };
        debug!(mode = %mode, exit = ?exit, "Left mode");

        match exit {
            ModeExit::Menu => {
                if let Some(session) = self.session.as_mut() {
                    session.return_to_menu();
                }
                Step::Continue
            }
            ModeExit::Disconnected => self.terminate(EndReason::Disconnected).await,
            ModeExit::EndOfInput => self.terminate(EndReason::EndOfInput).await,
        }
    }

    /// Enters `Terminated`, closing the connection if one is open. Later
    /// calls do nothing.
    pub async fn terminate(&mut self, reason: EndReason) -> Step {
        if self.terminated {
            return Step::Terminated(reason);
        }

        if let Some(session) = self.session.as_mut() {
            session.mode = Mode::Terminated;
        }
        if let Some(mut connection) = self.connection.take() {
            self.commands_sent += connection.commands_sent();
            connection.close().await;
        }
        self.session = None;
        self.terminated = true;
        info!(reason = ?reason, commands_sent = self.commands_sent, "Session terminated");
        Step::Terminated(reason)
    }
}

/// Runs an interactive session over TCP on the process's stdin and stdout.
pub async fn run_chat(config: Config) -> SessionSummary {
    let connector = TcpConnector::new(config.connect_timeout());
    let mut console = StdioConsole::new();
    let mut controller = SessionController::new(connector, config);
    let summary = controller.run(&mut console).await;
    console.print(&format!(
        "👋 Goodbye. {} command(s) sent.",
        summary.commands_sent
    ));
    summary
}
