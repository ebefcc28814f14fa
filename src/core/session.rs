use std::fmt;

/// States of the session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    MainMenu,
    Global,
    Private,
    Group,
    Notifications,
    Profile,
    Help,
    Terminated,
}

impl Mode {
    pub fn display_name(self) -> &'static str {
        match self {
            Mode::MainMenu => "Main menu",
            Mode::Global => "Global chat",
            Mode::Private => "Private chat",
            Mode::Group => "Group chat",
            Mode::Notifications => "Notifications",
            Mode::Profile => "Profile",
            Mode::Help => "Help",
            Mode::Terminated => "Terminated",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Mutable state tied to one open connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub mode: Mode,
    pub active_recipient: Option<String>,
    pub active_group: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            mode: Mode::MainMenu,
            active_recipient: None,
            active_group: None,
        }
    }

    /// Moves back to the main menu, dropping any chat target.
    pub fn return_to_menu(&mut self) {
        self.mode = Mode::MainMenu;
        self.active_recipient = None;
        self.active_group = None;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_to_menu_clears_targets() {
        let mut session = Session::new();
        session.mode = Mode::Group;
        session.active_group = Some("devs".to_string());
        session.return_to_menu();
        assert_eq!(session, Session::new());
    }
}
