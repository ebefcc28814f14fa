use std::error::Error as StdError;
use std::fmt;

use crate::core::session::Mode;
use crate::transport::Endpoint;

/// What a main-menu selection does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Enter(Mode),
    Reconnect,
    Logout,
}

pub struct MenuEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub action: MenuAction,
}

/// Recoverable mistakes in user input. The caller re-prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInputError {
    InvalidMenuChoice(String),
    UnknownProfileCommand(String),
}

impl fmt::Display for UserInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserInputError::InvalidMenuChoice(choice) => {
                write!(f, "Invalid choice '{choice}'. Please try again.")
            }
            UserInputError::UnknownProfileCommand(input) => write!(
                f,
                "Unknown profile command '{input}'. Use /view, /edit, or /menu."
            ),
        }
    }
}

impl StdError for UserInputError {}

/// Words accepted as logout besides the numbered entry.
const LOGOUT_WORDS: &[&str] = &["logout", "exit", "quit"];

pub fn all_entries() -> &'static [MenuEntry] {
    MENU
}

/// Maps one line of main-menu input to an action.
pub fn parse_selection(input: &str) -> Result<MenuAction, UserInputError> {
    let choice = input.trim();
    if LOGOUT_WORDS
        .iter()
        .any(|word| word.eq_ignore_ascii_case(choice))
    {
        return Ok(MenuAction::Logout);
    }

    all_entries()
        .iter()
        .find(|entry| entry.key == choice)
        .map(|entry| entry.action)
        .ok_or_else(|| UserInputError::InvalidMenuChoice(choice.to_string()))
}

/// Renders the main menu with the current connection status.
pub fn render_menu(connected_to: Option<&Endpoint>) -> String {
    let mut menu = String::from("\n=== Chat Menu ===\n");
    match connected_to {
        Some(endpoint) => menu.push_str(&format!("Connected to {endpoint}\n")),
        None => menu.push_str("Not connected (choose Reconnect)\n"),
    }
    for entry in all_entries() {
        menu.push_str(&format!("{}. {}\n", entry.key, entry.label));
    }
    menu.pop();
    menu
}

const MENU: &[MenuEntry] = &[
    MenuEntry {
        key: "1",
        label: "Global chat",
        action: MenuAction::Enter(Mode::Global),
    },
    MenuEntry {
        key: "2",
        label: "Private chat",
        action: MenuAction::Enter(Mode::Private),
    },
    MenuEntry {
        key: "3",
        label: "Group chat",
        action: MenuAction::Enter(Mode::Group),
    },
    MenuEntry {
        key: "4",
        label: "Notifications",
        action: MenuAction::Enter(Mode::Notifications),
    },
    MenuEntry {
        key: "5",
        label: "Profile",
        action: MenuAction::Enter(Mode::Profile),
    },
    MenuEntry {
        key: "6",
        label: "Help",
        action: MenuAction::Enter(Mode::Help),
    },
    MenuEntry {
        key: "7",
        label: "Reconnect",
        action: MenuAction::Reconnect,
    },
    MenuEntry {
        key: "8",
        label: "Logout",
        action: MenuAction::Logout,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_choices_map_to_modes() {
        assert_eq!(parse_selection("1"), Ok(MenuAction::Enter(Mode::Global)));
        assert_eq!(parse_selection(" 3 "), Ok(MenuAction::Enter(Mode::Group)));
        assert_eq!(parse_selection("7"), Ok(MenuAction::Reconnect));
        assert_eq!(parse_selection("8"), Ok(MenuAction::Logout));
    }

    #[test]
    fn logout_words_are_case_insensitive() {
        assert_eq!(parse_selection("Logout"), Ok(MenuAction::Logout));
        assert_eq!(parse_selection("EXIT"), Ok(MenuAction::Logout));
    }

    #[test]
    fn unknown_choice_is_rejected() {
        assert_eq!(
            parse_selection("9"),
            Err(UserInputError::InvalidMenuChoice("9".to_string()))
        );
        assert!(parse_selection("").is_err());
    }

    #[test]
    fn menu_lists_every_entry() {
        let menu = render_menu(Some(&Endpoint::new("127.0.0.1", 5000)));
        assert!(menu.contains("Connected to 127.0.0.1:5000"));
        for entry in all_entries() {
            assert!(menu.contains(&format!("{}. {}", entry.key, entry.label)));
        }
        assert!(render_menu(None).contains("Not connected"));
    }
}
