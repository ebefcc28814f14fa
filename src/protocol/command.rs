//! Typed wire commands.
//!
//! Every request the client can send is a variant of [`Command`]. The
//! variants own their arguments; the `:`-joined wire form is produced only by
//! [`crate::protocol::codec`].

use std::fmt;

use super::error::ProtocolError;

/// Field separator used on the wire.
pub const FIELD_DELIMITER: char = ':';

/// The leading token of a wire command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Global,
    Private,
    Group,
    JoinGroup,
    LeaveGroup,
    Notifications,
    ViewProfile,
    EditProfile,
    Help,
}

const ALL_VERBS: &[Verb] = &[
    Verb::Global,
    Verb::Private,
    Verb::Group,
    Verb::JoinGroup,
    Verb::LeaveGroup,
    Verb::Notifications,
    Verb::ViewProfile,
    Verb::EditProfile,
    Verb::Help,
];

impl Verb {
    pub fn all() -> &'static [Verb] {
        ALL_VERBS
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Global => "GLOBAL",
            Verb::Private => "PRIVATE",
            Verb::Group => "GROUP",
            Verb::JoinGroup => "JOIN_GROUP",
            Verb::LeaveGroup => "LEAVE_GROUP",
            Verb::Notifications => "NOTIFICATIONS",
            Verb::ViewProfile => "VIEW_PROFILE",
            Verb::EditProfile => "EDIT_PROFILE",
            Verb::Help => "HELP",
        }
    }

    /// Number of arguments carried after the verb.
    pub fn arity(self) -> usize {
        match self {
            Verb::Notifications | Verb::ViewProfile => 0,
            Verb::Global | Verb::JoinGroup | Verb::LeaveGroup | Verb::Help => 1,
            Verb::Private | Verb::Group | Verb::EditProfile => 2,
        }
    }

    /// Whether the final argument is free text that may contain `:`.
    pub fn has_payload(self) -> bool {
        matches!(
            self,
            Verb::Global | Verb::Private | Verb::Group | Verb::EditProfile
        )
    }

    pub fn parse(token: &str) -> Option<Verb> {
        Verb::all()
            .iter()
            .copied()
            .find(|verb| verb.as_str() == token)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One request to the chat server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Global { text: String },
    Private { recipient: String, text: String },
    Group { group: String, text: String },
    JoinGroup { group: String },
    LeaveGroup { group: String },
    Notifications,
    ViewProfile,
    EditProfile { field: String, value: String },
    Help { page: String },
}

impl Command {
    pub fn global(text: impl Into<String>) -> Result<Self, ProtocolError> {
        Self::Global { text: text.into() }.validated()
    }

    pub fn private(
        recipient: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Self, ProtocolError> {
        Self::Private {
            recipient: recipient.into(),
            text: text.into(),
        }
        .validated()
    }

    pub fn group(group: impl Into<String>, text: impl Into<String>) -> Result<Self, ProtocolError> {
        Self::Group {
            group: group.into(),
            text: text.into(),
        }
        .validated()
    }

    pub fn join_group(group: impl Into<String>) -> Result<Self, ProtocolError> {
        Self::JoinGroup {
            group: group.into(),
        }
        .validated()
    }

    pub fn leave_group(group: impl Into<String>) -> Result<Self, ProtocolError> {
        Self::LeaveGroup {
            group: group.into(),
        }
        .validated()
    }

    pub fn edit_profile(
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ProtocolError> {
        Self::EditProfile {
            field: field.into(),
            value: value.into(),
        }
        .validated()
    }

    pub fn help(page: impl Into<String>) -> Result<Self, ProtocolError> {
        Self::Help { page: page.into() }.validated()
    }

    pub fn verb(&self) -> Verb {
        match self {
            Command::Global { .. } => Verb::Global,
            Command::Private { .. } => Verb::Private,
            Command::Group { .. } => Verb::Group,
            Command::JoinGroup { .. } => Verb::JoinGroup,
            Command::LeaveGroup { .. } => Verb::LeaveGroup,
            Command::Notifications => Verb::Notifications,
            Command::ViewProfile => Verb::ViewProfile,
            Command::EditProfile { .. } => Verb::EditProfile,
            Command::Help { .. } => Verb::Help,
        }
    }

    /// Arguments in wire order.
    pub fn args(&self) -> Vec<&str> {
        match self {
            Command::Global { text } => vec![text.as_str()],
            Command::Private { recipient, text } => vec![recipient.as_str(), text.as_str()],
            Command::Group { group, text } => vec![group.as_str(), text.as_str()],
            Command::JoinGroup { group } | Command::LeaveGroup { group } => vec![group.as_str()],
            Command::Notifications | Command::ViewProfile => Vec::new(),
            Command::EditProfile { field, value } => vec![field.as_str(), value.as_str()],
            Command::Help { page } => vec![page.as_str()],
        }
    }

    /// Builds a command from a verb and its arguments, checking arity.
    pub fn from_parts(verb: Verb, mut args: Vec<String>) -> Result<Self, ProtocolError> {
        if args.len() != verb.arity() {
            return Err(ProtocolError::WrongArity {
                verb,
                expected: verb.arity(),
                found: args.len(),
            });
        }

        let mut next = || args.remove(0);
        let command = match verb {
            Verb::Global => Command::Global { text: next() },
            Verb::Private => Command::Private {
                recipient: next(),
                text: next(),
            },
            Verb::Group => Command::Group {
                group: next(),
                text: next(),
            },
            Verb::JoinGroup => Command::JoinGroup { group: next() },
            Verb::LeaveGroup => Command::LeaveGroup { group: next() },
            Verb::Notifications => Command::Notifications,
            Verb::ViewProfile => Command::ViewProfile,
            Verb::EditProfile => Command::EditProfile {
                field: next(),
                value: next(),
            },
            Verb::Help => Command::Help { page: next() },
        };
        command.validated()
    }

    /// Checks the framing invariants: no line breaks anywhere and no `:`
    /// outside the final payload argument.
    pub fn validate(&self) -> Result<(), ProtocolError> {
        let verb = self.verb();
        let args = self.args();
        let last = args.len().saturating_sub(1);

        for (index, arg) in args.iter().enumerate() {
            if arg.contains(['\n', '\r']) {
                return Err(ProtocolError::InvalidArgument {
                    verb,
                    index,
                    reason: "line breaks are not allowed",
                });
            }
            let payload = index == last && verb.has_payload();
            if !payload && arg.contains(FIELD_DELIMITER) {
                return Err(ProtocolError::InvalidArgument {
                    verb,
                    index,
                    reason: "':' is only allowed in message text",
                });
            }
        }
        Ok(())
    }

    fn validated(self) -> Result<Self, ProtocolError> {
        self.validate()?;
        Ok(self)
    }
}

/// Decoded text of one server reply.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Response {
    text: String,
}

impl Response {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// A reply that carries nothing but whitespace.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
