use std::error::Error as StdError;
use std::fmt;

use super::command::Verb;

/// Errors raised while building, encoding, or decoding protocol lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// An argument breaks the line framing or the `:` field layout.
    InvalidArgument {
        verb: Verb,
        /// Position of the offending argument.
        index: usize,
        reason: &'static str,
    },
    /// The leading token of a line is not a known verb.
    UnknownVerb(String),
    /// A line carried a different number of arguments than its verb takes.
    WrongArity {
        verb: Verb,
        expected: usize,
        found: usize,
    },
    /// The server sent bytes that are not valid UTF-8.
    InvalidUtf8 { valid_up_to: usize },
    /// An empty line where a command was expected.
    EmptyLine,
    /// A reply line exceeded the frame limit and was discarded.
    FrameTooLong { limit: usize },
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::InvalidArgument {
                verb,
                index,
                reason,
            } => write!(f, "Invalid argument {} for {}: {}", index + 1, verb, reason),
            ProtocolError::UnknownVerb(verb) => write!(f, "Unknown verb: {verb}"),
            ProtocolError::WrongArity {
                verb,
                expected,
                found,
            } => write!(
                f,
                "{verb} takes {expected} argument(s) but the line carried {found}"
            ),
            ProtocolError::InvalidUtf8 { valid_up_to } => write!(
                f,
                "Server reply is not valid UTF-8 (valid up to byte {valid_up_to})"
            ),
            ProtocolError::EmptyLine => write!(f, "Empty protocol line"),
            ProtocolError::FrameTooLong { limit } => {
                write!(f, "Server reply exceeded {limit} bytes and was discarded")
            }
        }
    }
}

impl StdError for ProtocolError {}
