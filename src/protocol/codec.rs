//! Conversion between [`Command`]/[`Response`] values and wire lines.
//!
//! A wire line is the verb followed by its arguments, joined with `:` and
//! terminated by a single `\n`. The final argument of a payload verb is
//! written verbatim, so it may itself contain `:`; decoding splits at most
//! `arity - 1` times to recover it.

use super::command::{Command, Response, Verb, FIELD_DELIMITER};
use super::error::ProtocolError;

pub const LINE_TERMINATOR: char = '\n';

/// Encodes a command as one newline-terminated wire line.
pub fn encode(command: &Command) -> String {
    let mut line = String::from(command.verb().as_str());
    for arg in command.args() {
        line.push(FIELD_DELIMITER);
        line.push_str(arg);
    }
    line.push(LINE_TERMINATOR);
    line
}

/// Parses one wire line (terminator optional) back into a command.
pub fn decode_command(line: &str) -> Result<Command, ProtocolError> {
    let line = line
        .strip_suffix(LINE_TERMINATOR)
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(line);
    if line.is_empty() {
        return Err(ProtocolError::EmptyLine);
    }

    let (token, rest) = match line.split_once(FIELD_DELIMITER) {
        Some((token, rest)) => (token, Some(rest)),
        None => (line, None),
    };
    let verb = Verb::parse(token).ok_or_else(|| ProtocolError::UnknownVerb(token.to_string()))?;

    let args: Vec<String> = match (verb.arity(), rest) {
        (_, None) => Vec::new(),
        (0, Some(rest)) => vec![rest.to_string()],
        (arity, Some(rest)) => rest
            .splitn(arity, FIELD_DELIMITER)
            .map(str::to_string)
            .collect(),
    };

    Command::from_parts(verb, args)
}

/// Decodes one reply frame. The frame terminator has already been removed.
pub fn decode_response(frame: &[u8]) -> Result<Response, ProtocolError> {
    match std::str::from_utf8(frame) {
        Ok(text) => Ok(Response::new(text)),
        Err(err) => Err(ProtocolError::InvalidUtf8 {
            valid_up_to: err.valid_up_to(),
        }),
    }
}
