use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::time::Duration;

use super::Endpoint;

/// Failures of the byte-stream transport.
#[derive(Debug)]
pub enum TransportError {
    /// The TCP handshake failed (refused, unreachable, DNS failure).
    Connect { endpoint: Endpoint, source: io::Error },
    /// The TCP handshake did not finish in time.
    ConnectTimeout { endpoint: Endpoint, after: Duration },
    /// Writing to the socket failed.
    Send(io::Error),
    /// Reading from the socket failed.
    Receive(io::Error),
    /// No complete reply arrived within the read timeout.
    Timeout(Duration),
    /// The peer closed the stream, or the connection was already closed.
    Closed,
}

impl TransportError {
    /// Whether the connection can no longer be used.
    pub fn is_closed(&self) -> bool {
        match self {
            TransportError::Closed => true,
            TransportError::Send(err) | TransportError::Receive(err) => matches!(
                err.kind(),
                io::ErrorKind::BrokenPipe
                    | io::ErrorKind::ConnectionReset
                    | io::ErrorKind::ConnectionAborted
                    | io::ErrorKind::NotConnected
                    | io::ErrorKind::UnexpectedEof
            ),
            _ => false,
        }
    }

    pub fn is_connect_error(&self) -> bool {
        matches!(
            self,
            TransportError::Connect { .. } | TransportError::ConnectTimeout { .. }
        )
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Connect { endpoint, source } => {
                write!(f, "Could not connect to {endpoint}: {source}")
            }
            TransportError::ConnectTimeout { endpoint, after } => {
                write!(f, "Connecting to {endpoint} timed out after {after:?}")
            }
            TransportError::Send(err) => write!(f, "Failed to send to server: {err}"),
            TransportError::Receive(err) => write!(f, "Failed to read from server: {err}"),
            TransportError::Timeout(after) => {
                write!(f, "Server did not reply within {after:?}")
            }
            TransportError::Closed => write!(f, "Connection closed by server"),
        }
    }
}

impl StdError for TransportError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            TransportError::Connect { source, .. } => Some(source),
            TransportError::Send(err) | TransportError::Receive(err) => Some(err),
            _ => None,
        }
    }
}
