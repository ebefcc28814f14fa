//! Byte-stream transport abstractions.
//!
//! [`Transport`] is a raw, unbuffered socket: `receive` returns whatever is
//! available and says nothing about message boundaries. [`Connection`] layers
//! newline framing and the one-request-at-a-time exchange on top of it.

use async_trait::async_trait;
use std::fmt;

pub mod connection;
pub mod error;
pub mod framing;
pub mod tcp;

pub use connection::{Connection, ConnectionOptions, ExchangeError};
pub use error::TransportError;
pub use framing::LineBuffer;
pub use tcp::{TcpConnector, TcpTransport};

/// Host and port of the chat server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

#[async_trait]
/// Contract for one open byte-stream connection.
pub trait Transport: Send {
    async fn send(&mut self, bytes: &[u8]) -> Result<(), TransportError>;

    /// Reads up to `max_bytes`. A zero-byte read from the peer is reported as
    /// [`TransportError::Closed`].
    async fn receive(&mut self, max_bytes: usize) -> Result<Vec<u8>, TransportError>;

    /// Closes the connection. Calling it again is a no-op.
    async fn close(&mut self);

    fn is_open(&self) -> bool;
}

#[async_trait]
/// Opens transports to an endpoint.
pub trait Connector: Send + Sync {
    type Transport: Transport;

    async fn connect(&self, endpoint: &Endpoint) -> Result<Self::Transport, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::Endpoint;

    #[test]
    fn endpoint_display_brackets_ipv6() {
        assert_eq!(Endpoint::new("127.0.0.1", 5000).to_string(), "127.0.0.1:5000");
        assert_eq!(Endpoint::new("::1", 5000).to_string(), "[::1]:5000");
    }
}
