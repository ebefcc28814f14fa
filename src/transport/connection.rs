use std::error::Error as StdError;
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

use super::framing::DEFAULT_MAX_FRAME_BYTES;
use super::{Endpoint, LineBuffer, Transport, TransportError};
use crate::protocol::{codec, Command, ProtocolError, Response};

/// Failure of one request/response exchange.
#[derive(Debug)]
pub enum ExchangeError {
    Transport(TransportError),
    Protocol(ProtocolError),
}

impl ExchangeError {
    /// Only a closed connection ends the session; everything else is
    /// reported and the caller keeps going.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ExchangeError::Transport(err) if err.is_closed())
    }
}

impl fmt::Display for ExchangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExchangeError::Transport(err) => write!(f, "{err}"),
            ExchangeError::Protocol(err) => write!(f, "{err}"),
        }
    }
}

impl StdError for ExchangeError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ExchangeError::Transport(err) => Some(err),
            ExchangeError::Protocol(err) => Some(err),
        }
    }
}

impl From<TransportError> for ExchangeError {
    fn from(err: TransportError) -> Self {
        ExchangeError::Transport(err)
    }
}

impl From<ProtocolError> for ExchangeError {
    fn from(err: ProtocolError) -> Self {
        ExchangeError::Protocol(err)
    }
}

/// Tunables for reading replies.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionOptions {
    /// Upper bound for a single socket read.
    pub receive_buffer_bytes: usize,
    /// How long to wait for a complete reply; `None` waits forever.
    pub read_timeout: Option<Duration>,
    /// Longest reply line accepted, terminator excluded.
    pub max_frame_bytes: usize,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            receive_buffer_bytes: 1024,
            read_timeout: Some(Duration::from_secs(30)),
            max_frame_bytes: DEFAULT_MAX_FRAME_BYTES,
        }
    }
}

/// One open connection to the chat server.
///
/// `request` takes `&mut self` and returns only after the reply frame has
/// been read, so at most one command is ever in flight. A reply that timed
/// out is still owed by the server; when it turns up later it goes to the
/// backlog instead of being taken as the answer to a newer command.
pub struct Connection<T: Transport> {
    transport: T,
    endpoint: Endpoint,
    buffer: LineBuffer,
    options: ConnectionOptions,
    backlog: Vec<Response>,
    commands_sent: usize,
    owed_replies: usize,
}

impl<T: Transport> Connection<T> {
    pub fn new(transport: T, endpoint: Endpoint, options: ConnectionOptions) -> Self {
        Self {
            transport,
            endpoint,
            buffer: LineBuffer::with_limit(options.max_frame_bytes),
            options,
            backlog: Vec::new(),
            commands_sent: 0,
            owed_replies: 0,
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn is_open(&self) -> bool {
        self.transport.is_open()
    }

    pub fn commands_sent(&self) -> usize {
        self.commands_sent
    }

    /// Replies the server still owes for earlier timed-out reads.
    pub fn owed_replies(&self) -> usize {
        self.owed_replies
    }

    /// Reads the unsolicited line the server sends after accepting.
    pub async fn read_welcome(&mut self) -> Result<Response, ExchangeError> {
        self.read_reply().await
    }

    /// Sends one command and waits for its reply.
    pub async fn request(&mut self, command: &Command) -> Result<Response, ExchangeError> {
        // Frames already buffered arrived before this command was sent, so
        // they cannot be its reply.
        loop {
            match self.buffer.next_frame() {
                Ok(Some(frame)) => self.keep_stale(&frame),
                Ok(None) => break,
                Err(err) => warn!(error = %err, "Dropping stale frame"),
            }
        }

        let line = codec::encode(command);
        debug!(
            endpoint = %self.endpoint,
            verb = %command.verb(),
            bytes = line.len(),
            "Sending command"
        );
        self.transport.send(line.as_bytes()).await?;
        self.commands_sent += 1;

        let reply = self.read_reply().await?;
        debug!(verb = %command.verb(), bytes = reply.text().len(), "Received reply");
        Ok(reply)
    }

    /// Replies that arrived outside of an exchange (late replies or server
    /// pushes), oldest first.
    pub fn drain_backlog(&mut self) -> Vec<Response> {
        std::mem::take(&mut self.backlog)
    }

    /// Closes the transport. Safe to call more than once.
    pub async fn close(&mut self) {
        if self.transport.is_open() {
            self.transport.close().await;
            debug!(endpoint = %self.endpoint, "Connection closed");
        }
        self.buffer.clear();
        self.owed_replies = 0;
    }

    async fn read_reply(&mut self) -> Result<Response, ExchangeError> {
        let frame = match self.options.read_timeout {
            Some(limit) => match tokio::time::timeout(limit, self.read_current_frame()).await {
                Ok(frame) => frame?,
                Err(_) => {
                    self.owed_replies += 1;
                    warn!(
                        endpoint = %self.endpoint,
                        pending_bytes = self.buffer.pending(),
                        owed_replies = self.owed_replies,
                        "Timed out waiting for reply"
                    );
                    return Err(TransportError::Timeout(limit).into());
                }
            },
            None => self.read_current_frame().await?,
        };
        Ok(codec::decode_response(&frame)?)
    }

    /// Reads frames until the one answering the current exchange, moving
    /// late replies to earlier exchanges into the backlog.
    async fn read_current_frame(&mut self) -> Result<Vec<u8>, ExchangeError> {
        loop {
            let frame = self.read_frame().await;
            if self.owed_replies == 0 {
                return frame;
            }
            self.owed_replies -= 1;
            match frame {
                Ok(late) => {
                    debug!(owed_replies = self.owed_replies, "Late reply arrived");
                    self.keep_stale(&late);
                }
                Err(ExchangeError::Protocol(err)) => {
                    warn!(error = %err, "Dropping late reply");
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn read_frame(&mut self) -> Result<Vec<u8>, ExchangeError> {
        loop {
            if let Some(frame) = self.buffer.next_frame()? {
                return Ok(frame);
            }
            let chunk = self
                .transport
                .receive(self.options.receive_buffer_bytes)
                .await?;
            self.buffer.push(&chunk);
        }
    }

    fn keep_stale(&mut self, frame: &[u8]) {
        match codec::decode_response(frame) {
            Ok(stale) => self.backlog.push(stale),
            Err(err) => warn!(error = %err, "Dropping undecodable stale frame"),
        }
    }
}
