#[cfg(test)]
use crate::core::config::data::Config;
#[cfg(test)]
use crate::transport::{Connector, Endpoint, Transport, TransportError};
#[cfg(test)]
use crate::ui::Console;
#[cfg(test)]
use async_trait::async_trait;
#[cfg(test)]
use std::collections::VecDeque;
#[cfg(test)]
use std::sync::{Arc, Mutex};

#[cfg(test)]
type Responder = Box<dyn FnMut(&str) -> Option<String> + Send>;

#[cfg(test)]
#[derive(Default)]
struct ScriptState {
    sent: Vec<String>,
    inbound: VecDeque<Vec<u8>>,
    responder: Option<Responder>,
    close_calls: usize,
    stalled: bool,
}

/// In-memory [`Transport`] fed from a script.
///
/// Inbound bytes come from queued chunks or from a responder that answers
/// each sent line. Once the queue is empty a receive reports
/// [`TransportError::Closed`], unless the script is stalled.
#[cfg(test)]
pub struct ScriptedTransport {
    state: Arc<Mutex<ScriptState>>,
    open: bool,
}

/// Test-side view of a [`ScriptedTransport`] that stays valid after the
/// transport has been moved into a connection.
#[cfg(test)]
#[derive(Clone)]
pub struct ScriptHandle {
    state: Arc<Mutex<ScriptState>>,
}

#[cfg(test)]
impl ScriptedTransport {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(ScriptState::default())),
            open: true,
        }
    }

    /// A transport that answers every sent line with `respond(line)`; the
    /// line is passed without its terminator. `None` sends nothing back.
    pub fn with_responder(respond: impl FnMut(&str) -> Option<String> + Send + 'static) -> Self {
        let transport = Self::new();
        transport.state.lock().unwrap().responder = Some(Box::new(respond));
        transport
    }

    pub fn handle(&self) -> ScriptHandle {
        ScriptHandle {
            state: self.state.clone(),
        }
    }
}

#[cfg(test)]
impl ScriptHandle {
    pub fn push_chunk(&self, chunk: &[u8]) {
        self.state.lock().unwrap().inbound.push_back(chunk.to_vec());
    }

    pub fn push_line(&self, line: &str) {
        self.push_chunk(format!("{line}\n").as_bytes());
    }

    /// Makes receives wait forever once the queue is empty.
    pub fn stall(&self) {
        self.state.lock().unwrap().stalled = true;
    }

    /// Every line written to the transport, terminators included.
    pub fn sent(&self) -> Vec<String> {
        self.state.lock().unwrap().sent.clone()
    }

    pub fn close_calls(&self) -> usize {
        self.state.lock().unwrap().close_calls
    }
}

#[cfg(test)]
#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        if !self.open {
            return Err(TransportError::Closed);
        }
        let line = String::from_utf8_lossy(bytes).into_owned();
        let mut guard = self.state.lock().unwrap();
        let state = &mut *guard;
        if let Some(respond) = state.responder.as_mut() {
            let request = line.trim_end_matches('\n').to_string();
            if let Some(reply) = respond(&request) {
                state.inbound.push_back(format!("{reply}\n").into_bytes());
            }
        }
        state.sent.push(line);
        Ok(())
    }

    async fn receive(&mut self, max_bytes: usize) -> Result<Vec<u8>, TransportError> {
        if !self.open {
            return Err(TransportError::Closed);
        }
        let (chunk, stalled) = {
            let mut state = self.state.lock().unwrap();
            let mut chunk = state.inbound.pop_front();
            if let Some(bytes) = chunk.as_mut() {
                if bytes.len() > max_bytes {
                    let rest = bytes.split_off(max_bytes);
                    state.inbound.push_front(rest);
                }
            }
            (chunk, state.stalled)
        };
        match chunk {
            Some(chunk) => Ok(chunk),
            None if stalled => std::future::pending().await,
            None => Err(TransportError::Closed),
        }
    }

    async fn close(&mut self) {
        if self.open {
            self.open = false;
            self.state.lock().unwrap().close_calls += 1;
        }
    }

    fn is_open(&self) -> bool {
        self.open
    }
}

/// [`Connector`] that hands out pre-built transports or failures in order.
#[cfg(test)]
pub struct ScriptedConnector {
    attempts: Mutex<VecDeque<Result<ScriptedTransport, TransportError>>>,
    connect_calls: Mutex<usize>,
}

#[cfg(test)]
impl ScriptedConnector {
    pub fn new(attempts: Vec<Result<ScriptedTransport, TransportError>>) -> Self {
        Self {
            attempts: Mutex::new(attempts.into()),
            connect_calls: Mutex::new(0),
        }
    }

    pub fn connect_calls(&self) -> usize {
        *self.connect_calls.lock().unwrap()
    }
}

#[cfg(test)]
#[async_trait]
impl Connector for ScriptedConnector {
    type Transport = ScriptedTransport;

    async fn connect(&self, endpoint: &Endpoint) -> Result<ScriptedTransport, TransportError> {
        *self.connect_calls.lock().unwrap() += 1;
        self.attempts
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(refused(endpoint)))
    }
}

#[cfg(test)]
pub fn refused(endpoint: &Endpoint) -> TransportError {
    TransportError::Connect {
        endpoint: endpoint.clone(),
        source: std::io::Error::from(std::io::ErrorKind::ConnectionRefused),
    }
}

/// [`Console`] that replays scripted input and records everything printed.
#[cfg(test)]
#[derive(Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub prompts: Vec<String>,
    pub output: Vec<String>,
}

#[cfg(test)]
impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|line| line.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn printed(&self, text: &str) -> bool {
        self.output.iter().any(|line| line == text)
    }

    pub fn printed_containing(&self, fragment: &str) -> bool {
        self.output.iter().any(|line| line.contains(fragment))
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.prompts.push(prompt.to_string());
        self.inputs.pop_front()
    }

    fn print(&mut self, text: &str) {
        self.output.push(text.to_string());
    }
}

#[cfg(test)]
pub fn create_test_config() -> Config {
    Config {
        read_timeout_secs: Some(2),
        expect_welcome: Some(false),
        ..Default::default()
    }
}

#[cfg(test)]
pub fn test_endpoint() -> Endpoint {
    Endpoint::new("127.0.0.1", 5000)
}
