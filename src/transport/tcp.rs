use async_trait::async_trait;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

use super::{Connector, Endpoint, Transport, TransportError};

/// A [`Transport`] over one tokio TCP stream.
pub struct TcpTransport {
    stream: Option<TcpStream>,
    endpoint: Endpoint,
}

impl TcpTransport {
    pub async fn connect(endpoint: &Endpoint, timeout: Duration) -> Result<Self, TransportError> {
        let address = (endpoint.host.as_str(), endpoint.port);
        let stream = match tokio::time::timeout(timeout, TcpStream::connect(address)).await {
            Ok(Ok(stream)) => stream,
            Ok(Err(source)) => {
                return Err(TransportError::Connect {
                    endpoint: endpoint.clone(),
                    source,
                })
            }
            Err(_) => {
                return Err(TransportError::ConnectTimeout {
                    endpoint: endpoint.clone(),
                    after: timeout,
                })
            }
        };
        // Commands are small and interactive.
        let _ = stream.set_nodelay(true);
        debug!(endpoint = %endpoint, "TCP connection established");

        Ok(Self {
            stream: Some(stream),
            endpoint: endpoint.clone(),
        })
    }
}

#[async_trait]
impl Transport for TcpTransport {
    async fn send(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        let stream = self.stream.as_mut().ok_or(TransportError::Closed)?;
        stream.write_all(bytes).await.map_err(TransportError::Send)?;
        stream.flush().await.map_err(TransportError::Send)
    }

    async fn receive(&mut self, max_bytes: usize) -> Result<Vec<u8>, TransportError> {
        let stream = self.stream.as_mut().ok_or(TransportError::Closed)?;
        let mut chunk = vec![0u8; max_bytes.max(1)];
        let read = stream
            .read(&mut chunk)
            .await
            .map_err(TransportError::Receive)?;
        if read == 0 {
            debug!(endpoint = %self.endpoint, "Peer closed the TCP stream");
            return Err(TransportError::Closed);
        }
        chunk.truncate(read);
        Ok(chunk)
    }

    async fn close(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            let _ = stream.shutdown().await;
            debug!(endpoint = %self.endpoint, "TCP connection closed");
        }
    }

    fn is_open(&self) -> bool {
        self.stream.is_some()
    }
}

/// Opens [`TcpTransport`]s with a bounded handshake.
pub struct TcpConnector {
    timeout: Duration,
}

impl TcpConnector {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl Connector for TcpConnector {
    type Transport = TcpTransport;

    async fn connect(&self, endpoint: &Endpoint) -> Result<TcpTransport, TransportError> {
        TcpTransport::connect(endpoint, self.timeout).await
    }
}
