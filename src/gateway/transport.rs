//! Transient transport: one connection per request.
//!
//! Every exchange opens a fresh TCP connection, writes one request line,
//! reads one reply line and closes the connection. The stream is owned by the
//! exchange future, so it is released on every exit path: normal return, I/O
//! failure, timeout, or the caller dropping the future.

use super::error::{GatewayError, GatewayResult};
use futures::FutureExt;
use futures::future::BoxFuture;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

/// Replies longer than this are treated as a broken stream
pub const MAX_REPLY_BYTES: u64 = 16 * 1024 * 1024;

/// Performs one request/response exchange with the engine
pub trait Transport: Send + Sync {
    /// Send `request` (a newline-terminated line) and return the reply line.
    fn exchange<'a>(
        &'a self,
        request: &'a [u8],
        timeout: Duration,
    ) -> BoxFuture<'a, GatewayResult<Vec<u8>>>;
}

/// TCP transport to a fixed engine address
#[derive(Debug, Clone)]
pub struct TcpTransport {
    addr: String,
    max_reply_bytes: u64,
}

impl TcpTransport {
    /// Create a transport targeting `addr` (`host:port`).
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            max_reply_bytes: MAX_REPLY_BYTES,
        }
    }

    /// Cap reply lines at `limit` bytes instead of [`MAX_REPLY_BYTES`].
    pub fn with_max_reply_bytes(mut self, limit: u64) -> Self {
        self.max_reply_bytes = limit;
        self
    }

    async fn exchange_once(&self, request: &[u8]) -> GatewayResult<Vec<u8>> {
        let connection_error = |source| GatewayError::Connection {
            addr: self.addr.clone(),
            source,
        };

        let stream = TcpStream::connect(&self.addr)
            .await
            .map_err(connection_error)?;
        stream.set_nodelay(true).ok();
        tracing::debug!(addr = %self.addr, "connected to engine");

        let (reader, mut writer) = stream.into_split();
        writer.write_all(request).await.map_err(connection_error)?;
        writer.flush().await.map_err(connection_error)?;

        let limit = self.max_reply_bytes;
        let mut reader = BufReader::new(reader).take(limit);
        let mut line = Vec::with_capacity(256);
        let bytes = reader
            .read_until(b'\n', &mut line)
            .await
            .map_err(|err| GatewayError::Protocol(format!("failed reading reply: {err}")))?;

        if bytes == 0 {
            return Err(GatewayError::Protocol(
                "connection closed before a reply was received".into(),
            ));
        }
        if line.last() != Some(&b'\n') {
            let reason = if bytes as u64 >= limit {
                format!("reply exceeded {limit} bytes")
            } else {
                "connection closed mid-reply (truncated response)".to_string()
            };
            return Err(GatewayError::Protocol(reason));
        }

        // Best effort; both halves are dropped right after either way.
        writer.shutdown().await.ok();
        tracing::debug!(addr = %self.addr, "engine connection closed");
        Ok(line)
    }
}

impl Transport for TcpTransport {
    fn exchange<'a>(
        &'a self,
        request: &'a [u8],
        timeout: Duration,
    ) -> BoxFuture<'a, GatewayResult<Vec<u8>>> {
        async move {
            match tokio::time::timeout(timeout, self.exchange_once(request)).await {
                Ok(result) => result,
                Err(_) => Err(GatewayError::Timeout { after: timeout }),
            }
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    async fn serve_once(reply: &'static [u8]) -> (String, tokio::task::JoinHandle<Vec<u8>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        let handle = tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            let mut reader = BufReader::new(stream);
            let mut request = Vec::new();
            reader.read_until(b'\n', &mut request).await.unwrap();
            reader.get_mut().write_all(reply).await.unwrap();
            request
        });
        (addr, handle)
    }

    #[tokio::test]
    async fn exchanges_one_line() {
        let (addr, server) = serve_once(b"{\"success\":true}\n").await;
        let transport = TcpTransport::new(addr);

        let reply = transport
            .exchange(b"{\"command\":\"get_scene_info\"}\n", Duration::from_secs(5))
            .await
            .unwrap();

        assert_eq!(reply, b"{\"success\":true}\n");
        assert_eq!(server.await.unwrap(), b"{\"command\":\"get_scene_info\"}\n");
    }

    #[tokio::test]
    async fn unterminated_reply_is_a_protocol_error() {
        let (addr, _server) = serve_once(b"{\"success\":tr").await;
        let transport = TcpTransport::new(addr);

        let err = transport
            .exchange(b"{\"command\":\"get_scene_info\"}\n", Duration::from_secs(5))
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::Protocol(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn oversized_reply_is_a_protocol_error() {
        let (addr, _server) = serve_once(b"{\"success\":true,\"padding\":\"xxxxxxxxxxxxxxxx\"}\n").await;
        let transport = TcpTransport::new(addr).with_max_reply_bytes(16);

        let err = transport
            .exchange(b"{\"command\":\"get_scene_info\"}\n", Duration::from_secs(5))
            .await
            .unwrap_err();

        match err {
            GatewayError::Protocol(reason) => assert_eq!(reason, "reply exceeded 16 bytes"),
            other => panic!("expected protocol error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn reply_at_the_limit_is_accepted() {
        let (addr, _server) = serve_once(b"{\"success\":true}\n").await;
        let transport = TcpTransport::new(addr).with_max_reply_bytes(17);

        let reply = transport
            .exchange(b"{\"command\":\"get_scene_info\"}\n", Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(reply.len(), 17);
    }
}
