//! Accept loop and request handling
//!
//! Each accepted connection runs in its own task. A semaphore caps how many are in flight;
//! once every permit is taken the loop stops accepting until one is released. Realisation
//! itself is CPU-bound and runs on the blocking pool.

use crate::protocol::{exception_reply, read_frame, write_frame, ProtocolError};
use prose_config::ServerConfig;
use prose_core::{Element, Pipeline, PipelineError};
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream, ToSocketAddrs};
use tokio::sync::Semaphore;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
    #[error("invalid request: {0}")]
    Request(#[from] serde_json::Error),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error("nothing could be realised")]
    Unrealisable,
    #[error("worker failed: {0}")]
    Worker(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Turns one request payload into one reply
pub trait RequestHandler: Send + Sync + 'static {
    fn handle(&self, request: &str) -> Result<String, ServerError>;
}

/// Parses the payload as a JSON element tree and realises it
///
/// Document trees run the full pipeline. Anything else is treated as a bare phrase and
/// wrapped in a sentence first. Blank output of either kind is [ServerError::Unrealisable],
/// since an empty frame cannot be sent.
pub struct RealiserHandler {
    pipeline: Pipeline,
}

impl RealiserHandler {
    pub fn new(pipeline: Pipeline) -> Self {
        Self { pipeline }
    }
}

impl RequestHandler for RealiserHandler {
    fn handle(&self, request: &str) -> Result<String, ServerError> {
        let element = Element::from_json(request)?;
        self.pipeline
            .try_realise_sentence(element)?
            .ok_or(ServerError::Unrealisable)
    }
}

pub struct Server<H> {
    handler: Arc<H>,
    permits: Arc<Semaphore>,
    max_request_bytes: usize,
}

impl<H: RequestHandler> Server<H> {
    pub fn new(handler: H, config: &ServerConfig) -> Self {
        Self {
            handler: Arc::new(handler),
            permits: Arc::new(Semaphore::new(config.max_connections.max(1))),
            max_request_bytes: config.max_request_bytes,
        }
    }

    /// Accepts connections until `shutdown` resolves
    ///
    /// Connections already being served finish in the background.
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        if let Ok(addr) = listener.local_addr() {
            tracing::info!(%addr, "listening");
        }

        loop {
            let permit = tokio::select! {
                _ = &mut shutdown => break,
                permit = Arc::clone(&self.permits).acquire_owned() => {
                    permit.map_err(|e| ServerError::Worker(e.to_string()))?
                }
            };

            let (stream, peer) = tokio::select! {
                _ = &mut shutdown => break,
                accepted = listener.accept() => match accepted {
                    Ok(accepted) => accepted,
                    Err(err) => {
                        tracing::warn!(error = %err, "accept failed");
                        continue;
                    }
                },
            };

            let handler = Arc::clone(&self.handler);
            let max_request_bytes = self.max_request_bytes;
            tokio::spawn(async move {
                handle_connection(stream, peer, handler, max_request_bytes).await;
                drop(permit);
            });
        }

        tracing::info!("shutting down");
        Ok(())
    }
}

async fn handle_connection<H: RequestHandler>(
    mut stream: TcpStream,
    peer: SocketAddr,
    handler: Arc<H>,
    max_request_bytes: usize,
) {
    let reply = match respond(&mut stream, handler, max_request_bytes).await {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(%peer, error = %err, "request failed");
            exception_reply(&err)
        }
    };

    // At-most-once: a reply that cannot be delivered is dropped with the connection.
    if let Err(err) = write_frame(&mut stream, &reply).await {
        tracing::debug!(%peer, error = %err, "reply discarded");
    }
    let _ = stream.shutdown().await;
}

async fn respond<H: RequestHandler>(
    stream: &mut TcpStream,
    handler: Arc<H>,
    max_request_bytes: usize,
) -> Result<String, ServerError> {
    let payload = read_frame(stream, max_request_bytes).await?;
    tracing::debug!(bytes = payload.len(), "request received");

    tokio::task::spawn_blocking(move || handler.handle(&payload))
        .await
        .map_err(|e| ServerError::Worker(e.to_string()))?
}

/// Largest reply [request] accepts
pub const MAX_REPLY_BYTES: usize = 16 * 1024 * 1024;

/// Sends one request and waits for the reply
pub async fn request<A: ToSocketAddrs>(addr: A, payload: &str) -> Result<String, ServerError> {
    request_with_limit(addr, payload, MAX_REPLY_BYTES).await
}

/// [request] with a caller-chosen cap on the reply size
pub async fn request_with_limit<A: ToSocketAddrs>(
    addr: A,
    payload: &str,
    max_reply_bytes: usize,
) -> Result<String, ServerError> {
    let mut stream = TcpStream::connect(addr).await?;
    write_frame(&mut stream, payload).await?;
    Ok(read_frame(&mut stream, max_reply_bytes).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl RequestHandler for Echo {
        fn handle(&self, request: &str) -> Result<String, ServerError> {
            Ok(request.to_uppercase())
        }
    }

    fn config(max_connections: usize) -> ServerConfig {
        ServerConfig {
            address: "127.0.0.1:0".into(),
            max_connections,
            max_request_bytes: 64,
        }
    }

    #[tokio::test]
    async fn serves_until_shutdown() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (stop, stopped) = tokio::sync::oneshot::channel::<()>();

        let server = Server::new(Echo, &config(2));
        let running = tokio::spawn(async move {
            server
                .serve(listener, async move {
                    let _ = stopped.await;
                })
                .await
        });

        assert_eq!(request(addr, "hi").await.unwrap(), "HI");
        assert_eq!(request(addr, "again").await.unwrap(), "AGAIN");

        stop.send(()).unwrap();
        running.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn oversized_request_gets_an_exception() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = Server::new(Echo, &config(1));
        tokio::spawn(async move { server.serve(listener, std::future::pending()).await });

        // Only the header is sent: the server answers before reading any payload.
        let mut stream = TcpStream::connect(addr).await.unwrap();
        tokio::io::AsyncWriteExt::write_u32(&mut stream, 65).await.unwrap();
        let reply = read_frame(&mut stream, MAX_REPLY_BYTES).await.unwrap();
        assert_eq!(reply, "Exception: frame of 65 bytes exceeds the limit of 64");
    }

    #[tokio::test]
    async fn oversized_reply_is_refused_from_its_header() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            read_frame(&mut stream, 64).await.unwrap();
            tokio::io::AsyncWriteExt::write_u32(&mut stream, u32::MAX).await.unwrap();
            // Hold the connection open until the client gives up.
            let _ = tokio::io::AsyncReadExt::read_u8(&mut stream).await;
        });

        let err = request(addr, "hi").await.unwrap_err();
        assert!(matches!(
            err,
            ServerError::Protocol(ProtocolError::TooLarge { max: MAX_REPLY_BYTES, .. })
        ));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = Server::new(Echo, &config(1));
        tokio::spawn(async move { server.serve(listener, std::future::pending()).await });
        let err = request_with_limit(addr, "hello", 4).await.unwrap_err();
        assert_eq!(err.to_string(), "frame of 5 bytes exceeds the limit of 4");
    }
}
