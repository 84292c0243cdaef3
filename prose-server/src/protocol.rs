//! Frame codec
//!
//! ```text
//! +----------------+---------------------+
//! | length: u32 BE | payload: length B   |
//! +----------------+---------------------+
//! ```
//!
//! Requests and replies share the same framing. A reply that starts with
//! [EXCEPTION_PREFIX] carries an error message instead of realised text.

use std::fmt::Display;
use std::io;
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

pub const EXCEPTION_PREFIX: &str = "Exception: ";

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("connection closed before the full frame arrived")]
    Truncated,
    #[error("empty request")]
    EmptyPayload,
    #[error("frame of {len} bytes exceeds the limit of {max}")]
    TooLarge { len: usize, max: usize },
    #[error("payload is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error(transparent)]
    Io(io::Error),
}

impl From<io::Error> for ProtocolError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => ProtocolError::Truncated,
            _ => ProtocolError::Io(err),
        }
    }
}

/// Reads one frame, rejecting empty and oversized payloads before reading them
pub async fn read_frame<R>(reader: &mut R, max_len: usize) -> Result<String, ProtocolError>
where
    R: AsyncRead + Unpin,
{
    let len = reader.read_u32().await? as usize;
    if len == 0 {
        return Err(ProtocolError::EmptyPayload);
    }
    if len > max_len {
        return Err(ProtocolError::TooLarge { len, max: max_len });
    }

    let mut payload = vec![0u8; len];
    reader.read_exact(&mut payload).await?;
    Ok(String::from_utf8(payload)?)
}

pub async fn write_frame<W>(writer: &mut W, payload: &str) -> Result<(), ProtocolError>
where
    W: AsyncWrite + Unpin,
{
    let len = u32::try_from(payload.len()).map_err(|_| ProtocolError::TooLarge {
        len: payload.len(),
        max: u32::MAX as usize,
    })?;
    writer.write_u32(len).await?;
    writer.write_all(payload.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}

pub fn exception_reply(err: &impl Display) -> String {
    format!("{}{}", EXCEPTION_PREFIX, err)
}
