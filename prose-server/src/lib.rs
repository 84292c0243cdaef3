//! Realisation over TCP
//!
//! One request per connection. The client sends a frame holding a JSON element tree and
//! gets back a frame holding the realised text, or `Exception: <message>` when anything
//! went wrong. The connection is closed after the reply.
//!
//! Frames are a 4-byte big-endian byte count followed by that many bytes of UTF-8. See
//! [protocol] for the codec and [server] for the accept loop.

pub mod protocol;
pub mod server;

pub use protocol::{exception_reply, read_frame, write_frame, ProtocolError, EXCEPTION_PREFIX};
pub use server::{
    request, request_with_limit, RealiserHandler, RequestHandler, Server, ServerError,
    MAX_REPLY_BYTES,
};
