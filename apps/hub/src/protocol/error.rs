use thiserror::Error;

/// Why an inbound line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    /// Line reached `MAX_LINE_LEN` without a newline
    TooLong,
    /// Missing the trailing newline
    Unterminated,
    /// Does not start with `PLAY`
    Prefix,
    /// Wrong number of payload characters
    Length,
    /// Payload is not a valid card token
    Card,
}

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("channel closed by peer")]
    Eof,
    #[error("read failed: {0}")]
    Read(#[source] std::io::Error),
    #[error("write failed: {0}")]
    Write(#[source] std::io::Error),
    #[error("channel already closed")]
    Closed,
    #[error("expected handshake '@', got byte {0:#04x}")]
    BadHandshake(u8),
    #[error("malformed line {line:?} ({reason:?})")]
    Malformed { line: String, reason: MalformedKind },
}

impl ProtocolError {
    pub(crate) fn malformed(line: &[u8], reason: MalformedKind) -> Self {
        Self::Malformed {
            line: String::from_utf8_lossy(line).into_owned(),
            reason,
        }
    }
}
