//! One player's pair of pipes, seen from the hub.

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::protocol::error::{MalformedKind, ProtocolError};
use crate::protocol::messages::{HANDSHAKE_BYTE, MAX_LINE_LEN};

/// Read side (player's stdout) and write side (player's stdin) of one seat.
///
/// Either half may be closed independently; closing twice is a no-op.
#[derive(Debug)]
pub struct PlayerChannel<R, W> {
    reader: Option<BufReader<R>>,
    writer: Option<W>,
}

impl<R, W> PlayerChannel<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: Some(BufReader::new(reader)),
            writer: Some(writer),
        }
    }

    /// Read exactly one byte and require it to be `@`.
    pub async fn read_handshake(&mut self) -> Result<(), ProtocolError> {
        let reader = self.reader.as_mut().ok_or(ProtocolError::Closed)?;
        let mut byte = [0u8; 1];
        match reader.read(&mut byte).await {
            Ok(0) => Err(ProtocolError::Eof),
            Ok(_) if byte[0] == HANDSHAKE_BYTE => Ok(()),
            Ok(_) => Err(ProtocolError::BadHandshake(byte[0])),
            Err(e) => Err(ProtocolError::Read(e)),
        }
    }

    /// Read one newline-terminated line, at most `MAX_LINE_LEN` bytes.
    pub async fn read_line(&mut self) -> Result<Vec<u8>, ProtocolError> {
        let reader = self.reader.as_mut().ok_or(ProtocolError::Closed)?;
        let mut line = Vec::with_capacity(MAX_LINE_LEN);
        (&mut *reader)
            .take(MAX_LINE_LEN as u64)
            .read_until(b'\n', &mut line)
            .await
            .map_err(ProtocolError::Read)?;

        if line.ends_with(b"\n") {
            Ok(line)
        } else if line.len() >= MAX_LINE_LEN {
            Err(ProtocolError::malformed(&line, MalformedKind::TooLong))
        } else {
            Err(ProtocolError::Eof)
        }
    }

    /// Write one complete message and flush it.
    pub async fn send(&mut self, msg: &str) -> Result<(), ProtocolError> {
        let writer = self.writer.as_mut().ok_or(ProtocolError::Closed)?;
        writer
            .write_all(msg.as_bytes())
            .await
            .map_err(ProtocolError::Write)?;
        writer.flush().await.map_err(ProtocolError::Write)
    }

    /// Close the hub's write side so the player sees EOF on its stdin.
    pub async fn close_writer(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            // Peer may already be gone
            let _ = writer.shutdown().await;
        }
    }

    pub fn close_reader(&mut self) {
        self.reader = None;
    }

    pub fn is_writer_open(&self) -> bool {
        self.writer.is_some()
    }
}
