//! Reads raw server console output into a [`ChatRelay`].

use super::ChatRelay;
use std::borrow::Cow;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

/// Reads one line, without its line ending.
///
/// Server output is not guaranteed to be UTF-8; invalid bytes are replaced
/// instead of failing the read. Returns `None` at end of input.
pub async fn next_line<R>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    buf.clear();
    if reader.read_until(b'\n', buf).await? == 0 {
        return Ok(None);
    }

    let line = String::from_utf8_lossy(buf);
    if let Cow::Owned(_) = line {
        warn!("Replaced invalid UTF-8 in server output");
    }
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
}

/// Feeds every line to the relay until the input ends.
///
/// Returns the number of chat lines seen. Only I/O failures stop the pump.
pub async fn pump<R>(reader: &mut R, relay: &mut ChatRelay) -> io::Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    let mut chat = 0;
    while let Some(line) = next_line(reader, &mut buf).await? {
        if relay.feed_console_line(&line) {
            chat += 1;
        }
    }
    Ok(chat)
}
