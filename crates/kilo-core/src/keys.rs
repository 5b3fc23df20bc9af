//! Turns the raw byte stream of a terminal in raw mode into key events.
//!
//! Escape sequences that are truncated or unknown never surface as errors:
//! the escape byte is handed back as a plain symbol instead.

use std::io::{self, Read};

pub const ESCAPE: u8 = 0x1b;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    PageUp,
    PageDown,
    Home,
    End,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Symbol(u8),
    Movement(Movement),
}

/// Byte produced by pressing `key` together with Ctrl.
pub const fn ctrl_key(key: u8) -> u8 {
    key & 0x1f
}

/// Blocks until one key is available and decodes it.
///
/// A zero-length read is the terminal's read timeout expiring, so the first
/// byte is retried until it arrives. Bytes after an escape are read at most
/// once each, which keeps a lone Escape press from stalling the caller.
pub fn read_key<R: Read + ?Sized>(input: &mut R) -> io::Result<KeyEvent> {
    let first = loop {
        if let Some(byte) = read_byte(input)? {
            break byte;
        }
    };

    if first != ESCAPE {
        return Ok(KeyEvent::Symbol(first));
    }

    let mut seq = [0u8; 3];
    let mut len = 0;
    while len < 2 {
        let Some(byte) = read_byte(input)? else {
            return Ok(KeyEvent::Symbol(ESCAPE));
        };
        seq[len] = byte;
        len += 1;
    }

    if seq[0] == b'['
        && seq[1].is_ascii_digit()
        && let Some(byte) = read_byte(input)?
    {
        seq[len] = byte;
        len += 1;
    }

    let key = decode_escape(&seq[..len])
        .map(KeyEvent::Movement)
        .unwrap_or(KeyEvent::Symbol(ESCAPE));
    tracing::trace!(?key, seq = ?&seq[..len], "decoded escape sequence");
    Ok(key)
}

/// Maps the bytes following an escape to a movement.
pub fn decode_escape(seq: &[u8]) -> Option<Movement> {
    let movement = match seq {
        [b'[', b'A'] => Movement::ArrowUp,
        [b'[', b'B'] => Movement::ArrowDown,
        [b'[', b'C'] => Movement::ArrowRight,
        [b'[', b'D'] => Movement::ArrowLeft,
        [b'[', b'H'] | [b'O', b'H'] => Movement::Home,
        [b'[', b'F'] | [b'O', b'F'] => Movement::End,
        [b'[', b'1' | b'7', b'~'] => Movement::Home,
        [b'[', b'4' | b'8', b'~'] => Movement::End,
        [b'[', b'3', b'~'] => Movement::Delete,
        [b'[', b'5', b'~'] => Movement::PageUp,
        [b'[', b'6', b'~'] => Movement::PageDown,
        _ => return None,
    };
    Some(movement)
}

fn read_byte<R: Read + ?Sized>(input: &mut R) -> io::Result<Option<u8>> {
    let mut buf = [0u8; 1];
    match input.read(&mut buf) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(buf[0])),
        Err(err)
            if matches!(
                err.kind(),
                io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock
            ) =>
        {
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
