//! Key decoding
//!
//! Turns terminal events and raw byte streams into canonical [`Key`] tokens.
//! Arrow keys arrive in two encodings depending on the platform:
//!
//! ```text
//! ESC [ A / B / C / D        ANSI escape sequences (Unix terminals)
//! 0x00|0xE0  H / P / K / M   scan-code pairs (Windows consoles)
//! ```
//!
//! Both normalize to `Key::Up`, `Key::Down`, `Key::Right` and `Key::Left`.

use std::io::{self, Bytes, Read};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

const ESC: u8 = 0x1b;

/// A single decoded keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Enter,
    Backspace,
    Esc,
    /// Anything we could not decode
    Other,
}

impl Key {
    /// Decode a crossterm key event. Release and repeat events yield `None`.
    pub fn from_event(event: &KeyEvent) -> Option<Key> {
        if event.kind != KeyEventKind::Press {
            return None;
        }
        // Raw mode swallows SIGINT, so Ctrl+C quits like `q`
        if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
            return Some(Key::Char('q'));
        }
        Some(Key::from(event.code))
    }
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Esc => Key::Esc,
            _ => Key::Other,
        }
    }
}

/// Final byte of an `ESC [ x` arrow sequence
pub fn decode_csi_arrow(final_byte: u8) -> Option<Key> {
    match final_byte {
        b'A' => Some(Key::Up),
        b'B' => Some(Key::Down),
        b'C' => Some(Key::Right),
        b'D' => Some(Key::Left),
        _ => None,
    }
}

/// Second byte of a `0x00`/`0xE0` console scan-code pair
pub fn decode_scan_code(code: u8) -> Option<Key> {
    match code {
        b'H' => Some(Key::Up),
        b'P' => Some(Key::Down),
        b'M' => Some(Key::Right),
        b'K' => Some(Key::Left),
        _ => None,
    }
}

/// Reads keys from a raw byte stream, e.g. stdin when it is piped.
pub struct ByteKeys<R: Read> {
    bytes: Bytes<R>,
    /// A byte read ahead that turned out to start the next key
    pending: Option<u8>,
}

impl<R: Read> ByteKeys<R> {
    pub fn new(reader: R) -> Self {
        Self {
            bytes: reader.bytes(),
            pending: None,
        }
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(byte) = self.pending.take() {
            return Ok(Some(byte));
        }
        self.bytes.next().transpose()
    }

    /// Decode the next key. Returns `Ok(None)` at end of input.
    pub fn next_key(&mut self) -> io::Result<Option<Key>> {
        let Some(first) = self.next_byte()? else {
            return Ok(None);
        };

        let key = match first {
            ESC => match self.next_byte()? {
                Some(b'[') => match self.next_byte()? {
                    Some(final_byte) => decode_csi_arrow(final_byte).unwrap_or(Key::Other),
                    None => Key::Other,
                },
                Some(other) => {
                    self.pending = Some(other);
                    Key::Esc
                }
                None => Key::Esc,
            },
            // 0xE0 also leads three-byte UTF-8 characters
            0x00 | 0xe0 => match self.next_byte()? {
                Some(code) => match decode_scan_code(code) {
                    Some(key) => key,
                    None if first == 0xe0 && is_continuation(code) => {
                        self.finish_utf8(&mut vec![first, code], 3)?
                    }
                    None => Key::Other,
                },
                None => Key::Other,
            },
            b'\r' | b'\n' => Key::Enter,
            0x08 | 0x7f => Key::Backspace,
            byte if byte.is_ascii_graphic() || byte == b' ' => Key::Char(byte as char),
            lead @ 0xc2..=0xdf => self.finish_utf8(&mut vec![lead], 2)?,
            lead @ 0xe1..=0xef => self.finish_utf8(&mut vec![lead], 3)?,
            lead @ 0xf0..=0xf4 => self.finish_utf8(&mut vec![lead], 4)?,
            _ => Key::Other,
        };

        Ok(Some(key))
    }

    /// Read the rest of a UTF-8 sequence so one character is one key. A byte
    /// that cannot continue the sequence is kept for the next key.
    fn finish_utf8(&mut self, buf: &mut Vec<u8>, len: usize) -> io::Result<Key> {
        while buf.len() < len {
            match self.next_byte()? {
                Some(byte) if is_continuation(byte) => buf.push(byte),
                Some(byte) => {
                    self.pending = Some(byte);
                    return Ok(Key::Other);
                }
                None => return Ok(Key::Other),
            }
        }
        Ok(std::str::from_utf8(buf)
            .ok()
            .and_then(|s| s.chars().next())
            .map_or(Key::Other, Key::Char))
    }
}

fn is_continuation(byte: u8) -> bool {
    byte & 0xc0 == 0x80
}
