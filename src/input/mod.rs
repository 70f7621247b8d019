//! Input module
//!
//! Key decoding, key sources, and the key to action mapper.

pub mod keys;
pub mod mapper;

use std::io::{self, Read};

use crossterm::event::{self, Event};

pub use keys::{ByteKeys, Key};
pub use mapper::map_key;

/// Somewhere keystrokes come from. Reads block until a key arrives.
pub trait KeySource {
    /// Next key, or `None` once the source is exhausted
    fn next_key(&mut self) -> io::Result<Option<Key>>;
}

/// Keys from the interactive terminal (expects raw mode)
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> io::Result<Option<Key>> {
        loop {
            if let Event::Key(key_event) = event::read()? {
                if let Some(key) = Key::from_event(&key_event) {
                    return Ok(Some(key));
                }
            }
        }
    }
}

impl<R: Read> KeySource for ByteKeys<R> {
    fn next_key(&mut self) -> io::Result<Option<Key>> {
        ByteKeys::next_key(self)
    }
}
