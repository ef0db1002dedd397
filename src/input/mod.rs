pub mod capture;
pub mod keymap;
pub mod terminal;

pub use capture::{CaptureStep, ResponseBuffer};
pub use keymap::KeyMap;

use std::io;
use std::time::Duration;

/// Raw key identity, before any character mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Backspace,
    Space,
    /// Printable key by name: `"a"`, `"1"`, `"period"`, `"ä"`, ...
    Named(String),
    /// Anything non-printable we do not care about (arrows, F-keys, ...).
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub shift: bool,
}

impl KeyPress {
    pub fn plain(key: Key) -> Self {
        Self { key, shift: false }
    }

    pub fn named(name: &str) -> Self {
        Self::plain(Key::Named(name.to_string()))
    }

    pub fn shifted(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn is_escape(&self) -> bool {
        self.key == Key::Escape
    }

    /// The digit `1`..=`3` if this is an option-selection key.
    pub fn selection(&self) -> Option<usize> {
        match &self.key {
            Key::Named(name) => match name.as_str() {
                "1" => Some(1),
                "2" => Some(2),
                "3" => Some(3),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Where key presses come from. The terminal in production, a script in tests.
pub trait KeySource {
    /// Waits at most `timeout` for the next key press.
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<KeyPress>>;
}
