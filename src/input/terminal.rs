use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::keymap::KeyMap;
use super::{Key, KeyPress, KeySource};

/// Key presses from the real terminal.
pub struct TerminalKeys {
    keymap: KeyMap,
}

impl TerminalKeys {
    pub fn new(keymap: KeyMap) -> Self {
        Self { keymap }
    }

    /// Terminals hand us layout-resolved characters, so shift is only
    /// reported for letters; punctuation maps back to its own key name.
    pub fn translate(&self, key: KeyEvent) -> Option<KeyPress> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        let press = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                KeyPress::plain(Key::Escape)
            }
            // Ctrl chords type nothing. Ctrl+Alt is AltGr on some platforms and
            // still produces a character.
            KeyCode::Char(_) if is_ctrl_chord(key.modifiers) => KeyPress::plain(Key::Other),
            KeyCode::Esc => KeyPress::plain(Key::Escape),
            KeyCode::Enter => KeyPress::plain(Key::Enter),
            KeyCode::Backspace => KeyPress::plain(Key::Backspace),
            KeyCode::Char(' ') => KeyPress::plain(Key::Space),
            KeyCode::Char(c) if c.is_alphabetic() => KeyPress {
                key: Key::Named(c.to_lowercase().collect()),
                shift: c.is_uppercase(),
            },
            KeyCode::Char(c) => match self.keymap.name_of(c) {
                Some(name) => KeyPress::named(name),
                None => KeyPress::named(&c.to_string()),
            },
            _ => KeyPress::plain(Key::Other),
        };
        Some(press)
    }
}

fn is_ctrl_chord(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) && !modifiers.contains(KeyModifiers::ALT)
}

impl KeySource for TerminalKeys {
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<KeyPress>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(self.translate(key)),
            // Resize and friends: the caller redraws on the next frame anyway.
            _ => Ok(None),
        }
    }
}
