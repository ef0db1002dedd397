use super::keymap::KeyMap;
use super::{Key, KeyPress};

/// What the capture stage does after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureStep {
    Continue,
    Submit,
    Abort,
}

/// The participant's answer for the current trial.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseBuffer {
    text: String,
}

impl ResponseBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Applies one key press.
    ///
    /// Enter on blank content is swallowed: the stage just keeps capturing.
    pub fn apply(&mut self, press: &KeyPress, keymap: &KeyMap) -> CaptureStep {
        match &press.key {
            Key::Escape => return CaptureStep::Abort,
            Key::Enter => {
                if !self.text.trim().is_empty() {
                    return CaptureStep::Submit;
                }
            }
            Key::Backspace => {
                self.text.pop();
            }
            Key::Space => self.text.push(' '),
            Key::Named(name) => {
                if let Some(c) = keymap.resolve(name, press.shift) {
                    self.text.push(c);
                }
            }
            Key::Other => {}
        }
        CaptureStep::Continue
    }
}
