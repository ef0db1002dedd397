pub mod render;
pub mod terminal;
pub mod view;

pub use terminal::TerminalDisplay;
pub use view::{RatingOption, Tone, View, ViewLine};

use std::io;

/// Something that can put a [`View`] in front of the participant.
pub trait Display {
    fn show(&mut self, view: &View) -> io::Result<()>;
}
