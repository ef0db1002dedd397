use crate::experiment::trial::SimilarityLevel;

/// Colour role of a line; mapped to real colours by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Input,
    Confirm,
    /// Rating option at 0-based screen position; one colour per position.
    Option(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingOption {
    pub position: usize,
    pub text: String,
}

/// Everything the participant can be looking at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Instructions,
    Scenario {
        number: usize,
        total: usize,
        text: String,
    },
    Capture {
        response: String,
    },
    Generating {
        level: Option<SimilarityLevel>,
    },
    Ready,
    Rating {
        options: Vec<RatingOption>,
    },
    Confirmation {
        position: usize,
    },
    Closing {
        output_path: String,
    },
}

/// A block of text on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLine {
    pub text: String,
    pub tone: Tone,
}

impl ViewLine {
    fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

pub const CAPTURE_PROMPT: &str = "Type your response (press ENTER when done, ESC to quit):";
pub const RATING_PROMPT: &str = "Which response best fits your answer? Press 1, 2, or 3.";

impl View {
    /// Text blocks top to bottom. The first block of `Capture` and `Rating`
    /// is the heading; the renderer places the rest at fixed offsets.
    pub fn lines(&self) -> Vec<ViewLine> {
        match self {
            View::Instructions => vec![ViewLine::new(
                "Press any key to begin.\n(Press ESC at any time to quit)",
                Tone::Normal,
            )],
            View::Scenario {
                number,
                total,
                text,
            } => vec![ViewLine::new(
                format!(
                    "Scenario {}/{}:\n\n{}\n\nPress SPACE to continue (ESC to quit)",
                    number, total, text
                ),
                Tone::Normal,
            )],
            View::Capture { response } => vec![
                ViewLine::new(CAPTURE_PROMPT, Tone::Normal),
                ViewLine::new(format!("{}_", response), Tone::Input),
            ],
            View::Generating { level: None } => vec![ViewLine::new(
                "Generating AI responses... Please wait (this may take some time).",
                Tone::Normal,
            )],
            View::Generating { level: Some(level) } => vec![ViewLine::new(
                format!("Generating {} similarity response...", level),
                Tone::Normal,
            )],
            View::Ready => vec![ViewLine::new(
                "Responses ready! Press any key to continue.",
                Tone::Normal,
            )],
            View::Rating { options } => {
                let mut lines = vec![ViewLine::new(RATING_PROMPT, Tone::Normal)];
                lines.extend(options.iter().map(|opt| {
                    ViewLine::new(
                        format!("{}. {}", opt.position, opt.text),
                        Tone::Option(opt.position.saturating_sub(1)),
                    )
                }));
                lines
            }
            View::Confirmation { position } => vec![ViewLine::new(
                format!(
                    "Response {} recorded. Press any key for next scenario.",
                    position
                ),
                Tone::Confirm,
            )],
            View::Closing { output_path } => vec![ViewLine::new(
                format!(
                    "Thank you for participating!\nData saved to {}",
                    output_path
                ),
                Tone::Normal,
            )],
        }
    }
}
