#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use paraphrase_lab::config::ExperimentConfig;
use paraphrase_lab::error::GenerationError;
use paraphrase_lab::experiment::SimilarityLevel;
use paraphrase_lab::input::{Key, KeyPress, KeySource};
use paraphrase_lab::services::llm::prompt::instruction;
use paraphrase_lab::services::llm::Generator;
use paraphrase_lab::ui::{Display, View};

/// Key presses fed from a script. Running dry is an error so a stuck
/// test fails instead of spinning.
pub struct ScriptedKeys {
    presses: VecDeque<KeyPress>,
}

impl ScriptedKeys {
    pub fn new(presses: Vec<KeyPress>) -> Self {
        Self {
            presses: presses.into(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.presses.len()
    }
}

impl KeySource for ScriptedKeys {
    fn poll(&mut self, _timeout: Duration) -> io::Result<Option<KeyPress>> {
        match self.presses.pop_front() {
            Some(press) => Ok(Some(press)),
            None => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted")),
        }
    }
}

#[derive(Default)]
pub struct RecordingDisplay {
    pub views: Vec<View>,
}

impl RecordingDisplay {
    pub fn last_rating(&self) -> Option<&View> {
        self.views
            .iter()
            .rev()
            .find(|v| matches!(v, View::Rating { .. }))
    }

    /// One entry per rating screen; redraws of the same screen collapse.
    pub fn ratings(&self) -> Vec<&View> {
        let mut out = Vec::new();
        let mut previous: Option<&View> = None;
        for view in &self.views {
            if matches!(view, View::Rating { .. }) && previous != Some(view) {
                out.push(view);
            }
            previous = Some(view);
        }
        out
    }
}

impl Display for RecordingDisplay {
    fn show(&mut self, view: &View) -> io::Result<()> {
        self.views.push(view.clone());
        Ok(())
    }
}

/// Answers `variant-<level>` based on which instruction the prompt carries.
#[derive(Default)]
pub struct LevelEcho {
    pub prompts: Arc<Mutex<Vec<String>>>,
}

pub fn level_of(prompt: &str) -> Option<SimilarityLevel> {
    SimilarityLevel::ALL
        .into_iter()
        .find(|level| prompt.contains(instruction(*level)))
}

impl Generator for LevelEcho {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        match level_of(prompt) {
            Some(level) => Ok(format!("variant-{}", level)),
            None => Ok("variant-unknown".to_string()),
        }
    }
}

pub enum Reply {
    Text(String),
    Fail(&'static str),
}

/// Replies in order; fails like a crashed backend once the script is empty.
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<Reply>>,
}

impl ScriptedGenerator {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
        }
    }
}

impl Generator for ScriptedGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        let next = self.replies.lock().ok().and_then(|mut r| r.pop_front());
        match next {
            Some(Reply::Text(text)) => Ok(text),
            Some(Reply::Fail(stderr)) => Err(GenerationError::NonZeroExit {
                code: Some(1),
                stderr: stderr.to_string(),
            }),
            None => Err(GenerationError::NonZeroExit {
                code: Some(1),
                stderr: "script exhausted".to_string(),
            }),
        }
    }
}

pub fn temp_csv() -> PathBuf {
    std::env::temp_dir().join(format!("paraphrase_lab_{}.csv", uuid::Uuid::new_v4()))
}

pub fn test_config(output: PathBuf) -> ExperimentConfig {
    ExperimentConfig {
        output_path: output,
        closing_delay: Duration::from_millis(0),
        poll_interval: Duration::from_millis(0),
        ..ExperimentConfig::default()
    }
}

pub fn key(k: Key) -> KeyPress {
    KeyPress::plain(k)
}

/// Key presses a participant would make to type `text` (US-style names).
pub fn type_text(text: &str) -> Vec<KeyPress> {
    text.chars()
        .map(|c| match c {
            ' ' => KeyPress::plain(Key::Space),
            '.' => KeyPress::named("period"),
            ',' => KeyPress::named("comma"),
            '?' => KeyPress::named("question"),
            '!' => KeyPress::named("exclam"),
            '\'' => KeyPress::named("apostrophe"),
            c if c.is_uppercase() => KeyPress::named(&c.to_lowercase().to_string()).shifted(),
            c => KeyPress::named(&c.to_string()),
        })
        .collect()
}

/// Every key press needed for one full trial picking `position`.
pub fn trial_keys(response: &str, position: &str) -> Vec<KeyPress> {
    let mut keys = vec![key(Key::Space)];
    keys.extend(type_text(response));
    keys.push(key(Key::Enter));
    keys.push(KeyPress::named("x")); // "responses ready"
    keys.push(KeyPress::named(position));
    keys.push(KeyPress::named("x")); // confirmation
    keys
}

pub fn read_rows(path: &PathBuf) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .expect("open csv");
    reader
        .records()
        .map(|r| r.expect("csv record").iter().map(str::to_string).collect())
        .collect()
}
