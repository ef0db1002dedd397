/// One scenario prompt, identified by its 1-based position in the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub number: usize,
    pub text: String,
}

impl Scenario {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}
