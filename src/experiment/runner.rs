use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, info_span, Instrument};
use uuid::Uuid;

use super::order::DisplayOrder;
use super::scenario::Scenario;
use super::trial::{SimilarityLevel, Trial, Variants};
use crate::config::ExperimentConfig;
use crate::error::ExperimentError;
use crate::input::{CaptureStep, Key, KeyMap, KeyPress, KeySource, ResponseBuffer};
use crate::outputs::text::display_text;
use crate::outputs::TrialLog;
use crate::services::llm::{Generator, VariantGenerator};
use crate::telemetry::{RunEnd, Stage, TelemetryEvent, TelemetryRecorder};
use crate::ui::{Display, RatingOption, View};

/// How a run ended. Escape is an outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed { trials: usize },
    Aborted { trials: usize },
}

/// One participant, one pass over the scenario list.
///
/// `Instructions -> {Scenario -> Capture -> Generating -> Rating -> Logging} x N -> Closing`.
/// Escape on any interactive screen returns [`Outcome::Aborted`] at once; the
/// trial in progress is dropped without touching the log.
pub struct Experiment<D, K, G> {
    config: ExperimentConfig,
    display: D,
    keys: K,
    variants: VariantGenerator<G>,
    keymap: KeyMap,
    log: TrialLog,
    telemetry: TelemetryRecorder,
    rng: StdRng,
    session: Uuid,
}

impl<D, K, G> Experiment<D, K, G>
where
    D: Display,
    K: KeySource,
    G: Generator,
{
    pub fn new(config: ExperimentConfig, display: D, keys: K, generator: G) -> Self {
        let log = TrialLog::new(config.output_path.clone());
        let variants = VariantGenerator::with_limit(generator, config.stored_limit);
        Self {
            config,
            display,
            keys,
            variants,
            keymap: KeyMap::default(),
            log,
            telemetry: TelemetryRecorder::new(),
            rng: StdRng::from_entropy(),
            session: Uuid::new_v4(),
        }
    }

    /// Deterministic display orders.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn session(&self) -> Uuid {
        self.session
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn telemetry(&self) -> &TelemetryRecorder {
        &self.telemetry
    }

    pub async fn run(&mut self) -> Result<Outcome, ExperimentError> {
        let span = info_span!("run", session = %self.session);
        self.run_trials().instrument(span).await
    }

    async fn run_trials(&mut self) -> Result<Outcome, ExperimentError> {
        let scenarios = self.config.scenarios();
        info!(scenarios = scenarios.len(), "experiment started");
        let mut trials = 0;

        // 1. Instructions
        self.enter(Stage::Instructions, None);
        if self.wait_key(&View::Instructions, |_| Some(()))?.is_none() {
            return Ok(self.finish(RunEnd::Aborted, trials));
        }

        // 2. Trials
        for scenario in &scenarios {
            let Some((trial, position)) = self.run_trial(scenario, scenarios.len()).await? else {
                return Ok(self.finish(RunEnd::Aborted, trials));
            };

            self.enter(Stage::Logging, Some(scenario.number));
            self.log.append(&trial)?;
            trials += 1;
            self.telemetry.record(TelemetryEvent::TrialLogged {
                scenario: scenario.number,
                selected: trial.selected,
            });

            let confirmation = View::Confirmation { position };
            if self.wait_key(&confirmation, |_| Some(()))?.is_none() {
                return Ok(self.finish(RunEnd::Aborted, trials));
            }
        }

        // 3. Closing
        self.enter(Stage::Closing, None);
        let closing = View::Closing {
            output_path: self.log.path().display().to_string(),
        };
        self.display.show(&closing).map_err(ExperimentError::Display)?;
        tokio::time::sleep(self.config.closing_delay).await;

        Ok(self.finish(RunEnd::Completed, trials))
    }

    /// The finished trial and the screen position picked, `None` on Escape.
    async fn run_trial(
        &mut self,
        scenario: &Scenario,
        total: usize,
    ) -> Result<Option<(Trial, usize)>, ExperimentError> {
        self.enter(Stage::ScenarioDisplay, Some(scenario.number));
        let view = View::Scenario {
            number: scenario.number,
            total,
            text: scenario.text.clone(),
        };
        if self
            .wait_key(&view, |press| (press.key == Key::Space).then_some(()))?
            .is_none()
        {
            return Ok(None);
        }

        self.enter(Stage::ResponseCapture, Some(scenario.number));
        let Some(response) = self.capture_response()? else {
            return Ok(None);
        };

        self.enter(Stage::Generating, Some(scenario.number));
        let variants = self.generate(&scenario.text, &response).await?;
        if self.wait_key(&View::Ready, |_| Some(()))?.is_none() {
            return Ok(None);
        }

        self.enter(Stage::RatingDisplay, Some(scenario.number));
        let order = DisplayOrder::shuffled(&mut self.rng);
        debug!(order = ?order.levels(), "display order");
        let view = self.rating_view(&variants, &order);
        let Some((position, selected)) = self.wait_key(&view, |press| {
            let position = press.selection()?;
            order.level_at(position).map(|level| (position, level))
        })?
        else {
            return Ok(None);
        };
        debug!(position, %selected, "option selected");

        let trial = Trial {
            scenario: scenario.text.clone(),
            response,
            variants,
            selected,
        };
        Ok(Some((trial, position)))
    }

    fn capture_response(&mut self) -> Result<Option<String>, ExperimentError> {
        let mut buffer = ResponseBuffer::new();
        loop {
            let view = View::Capture {
                response: buffer.as_str().to_string(),
            };
            self.display.show(&view).map_err(ExperimentError::Display)?;

            let Some(press) = self.poll()? else {
                continue;
            };
            match buffer.apply(&press, &self.keymap) {
                CaptureStep::Continue => {}
                CaptureStep::Submit => {
                    debug!(chars = buffer.as_str().chars().count(), "response submitted");
                    return Ok(Some(buffer.into_string()));
                }
                CaptureStep::Abort => return Ok(None),
            }
        }
    }

    async fn generate(
        &mut self,
        scenario: &str,
        response: &str,
    ) -> Result<Variants, ExperimentError> {
        self.display
            .show(&View::Generating { level: None })
            .map_err(ExperimentError::Display)?;

        let mut variants = Variants::default();
        for level in SimilarityLevel::ALL {
            self.display
                .show(&View::Generating { level: Some(level) })
                .map_err(ExperimentError::Display)?;

            let generated = self.variants.generate_level(level, scenario, response).await;
            self.telemetry.record(TelemetryEvent::Generation {
                level,
                latency_ms: generated.latency.as_millis() as u64,
                succeeded: generated.succeeded,
            });
            variants.set(level, generated.text);
        }
        Ok(variants)
    }

    fn rating_view(&self, variants: &Variants, order: &DisplayOrder) -> View {
        let options = order
            .levels()
            .iter()
            .enumerate()
            .map(|(i, level)| RatingOption {
                position: i + 1,
                text: display_text(variants.get(*level), self.config.display_limit),
            })
            .collect();
        View::Rating { options }
    }

    /// Draw-poll loop until `accept` takes a key. `None` on Escape.
    fn wait_key<T>(
        &mut self,
        view: &View,
        mut accept: impl FnMut(&KeyPress) -> Option<T>,
    ) -> Result<Option<T>, ExperimentError> {
        loop {
            self.display.show(view).map_err(ExperimentError::Display)?;
            if let Some(press) = self.poll()? {
                if press.is_escape() {
                    return Ok(None);
                }
                if let Some(value) = accept(&press) {
                    return Ok(Some(value));
                }
            }
        }
    }

    fn poll(&mut self) -> Result<Option<KeyPress>, ExperimentError> {
        self.keys
            .poll(self.config.poll_interval)
            .map_err(ExperimentError::Input)
    }

    fn enter(&mut self, stage: Stage, scenario: Option<usize>) {
        debug!(%stage, ?scenario, "stage entered");
        self.telemetry
            .record(TelemetryEvent::StageEntered { stage, scenario });
    }

    fn finish(&mut self, end: RunEnd, trials: usize) -> Outcome {
        info!(?end, trials, "experiment finished");
        self.telemetry.record(TelemetryEvent::RunFinished { end });
        self.telemetry.aggregate_session();
        match end {
            RunEnd::Completed => Outcome::Completed { trials },
            RunEnd::Aborted => Outcome::Aborted { trials },
        }
    }
}
