pub mod client;
pub mod command;
pub mod prompt;
pub mod variants;

pub use client::LLMService;
pub use command::CommandGenerator;
pub use variants::VariantGenerator;

use std::future::Future;

use crate::config::Backend;
use crate::error::GenerationError;

/// Text generation as a capability: prompt in, text out.
///
/// Nothing outside this module knows whether that is a subprocess, an HTTP
/// server or a test script.
pub trait Generator {
    fn generate(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<String, GenerationError>> + Send;
}

/// The configured backend, picked once at startup.
pub enum AnyGenerator {
    Command(CommandGenerator),
    Http(LLMService),
}

impl AnyGenerator {
    pub fn from_backend(backend: &Backend) -> Self {
        match backend {
            Backend::Command { program, model } => {
                AnyGenerator::Command(CommandGenerator::ollama(program, model))
            }
            Backend::Http {
                base_url,
                n_predict,
                temperature,
            } => AnyGenerator::Http(LLMService::new(base_url, *n_predict, *temperature)),
        }
    }
}

impl Generator for AnyGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        match self {
            AnyGenerator::Command(g) => g.generate(prompt).await,
            AnyGenerator::Http(g) => g.generate(prompt).await,
        }
    }
}
