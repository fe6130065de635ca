use std::env;

use tracing::warn;

use crate::latency::Latency;

pub const DELAY_ENV: &str = "FITNESS_CHAT_DELAY_MS";
pub const PROMPT_ENV: &str = "FITNESS_CHAT_PROMPT";

const DEFAULT_PROMPT: &str = "> ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub latency: Latency,
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            latency: Latency::from_millis(Latency::DEFAULT_MILLIS),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl Config {
    /// Reads settings from the process environment. `.env` must already be loaded.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let latency = match lookup(DELAY_ENV) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(millis) => Latency::from_millis(millis),
                Err(_) => {
                    warn!("Ignoring {}={:?}: not a number of milliseconds", DELAY_ENV, raw);
                    defaults.latency
                }
            },
            None => defaults.latency,
        };

        let prompt = lookup(PROMPT_ENV).unwrap_or(defaults.prompt);

        Self { latency, prompt }
    }

    /// Command-line flags take precedence over the environment.
    pub fn with_overrides(mut self, delay_ms: Option<u64>, no_delay: bool) -> Self {
        if let Some(millis) = delay_ms {
            self.latency = Latency::from_millis(millis);
        }
        if no_delay {
            self.latency = Latency::none();
        }
        self
    }
}
