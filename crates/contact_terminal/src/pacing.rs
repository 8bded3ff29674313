//! Human-like typing delays.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SPACE_FACTOR: f64 = 0.4;
const PUNCTUATION_FACTOR: f64 = 3.0;
const JITTER_MIN: f64 = 0.6;
const JITTER_MAX: f64 = 1.4;

#[derive(Debug, Clone, PartialEq)]
pub struct PacingConfig {
    /// Delay for an ordinary grapheme before class scaling and jitter.
    pub base_delay: Duration,
    pub line_gap: Duration,
    pub action_gap_min: Duration,
    pub action_gap_max: Duration,
    /// Chance that a grapheme is followed by an extra hesitation.
    pub pause_probability: f64,
    pub pause_min: Duration,
    pub pause_max: Duration,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            base_delay: Duration::from_millis(28),
            line_gap: Duration::from_millis(90),
            action_gap_min: Duration::from_millis(250),
            action_gap_max: Duration::from_millis(700),
            pause_probability: 0.04,
            pause_min: Duration::from_millis(120),
            pause_max: Duration::from_millis(320),
        }
    }
}

impl PacingConfig {
    /// Zero delays everywhere, for tests that only care about ordering.
    pub fn instant() -> Self {
        Self {
            base_delay: Duration::ZERO,
            line_gap: Duration::ZERO,
            action_gap_min: Duration::ZERO,
            action_gap_max: Duration::ZERO,
            pause_probability: 0.0,
            pause_min: Duration::ZERO,
            pause_max: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphemeClass {
    Space,
    Punctuation,
    Other,
}

impl GraphemeClass {
    pub fn of(grapheme: &str) -> Self {
        if grapheme.chars().all(char::is_whitespace) {
            Self::Space
        } else if grapheme.chars().all(|ch| ch.is_ascii_punctuation() || ch == '…') {
            Self::Punctuation
        } else {
            Self::Other
        }
    }

    fn factor(self) -> f64 {
        match self {
            Self::Space => SPACE_FACTOR,
            Self::Punctuation => PUNCTUATION_FACTOR,
            Self::Other => 1.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Pacer {
    config: PacingConfig,
    rng: StdRng,
}

impl Pacer {
    pub fn new(config: PacingConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn seeded(config: PacingConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(config: PacingConfig, rng: StdRng) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &PacingConfig {
        &self.config
    }

    /// Time to wait after revealing `grapheme`.
    pub fn grapheme_delay(&mut self, grapheme: &str) -> Duration {
        let jitter = self.rng.gen_range(JITTER_MIN..=JITTER_MAX);
        let scaled = self
            .config
            .base_delay
            .mul_f64(GraphemeClass::of(grapheme).factor() * jitter);

        let probability = self.config.pause_probability.clamp(0.0, 1.0);
        if probability > 0.0 && self.rng.gen_bool(probability) {
            scaled + self.between(self.config.pause_min, self.config.pause_max)
        } else {
            scaled
        }
    }

    pub fn line_gap(&self) -> Duration {
        self.config.line_gap
    }

    pub fn action_gap(&mut self) -> Duration {
        self.between(self.config.action_gap_min, self.config.action_gap_max)
    }

    fn between(&mut self, min: Duration, max: Duration) -> Duration {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..=max)
    }
}
