use std::time::Duration;

use rand::Rng;
use thiserror::Error;

use crate::marquee::DigitString;
use crate::render::RenderConfig;

/// Exclusive upper bound for the random fallback number.
pub const RANDOM_UPPER_BOUND: u64 = 1_000_000_000;

/// Error when building a [`Config`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("brightness must be within 0.0..=1.0, got {0}")]
    BrightnessOutOfRange(f32),
}

/// Everything a run needs, built once at start-up.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub digits: DigitString,
    pub render: RenderConfig,
}

impl Config {
    /// Build from an optional user input, falling back to a random number
    /// drawn from `rng` when no input is given.
    pub fn new(
        input: Option<&str>,
        brightness: f32,
        frame_delay: Duration,
        rng: &mut impl Rng,
    ) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&brightness) {
            return Err(ConfigError::BrightnessOutOfRange(brightness));
        }

        let digits = match input {
            Some(raw) => DigitString::new(raw),
            None => random_digits(rng),
        };

        Ok(Self {
            digits,
            render: RenderConfig {
                brightness,
                frame_delay,
            },
        })
    }

    /// Default brightness and delay with the given input.
    pub fn with_defaults(input: Option<&str>, rng: &mut impl Rng) -> Self {
        let render = RenderConfig::default();
        Self {
            digits: input.map_or_else(|| random_digits(rng), DigitString::new),
            render,
        }
    }
}

/// A random number in `0..RANDOM_UPPER_BOUND` as decimal digits.
pub fn random_digits(rng: &mut impl Rng) -> DigitString {
    let value = rng.random_range(0..RANDOM_UPPER_BOUND);
    log::debug!("no input given, using random number {value}");
    DigitString::from_number(value)
}
