use std::time::Duration;

use clap::Parser;
use digit_marquee::config::{Config, ConfigError};
use digit_marquee::render::{DEFAULT_BRIGHTNESS, DEFAULT_FRAME_DELAY};
use rand::Rng;

/// Scroll a number across an 8-pixel LED strip, one color per digit.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Digits to scroll; a random number below one billion when omitted.
    /// Only the leftmost 30 characters are shown.
    pub digits: Option<String>,

    /// Pixel brightness between 0.0 and 1.0
    #[arg(long, short, default_value_t = DEFAULT_BRIGHTNESS)]
    pub brightness: f32,

    /// Milliseconds each frame stays on the strip
    #[arg(long, short, default_value_t = DEFAULT_FRAME_DELAY.as_millis() as u32)]
    pub delay_ms: u32,
}

impl Cli {
    pub fn config(&self, rng: &mut impl Rng) -> Result<Config, ConfigError> {
        Config::new(
            self.digits.as_deref(),
            self.brightness,
            Duration::from_millis(self.delay_ms.into()),
            rng,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("digit-marquee").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn defaults_match_fixed_cadence() {
        let cli = parse(&["42"]);
        let config = cli.config(&mut StdRng::seed_from_u64(1)).expect("valid");

        assert_eq!(config.digits.as_str(), "42");
        assert_eq!(config.render.brightness, 0.1);
        assert_eq!(config.render.frame_delay, Duration::from_millis(500));
    }

    #[test]
    fn flags_override_defaults() {
        let cli = parse(&["--brightness", "0.5", "--delay-ms", "20", "7"]);
        let config = cli.config(&mut StdRng::seed_from_u64(1)).expect("valid");

        assert_eq!(config.render.brightness, 0.5);
        assert_eq!(config.render.frame_delay, Duration::from_millis(20));
    }

    #[test]
    fn no_digits_uses_random_fallback() {
        let cli = parse(&[]);

        assert!(cli.digits.is_none());
        let config = cli.config(&mut StdRng::seed_from_u64(1)).expect("valid");
        assert!(!config.digits.is_empty());
    }

    #[test]
    fn delay_beyond_u32_millis_is_rejected() {
        let too_long = (u64::from(u32::MAX) + 1).to_string();
        let result = Cli::try_parse_from(["digit-marquee", "--delay-ms", too_long.as_str(), "1"]);

        assert!(result.is_err(), "delay must fit the delay driver's u32 milliseconds");
    }

    #[test]
    fn invalid_brightness_is_reported() {
        let cli = parse(&["--brightness", "3", "1"]);

        assert!(cli.config(&mut StdRng::seed_from_u64(1)).is_err());
    }
}
