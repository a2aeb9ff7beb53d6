//! Game configuration.
//!
//! A host configures a session at startup by providing a `LudoConfig`:
//! - Who sits in each seat (human or bot)
//! - Cosmetic pacing for dice flicker, pawn steps and bot input
//! - Rule variants that are off by default
//!
//! Configs can be built in code with the `with_*` builders or loaded from
//! TOML. Every field has a default, so a partial file is valid:
//!
//! ```
//! use rust_ludo::core::{Color, LudoConfig, SeatKind};
//!
//! let config = LudoConfig::from_toml_str(r#"
//!     seed = 7
//!     bot_delay_ms = 250
//!     seats = ["Human", "Human", "Bot", "Bot"]
//! "#).unwrap();
//!
//! assert_eq!(config.seed, 7);
//! assert_eq!(config.seats[Color::Green], SeatKind::Human);
//! assert_eq!(config.flicker_count, 6);
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::color::{Color, ColorMap};

/// Who provides input for a seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeatKind {
    #[default]
    Human,
    Bot,
}

/// Errors from loading or validating a config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LudoConfig {
    /// Seed for the default dice source and cosmetic streams.
    pub seed: u64,

    /// Cosmetic dice values shown before the roll settles.
    pub flicker_count: u32,

    /// Delay between flicker frames.
    pub flicker_delay_ms: u64,

    /// Delay between single-cell pawn steps.
    pub step_delay_ms: u64,

    /// Pause before a bot rolls or picks a pawn.
    pub bot_delay_ms: u64,

    /// Seat assignments.
    pub seats: ColorMap<SeatKind>,

    /// Grant an extra turn for every 6, not only for leaving home,
    /// capturing or finishing.
    pub bonus_turn_on_six: bool,

    /// Keep playing after the first color wins until every place is decided.
    pub play_to_completion: bool,
}

impl Default for LudoConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            flicker_count: 6,
            flicker_delay_ms: 80,
            step_delay_ms: 150,
            bot_delay_ms: 1000,
            seats: ColorMap::new(|c| if c == Color::Red { SeatKind::Human } else { SeatKind::Bot }),
            bonus_turn_on_six: false,
            play_to_completion: false,
        }
    }
}

impl LudoConfig {
    /// Upper bound on flicker frames; more is certainly a typo.
    pub const MAX_FLICKER_COUNT: u32 = 100;

    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.flicker_count > Self::MAX_FLICKER_COUNT {
            return Err(ConfigError::Invalid(format!(
                "flicker_count {} exceeds {}",
                self.flicker_count,
                Self::MAX_FLICKER_COUNT
            )));
        }
        Ok(())
    }

    /// Config where every seat is a bot and nothing waits.
    #[must_use]
    pub fn all_bots() -> Self {
        Self::default()
            .with_seats(ColorMap::with_value(SeatKind::Bot))
            .without_delays()
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_seats(mut self, seats: ColorMap<SeatKind>) -> Self {
        self.seats = seats;
        self
    }

    #[must_use]
    pub fn with_seat(mut self, color: Color, kind: SeatKind) -> Self {
        self.seats[color] = kind;
        self
    }

    #[must_use]
    pub fn with_flicker_count(mut self, count: u32) -> Self {
        self.flicker_count = count;
        self
    }

    #[must_use]
    pub fn with_bot_delay_ms(mut self, ms: u64) -> Self {
        self.bot_delay_ms = ms;
        self
    }

    /// Zero every cosmetic delay.
    #[must_use]
    pub fn without_delays(mut self) -> Self {
        self.flicker_delay_ms = 0;
        self.step_delay_ms = 0;
        self.bot_delay_ms = 0;
        self
    }

    #[must_use]
    pub fn with_bonus_turn_on_six(mut self, enabled: bool) -> Self {
        self.bonus_turn_on_six = enabled;
        self
    }

    #[must_use]
    pub fn with_play_to_completion(mut self, enabled: bool) -> Self {
        self.play_to_completion = enabled;
        self
    }

    pub fn flicker_delay(&self) -> Duration {
        Duration::from_millis(self.flicker_delay_ms)
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    pub fn bot_delay(&self) -> Duration {
        Duration::from_millis(self.bot_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LudoConfig::default();

        assert_eq!(config.seed, 42);
        assert_eq!(config.bot_delay(), Duration::from_secs(1));
        assert_eq!(config.seats[Color::Red], SeatKind::Human);
        assert_eq!(config.seats[Color::Blue], SeatKind::Bot);
        assert!(!config.bonus_turn_on_six);
        assert!(!config.play_to_completion);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = LudoConfig::default()
            .with_seed(9)
            .with_seat(Color::Green, SeatKind::Human)
            .with_flicker_count(2)
            .with_bonus_turn_on_six(true)
            .without_delays();

        assert_eq!(config.seed, 9);
        assert_eq!(config.seats[Color::Green], SeatKind::Human);
        assert_eq!(config.flicker_count, 2);
        assert!(config.bonus_turn_on_six);
        assert_eq!(config.step_delay(), Duration::ZERO);
    }

    #[test]
    fn test_all_bots() {
        let config = LudoConfig::all_bots();
        assert!(config.seats.iter().all(|(_, &kind)| kind == SeatKind::Bot));
        assert_eq!(config.bot_delay_ms, 0);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = LudoConfig::from_toml_str("play_to_completion = true").unwrap();

        assert!(config.play_to_completion);
        assert_eq!(config.step_delay_ms, 150);
    }

    #[test]
    fn test_seats_as_plain_array() {
        let config = LudoConfig::from_toml_str(r#"seats = ["Bot", "Human", "Human", "Bot"]"#).unwrap();

        assert_eq!(config.seats[Color::Red], SeatKind::Bot);
        assert_eq!(config.seats[Color::Yellow], SeatKind::Human);

        let err = LudoConfig::from_toml_str(r#"seats = ["Bot", "Human"]"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = LudoConfig::from_toml_str("seed = \"abc\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_rejects_huge_flicker() {
        let err = LudoConfig::from_toml_str("flicker_count = 5000").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = LudoConfig::load("/nonexistent/ludo.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_serialization() {
        let config = LudoConfig::all_bots().with_seed(3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: LudoConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
