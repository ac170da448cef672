//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_roshambo::{Move, OutcomePolicy};
use tracing::{debug, info, instrument};

/// How moves are drawn on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolStyle {
    /// Pictographs: 🪨 📜 ✂️
    #[default]
    Emoji,
    /// Plain words, for terminals without emoji fonts.
    Ascii,
}

impl SymbolStyle {
    /// Text used for `mv` in this style.
    pub fn render(self, mv: Move) -> &'static str {
        match self {
            SymbolStyle::Emoji => mv.symbol(),
            SymbolStyle::Ascii => mv.label(),
        }
    }
}

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed RNG seed; drawn from the OS when absent.
    seed: Option<u64>,

    /// How the required outcome changes between turns.
    outcome_policy: OutcomePolicy,

    /// How moves are drawn on screen.
    symbols: SymbolStyle,

    /// Where the terminal UI writes its log.
    log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            outcome_policy: OutcomePolicy::default(),
            symbols: SymbolStyle::default(),
            log_file: PathBuf::from("strictly_rps.log"),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the seed when one is given.
    #[instrument(skip(self))]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Overrides the outcome policy.
    #[instrument(skip(self))]
    pub fn with_outcome_policy(mut self, outcome_policy: OutcomePolicy) -> Self {
        self.outcome_policy = outcome_policy;
        self
    }

    /// Overrides the symbol style.
    #[instrument(skip(self))]
    pub fn with_symbols(mut self, symbols: SymbolStyle) -> Self {
        self.symbols = symbols;
        self
    }

    /// Builds the random source for a session.
    #[instrument(skip(self), fields(seed = ?self.seed))]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Serializes the configuration as TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_rng_repeats() {
        use rand::Rng;

        let config = GameConfig::default().with_seed(Some(42));
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }

    #[test]
    fn test_with_seed_none_keeps_existing() {
        let config = GameConfig::default().with_seed(Some(1)).with_seed(None);
        assert_eq!(config.seed(), &Some(1));
    }

    #[test]
    fn test_ascii_symbols() {
        assert_eq!(SymbolStyle::Ascii.render(Move::Scissors), "Scissors");
        assert_eq!(SymbolStyle::Emoji.render(Move::Rock), "🪨");
    }
}
