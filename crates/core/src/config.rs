//! Layered game configuration.
//!
//! Values come from built-in defaults, then an optional TOML file, then
//! `MASTERMIND_*` environment variables. The driver applies command-line
//! overrides last and calls [`AppConfig::clamp`] to turn requested values
//! into validated [`Rules`].

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::engine::Rules;

/// Slot count of the classic game.
pub const PEG_SLOTS: usize = 4;
/// Smallest palette.
pub const MIN_PEG_COLORS: u8 = 2;
/// Largest palette.
pub const MAX_PEG_COLORS: u8 = MIN_PEG_COLORS + 8;
/// Fewest turns a game may allow.
pub const MIN_TURNS: u32 = 2;
/// Fewest slots per code.
pub const MIN_SLOTS: usize = 1;
/// Most slots per code.
pub const MAX_SLOTS: usize = 8;
/// Palette size when none is requested.
pub const DEFAULT_COLORS: u8 = 8;
/// Turn allowance when none is requested.
pub const DEFAULT_TURNS: u32 = 10;

/// Directory under the platform config dir holding `config.toml`.
pub const CONFIG_DIR_NAME: &str = "mastermind";
const ENV_PREFIX: &str = "MASTERMIND";

const DEFAULT_CONFIG_TOML: &str = r#"# Mastermind settings. Command-line flags override these values.

# Number of peg colors, 2 to 10.
colors = 8

# Guesses allowed before the game is lost, at least 2.
turns = 10

# Pegs per code.
slots = 4

# Fixed seed for a reproducible hidden code. Leave unset for a new code each game.
# seed = 42

# Colored pegs in the terminal.
color_output = true
"#;

/// Requested game settings before clamping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Requested palette size.
    pub colors: i64,
    /// Requested turn allowance. Values past `u32::MAX` are capped there.
    pub turns: i64,
    /// Requested pegs per code.
    pub slots: i64,
    /// Fixed RNG seed, if any.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Style pegs with terminal colors.
    pub color_output: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.into(),
            turns: DEFAULT_TURNS.into(),
            slots: PEG_SLOTS as i64,
            seed: None,
            color_output: true,
        }
    }
}

/// Command-line values that take precedence over loaded configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// `-c NUMBER`
    pub colors: Option<i64>,
    /// `-t NUMBER`
    pub turns: Option<i64>,
    /// `-s NUMBER`
    pub slots: Option<i64>,
    /// `--seed N`
    pub seed: Option<u64>,
    /// `--no-color`
    pub no_color: bool,
}

/// A requested value that was moved into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClampWarning {
    /// Palette size clamped.
    Colors {
        /// Value as requested.
        requested: i64,
        /// Value actually used.
        applied: u8,
    },
    /// Turn allowance clamped.
    Turns {
        /// Value as requested.
        requested: i64,
        /// Value actually used.
        applied: u32,
    },
    /// Slot count clamped.
    Slots {
        /// Value as requested.
        requested: i64,
        /// Value actually used.
        applied: usize,
    },
}

impl fmt::Display for ClampWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClampWarning::Colors { applied, .. } => {
                write!(f, "Wrong number of colors, set to {applied}")
            }
            ClampWarning::Turns { applied, .. } => write!(f, "Wrong turns, set to {applied}"),
            ClampWarning::Slots { applied, .. } => {
                write!(f, "Wrong number of slots, set to {applied}")
            }
        }
    }
}

impl AppConfig {
    /// Load from the default config file location plus the environment.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path().as_deref())
    }

    /// Load from `path` (if it exists) plus the environment.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let defaults = AppConfig::default();
        let mut builder = Config::builder()
            .set_default("colors", defaults.colors)?
            .set_default("turns", defaults.turns)?
            .set_default("slots", defaults.slots)?
            .set_default("color_output", defaults.color_output)?;

        if let Some(path) = path {
            builder = builder.add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .context("failed to read configuration")?;

        settings
            .try_deserialize()
            .context("failed to parse configuration")
    }

    /// Apply command-line overrides on top of loaded values.
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(colors) = overrides.colors {
            self.colors = colors;
        }
        if let Some(turns) = overrides.turns {
            self.turns = turns;
        }
        if let Some(slots) = overrides.slots {
            self.slots = slots;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        if overrides.no_color {
            self.color_output = false;
        }
    }

    /// Clamp requested values into the playable range.
    ///
    /// The returned rules always pass [`Rules::new`]. One warning is produced
    /// for every value that had to move.
    pub fn clamp(&self) -> (Rules, Vec<ClampWarning>) {
        let mut warnings = Vec::new();

        let colors = self
            .colors
            .clamp(MIN_PEG_COLORS.into(), MAX_PEG_COLORS.into()) as u8;
        if i64::from(colors) != self.colors {
            warnings.push(ClampWarning::Colors {
                requested: self.colors,
                applied: colors,
            });
        }

        // No upper bound; requests past the counter width saturate silently.
        let turns = u32::try_from(self.turns.max(MIN_TURNS.into())).unwrap_or(u32::MAX);
        if self.turns < i64::from(MIN_TURNS) {
            warnings.push(ClampWarning::Turns {
                requested: self.turns,
                applied: turns,
            });
        }

        let slots = self.slots.clamp(MIN_SLOTS as i64, MAX_SLOTS as i64) as usize;
        if slots as i64 != self.slots {
            warnings.push(ClampWarning::Slots {
                requested: self.slots,
                applied: slots,
            });
        }

        for warning in &warnings {
            warn!(?warning, "Configuration value clamped");
        }

        (
            Rules {
                colors,
                slots,
                turns,
            },
            warnings,
        )
    }
}

/// Default location of `config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join("config.toml"))
}

/// Write the commented default config file when none exists yet.
pub fn ensure_default_config() -> Result<()> {
    match default_config_path() {
        Some(path) => ensure_default_config_at(&path),
        None => Ok(()),
    }
}

/// Write the default config to `path` unless a file is already there.
pub fn ensure_default_config_at(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory {}", parent.display()))?;
    }

    fs::write(path, DEFAULT_CONFIG_TOML)
        .with_context(|| format!("failed to write default config {}", path.display()))?;
    info!(path = %path.display(), "Wrote default configuration");
    Ok(())
}
