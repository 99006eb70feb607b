//! Party configuration.
//!
//! A party is configured at startup by providing:
//! - the four team names
//! - the roster size limit
//! - the games on the wheel and the charades prompts
//! - `WheelConfig`: spin feel and slice palette
//!
//! Every field has a default matching the stock party, so a JSON file only
//! needs the fields it changes.

use serde::{Deserialize, Serialize};

use super::item::Item;
use super::team::TeamSet;
use crate::error::{DrawError, DrawResult};

/// Default maximum roster size.
pub const DEFAULT_ROSTER_LIMIT: usize = 30;

/// Games on the stock wheel.
pub const DEFAULT_GAMES: [&str; 8] = [
    "M&M Mayhem",
    "Star(burst) Tower",
    "Spoon Walk",
    "Zodiac Charades",
    "Balloon Cup Push",
    "Rock Paper Scissors Snake",
    "Mystery Phone Game",
    "Split or Steal",
];

/// Zodiac animals used as charades prompts.
pub const DEFAULT_CHARADES: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster", "Dog",
    "Pig",
];

/// Slice colours, cycled around the wheel.
pub const DEFAULT_PALETTE: [&str; 8] = [
    "#111827", "#0f766e", "#7c3aed", "#b91c1c", "#1d4ed8", "#92400e", "#047857", "#6b7280",
];

/// How the game wheel spins and looks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Fewest whole turns added to a spin.
    pub min_extra_spins: u32,

    /// Most whole turns added to a spin.
    pub max_extra_spins: u32,

    /// Cosmetic animation length. The outcome is fixed before it starts.
    pub spin_duration_ms: u64,

    /// Slice fill colours.
    pub palette: Vec<String>,

    /// Labels longer than this are cut and end with `…`.
    pub label_max_chars: usize,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            min_extra_spins: 4,
            max_extra_spins: 6,
            spin_duration_ms: 2400,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            label_max_chars: 18,
        }
    }
}

impl WheelConfig {
    /// Set the range of extra whole turns.
    #[must_use]
    pub fn with_extra_spins(mut self, min: u32, max: u32) -> Self {
        self.min_extra_spins = min;
        self.max_extra_spins = max;
        self
    }

    /// Set the animation length.
    #[must_use]
    pub fn with_spin_duration_ms(mut self, ms: u64) -> Self {
        self.spin_duration_ms = ms;
        self
    }

    fn validate(&self) -> DrawResult<()> {
        if self.min_extra_spins > self.max_extra_spins {
            return Err(DrawError::InvalidConfig {
                field: "wheel.min_extra_spins".into(),
                reason: format!(
                    "{} is greater than max_extra_spins {}",
                    self.min_extra_spins, self.max_extra_spins
                ),
            });
        }
        if self.palette.is_empty() {
            return Err(DrawError::InvalidConfig {
                field: "wheel.palette".into(),
                reason: "needs at least one colour".into(),
            });
        }
        if self.label_max_chars == 0 {
            return Err(DrawError::InvalidConfig {
                field: "wheel.label_max_chars".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

/// Complete party configuration.
///
/// ## Example
///
/// ```
/// use party_draw::core::PartyConfig;
///
/// let config = PartyConfig::from_json_str(r#"{ "roster_limit": 12 }"#).unwrap();
/// assert_eq!(config.roster_limit, 12);
/// assert_eq!(config.games.len(), 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartyConfig {
    /// The four teams, in display order.
    pub team_names: TeamSet,

    /// Maximum number of people on the roster.
    pub roster_limit: usize,

    /// Games on the wheel.
    pub games: Vec<Item>,

    /// Charades prompts.
    pub charades: Vec<Item>,

    /// Wheel behaviour.
    pub wheel: WheelConfig,
}

impl Default for PartyConfig {
    fn default() -> Self {
        Self {
            team_names: TeamSet::default(),
            roster_limit: DEFAULT_ROSTER_LIMIT,
            games: Item::list(DEFAULT_GAMES),
            charades: Item::list(DEFAULT_CHARADES),
            wheel: WheelConfig::default(),
        }
    }
}

impl PartyConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> DrawResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_string(&self) -> DrawResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check cross-field constraints that serde cannot express.
    ///
    /// Team names are already checked when the `TeamSet` is built.
    pub fn validate(&self) -> DrawResult<()> {
        if self.roster_limit == 0 {
            return Err(DrawError::InvalidConfig {
                field: "roster_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        check_unique("games", &self.games)?;
        check_unique("charades", &self.charades)?;
        self.wheel.validate()
    }

    /// Set the team names.
    #[must_use]
    pub fn with_team_names(mut self, teams: TeamSet) -> Self {
        self.team_names = teams;
        self
    }

    /// Set the roster limit.
    #[must_use]
    pub fn with_roster_limit(mut self, limit: usize) -> Self {
        self.roster_limit = limit;
        self
    }

    /// Replace the games on the wheel.
    #[must_use]
    pub fn with_games(mut self, games: Vec<Item>) -> Self {
        self.games = games;
        self
    }

    /// Replace the charades prompts.
    #[must_use]
    pub fn with_charades(mut self, charades: Vec<Item>) -> Self {
        self.charades = charades;
        self
    }

    /// Replace the wheel settings.
    #[must_use]
    pub fn with_wheel(mut self, wheel: WheelConfig) -> Self {
        self.wheel = wheel;
        self
    }
}

fn check_unique(field: &str, items: &[Item]) -> DrawResult<()> {
    let mut seen = rustc_hash::FxHashSet::default();
    for item in items {
        if !seen.insert(item) {
            return Err(DrawError::InvalidConfig {
                field: field.into(),
                reason: format!("duplicate entry {:?}", item.as_str()),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PartyConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.roster_limit, 30);
        assert_eq!(config.charades.len(), 12);
        assert_eq!(config.wheel.min_extra_spins, 4);
        assert_eq!(config.wheel.max_extra_spins, 6);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = PartyConfig::from_json_str(
            r#"{ "team_names": ["Red", "Blue", "Green", "Gold"], "wheel": { "spin_duration_ms": 500 } }"#,
        )
        .unwrap();

        assert_eq!(config.team_names.name(crate::core::TeamId::new(3)), "Gold");
        assert_eq!(config.wheel.spin_duration_ms, 500);
        assert_eq!(config.wheel.palette.len(), 8);
        assert_eq!(config.games, PartyConfig::default().games);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = PartyConfig::default()
            .with_roster_limit(10)
            .with_wheel(WheelConfig::default().with_extra_spins(1, 2));
        let json = config.to_json_string().unwrap();
        assert_eq!(PartyConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_bad_team_count() {
        let err = PartyConfig::from_json_str(r#"{ "team_names": ["A", "B"] }"#).unwrap_err();
        assert!(matches!(err, DrawError::ConfigParse { .. }));
    }

    #[test]
    fn test_rejects_duplicate_games() {
        let err = PartyConfig::from_json_str(r#"{ "games": ["Spoon Walk", "Spoon Walk"] }"#)
            .unwrap_err();
        assert_eq!(
            err,
            DrawError::InvalidConfig {
                field: "games".into(),
                reason: "duplicate entry \"Spoon Walk\"".into(),
            }
        );
    }

    #[test]
    fn test_rejects_inverted_spin_range() {
        let config =
            PartyConfig::default().with_wheel(WheelConfig::default().with_extra_spins(6, 4));
        assert!(matches!(config.validate(), Err(DrawError::InvalidConfig { .. })));
    }

    #[test]
    fn test_rejects_zero_roster_limit() {
        assert!(PartyConfig::default().with_roster_limit(0).validate().is_err());
    }
}
