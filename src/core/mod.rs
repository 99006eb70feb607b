//! Core engine types: items, teams, RNG, configuration.
//!
//! These are the building blocks shared by every screen of a party. The
//! engine modules (`pool`, `teams`, `scoring`) are written in terms of them.

pub mod config;
pub mod item;
pub mod rng;
pub mod team;

pub use config::{PartyConfig, WheelConfig, DEFAULT_CHARADES, DEFAULT_GAMES, DEFAULT_ROSTER_LIMIT};
pub use item::{Item, TeamName};
pub use rng::{DrawRng, DrawRngState};
pub use team::{TeamId, TeamMap, TeamSet, DEFAULT_TEAM_NAMES, TEAM_COUNT};
