//! # party-draw
//!
//! Random draw, team shuffle and scoring engine for party games.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not globals**: Every operation takes a state value and
//!    returns the next one. The caller owns the single mutable slot.
//!
//! 2. **Injected randomness**: Nothing reads a global RNG. Every draw takes
//!    a `&mut DrawRng`, so a seed replays a whole party.
//!
//! 3. **Strict uniformity**: Draws pick uniformly from what is left, and
//!    team shuffles are unbiased Fisher-Yates.
//!
//! ## Modules
//!
//! - `core`: Items, teams, RNG, configuration
//! - `pool`: Draw-without-replacement pools
//! - `teams`: Shuffle-then-deal team assignment
//! - `scoring`: Per-team score ledger
//! - `roster`: Name entry rules
//! - `wheel`: Game wheel geometry
//! - `session`: Reducer-style screen state
//! - `logging`: Tracing setup for binaries

pub mod core;
pub mod error;
pub mod logging;
pub mod pool;
pub mod roster;
pub mod scoring;
pub mod session;
pub mod teams;
pub mod wheel;

// Re-export commonly used types
pub use crate::core::{
    DrawRng, DrawRngState, Item, PartyConfig, TeamId, TeamMap, TeamName, TeamSet, WheelConfig,
    TEAM_COUNT,
};

pub use crate::error::{DrawError, DrawResult};

pub use crate::pool::{Draw, Pool};

pub use crate::teams::{deal_round_robin, distribute, Team, Teams};

pub use crate::scoring::ScoreLedger;

pub use crate::roster::Roster;

pub use crate::session::{
    CharadesAction, CharadesScreen, GamesAction, GamesScreen, PartySession, PendingSpin, Screen,
    SessionAction, TeamsAction, TeamsScreen,
};
