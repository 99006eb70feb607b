//! Reducer-style screen state.
//!
//! Each screen of a party is an immutable state value plus an action enum.
//! `Screen::apply` returns the next state or an error, never mutating the
//! current one. `PartySession` is the one mutable slot a presentation layer
//! holds: it owns the current screens and their random streams and swaps in
//! the next state only when an action succeeds.
//!
//! ## Screens
//!
//! - `TeamsScreen`: roster entry, team shuffle, points
//! - `GamesScreen`: the game wheel
//! - `CharadesScreen`: charades prompt picker

pub mod charades;
pub mod games;
pub mod teams;

pub use charades::{CharadesAction, CharadesScreen};
pub use games::{GamesAction, GamesScreen, PendingSpin};
pub use teams::{TeamsAction, TeamsScreen};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::config::PartyConfig;
use crate::core::rng::DrawRng;
use crate::error::DrawResult;

/// A screen's state transition.
///
/// ## Implementation Notes
///
/// - `apply` must not touch `self`; return the next state instead
/// - All randomness comes from `rng`
pub trait Screen: Sized {
    /// Actions this screen accepts.
    type Action;

    /// Compute the state after `action`.
    fn apply(&self, action: Self::Action, rng: &mut DrawRng) -> DrawResult<Self>;
}

/// An action for any screen of the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionAction {
    Teams(TeamsAction),
    Games(GamesAction),
    Charades(CharadesAction),
}

impl From<TeamsAction> for SessionAction {
    fn from(action: TeamsAction) -> Self {
        SessionAction::Teams(action)
    }
}

impl From<GamesAction> for SessionAction {
    fn from(action: GamesAction) -> Self {
        SessionAction::Games(action)
    }
}

impl From<CharadesAction> for SessionAction {
    fn from(action: CharadesAction) -> Self {
        SessionAction::Charades(action)
    }
}

/// All screens of one party, plus the randomness that drives them.
///
/// Each screen draws from its own context stream, so replaying the same
/// seed reproduces every screen's picks regardless of how actions on
/// different screens were interleaved.
///
/// ## Example
///
/// ```
/// use party_draw::core::PartyConfig;
/// use party_draw::session::{CharadesAction, PartySession};
///
/// let mut session = PartySession::new(PartyConfig::default(), 42).unwrap();
/// session.dispatch(CharadesAction::Generate).unwrap();
///
/// assert!(session.charades().picked().is_some());
/// assert_eq!(session.charades().progress(), (1, 12));
/// ```
#[derive(Clone, Debug)]
pub struct PartySession {
    config: PartyConfig,
    seed: u64,
    teams: TeamsScreen,
    games: GamesScreen,
    charades: CharadesScreen,
    teams_rng: DrawRng,
    games_rng: DrawRng,
    charades_rng: DrawRng,
}

impl PartySession {
    /// Start a session from a validated configuration and a seed.
    pub fn new(config: PartyConfig, seed: u64) -> DrawResult<Self> {
        config.validate()?;
        let root = DrawRng::new(seed);

        Ok(Self {
            teams: TeamsScreen::new(&config),
            games: GamesScreen::new(&config)?,
            charades: CharadesScreen::new(&config)?,
            teams_rng: root.for_context("teams"),
            games_rng: root.for_context("games"),
            charades_rng: root.for_context("charades"),
            seed,
            config,
        })
    }

    /// Apply an action to the screen it targets.
    ///
    /// On error the session is left exactly as it was.
    pub fn dispatch(&mut self, action: impl Into<SessionAction>) -> DrawResult<()> {
        let action = action.into();
        let result = match action.clone() {
            SessionAction::Teams(a) => apply_to(&mut self.teams, a, &mut self.teams_rng),
            SessionAction::Games(a) => apply_to(&mut self.games, a, &mut self.games_rng),
            SessionAction::Charades(a) => apply_to(&mut self.charades, a, &mut self.charades_rng),
        };

        if let Err(err) = &result {
            warn!(?action, %err, "action rejected");
        }
        result
    }

    #[must_use]
    pub fn teams(&self) -> &TeamsScreen {
        &self.teams
    }

    #[must_use]
    pub fn games(&self) -> &GamesScreen {
        &self.games
    }

    #[must_use]
    pub fn charades(&self) -> &CharadesScreen {
        &self.charades
    }

    #[must_use]
    pub fn config(&self) -> &PartyConfig {
        &self.config
    }

    /// Seed the session was started with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

/// Replace `screen` with its next state; on error restore the RNG too.
fn apply_to<S: Screen>(screen: &mut S, action: S::Action, rng: &mut DrawRng) -> DrawResult<()> {
    let saved = rng.state();
    match screen.apply(action, rng) {
        Ok(next) => {
            *screen = next;
            Ok(())
        }
        Err(err) => {
            *rng = DrawRng::from_state(&saved);
            Err(err)
        }
    }
}
