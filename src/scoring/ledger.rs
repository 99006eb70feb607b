//! Score ledger: one integer per team, always all four present.
//!
//! Ledgers are values. `adjust` and `reset_all` return a new ledger; the
//! caller decides where the current one lives.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::item::TeamName;
use crate::core::team::{TeamId, TeamMap, TeamSet};
use crate::error::{DrawError, DrawResult};

/// Team name to score mapping. Scores may go negative.
///
/// ## Example
///
/// ```
/// use party_draw::core::TeamSet;
/// use party_draw::scoring::ScoreLedger;
///
/// let ledger = ScoreLedger::new(TeamSet::default())
///     .adjust("Dog", 1)
///     .and_then(|l| l.adjust("Dog", 1))
///     .and_then(|l| l.adjust("Horse", -1))
///     .unwrap();
///
/// assert_eq!(ledger.score("Dog").unwrap(), 2);
/// assert_eq!(ledger.score("Horse").unwrap(), -1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLedger {
    teams: TeamSet,
    scores: TeamMap<i64>,
}

impl ScoreLedger {
    /// A ledger with every team at zero.
    #[must_use]
    pub fn new(teams: TeamSet) -> Self {
        Self {
            teams,
            scores: TeamMap::with_value(0),
        }
    }

    /// Add `delta` to a team's score.
    ///
    /// Fails with `UnknownTeam` for a name outside the ledger's team set,
    /// and with `ScoreOverflow` if the score would leave the `i64` range.
    pub fn adjust(&self, team: &str, delta: i64) -> DrawResult<ScoreLedger> {
        let id = self.teams.id_of(team)?;
        self.adjust_id(id, delta)
    }

    /// Add `delta` to a team's score by ID.
    pub fn adjust_id(&self, team: TeamId, delta: i64) -> DrawResult<ScoreLedger> {
        let name = self.teams.name(team);
        let score = self.scores[team]
            .checked_add(delta)
            .ok_or_else(|| DrawError::ScoreOverflow { team: name.to_string() })?;

        let mut next = self.clone();
        next.scores[team] = score;
        debug!(team = %name, delta, score, "score adjusted");
        Ok(next)
    }

    /// Every team back to zero.
    #[must_use]
    pub fn reset_all(&self) -> ScoreLedger {
        debug!("scores reset");
        ScoreLedger::new(self.teams.clone())
    }

    /// Current score of a team.
    pub fn score(&self, team: &str) -> DrawResult<i64> {
        Ok(self.scores[self.teams.id_of(team)?])
    }

    /// (name, score) pairs in team order.
    pub fn iter(&self) -> impl Iterator<Item = (&TeamName, i64)> {
        self.teams.iter().map(|(id, name)| (name, self.scores[id]))
    }

    /// Teams sharing the highest score, in team order.
    #[must_use]
    pub fn leaders(&self) -> Vec<&TeamName> {
        let Some(best) = self.scores.values().copied().max() else {
            return Vec::new();
        };
        self.iter()
            .filter(|&(_, score)| score == best)
            .map(|(name, _)| name)
            .collect()
    }

    /// The team set this ledger scores.
    #[must_use]
    pub fn teams(&self) -> &TeamSet {
        &self.teams
    }
}

impl Default for ScoreLedger {
    fn default() -> Self {
        Self::new(TeamSet::default())
    }
}
