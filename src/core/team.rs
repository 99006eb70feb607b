//! Team identification and per-team data storage.
//!
//! ## TeamSet
//!
//! The fixed roster of four named teams, in display order. Names resolve to
//! a `TeamId`; anything else is an `UnknownTeam` error.
//!
//! ## TeamMap
//!
//! Per-team storage backed by a fixed array for O(1) access by `TeamId`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::item::TeamName;
use crate::error::{DrawError, DrawResult};

/// Number of teams in every party. Not configurable.
pub const TEAM_COUNT: usize = 4;

/// Default team names, one per zodiac animal.
pub const DEFAULT_TEAM_NAMES: [&str; TEAM_COUNT] = ["Dog", "Horse", "Rabbit", "Mouse"];

/// Team identifier: position of the team in its `TeamSet` (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub u8);

impl TeamId {
    /// Create a new team ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw team index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all team IDs in order.
    ///
    /// ```
    /// use party_draw::core::{TeamId, TEAM_COUNT};
    ///
    /// let teams: Vec<_> = TeamId::all().collect();
    /// assert_eq!(teams.len(), TEAM_COUNT);
    /// assert_eq!(teams[3], TeamId::new(3));
    /// ```
    pub fn all() -> impl Iterator<Item = TeamId> {
        (0..TEAM_COUNT as u8).map(TeamId)
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team {}", self.0)
    }
}

/// The four named teams of a party.
///
/// ## Example
///
/// ```
/// use party_draw::core::{TeamId, TeamSet};
///
/// let teams = TeamSet::default();
/// assert_eq!(teams.id_of("Rabbit").unwrap(), TeamId::new(2));
/// assert!(teams.id_of("Tiger").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TeamName>", into = "Vec<TeamName>")]
pub struct TeamSet {
    names: [TeamName; TEAM_COUNT],
    lookup: FxHashMap<TeamName, TeamId>,
}

impl TeamSet {
    /// Create a team set from exactly four distinct, non-blank names.
    pub fn new<I, S>(names: I) -> DrawResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<TeamName>,
    {
        let names: Vec<TeamName> = names.into_iter().map(Into::into).collect();
        let count = names.len();
        let names: [TeamName; TEAM_COUNT] = names.try_into().map_err(|_| DrawError::InvalidConfig {
            field: "team_names".into(),
            reason: format!("expected {TEAM_COUNT} teams, got {count}"),
        })?;

        let mut lookup = FxHashMap::default();
        for (i, name) in names.iter().enumerate() {
            if name.as_str().trim().is_empty() {
                return Err(DrawError::InvalidConfig {
                    field: "team_names".into(),
                    reason: format!("team {i} has a blank name"),
                });
            }
            if lookup.insert(name.clone(), TeamId(i as u8)).is_some() {
                return Err(DrawError::InvalidConfig {
                    field: "team_names".into(),
                    reason: format!("duplicate team name {name:?}"),
                });
            }
        }

        Ok(Self { names, lookup })
    }

    /// Resolve a team name to its ID.
    pub fn id_of(&self, name: &str) -> DrawResult<TeamId> {
        self.lookup
            .get(&TeamName::new(name))
            .copied()
            .ok_or_else(|| DrawError::UnknownTeam { name: name.to_string() })
    }

    /// Name of a team.
    #[must_use]
    pub fn name(&self, team: TeamId) -> &TeamName {
        &self.names[team.index()]
    }

    /// Team names in display order.
    #[must_use]
    pub fn names(&self) -> &[TeamName] {
        &self.names
    }

    /// Iterate over (TeamId, name) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (TeamId, &TeamName)> {
        self.names.iter().enumerate().map(|(i, n)| (TeamId(i as u8), n))
    }
}

impl Default for TeamSet {
    fn default() -> Self {
        let names = DEFAULT_TEAM_NAMES.map(TeamName::new);
        let lookup = names
            .iter()
            .enumerate()
            .map(|(i, n)| (n.clone(), TeamId(i as u8)))
            .collect();
        Self { names, lookup }
    }
}

impl TryFrom<Vec<TeamName>> for TeamSet {
    type Error = DrawError;

    fn try_from(names: Vec<TeamName>) -> DrawResult<Self> {
        Self::new(names)
    }
}

impl From<TeamSet> for Vec<TeamName> {
    fn from(set: TeamSet) -> Self {
        set.names.into()
    }
}

/// Per-team data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use party_draw::core::{TeamId, TeamMap};
///
/// let mut points: TeamMap<i64> = TeamMap::with_value(0);
/// points[TeamId::new(1)] += 3;
/// assert_eq!(points[TeamId::new(1)], 3);
/// assert_eq!(points[TeamId::new(0)], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamMap<T> {
    data: [T; TEAM_COUNT],
}

impl<T> TeamMap<T> {
    /// Create a new TeamMap with values from a factory function.
    pub fn new(factory: impl Fn(TeamId) -> T) -> Self {
        Self {
            data: std::array::from_fn(|i| factory(TeamId(i as u8))),
        }
    }

    /// Create a new TeamMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a team's data.
    #[must_use]
    pub fn get(&self, team: TeamId) -> &T {
        &self.data[team.index()]
    }

    /// Get a mutable reference to a team's data.
    pub fn get_mut(&mut self, team: TeamId) -> &mut T {
        &mut self.data[team.index()]
    }

    /// Iterate over values in team order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<TeamId> for TeamMap<T> {
    type Output = T;

    fn index(&self, team: TeamId) -> &Self::Output {
        self.get(team)
    }
}

impl<T> IndexMut<TeamId> for TeamMap<T> {
    fn index_mut(&mut self, team: TeamId) -> &mut Self::Output {
        self.get_mut(team)
    }
}
