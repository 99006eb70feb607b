//! Even distributor.

use serde::Serialize;
use smallvec::SmallVec;
use tracing::debug;

use crate::core::item::{Item, TeamName};
use crate::core::rng::DrawRng;
use crate::error::{DrawError, DrawResult};

/// One named bin and its members, in dealt order.
///
/// Up to eight members stay inline; a full 30-person roster over four teams
/// never needs more.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Team {
    pub name: TeamName,
    pub members: SmallVec<[Item; 8]>,
}

/// The result of a distribute call, one `Team` per name in input order.
///
/// Always rebuilt wholesale; there is no API to move a single member.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Teams {
    teams: Vec<Team>,
}

impl Teams {
    /// Teams in the order their names were given.
    #[must_use]
    pub fn as_slice(&self) -> &[Team] {
        &self.teams
    }

    /// Members of the named team.
    pub fn members(&self, name: &str) -> DrawResult<&[Item]> {
        self.teams
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.members.as_slice())
            .ok_or_else(|| DrawError::UnknownTeam { name: name.to_string() })
    }

    /// Team sizes in team order.
    #[must_use]
    pub fn sizes(&self) -> Vec<usize> {
        self.teams.iter().map(|t| t.members.len()).collect()
    }

    /// Number of people dealt in total.
    #[must_use]
    pub fn total_members(&self) -> usize {
        self.teams.iter().map(|t| t.members.len()).sum()
    }

    /// True when the largest and smallest team differ by at most one.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        let sizes = self.sizes();
        match (sizes.iter().max(), sizes.iter().min()) {
            (Some(max), Some(min)) => max - min <= 1,
            _ => true,
        }
    }

    /// Iterate over teams in order.
    pub fn iter(&self) -> impl Iterator<Item = &Team> {
        self.teams.iter()
    }
}

/// Deal an already permuted sequence into named bins, round-robin.
///
/// Item `i` goes to bin `i % K`, and bins keep the order items arrive in.
/// This step has no randomness.
///
/// ```
/// use party_draw::core::Item;
/// use party_draw::teams::deal_round_robin;
///
/// let teams = deal_round_robin(
///     Item::list(["Ann", "Bo", "Cy", "Di", "Ed"]),
///     &Item::list(["Dog", "Horse", "Rabbit", "Mouse"]),
/// )
/// .unwrap();
///
/// assert_eq!(teams.members("Dog").unwrap(), Item::list(["Ann", "Ed"]).as_slice());
/// assert_eq!(teams.sizes(), vec![2, 1, 1, 1]);
/// ```
pub fn deal_round_robin(
    permuted: impl IntoIterator<Item = Item>,
    team_names: &[TeamName],
) -> DrawResult<Teams> {
    if team_names.is_empty() {
        return Err(DrawError::NoTeams);
    }

    let mut teams: Vec<Team> = team_names
        .iter()
        .map(|name| Team {
            name: name.clone(),
            members: SmallVec::new(),
        })
        .collect();

    let k = teams.len();
    for (i, item) in permuted.into_iter().enumerate() {
        teams[i % k].members.push(item);
    }

    Ok(Teams { teams })
}

/// Shuffle `items` uniformly, then deal them round-robin into `team_names`.
///
/// Fewer items than teams leaves some teams empty; no items leaves them all
/// empty. Neither is an error. Zero team names fails with `NoTeams`.
pub fn distribute(items: &[Item], team_names: &[TeamName], rng: &mut DrawRng) -> DrawResult<Teams> {
    if team_names.is_empty() {
        return Err(DrawError::NoTeams);
    }

    let mut permuted = items.to_vec();
    rng.shuffle(&mut permuted);

    let teams = deal_round_robin(permuted, team_names)?;
    debug!(people = items.len(), teams = team_names.len(), sizes = ?teams.sizes(), "distributed roster");
    Ok(teams)
}
