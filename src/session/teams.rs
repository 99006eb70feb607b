//! Team creation screen: roster, shuffled teams, points.

use serde::{Deserialize, Serialize};

use super::Screen;
use crate::core::config::PartyConfig;
use crate::core::rng::DrawRng;
use crate::core::team::TeamSet;
use crate::error::DrawResult;
use crate::roster::Roster;
use crate::scoring::ScoreLedger;
use crate::teams::{distribute, Teams};

/// Actions on the team screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamsAction {
    /// Add a person; the draft is trimmed.
    AddPerson(String),
    /// Remove the person at this roster position.
    RemovePerson(usize),
    /// Shuffle the roster into teams. No-op on an empty roster.
    Randomize,
    /// Clear the roster and teams. Points are kept.
    ResetNames,
    AdjustPoints { team: String, delta: i64 },
    ResetPoints,
}

/// State of the team screen.
///
/// `teams` is `None` until the roster is randomized, and goes back to
/// `None` whenever the roster changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TeamsScreen {
    team_set: TeamSet,
    roster: Roster,
    teams: Option<Teams>,
    points: ScoreLedger,
}

impl TeamsScreen {
    #[must_use]
    pub fn new(config: &PartyConfig) -> Self {
        Self {
            team_set: config.team_names.clone(),
            roster: Roster::new(config.roster_limit),
            teams: None,
            points: ScoreLedger::new(config.team_names.clone()),
        }
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn teams(&self) -> Option<&Teams> {
        self.teams.as_ref()
    }

    #[must_use]
    pub fn points(&self) -> &ScoreLedger {
        &self.points
    }

    #[must_use]
    pub fn team_set(&self) -> &TeamSet {
        &self.team_set
    }

    /// Whether the Randomize button should be enabled.
    #[must_use]
    pub fn can_randomize(&self) -> bool {
        !self.roster.is_empty()
    }
}

impl Screen for TeamsScreen {
    type Action = TeamsAction;

    fn apply(&self, action: TeamsAction, rng: &mut DrawRng) -> DrawResult<Self> {
        let mut next = self.clone();
        match action {
            TeamsAction::AddPerson(draft) => {
                next.roster = self.roster.add(&draft)?;
                next.teams = None;
            }
            TeamsAction::RemovePerson(index) => {
                next.roster = self.roster.remove(index)?;
                next.teams = None;
            }
            TeamsAction::Randomize => {
                if self.can_randomize() {
                    next.teams = Some(distribute(
                        &self.roster.names(),
                        self.team_set.names(),
                        rng,
                    )?);
                }
            }
            TeamsAction::ResetNames => {
                next.roster = self.roster.clear();
                next.teams = None;
            }
            TeamsAction::AdjustPoints { team, delta } => {
                next.points = self.points.adjust(&team, delta)?;
            }
            TeamsAction::ResetPoints => {
                next.points = self.points.reset_all();
            }
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DrawError;

    fn screen_with(names: &[&str]) -> TeamsScreen {
        let mut rng = DrawRng::new(0);
        names.iter().fold(TeamsScreen::new(&PartyConfig::default()), |s, n| {
            s.apply(TeamsAction::AddPerson(n.to_string()), &mut rng).unwrap()
        })
    }

    #[test]
    fn test_randomize_empty_roster_is_noop() {
        let screen = TeamsScreen::new(&PartyConfig::default());
        let next = screen.apply(TeamsAction::Randomize, &mut DrawRng::new(1)).unwrap();
        assert_eq!(next, screen);
        assert!(next.teams().is_none());
    }

    #[test]
    fn test_randomize_then_roster_change_clears_teams() {
        let mut rng = DrawRng::new(1);
        let screen = screen_with(&["Ann", "Bo", "Cy", "Di", "Ed"]);

        let shuffled = screen.apply(TeamsAction::Randomize, &mut rng).unwrap();
        assert_eq!(shuffled.teams().unwrap().total_members(), 5);

        let added = shuffled.apply(TeamsAction::AddPerson("Fay".into()), &mut rng).unwrap();
        assert!(added.teams().is_none());

        let reshuffled = added.apply(TeamsAction::Randomize, &mut rng).unwrap();
        let removed = reshuffled.apply(TeamsAction::RemovePerson(0), &mut rng).unwrap();
        assert!(removed.teams().is_none());
        assert_eq!(removed.roster().len(), 5);
    }

    #[test]
    fn test_reset_names_keeps_points() {
        let mut rng = DrawRng::new(1);
        let screen = screen_with(&["Ann", "Bo"])
            .apply(TeamsAction::AdjustPoints { team: "Dog".into(), delta: 2 }, &mut rng)
            .unwrap()
            .apply(TeamsAction::ResetNames, &mut rng)
            .unwrap();

        assert!(screen.roster().is_empty());
        assert_eq!(screen.points().score("Dog").unwrap(), 2);
    }

    #[test]
    fn test_reset_points() {
        let mut rng = DrawRng::new(1);
        let screen = screen_with(&[])
            .apply(TeamsAction::AdjustPoints { team: "Mouse".into(), delta: -3 }, &mut rng)
            .unwrap()
            .apply(TeamsAction::ResetPoints, &mut rng)
            .unwrap();
        assert_eq!(screen.points().score("Mouse").unwrap(), 0);
    }

    #[test]
    fn test_rejected_actions() {
        let mut rng = DrawRng::new(1);
        let screen = screen_with(&["Ann"]);

        assert_eq!(
            screen.apply(TeamsAction::AddPerson("  ".into()), &mut rng),
            Err(DrawError::EmptyName)
        );
        assert_eq!(
            screen.apply(TeamsAction::RemovePerson(4), &mut rng),
            Err(DrawError::RosterIndexOutOfRange { index: 4, len: 1 })
        );
        assert_eq!(
            screen.apply(TeamsAction::AdjustPoints { team: "Tiger".into(), delta: 1 }, &mut rng),
            Err(DrawError::UnknownTeam { name: "Tiger".into() })
        );
    }
}
