//! Party session tests: dispatch, replay and rejected actions.

use party_draw::core::{Item, PartyConfig, WheelConfig};
use party_draw::session::{
    CharadesAction, GamesAction, PartySession, SessionAction, TeamsAction,
};
use party_draw::DrawError;

fn roster_actions(names: &[&str]) -> Vec<SessionAction> {
    names
        .iter()
        .map(|n| TeamsAction::AddPerson(n.to_string()).into())
        .collect()
}

#[test]
fn test_full_team_flow() {
    let mut session = PartySession::new(PartyConfig::default(), 7).unwrap();
    for action in roster_actions(&["Ann", "Bo", "Cy", "Di", "Ed"]) {
        session.dispatch(action).unwrap();
    }
    session.dispatch(TeamsAction::Randomize).unwrap();

    let teams = session.teams().teams().unwrap();
    assert_eq!(teams.total_members(), 5);
    assert!(teams.is_balanced());

    session
        .dispatch(TeamsAction::AdjustPoints { team: "Rabbit".into(), delta: 1 })
        .unwrap();
    assert_eq!(session.teams().points().score("Rabbit").unwrap(), 1);
}

#[test]
fn test_same_seed_replays() {
    let actions: Vec<SessionAction> = roster_actions(&["Ann", "Bo", "Cy", "Di", "Ed", "Fay"])
        .into_iter()
        .chain([
            SessionAction::from(TeamsAction::Randomize),
            GamesAction::Spin.into(),
            GamesAction::Settle.into(),
            CharadesAction::Generate.into(),
            CharadesAction::Generate.into(),
        ])
        .collect();

    let run = |seed| {
        let mut session = PartySession::new(PartyConfig::default(), seed).unwrap();
        for action in &actions {
            session.dispatch(action.clone()).unwrap();
        }
        session
    };

    let a = run(100);
    let b = run(100);
    assert_eq!(a.teams(), b.teams());
    assert_eq!(a.games(), b.games());
    assert_eq!(a.charades(), b.charades());
}

#[test]
fn test_screens_draw_independently() {
    let mut first = PartySession::new(PartyConfig::default(), 55).unwrap();
    first.dispatch(CharadesAction::Generate).unwrap();
    first.dispatch(GamesAction::Spin).unwrap();

    let mut second = PartySession::new(PartyConfig::default(), 55).unwrap();
    second.dispatch(GamesAction::Spin).unwrap();
    second.dispatch(CharadesAction::Generate).unwrap();

    assert_eq!(first.charades().picked(), second.charades().picked());
    assert_eq!(first.games().pending(), second.games().pending());
}

#[test]
fn test_rejected_action_leaves_session_unchanged() {
    let mut session = PartySession::new(PartyConfig::default(), 3).unwrap();
    session.dispatch(GamesAction::Spin).unwrap();
    let games_before = session.games().clone();

    assert_eq!(session.dispatch(GamesAction::Spin), Err(DrawError::SpinInProgress));
    assert_eq!(session.games(), &games_before);

    let teams_before = session.teams().clone();
    assert_eq!(
        session.dispatch(TeamsAction::AdjustPoints { team: "Tiger".into(), delta: 1 }),
        Err(DrawError::UnknownTeam { name: "Tiger".into() })
    );
    assert_eq!(session.teams(), &teams_before);
}

#[test]
fn test_points_overflow_is_rejected() {
    let mut session = PartySession::new(PartyConfig::default(), 4).unwrap();
    session
        .dispatch(TeamsAction::AdjustPoints { team: "Dog".into(), delta: i64::MAX })
        .unwrap();

    assert_eq!(
        session.dispatch(TeamsAction::AdjustPoints { team: "Dog".into(), delta: 1 }),
        Err(DrawError::ScoreOverflow { team: "Dog".into() })
    );
    assert_eq!(session.teams().points().score("Dog").unwrap(), i64::MAX);
}

#[test]
fn test_roster_limit_from_config() {
    let config = PartyConfig::default().with_roster_limit(2);
    let mut session = PartySession::new(config, 1).unwrap();

    session.dispatch(TeamsAction::AddPerson("Ann".into())).unwrap();
    session.dispatch(TeamsAction::AddPerson("Bo".into())).unwrap();
    assert_eq!(
        session.dispatch(TeamsAction::AddPerson("Cy".into())),
        Err(DrawError::RosterFull { limit: 2 })
    );
}

#[test]
fn test_custom_games_and_fixed_spins() {
    let config = PartyConfig::default()
        .with_games(Item::list(["Only Game"]))
        .with_wheel(WheelConfig::default().with_extra_spins(2, 2));
    let mut session = PartySession::new(config, 9).unwrap();

    session.dispatch(GamesAction::Spin).unwrap();
    let plan = session.games().pending().unwrap().plan;
    assert_eq!(plan.extra_spins, 2);
    // Single slice centred at 180deg
    assert_eq!(plan.target_deg, 2.0 * 360.0 + 180.0);

    session.dispatch(GamesAction::Settle).unwrap();
    assert_eq!(session.games().selected().unwrap(), "Only Game");
    assert!(!session.games().can_spin());
    assert_eq!(session.dispatch(GamesAction::Spin), Err(DrawError::EmptyPool));
}

#[test]
fn test_invalid_config_rejected() {
    let config = PartyConfig::default().with_charades(Item::list(["Ox", "Ox"]));
    assert!(matches!(
        PartySession::new(config, 1),
        Err(DrawError::InvalidConfig { .. })
    ));
}

#[test]
fn test_actions_serialize() {
    let action: SessionAction = TeamsAction::AdjustPoints { team: "Dog".into(), delta: -1 }.into();
    let json = serde_json::to_string(&action).unwrap();
    let back: SessionAction = serde_json::from_str(&json).unwrap();
    assert_eq!(back, action);
}
