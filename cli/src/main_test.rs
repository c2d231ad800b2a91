use clap::CommandFactory;

use super::*;

fn player(id: &str, name: &str) -> Player {
    Player { id: id.into(), name: name.into(), points: 0, rank: 1 }
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("leaderboard-cli").chain(args.iter().copied())).unwrap()
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn resolve_player_prefers_id_then_name() {
    let players = vec![player("a", "Bo"), player("Bo", "Ann")];
    assert_eq!(resolve_player(&players, "Bo").unwrap().name, "Ann");
    assert_eq!(resolve_player(&players, "Ann").unwrap().id, "Bo");
    assert!(matches!(resolve_player(&players, "Cy"), Err(CliError::UnknownPlayer(key)) if key == "Cy"));
}

#[test]
fn destructive_commands_require_yes() {
    assert!(matches!(parse(&["reset"]).command.confirmation(), Err(CliError::NotConfirmed("reset"))));
    assert!(matches!(parse(&["delete", "Ann"]).command.confirmation(), Err(CliError::NotConfirmed("delete"))));
    assert!(matches!(parse(&["delete-all"]).command.confirmation(), Err(CliError::NotConfirmed("delete-all"))));
    assert!(parse(&["delete-all", "--yes"]).command.confirmation().is_ok());
    assert!(parse(&["list"]).command.confirmation().is_ok());
}

#[test]
fn generate_rejects_zero_count() {
    let zero = Cli::try_parse_from(["leaderboard-cli", "generate", "--count", "0"]);
    assert!(zero.is_err());
    assert!(matches!(parse(&["generate", "--count", "3"]).command, Command::Generate { count: 3 }));
}

#[test]
fn add_accepts_optional_points() {
    match parse(&["add", "Ann", "--points", "15"]).command {
        Command::Add { name, points } => {
            assert_eq!(name, "Ann");
            assert_eq!(points, Some(15));
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn failed_request_becomes_an_error() {
    let mut state = LeaderboardState::default();
    state.notification.set("Failed to reset scores: not found");

    match outcome(&state, false) {
        Err(CliError::ActionFailed(message)) => assert_eq!(message, "Failed to reset scores: not found"),
        other => panic!("expected action failure, got {other:?}"),
    }
}

#[test]
fn successful_request_yields_its_notification() {
    let mut state = LeaderboardState::default();
    state.notification.set("Scores reset.");

    assert_eq!(outcome(&state, true).unwrap(), "Scores reset.");
}

#[test]
fn failed_request_without_notification_still_errors() {
    let state = LeaderboardState::default();
    assert!(matches!(outcome(&state, false), Err(CliError::ActionFailed(message)) if message.is_empty()));
}
