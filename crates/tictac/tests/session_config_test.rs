//! Tests for configuration loading and full scripted games.

use clap::Parser;
use std::io::{Cursor, Write};
use tictac::{Cli, GameConfig, SessionError, play};
use tictac_board::{Board, GameStatus, Marker};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_missing_config_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let cli = Cli::parse_from(["tictac", "--config", path.to_str().unwrap()]);

    let config = GameConfig::load(&cli).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_config_file_then_cli_overrides() {
    let file = write_config("clear_screen = true\n[players]\nx = \"Ada\"\no = \"Grace\"\n");
    let cli = Cli::parse_from([
        "tictac",
        "--config",
        file.path().to_str().unwrap(),
        "--no-clear",
        "--player-x",
        "Alan",
    ]);

    let config = GameConfig::load(&cli).unwrap();
    assert!(!*config.clear_screen());
    assert_eq!(config.players().x().as_deref(), Some("Alan"));
    assert_eq!(config.players().o().as_deref(), Some("Grace"));
}

#[test]
fn test_malformed_config_file_is_error() {
    let file = write_config("[players\n");
    let cli = Cli::parse_from(["tictac", "--config", file.path().to_str().unwrap()]);
    assert!(GameConfig::load(&cli).is_err());
}

#[test]
fn test_named_players_in_announcement() {
    let file = write_config("clear_screen = false\n[players]\no = \"Grace\"\n");
    let cli = Cli::parse_from(["tictac", "--config", file.path().to_str().unwrap()]);
    let config = GameConfig::load(&cli).unwrap();

    // O completes the middle column.
    let script = "1 1\n1 2\n3 3\n2 2\n1 3\n3 2\n";
    let mut board = Board::new();
    let mut out = Vec::new();
    let status = play(&mut board, Cursor::new(script), &mut out, &config).unwrap();

    assert_eq!(status, GameStatus::Won(Marker::O));
    assert_eq!(board.move_count(), 6);
    let out = String::from_utf8(out).unwrap();
    assert!(out.ends_with("Game over. Player Grace (O) wins!\n"));
}

#[test]
fn test_clear_screen_emitted_each_turn() {
    let config = GameConfig::default();
    let mut board = Board::new();
    let mut out = Vec::new();
    let script = "1 1\n2 1\n1 2\n2 2\n1 3\n";
    play(&mut board, Cursor::new(script), &mut out, &config).unwrap();

    let out = String::from_utf8(out).unwrap();
    // Five prompts plus the final board.
    assert_eq!(out.matches(tictac::render::CLEAR_SCREEN).count(), 6);
}

#[test]
fn test_already_finished_board_skips_prompting() {
    let config = GameConfig::from_toml("clear_screen = false").unwrap();
    let mut board = Board::new();
    for col in 0..3 {
        assert!(board.attempt_move(0, col, Marker::X));
    }
    let mut out = Vec::new();
    let status = play(&mut board, Cursor::new(""), &mut out, &config).unwrap();

    assert_eq!(status, GameStatus::Won(Marker::X));
    let out = String::from_utf8(out).unwrap();
    assert!(!out.contains("Enter row and column"));
}

#[test]
fn test_input_ending_mid_game_is_reported() {
    let config = GameConfig::from_toml("clear_screen = false").unwrap();
    let mut board = Board::new();
    let mut out = Vec::new();
    let err = play(&mut board, Cursor::new("2 2\n"), &mut out, &config).unwrap_err();

    assert!(matches!(err, SessionError::Input(_)));
    assert_eq!(board.move_count(), 1);
}
