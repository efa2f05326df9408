//! History persistence and statistics tests.

#![allow(clippy::float_cmp)]

use chrono::NaiveDate;
use tempfile::TempDir;
use twentyone::{
    Card, Game, GameOptions, GameStats, HistoryConfig, HistoryStore, Rank, RoundRecord,
    RoundStats, RoundStatus, SessionSummary, StatsError, Suit,
};

fn store_in(dir: &TempDir) -> HistoryStore {
    HistoryStore::new(HistoryConfig::in_dir(dir.path()))
}

fn record(status: RoundStatus, day: u32, profit: f64) -> RoundRecord {
    let time = NaiveDate::from_ymd_opt(2026, 8, day)
        .unwrap()
        .and_hms_opt(21, 30, 0)
        .unwrap();
    RoundRecord {
        status,
        time,
        profit,
    }
}

#[test]
fn missing_history_is_a_normal_state() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    assert!(!store.has_round_history());
    assert!(!store.has_game_history());
}

#[test]
fn round_history_round_trips() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let records = vec![
        record(RoundStatus::Win, 1, 100.0),
        record(RoundStatus::Loss, 2, -50.0),
        record(RoundStatus::Surrender, 3, -12.5),
    ];

    store.save_round_history(&records).unwrap();
    assert!(store.has_round_history());

    let loaded = store.load_round_history().unwrap();
    assert_eq!(loaded, records);
}

#[test]
fn records_serialize_with_legacy_codes_and_timestamps() {
    let json = serde_json::to_string(&record(RoundStatus::Win, 9, 100.0)).unwrap();
    assert!(json.contains("\"STATUS\":2"), "{json}");
    assert!(json.contains("\"TIME\":\"08/09/2026 21:30:00\""), "{json}");
    assert!(json.contains("\"PROFIT\":100.0"), "{json}");

    // Codes are stable: LOSS=0, PUSH=1, WIN=2, SURRENDER=3.
    for (status, code) in [
        (RoundStatus::Loss, 0),
        (RoundStatus::Push, 1),
        (RoundStatus::Win, 2),
        (RoundStatus::Surrender, 3),
    ] {
        assert_eq!(status.code(), code);
        assert_eq!(RoundStatus::from_code(code), Some(status));
    }
    assert_eq!(RoundStatus::from_code(4), None);
}

#[test]
fn unknown_status_codes_are_rejected() {
    let err = serde_json::from_str::<RoundRecord>(
        r#"{"STATUS":7,"TIME":"01/01/2026 00:00:00","PROFIT":0.0}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("unknown round status code 7"));
}

#[test]
fn clearing_truncates_the_store() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store
        .save_round_history(&[record(RoundStatus::Push, 1, 0.0)])
        .unwrap();
    assert!(store.has_round_history());

    store.clear_round_history().unwrap();
    assert!(!store.has_round_history());
}

#[test]
fn resume_replays_the_balance_from_recorded_profits() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store
        .save_round_history(&[
            record(RoundStatus::Win, 1, 100.0),
            record(RoundStatus::Loss, 2, -50.0),
            record(RoundStatus::Push, 3, 0.0),
        ])
        .unwrap();

    let mut game = Game::new(GameOptions::default(), store, 1);
    assert!(game.has_saved_session());
    game.resume().unwrap();

    assert_eq!(game.round_history().len(), 3);
    assert_eq!(game.balance(), 1050.0);
}

#[test]
fn finished_rounds_survive_a_restart() {
    let dir = TempDir::new().unwrap();

    let mut game = Game::new(GameOptions::default(), store_in(&dir), 4);
    game.bet(100).unwrap();
    let mut deck: Vec<Card> = vec![
        Card::new(Rank::King, Suit::Hearts),   // player
        Card::new(Rank::Nine, Suit::Clubs),    // dealer up
        Card::new(Rank::Queen, Suit::Spades),  // player: 20
        Card::new(Rank::Ten, Suit::Diamonds),  // dealer hole: 19
    ];
    deck.reverse();
    game.load_deck(deck);
    game.deal().unwrap();
    game.stand().unwrap();
    game.dealer_play().unwrap();
    let record = game.finish_round().unwrap();
    let balance = game.balance();
    drop(game);

    let mut revived = Game::new(GameOptions::default(), store_in(&dir), 5);
    revived.resume().unwrap();
    assert_eq!(revived.round_history(), &[record]);
    assert_eq!(revived.balance(), balance);
}

#[test]
fn round_stats_aggregate_counts_profit_and_win_rate() {
    let records = [
        record(RoundStatus::Win, 1, 100.0),
        record(RoundStatus::Loss, 2, -50.0),
        record(RoundStatus::Push, 3, 0.0),
    ];

    let stats = RoundStats::from_records(&records).unwrap();
    assert_eq!(stats.rounds, 3);
    assert_eq!(stats.count(RoundStatus::Win), 1);
    assert_eq!(stats.count(RoundStatus::Loss), 1);
    assert_eq!(stats.count(RoundStatus::Push), 1);
    assert_eq!(stats.count(RoundStatus::Surrender), 0);
    assert_eq!(stats.total_profit, 50.0);
    assert!((stats.average_profit - 50.0 / 3.0).abs() < 1e-9);
    assert!((stats.win_rate - 1.0 / 3.0).abs() < 1e-9);
    assert_eq!(stats.last_played, records[2].time);
}

#[test]
fn stats_refuse_an_empty_session() {
    assert_eq!(
        RoundStats::from_records(&[]).unwrap_err(),
        StatsError::NoRounds
    );
    assert_eq!(
        SessionSummary::from_records(&[]).unwrap_err(),
        StatsError::NoRounds
    );
    assert_eq!(GameStats::aggregate(&[]).unwrap_err(), StatsError::NoRounds);
}

#[test]
fn archiving_a_session_summarizes_and_clears_it() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store
        .save_round_history(&[
            record(RoundStatus::Win, 1, 100.0),
            record(RoundStatus::Loss, 2, -50.0),
            record(RoundStatus::Push, 3, 0.0),
        ])
        .unwrap();

    let mut game = Game::new(GameOptions::default(), store, 2);
    game.resume().unwrap();

    let summary = game.finish_session().unwrap().unwrap();
    assert_eq!(summary.wins, 1);
    assert_eq!(summary.losses, 1);
    assert_eq!(summary.pushes, 1);
    assert_eq!(summary.surrenders, 0);
    assert_eq!(summary.total_profit, 50.0);
    assert_eq!(summary.rounds(), 3);

    // The round store is cleared and the wallet reset.
    assert!(!game.has_saved_session());
    assert!(game.round_history().is_empty());
    assert_eq!(game.balance(), 1000.0);

    // The summary is archived and survives a reload.
    assert!(game.has_game_history());
    let archived = game.game_history().unwrap();
    assert_eq!(archived, vec![summary]);

    // Archiving again with no rounds is a no-op.
    assert!(game.finish_session().unwrap().is_none());
    assert_eq!(game.game_history().unwrap().len(), 1);
}

#[test]
fn game_stats_fold_across_sessions() {
    let sessions = [
        SessionSummary {
            losses: 1,
            pushes: 1,
            wins: 1,
            surrenders: 0,
            last_played: NaiveDate::from_ymd_opt(2026, 8, 3)
                .unwrap()
                .and_hms_opt(21, 30, 0)
                .unwrap(),
            total_profit: 50.0,
        },
        SessionSummary {
            losses: 0,
            pushes: 0,
            wins: 2,
            surrenders: 1,
            last_played: NaiveDate::from_ymd_opt(2026, 8, 10)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            total_profit: 150.0,
        },
    ];

    let stats = GameStats::aggregate(&sessions).unwrap();
    assert_eq!(stats.games, 2);
    assert_eq!(stats.count(RoundStatus::Win), 3);
    assert_eq!(stats.count(RoundStatus::Surrender), 1);
    assert_eq!(stats.total_profit, 200.0);
    assert!((stats.win_rate - 0.5).abs() < 1e-9);
    assert!((stats.average_profit - 200.0 / 6.0).abs() < 1e-9);
}

#[test]
fn game_history_appends_across_sessions() {
    let dir = TempDir::new().unwrap();

    for day in [1, 2] {
        let store = store_in(&dir);
        store
            .save_round_history(&[record(RoundStatus::Win, day, 25.0)])
            .unwrap();

        let mut game = Game::new(GameOptions::default(), store, u64::from(day));
        game.resume().unwrap();
        game.finish_session().unwrap().unwrap();
    }

    let store = store_in(&dir);
    let archived = store.load_game_history().unwrap();
    assert_eq!(archived.len(), 2);
    assert_eq!(archived[0].wins, 1);
    assert_eq!(archived[1].wins, 1);
}
