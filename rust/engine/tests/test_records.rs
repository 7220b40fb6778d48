use std::fs;

use patience_engine::cards::{CardId, Rank, Suit};
use patience_engine::game::{GameMode, GameSession};
use patience_engine::input::Point;
use patience_engine::logger::{format_deal_id, DealLogger, DealRecord, MoveRecord};
use patience_engine::pile::PileId;

fn sample_record(deal_id: &str) -> DealRecord {
    DealRecord {
        deal_id: deal_id.to_string(),
        seed: Some(42),
        mode: GameMode::Vegas,
        draw_count: 3,
        cumulative: true,
        moves: vec![MoveRecord {
            from: PileId::Stock,
            to: PileId::Talon,
            cards: vec![CardId::new(Suit::Hearts, Rank::Ace)],
        }],
        score: -47,
        won: false,
        ts: None,
        meta: None,
    }
}

#[test]
fn deal_id_format_is_date_dash_sequence() {
    assert_eq!(format_deal_id("20260807", 7), "20260807-000007");
    assert_eq!(format_deal_id("20260807", 123456), "20260807-123456");
}

#[test]
fn logger_allocates_sequential_ids() {
    let mut logger = DealLogger::with_seq_for_test("20260807");
    assert_eq!(logger.next_id(), "20260807-000001");
    assert_eq!(logger.next_id(), "20260807-000002");
}

#[test]
fn deal_record_round_trips_through_json() {
    let record = sample_record("20260807-000001");
    let json = serde_json::to_string(&record).unwrap();
    let back: DealRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(record, back);
}

#[test]
fn logger_writes_one_json_object_per_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("deals.jsonl");

    let mut logger = DealLogger::create(&path).unwrap();
    logger.write(&sample_record("a")).unwrap();
    logger.write(&sample_record("b")).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        let rec: DealRecord = serde_json::from_str(line).unwrap();
        assert!(rec.ts.is_some(), "writer must stamp records");
    }
}

#[test]
fn session_log_captures_draws() {
    let mut session = GameSession::new(Some(42), GameMode::Classic);
    let top = session.table().pile(PileId::Stock).top().unwrap().id();
    session
        .on_card_pressed(top, Point::new(0.0, 0.0), 1.0)
        .unwrap();

    let log = session.move_log();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].from, PileId::Stock);
    assert_eq!(log[0].to, PileId::Talon);
    assert_eq!(log[0].cards, vec![top]);
}

#[test]
fn session_log_captures_recycles() {
    let mut session = GameSession::new(Some(42), GameMode::Classic);
    let mut clock = 0.0;
    for _ in 0..24 {
        let top = session.table().pile(PileId::Stock).top().unwrap().id();
        clock += 1.0;
        session.on_card_pressed(top, Point::new(0.0, 0.0), clock).unwrap();
    }
    session.on_pile_pressed(PileId::Stock);

    let last = session.move_log().last().unwrap();
    assert_eq!(last.from, PileId::Talon);
    assert_eq!(last.to, PileId::Stock);
    assert_eq!(last.cards.len(), 24);
}

#[test]
fn deal_record_snapshots_the_session() {
    let mut session = GameSession::new(Some(42), GameMode::Classic);
    let top = session.table().pile(PileId::Stock).top().unwrap().id();
    session
        .on_card_pressed(top, Point::new(0.0, 0.0), 1.0)
        .unwrap();

    let record = session.deal_record("20260807-000001".to_string());
    assert_eq!(record.seed, Some(42));
    assert_eq!(record.mode, GameMode::Classic);
    assert_eq!(record.draw_count, 1);
    assert!(!record.cumulative);
    assert_eq!(record.moves.len(), 1);
    assert_eq!(record.score, -52);
    assert!(!record.won);
}

#[test]
fn move_log_resets_on_restart() {
    let mut session = GameSession::new(Some(42), GameMode::Classic);
    let top = session.table().pile(PileId::Stock).top().unwrap().id();
    session
        .on_card_pressed(top, Point::new(0.0, 0.0), 1.0)
        .unwrap();
    assert!(!session.move_log().is_empty());

    session.on_key(patience_engine::input::Command::Restart);
    assert!(session.move_log().is_empty());
}
