use patience_engine::cards::Rank;
use patience_engine::game::{GameMode, GameSession};
use patience_engine::input::{Command, Point, PressOutcome, ReleaseOutcome};
use patience_engine::pile::PileId;

fn origin() -> Point {
    Point::new(0.0, 0.0)
}

#[test]
fn every_deal_starts_52_in_the_hole() {
    let classic = GameSession::new(Some(42), GameMode::Classic);
    assert_eq!(classic.score(), -52);
    let vegas = GameSession::new(Some(42), GameMode::Vegas);
    assert_eq!(vegas.score(), -52);
}

#[test]
fn classic_stock_click_draws_exactly_one() {
    let mut session = GameSession::new(Some(42), GameMode::Classic);
    let top = session.table().pile(PileId::Stock).top().unwrap().id();
    let outcome = session.on_card_pressed(top, origin(), 1.0).unwrap();

    assert_eq!(outcome, PressOutcome::Drew { cards: vec![top] });
    assert_eq!(session.table().pile(PileId::Stock).len(), 23);
    assert_eq!(session.table().pile(PileId::Talon).len(), 1);
    assert!(session.table().pile(PileId::Talon).top().unwrap().is_face_up());
}

#[test]
fn vegas_draw_three_empties_the_stock_in_uneven_steps() {
    let mut session = GameSession::new(Some(42), GameMode::Vegas);
    let mut clock = 0.0;
    let press_stock = |session: &mut GameSession, clock: &mut f64| {
        let top = session.table().pile(PileId::Stock).top().unwrap().id();
        *clock += 1.0;
        session.on_card_pressed(top, origin(), *clock).unwrap()
    };

    // One draw-one first, so the stock is no longer a multiple of three.
    press_stock(&mut session, &mut clock);
    assert_eq!(session.table().pile(PileId::Stock).len(), 23);

    session.on_key(Command::ToggleDraw3);
    for _ in 0..7 {
        match press_stock(&mut session, &mut clock) {
            PressOutcome::Drew { cards } => assert_eq!(cards.len(), 3),
            other => panic!("expected a draw, got {:?}", other),
        }
    }
    assert_eq!(session.table().pile(PileId::Stock).len(), 2);

    // Two cards left: the click moves exactly two and empties the stock.
    match press_stock(&mut session, &mut clock) {
        PressOutcome::Drew { cards } => assert_eq!(cards.len(), 2),
        other => panic!("expected a draw, got {:?}", other),
    }
    assert!(session.table().pile(PileId::Stock).is_empty());
    assert_eq!(session.table().pile(PileId::Talon).len(), 24);
}

#[test]
fn empty_stock_press_recycles_whole_talon() {
    let mut session = GameSession::new(Some(42), GameMode::Classic);
    let mut clock = 0.0;
    for _ in 0..24 {
        let top = session.table().pile(PileId::Stock).top().unwrap().id();
        clock += 1.0;
        session.on_card_pressed(top, origin(), clock).unwrap();
    }
    assert!(session.table().pile(PileId::Stock).is_empty());
    assert_eq!(session.table().pile(PileId::Talon).len(), 24);

    let outcome = session.on_pile_pressed(PileId::Stock);
    assert_eq!(outcome, PressOutcome::Recycled);
    assert_eq!(session.table().pile(PileId::Stock).len(), 24);
    assert!(session.table().pile(PileId::Talon).is_empty());
    for card in session.table().pile(PileId::Stock).cards() {
        assert!(!card.is_face_up());
    }
}

#[test]
fn classic_toggles_are_noops() {
    let mut session = GameSession::new(Some(42), GameMode::Classic);
    session.on_key(Command::ToggleDraw3);
    assert_eq!(session.effective_draw_count(), 1);
    session.on_key(Command::ToggleCumulative);
    assert!(!session.cumulative_scoring());
}

#[test]
fn vegas_restart_carries_score_only_when_cumulative() {
    let mut session = GameSession::new(Some(42), GameMode::Vegas);
    session.on_key(Command::Restart);
    assert_eq!(session.score(), -52, "non-cumulative restarts reset");

    session.on_key(Command::ToggleCumulative);
    session.on_key(Command::Restart);
    assert_eq!(session.score(), -104, "each deck costs another 52");
    session.on_key(Command::Restart);
    assert_eq!(session.score(), -156);

    session.on_key(Command::ToggleCumulative);
    session.on_key(Command::Restart);
    assert_eq!(session.score(), -52);
}

#[test]
fn cumulative_carry_keeps_winnings() {
    let mut session = GameSession::new(Some(42), GameMode::Vegas);
    session.on_key(Command::ToggleCumulative);
    session.on_key(Command::ForceWin);
    assert_eq!(session.score(), 208);
    session.on_key(Command::Restart);
    assert_eq!(session.score(), 156, "winnings minus the next deck");
}

#[test]
fn switch_mode_redeals() {
    let mut session = GameSession::new(Some(42), GameMode::Classic);
    session.on_key(Command::SwitchMode);
    assert_eq!(session.mode(), GameMode::Vegas);
    assert_eq!(session.score(), -52);
    assert_eq!(session.table().pile(PileId::Stock).len(), 24);
    assert!(!session.won());

    session.on_key(Command::SwitchMode);
    assert_eq!(session.mode(), GameMode::Classic);
}

#[test]
fn force_win_completes_the_foundations() {
    let mut session = GameSession::new(Some(42), GameMode::Classic);
    session.on_key(Command::ForceWin);
    assert!(session.won());
    for i in 0..4u8 {
        let pile = session.table().pile(PileId::Foundation(i));
        assert_eq!(pile.len(), 13);
        assert!(pile.cards().iter().all(|c| c.is_face_up()));
    }
    // Classic keeps the money score parked at the deck cost.
    assert_eq!(session.score(), -52);
}

#[test]
fn vegas_force_win_pays_the_full_deck() {
    let mut session = GameSession::new(Some(42), GameMode::Vegas);
    session.on_key(Command::ForceWin);
    assert!(session.won());
    assert_eq!(session.score(), -52 + 52 * 5);
}

#[test]
fn win_recomputes_and_the_bonus_is_paid_once() {
    let mut session = GameSession::new(Some(42), GameMode::Vegas);
    session.on_key(Command::ForceWin);
    assert!(session.won());
    assert_eq!(session.score(), 208);

    // Pull a king off its foundation onto an empty tableau column.
    let king = session
        .table()
        .pile(PileId::Foundation(0))
        .top()
        .unwrap()
        .id();
    let grab = session.on_card_pressed(king, origin(), 100.0).unwrap();
    assert!(matches!(grab, PressOutcome::Grabbed { .. }));
    let release = session.on_released(Some(PileId::Tableau(0))).unwrap();
    assert!(matches!(release, ReleaseOutcome::Committed { .. }));
    assert!(!session.won(), "51 cards on the foundations is not a win");
    assert_eq!(session.score(), 208, "leaving a foundation refunds nothing");

    // Double-click it home again: the win returns, the bonus does not.
    let first = session.on_card_pressed(king, origin(), 200.0).unwrap();
    assert!(matches!(first, PressOutcome::Grabbed { .. }));
    session.on_released(None).unwrap();
    let second = session.on_card_pressed(king, origin(), 200.1).unwrap();
    assert!(matches!(second, PressOutcome::SentToFoundation { .. }));
    assert!(session.won());
    assert_eq!(session.score(), 208);
}

#[test]
fn vegas_pays_five_on_first_foundation_arrival() {
    // Work through seeds until a deal puts an ace in the stock, then draw
    // to it and double-click it onto a foundation.
    for seed in 0..50u64 {
        let mut session = GameSession::new(Some(seed), GameMode::Vegas);
        let mut clock = 0.0;
        for _ in 0..24 {
            let Some(top) = session.table().pile(PileId::Stock).top().map(|c| c.id()) else {
                break;
            };
            clock += 1.0;
            session.on_card_pressed(top, origin(), clock).unwrap();
            let (id, is_ace) = {
                let talon_top = session.table().pile(PileId::Talon).top().unwrap();
                (talon_top.id(), talon_top.rank() == Rank::Ace)
            };
            if !is_ace {
                continue;
            }
            clock += 1.0;
            let first = session.on_card_pressed(id, origin(), clock).unwrap();
            assert!(matches!(first, PressOutcome::Grabbed { .. }));
            session.on_released(None).unwrap();
            let second = session.on_card_pressed(id, origin(), clock + 0.1).unwrap();
            assert!(matches!(second, PressOutcome::SentToFoundation { .. }));
            assert_eq!(session.score(), -52 + 5);
            return;
        }
    }
    panic!("no seed in 0..50 left an ace in the stock");
}

#[test]
fn status_lines_reflect_mode_and_options() {
    let mut session = GameSession::new(Some(42), GameMode::Classic);
    assert_eq!(session.status_line(), "Classic");
    assert_eq!(session.mode_label(), "Classic");
    assert_eq!(session.draw_label(), "Draw 1");

    session.on_key(Command::SwitchMode);
    session.on_key(Command::ToggleDraw3);
    session.on_key(Command::ToggleCumulative);
    assert_eq!(session.status_line(), "Vegas · Draw 3 · Cumulative · $-52");
}
