//! Text rendering of the table for the terminal frontend.
//!
//! The engine emits pile contents and face orientations; these functions
//! turn that into the fixed-width layout `play` and `deal` print. Face-down
//! cards render as `##`, empty piles as `--`.

use patience_engine::cards::Card;
use patience_engine::game::GameSession;
use patience_engine::pile::PileId;
use patience_engine::table::{FOUNDATION_COUNT, TABLEAU_COUNT};

pub fn format_card(card: &Card) -> String {
    if card.is_face_up() {
        card.id().to_string()
    } else {
        "##".to_string()
    }
}

fn format_top(session: &GameSession, pile: PileId) -> String {
    match session.table().pile(pile).top() {
        Some(card) => format_card(card),
        None => "--".to_string(),
    }
}

/// The talon fan: up to the last three cards, top last, so a draw-three
/// player can see every card that is still individually addressable.
fn format_talon(session: &GameSession) -> String {
    let cards = session.table().pile(PileId::Talon).cards();
    if cards.is_empty() {
        return "--".to_string();
    }
    let start = cards.len().saturating_sub(3);
    cards[start..]
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the whole table as the frontend's draw pass: stock and talon,
/// foundations, then the seven tableau columns bottom to top.
pub fn format_table(session: &GameSession) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Stock: [{:2}]   Waste: {}\n",
        session.table().pile(PileId::Stock).len(),
        format_talon(session),
    ));
    let mut foundations = String::from("Foundations:");
    for i in 0..FOUNDATION_COUNT as u8 {
        foundations.push_str(&format!(
            "  f{}: {}",
            i + 1,
            format_top(session, PileId::Foundation(i))
        ));
    }
    out.push_str(&foundations);
    out.push('\n');
    for i in 0..TABLEAU_COUNT as u8 {
        let pile = session.table().pile(PileId::Tableau(i));
        let row = pile
            .cards()
            .iter()
            .map(format_card)
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!("  t{}: {}\n", i + 1, row));
    }
    out.push_str(&format!("[{}]\n", session.status_line()));
    out
}
