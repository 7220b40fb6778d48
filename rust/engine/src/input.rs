//! Interaction state machine: turns abstract press/drag/release events into
//! validated moves or silent reversions.
//!
//! The machine has two states, `Idle` and `Holding(selection)`. The frontend
//! resolves screen coordinates to card/pile identities before calling in;
//! the engine only sees identities plus opaque position values it echoes
//! back. A release event is the only terminator of `Holding`; a selection
//! is never left dangling across unrelated input.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};
use crate::errors::GameError;
use crate::pile::{PileId, PileKind};
use crate::rules::{validate_drop, ValidatedDrop};
use crate::table::{Table, FOUNDATION_COUNT};

/// Two presses within this window of each other count as a double click.
pub const DOUBLE_CLICK_WINDOW: f64 = 0.6;

/// Opaque screen position supplied by the frontend. The engine records and
/// shifts these values; it never computes layout from them.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Keyboard-level commands the frontend forwards to the session.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Command {
    Restart,
    SwitchMode,
    ToggleDraw3,
    ToggleCumulative,
    ForceWin,
}

/// The cards currently grasped mid-drag: primary card first, then everything
/// that was stacked above it in the origin pile. Cleared on release.
#[derive(Debug, Clone)]
pub struct HeldSelection {
    cards: Vec<CardId>,
    origin: PileId,
    origin_positions: Vec<Point>,
    drag: (f32, f32),
}

impl HeldSelection {
    fn new(cards: Vec<CardId>, origin: PileId, grab: Point) -> Self {
        let origin_positions = vec![grab; cards.len()];
        Self {
            cards,
            origin,
            origin_positions,
            drag: (0.0, 0.0),
        }
    }

    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }
    pub fn origin(&self) -> PileId {
        self.origin
    }

    /// Positions recorded at grab time, one per held card.
    pub fn origin_positions(&self) -> &[Point] {
        &self.origin_positions
    }

    /// Current positions: origin plus the accumulated drag offset.
    pub fn positions(&self) -> Vec<Point> {
        self.origin_positions
            .iter()
            .map(|p| Point::new(p.x + self.drag.0, p.y + self.drag.1))
            .collect()
    }
}

/// Double-click detection as an explicit timestamp comparison. Any monotonic
/// clock works; the frontend passes the same `now` it samples for input.
#[derive(Debug, Default)]
pub struct ClickTimer {
    last_press: Option<f64>,
}

impl ClickTimer {
    /// Record a press. Returns true when it lands within
    /// [`DOUBLE_CLICK_WINDOW`] of the previous press.
    pub fn register(&mut self, now: f64) -> bool {
        let double = self
            .last_press
            .is_some_and(|t| now >= t && now - t <= DOUBLE_CLICK_WINDOW);
        self.last_press = Some(now);
        double
    }

    pub fn reset(&mut self) {
        self.last_press = None;
    }
}

/// What a press did, for the frontend to mirror.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PressOutcome {
    /// Nothing actionable (buried card, press while already holding).
    Ignored,
    /// Stock top card(s) moved onto the talon, face up.
    Drew { cards: Vec<CardId> },
    /// Empty stock pressed: the whole talon flipped back, face down.
    Recycled,
    /// A face-down top card flipped face up in place. No pile change.
    Flipped { card: CardId },
    /// Selection grabbed; the machine is now Holding. The frontend should
    /// pull these cards to the top of its draw order.
    Grabbed { cards: Vec<CardId> },
    /// Double-click shortcut landed the card on a foundation.
    SentToFoundation { card: CardId, target: PileId },
}

/// What a release did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Nothing was held.
    Idle,
    /// Selection committed onto `target`.
    Committed { cards: Vec<CardId>, target: PileId },
    /// No pile accepted the drop (or it was the origin pile): every held
    /// card goes back to its recorded position, piles untouched.
    Reverted,
}

/// The machine itself: `held == None` is `Idle`, `Some` is `Holding`.
#[derive(Debug, Default)]
pub struct InputState {
    held: Option<HeldSelection>,
    clicks: ClickTimer,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn held(&self) -> Option<&HeldSelection> {
        self.held.as_ref()
    }

    pub fn is_holding(&self) -> bool {
        self.held.is_some()
    }

    /// Handle a press on a card. `draw_count` is the session's effective
    /// stock draw (1, or 3 in Vegas draw-three).
    pub fn press_card(
        &mut self,
        table: &mut Table,
        card: CardId,
        pos: Point,
        now: f64,
        draw_count: u8,
    ) -> Result<PressOutcome, GameError> {
        if self.is_holding() {
            return Ok(PressOutcome::Ignored);
        }
        let origin = table.find_pile_of(card)?;

        // Stock presses always draw; click timing still advances so a
        // stock click cannot pair into a double click with the next press.
        if origin == PileId::Stock {
            self.clicks.register(now);
            let cards = table.draw_to_talon(draw_count as usize);
            return Ok(PressOutcome::Drew { cards });
        }

        let double = self.clicks.register(now);
        let is_top = table.pile(origin).top().map(|c| c.id()) == Some(card);
        let face_up = table.card(card).is_some_and(|c| c.is_face_up());

        if double && is_top && face_up {
            // Send-to-foundation shortcut: first foundation that accepts
            // wins; the click counter resets whether or not one does.
            self.clicks.reset();
            if let Some(target) = self.accepting_foundation(table, card, origin)? {
                table.move_cards(&[card], target)?;
                flip_exposed_tableau_top(table, origin);
                return Ok(PressOutcome::SentToFoundation { card, target });
            }
        }

        if !face_up {
            if is_top {
                if let Some(c) = table.card_mut(card) {
                    c.set_face_up(true);
                }
                return Ok(PressOutcome::Flipped { card });
            }
            return Ok(PressOutcome::Ignored);
        }

        let cards = match origin.kind() {
            PileKind::Tableau => {
                let pile = table.pile(origin);
                let start = pile
                    .index_of(card)
                    .ok_or(GameError::CardNotInPile { card, pile: origin })?;
                if pile.cards()[start..].iter().any(|c| !c.is_face_up()) {
                    return Ok(PressOutcome::Ignored);
                }
                pile.cards()[start..].iter().map(|c| c.id()).collect()
            }
            // Only the visible top of the talon or a foundation is grabbable.
            PileKind::Talon | PileKind::Foundation => {
                if !is_top {
                    return Ok(PressOutcome::Ignored);
                }
                vec![card]
            }
            // Handled above; kept total for the match.
            PileKind::Stock => return Ok(PressOutcome::Ignored),
        };

        self.held = Some(HeldSelection::new(cards.clone(), origin, pos));
        Ok(PressOutcome::Grabbed { cards })
    }

    /// Handle a press that hit no card, only a pile mat. The one meaningful
    /// case is the empty stock: recycle the talon back into it.
    pub fn press_pile(&mut self, table: &mut Table, pile: PileId) -> PressOutcome {
        if self.is_holding() {
            return PressOutcome::Ignored;
        }
        if pile == PileId::Stock
            && table.pile(PileId::Stock).is_empty()
            && !table.pile(PileId::Talon).is_empty()
        {
            table.recycle_talon_to_stock();
            return PressOutcome::Recycled;
        }
        PressOutcome::Ignored
    }

    pub fn drag(&mut self, dx: f32, dy: f32) {
        if let Some(sel) = &mut self.held {
            sel.drag.0 += dx;
            sel.drag.1 += dy;
        }
    }

    /// Handle a release. `target` is the frontend's hit-test result: the
    /// nearest overlapping pile, or `None` when the drop was over nothing.
    pub fn release(
        &mut self,
        table: &mut Table,
        target: Option<PileId>,
    ) -> Result<ReleaseOutcome, GameError> {
        let Some(sel) = self.held.take() else {
            return Ok(ReleaseOutcome::Idle);
        };
        let Some(target) = target else {
            return Ok(ReleaseOutcome::Reverted);
        };

        let committed = match target {
            PileId::Foundation(i) => table.foundation_suit(i),
            _ => None,
        };
        let verdict = {
            let mut held_refs: Vec<&Card> = Vec::with_capacity(sel.cards.len());
            for &id in &sel.cards {
                held_refs.push(
                    table
                        .card(id)
                        .ok_or(GameError::CardNotInAnyPile { card: id })?,
                );
            }
            let top = table.pile(target).top();
            validate_drop(&held_refs, sel.origin, target, top, committed)
        };

        match verdict {
            Ok(ValidatedDrop::SamePile) | Err(_) => Ok(ReleaseOutcome::Reverted),
            Ok(_) => {
                table.move_cards(&sel.cards, target)?;
                flip_exposed_tableau_top(table, sel.origin);
                Ok(ReleaseOutcome::Committed {
                    cards: sel.cards,
                    target,
                })
            }
        }
    }

    /// Clear any transient state (new deal, mode switch).
    pub fn clear(&mut self) {
        self.held = None;
        self.clicks.reset();
    }

    fn accepting_foundation(
        &self,
        table: &Table,
        card: CardId,
        origin: PileId,
    ) -> Result<Option<PileId>, GameError> {
        let held = table
            .card(card)
            .ok_or(GameError::CardNotInAnyPile { card })?;
        for i in 0..FOUNDATION_COUNT as u8 {
            let target = PileId::Foundation(i);
            if target == origin {
                continue;
            }
            let top = table.pile(target).top();
            if validate_drop(&[held], origin, target, top, table.foundation_suit(i)).is_ok() {
                return Ok(Some(target));
            }
        }
        Ok(None)
    }
}

/// A removal may have exposed a face-down tableau top; flip it. Stock cards
/// stay down and talon/foundation cards are already up, so only tableau
/// origins need this.
fn flip_exposed_tableau_top(table: &mut Table, origin: PileId) {
    if origin.kind() != PileKind::Tableau {
        return;
    }
    if let Some(top) = table.pile_mut(origin).top_mut() {
        if !top.is_face_up() {
            top.set_face_up(true);
        }
    }
}
