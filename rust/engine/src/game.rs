use serde::{Deserialize, Serialize};

use crate::cards::{all_suits, CardId, Rank};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::input::{Command, HeldSelection, InputState, Point, PressOutcome, ReleaseOutcome};
use crate::logger::{DealRecord, MoveRecord};
use crate::pile::PileId;
use crate::table::{Table, TABLEAU_COUNT};

/// The two rule variants.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum GameMode {
    /// Standard Klondike: draw one, no money score.
    Classic,
    /// Vegas: pay 52 per deck, earn 5 per card reaching a foundation,
    /// optional draw-three and cumulative carry-over.
    Vegas,
}

/// Cost of buying the deck at the start of a Vegas deal.
pub const DECK_COST: i32 = 52;
/// Vegas bonus per card on its first arrival at any foundation.
pub const FOUNDATION_BONUS: i32 = 5;

/// One solitaire session: the table, the interaction machine, and the
/// mode/score bookkeeping. This is the surface the rendering layer talks to:
/// input events in, pile state and display strings out.
///
/// # Examples
///
/// ```
/// use patience_engine::game::{GameMode, GameSession};
/// use patience_engine::pile::PileId;
///
/// let session = GameSession::new(Some(7), GameMode::Classic);
/// // A fresh deal leaves 24 cards in the stock.
/// assert_eq!(session.table().pile(PileId::Stock).len(), 24);
/// assert!(!session.won());
/// ```
#[derive(Debug)]
pub struct GameSession {
    table: Table,
    deck: Deck,
    input: InputState,
    seed: u64,
    mode: GameMode,
    /// Stored draw preference, 1 or 3. Effective only in Vegas; Classic
    /// always draws one.
    draw_count: u8,
    cumulative: bool,
    score: i32,
    won: bool,
    moves: Vec<MoveRecord>,
}

impl GameSession {
    pub fn new(seed: Option<u64>, mode: GameMode) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        let mut session = Self {
            table: Table::new(),
            deck: Deck::new_with_seed(seed),
            input: InputState::new(),
            seed,
            mode,
            draw_count: 1,
            cumulative: false,
            score: 0,
            won: false,
            moves: Vec::new(),
        };
        session.start_new_deal();
        session
    }

    /// Deal a fresh game: shuffle, stack the stock, lay out the tableau,
    /// flip the seven tops, and apply the score carry rule.
    pub fn start_new_deal(&mut self) {
        self.input.clear();
        self.table = Table::new();
        self.deck.shuffle();
        while let Some(card) = self.deck.deal_card() {
            self.table.pile_mut(PileId::Stock).push(card);
        }
        // Tableau column i takes i+1 cards off the stock, all face down,
        // so only the last-dealt card of each column ends up visible.
        for i in 0..TABLEAU_COUNT {
            for _ in 0..=i {
                if let Some(card) = self.table.pile_mut(PileId::Stock).pop_top() {
                    self.table.pile_mut(PileId::Tableau(i as u8)).push(card);
                }
            }
        }
        for i in 0..TABLEAU_COUNT {
            if let Some(top) = self.table.pile_mut(PileId::Tableau(i as u8)).top_mut() {
                top.set_face_up(true);
            }
        }
        self.score = if self.mode == GameMode::Vegas && self.cumulative {
            self.score - DECK_COST
        } else {
            -DECK_COST
        };
        self.won = false;
        self.moves.clear();
    }

    // --- input events ---

    /// A card sprite was pressed. `pos` is the card's current screen
    /// position; `now` is any monotonic clock in seconds, used only for
    /// double-click pairing.
    pub fn on_card_pressed(
        &mut self,
        card: CardId,
        pos: Point,
        now: f64,
    ) -> Result<PressOutcome, GameError> {
        let origin = self.table.find_pile_of(card)?;
        let draw = self.effective_draw_count();
        let outcome = self
            .input
            .press_card(&mut self.table, card, pos, now, draw)?;
        match &outcome {
            PressOutcome::Drew { cards } => {
                self.record_move(PileId::Stock, PileId::Talon, cards.clone());
            }
            PressOutcome::SentToFoundation { card, target } => {
                self.apply_foundation_arrivals(&[*card]);
                self.record_move(origin, *target, vec![*card]);
                self.won = self.table.foundations_complete();
            }
            _ => {}
        }
        Ok(outcome)
    }

    /// A pile mat was pressed with no card on it (only the empty stock
    /// reacts: the talon is recycled).
    pub fn on_pile_pressed(&mut self, pile: PileId) -> PressOutcome {
        let outcome = self.input.press_pile(&mut self.table, pile);
        if outcome == PressOutcome::Recycled {
            let cards: Vec<CardId> = self
                .table
                .pile(PileId::Stock)
                .cards()
                .iter()
                .map(|c| c.id())
                .collect();
            self.record_move(PileId::Talon, PileId::Stock, cards);
        }
        outcome
    }

    /// The pointer moved by (dx, dy) while holding.
    pub fn on_drag(&mut self, dx: f32, dy: f32) {
        self.input.drag(dx, dy);
    }

    /// The pointer was released. `target` is the nearest overlapping pile
    /// as resolved by the frontend, or `None` for a drop over nothing.
    pub fn on_released(&mut self, target: Option<PileId>) -> Result<ReleaseOutcome, GameError> {
        let origin = self.input.held().map(|h| h.origin());
        let outcome = self.input.release(&mut self.table, target)?;
        if let ReleaseOutcome::Committed { cards, target } = &outcome {
            if matches!(target, PileId::Foundation(_)) {
                self.apply_foundation_arrivals(cards);
            }
            if let Some(origin) = origin {
                self.record_move(origin, *target, cards.clone());
            }
            self.won = self.table.foundations_complete();
        }
        Ok(outcome)
    }

    /// A key command from the frontend.
    pub fn on_key(&mut self, command: Command) {
        match command {
            Command::Restart => self.start_new_deal(),
            Command::SwitchMode => {
                self.mode = match self.mode {
                    GameMode::Classic => GameMode::Vegas,
                    GameMode::Vegas => GameMode::Classic,
                };
                self.start_new_deal();
            }
            Command::ToggleDraw3 => {
                // Vegas-only; a Classic toggle is a silent no-op.
                if self.mode == GameMode::Vegas {
                    self.draw_count = if self.draw_count == 3 { 1 } else { 3 };
                }
            }
            Command::ToggleCumulative => {
                if self.mode == GameMode::Vegas {
                    self.cumulative = !self.cumulative;
                }
            }
            Command::ForceWin => self.force_win(),
        }
    }

    // --- observable state ---

    pub fn table(&self) -> &Table {
        &self.table
    }
    pub fn held(&self) -> Option<&HeldSelection> {
        self.input.held()
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn mode(&self) -> GameMode {
        self.mode
    }
    pub fn cumulative_scoring(&self) -> bool {
        self.cumulative
    }
    pub fn score(&self) -> i32 {
        self.score
    }
    pub fn won(&self) -> bool {
        self.won
    }

    /// Committed moves of the current deal, oldest first.
    pub fn move_log(&self) -> &[MoveRecord] {
        &self.moves
    }

    /// Snapshot the current deal as a loggable record.
    pub fn deal_record(&self, deal_id: String) -> DealRecord {
        DealRecord {
            deal_id,
            seed: Some(self.seed),
            mode: self.mode,
            draw_count: self.effective_draw_count(),
            cumulative: self.cumulative,
            moves: self.moves.clone(),
            score: self.score,
            won: self.won,
            ts: None,
            meta: None,
        }
    }

    /// The stock draw actually in effect: Classic is pinned to one.
    pub fn effective_draw_count(&self) -> u8 {
        match self.mode {
            GameMode::Classic => 1,
            GameMode::Vegas => self.draw_count,
        }
    }

    pub fn mode_label(&self) -> &'static str {
        match self.mode {
            GameMode::Classic => "Classic",
            GameMode::Vegas => "Vegas",
        }
    }

    pub fn draw_label(&self) -> &'static str {
        if self.effective_draw_count() == 3 {
            "Draw 3"
        } else {
            "Draw 1"
        }
    }

    /// One-line status for the frontend: mode, Vegas options, money score.
    pub fn status_line(&self) -> String {
        match self.mode {
            GameMode::Classic => {
                let mut s = String::from("Classic");
                if self.won {
                    s.push_str(" · You won!");
                }
                s
            }
            GameMode::Vegas => {
                let mut s = format!("Vegas · {}", self.draw_label());
                if self.cumulative {
                    s.push_str(" · Cumulative");
                }
                s.push_str(&format!(" · ${}", self.score));
                if self.won {
                    s.push_str(" · You won!");
                }
                s
            }
        }
    }

    // --- internals ---

    /// Pay the Vegas bonus for cards newly arrived on a foundation. Each
    /// card is paid once per deal; leaving and returning earns nothing.
    fn apply_foundation_arrivals(&mut self, cards: &[CardId]) {
        if self.mode != GameMode::Vegas {
            return;
        }
        for &id in cards {
            if let Some(card) = self.table.card_mut(id) {
                if !card.foundation_visited() {
                    card.mark_foundation_visited();
                    self.score += FOUNDATION_BONUS;
                }
            }
        }
    }

    /// Debug shortcut: march every card onto its suit's foundation through
    /// the normal relocation path so scoring and the win flag stay honest.
    fn force_win(&mut self) {
        self.input.clear();
        for (i, &suit) in all_suits().iter().enumerate() {
            let target = PileId::Foundation(i as u8);
            for rank in 1..=13 {
                let id = CardId::new(suit, Rank::from_u8(rank));
                let Ok(from) = self.table.find_pile_of(id) else {
                    continue;
                };
                if from == target {
                    continue;
                }
                if self.table.move_cards(&[id], target).is_ok() {
                    if let Some(card) = self.table.card_mut(id) {
                        card.set_face_up(true);
                    }
                    self.apply_foundation_arrivals(&[id]);
                    self.record_move(from, target, vec![id]);
                }
            }
        }
        self.won = self.table.foundations_complete();
    }

    fn record_move(&mut self, from: PileId, to: PileId, cards: Vec<CardId>) {
        if cards.is_empty() {
            return;
        }
        self.moves.push(MoveRecord { from, to, cards });
    }
}
