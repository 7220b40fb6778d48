use crate::cards::{Card, CardId, Suit};
use crate::errors::GameError;
use crate::pile::{Pile, PileId};

pub const TABLEAU_COUNT: usize = 7;
pub const FOUNDATION_COUNT: usize = 4;
/// 1 stock + 1 talon + 7 tableau + 4 foundation.
pub const PILE_COUNT: usize = 2 + TABLEAU_COUNT + FOUNDATION_COUNT;

/// The layout table: the fixed set of 13 piles and the operations that span
/// them. Owns every card for the lifetime of a deal; all relocation goes
/// through [`Table::move_cards`] so a card is never in two piles at once.
///
/// The table performs no rule validation. Callers validate with
/// [`crate::rules`] first and handle orientation side effects (flipping a
/// newly exposed tableau top) themselves.
#[derive(Debug)]
pub struct Table {
    stock: Pile,
    talon: Pile,
    tableaus: [Pile; TABLEAU_COUNT],
    foundations: [Pile; FOUNDATION_COUNT],
    /// Suit each foundation committed to when its first card landed.
    /// Retained for the rest of the deal even if the pile empties again.
    foundation_suits: [Option<Suit>; FOUNDATION_COUNT],
}

impl Table {
    pub fn new() -> Self {
        Self {
            stock: Pile::new(PileId::Stock),
            talon: Pile::new(PileId::Talon),
            tableaus: std::array::from_fn(|i| Pile::new(PileId::Tableau(i as u8))),
            foundations: std::array::from_fn(|i| Pile::new(PileId::Foundation(i as u8))),
            foundation_suits: [None; FOUNDATION_COUNT],
        }
    }

    /// The suit a foundation is committed to, if any card ever landed on it.
    pub fn foundation_suit(&self, index: u8) -> Option<Suit> {
        self.foundation_suits[index as usize]
    }

    pub fn pile(&self, id: PileId) -> &Pile {
        match id {
            PileId::Stock => &self.stock,
            PileId::Talon => &self.talon,
            PileId::Tableau(i) => &self.tableaus[i as usize],
            PileId::Foundation(i) => &self.foundations[i as usize],
        }
    }

    pub fn pile_mut(&mut self, id: PileId) -> &mut Pile {
        match id {
            PileId::Stock => &mut self.stock,
            PileId::Talon => &mut self.talon,
            PileId::Tableau(i) => &mut self.tableaus[i as usize],
            PileId::Foundation(i) => &mut self.foundations[i as usize],
        }
    }

    /// All 13 piles in fixed order: stock, talon, tableau 0..6, foundation 0..3.
    pub fn piles(&self) -> impl Iterator<Item = &Pile> {
        std::iter::once(&self.stock)
            .chain(std::iter::once(&self.talon))
            .chain(self.tableaus.iter())
            .chain(self.foundations.iter())
    }

    pub fn all_pile_ids() -> [PileId; PILE_COUNT] {
        let mut ids = [PileId::Stock; PILE_COUNT];
        ids[1] = PileId::Talon;
        for i in 0..TABLEAU_COUNT {
            ids[2 + i] = PileId::Tableau(i as u8);
        }
        for i in 0..FOUNDATION_COUNT {
            ids[2 + TABLEAU_COUNT + i] = PileId::Foundation(i as u8);
        }
        ids
    }

    /// Which pile currently owns this card. With the ownership invariant
    /// intact this always succeeds for a dealt card; a miss means internal
    /// state corruption, surfaced as [`GameError::CardNotInAnyPile`].
    pub fn find_pile_of(&self, card: CardId) -> Result<PileId, GameError> {
        self.piles()
            .find(|p| p.contains(card))
            .map(|p| p.id())
            .ok_or(GameError::CardNotInAnyPile { card })
    }

    pub fn card(&self, card: CardId) -> Option<&Card> {
        self.piles().find_map(|p| p.card(card))
    }

    pub fn card_mut(&mut self, card: CardId) -> Option<&mut Card> {
        let pile = self.find_pile_of(card).ok()?;
        self.pile_mut(pile).card_mut(card)
    }

    /// Atomically relocate `cards` (in the order given) onto `dest`,
    /// preserving their relative order. Pure mechanics: no legality check,
    /// no orientation change.
    pub fn move_cards(&mut self, cards: &[CardId], dest: PileId) -> Result<(), GameError> {
        for &id in cards {
            let origin = self.find_pile_of(id)?;
            let card = self.pile_mut(origin).remove_card(id)?;
            if let PileId::Foundation(i) = dest {
                self.foundation_suits[i as usize].get_or_insert(card.suit());
            }
            self.pile_mut(dest).push(card);
        }
        Ok(())
    }

    /// Move up to `n` cards from the stock top onto the talon, face up,
    /// stopping early if the stock runs out. Returns the moved cards in the
    /// order they landed (last element is the new talon top).
    pub fn draw_to_talon(&mut self, n: usize) -> Vec<CardId> {
        let mut moved = Vec::new();
        for _ in 0..n {
            match self.stock.pop_top() {
                Some(mut card) => {
                    card.set_face_up(true);
                    moved.push(card.id());
                    self.talon.push(card);
                }
                None => break,
            }
        }
        moved
    }

    /// Flip the whole talon back onto the empty stock, face down. The talon
    /// is kept in sequence so its top (the last card drawn) becomes the new
    /// stock top and is redrawn first.
    pub fn recycle_talon_to_stock(&mut self) {
        if !self.stock.is_empty() {
            return;
        }
        for mut card in self.talon.take_all() {
            card.set_face_up(false);
            self.stock.push(card);
        }
    }

    /// Win predicate: every foundation holds a full 13-card suit run.
    pub fn foundations_complete(&self) -> bool {
        self.foundations.iter().all(|p| p.len() == 13)
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}
