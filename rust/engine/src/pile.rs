use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::{Card, CardId};
use crate::errors::GameError;

/// The four behavioral kinds of pile on the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    /// Face-down draw pile, source of new talon cards.
    Stock,
    /// Face-up pile of cards drawn from the stock.
    Talon,
    /// One of the 7 main play columns (alternating-color descending runs).
    Tableau,
    /// One of the 4 suit-ordered ascending piles that define the win.
    Foundation,
}

/// Named pile address: kind plus index where the kind has several piles.
/// Replaces the flat 0..12 numeric scheme the original table used, so call
/// sites never traffic in magic pile numbers.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PileId {
    Stock,
    Talon,
    /// Tableau column 0..=6.
    Tableau(u8),
    /// Foundation slot 0..=3.
    Foundation(u8),
}

impl PileId {
    pub fn kind(self) -> PileKind {
        match self {
            PileId::Stock => PileKind::Stock,
            PileId::Talon => PileKind::Talon,
            PileId::Tableau(_) => PileKind::Tableau,
            PileId::Foundation(_) => PileKind::Foundation,
        }
    }
}

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PileId::Stock => write!(f, "stock"),
            PileId::Talon => write!(f, "talon"),
            PileId::Tableau(i) => write!(f, "tableau {}", i),
            PileId::Foundation(i) => write!(f, "foundation {}", i),
        }
    }
}

/// An ordered stack of cards, bottom to top; the last element is the top
/// (visible) card. Plain stack semantics; pile-kind rules live in
/// [`crate::rules`] and the orchestration in [`crate::table`].
#[derive(Debug, Clone)]
pub struct Pile {
    id: PileId,
    cards: Vec<Card>,
}

impl Pile {
    pub fn new(id: PileId) -> Self {
        Self {
            id,
            cards: Vec::new(),
        }
    }

    pub fn id(&self) -> PileId {
        self.id
    }
    pub fn kind(&self) -> PileKind {
        self.id.kind()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Bottom-to-top card sequence (draw order for the renderer).
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }
    pub fn top_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn pop_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Empty the pile, returning its cards bottom to top.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    pub fn contains(&self, card: CardId) -> bool {
        self.index_of(card).is_some()
    }

    /// Position of the card in this pile, 0 = bottom.
    pub fn index_of(&self, card: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id() == card)
    }

    pub fn card(&self, card: CardId) -> Option<&Card> {
        self.index_of(card).map(|i| &self.cards[i])
    }

    pub fn card_mut(&mut self, card: CardId) -> Option<&mut Card> {
        self.index_of(card).map(|i| &mut self.cards[i])
    }

    /// Remove one card by identity, preserving the order of the rest.
    pub fn remove_card(&mut self, card: CardId) -> Result<Card, GameError> {
        match self.index_of(card) {
            Some(i) => Ok(self.cards.remove(i)),
            None => Err(GameError::CardNotInPile {
                card,
                pile: self.id,
            }),
        }
    }
}
