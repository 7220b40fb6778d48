use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents one of the four suits in a standard 52-card deck.
/// Used as a component of [`CardId`] to fully identify a playing card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
    /// Diamonds suit (♦)
    Diamonds,
}

/// Card color derived from the suit. Tableau stacking alternates colors.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

impl Suit {
    pub fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }
}

/// Represents the rank (face value) of a playing card from Ace through King.
/// Numeric values run Ace-low: Ace=1 up to King=13, the ordering the
/// tableau (descending) and foundation (ascending) rules compare against.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (1)
    Ace = 1,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
}

impl Rank {
    pub fn from_u8(v: u8) -> Rank {
        match v {
            1 => Rank::Ace,
            2 => Rank::Two,
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            _ => Rank::King,
        }
    }

    /// Ordinal value 1..=13 (Ace=1, King=13).
    pub fn value(self) -> u8 {
        self as u8
    }
}

/// Immutable identity of a playing card: one (suit, rank) pair.
/// This is what the input layer hands the engine when a sprite is hit-tested;
/// the mutable state lives on [`Card`] inside whichever pile owns it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CardId {
    /// The suit of the card (Clubs, Hearts, Spades, or Diamonds)
    pub suit: Suit,
    /// The rank of the card (Ace through King)
    pub rank: Rank,
}

impl CardId {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub fn color(self) -> Color {
        self.suit.color()
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = match self.rank {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        };
        let s = match self.suit {
            Suit::Clubs => "c",
            Suit::Hearts => "h",
            Suit::Spades => "s",
            Suit::Diamonds => "d",
        };
        write!(f, "{}{}", r, s)
    }
}

/// A playing card as owned by a pile: identity plus face orientation and the
/// Vegas scoring marker. Exactly one pile owns each card at any time;
/// ownership transfer goes through [`crate::table::Table::move_cards`].
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    face_up: bool,
    /// Set the first time the card lands on a foundation. The Vegas +5 bonus
    /// is paid once and never revoked, even if the card leaves again.
    foundation_visited: bool,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            id: CardId::new(suit, rank),
            face_up: false,
            foundation_visited: false,
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }
    pub fn suit(&self) -> Suit {
        self.id.suit
    }
    pub fn rank(&self) -> Rank {
        self.id.rank
    }
    pub fn color(&self) -> Color {
        self.id.color()
    }

    pub fn is_face_up(&self) -> bool {
        self.face_up
    }
    pub fn set_face_up(&mut self, up: bool) {
        self.face_up = up;
    }

    pub fn foundation_visited(&self) -> bool {
        self.foundation_visited
    }
    pub fn mark_foundation_visited(&mut self) {
        self.foundation_visited = true;
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Hearts, Suit::Spades, Suit::Diamonds]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card::new(s, r));
        }
    }
    v
}
