use thiserror::Error;

use crate::cards::CardId;
use crate::pile::PileId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("card {card} is not in any pile")]
    CardNotInAnyPile { card: CardId },
    #[error("card {card} is not in pile {pile}")]
    CardNotInPile { card: CardId, pile: PileId },
}
