use thiserror::Error;

use crate::cards::{Card, Rank, Suit};
use crate::pile::{PileId, PileKind};

/// The verdict for a legal drop: what kind of placement it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedDrop {
    /// The held run stacks onto a tableau column (any length).
    ToTableau,
    /// A single held card lands on a foundation.
    ToFoundation,
    /// Target equals the origin pile: a no-op success. The selection goes
    /// back where it was; nothing in the layout changes.
    SamePile,
}

/// Why a proposed drop is illegal. Rejections are expected and non-fatal:
/// the session answers them with a silent position reset, never an error
/// surfaced to the frontend.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DropRejection {
    #[error("no cards held")]
    NothingHeld,
    #[error("face-down cards cannot be moved")]
    FaceDownCard,
    #[error("tableau stacking alternates colors")]
    SameColor,
    #[error("tableau stacking descends by exactly one rank")]
    NotDescending,
    #[error("only a King may start an empty tableau")]
    EmptyTableauNeedsKing,
    #[error("only an Ace may start an empty foundation")]
    EmptyFoundationNeedsAce,
    #[error("foundation is committed to a different suit")]
    SuitMismatch,
    #[error("foundation builds up by exactly one rank")]
    NotAscending,
    #[error("foundations take a single card at a time")]
    MultiCardFoundationDrop,
    #[error("this pile accepts no drops")]
    NotADropTarget,
}

/// Decides whether dropping `held` onto `target` is legal.
///
/// Pure function, no mutation: the caller supplies the proposed selection
/// (primary card first, exactly as grabbed), the origin and target pile ids,
/// the target's current top card, and (for foundations) the suit the
/// target committed to when its first card was placed.
///
/// # Arguments
///
/// * `held` - Cards being dropped, primary (bottom-most) card first
/// * `origin` - Pile the selection was grabbed from
/// * `target` - Pile the selection was dropped on
/// * `target_top` - Current top card of `target`, if any
/// * `committed` - Suit recorded for a foundation target, if one was ever set
///
/// # Returns
///
/// `Ok(ValidatedDrop)` naming the placement kind, or `Err(DropRejection)`
/// explaining the refusal. Callers treat every rejection the same way
/// (revert the selection); the reason exists for logging and tests.
///
/// # Examples
///
/// ```
/// use patience_engine::cards::{Card, Rank, Suit};
/// use patience_engine::pile::PileId;
/// use patience_engine::rules::{validate_drop, ValidatedDrop};
///
/// // Black 7 onto red 8: alternating color, descending by one.
/// let mut seven = Card::new(Suit::Spades, Rank::Seven);
/// seven.set_face_up(true);
/// let mut eight = Card::new(Suit::Hearts, Rank::Eight);
/// eight.set_face_up(true);
///
/// let verdict = validate_drop(
///     &[&seven],
///     PileId::Talon,
///     PileId::Tableau(2),
///     Some(&eight),
///     None,
/// );
/// assert_eq!(verdict, Ok(ValidatedDrop::ToTableau));
/// ```
///
/// ```
/// use patience_engine::cards::{Card, Rank, Suit};
/// use patience_engine::pile::PileId;
/// use patience_engine::rules::{validate_drop, DropRejection};
///
/// // Red 8 onto red 9 is refused: same color.
/// let mut eight = Card::new(Suit::Hearts, Rank::Eight);
/// eight.set_face_up(true);
/// let mut nine = Card::new(Suit::Diamonds, Rank::Nine);
/// nine.set_face_up(true);
///
/// let verdict = validate_drop(
///     &[&eight],
///     PileId::Tableau(0),
///     PileId::Tableau(1),
///     Some(&nine),
///     None,
/// );
/// assert_eq!(verdict, Err(DropRejection::SameColor));
/// ```
pub fn validate_drop(
    held: &[&Card],
    origin: PileId,
    target: PileId,
    target_top: Option<&Card>,
    committed: Option<Suit>,
) -> Result<ValidatedDrop, DropRejection> {
    let first = held.first().copied().ok_or(DropRejection::NothingHeld)?;
    if held.iter().any(|c| !c.is_face_up()) {
        return Err(DropRejection::FaceDownCard);
    }
    if origin == target {
        return Ok(ValidatedDrop::SamePile);
    }
    match target.kind() {
        PileKind::Tableau => match target_top {
            Some(top) => {
                if first.color() == top.color() {
                    Err(DropRejection::SameColor)
                } else if first.rank().value() + 1 != top.rank().value() {
                    Err(DropRejection::NotDescending)
                } else {
                    Ok(ValidatedDrop::ToTableau)
                }
            }
            None => {
                if first.rank() == Rank::King {
                    Ok(ValidatedDrop::ToTableau)
                } else {
                    Err(DropRejection::EmptyTableauNeedsKing)
                }
            }
        },
        PileKind::Foundation => {
            if held.len() != 1 {
                return Err(DropRejection::MultiCardFoundationDrop);
            }
            match target_top {
                Some(top) => {
                    if first.suit() != top.suit() {
                        Err(DropRejection::SuitMismatch)
                    } else if first.rank().value() != top.rank().value() + 1 {
                        Err(DropRejection::NotAscending)
                    } else {
                        Ok(ValidatedDrop::ToFoundation)
                    }
                }
                None => {
                    if first.rank() != Rank::Ace {
                        Err(DropRejection::EmptyFoundationNeedsAce)
                    } else if committed.is_some_and(|s| s != first.suit()) {
                        Err(DropRejection::SuitMismatch)
                    } else {
                        Ok(ValidatedDrop::ToFoundation)
                    }
                }
            }
        }
        PileKind::Stock | PileKind::Talon => Err(DropRejection::NotADropTarget),
    }
}
