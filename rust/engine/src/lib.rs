//! # patience-engine: Solitaire Rule Engine Core
//!
//! A headless Klondike/Vegas solitaire engine. Maintains the arrangement of
//! a standard 52-card deck across the 13 table piles, enforces move legality
//! under both rule variants, detects wins, and tracks Vegas scoring, with
//! reproducible RNG so a seed always replays the same deal.
//!
//! Rendering, sprite layout, and hit-testing live outside this crate: the
//! engine consumes resolved card/pile identities ("card X pressed", "group
//! dropped near pile Y") and emits pile contents, face orientations, score,
//! and the win flag for a frontend to draw.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card identity (Suit, Rank, CardId) and per-card state
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`pile`] - Pile addressing (PileId) and stack operations
//! - [`table`] - The 13-pile layout and cross-pile relocation
//! - [`rules`] - Pure move validation for tableau and foundation targets
//! - [`input`] - Press/drag/release state machine and double-click timing
//! - [`game`] - Session orchestration: dealing, modes, scoring, win detection
//! - [`logger`] - Deal records and JSONL serialization
//! - [`errors`] - Error types for engine operations
//!
//! ## Quick Start
//!
//! ```rust
//! use patience_engine::game::{GameMode, GameSession};
//! use patience_engine::pile::PileId;
//!
//! // Seeded sessions deal reproducibly.
//! let session = GameSession::new(Some(42), GameMode::Classic);
//!
//! // The deal leaves 24 cards in the stock and 1..=7 per tableau column.
//! assert_eq!(session.table().pile(PileId::Stock).len(), 24);
//! assert_eq!(session.table().pile(PileId::Tableau(6)).len(), 7);
//! ```
//!
//! ## Driving the Session
//!
//! Frontends feed abstract events and mirror the returned outcomes:
//!
//! ```rust
//! use patience_engine::game::{GameMode, GameSession};
//! use patience_engine::input::{Point, PressOutcome};
//! use patience_engine::pile::PileId;
//!
//! let mut session = GameSession::new(Some(42), GameMode::Classic);
//!
//! // Click the stock: exactly one card turns up on the talon.
//! let top = session.table().pile(PileId::Stock).top().unwrap().id();
//! let outcome = session.on_card_pressed(top, Point::new(0.0, 0.0), 0.0).unwrap();
//! assert!(matches!(outcome, PressOutcome::Drew { .. }));
//! assert_eq!(session.table().pile(PileId::Talon).len(), 1);
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod input;
pub mod logger;
pub mod pile;
pub mod rules;
pub mod table;
