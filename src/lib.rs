//! A multi-player blackjack table engine.
//!
//! The crate provides a [`Table`] type that manages the full round flow:
//! betting, the two-pass opening deal, player hit/stand/double decisions,
//! dealer play under the hits-soft-17 house rule, and settlement — along
//! with the multi-deck [`Shoe`] every card cycles through (draw pile, hands,
//! discard pile, reshuffle).
//!
//! # Example
//!
//! ```no_run
//! use tablejack::{Table, TableOptions};
//!
//! let options = TableOptions::default();
//! let mut table = Table::new(options, 42);
//! let player = table.join("Ada").unwrap();
//! table.bet(player, 25).unwrap();
//! let summary = table.deal().unwrap();
//! let _ = summary;
//! ```

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{ActionError, BetError, DealError, ReshuffleError, SeatError, ShowdownError};
pub use game::{GameState, Table};
pub use hand::Hand;
pub use options::TableOptions;
pub use player::{HandStatus, Player};
pub use result::{DealSummary, HandOutcome, NaturalPayout, PlayerResult, RoundResult};
pub use shoe::Shoe;
