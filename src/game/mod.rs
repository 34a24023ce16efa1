//! Table engine and state management.

use tracing::{debug, info};

use crate::error::{ReshuffleError, SeatError};
use crate::hand::Hand;
use crate::options::TableOptions;
use crate::player::Player;
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::GameState;

/// A blackjack table that manages players, betting, and round flow.
///
/// The table owns the shoe, the seated players, and the dealer's hand. Use
/// [`TableOptions`] to configure the deck count, bankrolls, the minimum
/// bet, and the cut-card position. Execution is strictly single-threaded
/// and turn-based; every mutation goes through `&mut self`.
pub struct Table {
    /// The shoe cards are dealt from.
    pub shoe: Shoe,
    /// Table options.
    pub options: TableOptions,
    state: GameState,
    /// Next player ID to assign.
    next_id: u8,
    players: Vec<Player>,
    dealer_hand: Hand,
    /// Seat index of the player to act, meaningful during `PlayerTurn`.
    turn: usize,
}

impl Table {
    /// Creates a new table with the given seed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tablejack::{Table, TableOptions};
    ///
    /// let options = TableOptions::default();
    /// let table = Table::new(options, 42);
    /// let _ = table;
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let shoe = Shoe::new(options.decks, options.cut_card_position, seed);

        Self {
            shoe,
            options,
            state: GameState::Betting,
            next_id: 0,
            players: Vec::new(),
            dealer_hand: Hand::new(),
            turn: 0,
        }
    }

    /// Seats a new player with the configured starting bankroll and
    /// returns the assigned player ID. Players act in the order they
    /// joined.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn join(&mut self, name: impl Into<String>) -> Result<u8, SeatError> {
        if self.state != GameState::Betting {
            return Err(SeatError::InvalidState);
        }

        let id = self.next_id;
        self.next_id += 1;
        let player = Player::new(id, name.into(), self.options.starting_bankroll);
        debug!(player = %player.name(), id, "player joined the table");
        self.players.push(player);
        Ok(id)
    }

    /// Removes a player from the table and returns them, bankroll intact.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the player is not
    /// seated.
    pub fn leave(&mut self, player_id: u8) -> Result<Player, SeatError> {
        if self.state != GameState::Betting {
            return Err(SeatError::InvalidState);
        }

        let index = self
            .player_index(player_id)
            .ok_or(SeatError::PlayerNotFound)?;
        let player = self.players.remove(index);
        debug!(player = %player.name(), "player left the table");
        Ok(player)
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the seated players, in acting order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player with the given ID.
    #[must_use]
    pub fn player(&self, player_id: u8) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == player_id)
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player whose turn it is.
    ///
    /// Returns `None` outside of `PlayerTurn`.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        if self.state != GameState::PlayerTurn {
            return None;
        }
        self.players.get(self.turn)
    }

    /// Reshuffles the shoe if the cut card has been drawn, merging the
    /// discard pile back in. Returns whether a reshuffle happened.
    ///
    /// Call between rounds, before the next betting phase.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn reshuffle_if_cut_card_drawn(&mut self) -> Result<bool, ReshuffleError> {
        if self.state != GameState::Betting {
            return Err(ReshuffleError::InvalidState);
        }

        Ok(self.shoe.reshuffle_if_cut_card_drawn())
    }

    /// Ends the round: moves every card (dealer's included) to the discard
    /// pile, clears hands and statuses, and removes players who can no
    /// longer cover the minimum bet. Returns the removed players so the
    /// caller can announce them.
    ///
    /// Any unsettled bets are forfeited; call [`Table::settle`] first.
    pub fn clear_round(&mut self) -> Vec<Player> {
        let dealer_cards = self.dealer_hand.take_cards();
        self.shoe.discard(dealer_cards);

        for player in &mut self.players {
            let cards = player.hand_mut().take_cards();
            self.shoe.discard(cards);
            player.reset_for_round();
        }

        self.turn = 0;
        self.state = GameState::Betting;

        let minimum = self.options.minimum_bet;
        let (keep, removed): (Vec<Player>, Vec<Player>) = self
            .players
            .drain(..)
            .partition(|player| player.bankroll() >= minimum);
        self.players = keep;

        for player in &removed {
            info!(
                player = %player.name(),
                bankroll = player.bankroll(),
                minimum,
                "player removed from the table, cannot cover the minimum bet"
            );
        }

        removed
    }

    fn player_index(&self, player_id: u8) -> Option<usize> {
        self.players.iter().position(|p| p.id() == player_id)
    }
}
