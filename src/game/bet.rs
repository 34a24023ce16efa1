use crate::error::{BetError, DealError};
use crate::player::HandStatus;
use crate::result::{DealSummary, NaturalPayout};

use super::{GameState, Table};

impl Table {
    /// Places a bet for the specified player. The amount is deducted from
    /// the bankroll immediately and held on the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in the betting state, the
    /// player cannot be found or already bet this round, the bet is below
    /// the table minimum, or the player lacks funds.
    pub fn bet(&mut self, player_id: u8, amount: usize) -> Result<(), BetError> {
        if self.state != GameState::Betting {
            return Err(BetError::InvalidState);
        }

        let minimum = self.options.minimum_bet;
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id() == player_id)
            .ok_or(BetError::PlayerNotFound)?;

        if player.bet() > 0 {
            return Err(BetError::AlreadyPlaced);
        }
        if amount < minimum {
            return Err(BetError::BelowMinimum);
        }
        if amount > player.bankroll() {
            return Err(BetError::InsufficientFunds);
        }

        player.place_bet(amount);
        Ok(())
    }

    /// Deals the opening two cards to the dealer and every player.
    ///
    /// Two passes, the dealer served first on each: the dealer's first card
    /// is the face-down hole card, every other card is dealt face up.
    ///
    /// A dealer natural is checked immediately: the hole card is revealed
    /// and the round jumps to showdown with no player acting. Otherwise
    /// every player natural is paid 3:2 on the spot (`bet * 3 / 2`,
    /// floored) and the bet zeroed; the returned [`DealSummary`] carries
    /// both outcomes for announcement.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in the betting state, no
    /// players are seated, or a seated player has not bet.
    pub fn deal(&mut self) -> Result<DealSummary, DealError> {
        if self.state != GameState::Betting {
            return Err(DealError::InvalidState);
        }
        if self.players.is_empty() {
            return Err(DealError::NoPlayers);
        }
        if self.players.iter().any(|p| p.bet() == 0) {
            return Err(DealError::MissingBets);
        }

        for pass in 0..2 {
            // Hole card on the first pass, up card on the second.
            let card = self.shoe.draw(pass == 1);
            self.dealer_hand.add_card(card);

            for index in 0..self.players.len() {
                let card = self.shoe.draw(true);
                self.players[index].hand_mut().add_card(card);
            }
        }

        if self.dealer_hand.is_blackjack() {
            self.dealer_hand.reveal_hole();
            self.state = GameState::RoundOver;
            return Ok(DealSummary {
                dealer_blackjack: true,
                naturals: Vec::new(),
            });
        }

        let mut naturals = Vec::new();
        for player in &mut self.players {
            if player.hand().is_blackjack() {
                let bet = player.bet();
                let winnings = bet * 3 / 2;
                player.pay(bet + winnings);
                player.clear_bet();
                player.set_status(HandStatus::Blackjack);
                naturals.push(NaturalPayout {
                    player_id: player.id(),
                    bet,
                    winnings,
                });
            }
        }

        self.state = GameState::PlayerTurn;
        self.turn = 0;
        self.advance_to_next_active();

        Ok(DealSummary {
            dealer_blackjack: false,
            naturals,
        })
    }
}
