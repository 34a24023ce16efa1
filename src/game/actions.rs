use crate::card::Card;
use crate::error::ActionError;
use crate::player::HandStatus;

use super::{GameState, Table};

impl Table {
    fn ensure_player_turn(&self, player_id: u8) -> Result<usize, ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let index = self
            .player_index(player_id)
            .ok_or(ActionError::PlayerNotFound)?;
        if index != self.turn {
            return Err(ActionError::NotYourTurn);
        }
        if self.players[index].status() != HandStatus::Active {
            return Err(ActionError::HandNotActive);
        }

        Ok(index)
    }

    /// Player action: hit (draw one face-up card).
    ///
    /// A bust forfeits the bet and ends the turn on the spot; reaching
    /// exactly 21 ends the turn; otherwise the player may keep hitting.
    /// Returns the drawn card; inspect the player's
    /// [`status`](crate::Player::status) afterward for the outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in the player-turn state, it is
    /// not the player's turn, the player cannot be found, or the hand is
    /// not active.
    pub fn hit(&mut self, player_id: u8) -> Result<Card, ActionError> {
        let index = self.ensure_player_turn(player_id)?;

        let card = self.shoe.draw(true);
        let drawn = card.clone();

        let player = &mut self.players[index];
        player.hand_mut().add_card(card);

        if player.hand().is_bust() {
            player.clear_bet();
            player.set_status(HandStatus::Bust);
        } else if player.hand().value() == 21 {
            player.set_status(HandStatus::Stand);
        }

        if self.players[index].status() != HandStatus::Active {
            self.advance_to_next_active();
        }

        Ok(drawn)
    }

    /// Player action: stand (keep the current hand and end the turn).
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in the player-turn state, it is
    /// not the player's turn, the player cannot be found, or the hand is
    /// not active.
    pub fn stand(&mut self, player_id: u8) -> Result<(), ActionError> {
        let index = self.ensure_player_turn(player_id)?;

        self.players[index].set_status(HandStatus::Stand);
        self.advance_to_next_active();

        Ok(())
    }

    /// Player action: double down (double the bet, draw one card, end the
    /// turn).
    ///
    /// Allowed on the first two cards only, and only while the bankroll
    /// covers a second bet. A bust still forfeits the doubled bet.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in the player-turn state, it is
    /// not the player's turn, the player cannot be found, the hand is not
    /// active or already has a third card, or the player lacks funds.
    pub fn double_down(&mut self, player_id: u8) -> Result<Card, ActionError> {
        let index = self.ensure_player_turn(player_id)?;

        let player = &self.players[index];
        if player.hand().len() != 2 {
            return Err(ActionError::CannotDouble);
        }
        if player.bankroll() < player.bet() {
            return Err(ActionError::InsufficientFunds);
        }

        let card = self.shoe.draw(true);
        let drawn = card.clone();

        let player = &mut self.players[index];
        player.double_bet();
        player.hand_mut().add_card(card);

        if player.hand().is_bust() {
            player.clear_bet();
            player.set_status(HandStatus::Bust);
        } else {
            player.set_status(HandStatus::Stand);
        }

        self.advance_to_next_active();

        Ok(drawn)
    }

    /// Moves the turn cursor to the next active hand; once every hand is
    /// resolved or standing, play passes to the dealer.
    pub(super) fn advance_to_next_active(&mut self) {
        while self.turn < self.players.len()
            && self.players[self.turn].status() != HandStatus::Active
        {
            self.turn += 1;
        }

        if self.turn >= self.players.len() {
            self.state = GameState::DealerTurn;
        }
    }
}
