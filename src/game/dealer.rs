use tracing::debug;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::result::{HandOutcome, PlayerResult, RoundResult};

use super::{GameState, Table};

impl Table {
    /// Returns whether any hand still has a live bet riding on it.
    fn any_live_bet(&self) -> bool {
        self.players.iter().any(|p| p.bet() > 0)
    }

    /// Plays out the dealer's hand.
    ///
    /// The hole card is revealed first. The dealer then draws face up until
    /// the house rule is met: stand on hard 17 or anything above 17, hit on
    /// soft 17 and below. When no live bet remains (every player busted or
    /// was paid a natural), the dealer reveals and stands pat.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in the dealer-turn state.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        self.dealer_hand.reveal_hole();

        let mut drawn = Vec::new();
        if self.any_live_bet() {
            loop {
                if self.dealer_hand.value() > 17 || self.dealer_hand.is_hard_seventeen() {
                    break;
                }

                let card = self.shoe.draw(true);
                drawn.push(card.clone());
                self.dealer_hand.add_card(card);
            }
            debug!(
                drawn = drawn.len(),
                value = self.dealer_hand.value(),
                bust = self.dealer_hand.is_bust(),
                "dealer hand played out"
            );
        }

        self.state = GameState::RoundOver;
        Ok(drawn)
    }

    /// Settles every live bet against the dealer's hand.
    ///
    /// Dealer bust or a higher player value pays `2 × bet`; a tie pushes
    /// and returns the bet; otherwise the bet is lost. Bets are zeroed
    /// afterward regardless of outcome. Hands resolved during play (busts
    /// and naturals) carry no bet and are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not over.
    pub fn settle(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::RoundOver {
            return Err(ShowdownError::InvalidState);
        }

        let dealer_value = self.dealer_hand.value();
        let dealer_bust = self.dealer_hand.is_bust();

        let mut results = Vec::new();
        for player in &mut self.players {
            let bet = player.bet();
            if bet == 0 {
                continue;
            }

            let player_value = player.hand().value();
            let (outcome, payout) = if dealer_bust || player_value > dealer_value {
                (HandOutcome::Win, bet * 2)
            } else if player_value == dealer_value {
                (HandOutcome::Push, bet)
            } else {
                (HandOutcome::Lose, 0)
            };

            player.pay(payout);
            player.clear_bet();

            results.push(PlayerResult {
                player_id: player.id(),
                outcome,
                bet,
                payout,
                player_value,
                dealer_value,
            });
        }

        Ok(RoundResult {
            players: results,
            dealer_value,
            dealer_bust,
        })
    }
}
