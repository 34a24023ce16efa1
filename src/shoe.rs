//! The dealer's card source: a multi-deck draw pile plus a discard pile.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::card::{Card, DECK_SIZE, Suit};

/// A shoe holding one or more shuffled decks and the cards discarded from
/// play.
///
/// Every card dealt from the shoe eventually comes back through
/// [`Shoe::discard`], so the total card count (decks × 52, split across the
/// draw pile, the discard pile, and the hands in play) is constant for the
/// shoe's lifetime.
///
/// A cut-card marker sits near the end of the draw pile. Once a draw starts
/// at or below that position the shoe remembers it and keeps serving cards;
/// the actual reshuffle happens between rounds via
/// [`Shoe::reshuffle_if_cut_card_drawn`]. If the draw pile runs dry
/// mid-deal, the discard pile is recycled on the spot without clearing the
/// cut-card latch.
#[derive(Debug, Clone)]
pub struct Shoe {
    draw_pile: Vec<Card>,
    discard_pile: Vec<Card>,
    cut_card_position: usize,
    cut_card_drawn: bool,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a shoe with the given number of decks, shuffled with the
    /// given seed. `cut_card_position` is the number of cards remaining
    /// that arms the between-round reshuffle.
    #[must_use]
    pub fn new(decks: u8, cut_card_position: usize, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut draw_pile = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades] {
                for rank in 1..=13 {
                    draw_pile.push(Card::new(suit, rank));
                }
            }
        }

        draw_pile.shuffle(&mut rng);

        Self {
            draw_pile,
            discard_pile: Vec::new(),
            cut_card_position,
            cut_card_drawn: false,
            rng,
        }
    }

    /// Draws one card, face up or face down.
    ///
    /// If the draw starts with the pile at or below the cut-card position,
    /// the cut-card latch is set (and stays set until
    /// [`Shoe::reshuffle_if_cut_card_drawn`] clears it). If the draw pile is
    /// empty, the discard pile is reshuffled into it first; this recycling
    /// is invisible to the caller and does not touch the latch.
    ///
    /// # Panics
    ///
    /// Panics if the draw pile and the discard pile are both empty. The
    /// table returns every spent card to the discard pile before the draw
    /// pile can run out twice, so this is unreachable under correct
    /// accounting.
    pub fn draw(&mut self, face_up: bool) -> Card {
        if self.draw_pile.len() <= self.cut_card_position {
            self.cut_card_drawn = true;
        }

        if self.draw_pile.is_empty() {
            debug!(
                recycled = self.discard_pile.len(),
                "draw pile exhausted mid-deal, recycling discard pile"
            );
            self.draw_pile.append(&mut self.discard_pile);
            self.draw_pile.shuffle(&mut self.rng);
        }

        let mut card = self
            .draw_pile
            .pop()
            .expect("a card always remains in the draw pile or the discard pile");
        if face_up {
            card.reveal();
        }
        card
    }

    /// Merges the discard pile into the draw pile and reshuffles, if the
    /// cut card has been drawn. Returns whether a reshuffle happened.
    ///
    /// Call between rounds only; the emergency mid-deal recycling inside
    /// [`Shoe::draw`] handles exhaustion during a round.
    pub fn reshuffle_if_cut_card_drawn(&mut self) -> bool {
        if !self.cut_card_drawn {
            return false;
        }

        self.draw_pile.append(&mut self.discard_pile);
        self.draw_pile.shuffle(&mut self.rng);
        self.cut_card_drawn = false;
        info!(cards = self.draw_pile.len(), "cut card reached, shoe reshuffled");
        true
    }

    /// Moves spent cards onto the discard pile.
    pub fn discard<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.discard_pile.extend(cards);
    }

    /// Returns the number of cards left in the draw pile.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.draw_pile.len()
    }

    /// Returns the number of cards in the discard pile.
    #[must_use]
    pub fn discard_count(&self) -> usize {
        self.discard_pile.len()
    }

    /// Returns whether the cut card has been drawn since the last reshuffle.
    #[must_use]
    pub const fn cut_card_drawn(&self) -> bool {
        self.cut_card_drawn
    }

    /// Replaces the draw pile with a known card order. The last card in
    /// `cards` is drawn first. Intended for deterministic deals in tests
    /// and demos.
    pub fn stack(&mut self, cards: Vec<Card>) {
        self.draw_pile = cards;
    }
}
