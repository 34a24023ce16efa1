//! Card types and deck utilities.

use std::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// Returns the symbol used when rendering a face-up card.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
        }
    }
}

/// A playing card.
///
/// Cards start face down; visibility only ever changes through
/// [`Card::reveal`], called by the shoe when dealing face up and by the
/// dealer when turning over the hole card. The type is `Clone` but
/// deliberately not `Copy`: a card lives in exactly one of the draw pile,
/// the discard pile, or a hand, and moves between them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
    face_up: bool,
}

impl Card {
    /// Creates a new face-down card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but may yield non-standard results when evaluating a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Returns the blackjack value of the card: 2-10 at face value, J/Q/K
    /// at 10, Ace at 1. The soft-ace bonus is applied at the hand level.
    #[must_use]
    pub const fn value(&self) -> u8 {
        match self.rank {
            2..=10 => self.rank,
            11..=13 => 10,
            1 => 1,
            _ => 0,
        }
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == 1
    }

    /// Returns whether the card is face up.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Turns the card face up.
    pub const fn reveal(&mut self) {
        self.face_up = true;
    }

    /// Returns the rank label used when rendering the card.
    #[must_use]
    pub const fn rank_symbol(&self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "?",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.face_up {
            write!(f, "[{}{}]", self.rank_symbol(), self.suit.symbol())
        } else {
            f.write_str("[  ]")
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
