//! Table configuration options.

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use tablejack::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(8)
///     .with_minimum_bet(25);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Bankroll every player joins with.
    pub starting_bankroll: usize,
    /// Smallest bet the table accepts; players who cannot cover it are
    /// removed at cleanup.
    pub minimum_bet: usize,
    /// Cards remaining in the draw pile that arm the between-round
    /// reshuffle. At 0 the latch only arms once the draw pile is
    /// completely empty.
    pub cut_card_position: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            starting_bankroll: 500,
            minimum_bet: 15,
            cut_card_position: 52,
        }
    }
}

impl TableOptions {
    /// Sets the number of decks in the shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use tablejack::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(8);
    /// assert_eq!(options.decks, 8);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the bankroll players join with.
    ///
    /// # Example
    ///
    /// ```
    /// use tablejack::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_bankroll(1000);
    /// assert_eq!(options.starting_bankroll, 1000);
    /// ```
    #[must_use]
    pub const fn with_starting_bankroll(mut self, bankroll: usize) -> Self {
        self.starting_bankroll = bankroll;
        self
    }

    /// Sets the minimum bet.
    ///
    /// # Example
    ///
    /// ```
    /// use tablejack::TableOptions;
    ///
    /// let options = TableOptions::default().with_minimum_bet(25);
    /// assert_eq!(options.minimum_bet, 25);
    /// ```
    #[must_use]
    pub const fn with_minimum_bet(mut self, minimum: usize) -> Self {
        self.minimum_bet = minimum;
        self
    }

    /// Sets the cut-card position (cards remaining that arm the
    /// between-round reshuffle).
    ///
    /// # Example
    ///
    /// ```
    /// use tablejack::TableOptions;
    ///
    /// let options = TableOptions::default().with_cut_card_position(78);
    /// assert_eq!(options.cut_card_position, 78);
    /// ```
    #[must_use]
    pub const fn with_cut_card_position(mut self, position: usize) -> Self {
        self.cut_card_position = position;
        self
    }
}
