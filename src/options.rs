//! Game configuration options.

/// Number of decks in the house shoe.
pub const HOUSE_DECKS: u8 = 3;

/// Shuffle passes applied to a fresh shoe.
pub const SHUFFLE_PASSES: u8 = 7;

/// Configuration options for a blackjack game.
///
/// The house rule (dealer hits below 17 and on soft 17 while trailing, dealer
/// wins ties) is fixed. Options only control how the shoe is built.
///
/// ```
/// use bjsolo::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(1)
///     .with_shuffle_passes(1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of decks combined into the shoe.
    pub decks: u8,
    /// Number of times a fresh shoe is shuffled.
    pub shuffle_passes: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: HOUSE_DECKS,
            shuffle_passes: SHUFFLE_PASSES,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the number of shuffle passes.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_shuffle_passes(1);
    /// assert_eq!(options.shuffle_passes, 1);
    /// ```
    #[must_use]
    pub const fn with_shuffle_passes(mut self, passes: u8) -> Self {
        self.shuffle_passes = passes;
        self
    }
}
