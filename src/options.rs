//! Evaluator configuration options.

/// Configuration options for an [`Evaluator`](crate::Evaluator).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use holdem_eval::EvalOptions;
///
/// let options = EvalOptions::default().with_check_duplicates(false);
/// assert!(!options.check_duplicates);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EvalOptions {
    /// Whether best-hand evaluation rejects pools that repeat a card.
    ///
    /// Enabled by default. Disable only when the dealer upstream is trusted.
    pub check_duplicates: bool,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            check_duplicates: true,
        }
    }
}

impl EvalOptions {
    /// Sets whether duplicate cards in the pool are rejected.
    ///
    /// # Example
    ///
    /// ```
    /// use holdem_eval::EvalOptions;
    ///
    /// let options = EvalOptions::default().with_check_duplicates(false);
    /// assert_eq!(options.check_duplicates, false);
    /// ```
    #[must_use]
    pub const fn with_check_duplicates(mut self, check: bool) -> Self {
        self.check_duplicates = check;
        self
    }
}
