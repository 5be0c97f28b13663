use thiserror::Error;

/// Errors surfaced by validation, splitting, and matching.
///
/// A boolean `false` from the engine means "valid pattern, word does not
/// match"; anything wrong with the inputs themselves comes back as one of
/// these instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The word uses a symbol the pattern never mentions.
    #[error("word symbol '{symbol}' does not occur in the pattern")]
    InvalidAlphabet { symbol: char },

    /// Bracket imbalance or an operator with nothing to repeat.
    #[error("malformed pattern: {reason}")]
    MalformedPattern { reason: &'static str },

    /// A pattern construct outside the supported grammar.
    #[error("pattern construct '{construct}' is not supported")]
    UnsupportedGrammar { construct: char },
}
