use std::cmp::max;

use num::ToPrimitive;

pub use config::ScoreConfig;
pub use delegate::Delegate;

pub use crate::Score;

mod config;
mod delegate;
pub mod gaps;
pub mod symbols;

/// A complete scoring scheme for sequences of `Symbol`s: substitution scores and linear gaps
/// expressed in the same score type.
pub trait Scheme<Symbol>:
    symbols::Scorer<Symbol, Score = <Self as Scheme<Symbol>>::Score>
    + gaps::Scorer<Score = <Self as Scheme<Symbol>>::Score>
{
    type Score: Score;

    /// Largest absolute value of a single score produced by the scheme.
    fn bound(&self) -> u128 {
        max(
            <Self as symbols::Scorer<Symbol>>::score_bound(self),
            <Self as gaps::Scorer>::gap_bound(self),
        )
    }
}

impl<Symbol, S, T> Scheme<Symbol> for T
where
    S: Score,
    T: symbols::Scorer<Symbol, Score = S> + gaps::Scorer<Score = S>,
{
    type Score = S;
}

pub fn compose<S, G: gaps::Scorer>(symbols: S, gaps: G) -> Delegate<S, G> {
    Delegate::new(symbols, gaps)
}

/// Absolute value of the score, saturating for types wider than 128 bits.
#[inline(always)]
pub(crate) fn magnitude<S: Score>(score: S) -> u128 {
    score.to_i128().map_or(u128::MAX, i128::unsigned_abs)
}
