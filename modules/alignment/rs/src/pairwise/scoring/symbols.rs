use std::cmp::max;

use derive_more::Constructor;

use crate::pairwise::scoring::{magnitude, Score};

/// Substitution scores. Implementations that ignore positions are position-invariant.
pub trait Scorer<Symbol> {
    type Score: Score;

    fn score(&self, seq1pos: usize, s1: &Symbol, seq2pos: usize, s2: &Symbol) -> Self::Score;

    /// Largest absolute value `score` may return.
    fn score_bound(&self) -> u128;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Constructor)]
pub struct Equality<S: Score> {
    pub equal: S,
    pub different: S,
}

impl<S: Score, Symbol: PartialEq> Scorer<Symbol> for Equality<S> {
    type Score = S;

    #[inline(always)]
    fn score(&self, _: usize, a: &Symbol, _: usize, b: &Symbol) -> Self::Score {
        if a == b { self.equal } else { self.different }
    }

    fn score_bound(&self) -> u128 {
        max(magnitude(self.equal), magnitude(self.different))
    }
}
