use derive_more::Constructor;

use crate::pairwise::scoring::{magnitude, Score};

// Gap scoring MUST be additive: a run of gaps costs the sum of its per-position scores.
// Positions are the number of symbols consumed in the gapped sequence before the gap.
pub trait Scorer {
    type Score: Score;

    /// Gap in seq1 after `pos` of its symbols, i.e. a seq2 symbol aligned to nothing.
    fn seq1_gap(&self, pos: usize) -> Self::Score;

    /// Gap in seq2 after `pos` of its symbols.
    fn seq2_gap(&self, pos: usize) -> Self::Score;

    /// Largest absolute value of a single gap score.
    fn gap_bound(&self) -> u128;
}

pub trait PosInvariantScorer {
    type GapScore: Score;

    fn gap(&self) -> Self::GapScore;
}

impl<T: PosInvariantScorer> Scorer for T {
    type Score = <Self as PosInvariantScorer>::GapScore;

    #[inline(always)]
    fn seq1_gap(&self, _: usize) -> Self::Score {
        self.gap()
    }

    #[inline(always)]
    fn seq2_gap(&self, _: usize) -> Self::Score {
        self.gap()
    }

    fn gap_bound(&self) -> u128 {
        magnitude(self.gap())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Constructor)]
pub struct Linear<S: Score> {
    pub gap: S,
}

impl<S: Score> PosInvariantScorer for Linear<S> {
    type GapScore = S;

    #[inline(always)]
    fn gap(&self) -> Self::GapScore {
        self.gap
    }
}
