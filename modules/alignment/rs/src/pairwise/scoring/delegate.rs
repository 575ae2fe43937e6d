use crate::pairwise::scoring::{gaps, symbols};

/// Scoring scheme assembled from independent symbol and gap scorers.
pub struct Delegate<S, G> {
    pub symbols: S,
    pub gaps: G,
}

impl<S, G> Delegate<S, G> {
    pub fn new(symbols: S, gaps: G) -> Self {
        Delegate { symbols, gaps }
    }
}

impl<S, G: gaps::Scorer> gaps::Scorer for Delegate<S, G> {
    type Score = G::Score;

    #[inline(always)]
    fn seq1_gap(&self, pos: usize) -> Self::Score {
        self.gaps.seq1_gap(pos)
    }

    #[inline(always)]
    fn seq2_gap(&self, pos: usize) -> Self::Score {
        self.gaps.seq2_gap(pos)
    }

    #[inline(always)]
    fn gap_bound(&self) -> u128 {
        self.gaps.gap_bound()
    }
}

impl<Symbol, S: symbols::Scorer<Symbol>, G> symbols::Scorer<Symbol> for Delegate<S, G> {
    type Score = S::Score;

    #[inline(always)]
    fn score(&self, posa: usize, a: &Symbol, posb: usize, b: &Symbol) -> Self::Score {
        self.symbols.score(posa, a, posb, b)
    }

    #[inline(always)]
    fn score_bound(&self) -> u128 {
        self.symbols.score_bound()
    }
}
