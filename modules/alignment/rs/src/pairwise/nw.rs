//! Needleman-Wunsch global alignment.

use eyre::Result;

use super::dp::{Engine, Global};
use super::{AlignmentMatrix, ScoreConfig};
use crate::{Alignable, Score};

/// Global alignment matrix of `reference` (rows) against `query` (columns).
///
/// Row 0 and column 0 hold `gap * index`, cell (i, j) is the best score of aligning the first `i`
/// reference symbols with the first `j` query symbols end-to-end.
pub fn global<S1, S2, S>(
    reference: &S1,
    query: &S2,
    config: &ScoreConfig<S>,
) -> Result<AlignmentMatrix<S>>
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    S1::Symbol: PartialEq,
    S: Score,
{
    Engine::new(*config).fill_with::<Global, _, _, _>(reference, query, &mut ())
}

/// Best global alignment score, i.e. the bottom-right cell of the global matrix.
pub fn global_score<S1, S2, S>(reference: &S1, query: &S2, config: &ScoreConfig<S>) -> Result<S>
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    S1::Symbol: PartialEq,
    S: Score,
{
    Ok(global(reference, query, config)?.last())
}
