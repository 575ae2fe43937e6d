//! Smith-Waterman local alignment.

use eyre::{OptionExt, Result};

use super::dp::{Best, Engine, Local};
use super::{AlignmentMatrix, Cell, ScoreConfig};
use crate::{Alignable, Score};

/// Local alignment matrix of `reference` (rows) against `query` (columns).
///
/// Boundaries are zero and no cell is ever negative, the maximum cell is the best local score.
pub fn local<S1, S2, S>(
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
    Engine::new(*config).fill_with::<Local, _, _, _>(reference, query, &mut ())
}

/// The end of the best local alignment. Ties are resolved in favor of the first cell in
/// row-major order. Empty sequences yield the (0, 0) cell with zero score.
pub fn local_best<S1, S2, S>(reference: &S1, query: &S2, config: &ScoreConfig<S>) -> Result<Cell<S>>
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    S1::Symbol: PartialEq,
    S: Score,
{
    let mut best = Best::new();
    Engine::new(*config).fill_with::<Local, _, _, _>(reference, query, &mut best)?;
    best.best().ok_or_eyre("Local alignment matrix has no cells")
}
