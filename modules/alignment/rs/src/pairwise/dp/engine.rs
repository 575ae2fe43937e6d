use std::marker::PhantomData;

use eyre::{ensure, Result};

use super::{Global, Local, Mode, Policy, Tracer};
use crate::pairwise::scoring::{self, gaps, symbols, Scheme};
use crate::pairwise::{AlignmentMatrix, ScoreConfig};
use crate::{Alignable, Score};

/// Fills dynamic-programming matrices for pairs of sequences with a fixed scoring scheme.
///
/// The engine is stateless between calls: every fill allocates and returns a fresh matrix.
#[derive(Clone, Debug)]
pub struct Engine<S: Score, Sch> {
    scoring: Sch,
    _phantom: PhantomData<S>,
}

impl<S: Score> Default for Engine<S, ScoreConfig<S>> {
    fn default() -> Self {
        Self::new(ScoreConfig::standard())
    }
}

impl<S: Score, Sch> Engine<S, Sch> {
    pub fn new(scoring: Sch) -> Self {
        Self {
            scoring,
            _phantom: Default::default(),
        }
    }

    pub fn with_scoring(&mut self, scoring: Sch) {
        self.scoring = scoring;
    }

    pub fn scoring(&self) -> &Sch {
        &self.scoring
    }

    /// Fill the matrix of `seq1` (rows) against `seq2` (columns) with the given mode.
    pub fn fill<S1, S2>(&self, seq1: &S1, seq2: &S2, mode: Mode) -> Result<AlignmentMatrix<S>>
    where
        S1: Alignable + ?Sized,
        S2: Alignable<Symbol = S1::Symbol> + ?Sized,
        Sch: Scheme<S1::Symbol, Score = S>,
    {
        log::trace!("Selected {} fill policy", mode);
        match mode {
            Mode::Global => self.fill_with::<Global, _, _, _>(seq1, seq2, &mut ()),
            Mode::Local => self.fill_with::<Local, _, _, _>(seq1, seq2, &mut ()),
        }
    }

    /// Fill the matrix under the policy `P`, reporting every cell to the `tracer`.
    pub fn fill_with<P, S1, S2, T>(
        &self,
        seq1: &S1,
        seq2: &S2,
        tracer: &mut T,
    ) -> Result<AlignmentMatrix<S>>
    where
        P: Policy,
        S1: Alignable + ?Sized,
        S2: Alignable<Symbol = S1::Symbol> + ?Sized,
        Sch: Scheme<S1::Symbol, Score = S>,
        T: Tracer<S>,
    {
        let (rows, cols) = (seq1.len() + 1, seq2.len() + 1);
        self.ensure_fits::<S1::Symbol>(rows, cols)?;

        log::debug!("Filling {}x{} {} alignment matrix", rows, cols, P::MODE);
        let mut matrix = AlignmentMatrix::zeroed(rows, cols)?;

        // Boundaries are complete before any interior cell is computed
        let (seq1_gap, seq2_gap) = (
            gaps::Scorer::seq1_gap(&self.scoring, 0),
            gaps::Scorer::seq2_gap(&self.scoring, 0),
        );
        for row in 1..rows {
            matrix.set(row, 0, P::boundary(matrix[(row - 1, 0)], seq2_gap));
        }
        for col in 1..cols {
            matrix.set(0, col, P::boundary(matrix[(0, col - 1)], seq1_gap));
        }

        tracer.reset(rows, cols);
        tracer.row_start(0);
        for col in 0..cols {
            tracer.cell(0, col, matrix[(0, col)]);
        }
        tracer.row_end(0);

        for row in 1..rows {
            tracer.row_start(row);
            tracer.cell(row, 0, matrix[(row, 0)]);

            let s1 = seq1.at(row - 1);
            let seq1_gap = gaps::Scorer::seq1_gap(&self.scoring, row);
            for col in 1..cols {
                let s2 = seq2.at(col - 1);

                let diagonal = matrix[(row - 1, col - 1)]
                    + symbols::Scorer::score(&self.scoring, row - 1, s1, col - 1, s2);
                let left = matrix[(row, col - 1)] + seq1_gap;
                let above = matrix[(row - 1, col)] + gaps::Scorer::seq2_gap(&self.scoring, col);

                let score = P::clamp(diagonal.max(left).max(above));
                matrix.set(row, col, score);
                tracer.cell(row, col, score);
            }
            tracer.row_end(row);
        }
        Ok(matrix)
    }

    /// Any cell is a sum of at most (rows - 1) + (cols - 1) individual scores, so the sum of
    /// their magnitudes must be representable to fill the matrix without overflows.
    fn ensure_fits<Symbol>(&self, rows: usize, cols: usize) -> Result<()>
    where
        Sch: Scheme<Symbol, Score = S>,
    {
        let steps = (rows - 1) as u128 + (cols - 1) as u128;
        let bound = <Sch as Scheme<Symbol>>::bound(&self.scoring);
        let worst = steps.checked_mul(bound);
        let limit = scoring::magnitude(S::max_value());
        ensure!(
            worst.is_some_and(|worst| worst <= limit),
            "Alignment scores of {}x{} matrix may overflow {} (largest single score is {})",
            rows,
            cols,
            std::any::type_name::<S>(),
            bound
        );
        Ok(())
    }
}
