use eyre::Result;
use rayon::prelude::*;

use dpalign_core_rs::parallelism;

use super::{AlignmentMatrix, Engine, Mode, ScoreConfig};
use crate::{Alignable, Score};

/// Alignment of many independent sequence pairs with shared settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Batch<S: Score = i32> {
    mode: Mode,
    config: ScoreConfig<S>,
    threads: isize,
}

impl<S: Score> Batch<S> {
    /// Default scoring on all available cores.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            config: ScoreConfig::standard(),
            threads: -1,
        }
    }

    pub fn with_config(mut self, config: ScoreConfig<S>) -> Self {
        self.config = config;
        self
    }

    /// Negative values are relative to the number of available cores, see `parallelism::available`.
    pub fn with_threads(mut self, threads: isize) -> Self {
        self.threads = threads;
        self
    }

    /// Fill matrices for all (seq1, seq2) pairs, in the input order.
    /// The whole batch fails if any of the pairs can't be aligned.
    pub fn align<S1, S2>(&self, pairs: &[(S1, S2)]) -> Result<Vec<AlignmentMatrix<S>>>
    where
        S1: Alignable + Sync,
        S2: Alignable<Symbol = S1::Symbol> + Sync,
        S1::Symbol: PartialEq,
    {
        if pairs.is_empty() {
            return Ok(Vec::new());
        }

        let pool = parallelism::pool(self.threads)?;
        log::info!(
            "Aligning {} sequence pairs ({}, {}) with {} threads",
            pairs.len(),
            self.mode,
            self.config,
            pool.current_num_threads()
        );

        let engine = Engine::new(self.config);
        pool.install(|| {
            pairs
                .par_iter()
                .map(|(seq1, seq2)| engine.fill(seq1, seq2, self.mode))
                .collect()
        })
    }
}

/// Fill matrices for all pairs with the given settings, see [`Batch::align`].
pub fn align_all<S, S1, S2>(
    pairs: &[(S1, S2)],
    mode: Mode,
    config: &ScoreConfig<S>,
    threads: isize,
) -> Result<Vec<AlignmentMatrix<S>>>
where
    S: Score,
    S1: Alignable + Sync,
    S2: Alignable<Symbol = S1::Symbol> + Sync,
    S1::Symbol: PartialEq,
{
    Batch::new(mode)
        .with_config(*config)
        .with_threads(threads)
        .align(pairs)
}
