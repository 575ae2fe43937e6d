use crate::pairwise::Cell;
use crate::Score;

/// Observer of the matrix fill. Cells are reported in row-major order, boundary cells included,
/// each one exactly once and after its final score is known.
#[allow(unused_variables)]
pub trait Tracer<S: Score> {
    fn reset(&mut self, rows: usize, cols: usize) {}

    fn row_start(&mut self, row: usize) {}
    fn cell(&mut self, row: usize, col: usize, score: S) {}
    fn row_end(&mut self, row: usize) {}
}

impl<S: Score> Tracer<S> for () {}

/// Tracks the first best-scoring cell, i.e. the end of the best local alignment.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Best<S: Score> {
    best: Option<Cell<S>>,
}

impl<S: Score> Best<S> {
    pub fn new() -> Self {
        Self { best: None }
    }

    pub fn best(&self) -> Option<Cell<S>> {
        self.best
    }
}

impl<S: Score> Default for Best<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Score> Tracer<S> for Best<S> {
    fn reset(&mut self, _: usize, _: usize) {
        self.best = None;
    }

    #[inline(always)]
    fn cell(&mut self, row: usize, col: usize, score: S) {
        match self.best {
            Some(best) if *best.score() >= score => {}
            _ => self.best = Some(Cell::new(row, col, score)),
        }
    }
}
