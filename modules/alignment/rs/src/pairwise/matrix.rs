use std::fmt::{Display, Formatter};
use std::ops::Index;

use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use eyre::{eyre, Result};
use itertools::Itertools;

use crate::Score;

/// A single cell of the alignment matrix.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Getters, Dissolve, Constructor)]
pub struct Cell<S: Score> {
    row: usize,
    col: usize,
    score: S,
}

/// Dense dynamic-programming matrix stored row-major in a single buffer.
///
/// Row `i` / column `j` correspond to the first `i` symbols of seq1 and the first `j` symbols
/// of seq2, row 0 and column 0 are the empty-prefix boundary. The shape is fixed at allocation.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Getters, Dissolve)]
pub struct AlignmentMatrix<S: Score> {
    #[getter(skip)]
    data: Vec<S>,
    rows: usize,
    cols: usize,
}

impl<S: Score> AlignmentMatrix<S> {
    /// Zero-filled matrix with at least one row and one column.
    pub(crate) fn zeroed(rows: usize, cols: usize) -> Result<Self> {
        debug_assert!(rows > 0 && cols > 0);
        let size = rows
            .checked_mul(cols)
            .ok_or_else(|| eyre!("Alignment matrix {rows}x{cols} is too large to allocate"))?;
        Ok(Self {
            data: vec![S::zero(); size],
            rows,
            cols,
        })
    }

    #[inline(always)]
    fn offset(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    #[inline(always)]
    pub(crate) fn set(&mut self, row: usize, col: usize, score: S) {
        let offset = self.offset(row, col);
        self.data[offset] = score;
    }

    /// (rows, cols) of the matrix.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<S> {
        if row < self.rows && col < self.cols {
            Some(self.data[self.offset(row, col)])
        } else {
            None
        }
    }

    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> &[S] {
        assert!(row < self.rows, "Row {row} is out of bounds");
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Panics if `col` is out of bounds.
    pub fn column(&self, col: usize) -> impl Iterator<Item = S> + '_ {
        assert!(col < self.cols, "Column {col} is out of bounds");
        self.data[col..].iter().step_by(self.cols).copied()
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[S]> {
        self.data.chunks_exact(self.cols)
    }

    pub fn as_slice(&self) -> &[S] {
        &self.data
    }

    /// The bottom-right cell, i.e. the score of both sequences aligned end-to-end.
    pub fn last(&self) -> S {
        self.data[self.offset(self.rows - 1, self.cols - 1)]
    }

    /// The first maximal cell in row-major order.
    pub fn max(&self) -> Cell<S> {
        let mut best = 0;
        for (ind, score) in self.data.iter().enumerate().skip(1) {
            if *score > self.data[best] {
                best = ind;
            }
        }
        Cell::new(best / self.cols, best % self.cols, self.data[best])
    }

    /// Matrix with rows and columns swapped, i.e. the matrix of (seq2, seq1).
    pub fn transposed(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            data.extend(self.column(col));
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    pub fn to_nested(&self) -> Vec<Vec<S>> {
        self.iter_rows().map(|row| row.to_vec()).collect()
    }
}

impl<S: Score> Index<(usize, usize)> for AlignmentMatrix<S> {
    type Output = S;

    #[inline(always)]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.rows && col < self.cols,
            "Cell ({row}, {col}) is out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl<S: Score> Display for AlignmentMatrix<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.iter_rows().map(|row| row.iter().join("\t")).join("\n"))
    }
}
