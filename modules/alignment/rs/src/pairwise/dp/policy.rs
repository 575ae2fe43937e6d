use super::Mode;
use crate::Score;

/// Boundary and clamping rules that distinguish global from local alignment.
/// Everything else in the recurrence is shared.
pub trait Policy {
    const MODE: Mode;

    /// Score of a boundary cell reached from the previous boundary cell `prev` by a gap.
    fn boundary<S: Score>(prev: S, gap: S) -> S;

    /// Final score of an interior cell given the best of its diagonal, left and above candidates.
    fn clamp<S: Score>(best: S) -> S;
}

/// Leading and trailing gaps are charged.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Global;

impl Policy for Global {
    const MODE: Mode = Mode::Global;

    #[inline(always)]
    fn boundary<S: Score>(prev: S, gap: S) -> S {
        prev + gap
    }

    #[inline(always)]
    fn clamp<S: Score>(best: S) -> S {
        best
    }
}

/// An alignment may start anywhere and never carries a negative score.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Local;

impl Policy for Local {
    const MODE: Mode = Mode::Local;

    #[inline(always)]
    fn boundary<S: Score>(_: S, _: S) -> S {
        S::zero()
    }

    #[inline(always)]
    fn clamp<S: Score>(best: S) -> S {
        best.max(S::zero())
    }
}
