use derive_getters::{Dissolve, Getters};
use derive_more::{Constructor, Display};
use eyre::{eyre, Result};

use dpalign_core_rs::num::{integral, Float};

use super::{gaps, magnitude, symbols, Score};

/// Match / mismatch / linear gap scores shared by global and local alignment.
///
/// No sign convention is enforced: the aligner simply maximizes the accumulated score.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Display, Getters, Dissolve, Constructor)]
#[display("match={match_score}, mismatch={mismatch_score}, gap={gap}")]
pub struct ScoreConfig<S: Score = i32> {
    /// Reward for aligning two equal symbols.
    match_score: S,
    /// Score for aligning two different symbols.
    mismatch_score: S,
    /// Score for aligning a symbol against a gap in either sequence.
    gap: S,
}

// Only i32 has a Default impl, so `ScoreConfig::default()` infers its score type
impl Default for ScoreConfig<i32> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<S: Score> ScoreConfig<S> {
    /// match = 1, mismatch = -1, gap = -2 in any score type.
    pub fn standard() -> Self {
        let one = S::one();
        Self::new(one, -one, -(one + one))
    }

    pub fn with_match(mut self, score: S) -> Self {
        self.match_score = score;
        self
    }

    pub fn with_mismatch(mut self, score: S) -> Self {
        self.mismatch_score = score;
        self
    }

    pub fn with_gap(mut self, score: S) -> Self {
        self.gap = score;
        self
    }

    /// Override scores from loosely typed `(option, value)` pairs.
    ///
    /// Recognized options are `match`, `mismatch` and `gap`, everything else is ignored.
    /// Values must be integers representable by the score type, fractional values are rejected
    /// instead of being silently truncated.
    pub fn merge<K, F>(mut self, options: impl IntoIterator<Item = (K, F)>) -> Result<Self>
    where
        K: AsRef<str>,
        F: Float,
    {
        for (key, value) in options {
            let key = key.as_ref();
            let field = match key {
                "match" => &mut self.match_score,
                "mismatch" => &mut self.mismatch_score,
                "gap" => &mut self.gap,
                _ => {
                    log::debug!("Ignoring unrecognized scoring option '{key}'");
                    continue;
                }
            };
            *field = integral(value).ok_or_else(|| {
                eyre!(
                    "Scoring option '{}' must be an integer representable as {}, got {:?}",
                    key,
                    std::any::type_name::<S>(),
                    value
                )
            })?;
        }
        Ok(self)
    }
}

impl<S: Score, Symbol: PartialEq> symbols::Scorer<Symbol> for ScoreConfig<S> {
    type Score = S;

    #[inline(always)]
    fn score(&self, _: usize, s1: &Symbol, _: usize, s2: &Symbol) -> Self::Score {
        if s1 == s2 {
            self.match_score
        } else {
            self.mismatch_score
        }
    }

    fn score_bound(&self) -> u128 {
        magnitude(self.match_score).max(magnitude(self.mismatch_score))
    }
}

impl<S: Score> gaps::PosInvariantScorer for ScoreConfig<S> {
    type GapScore = S;

    #[inline(always)]
    fn gap(&self) -> Self::GapScore {
        self.gap
    }
}
