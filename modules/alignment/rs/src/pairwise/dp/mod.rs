use derive_more::Display;

pub use engine::Engine;
pub use policy::{Global, Local, Policy};
pub use tracer::{Best, Tracer};

mod engine;
mod policy;
mod tracer;

/// Which boundary and clamping rules to fill the matrix with.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display)]
pub enum Mode {
    /// Needleman-Wunsch: both sequences are aligned end-to-end.
    #[display("global")]
    Global,
    /// Smith-Waterman: the best-scoring pair of subsequences.
    #[display("local")]
    Local,
}
