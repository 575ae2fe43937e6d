pub use dp::{Engine, Mode};
pub use matrix::{AlignmentMatrix, Cell};
pub use nw::{global, global_score};
pub use scoring::ScoreConfig;
pub use sw::{local, local_best};

pub mod batch;
pub mod dp;
mod matrix;
pub mod nw;
pub mod scoring;
pub mod sw;
