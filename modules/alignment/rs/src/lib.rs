use std::fmt::Display;

pub use dpalign_core_rs::{Alignable, Reversed};

use dpalign_core_rs::num::PrimSInt;

pub mod pairwise;

/// Alignment scores are signed primitive integers that can be shared between threads.
pub trait Score: PrimSInt + Display + Send + Sync {}

impl<T: PrimSInt + Display + Send + Sync> Score for T {}
