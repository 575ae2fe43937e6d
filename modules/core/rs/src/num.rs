use std::fmt::Debug;

/// T values are primitive integers
pub trait PrimInt: ::num::PrimInt + Debug + Default {}
impl<T: ::num::PrimInt + Debug + Default> PrimInt for T {}

/// T values are signed primitive integers, e.g. alignment scores
pub trait PrimSInt: PrimInt + ::num::Signed {}

impl<T: PrimInt + ::num::Signed> PrimSInt for T {}

/// T values are float numbers
pub trait Float: ::num::Float + Debug + Default {}

impl<T: ::num::Float + Debug + Default> Float for T {}

/// Exact conversion of a float into a primitive integer.
/// Returns None if the value has a fractional part or doesn't fit into the target type.
pub fn integral<F: Float, I: PrimInt>(value: F) -> Option<I> {
    if !value.is_finite() || value.fract() != F::zero() {
        return None;
    }
    <I as ::num::NumCast>::from(value)
}
