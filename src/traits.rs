use num_traits::AsPrimitive;

use crate::number::NumericKind;

/// Trait for primitive numeric types accepted as quaternion components
/// and scalar operands.
///
/// Implemented for every primitive integer type and for `f32`/`f64`.
/// Values are converted to `f64` on entry; `KIND` records whether the
/// source was integral so formatting can follow it.
pub trait Scalar: Copy + AsPrimitive<f64> {
    /// Numeric kind of values of this type.
    const KIND: NumericKind;
}

macro_rules! impl_scalar {
    ($kind:ident: $($t:ty),*) => {
        $(
            impl Scalar for $t {
                const KIND: NumericKind = NumericKind::$kind;
            }
        )*
    };
}

impl_scalar!(Int: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_scalar!(Float: f32, f64);
