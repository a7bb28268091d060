//! Component numbers: an `f64` value tagged with the numeric kind it was
//! computed from.

use core::fmt::{self, Write};
use core::ops::{Add, Mul, Neg, Sub};

use crate::traits::Scalar;

/// Number of decimal digits every stored component is rounded to.
pub const ROUND_PRECISION: usize = 16;

/// Whether a number originated from integer or floating-point inputs.
///
/// Only formatting depends on the kind: integral numbers print without a
/// decimal point, floats print with one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    Int,
    Float,
}

impl NumericKind {
    /// Kind of the result of an arithmetic operation on two operands.
    #[inline]
    pub const fn combine(self, other: NumericKind) -> NumericKind {
        match (self, other) {
            (NumericKind::Int, NumericKind::Int) => NumericKind::Int,
            _ => NumericKind::Float,
        }
    }

    /// Name of the kind as reported in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            NumericKind::Int => "int",
            NumericKind::Float => "float",
        }
    }
}

/// A real number with its numeric kind.
///
/// Arithmetic runs at full `f64` precision; [`Number::rounded`] applies the
/// component rounding policy. Equality and ordering compare values only, so
/// `Number::from(1) == Number::from(1.0)`.
#[derive(Clone, Copy)]
pub struct Number {
    value: f64,
    kind: NumericKind,
}

impl Number {
    pub const ZERO: Number = Number::int(0.0);
    pub const ONE: Number = Number::int(1.0);

    pub(crate) const fn int(value: f64) -> Self {
        Self {
            value,
            kind: NumericKind::Int,
        }
    }

    #[inline]
    pub const fn new(value: f64, kind: NumericKind) -> Self {
        Self { value, kind }
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.value
    }

    #[inline]
    pub const fn kind(self) -> NumericKind {
        self.kind
    }

    /// This number rounded to [`ROUND_PRECISION`] decimal digits, with
    /// negative zero folded into positive zero.
    #[inline]
    pub fn rounded(self) -> Self {
        Self {
            value: round_to_precision(self.value),
            kind: self.kind,
        }
    }
}

impl<T: Scalar> From<T> for Number {
    #[inline]
    fn from(value: T) -> Self {
        Self {
            value: value.as_(),
            kind: T::KIND,
        }
    }
}

impl PartialEq for Number {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialOrd for Number {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

// ── Arithmetic ───────────────────────────────────────────────────────

macro_rules! impl_number_binop {
    ($Op:ident, $method:ident, $op:tt) => {
        impl $Op for Number {
            type Output = Number;

            #[inline]
            fn $method(self, rhs: Number) -> Number {
                Number {
                    value: self.value $op rhs.value,
                    kind: self.kind.combine(rhs.kind),
                }
            }
        }
    };
}

impl_number_binop!(Add, add, +);
impl_number_binop!(Sub, sub, -);
impl_number_binop!(Mul, mul, *);

impl Neg for Number {
    type Output = Number;

    #[inline]
    fn neg(self) -> Number {
        Number {
            value: -self.value,
            kind: self.kind,
        }
    }
}

// ── Formatting ───────────────────────────────────────────────────────

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NumericKind::Int => write!(f, "{}", self.value),
            NumericKind::Float => write_float(f, self.value),
        }
    }
}

/// Shortest round-trip form with a decimal point on integral values, and
/// exponents written signed and at least two digits wide (`1e-05`, `1e+16`).
fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let mut buf = DigitBuf::new();
    // Debug keeps the trailing `.0` on integral floats.
    write!(buf, "{value:?}")?;
    match buf.as_str().split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            write!(f, "{mantissa}e{sign}{digits:0>2}")
        }
        None => f.write_str(buf.as_str()),
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// ── Rounding ─────────────────────────────────────────────────────────

/// Round `value` to [`ROUND_PRECISION`] decimal digits.
///
/// The rounding is decimal-exact: the value is formatted with exactly
/// sixteen fractional digits and parsed back, so `0.1 + 0.2` rounds to the
/// same double as `0.3`. Doubles of magnitude one or more are spaced wider
/// than `1e-16` and come back unchanged, which also bounds the width of the
/// formatted text for everything that does go through the buffer.
pub fn round_to_precision(value: f64) -> f64 {
    if !value.is_finite() || value <= -1.0 || value >= 1.0 {
        return value;
    }

    let mut buf = DigitBuf::new();
    if write!(buf, "{:.*}", ROUND_PRECISION, value).is_err() {
        return value;
    }
    match buf.as_str().parse::<f64>() {
        // Adding positive zero folds -0.0 into 0.0.
        Ok(rounded) => rounded + 0.0,
        Err(_) => value,
    }
}

/// Fixed-capacity text buffer for formatting one `f64`.
///
/// Holds `-0.` plus [`ROUND_PRECISION`] digits, or the longest shortest
/// round-trip form (`-2.2250738585072014e-308`), with room to spare.
struct DigitBuf {
    bytes: [u8; 32],
    len: usize,
}

impl DigitBuf {
    fn new() -> Self {
        Self {
            bytes: [0; 32],
            len: 0,
        }
    }

    fn as_str(&self) -> &str {
        // Only `write_str` fills the buffer, and it copies whole `&str`s.
        core::str::from_utf8(&self.bytes[..self.len]).unwrap_or("")
    }
}

impl Write for DigitBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        if end > self.bytes.len() {
            return Err(fmt::Error);
        }
        self.bytes[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}
