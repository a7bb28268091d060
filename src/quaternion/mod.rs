use core::fmt;

use crate::error::{Axis, QuaternionError};
use crate::number::{round_to_precision, Number, NumericKind};
use crate::traits::Scalar;

mod ops;

#[cfg(test)]
mod tests;

pub use ops::Operand;

/// Immutable quaternion `x + i·î + j·ĵ + k·k̂`.
///
/// Components are stored as `f64`, each rounded to
/// [`ROUND_PRECISION`](crate::number::ROUND_PRECISION) decimal digits once
/// at construction. The squared magnitude `x² + i² + j² + k²` is computed
/// from the rounded components at the same time and cached as
/// [`norm`](Quaternion::norm).
///
/// Every operator returns a new value; nothing mutates an operand.
#[derive(Clone, Copy)]
pub struct Quaternion {
    x: Number,
    i: Number,
    j: Number,
    k: Number,
    norm: f64,
}

// ── Constructors ─────────────────────────────────────────────────────

impl Quaternion {
    /// Name of the type as reported in error messages.
    pub const TYPE_NAME: &'static str = "Quaternion";

    /// Additive identity.
    pub const ZERO: Self = Self::integral([0.0, 0.0, 0.0, 0.0], 0.0);
    /// Multiplicative identity.
    pub const ONE: Self = Self::integral([1.0, 0.0, 0.0, 0.0], 1.0);
    /// Imaginary unit `î`.
    pub const I: Self = Self::integral([0.0, 1.0, 0.0, 0.0], 1.0);
    /// Imaginary unit `ĵ`.
    pub const J: Self = Self::integral([0.0, 0.0, 1.0, 0.0], 1.0);
    /// Imaginary unit `k̂`.
    pub const K: Self = Self::integral([0.0, 0.0, 0.0, 1.0], 1.0);

    /// Create a quaternion from components.
    ///
    /// Accepts any mix of primitive integers and floats.
    ///
    /// ```
    /// use hamilton::Quaternion;
    ///
    /// let q = Quaternion::new(0, 0.2, -1, 1);
    /// assert_eq!(q.to_string(), "0+0.2i-1j+1k");
    /// ```
    #[inline]
    pub fn new(
        x: impl Into<Number>,
        i: impl Into<Number>,
        j: impl Into<Number>,
        k: impl Into<Number>,
    ) -> Self {
        Self::from_numbers(x.into(), i.into(), j.into(), k.into())
    }

    /// Create a quaternion from components, rejecting NaN and infinities.
    ///
    /// [`new`](Quaternion::new) passes non-finite values through unchecked,
    /// following IEEE arithmetic. This constructor reports the first
    /// offending component instead.
    ///
    /// ```
    /// use hamilton::{Axis, Quaternion, QuaternionError};
    ///
    /// assert_eq!(Quaternion::try_from_parts(1, 2, 3, 4), Ok(Quaternion::new(1, 2, 3, 4)));
    /// assert_eq!(
    ///     Quaternion::try_from_parts(0, 0, f64::NAN, f64::INFINITY),
    ///     Err(QuaternionError::NonFinite { argument: Axis::J })
    /// );
    /// ```
    pub fn try_from_parts(
        x: impl Into<Number>,
        i: impl Into<Number>,
        j: impl Into<Number>,
        k: impl Into<Number>,
    ) -> Result<Self, QuaternionError> {
        let c = [x.into(), i.into(), j.into(), k.into()];
        for (n, axis) in c.iter().zip(Axis::ALL) {
            if !n.value().is_finite() {
                return Err(QuaternionError::NonFinite { argument: axis });
            }
        }
        Ok(Self::from_numbers(c[0], c[1], c[2], c[3]))
    }

    /// Quaternion with only a real part.
    #[inline]
    pub fn from_real(x: impl Into<Number>) -> Self {
        Self::from_numbers(x.into(), Number::ZERO, Number::ZERO, Number::ZERO)
    }

    /// The single construction gate: rounds every component and caches the norm.
    pub(crate) fn from_numbers(x: Number, i: Number, j: Number, k: Number) -> Self {
        let (x, i, j, k) = (x.rounded(), i.rounded(), j.rounded(), k.rounded());
        let norm = x.value() * x.value()
            + i.value() * i.value()
            + j.value() * j.value()
            + k.value() * k.value();
        Self { x, i, j, k, norm }
    }

    const fn integral(c: [f64; 4], norm: f64) -> Self {
        Self {
            x: Number::new(c[0], NumericKind::Int),
            i: Number::new(c[1], NumericKind::Int),
            j: Number::new(c[2], NumericKind::Int),
            k: Number::new(c[3], NumericKind::Int),
            norm,
        }
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T: Scalar> From<[T; 4]> for Quaternion {
    fn from(c: [T; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

// ── Accessors ────────────────────────────────────────────────────────

impl Quaternion {
    /// Real part.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x.value()
    }

    #[inline]
    pub fn i(&self) -> f64 {
        self.i.value()
    }

    #[inline]
    pub fn j(&self) -> f64 {
        self.j.value()
    }

    #[inline]
    pub fn k(&self) -> f64 {
        self.k.value()
    }

    /// Sum of squared components, cached at construction.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm
    }

    /// Component along `axis`, with its numeric kind.
    pub fn component(&self, axis: Axis) -> Number {
        match axis {
            Axis::X => self.x,
            Axis::I => self.i,
            Axis::J => self.j,
            Axis::K => self.k,
        }
    }

    /// Components as `[x, i, j, k]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 4] {
        [self.x(), self.i(), self.j(), self.k()]
    }

    /// True when no component is NaN or infinite.
    ///
    /// The norm of a finite quaternion can still overflow; see
    /// [`inverse`](Quaternion::inverse).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|c| c.is_finite())
    }

    /// True for the additive identity.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.norm == 0.0
    }
}

// ── Core operations ──────────────────────────────────────────────────

impl Quaternion {
    /// Conjugate: `(x, -i, -j, -k)`.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::from_numbers(self.x, -self.i, -self.j, -self.k)
    }

    /// Inverse: the conjugate scaled by `1 / norm`.
    ///
    /// The scaling factor is itself rounded before use. Fails with
    /// [`QuaternionError::ZeroInverse`] for the zero quaternion, and with
    /// [`QuaternionError::NormOutOfRange`] when the norm is not finite, as
    /// it is for any component beyond about `1.3e154`.
    ///
    /// ```
    /// use hamilton::Quaternion;
    ///
    /// let q = Quaternion::new(1, 1, 1, 1);
    /// assert_eq!(q.inverse()?, Quaternion::new(0.25, -0.25, -0.25, -0.25));
    /// # Ok::<(), hamilton::QuaternionError>(())
    /// ```
    pub fn inverse(&self) -> Result<Self, QuaternionError> {
        if self.is_zero() {
            return Err(QuaternionError::ZeroInverse);
        }
        if !self.norm.is_finite() {
            return Err(QuaternionError::NormOutOfRange);
        }
        let factor = Number::new(round_to_precision(1.0 / self.norm), NumericKind::Float);
        Ok(self.conjugate().scale(factor))
    }

    /// Every component multiplied by `s`.
    #[inline]
    pub(crate) fn scale(&self, s: Number) -> Self {
        Self::from_numbers(s * self.x, s * self.i, s * self.j, s * self.k)
    }
}

// Structural: all four components equal. Kinds are ignored, so
// `new(1, 0, 0, 0) == new(1.0, 0.0, 0.0, 0.0)`.
impl PartialEq for Quaternion {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.i == other.i && self.j == other.j && self.k == other.k
    }
}

// ── Display ──────────────────────────────────────────────────────────

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.x)?;
        for (c, unit) in [(self.i, 'i'), (self.j, 'j'), (self.k, 'k')] {
            if c.value() >= 0.0 {
                f.write_str("+")?;
            }
            write!(f, "{c}{unit}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(x={}, i={}, j={}, k={})",
            Self::TYPE_NAME,
            self.x,
            self.i,
            self.j,
            self.k
        )
    }
}
