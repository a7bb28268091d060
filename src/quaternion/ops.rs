use core::iter::{Product, Sum};
use core::ops::{Add, Mul, Neg, Sub};

use super::Quaternion;
use crate::number::Number;
use crate::traits::Scalar;

/// Right-hand operand of a quaternion operator: a real scalar or another
/// quaternion.
///
/// Every binary operator resolves its operand into one of these two cases
/// and matches over them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Scalar(Number),
    Quaternion(Quaternion),
}

impl<T: Scalar> From<T> for Operand {
    #[inline]
    fn from(s: T) -> Self {
        Operand::Scalar(Number::from(s))
    }
}

impl From<Number> for Operand {
    #[inline]
    fn from(s: Number) -> Self {
        Operand::Scalar(s)
    }
}

impl From<Quaternion> for Operand {
    #[inline]
    fn from(q: Quaternion) -> Self {
        Operand::Quaternion(q)
    }
}

impl From<&Quaternion> for Operand {
    #[inline]
    fn from(q: &Quaternion) -> Self {
        Operand::Quaternion(*q)
    }
}

// ── Operand dispatch ─────────────────────────────────────────────────

impl Quaternion {
    /// A scalar offsets only the real part; a quaternion adds componentwise.
    pub(crate) fn add_operand(&self, rhs: Operand) -> Quaternion {
        match rhs {
            Operand::Scalar(s) => Quaternion::from_numbers(self.x + s, self.i, self.j, self.k),
            Operand::Quaternion(q) => Quaternion::from_numbers(
                self.x + q.x,
                self.i + q.i,
                self.j + q.j,
                self.k + q.k,
            ),
        }
    }

    pub(crate) fn sub_operand(&self, rhs: Operand) -> Quaternion {
        match rhs {
            Operand::Scalar(s) => Quaternion::from_numbers(self.x - s, self.i, self.j, self.k),
            Operand::Quaternion(q) => Quaternion::from_numbers(
                self.x - q.x,
                self.i - q.i,
                self.j - q.j,
                self.k - q.k,
            ),
        }
    }

    pub(crate) fn mul_operand(&self, rhs: Operand) -> Quaternion {
        match rhs {
            Operand::Scalar(s) => self.scale(s),
            Operand::Quaternion(q) => self.hamilton(&q),
        }
    }

    /// Hamilton product `self · o`.
    ///
    /// Sum of one partial quaternion per component of `self`, each taken
    /// against all of `o`. The signs encode `î² = ĵ² = k̂² = -1`,
    /// `îĵ = k̂`, `ĵk̂ = î`, `k̂î = ĵ` and their anticommuted forms.
    fn hamilton(&self, o: &Quaternion) -> Quaternion {
        let (x, i, j, k) = (self.x, self.i, self.j, self.k);

        let from_x = Quaternion::from_numbers(x * o.x, x * o.i, x * o.j, x * o.k);
        let from_i = Quaternion::from_numbers(-i * o.i, i * o.x, -i * o.k, i * o.j);
        let from_j = Quaternion::from_numbers(-j * o.j, j * o.k, j * o.x, -j * o.i);
        let from_k = Quaternion::from_numbers(-k * o.k, -k * o.j, k * o.i, k * o.x);

        from_x + from_i + from_j + from_k
    }

    /// Reflected addition `s + self`. Identical to `self + s`.
    #[inline]
    pub fn radd(&self, s: impl Into<Number>) -> Quaternion {
        self.add_operand(Operand::Scalar(s.into()))
    }

    /// Reflected subtraction `s - self`, evaluated as `(-1 · self) + s`.
    #[inline]
    pub fn rsub(&self, s: impl Into<Number>) -> Quaternion {
        self.scale(Number::from(-1)).add_operand(Operand::Scalar(s.into()))
    }

    /// Reflected multiplication `s · self`. Scalars commute, so this equals
    /// `self · s`.
    #[inline]
    pub fn rmul(&self, s: impl Into<Number>) -> Quaternion {
        self.scale(s.into())
    }
}

// ── Operators ────────────────────────────────────────────────────────

macro_rules! impl_quaternion_binop {
    ($Op:ident, $method:ident, $dispatch:ident) => {
        impl<R: Into<Operand>> $Op<R> for Quaternion {
            type Output = Quaternion;

            #[inline]
            fn $method(self, rhs: R) -> Quaternion {
                self.$dispatch(rhs.into())
            }
        }

        impl<R: Into<Operand>> $Op<R> for &Quaternion {
            type Output = Quaternion;

            #[inline]
            fn $method(self, rhs: R) -> Quaternion {
                self.$dispatch(rhs.into())
            }
        }
    };
}

impl_quaternion_binop!(Add, add, add_operand);
impl_quaternion_binop!(Sub, sub, sub_operand);
impl_quaternion_binop!(Mul, mul, mul_operand);

// Scalar on the left: s + q, s - q, s * q
macro_rules! impl_reflected_ops {
    ($($t:ty),*) => {
        $(
            impl Add<Quaternion> for $t {
                type Output = Quaternion;
                #[inline]
                fn add(self, rhs: Quaternion) -> Quaternion {
                    rhs.radd(self)
                }
            }

            impl Add<&Quaternion> for $t {
                type Output = Quaternion;
                #[inline]
                fn add(self, rhs: &Quaternion) -> Quaternion {
                    rhs.radd(self)
                }
            }

            impl Sub<Quaternion> for $t {
                type Output = Quaternion;
                #[inline]
                fn sub(self, rhs: Quaternion) -> Quaternion {
                    rhs.rsub(self)
                }
            }

            impl Sub<&Quaternion> for $t {
                type Output = Quaternion;
                #[inline]
                fn sub(self, rhs: &Quaternion) -> Quaternion {
                    rhs.rsub(self)
                }
            }

            impl Mul<Quaternion> for $t {
                type Output = Quaternion;
                #[inline]
                fn mul(self, rhs: Quaternion) -> Quaternion {
                    rhs.rmul(self)
                }
            }

            impl Mul<&Quaternion> for $t {
                type Output = Quaternion;
                #[inline]
                fn mul(self, rhs: &Quaternion) -> Quaternion {
                    rhs.rmul(self)
                }
            }
        )*
    };
}

impl_reflected_ops!(
    Number, f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

// Negation: -1 · q
impl Neg for Quaternion {
    type Output = Quaternion;

    #[inline]
    fn neg(self) -> Quaternion {
        self.scale(Number::from(-1))
    }
}

impl Neg for &Quaternion {
    type Output = Quaternion;

    #[inline]
    fn neg(self) -> Quaternion {
        self.scale(Number::from(-1))
    }
}

// ── Folds ────────────────────────────────────────────────────────────

impl Sum for Quaternion {
    fn sum<I: Iterator<Item = Quaternion>>(iter: I) -> Quaternion {
        iter.fold(Quaternion::ZERO, |acc, q| acc + q)
    }
}

impl<'a> Sum<&'a Quaternion> for Quaternion {
    fn sum<I: Iterator<Item = &'a Quaternion>>(iter: I) -> Quaternion {
        iter.fold(Quaternion::ZERO, |acc, q| acc + q)
    }
}

// Left fold, so the product keeps iteration order.
impl Product for Quaternion {
    fn product<I: Iterator<Item = Quaternion>>(iter: I) -> Quaternion {
        iter.fold(Quaternion::ONE, |acc, q| acc * q)
    }
}

impl<'a> Product<&'a Quaternion> for Quaternion {
    fn product<I: Iterator<Item = &'a Quaternion>>(iter: I) -> Quaternion {
        iter.fold(Quaternion::ONE, |acc, q| acc * q)
    }
}
