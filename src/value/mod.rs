//! Dynamically typed operands.
//!
//! The operator traits on [`Quaternion`] reject non-numeric operands at
//! compile time. [`Value`] covers the case where operand kinds are only
//! known at runtime: construction, equality and every binary operator have a
//! fallible form that validates the operand and reports the offending kinds.
//!
//! ```
//! use std::collections::BTreeMap;
//! use hamilton::value::{BinaryOp, Value};
//! use hamilton::{Quaternion, QuaternionError};
//!
//! let q = Value::from(Quaternion::new(1, 1, 1, 1));
//! let empty = Value::Map(BTreeMap::new());
//!
//! assert_eq!(
//!     BinaryOp::Mul.evaluate(&empty, &q).unwrap_err().to_string(),
//!     "unsupported operation for: 'Quaternion' and 'map'"
//! );
//! assert_eq!(
//!     BinaryOp::Mul.evaluate(&Value::from(2), &q)?,
//!     Quaternion::new(2, 2, 2, 2)
//! );
//! # Ok::<(), QuaternionError>(())
//! ```

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::error::{Axis, QuaternionError};
use crate::number::Number;
use crate::quaternion::{Operand, Quaternion};


/// A runtime-typed value that may appear as a constructor argument or
/// operand.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Quaternion(Quaternion),
}

impl Value {
    /// Kind name used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::None => "none",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Quaternion(_) => Quaternion::TYPE_NAME,
        }
    }

    /// The value as a numeric scalar, if it is one. Booleans count as the
    /// integers `0` and `1`.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Bool(b) => Some(Number::from(u8::from(*b))),
            Value::Int(n) => Some(Number::from(*n)),
            Value::Float(v) => Some(Number::from(*v)),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(String::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Value::Map(entries)
    }
}

impl From<Quaternion> for Value {
    fn from(q: Quaternion) -> Self {
        Value::Quaternion(q)
    }
}

// ── Construction ─────────────────────────────────────────────────────

/// Validate one constructor argument.
fn argument(axis: Axis, value: &Value) -> Result<Number, QuaternionError> {
    match value {
        Value::Float(v) if !v.is_finite() => Err(QuaternionError::NonFinite { argument: axis }),
        _ => value.as_number().ok_or(QuaternionError::InvalidArgument {
            argument: axis,
            found: value.kind_name(),
        }),
    }
}

/// Keyword-style constructor arguments. Omitted components default to zero.
///
/// Arguments are validated in `x, i, j, k` order and the first invalid one
/// is reported.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    pub x: Option<Value>,
    pub i: Option<Value>,
    pub j: Option<Value>,
    pub k: Option<Value>,
}

impl Arguments {
    /// Set the argument for `axis`.
    pub fn with(mut self, axis: Axis, value: impl Into<Value>) -> Self {
        let slot = match axis {
            Axis::X => &mut self.x,
            Axis::I => &mut self.i,
            Axis::J => &mut self.j,
            Axis::K => &mut self.k,
        };
        *slot = Some(value.into());
        self
    }

    pub fn get(&self, axis: Axis) -> Option<&Value> {
        match axis {
            Axis::X => self.x.as_ref(),
            Axis::I => self.i.as_ref(),
            Axis::J => self.j.as_ref(),
            Axis::K => self.k.as_ref(),
        }
    }

    pub fn build(&self) -> Result<Quaternion, QuaternionError> {
        let mut c = [Number::ZERO; 4];
        for (slot, axis) in c.iter_mut().zip(Axis::ALL) {
            if let Some(value) = self.get(axis) {
                *slot = argument(axis, value)?;
            }
        }
        Ok(Quaternion::from_numbers(c[0], c[1], c[2], c[3]))
    }
}

// ── Fallible operations ──────────────────────────────────────────────

impl Quaternion {
    /// Construct from runtime-typed components.
    ///
    /// Each argument must be an integer, a boolean or a finite float.
    pub fn try_new(x: &Value, i: &Value, j: &Value, k: &Value) -> Result<Self, QuaternionError> {
        Ok(Self::from_numbers(
            argument(Axis::X, x)?,
            argument(Axis::I, i)?,
            argument(Axis::J, j)?,
            argument(Axis::K, k)?,
        ))
    }

    fn unsupported(&self, other: &Value) -> QuaternionError {
        QuaternionError::UnsupportedOperation {
            lhs: Self::TYPE_NAME,
            rhs: other.kind_name(),
        }
    }

    /// Resolve a right-hand operand.
    fn operand(&self, other: &Value) -> Result<Operand, QuaternionError> {
        match other {
            Value::Quaternion(q) => Ok(Operand::Quaternion(*q)),
            _ => other
                .as_number()
                .map(Operand::Scalar)
                .ok_or_else(|| self.unsupported(other)),
        }
    }

    /// Resolve the left-hand operand of a reflected form. Only scalars
    /// qualify; a quaternion on the left takes the direct form instead.
    fn reflected(&self, other: &Value) -> Result<Number, QuaternionError> {
        other.as_number().ok_or_else(|| self.unsupported(other))
    }

    /// Equality against a runtime value. Only defined between quaternions:
    /// any other kind, scalars included, is an error rather than `false`.
    pub fn try_eq(&self, other: &Value) -> Result<bool, QuaternionError> {
        match other {
            Value::Quaternion(q) => Ok(self == q),
            _ => Err(self.unsupported(other)),
        }
    }

    pub fn try_add(&self, other: &Value) -> Result<Quaternion, QuaternionError> {
        Ok(self.add_operand(self.operand(other)?))
    }

    pub fn try_sub(&self, other: &Value) -> Result<Quaternion, QuaternionError> {
        Ok(self.sub_operand(self.operand(other)?))
    }

    pub fn try_mul(&self, other: &Value) -> Result<Quaternion, QuaternionError> {
        Ok(self.mul_operand(self.operand(other)?))
    }

    /// `other + self` for a scalar `other`.
    pub fn try_radd(&self, other: &Value) -> Result<Quaternion, QuaternionError> {
        Ok(self.radd(self.reflected(other)?))
    }

    /// `other - self` for a scalar `other`.
    pub fn try_rsub(&self, other: &Value) -> Result<Quaternion, QuaternionError> {
        Ok(self.rsub(self.reflected(other)?))
    }

    /// `other * self` for a scalar `other`.
    pub fn try_rmul(&self, other: &Value) -> Result<Quaternion, QuaternionError> {
        Ok(self.rmul(self.reflected(other)?))
    }
}

// ── Operator resolution ──────────────────────────────────────────────

/// A binary operator over runtime-typed operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
}

impl BinaryOp {
    pub const fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
        }
    }

    /// Evaluate `lhs op rhs`.
    ///
    /// A quaternion on the left takes the direct form with `rhs` as the
    /// operand. Otherwise a quaternion on the right takes the reflected form
    /// with `lhs` as the operand. With no quaternion on either side the
    /// operation is unsupported.
    pub fn evaluate(self, lhs: &Value, rhs: &Value) -> Result<Quaternion, QuaternionError> {
        match (lhs, rhs) {
            (Value::Quaternion(q), _) => match self {
                BinaryOp::Add => q.try_add(rhs),
                BinaryOp::Sub => q.try_sub(rhs),
                BinaryOp::Mul => q.try_mul(rhs),
            },
            (_, Value::Quaternion(q)) => match self {
                BinaryOp::Add => q.try_radd(lhs),
                BinaryOp::Sub => q.try_rsub(lhs),
                BinaryOp::Mul => q.try_rmul(lhs),
            },
            _ => Err(QuaternionError::UnsupportedOperation {
                lhs: lhs.kind_name(),
                rhs: rhs.kind_name(),
            }),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
