use core::fmt;

use crate::number::NumericKind;

/// One of the four quaternion components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Real part.
    X,
    I,
    J,
    K,
}

impl Axis {
    /// All components in storage order.
    pub const ALL: [Axis; 4] = [Axis::X, Axis::I, Axis::J, Axis::K];

    /// Argument name of the component.
    pub const fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::I => "i",
            Axis::J => "j",
            Axis::K => "k",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from quaternion construction and arithmetic.
///
/// The statically typed API surfaces [`QuaternionError::ZeroInverse`] and
/// [`QuaternionError::NormOutOfRange`] from `inverse`, and `NonFinite` from
/// `try_from_parts`. The remaining variants come from the dynamically typed
/// `Value` path.
///
/// ```
/// use hamilton::{Quaternion, QuaternionError};
///
/// assert_eq!(Quaternion::ZERO.inverse().unwrap_err(), QuaternionError::ZeroInverse);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuaternionError {
    /// A constructor argument is not an integer or float.
    InvalidArgument {
        argument: Axis,
        /// Kind name of the rejected value.
        found: &'static str,
    },
    /// A constructor argument is NaN or infinite.
    NonFinite { argument: Axis },
    /// A binary operation received an operand that is neither a quaternion
    /// nor a numeric scalar.
    UnsupportedOperation {
        lhs: &'static str,
        rhs: &'static str,
    },
    /// The zero quaternion has no inverse.
    ZeroInverse,
    /// The norm overflows `f64`, or a component is NaN or infinite, so no
    /// inverse can be formed.
    NormOutOfRange,
}

impl fmt::Display for QuaternionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuaternionError::InvalidArgument { argument, found } => {
                write!(
                    f,
                    "{argument} must be {} | {}, got {found}",
                    NumericKind::Int.name(),
                    NumericKind::Float.name()
                )
            }
            QuaternionError::NonFinite { argument } => {
                write!(f, "{argument} must be finite")
            }
            QuaternionError::UnsupportedOperation { lhs, rhs } => {
                write!(f, "unsupported operation for: '{lhs}' and '{rhs}'")
            }
            QuaternionError::ZeroInverse => write!(f, "cannot invert zero quaternion"),
            QuaternionError::NormOutOfRange => {
                write!(f, "cannot invert quaternion: norm out of range")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QuaternionError {}
