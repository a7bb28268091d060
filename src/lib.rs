//! # hamilton
//!
//! Immutable quaternion value type with Hamilton-product arithmetic,
//! no-std compatible.
//!
//! ## Quick start
//!
//! ```
//! use hamilton::Quaternion;
//!
//! let a = Quaternion::new(1, 2, 3, 4);
//! let b = Quaternion::new(4, 3, 2, 1);
//!
//! // Multiplication does not commute
//! assert_eq!(a * b, Quaternion::new(-12, 6, 24, 12));
//! assert_ne!(a * b, b * a);
//!
//! // Scalars mix in from either side
//! assert_eq!(2 * Quaternion::new(1, 1, 1, 1), Quaternion::new(2, 2, 2, 2));
//! assert_eq!(a * 2, Quaternion::new(2, 4, 6, 8));
//!
//! let q = Quaternion::new(1, 1, 1, 1);
//! assert_eq!(q.norm(), 4.0);
//! assert_eq!(q.conjugate(), Quaternion::new(1, -1, -1, -1));
//! assert_eq!(q.inverse().unwrap(), Quaternion::new(0.25, -0.25, -0.25, -0.25));
//!
//! assert_eq!(Quaternion::new(0, 0.2, -1, 1).to_string(), "0+0.2i-1j+1k");
//! assert_eq!(format!("{:?}", a * b), "Quaternion(x=-12, i=6, j=24, k=12)");
//! ```
//!
//! ## Modules
//!
//! - [`quaternion`]: The [`Quaternion`] type: construction, accessors,
//!   conjugate, inverse, formatting, and the `+`, `-`, `*` operators against
//!   quaternions and every primitive numeric type, on either side.
//!   [`Operand`] is the scalar-or-quaternion case every operator matches on.
//!
//! - [`number`]: [`Number`], an `f64` tagged with the [`NumericKind`] it was
//!   computed from, and the 16-digit rounding applied to every stored
//!   component.
//!
//! - [`value`]: Runtime-typed [`Value`] operands with fallible
//!   construction (`try_new`, [`Arguments`]), equality (`try_eq`) and
//!   operators (`try_add`, [`BinaryOp::evaluate`], ...). Requires `alloc`.
//!
//! - [`traits`]: [`Scalar`], the primitive numeric types accepted as
//!   components and operands.
//!
//! - [`error`]: [`QuaternionError`] and [`Axis`].
//!
//! ## Numeric policy
//!
//! Every component is rounded to sixteen decimal digits when a quaternion
//! is built, and only then. Arithmetic between construction steps runs at
//! full `f64` precision. The norm `x² + i² + j² + k²` is computed from the
//! rounded components and cached.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Implies `alloc`. `std::error::Error` for [`QuaternionError`] |
//! | `alloc` | via std | Runtime-typed [`value`] module |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod number;
pub mod quaternion;
pub mod traits;
#[cfg(feature = "alloc")]
pub mod value;

pub use error::{Axis, QuaternionError};
pub use number::{Number, NumericKind};
pub use quaternion::{Operand, Quaternion};
pub use traits::Scalar;
#[cfg(feature = "alloc")]
pub use value::{Arguments, BinaryOp, Value};
