/* ************************************************************************ **
** This file is part of fixed-linalg, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Fixed-size vector and matrix value types.
//!
//! `Vector<X, N>` and `Matrix<X, R, C>` carry their shape in the type, so
//! every shape mismatch between operands is a compile error. The only
//! runtime shape checks are in the constructors that accept slices.
//!
//! Operators come in every combination of owned and borrowed operands:
//!
//! * `+ - * /` between vectors are elementwise.
//! * `+ -` between matrices are elementwise; `*` is the matrix product.
//! * `+ - * /` between a vector or matrix and a scalar apply to each element.
//! * `&m * &v` applies a matrix to a column vector; `&v * &m` applies a row
//!   vector to a matrix.
//!
//! The scalar types are the primitive numbers, sorted by what they support
//! into the sealed traits `Semiring`, `Ring`, and `Field`.

#[cfg(test)]
#[macro_use]
extern crate fixed_linalg_assert_close;
#[macro_use]
extern crate log;

#[macro_use] mod macros;
mod traits;
mod types;
mod errors;
mod ops;
mod methods_v;
mod methods_m;

pub use crate::types::{Vector, Matrix};
pub use crate::types::{V2, V3, V4, M22, M33, M44};
pub use crate::types::{Iter, IterMut};

pub use crate::traits::{Field, Ring, Semiring};
pub use crate::errors::ShapeError;

pub use crate::methods_v::{dot, cross};
