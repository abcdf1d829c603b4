/* ************************************************************************ **
** This file is part of fixed-linalg, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Deref, DerefMut};
use std::fmt;

// ---------------------------------------------------------------------------

/// An `N`-dimensional vector with operations for linear algebra.
///
/// The length is part of the type, so operands of mismatched length
/// simply do not typecheck.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vector<X, const N: usize>(pub [X; N]);

/// A linear algebra dense matrix with `R` rows and `C` columns.
///
/// This library uses a row-based formalism; a matrix is a container of
/// row vectors, so `m[r]` is a `Vector<X, C>` and `m[r][c]` is a scalar.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Matrix<X, const R: usize, const C: usize>(pub [Vector<X, C>; R]);

/// A 2-dimensional vector.
pub type V2<X = f64> = Vector<X, 2>;
/// A 3-dimensional vector.
pub type V3<X = f64> = Vector<X, 3>;
/// A 4-dimensional vector.
pub type V4<X = f64> = Vector<X, 4>;

/// A square dense 2x2 matrix.
pub type M22<X = f64> = Matrix<X, 2, 2>;
/// A square dense 3x3 matrix.
pub type M33<X = f64> = Matrix<X, 3, 3>;
/// A square dense 4x4 matrix.
pub type M44<X = f64> = Matrix<X, 4, 4>;

// ---------------------------------------------------------------------------
// All types behave generally like their backing array type.

pub type Iter<'a, X> = std::slice::Iter<'a, X>;
pub type IterMut<'a, X> = std::slice::IterMut<'a, X>;

impl<X, const N: usize> Deref for Vector<X, N> {
    type Target = [X; N];

    #[inline(always)]
    fn deref(&self) -> &Self::Target
    { &self.0 }
}

impl<X, const N: usize> DerefMut for Vector<X, N> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target
    { &mut self.0 }
}

impl<X, const R: usize, const C: usize> Deref for Matrix<X, R, C> {
    type Target = [Vector<X, C>; R];

    #[inline(always)]
    fn deref(&self) -> &Self::Target
    { &self.0 }
}

impl<X, const R: usize, const C: usize> DerefMut for Matrix<X, R, C> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target
    { &mut self.0 }
}

// Fix a paper cut not solved by Deref, which is that many methods
// take `I: IntoIterator`.
impl<X, const N: usize> IntoIterator for Vector<X, N> {
    type Item = X;
    type IntoIter = std::array::IntoIter<X, N>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { IntoIterator::into_iter(self.0) }
}

impl<'a, X, const N: usize> IntoIterator for &'a Vector<X, N> {
    type Item = &'a X;
    type IntoIter = Iter<'a, X>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.0.iter() }
}

impl<'a, X, const N: usize> IntoIterator for &'a mut Vector<X, N> {
    type Item = &'a mut X;
    type IntoIter = IterMut<'a, X>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.0.iter_mut() }
}

impl<'a, X, const R: usize, const C: usize> IntoIterator for &'a Matrix<X, R, C> {
    type Item = &'a Vector<X, C>;
    type IntoIter = Iter<'a, Vector<X, C>>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.0.iter() }
}

impl<'a, X, const R: usize, const C: usize> IntoIterator for &'a mut Matrix<X, R, C> {
    type Item = &'a mut Vector<X, C>;
    type IntoIter = IterMut<'a, Vector<X, C>>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.0.iter_mut() }
}

// ---------------------------------------------------------------------------

// Arrays only implement Default up to length 32, so these can't be derived.
impl<X: Default, const N: usize> Default for Vector<X, N> {
    #[inline]
    fn default() -> Self
    { Vector(std::array::from_fn(|_| X::default())) }
}

impl<X: Default, const R: usize, const C: usize> Default for Matrix<X, R, C> {
    #[inline]
    fn default() -> Self
    { Matrix(std::array::from_fn(|_| Vector::default())) }
}

impl<X, const N: usize> From<[X; N]> for Vector<X, N> {
    #[inline(always)]
    fn from(arr: [X; N]) -> Self
    { Vector(arr) }
}

impl<X, const N: usize> From<Vector<X, N>> for [X; N] {
    #[inline(always)]
    fn from(v: Vector<X, N>) -> Self
    { v.0 }
}

impl<X, const R: usize, const C: usize> From<[[X; C]; R]> for Matrix<X, R, C> {
    #[inline(always)]
    fn from(arr: [[X; C]; R]) -> Self
    { Matrix(arr.map(Vector)) }
}

impl<X, const R: usize, const C: usize> From<Matrix<X, R, C>> for [[X; C]; R] {
    #[inline(always)]
    fn from(m: Matrix<X, R, C>) -> Self
    { m.0.map(|row| row.0) }
}

// ---------------------------------------------------------------------------

// forward the debug impl without a surrounding "Vector(...)", for somewhat
// selfish reasons (it makes the debug output valid JSON and Python for
// many types, significantly lowering the barrier to some common tasks
// during debugging)
impl<X: fmt::Debug, const N: usize> fmt::Debug for Vector<X, N> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(&self.0, f) }
}

impl<X: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<X, R, C> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(&self.0, f) }
}

// ---------------------------------------------------------------------------
