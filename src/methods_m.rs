/* ************************************************************************ **
** This file is part of fixed-linalg, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small fixed-size matrix types, compatible with `Vector`.
//!
//! This library primarily uses a row-based formalism; matrices are conceptually
//! understood to be containers of row-vectors. A matrix applied to a column
//! vector is written `&m * &v` (or `m.transform(&v)`), and a row vector applied
//! to a matrix is written `&v * &m`.

use crate::errors::ShapeError;
use crate::traits::Semiring;
use crate::traits::internal::PrimitiveSemiring;
use crate::types::*;

use num_traits::{Zero, One};

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

impl<X, const R: usize, const C: usize> Matrix<X, R, C> {
    /// Construct a matrix from a function on `(row, col)` indices.
    #[inline]
    pub fn from_fn<F>(mut f: F) -> Self
    where F: FnMut(usize, usize) -> X,
    { Matrix(std::array::from_fn(|r| Vector::from_fn(|c| f(r, c)))) }

    /// Construct a matrix from a 2D array (of rows).
    #[inline(always)]
    pub fn from_array(arr: [[X; C]; R]) -> Self
    { Matrix::from(arr) }

    /// Construct a matrix from its row vectors.
    #[inline(always)]
    pub const fn from_row_vectors(rows: [Vector<X, C>; R]) -> Self
    { Matrix(rows) }

    /// Cast into a plain `[[X; C]; R]`.
    #[inline(always)]
    pub fn into_array(self) -> [[X; C]; R]
    { self.into() }

    /// Borrow a row. (the same as `&m[r]`)
    #[inline(always)]
    pub fn row(&self, r: usize) -> &Vector<X, C>
    { &self.0[r] }

    /// Copy out a column.
    #[inline]
    pub fn col(&self, c: usize) -> Vector<X, R>
    where X: Copy,
    { Vector::from_fn(|r| self.0[r][c]) }

    /// Matrix transpose.
    #[inline]
    pub fn transpose(&self) -> Matrix<X, C, R>
    where X: Copy,
    { Matrix::from_fn(|r, c| self.0[c][r]) }

    /// Map each scalar element of a matrix.
    #[inline]
    pub fn map<B, F>(self, mut f: F) -> Matrix<B, R, C>
    where F: FnMut(X) -> B,
    { Matrix(self.0.map(|row| row.map(&mut f))) }

    /// Combine two matrices elementwise.
    #[inline]
    pub fn zip_with<B, F>(&self, other: &Self, mut f: F) -> Matrix<B, R, C>
    where X: Copy, F: FnMut(X, X) -> B,
    { Matrix(std::array::from_fn(|r| self.0[r].zip_with(&other.0[r], &mut f))) }

    /// In-place counterpart of `map`.
    #[inline]
    pub fn update_each<F>(&mut self, mut f: F)
    where X: Copy, F: FnMut(X) -> X,
    {
        for row in &mut self.0 {
            row.update_each(&mut f);
        }
    }

    /// In-place counterpart of `zip_with`.
    #[inline]
    pub fn update_with<F>(&mut self, other: &Self, mut f: F)
    where X: Copy, F: FnMut(X, X) -> X,
    {
        for (row, other_row) in self.0.iter_mut().zip(&other.0) {
            row.update_with(other_row, &mut f);
        }
    }
}

impl<X: Semiring, const R: usize, const C: usize> Matrix<X, R, C>
where X: PrimitiveSemiring,
{
    /// Construct the zero matrix.
    #[inline(always)]
    pub fn zero() -> Self
    { Matrix([Vector::zero(); R]) }

    /// Construct from rows given as runtime-sized sequences.
    ///
    /// The input must have exactly `R` rows of exactly `C` elements each.
    ///
    /// # Panics
    ///
    /// Panics if the shape is wrong. Use `try_from_rows` to recover instead.
    #[inline]
    pub fn from_rows<Row: AsRef<[X]>>(rows: &[Row]) -> Self {
        match Self::try_from_rows(rows) {
            Ok(m) => m,
            Err(e) => panic!("Matrix::from_rows: bad {}x{} literal: {}", R, C, e),
        }
    }

    /// Checked version of `from_rows`.
    pub fn try_from_rows<Row: AsRef<[X]>>(rows: &[Row]) -> Result<Self, ShapeError> {
        if rows.len() != R {
            return Err(ShapeError::RowCount { expected: R, actual: rows.len() });
        }
        for (r, row) in rows.iter().enumerate() {
            let actual = row.as_ref().len();
            if actual != C {
                return Err(ShapeError::ColCount { row: r, expected: C, actual });
            }
        }
        Ok(Matrix::from_fn(|r, c| rows[r].as_ref()[c]))
    }

    /// Apply the matrix to a column vector. (the same as `self * v`)
    ///
    /// `result[r]` is the dot product of row `r` with `v`.
    #[inline]
    pub fn transform(&self, v: &Vector<X, C>) -> Vector<X, R>
    { Vector::from_fn(|r| self.0[r].dot(v)) }

    /// Entrywise product. (`*` is the matrix product)
    #[inline]
    pub fn mul_elementwise(&self, other: &Self) -> Self
    { self.zip_with(other, |a, b| a * b) }
}

impl<X: Semiring, const N: usize> Matrix<X, N, N>
where X: PrimitiveSemiring,
{
    /// Construct the identity matrix.
    #[inline(always)]
    pub fn eye() -> Self
    { One::one() }
}

// -------------------------- END PUBLIC API ---------------------------------
// ---------------------------------------------------------------------------

impl<X: Semiring, const R: usize, const C: usize> Zero for Matrix<X, R, C>
where X: PrimitiveSemiring,
{
    #[inline]
    fn zero() -> Self
    { Matrix([Vector::zero(); R]) }

    #[inline]
    fn is_zero(&self) -> bool
    { self.0.iter().all(Zero::is_zero) }
}

impl<X: Semiring, const N: usize> One for Matrix<X, N, N>
where X: PrimitiveSemiring,
{
    #[inline]
    fn one() -> Self
    { Matrix::from_fn(|r, c| if r == c { X::one() } else { X::zero() }) }

    #[inline]
    fn is_one(&self) -> bool {
        self.0.iter().enumerate().all(|(r, row)| {
            row.iter().enumerate().all(|(c, x)| match r == c {
                true => x.is_one(),
                false => x.is_zero(),
            })
        })
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn random_m<const R: usize, const C: usize>() -> Matrix<f64, R, C> {
        Matrix::from_fn(|_, _| 20.0 * ::rand::random::<f64>() - 10.0)
    }

    #[test]
    fn test_zero_eye() {
        assert_eq!(Matrix::from_array([[0, 0], [0, 0]]), M22::zero());
        assert_eq!(Matrix::from_array([[1, 0], [0, 1]]), M22::eye());
        assert_eq!(Matrix::from_array([[0, 0, 0], [0, 0, 0], [0, 0, 0]]), M33::zero());
        assert_eq!(Matrix::from_array([[1, 0, 0], [0, 1, 0], [0, 0, 1]]), M33::eye());
        assert_eq!(Matrix::from_array([[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]), M44::zero());
        assert_eq!(Matrix::from_array([[1, 0, 0, 0], [0, 1, 0, 0], [0, 0, 1, 0], [0, 0, 0, 1]]), M44::eye());
        assert_eq!(Matrix::<i32, 2, 3>::zero(), Matrix::default());
        assert!(Matrix::from_array([[0, 0], [0, 0]]).is_zero());
        assert!(!Matrix::from_array([[0, 1], [0, 0]]).is_zero());
        assert!(Matrix::from_array([[1, 0], [0, 1]]).is_one());
        assert!(!Matrix::from_array([[2, 0], [0, 1]]).is_one());
        assert!(!Matrix::from_array([[1, -1], [0, 1]]).is_one());
    }

    #[test]
    fn transpose() {
        let m = Matrix::from_array([[1, 2], [3, 4]]);
        assert_eq!(m.transpose(), Matrix::from_array([[1, 3], [2, 4]]));

        let m = Matrix::from_array([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m.transpose(), Matrix::from_array([[1, 4], [2, 5], [3, 6]]));
    }

    #[test]
    fn prop_transpose_involution() {
        for _ in 0..10 {
            let a: Matrix<f64, 3, 5> = random_m();
            assert_eq!(a.transpose().transpose(), a);
        }
    }

    #[test]
    fn rows_and_cols() {
        let m = Matrix::from_array([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m.row(1), &Vector([4, 5, 6]));
        assert_eq!(m.col(2), Vector([3, 6]));
        assert_eq!(m.into_array(), [[1, 2, 3], [4, 5, 6]]);
        assert_eq!(Matrix::from_row_vectors([Vector([1, 2, 3]), Vector([4, 5, 6])]), m);
    }

    #[test]
    fn from_rows() {
        let m: M22<i32> = Matrix::from_rows(&[[1, 2], [3, 4]]);
        assert_eq!(m, Matrix::from_array([[1, 2], [3, 4]]));

        let m: Matrix<i32, 2, 3> = Matrix::from_rows(&vec![vec![1, 2, 3], vec![4, 5, 6]]);
        assert_eq!(m[1][2], 6);
    }

    #[test]
    fn try_from_rows_reports_shape() {
        let result = M22::<i32>::try_from_rows(&vec![vec![1, 2]]);
        assert_eq!(result, Err(ShapeError::RowCount { expected: 2, actual: 1 }));

        let result = M22::<i32>::try_from_rows(&vec![vec![1, 2], vec![3, 4, 5]]);
        assert_eq!(result, Err(ShapeError::ColCount { row: 1, expected: 2, actual: 3 }));
    }

    #[test]
    #[should_panic(expected = "bad 2x2 literal")]
    fn from_rows_panics_on_ragged() {
        let _ = M22::<i32>::from_rows(&vec![vec![1, 2], vec![3]]);
    }

    #[test]
    fn transform() {
        let eye = M33::eye();
        assert_eq!(eye.transform(&Vector([7, 8, 9])), Vector([7, 8, 9]));

        let m = Matrix::from_array([
            [1, 2, 3],
            [4, 5, 6],
        ]);
        assert_eq!(m.transform(&Vector([4, -3, 1])), Vector([1, 7]));
    }

    #[test]
    fn combinators() {
        let a = Matrix::from_array([[1, 2], [3, 4]]);
        let b = Matrix::from_array([[5, 6], [7, 8]]);
        assert_eq!(a.mul_elementwise(&b), Matrix::from_array([[5, 12], [21, 32]]));
        assert_eq!(a.zip_with(&b, |x, y| x < y), Matrix::from_array([[true; 2]; 2]));
        assert_eq!(a.map(|x| x * 10), Matrix::from_array([[10, 20], [30, 40]]));

        let mut c = a;
        c.update_with(&b, |x, y| y - x);
        assert_eq!(c, Matrix::from_array([[4, 4], [4, 4]]));
        c.update_each(|x| x / 2);
        assert_eq!(c, Matrix::from_array([[2, 2], [2, 2]]));
    }
}
