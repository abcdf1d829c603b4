/* ************************************************************************ **
** This file is part of fixed-linalg, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Add, Sub, AddAssign, SubAssign, Neg};
use std::ops::{Mul, Div, MulAssign, DivAssign};
use std::fmt;

use crate::traits::{Semiring, Ring};
use crate::traits::internal::{PrimitiveSemiring, PrimitiveRing};
use crate::types::*;

// ---------------------------------------------------------------------------
// vector-vector ops

// NOTE: Operator impls are deliberately between same-typed vectors,
//       rather than e.g. Vector<T, N> and Vector<U, N> where T: Add<U>.
//
//       Vectors of different lengths never meet in an operator, because
//       they are different types.
gen_each!{
    @{arith}
    @{by_ref_a}
    @{by_ref_b}
    impl_v_v_binop!(
        {$Op:ident $op:ident $OpAssign:ident $op_assign:ident $Bound:ident $Prim:ident}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        // vector `op` vector, elementwise
        impl<$($lt_a)* $($lt_b)* X: $Bound, const N: usize> $Op<$($ref_b)* Vector<X, N>> for $($ref_a)* Vector<X, N>
          where X: $Prim,
        {
            type Output = Vector<X, N>;

            #[inline]
            fn $op(self, other: $($ref_b)* Vector<X, N>) -> Self::Output
            { Vector::<X, N>::zip_with(&self, &other, <X as $Op>::$op) }
        }
    }
}

// ---------------------------------------------------------------------------
// vector unary ops

gen_each!{
    @{by_ref_a}
    impl_v_unops!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // -vector
        impl<$($lt_a)* X: Ring, const N: usize> Neg for $($ref_a)* Vector<X, N>
          where X: PrimitiveRing,
        {
            type Output = Vector<X, N>;

            #[inline]
            fn neg(self) -> Self::Output
            { Vector(self.0.map(|x| -x)) }
        }
    }
}

// ---------------------------------------------------------------------------
// vector-scalar ops

// scalar * vector
gen_each!{
    // NOTE: the orphan rules prevent us from impl-ing these ops "for X" so
    //       we must generate a separate impl for each Semiring type rather than
    //       being generic over X: Semiring
    @{semiring}
    @{by_ref_a}
    impl_scalar_v_mul!(
        {$X:ty}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        impl<$($lt_a)* const N: usize> Mul<$($ref_a)* Vector<$X, N>> for $X {
            type Output = Vector<$X, N>;

            #[inline(always)]
            fn mul(self, vector: $($ref_a)* Vector<$X, N>) -> Self::Output
            { vector * self }
        }
    }
}

// vector `op` scalar
gen_each!{
    @{arith}
    @{by_ref_a}
    impl_v_scalar_binop!(
        {$Op:ident $op:ident $OpAssign:ident $op_assign:ident $Bound:ident $Prim:ident}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        impl<$($lt_a)* X: $Bound, const N: usize> $Op<X> for $($ref_a)* Vector<X, N>
          where X: $Prim,
        {
            type Output = Vector<X, N>;

            #[inline]
            fn $op(self, scalar: X) -> Self::Output
            { Vector(self.0.map(|x| <X as $Op>::$op(x, scalar))) }
        }
    }
}

// ---------------------------------------------------------------------------
// matrix-matrix ops

gen_each!{
    @{matrix_binop}
    @{by_ref_a}
    @{by_ref_b}
    impl_m_m_binop!(
        {$Op:ident $op:ident $OpAssign:ident $op_assign:ident $Bound:ident $Prim:ident}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        // matrix `op` matrix, elementwise
        impl<$($lt_a)* $($lt_b)* X: $Bound, const R: usize, const C: usize>
            $Op<$($ref_b)* Matrix<X, R, C>> for $($ref_a)* Matrix<X, R, C>
          where X: $Prim,
        {
            type Output = Matrix<X, R, C>;

            #[inline]
            fn $op(self, other: $($ref_b)* Matrix<X, R, C>) -> Self::Output
            { Matrix::<X, R, C>::zip_with(&self, &other, <X as $Op>::$op) }
        }
    }
}

// matrix * matrix
gen_each!{
    @{by_ref_a}
    @{by_ref_b}
    impl_m_m_mul!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        impl<$($lt_a)* $($lt_b)* X: Semiring, const R: usize, const K: usize, const C: usize>
            Mul<$($ref_b)* Matrix<X, K, C>> for $($ref_a)* Matrix<X, R, K>
          where X: PrimitiveSemiring,
        {
            type Output = Matrix<X, R, C>;

            #[inline]
            fn mul(self, other: $($ref_b)* Matrix<X, K, C>) -> Self::Output {
                Matrix::from_fn(|r, c| {
                    (0..K).fold(X::zero(), |acc, k| acc + self[r][k] * other[k][c])
                })
            }
        }
    }
}

// ---------------------------------------------------------------------------
// matrix unary ops

gen_each!{
    @{by_ref_a}
    impl_m_unops!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // -matrix
        impl<$($lt_a)* X: Ring, const R: usize, const C: usize> Neg for $($ref_a)* Matrix<X, R, C>
          where X: PrimitiveRing,
        {
            type Output = Matrix<X, R, C>;

            #[inline]
            fn neg(self) -> Self::Output
            { Matrix(self.0.map(|row| -row)) }
        }
    }
}

// ---------------------------------------------------------------------------
// matrix-scalar ops

// scalar * matrix
gen_each!{
    @{semiring}
    @{by_ref_a}
    impl_scalar_m_mul!(
        {$X:ty}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        impl<$($lt_a)* const R: usize, const C: usize> Mul<$($ref_a)* Matrix<$X, R, C>> for $X {
            type Output = Matrix<$X, R, C>;

            #[inline(always)]
            fn mul(self, matrix: $($ref_a)* Matrix<$X, R, C>) -> Self::Output
            { matrix * self }
        }
    }
}

// matrix `op` scalar
gen_each!{
    @{arith}
    @{by_ref_a}
    impl_m_scalar_binop!(
        {$Op:ident $op:ident $OpAssign:ident $op_assign:ident $Bound:ident $Prim:ident}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        impl<$($lt_a)* X: $Bound, const R: usize, const C: usize> $Op<X> for $($ref_a)* Matrix<X, R, C>
          where X: $Prim,
        {
            type Output = Matrix<X, R, C>;

            #[inline]
            fn $op(self, scalar: X) -> Self::Output
            { Matrix(self.0.map(|row| Vector(row.0.map(|x| <X as $Op>::$op(x, scalar))))) }
        }
    }
}

// ---------------------------------------------------------------------------
// matrix-vector ops

gen_each!{
    @{by_ref_a}
    @{by_ref_b}
    impl_m_v_mul!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        // matrix * column vector
        impl<$($lt_a)* $($lt_b)* X: Semiring, const R: usize, const C: usize>
            Mul<$($ref_b)* Vector<X, C>> for $($ref_a)* Matrix<X, R, C>
          where X: PrimitiveSemiring,
        {
            type Output = Vector<X, R>;

            #[inline]
            fn mul(self, vector: $($ref_b)* Vector<X, C>) -> Self::Output
            { Matrix::<X, R, C>::transform(&self, &vector) }
        }

        // row vector * matrix
        impl<$($lt_a)* $($lt_b)* X: Semiring, const R: usize, const C: usize>
            Mul<$($ref_b)* Matrix<X, R, C>> for $($ref_a)* Vector<X, R>
          where X: PrimitiveSemiring,
        {
            type Output = Vector<X, C>;

            #[inline]
            fn mul(self, matrix: $($ref_b)* Matrix<X, R, C>) -> Self::Output {
                Vector::from_fn(|c| {
                    (0..R).fold(X::zero(), |acc, r| acc + self[r] * matrix[r][c])
                })
            }
        }
    }
}

// ---------------------------------------------------------------------------
// assign ops (general)

// These are defined in terms of the by-reference binary operators, so each
// one covers every right-hand side for which `&self op rhs` has type `Self`.
gen_each!{
    [
        {Vector [const N: usize] [N]}
        {Matrix [const R: usize, const C: usize] [R, C]}
    ]
    impl_assign_ops!(
        {$Cn:ident [$($params:tt)*] [$($args:tt)*]}
    ) => {
        // container += container;
        // container += scalar;
        impl<X, B, $($params)*> AddAssign<B> for $Cn<X, $($args)*>
          where for<'a> &'a Self: Add<B, Output=Self>,
        {
            #[inline(always)]
            fn add_assign(&mut self, rhs: B)
            { *self = &*self + rhs; }
        }

        // container -= container;
        // container -= scalar;
        impl<X, B, $($params)*> SubAssign<B> for $Cn<X, $($args)*>
          where for<'a> &'a Self: Sub<B, Output=Self>,
        {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: B)
            { *self = &*self - rhs; }
        }

        // vector *= vector;   (elementwise)
        // container *= scalar;
        // row vector *= square matrix;
        // matrix *= square matrix;
        impl<X, B, $($params)*> MulAssign<B> for $Cn<X, $($args)*>
          where for<'a> &'a Self: Mul<B, Output=Self>,
        {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: B)
            { *self = &*self * rhs; }
        }

        // vector /= vector;   (elementwise)
        // container /= scalar;
        impl<X, B, $($params)*> DivAssign<B> for $Cn<X, $($args)*>
          where for<'a> &'a Self: Div<B, Output=Self>,
        {
            #[inline(always)]
            fn div_assign(&mut self, rhs: B)
            { *self = &*self / rhs; }
        }
    }
}

// ---------------------------------------------------------------------------

// fmt traits apply the format to each element for convenience.
gen_each!{
    [
        // Note: the inclusion of Display in this list is a necessary evil, because
        //       there's no other way to get output like `[1.0000, 0.3333]`,
        //       which is kind of, you know, THE motivating use-case.
        {Display} {LowerExp} {UpperExp}
    ]
    impl_fmt!(
        {$Format:ident}
    ) => {
        impl<X: fmt::$Format, const N: usize> fmt::$Format for Vector<X, N> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (i, x) in self.0.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    fmt::$Format::fmt(x, f)?;
                }
                write!(f, "]")
            }
        }

        // one row per line
        impl<X: fmt::$Format, const R: usize, const C: usize> fmt::$Format for Matrix<X, R, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                for (i, row) in self.0.iter().enumerate() {
                    if i != 0 {
                        writeln!(f)?;
                    }
                    fmt::$Format::fmt(row, f)?;
                }
                Ok(())
            }
        }
    }
}

// ---------------------------------------------------------------------------
