/* ************************************************************************ **
** This file is part of fixed-linalg, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::convert::TryFrom;

use crate::errors::ShapeError;
use crate::traits::{Semiring, Ring, Field};
use crate::traits::internal::{PrimitiveSemiring, PrimitiveRing, PrimitiveFloat};
use crate::types::*;

use num_traits::Zero;

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

impl<X, const N: usize> Vector<X, N> {
    /// Wrap an array.
    #[inline(always)]
    pub const fn new(arr: [X; N]) -> Self
    { Vector(arr) }

    /// Construct a fixed-size vector from a function on indices.
    #[inline(always)]
    pub fn from_fn<F>(f: F) -> Self
    where F: FnMut(usize) -> X,
    { Vector(std::array::from_fn(f)) }

    /// Apply a function to each element.
    #[inline]
    pub fn map<B, F>(self, f: F) -> Vector<B, N>
    where F: FnMut(X) -> B,
    { Vector(self.0.map(f)) }

    /// Combine two vectors elementwise.
    ///
    /// Every elementwise operator on vectors (and, row by row, on matrices)
    /// is defined in terms of this.
    #[inline]
    pub fn zip_with<B, F>(&self, other: &Self, mut f: F) -> Vector<B, N>
    where X: Copy, F: FnMut(X, X) -> B,
    { Vector::from_fn(|i| f(self.0[i], other.0[i])) }

    /// In-place counterpart of `map`.
    #[inline]
    pub fn update_each<F>(&mut self, mut f: F)
    where X: Copy, F: FnMut(X) -> X,
    {
        for x in &mut self.0 {
            *x = f(*x);
        }
    }

    /// In-place counterpart of `zip_with`.
    #[inline]
    pub fn update_with<F>(&mut self, other: &Self, mut f: F)
    where X: Copy, F: FnMut(X, X) -> X,
    {
        for (x, &y) in self.0.iter_mut().zip(&other.0) {
            *x = f(*x, y);
        }
    }
}

impl<X: Semiring, const N: usize> Vector<X, N>
where X: PrimitiveSemiring,
{
    /// Get a zero vector.
    #[inline(always)]
    pub fn zero() -> Self
    { Vector([X::zero(); N]) }

    /// Construct from a possibly shorter or longer list of values.
    ///
    /// Missing trailing elements are zero, and excess values are ignored.
    /// This makes short literals like `V4::from_slice(&[x, y])` possible.
    ///
    /// For a constructor that insists on the exact length, see
    /// `Vector::try_from`.
    #[inline]
    pub fn from_slice(values: &[X]) -> Self {
        let mut out = Self::zero();
        for (dest, &src) in out.0.iter_mut().zip(values) {
            *dest = src;
        }
        out
    }

    /// Get a basis vector.
    ///
    /// # Panics
    ///
    /// Panics if `i >= N`.
    #[inline]
    pub fn axis_unit(i: usize) -> Self {
        let mut v = Self::zero();
        *v.0.get_mut(i)
            .unwrap_or_else(|| panic!("Invalid axis for {}d vector: {}", N, i)) = X::one();
        v
    }

    /// Get the inner product of two vectors.
    ///
    /// It is recommended you write this as `Vector::dot(a, b)`, rather than `a.dot(b)`.
    #[inline]
    pub fn dot(&self, other: &Self) -> X
    { self.iter().zip(other.iter()).fold(X::zero(), |acc, (&a, &b)| acc + a * b) }

    /// Get the vector's squared magnitude.
    #[inline(always)]
    pub fn sqnorm(&self) -> X
    { self.dot(self) }

    /// Clamp each element into `[lo, hi]`.
    ///
    /// The result is unspecified (but not a panic) if `lo > hi`.
    #[inline]
    pub fn clamp(self, lo: X, hi: X) -> Self {
        self.map(|x| {
            if x < lo { lo }
            else if x > hi { hi }
            else { x }
        })
    }
}

impl<X: Ring, const N: usize> Vector<X, N>
where X: PrimitiveRing,
{
    /// Linear interpolation, `start + (end - start) * t`.
    ///
    /// `t` is not clamped, so values outside `[0, 1]` extrapolate.
    #[inline]
    pub fn lerp(start: &Self, end: &Self, t: X) -> Self
    { start + (end - start) * t }

    /// Reflect this vector about a plane with the given normal.
    ///
    /// `normal` is assumed to be a unit vector; it is not normalized here.
    #[inline]
    pub fn reflect(&self, normal: &Self) -> Self
    { self - normal * (X::two() * self.dot(normal)) }
}

impl<X: Field, const N: usize> Vector<X, N>
where X: PrimitiveFloat,
{
    /// Get the vector's magnitude.
    #[inline(always)]
    pub fn magnitude(&self) -> X
    { self.sqnorm().sqrt() }

    /// Get a unit vector pointing in the same direction.
    ///
    /// A vector of zero magnitude is returned unchanged.
    #[inline]
    pub fn normalized(&self) -> Self {
        let mag = self.magnitude();
        if mag > X::zero() {
            self / mag
        } else {
            trace!("normalized: {}d vector has zero magnitude; returning it as-is", N);
            *self
        }
    }

    /// Normalize the vector in place, with the same zero-vector behavior as
    /// `normalized`.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// The magnitude of `a - b`.
    #[inline]
    pub fn distance(a: &Self, b: &Self) -> X
    { (a - b).magnitude() }

    /// Get the shortest angle (as a value in `[0, pi]`) between this vector and another.
    #[inline]
    pub fn angle_to(&self, other: &Self) -> X {
        let arg = self.dot(other) / X::sqrt(self.sqnorm() * other.sqnorm());
        X::acos(arg.min(X::one()).max(-X::one()))
    }

    /// Get the part of the vector that is parallel to `r`.
    #[inline]
    pub fn par(&self, r: &Self) -> Self
    { r * (self.dot(r) / r.dot(r)) }

    /// Get the part of the vector that is perpendicular to `r`.
    ///
    /// Be aware that chained calls to `perp` can have **spectacularly bad**
    /// numerical stability issues; you cannot trust that `c.perp(a).perp(b)`
    /// is even *remotely* orthogonal to `a` unless `b` is orthogonal to `a`.
    /// (for 3d vectors, try `c.par(a.cross(b))` instead.)
    #[inline]
    pub fn perp(&self, r: &Self) -> Self
    { self - self.par(r) }
}

impl<X: Ring> V3<X>
where X: PrimitiveRing,
{
    /// Cross-product. Only defined on 3-dimensional vectors.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Vector([
            self[1] * other[2] - self[2] * other[1],
            self[2] * other[0] - self[0] * other[2],
            self[0] * other[1] - self[1] * other[0],
        ])
    }
}

/// Inner product of vectors.
///
/// This is basically just `Vector::dot` as a free function,
/// because everyone loves symmetry.
#[inline(always)]
pub fn dot<X: Semiring, const N: usize>(a: &Vector<X, N>, b: &Vector<X, N>) -> X
where X: PrimitiveSemiring,
{ a.dot(b) }

/// Cross product of 3-dimensional vectors, as a free function.
#[inline(always)]
pub fn cross<X: Ring>(a: &V3<X>, b: &V3<X>) -> V3<X>
where X: PrimitiveRing,
{ a.cross(b) }

// -------------------------- END PUBLIC API ---------------------------------
// ---------------------------------------------------------------------------

impl<X: Semiring, const N: usize> Zero for Vector<X, N>
where X: PrimitiveSemiring,
{
    #[inline]
    fn zero() -> Self
    { Vector([X::zero(); N]) }

    #[inline]
    fn is_zero(&self) -> bool
    { self.iter().all(Zero::is_zero) }
}

/// Checked construction from a slice of exactly the right length.
impl<'a, X: Copy, const N: usize> TryFrom<&'a [X]> for Vector<X, N> {
    type Error = ShapeError;

    fn try_from(values: &'a [X]) -> Result<Self, ShapeError> {
        <[X; N]>::try_from(values)
            .map(Vector)
            .map_err(|_| ShapeError::Length { expected: N, actual: values.len() })
    }
}

// stdlib integration

impl<X: Semiring, const N: usize> std::iter::Sum for Vector<X, N>
where X: PrimitiveSemiring,
{
    fn sum<I: Iterator<Item=Vector<X, N>>>(iter: I) -> Self {
        iter.fold(Vector::zero(), |a, b| a + b)
    }
}

impl<'a, X: Semiring, const N: usize> std::iter::Sum<&'a Vector<X, N>> for Vector<X, N>
where X: PrimitiveSemiring,
{
    fn sum<I: Iterator<Item=&'a Vector<X, N>>>(iter: I) -> Self {
        iter.fold(Vector::zero(), |a, b| a + b)
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn random_v<const N: usize>() -> Vector<f64, N> {
        Vector::from_fn(|_| 20.0 * ::rand::random::<f64>() - 10.0)
    }

    #[test]
    fn from_slice_pads_and_truncates() {
        assert_eq!(V4::from_slice(&[1, 2]), Vector([1, 2, 0, 0]));
        assert_eq!(V2::from_slice(&[1, 2, 3, 4]), Vector([1, 2]));
        assert_eq!(V3::<f64>::from_slice(&[]), V3::zero());
    }

    #[test]
    fn try_from_slice() {
        let v: Result<V3<i32>, _> = V3::try_from(&[1, 2, 3][..]);
        assert_eq!(v, Ok(Vector([1, 2, 3])));

        let v: Result<V3<i32>, _> = V3::try_from(&[1, 2][..]);
        assert_eq!(v, Err(ShapeError::Length { expected: 3, actual: 2 }));
    }

    #[test]
    fn axis_unit() {
        assert_eq!(V3::<i32>::axis_unit(1), Vector([0, 1, 0]));
    }

    #[test]
    #[should_panic(expected = "Invalid axis")]
    fn axis_unit_out_of_range() {
        let _ = V2::<f64>::axis_unit(2);
    }

    #[test]
    fn dot_of_empty_is_zero() {
        let a = Vector::<i32, 0>::zero();
        assert_eq!(dot(&a, &a), 0);
    }

    #[test]
    fn dot_product() {
        assert_eq!(dot(&Vector([1, 0, 0]), &Vector([0, 1, 0])), 0);
        assert_eq!(dot(&Vector([1, 2, 3]), &Vector([4, -5, 6])), 12);
    }

    #[test]
    fn prop_dot_commutes() {
        for _ in 0..10 {
            let a: V4 = random_v();
            let b: V4 = random_v();
            assert_eq!(dot(&a, &b), dot(&b, &a));
        }
    }

    #[test]
    fn zero_vector_magnitude() {
        let z = V3::<f64>::zero();
        assert_eq!(dot(&z, &z), 0.0);
        assert_eq!(z.magnitude(), 0.0);
        assert!(z.is_zero());
    }

    #[test]
    fn normalize_zero_vector_is_noop() {
        let z = V3::<f64>::zero();
        assert_eq!(z.normalized(), z);

        let mut w = z;
        w.normalize();
        assert_eq!(w, z);
        assert!(!w.iter().any(|x| x.is_nan()));
    }

    #[test]
    fn prop_normalized_is_unit() {
        for _ in 0..10 {
            let v: V3 = random_v();
            assert_close!(abs=1e-10, 1.0, v.normalized().magnitude());
        }
        assert_close!(abs=1e-6, 1.0f32, Vector([3.0f32, 4.0]).normalized().magnitude());
    }

    #[test]
    fn normalize_returns_receiver() {
        let mut v: V3 = Vector([3.0, 0.0, 4.0]);
        *v.normalize() *= 10.0;
        assert_close!(abs=1e-12, [6.0, 0.0, 8.0], v.0);
    }

    #[test]
    fn distance() {
        let a = Vector([1.0, 1.0]);
        let b = Vector([4.0, 5.0]);
        assert_eq!(V2::distance(&a, &b), 5.0);
        assert_eq!(V2::distance(&b, &a), 5.0);
        assert_eq!(a, Vector([1.0, 1.0]));
    }

    #[test]
    fn cross_product() {
        let x = Vector([1, 0, 0]);
        let y = Vector([0, 1, 0]);
        assert_eq!(x.cross(&y), Vector([0, 0, 1]));
        assert_eq!(cross(&y, &x), Vector([0, 0, -1]));
    }

    #[test]
    fn prop_cross_anticommutes() {
        for _ in 0..10 {
            let a: V3 = random_v();
            let b: V3 = random_v();
            assert_eq!(a.cross(&b), -b.cross(&a));
        }
    }

    #[test]
    fn prop_clamp_bounds() {
        for _ in 0..10 {
            let v: V4 = random_v();
            let c = v.clamp(-2.5, 3.0);
            assert!(c.iter().all(|&x| -2.5 <= x && x <= 3.0));
            for i in 0..4 {
                if -2.5 <= v[i] && v[i] <= 3.0 {
                    assert_eq!(c[i], v[i]);
                }
            }
        }
        assert_eq!(Vector([-5, 0, 5]).clamp(-1, 1), Vector([-1, 0, 1]));
    }

    #[test]
    fn lerp() {
        let start = Vector([1.0, 2.0, 3.0]);
        let end = Vector([5.0, -2.0, 3.5]);
        assert_eq!(V3::lerp(&start, &end, 0.0), start);
        assert_eq!(V3::lerp(&start, &end, 1.0), end);
        assert_eq!(V3::lerp(&start, &end, 0.5), Vector([3.0, 0.0, 3.25]));
        // extrapolation
        assert_eq!(V3::lerp(&start, &end, 2.0), Vector([9.0, -6.0, 4.0]));
    }

    #[test]
    fn reflect() {
        let v = Vector([1.0, -1.0, 0.0]);
        let n = Vector([0.0, 1.0, 0.0]);
        assert_eq!(v.reflect(&n), Vector([1.0, 1.0, 0.0]));

        // the normal is taken at face value
        let n2 = Vector([0.0, 2.0, 0.0]);
        assert_eq!(v.reflect(&n2), Vector([1.0, 7.0, 0.0]));
    }

    #[test]
    fn angle() {
        let a: V3 = Vector([0.5, 0.0,  0.0]);
        let b: V3 = Vector([8.0, 0.0, -8.0]);

        assert_close!(45.0, a.angle_to(&b).to_degrees());
    }

    #[test]
    fn prop_perp_plus_par() {
        for _ in 0..10 {
            let a: V3 = random_v();
            let b: V3 = random_v();
            (a.perp(&b) + a.par(&b) - a).iter().for_each(|&x| {
                assert_close!(abs=1e-10, 0.0, x);
            });
        }
    }

    #[test]
    fn prop_perp_is_perp() {
        for _ in 0..10 {
            let a: V3 = random_v();
            let b: V3 = random_v();
            assert_close!(abs=1e-10, 0.0, dot(&a.perp(&b), &b));
        }
    }

    #[test]
    fn combinators() {
        let a = Vector([1, 2, 3]);
        let b = Vector([10, 20, 30]);
        assert_eq!(a.zip_with(&b, |x, y| y - x), Vector([9, 18, 27]));
        assert_eq!(a.map(|x| x as f64 / 2.0), Vector([0.5, 1.0, 1.5]));

        let mut c = a;
        c.update_with(&b, |x, y| x * y);
        assert_eq!(c, Vector([10, 40, 90]));
        c.update_each(|x| x + 1);
        assert_eq!(c, Vector([11, 41, 91]));
    }

    #[test]
    fn sum() {
        let vs = vec![Vector([1, 2]), Vector([3, 4]), Vector([5, 6])];
        assert_eq!(vs.iter().sum::<V2<i32>>(), Vector([9, 12]));
        assert_eq!(vs.into_iter().sum::<V2<i32>>(), Vector([9, 12]));
        assert_eq!(Vec::<V2<i32>>::new().into_iter().sum::<V2<i32>>(), V2::zero());
    }
}
