/* ************************************************************************ **
** This file is part of fixed-linalg, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

extern crate failure;
extern crate rand;

#[macro_use] extern crate fixed_linalg_assert_close;
extern crate fixed_linalg;

use ::fixed_linalg::{Vector, Matrix, V3, M33, ShapeError};
use ::fixed_linalg::{dot, cross};
use ::failure::Error;

fn random_i<const N: usize>() -> Vector<i64, N> {
    Vector::from_fn(|_| (::rand::random::<u16>() as i64) - 30_000)
}

fn random_f<const N: usize>() -> Vector<f64, N> {
    Vector::from_fn(|_| 20.0 * ::rand::random::<f64>() - 10.0)
}

#[test]
fn vector_addition() {
    assert_eq!(Vector([1, 2, 3]) + Vector([4, 5, 6]), Vector([5, 7, 9]));
}

#[test]
fn orthogonal_dot() {
    assert_eq!(dot(&Vector([1, 0, 0]), &Vector([0, 1, 0])), 0);
}

#[test]
fn unit_cross() {
    assert_eq!(cross(&Vector([1, 0, 0]), &Vector([0, 1, 0])), Vector([0, 0, 1]));
}

#[test]
fn identity_transform() {
    let eye: M33<i32> = Matrix::from_rows(&[[1, 0, 0], [0, 1, 0], [0, 0, 1]]);
    assert_eq!(eye.transform(&Vector([7, 8, 9])), Vector([7, 8, 9]));
    assert_eq!(&eye * &Vector([7, 8, 9]), Vector([7, 8, 9]));
}

#[test]
fn transpose_2x2() {
    let m = Matrix::from_array([[1, 2], [3, 4]]);
    assert_eq!(m.transpose(), Matrix::from_array([[1, 3], [2, 4]]));
}

#[test]
fn add_sub_roundtrip_and_commute() {
    for _ in 0..20 {
        let a: Vector<i64, 5> = random_i();
        let b: Vector<i64, 5> = random_i();
        assert_eq!((a + b) - b, a);
        assert_eq!(a + b, b + a);

        let mut c = a;
        c += &b;
        c -= b;
        assert_eq!(c, a);
    }
}

#[test]
fn zero_vector() {
    let z = V3::<f64>::zero();
    assert_eq!(dot(&z, &z), 0.0);
    assert_eq!(z.magnitude(), 0.0);
    assert_eq!(z.normalized(), z);
}

#[test]
fn lerp_endpoints() {
    for _ in 0..10 {
        let start: V3 = random_f();
        let end: V3 = random_f();
        assert_eq!(V3::lerp(&start, &end, 0.0), start);
        // `start + (end - start)` can round in the last place
        assert_close!(abs=1e-12, end.0, V3::lerp(&start, &end, 1.0).0);
    }
}

#[test]
fn rectangular_products() {
    // (2x3) * (3x4) = (2x4)
    let a = Matrix::from_array([
        [1, 0, 2],
        [0, 3, -1],
    ]);
    let b = Matrix::from_array([
        [1, 2, 0, 1],
        [0, 1, 1, 0],
        [4, 0, 1, 2],
    ]);
    let ab: Matrix<i32, 2, 4> = &a * &b;
    assert_eq!(ab, Matrix::from_array([
        [9, 2, 2, 5],
        [-4, 3, 2, -2],
    ]));

    // the product agrees with transforming each column
    for c in 0..4 {
        assert_eq!(ab.col(c), a.transform(&b.col(c)));
    }

    // (AB)^T == B^T A^T
    assert_eq!(ab.transpose(), b.transpose() * a.transpose());
}

#[test]
fn square_product_assign() {
    let rot90 = M33::from_rows(&[[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
    let mut m: M33 = M33::eye();
    for _ in 0..4 {
        m *= &rot90;
    }
    assert_eq!(m, M33::eye());

    let mut v: V3 = Vector([1.0, 2.0, 3.0]);
    v *= &rot90;
    assert_eq!(v, Vector([2.0, -1.0, 3.0]));
}

#[test]
fn shape_errors_convert_to_failure() {
    fn read_rows(rows: &[Vec<f64>]) -> Result<M33, Error> {
        Ok(M33::try_from_rows(rows)?)
    }

    let ragged = vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0], vec![0.0, 0.0, 1.0]];
    let err = read_rows(&ragged).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ShapeError>(),
        Some(&ShapeError::ColCount { row: 1, expected: 3, actual: 2 }),
    );

    let ok = vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0, 0.0], vec![0.0, 0.0, 1.0]];
    assert_eq!(read_rows(&ok).unwrap(), M33::eye());
}
