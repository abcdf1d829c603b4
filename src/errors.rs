/* ************************************************************************ **
** This file is part of fixed-linalg, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use failure::Fail;

/// Produced by the checked constructors that build a `Vector` or `Matrix`
/// from runtime-sized data.
///
/// Everything else in this crate gets its shapes from the type system, so
/// this is the only error type.
#[derive(Debug, Clone, PartialEq, Eq, Fail)]
pub enum ShapeError {
    #[fail(display = "expected {} elements, got {}", expected, actual)]
    Length { expected: usize, actual: usize },

    #[fail(display = "expected {} rows, got {}", expected, actual)]
    RowCount { expected: usize, actual: usize },

    #[fail(display = "row {} has {} columns, expected {}", row, actual, expected)]
    ColCount { row: usize, expected: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            ShapeError::Length { expected: 3, actual: 2 }.to_string(),
            "expected 3 elements, got 2",
        );
        assert_eq!(
            ShapeError::ColCount { row: 1, expected: 2, actual: 4 }.to_string(),
            "row 1 has 4 columns, expected 2",
        );
    }
}
