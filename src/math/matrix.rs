//! Arbitrary size matrix of `f64` values
//!
//! Values are stored row-major as a `Vec` of rows. Every row is expected to
//! have the same length; this is not checked on construction, but
//! [`Matrix::multiply`] verifies the shapes of both operands before touching
//! any value and reports a [`MatrixError`] instead of indexing out of range.
//!
//! The `Display` output is one line per row with values separated by a single
//! space:
//!
//! ```text
//! 1 2 3
//! 4 5 6
//! ```

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::ops::Mul;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::format::write_joined;

#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Column count of the left operand differs from the row count of the right operand
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },
    /// A row does not have as many values as the first row
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl Error for MatrixError {}

impl Display for MatrixError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::DimensionMismatch {
                left_rows,
                left_cols,
                right_rows,
                right_cols,
            } => write!(
                f,
                "Dimension mismatch: cannot multiply {left_rows}x{left_cols} by {right_rows}x{right_cols}"
            ),
            MatrixError::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "Ragged matrix: row {row} has {found} values, expected {expected}"
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix {
    values: Vec<Vec<f64>>,
}

impl Matrix {
    /// Wraps a pre-built grid, rows as the outer dimension.
    ///
    /// All rows should have the same length.
    pub fn new(values: Vec<Vec<f64>>) -> Self {
        Self { values }
    }

    /// `n`x`n` identity matrix
    pub fn identity(n: usize) -> Self {
        let values = (0..n)
            .map(|r| (0..n).map(|c| if r == c { 1.0 } else { 0.0 }).collect())
            .collect();
        Self { values }
    }

    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Vec<f64>> {
        self.values
    }

    pub fn rows(&self) -> usize {
        self.values.len()
    }

    /// Length of the first row, 0 for an empty matrix
    pub fn cols(&self) -> usize {
        self.values.first().map_or(0, Vec::len)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get(row).and_then(|r| r.get(col)).copied()
    }

    fn check_rectangular(&self) -> Result<(), MatrixError> {
        let expected = self.cols();
        match self
            .values
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != expected)
        {
            Some((row, values)) => Err(MatrixError::RaggedRows {
                row,
                expected,
                found: values.len(),
            }),
            None => Ok(()),
        }
    }

    /// Matrix product `a · b`.
    ///
    /// The result has `a.rows()` rows and `b.cols()` columns. Fails when
    /// `a.cols() != b.rows()` or when either operand is ragged.
    pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
        a.check_rectangular().inspect_err(|e| debug!("left operand: {e}"))?;
        b.check_rectangular().inspect_err(|e| debug!("right operand: {e}"))?;

        let (a_rows, a_cols) = (a.rows(), a.cols());
        let (b_rows, b_cols) = (b.rows(), b.cols());
        if a_cols != b_rows {
            let err = MatrixError::DimensionMismatch {
                left_rows: a_rows,
                left_cols: a_cols,
                right_rows: b_rows,
                right_cols: b_cols,
            };
            debug!("{err}");
            return Err(err);
        }

        let mut result = vec![vec![0.0f64; b_cols]; a_rows];
        for (r, row) in result.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                for i in 0..a_cols {
                    *cell += a.values[r][i] * b.values[i][c];
                }
            }
        }
        Ok(Matrix { values: result })
    }
}

/// One row per line, values separated by a single space
impl Display for Matrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in &self.values {
            write_joined(f, row, " ")?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl From<Vec<Vec<f64>>> for Matrix {
    fn from(values: Vec<Vec<f64>>) -> Self {
        Matrix::new(values)
    }
}

impl Mul for &Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn mul(self, rhs: &Matrix) -> Self::Output {
        Matrix::multiply(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn m(values: &[&[f64]]) -> Matrix {
        Matrix::new(values.iter().map(|r| r.to_vec()).collect())
    }

    #[test]
    fn test_dimensions() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        assert_eq!(a.rows(), 2);
        assert_eq!(a.cols(), 3);
        assert_eq!(a.get(1, 2), Some(6.0));
        assert_eq!(a.get(2, 0), None);
        assert_eq!(a.get(0, 3), None);

        let empty = Matrix::default();
        assert_eq!(empty.rows(), 0);
        assert_eq!(empty.cols(), 0);
    }

    #[test]
    fn test_identity() {
        assert_eq!(
            Matrix::identity(3),
            m(&[&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0]])
        );
        assert_eq!(Matrix::identity(0), Matrix::default());
    }

    #[test]
    fn test_multiply() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let b = m(&[&[7.0, 8.0], &[9.0, 10.0], &[11.0, 12.0]]);
        let product = Matrix::multiply(&a, &b).unwrap();
        assert_eq!(product, m(&[&[58.0, 64.0], &[139.0, 154.0]]));
    }

    #[test]
    fn test_multiply_is_not_commutative() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = m(&[&[0.0, 1.0], &[1.0, 0.0]]);
        assert_eq!((&a * &b).unwrap(), m(&[&[2.0, 1.0], &[4.0, 3.0]]));
        assert_eq!((&b * &a).unwrap(), m(&[&[3.0, 4.0], &[1.0, 2.0]]));
    }

    #[test]
    fn test_multiply_row_by_column() {
        let row = m(&[&[1.0, 2.0, 3.0]]);
        let col = m(&[&[4.0], &[5.0], &[6.0]]);
        assert_eq!(Matrix::multiply(&row, &col).unwrap(), m(&[&[32.0]]));
        let outer = Matrix::multiply(&col, &row).unwrap();
        assert_eq!(outer.rows(), 3);
        assert_eq!(outer.cols(), 3);
        assert_eq!(outer.get(2, 1), Some(12.0));
    }

    #[test]
    fn test_multiply_by_identity() {
        let a = m(&[&[1.5, -2.0, 3.0], &[4.0, 0.0, 6.25]]);
        assert_eq!(Matrix::multiply(&a, &Matrix::identity(3)).unwrap(), a);
        assert_eq!(Matrix::multiply(&Matrix::identity(2), &a).unwrap(), a);
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let b = m(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0], &[7.0, 8.0]]);
        assert_eq!(
            Matrix::multiply(&a, &b),
            Err(MatrixError::DimensionMismatch {
                left_rows: 2,
                left_cols: 3,
                right_rows: 4,
                right_cols: 2,
            })
        );
    }

    #[test]
    fn test_ragged_operand() {
        let ragged = m(&[&[1.0, 2.0], &[3.0]]);
        let b = Matrix::identity(2);
        assert_eq!(
            Matrix::multiply(&ragged, &b),
            Err(MatrixError::RaggedRows {
                row: 1,
                expected: 2,
                found: 1,
            })
        );
        assert!(Matrix::multiply(&b, &ragged).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = MatrixError::DimensionMismatch {
            left_rows: 2,
            left_cols: 3,
            right_rows: 4,
            right_cols: 2,
        };
        assert_eq!(
            err.to_string(),
            "Dimension mismatch: cannot multiply 2x3 by 4x2"
        );
        let err = MatrixError::RaggedRows {
            row: 1,
            expected: 2,
            found: 1,
        };
        assert_eq!(
            err.to_string(),
            "Ragged matrix: row 1 has 1 values, expected 2"
        );
    }

    #[test]
    fn test_display() {
        let a = m(&[&[1.0, 2.5, -3.0], &[0.0, -0.0, f64::INFINITY]]);
        assert_eq!(a.to_string(), "1 2.5 -3\n0 0 Infinity\n");
        assert_eq!(Matrix::default().to_string(), "");
    }

    #[test]
    fn test_display_extreme_magnitudes() {
        let a = m(&[&[1e21, 1e-7], &[-3.5e25, 0.000001]]);
        assert_eq!(a.to_string(), "1e+21 1e-7\n-3.5e+25 0.000001\n");
    }

    #[test]
    fn test_values_round_trip() {
        let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let a = Matrix::from(rows.clone());
        assert_eq!(a.values(), rows.as_slice());
        let product = Matrix::multiply(&a, &Matrix::identity(2)).unwrap();
        assert_eq!(product.into_values(), rows);
    }

    #[test]
    fn test_serde_is_nested_arrays() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "[[1.0,2.0],[3.0,4.0]]");
        let back: Matrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }
}
