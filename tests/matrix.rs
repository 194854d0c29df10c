mod common;

use common::init_logger;
use pretty_assertions::assert_eq;
use testresult::TestResult;
use vqme::{Matrix, MatrixError};

#[test]
fn multiply_and_display() -> TestResult {
    init_logger();
    let a = Matrix::new(vec![vec![1.0, 0.0, 2.0], vec![-1.0, 3.0, 1.0]]);
    let b = Matrix::new(vec![vec![3.0, 1.0], vec![2.0, 1.0], vec![1.0, 0.0]]);

    let product = Matrix::multiply(&a, &b)?;

    assert_eq!(product.to_string(), "5 1\n4 2\n");
    Ok(())
}

#[test]
fn multiply_by_identity_is_unchanged() -> TestResult {
    let a = Matrix::new(vec![
        vec![0.5, -1.25, 3.0, 7.0],
        vec![2.0, 0.0, -4.5, 1.0],
        vec![9.0, 8.0, 7.0, 6.0],
    ]);
    assert_eq!((&a * &Matrix::identity(4))?, a);
    assert_eq!((&Matrix::identity(3) * &a)?, a);
    Ok(())
}

#[test]
fn two_by_three_times_four_by_two_fails() {
    init_logger();
    let a = Matrix::new(vec![vec![1.0; 3]; 2]);
    let b = Matrix::new(vec![vec![1.0; 2]; 4]);

    let err = Matrix::multiply(&a, &b).unwrap_err();

    assert_eq!(
        err,
        MatrixError::DimensionMismatch {
            left_rows: 2,
            left_cols: 3,
            right_rows: 4,
            right_cols: 2,
        }
    );
    assert_eq!(
        err.to_string(),
        "Dimension mismatch: cannot multiply 2x3 by 4x2"
    );
}

#[test]
fn error_is_std_error() {
    fn fails() -> Result<Matrix, Box<dyn std::error::Error>> {
        let a = Matrix::new(vec![vec![1.0, 2.0]]);
        Ok(Matrix::multiply(&a, &a)?)
    }
    assert!(fails().is_err());
}
