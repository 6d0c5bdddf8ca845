//! Dense row-major matrices of arbitrary shape.
//!
//! Shapes are checked at runtime: products need matching inner dimensions,
//! and determinant, minors, cofactors and inverses need a square matrix.
//! The determinant is computed by cofactor expansion along the first row,
//! recursing through submatrices down to the 2x2 base case.

use std::fmt;
use std::ops::{Index, IndexMut};

use log::trace;
use serde::{Deserialize, Serialize};

use crate::approx_eq;
use crate::error::{MathError, Result};
use crate::tuple::Tuple;

/// A `rows x cols` matrix of `f64`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

// Deserialized matrices go through the same shape check as `Matrix::new`.
#[derive(Deserialize)]
struct RawMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl TryFrom<RawMatrix> for Matrix {
    type Error = MathError;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        Matrix::new(raw.rows, raw.cols, raw.data)
    }
}

impl Matrix {
    /// Build a matrix from row-major values.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if rows == 0 || cols == 0 || data.len() != rows * cols {
            return Err(MathError::InvalidShape {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a matrix from fixed-size rows.
    pub fn from_rows<const R: usize, const C: usize>(rows: [[f64; C]; R]) -> Result<Self> {
        let data = rows.iter().flat_map(|row| row.iter().copied()).collect();
        Self::new(R, C, data)
    }

    // Callers pass the nonzero shape of an existing matrix.
    fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// `n x n` identity.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn identity(n: usize) -> Self {
        assert!(n > 0, "identity matrix needs at least one row");
        let mut m = Self::zeros(n, n);
        for i in 0..m.rows {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// True for square matrices.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Entry at `(row, col)`, or `None` outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Matrix product `self * other`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(MathError::DimensionMismatch {
                op: "multiply",
                left: self.shape(),
                right: other.shape(),
            });
        }
        let mut out = Matrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self[(i, k)] * other[(k, j)];
                }
                out[(i, j)] = sum;
            }
        }
        Ok(out)
    }

    /// Product with a tuple treated as a 4x1 column. Requires a 4x4 matrix.
    pub fn multiply_tuple(&self, t: &Tuple) -> Result<Tuple> {
        if self.shape() != (4, 4) {
            return Err(MathError::DimensionMismatch {
                op: "multiply_tuple",
                left: self.shape(),
                right: (4, 1),
            });
        }
        let v = t.to_array();
        let row = |r: usize| (0..4).map(|c| self[(r, c)] * v[c]).sum::<f64>();
        Ok(Tuple::new(row(0), row(1), row(2), row(3)))
    }

    /// Swap rows and columns.
    pub fn transpose(&self) -> Matrix {
        let mut out = Matrix::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out[(j, i)] = self[(i, j)];
            }
        }
        out
    }

    /// Determinant by cofactor expansion along row 0.
    pub fn determinant(&self) -> Result<f64> {
        self.require_square()?;
        match self.rows {
            1 => Ok(self.data[0]),
            2 => Ok(self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]),
            _ => {
                let mut det = 0.0;
                for col in 0..self.cols {
                    det += self[(0, col)] * self.cofactor(0, col)?;
                }
                Ok(det)
            }
        }
    }

    /// Copy with `row` and `col` removed.
    pub fn submatrix(&self, row: usize, col: usize) -> Result<Matrix> {
        self.require_square()?;
        if row >= self.rows || col >= self.cols {
            return Err(MathError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.rows < 2 {
            return Err(MathError::InvalidShape {
                rows: self.rows - 1,
                cols: self.cols - 1,
                len: 0,
            });
        }
        let data = (0..self.rows)
            .filter(|&i| i != row)
            .flat_map(|i| {
                (0..self.cols)
                    .filter(move |&j| j != col)
                    .map(move |j| self[(i, j)])
            })
            .collect();
        Matrix::new(self.rows - 1, self.cols - 1, data)
    }

    /// Determinant of the submatrix at `(row, col)`.
    pub fn minor(&self, row: usize, col: usize) -> Result<f64> {
        self.submatrix(row, col)?.determinant()
    }

    /// Minor negated when `row + col` is odd.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<f64> {
        let minor = self.minor(row, col)?;
        Ok(if (row + col) % 2 == 1 { -minor } else { minor })
    }

    /// True when the determinant is nonzero.
    ///
    /// The test is exact: a determinant of `1e-10` still counts as invertible.
    pub fn is_invertible(&self) -> Result<bool> {
        Ok(self.determinant()? != 0.0)
    }

    /// Inverse via the transposed cofactor matrix over the determinant.
    pub fn inverse(&self) -> Result<Matrix> {
        let det = self.determinant()?;
        trace!("inverting {}x{} matrix, determinant {}", self.rows, self.cols, det);
        if det == 0.0 {
            return Err(MathError::SingularMatrix);
        }
        if self.rows == 1 {
            return Matrix::new(1, 1, vec![1.0 / det]);
        }
        let mut out = Matrix::zeros(self.rows, self.cols);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out[(j, i)] = self.cofactor(i, j)? / det;
            }
        }
        Ok(out)
    }

    fn require_square(&self) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(MathError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(row < self.rows && col < self.cols, "matrix index out of bounds");
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(row < self.rows && col < self.cols, "matrix index out of bounds");
        &mut self.data[row * self.cols + col]
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| approx_eq(*a, *b))
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols) {
            let cells: Vec<String> = row.iter().map(|v| format!("{v:>10.5}")).collect();
            writeln!(f, "| {} |", cells.join(" | "))?;
        }
        Ok(())
    }
}
