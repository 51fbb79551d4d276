// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Dense matrices with 1-indexed `(row, column)` access.

use crate::{
    array2d::Array2D,
    error::{Error, Result},
};
use num_traits::Num;
use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul};

/// A dense `rows x cols` matrix.
///
/// ```
/// use num_rational::Rational64;
/// use polykit::Matrix;
///
/// let m = Matrix::from_rows(vec![
///     vec![Rational64::from(2), Rational64::from(1)],
///     vec![Rational64::from(7), Rational64::from(4)],
/// ])
/// .unwrap();
/// assert_eq!(m.determinant().unwrap(), Rational64::from(1));
/// assert_eq!(m.checked_mul(&m.inverse().unwrap()).unwrap(), Matrix::identity(2));
/// ```
#[derive(Clone, Hash, Eq, PartialEq, Debug)]
pub struct Matrix<T> {
    // x is the column, y the row, both 0-based
    elements: Array2D<T>,
}

impl<T: Clone + Num> Matrix<T> {
    /// builds a matrix from equal-length rows
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(Error::EmptyInput);
        }
        if let Some(row) = rows.iter().find(|row| row.len() != cols) {
            return Err(Error::DimensionMismatch {
                lhs: (1, cols),
                rhs: (1, row.len()),
            });
        }
        let row_count = rows.len();
        Ok(Self::from_fn(row_count, cols, |row, col| rows[row - 1][col - 1].clone()))
    }
    /// `f(row, col)` with 1-based indices
    pub fn from_fn<F: FnMut(usize, usize) -> T>(rows: usize, cols: usize, mut f: F) -> Self {
        Self {
            elements: Array2D::from_fn(cols, rows, |x, y| f(y + 1, x + 1)),
        }
    }
    pub fn zero(rows: usize, cols: usize) -> Self {
        Self::from_fn(rows, cols, |_, _| T::zero())
    }
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |row, col| if row == col { T::one() } else { T::zero() })
    }
    pub fn rows(&self) -> usize {
        self.elements.y_size()
    }
    pub fn cols(&self) -> usize {
        self.elements.x_size()
    }
    /// `(rows, cols)`
    pub fn dim(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }
    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row == 0 || col == 0 {
            return None;
        }
        self.elements.get(col - 1, row - 1)
    }
    pub fn row(&self, row: usize) -> Vec<T> {
        (1..=self.cols()).map(|col| self[(row, col)].clone()).collect()
    }
    pub fn column(&self, col: usize) -> Vec<T> {
        (1..=self.rows()).map(|row| self[(row, col)].clone()).collect()
    }
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.cols(), self.rows(), |row, col| self[(col, row)].clone())
    }
    /// the matrix with `row` and `col` removed
    pub fn minor(&self, row: usize, col: usize) -> Self {
        assert!(row >= 1 && row <= self.rows());
        assert!(col >= 1 && col <= self.cols());
        Self::from_fn(self.rows() - 1, self.cols() - 1, |i, j| {
            self[(i + (i >= row) as usize, j + (j >= col) as usize)].clone()
        })
    }
    fn check_square(&self) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(Error::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }
    fn cofactor(&self, row: usize, col: usize) -> T {
        let minor = self.minor(row, col).expanded_determinant();
        if (row + col) % 2 == 0 {
            minor
        } else {
            T::zero() - minor
        }
    }
    // cofactor expansion along the first row, the caller checks squareness
    fn expanded_determinant(&self) -> T {
        match self.rows() {
            0 => T::one(),
            1 => self[(1, 1)].clone(),
            _ => (1..=self.cols()).fold(T::zero(), |retval, col| {
                retval + self[(1, col)].clone() * self.cofactor(1, col)
            }),
        }
    }
    pub fn determinant(&self) -> Result<T> {
        self.check_square()?;
        Ok(self.expanded_determinant())
    }
    /// the adjugate: the transpose of the cofactor matrix
    pub fn adjoint(&self) -> Result<Self> {
        self.check_square()?;
        if self.rows() == 1 {
            return Ok(Self::identity(1));
        }
        Ok(Self::from_fn(self.rows(), self.cols(), |row, col| {
            self.cofactor(col, row)
        }))
    }
    pub fn inverse(&self) -> Result<Self> {
        let determinant = self.determinant()?;
        if determinant.is_zero() {
            return Err(Error::Singular);
        }
        let adjoint = self.adjoint()?;
        Ok(Self {
            elements: adjoint.elements.map(|v| v.clone() / determinant.clone()),
        })
    }
    pub fn scale(&self, factor: &T) -> Self {
        Self {
            elements: self.elements.map(|v| v.clone() * factor.clone()),
        }
    }
    pub fn checked_add(&self, rhs: &Self) -> Result<Self> {
        if self.dim() != rhs.dim() {
            return Err(Error::DimensionMismatch {
                lhs: self.dim(),
                rhs: rhs.dim(),
            });
        }
        Ok(Self::from_fn(self.rows(), self.cols(), |row, col| {
            self[(row, col)].clone() + rhs[(row, col)].clone()
        }))
    }
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self> {
        if self.cols() != rhs.rows() {
            return Err(Error::DimensionMismatch {
                lhs: self.dim(),
                rhs: rhs.dim(),
            });
        }
        Ok(Self::from_fn(self.rows(), rhs.cols(), |row, col| {
            Self::dot_unchecked(&self.row(row), &rhs.column(col))
        }))
    }
    /// integer powers, negative powers go through the inverse
    pub fn pow(&self, exponent: i64) -> Result<Self> {
        self.check_square()?;
        let mut base = if exponent < 0 {
            self.inverse()?
        } else {
            self.clone()
        };
        let mut exponent = exponent.unsigned_abs();
        let mut retval = Self::identity(self.rows());
        while exponent != 0 {
            if exponent & 1 != 0 {
                retval = retval.checked_mul(&base)?;
            }
            exponent >>= 1;
            if exponent != 0 {
                base = base.checked_mul(&base)?;
            }
        }
        Ok(retval)
    }
    fn dot_unchecked(a: &[T], b: &[T]) -> T {
        a.iter()
            .zip(b)
            .fold(T::zero(), |retval, (a, b)| retval + a.clone() * b.clone())
    }
    pub fn dot(a: &[T], b: &[T]) -> Result<T> {
        if a.len() != b.len() {
            return Err(Error::DimensionMismatch {
                lhs: (1, a.len()),
                rhs: (1, b.len()),
            });
        }
        Ok(Self::dot_unchecked(a, b))
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;
    /// 1-based `(row, col)`
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row >= 1 && col >= 1, "matrix indices start at 1");
        &self.elements[(col - 1, row - 1)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row >= 1 && col >= 1, "matrix indices start at 1");
        &mut self.elements[(col - 1, row - 1)]
    }
}

impl<'a, 'b, T: Clone + Num> Add<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        self.checked_add(rhs).expect("matrix dimension mismatch")
    }
}

impl<'a, 'b, T: Clone + Num> Mul<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        self.checked_mul(rhs).expect("matrix dimension mismatch")
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    /// one line per row, cells right-aligned to their column's width
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cells = self.elements.map(ToString::to_string);
        let widths: Vec<usize> = (0..cells.x_size())
            .map(|x| {
                (0..cells.y_size())
                    .map(|y| cells[(x, y)].chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();
        for y in 0..cells.y_size() {
            if y != 0 {
                writeln!(f)?;
            }
            write!(f, "|")?;
            for (x, width) in widths.iter().enumerate() {
                if x != 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", cells[(x, y)], width = width)?;
            }
            write!(f, "|")?;
        }
        Ok(())
    }
}
