// This file is part of seqlib.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `Matrix<T, R, C>`: an `R x C` row-major matrix over a [`FixedArray`].

// Crate imports
use crate::{algorithm, display, error::Error, fixed_array::FixedArray};

// External imports - num-traits
use num_traits::Zero;

// Core imports
use core::{
    fmt,
    ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Sub, SubAssign},
};

/// A fixed-size matrix stored row-major in one contiguous block.
///
/// Element `(row, col)` lives at linear index `row * C + col`, so the matrix
/// can be read either as a flat sequence of `R * C` values ([`at`],
/// `m[i]`, [`iter`]) or cell by cell ([`cell`], `m[(row, col)]`).
///
/// Arithmetic mirrors [`FixedVector`](crate::FixedVector): element-wise
/// `+`/`-` between equal shapes, scalar `*`, and scalar `/` returning
/// [`Error::DivideByZero`] for a zero divisor.
///
/// [`at`]: Matrix::at
/// [`iter`]: Matrix::iter
/// [`cell`]: Matrix::cell
///
/// # Examples
///
/// ```rust
/// use seqlib::{Error, Matrix};
///
/// let m: Matrix<i32, 3, 3> = Matrix::from_slice(&[1, 2, 3, 4, 5, 6, 7, 8, 9])?;
/// assert_eq!(m.cell(1, 2), Ok(&6));
/// assert_eq!(m.cell(1, 3), Err(Error::IndexOutOfRange));
/// assert_eq!(m[(2, 0)], 7);
/// assert_eq!(m.to_string(), "(1,2,3)\n(4,5,6)\n(7,8,9)\n");
/// assert_eq!(m / 0, Err(Error::DivideByZero));
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix<T, const R: usize, const C: usize> {
    rows: FixedArray<[T; C], R>,
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    pub const ROWS: usize = R;
    pub const COLS: usize = C;

    /// Builds a matrix from its rows.
    #[inline]
    pub const fn from_rows(rows: [[T; C]; R]) -> Self {
        Self {
            rows: FixedArray::from_array(rows),
        }
    }

    #[inline]
    pub const fn rows(&self) -> usize {
        R
    }

    #[inline]
    pub const fn cols(&self) -> usize {
        C
    }

    /// Number of cells, `R * C`.
    #[inline]
    pub const fn len(&self) -> usize {
        R * C
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        R * C == 0
    }

    /// Checked linear access; [`Error::IndexOutOfRange`] when `i >= R * C`.
    #[inline]
    pub fn at(&self, i: usize) -> Result<&T, Error> {
        self.as_slice().get(i).ok_or(Error::IndexOutOfRange)
    }

    #[inline]
    pub fn at_mut(&mut self, i: usize) -> Result<&mut T, Error> {
        self.as_mut_slice().get_mut(i).ok_or(Error::IndexOutOfRange)
    }

    /// The cell at `(row, col)`.
    ///
    /// Each coordinate is checked against its own bound, so `(0, C)` is
    /// rejected even though `C` is a valid linear index.
    pub fn cell(&self, row: usize, col: usize) -> Result<&T, Error> {
        self.at(linear_index::<R, C>(row, col)?)
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut T, Error> {
        self.at_mut(linear_index::<R, C>(row, col)?)
    }

    /// Row `row` as a slice of `C` values.
    #[inline]
    pub fn row(&self, row: usize) -> Result<&[T], Error> {
        self.rows.at(row).map(|r| r.as_slice())
    }

    #[inline]
    pub fn row_mut(&mut self, row: usize) -> Result<&mut [T], Error> {
        self.rows.at_mut(row).map(|r| r.as_mut_slice())
    }

    /// Cell `(0, 0)`; [`Error::EmptyContainer`] when `R * C == 0`.
    #[inline]
    pub fn front(&self) -> Result<&T, Error> {
        self.as_slice().first().ok_or(Error::EmptyContainer)
    }

    /// Cell `(R - 1, C - 1)`; [`Error::EmptyContainer`] when `R * C == 0`.
    #[inline]
    pub fn back(&self) -> Result<&T, Error> {
        self.as_slice().last().ok_or(Error::EmptyContainer)
    }

    /// All cells in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.rows.as_slice().as_flattened()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.rows.as_mut_slice().as_flattened_mut()
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.as_slice().as_ptr()
    }

    /// Row-major iterator over all cells.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

fn linear_index<const R: usize, const C: usize>(row: usize, col: usize) -> Result<usize, Error> {
    if row >= R || col >= C {
        return Err(Error::IndexOutOfRange);
    }
    Ok(row * C + col)
}

impl<T: Clone + Zero, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The all-zero matrix.
    pub fn zeros() -> Self {
        Self::from_rows(core::array::from_fn(|_| core::array::from_fn(|_| T::zero())))
    }

    /// Fills cells in row-major order from `src` and zero-fills the rest.
    ///
    /// Returns [`Error::SizeMismatch`] when `src` has more than `R * C`
    /// values.
    pub fn from_slice(src: &[T]) -> Result<Self, Error> {
        if src.len() > R * C {
            return Err(Error::SizeMismatch);
        }
        let mut out = Self::zeros();
        let _ = algorithm::copy(src, out.iter_mut());
        Ok(out)
    }
}

impl<T: Clone, const R: usize, const C: usize> Matrix<T, R, C> {
    #[inline]
    pub fn fill(&mut self, value: &T) {
        algorithm::fill(self.iter_mut(), value);
    }

    /// Exchanges cells with `other` (three copies).
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        algorithm::swap(self, other);
    }
}

impl<T: PartialOrd + Clone, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Sorts all cells in row-major order.
    #[inline]
    pub fn sort(&mut self) {
        algorithm::sort(self.as_mut_slice());
    }
}

impl<T: Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    fn map(self, mut f: impl FnMut(T) -> T) -> Self {
        Self::from_rows(self.rows.into_inner().map(|row| row.map(&mut f)))
    }

    fn zip_with(self, rhs: Self, mut f: impl FnMut(T, T) -> T) -> Self {
        Self::from_rows(core::array::from_fn(|r| {
            core::array::from_fn(|c| f(self.rows[r][c], rhs.rows[r][c]))
        }))
    }
}

impl<T: Default, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::from_rows(core::array::from_fn(|_| core::array::from_fn(|_| T::default())))
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    fn from(rows: [[T; C]; R]) -> Self {
        Self::from_rows(rows)
    }
}

impl<T, const R: usize, const C: usize> AsRef<[T]> for Matrix<T, R, C> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const R: usize, const C: usize> AsMut<[T]> for Matrix<T, R, C> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = T;
    /// Unchecked linear access; panics when `i >= R * C`.
    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.as_slice()[i]
    }
}
impl<T, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.as_mut_slice()[i]
    }
}
impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;
    /// Unchecked cell access; panics when `row >= R` or `col >= C`.
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.rows[row][col]
    }
}
impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.rows[row][col]
    }
}

impl<'a, T, const R: usize, const C: usize> IntoIterator for &'a Matrix<T, R, C> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<'a, T, const R: usize, const C: usize> IntoIterator for &'a mut Matrix<T, R, C> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    /// One `(a,b,c)` line per row; nothing at all when the matrix has no
    /// cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        for row in self.rows.iter() {
            display::write_tuple(f, row, ",")?;
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl<T: Copy + Add<Output = T>, const R: usize, const C: usize> Add for Matrix<T, R, C> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<T: Copy + Sub<Output = T>, const R: usize, const C: usize> Sub for Matrix<T, R, C> {
    type Output = Self;
    /// Cell-wise `self - rhs`.
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<T: Copy + Add<Output = T>, const R: usize, const C: usize> AddAssign for Matrix<T, R, C> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Copy + Sub<Output = T>, const R: usize, const C: usize> SubAssign for Matrix<T, R, C> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Copy + Mul<Output = T>, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C> {
    type Output = Self;
    fn mul(self, k: T) -> Self {
        self.map(|x| x * k)
    }
}

impl<T: Copy + Mul<Output = T>, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C> {
    fn mul_assign(&mut self, k: T) {
        *self = *self * k;
    }
}

impl<T: Copy + Zero + Div<Output = T>, const R: usize, const C: usize> Div<T> for Matrix<T, R, C> {
    type Output = Result<Self, Error>;
    /// Cell-wise division; [`Error::DivideByZero`] when `k` is zero.
    fn div(self, k: T) -> Result<Self, Error> {
        if k.is_zero() {
            return Err(Error::DivideByZero);
        }
        Ok(self.map(|x| x / k))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::Matrix;
    use crate::Error;
    use alloc::string::ToString;

    fn counting() -> Matrix<i32, 3, 3> {
        Matrix::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]])
    }

    #[test]
    fn test_cell_is_row_major() {
        let m = counting();
        assert_eq!(m.cell(1, 2), Ok(&6));
        assert_eq!(m.cell(0, 0), Ok(&1));
        assert_eq!(m.cell(2, 2), Ok(&9));
        assert_eq!(m[5], 6);
        assert_eq!(m[(1, 2)], 6);
        assert_eq!(m.at(5), Ok(&6));
    }

    #[test]
    fn test_cell_checks_each_coordinate() {
        let m = counting();
        assert_eq!(m.cell(0, 3), Err(Error::IndexOutOfRange));
        assert_eq!(m.cell(3, 0), Err(Error::IndexOutOfRange));
        assert_eq!(m.at(9), Err(Error::IndexOutOfRange));
        assert_eq!(m.row(3), Err(Error::IndexOutOfRange));
    }

    #[test]
    #[should_panic]
    fn test_unchecked_cell_panics() {
        let m = counting();
        let _ = m[(0, 3)];
    }

    #[test]
    fn test_from_slice_zero_fills_or_rejects() {
        let m: Matrix<i32, 2, 2> = Matrix::from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(m, Matrix::from_rows([[1, 2], [3, 0]]));
        assert_eq!(Matrix::<i32, 2, 2>::from_slice(&[0; 5]), Err(Error::SizeMismatch));
    }

    #[test]
    fn test_mutation_through_cells_and_rows() {
        let mut m: Matrix<i32, 2, 3> = Matrix::zeros();
        *m.cell_mut(1, 0).unwrap() = 4;
        m[(0, 2)] = 3;
        m[1] = 2;
        m.row_mut(1).unwrap()[2] = 6;
        assert_eq!(m.row(0), Ok(&[0, 2, 3][..]));
        assert_eq!(m.row(1), Ok(&[4, 0, 6][..]));
        assert_eq!((m.rows(), m.cols(), m.len()), (2, 3, 6));
        assert_eq!(m.front(), Ok(&0));
        assert_eq!(m.back(), Ok(&6));
    }

    #[test]
    fn test_arithmetic() {
        let a = counting();
        let b = Matrix::from_rows([[1; 3]; 3]);
        assert_eq!(a + b, Matrix::from_rows([[2, 3, 4], [5, 6, 7], [8, 9, 10]]));
        assert_eq!(a - b, Matrix::from_rows([[0, 1, 2], [3, 4, 5], [6, 7, 8]]));
        assert_eq!(a * 2, Matrix::from_rows([[2, 4, 6], [8, 10, 12], [14, 16, 18]]));
        assert_eq!((a * 2 / 2), Ok(a));
        assert_eq!(a / 0, Err(Error::DivideByZero));

        let mut c = a;
        c += b;
        c -= b;
        c *= 3;
        assert_eq!(c, a * 3);
    }

    #[test]
    fn test_display_sort_swap() {
        let mut m = Matrix::from_rows([[3, 2], [1, 0]]);
        assert_eq!(m.to_string(), "(3,2)\n(1,0)\n");
        m.sort();
        assert_eq!(m.as_slice(), &[0, 1, 2, 3]);
        let mut other = Matrix::from_rows([[9, 9], [9, 9]]);
        m.swap(&mut other);
        assert_eq!(m.iter().sum::<i32>(), 36);
        assert_eq!(other.cell(1, 1), Ok(&3));
        other.fill(&7);
        assert_eq!(other, Matrix::from_rows([[7, 7], [7, 7]]));
    }

    #[test]
    fn test_empty_matrix() {
        let m: Matrix<i32, 0, 3> = Matrix::zeros();
        assert!(m.is_empty());
        assert_eq!(m.to_string(), "");
        assert_eq!(m.front(), Err(Error::EmptyContainer));
        assert_eq!(m.cell(0, 0), Err(Error::IndexOutOfRange));
    }
}
