// This file is part of seqlib.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `FixedVector<T, N>`: an `N`-dimensional vector over a [`FixedArray`].

// Crate imports
use crate::{algorithm, display, error::Error, fixed_array::FixedArray};

// External imports - num-traits
use num_traits::Zero;

// Core imports
use core::{
    fmt,
    ops::{Add, AddAssign, Div, Mul, MulAssign, Sub, SubAssign},
};

/// An `N`-dimensional vector with element-wise arithmetic.
///
/// `+` and `-` combine two vectors of the same dimension (the dimension is
/// part of the type, so a mismatch does not compile). `*` and `/` scale by a
/// scalar; division by zero yields [`Error::DivideByZero`], so `v / k` is a
/// `Result`.
///
/// # Examples
///
/// ```rust
/// use seqlib::{Error, FixedVector};
///
/// let a = FixedVector::from([1, 2, 3]);
/// let b: FixedVector<i32, 3> = FixedVector::from_slice(&[10, 20])?; // zero-filled
/// assert_eq!(b, FixedVector::from([10, 20, 0]));
/// assert_eq!((a + b).to_string(), "(11, 22, 3)");
/// assert_eq!(b - a, FixedVector::from([9, 18, -3]));
/// assert_eq!((a * 2 / 2)?, a);
/// assert_eq!(a / 0, Err(Error::DivideByZero));
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedVector<T, const N: usize> {
    data: FixedArray<T, N>,
}

impl<T, const N: usize> FixedVector<T, N> {
    /// The dimension, always `N`.
    pub const DIM: usize = N;

    #[inline]
    pub const fn from_array(values: [T; N]) -> Self {
        Self {
            data: FixedArray::from_array(values),
        }
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.data.into_inner()
    }

    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Checked component access; [`Error::IndexOutOfRange`] when `i >= N`.
    #[inline]
    pub fn at(&self, i: usize) -> Result<&T, Error> {
        self.data.at(i)
    }

    #[inline]
    pub fn at_mut(&mut self, i: usize) -> Result<&mut T, Error> {
        self.data.at_mut(i)
    }

    #[inline]
    pub fn front(&self) -> Result<&T, Error> {
        self.data.front()
    }

    #[inline]
    pub fn back(&self) -> Result<&T, Error> {
        self.data.back()
    }

    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_mut_slice()
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }
}

impl<T: Clone + Zero, const N: usize> FixedVector<T, N> {
    /// The zero vector.
    pub fn zeros() -> Self {
        Self::from_array(core::array::from_fn(|_| T::zero()))
    }

    /// Copies `src` into the leading components and zero-fills the rest.
    ///
    /// Returns [`Error::SizeMismatch`] when `src` has more than `N` values.
    pub fn from_slice(src: &[T]) -> Result<Self, Error> {
        if src.len() > N {
            return Err(Error::SizeMismatch);
        }
        let mut out = Self::zeros();
        let _ = algorithm::copy(src, out.iter_mut());
        Ok(out)
    }
}

impl<T: Clone, const N: usize> FixedVector<T, N> {
    #[inline]
    pub fn fill(&mut self, value: &T) {
        self.data.fill(value);
    }

    /// Exchanges components with `other` (three copies).
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        algorithm::swap(self, other);
    }
}

impl<T: PartialOrd + Clone, const N: usize> FixedVector<T, N> {
    #[inline]
    pub fn sort(&mut self) {
        self.data.sort();
    }
}

impl<T: Copy, const N: usize> FixedVector<T, N> {
    fn map(self, mut f: impl FnMut(T) -> T) -> Self {
        Self::from_array(core::array::from_fn(|i| f(self.data[i])))
    }

    fn zip_with(self, rhs: Self, mut f: impl FnMut(T, T) -> T) -> Self {
        Self::from_array(core::array::from_fn(|i| f(self.data[i], rhs.data[i])))
    }
}

impl<T: Default, const N: usize> Default for FixedVector<T, N> {
    fn default() -> Self {
        Self {
            data: FixedArray::default(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for FixedVector<T, N> {
    fn from(values: [T; N]) -> Self {
        Self::from_array(values)
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedVector<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> AsMut<[T]> for FixedVector<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedVector<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<'a, T, const N: usize> IntoIterator for &'a mut FixedVector<T, N> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for FixedVector<T, N> {
    /// `(x0, x1, ...)`, or `Empty vector` for `N == 0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if N == 0 {
            return f.write_str("Empty vector");
        }
        display::write_tuple(f, self.iter(), ", ")
    }
}

impl<T: Copy + Add<Output = T>, const N: usize> Add for FixedVector<T, N> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<T: Copy + Sub<Output = T>, const N: usize> Sub for FixedVector<T, N> {
    type Output = Self;
    /// Component-wise `self - rhs`.
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<T: Copy + Add<Output = T>, const N: usize> AddAssign for FixedVector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Copy + Sub<Output = T>, const N: usize> SubAssign for FixedVector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Copy + Mul<Output = T>, const N: usize> Mul<T> for FixedVector<T, N> {
    type Output = Self;
    fn mul(self, k: T) -> Self {
        self.map(|x| x * k)
    }
}

impl<T: Copy + Mul<Output = T>, const N: usize> MulAssign<T> for FixedVector<T, N> {
    fn mul_assign(&mut self, k: T) {
        *self = *self * k;
    }
}

impl<T: Copy + Zero + Div<Output = T>, const N: usize> Div<T> for FixedVector<T, N> {
    type Output = Result<Self, Error>;
    /// Component-wise division; [`Error::DivideByZero`] when `k` is zero.
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
    use super::FixedVector;
    use crate::Error;
    use alloc::string::ToString;

    #[test]
    fn test_from_slice_zero_fills_or_rejects() {
        assert_eq!(FixedVector::<i32, 4>::from_slice(&[1, 2]), Ok(FixedVector::from([1, 2, 0, 0])));
        assert_eq!(FixedVector::<i32, 2>::from_slice(&[1, 2, 3]), Err(Error::SizeMismatch));
        assert_eq!(FixedVector::<f64, 2>::from_slice(&[]), Ok(FixedVector::zeros()));
    }

    #[test]
    fn test_arithmetic() {
        let a = FixedVector::from([1, 2, 3]);
        let b = FixedVector::from([4, 5, 6]);
        assert_eq!(a + b, FixedVector::from([5, 7, 9]));
        assert_eq!(b - a, FixedVector::from([3, 3, 3]));
        assert_eq!(a - b, FixedVector::from([-3, -3, -3]));
        assert_eq!(a * 3, FixedVector::from([3, 6, 9]));
        assert_eq!(b / 2, Ok(FixedVector::from([2, 2, 3])));
        assert_eq!(b / 0, Err(Error::DivideByZero));

        let mut c = a;
        c += b;
        c -= a;
        c *= 2;
        assert_eq!(c, b * 2);
    }

    #[test]
    fn test_float_division_by_zero_is_rejected() {
        let v = FixedVector::from([1.0_f32, 2.0]);
        assert_eq!(v / 0.0, Err(Error::DivideByZero));
        assert_eq!(v / 2.0, Ok(FixedVector::from([0.5, 1.0])));
    }

    #[test]
    fn test_access_and_display() {
        let mut v = FixedVector::from([3, 1, 2]);
        assert_eq!(v.len(), 3);
        assert_eq!(FixedVector::<u8, 3>::DIM, 3);
        assert_eq!(v.at(3), Err(Error::IndexOutOfRange));
        *v.at_mut(0).unwrap() = 0;
        v.sort();
        assert_eq!(v.to_string(), "(0, 1, 2)");
        assert_eq!(v.front(), Ok(&0));
        assert_eq!(v.back(), Ok(&2));
        assert_eq!(v[1], 1);

        let empty: FixedVector<i32, 0> = FixedVector::default();
        assert!(empty.is_empty());
        assert_eq!(empty.to_string(), "Empty vector");
        assert_eq!(empty.front(), Err(Error::EmptyContainer));
    }

    #[test]
    fn test_swap_and_fill() {
        let mut a = FixedVector::from([1, 2]);
        let mut b = FixedVector::from([3, 4]);
        a.swap(&mut b);
        assert_eq!(a.into_array(), [3, 4]);
        b.fill(&9);
        assert_eq!(b.as_slice(), &[9, 9]);
    }
}
