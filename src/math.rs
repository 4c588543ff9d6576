// This file is part of seqlib.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Vector products and normalization.
//!
//! Free functions over [`FixedVector`]; the dimension check for the cross
//! product is the type signature itself (`FixedVector<T, 3>`).

// Crate imports
use crate::{error::Error, fixed_vector::FixedVector};

// External imports - num-traits
use num_traits::{Float, Zero};

// Core imports
use core::ops::{Add, Mul, Sub};

/// Scalar (dot) product `sum(a[i] * b[i])`.
pub fn dot<T, const N: usize>(a: &FixedVector<T, N>, b: &FixedVector<T, N>) -> T
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    a.iter().zip(b.iter()).fold(T::zero(), |acc, (&x, &y)| acc + x * y)
}

/// Scalar product of two slices.
///
/// Returns [`Error::SizeMismatch`] unless both have the same length; this
/// is the runtime-checked form for containers whose length is not part of
/// the type, such as [`DynamicArray`](crate::DynamicArray).
pub fn dot_slices<T>(a: &[T], b: &[T]) -> Result<T, Error>
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    if a.len() != b.len() {
        return Err(Error::SizeMismatch);
    }
    Ok(a.iter().zip(b).fold(T::zero(), |acc, (&x, &y)| acc + x * y))
}

/// Cross product of two 3-dimensional vectors.
pub fn cross<T>(a: &FixedVector<T, 3>, b: &FixedVector<T, 3>) -> FixedVector<T, 3>
where
    T: Copy + Mul<Output = T> + Sub<Output = T>,
{
    let [a0, a1, a2] = a.into_array();
    let [b0, b1, b2] = b.into_array();
    FixedVector::from([a1 * b2 - a2 * b1, a2 * b0 - a0 * b2, a0 * b1 - a1 * b0])
}

/// Euclidean length.
pub fn norm<T: Float, const N: usize>(v: &FixedVector<T, N>) -> T {
    dot(v, v).sqrt()
}

/// `v` scaled to unit length.
///
/// Returns [`Error::DivideByZero`] for the zero vector.
pub fn normalize<T: Float, const N: usize>(v: &FixedVector<T, N>) -> Result<FixedVector<T, N>, Error> {
    *v / norm(v)
}

#[cfg(test)]
mod tests {
    // Imports
    use super::{cross, dot, dot_slices, norm, normalize};
    use crate::{DynamicArray, Error, FixedVector};

    #[test]
    fn test_dot() {
        let a = FixedVector::from([1, 2, 3]);
        let b = FixedVector::from([4, -5, 6]);
        assert_eq!(dot(&a, &b), 12);
        let empty: FixedVector<i32, 0> = FixedVector::default();
        assert_eq!(dot(&empty, &empty), 0);
    }

    #[test]
    fn test_dot_slices_checks_lengths() {
        let a: DynamicArray<f64> = [1.0, 2.0].into();
        let b: DynamicArray<f64> = [3.0, 4.0].into();
        assert_eq!(dot_slices(&a, &b), Ok(11.0));
        assert_eq!(dot_slices(&a, &b[..1]), Err(Error::SizeMismatch));
    }

    #[test]
    fn test_cross_of_basis_vectors() {
        let x = FixedVector::from([1, 0, 0]);
        let y = FixedVector::from([0, 1, 0]);
        assert_eq!(cross(&x, &y), FixedVector::from([0, 0, 1]));
        assert_eq!(cross(&y, &x), FixedVector::from([0, 0, -1]));
        assert_eq!(cross(&x, &x), FixedVector::zeros());
    }

    #[test]
    fn test_norm_and_normalize() {
        let v = FixedVector::from([3.0_f64, 4.0]);
        assert_eq!(norm(&v), 5.0);
        let unit = normalize(&v).unwrap();
        assert!((norm(&unit) - 1.0).abs() < 1e-12);
        assert_eq!(unit, FixedVector::from([0.6, 0.8]));
        assert_eq!(normalize(&FixedVector::<f32, 3>::zeros()), Err(Error::DivideByZero));
    }
}
