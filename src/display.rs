// This file is part of seqlib.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Core imports
use core::fmt;

/// Writes `(a<sep>b<sep>c)`.
pub(crate) fn write_tuple<I>(f: &mut fmt::Formatter<'_>, items: I, sep: &str) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    f.write_str("(")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{item}")?;
    }
    f.write_str(")")
}
