//! `Debug` formatting that keeps large lookup tables readable.
//!
//! Palettes and mipmap tables hold hundreds of entries; printing all of them
//! buries the interesting header fields. Use [`trimmed_collection_fmt`] with
//! `custom_debug`'s `#[debug(with = ...)]` attribute to print only the head.

use std::fmt;

const FIRST_N_ELEMENTS: usize = 3;

/// A collection that can show its first few elements.
pub trait Preview {
    /// Element type printed in the preview
    type Item: fmt::Debug;

    /// Total number of elements
    fn total(&self) -> usize;

    /// Up to `n` leading elements
    fn head(&self, n: usize) -> &[Self::Item];
}

impl<T: fmt::Debug> Preview for [T] {
    type Item = T;

    fn total(&self) -> usize {
        self.len()
    }

    fn head(&self, n: usize) -> &[T] {
        &self[..n.min(self.len())]
    }
}

impl<T: fmt::Debug, const N: usize> Preview for [T; N] {
    type Item = T;

    fn total(&self) -> usize {
        N
    }

    fn head(&self, n: usize) -> &[T] {
        self.as_slice().head(n)
    }
}

impl<T: fmt::Debug> Preview for Vec<T> {
    type Item = T;

    fn total(&self) -> usize {
        self.len()
    }

    fn head(&self, n: usize) -> &[T] {
        self.as_slice().head(n)
    }
}

/// Print the first elements of a collection followed by the count of omitted ones.
#[cfg(not(feature = "debug-print-all"))]
pub fn trimmed_collection_fmt<T: Preview + ?Sized>(
    collection: &T,
    f: &mut fmt::Formatter,
) -> fmt::Result {
    let head = collection.head(FIRST_N_ELEMENTS);
    let rest = collection.total().saturating_sub(head.len());

    if rest == 0 {
        write!(f, "{head:?}")
    } else {
        write!(f, "{head:?} + {rest} elements")
    }
}

/// Print every element of the collection.
#[cfg(feature = "debug-print-all")]
pub fn trimmed_collection_fmt<T: Preview + ?Sized>(
    collection: &T,
    f: &mut fmt::Formatter,
) -> fmt::Result {
    let all = collection.head(collection.total());
    write!(f, "{all:?}")
}
