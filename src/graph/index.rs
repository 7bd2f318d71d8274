//! Vertex index types.
//!
//! Vertex ids are dense, zero-based unsigned integers. The width of the id is a
//! type parameter so large sparse graphs can store `u32` (or smaller) targets in
//! their out-edge sets instead of full `usize`s.

use core::fmt::Debug;
use core::hash::Hash;

use num_traits::{NumCast, PrimInt, Unsigned};

/// An unsigned integer type usable as a vertex id.
///
/// Blanket-implemented for every primitive unsigned integer.
pub trait IndexType: PrimInt + Unsigned + Hash + Debug + Default + Send + Sync + 'static {
    /// Converts a `usize` position into an id, or `None` if it does not fit.
    #[inline]
    fn try_new(index: usize) -> Option<Self> {
        <Self as NumCast>::from(index)
    }

    /// Converts a `usize` position into an id.
    ///
    /// # Panics
    /// Panics if `index` is not representable by `Self`.
    #[inline]
    fn new(index: usize) -> Self {
        match Self::try_new(index) {
            Some(ix) => ix,
            None => panic!(
                "index {index} does not fit in {}",
                core::any::type_name::<Self>()
            ),
        }
    }

    /// Returns the id as a `usize` position.
    #[inline]
    fn index(self) -> usize {
        // Every id stored by a graph was produced from a `usize` position.
        self.to_usize().unwrap_or(usize::MAX)
    }
}

impl<T> IndexType for T where T: PrimInt + Unsigned + Hash + Debug + Default + Send + Sync + 'static {}
