//! Zero-filled, 64-byte aligned `f64` columns.
//!
//! Every column in an element batch or a result buffer is one of these. The
//! storage is a vector of cache-line sized blocks, so the first element of a
//! column always sits on a 64-byte boundary and a full-width vector load at
//! any multiple of [`BATCH_LANES`] never straddles two lines.

use sgp4_core::{Sgp4Error, Sgp4Result};
use std::fmt;

/// Lanes per block and the multiple every batch capacity is rounded up to.
///
/// Eight doubles fill a 512-bit register, the widest vector unit targeted, so
/// the same capacity is safe for 2-, 4- and 8-lane paths.
pub const BATCH_LANES: usize = 8;

pub const COLUMN_ALIGN: usize = 64;

#[repr(C, align(64))]
#[derive(Clone, Copy)]
struct Block([f64; BATCH_LANES]);

const _: () = assert!(std::mem::size_of::<Block>() == COLUMN_ALIGN);
const _: () = assert!(std::mem::align_of::<Block>() == COLUMN_ALIGN);

const ZERO_BLOCK: Block = Block([0.0; BATCH_LANES]);

/// Rounds `count` up to the next multiple of [`BATCH_LANES`].
///
/// Returns `None` if the rounded value does not fit in `usize`.
#[inline]
pub fn round_up_capacity(count: usize) -> Option<usize> {
    count.checked_next_multiple_of(BATCH_LANES)
}

pub struct AlignedColumn {
    blocks: Vec<Block>,
    len: usize,
}

impl AlignedColumn {
    /// Allocates `len` zeroed values. `name` only labels the error.
    ///
    /// # Errors
    /// [`Sgp4Error::AllocationFailure`] if the allocator refuses the request or
    /// the byte size overflows. Nothing is left allocated on failure.
    pub fn zeroed(name: &str, len: usize) -> Sgp4Result<Self> {
        let n_blocks = len.div_ceil(BATCH_LANES);
        let mut blocks = Vec::new();
        blocks
            .try_reserve_exact(n_blocks)
            .map_err(|_| Sgp4Error::allocation_failure(name, len))?;
        blocks.resize(n_blocks, ZERO_BLOCK);
        Ok(Self { blocks, len })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        // Block is repr(C) over [f64; BATCH_LANES] with no padding, so the
        // blocks are one contiguous run of at least `len` f64 values.
        unsafe { std::slice::from_raw_parts(self.blocks.as_ptr().cast::<f64>(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        // Same layout as `as_slice`; the exclusive borrow of `self` makes the
        // returned view the only live reference into the blocks.
        unsafe {
            std::slice::from_raw_parts_mut(self.blocks.as_mut_ptr().cast::<f64>(), self.len)
        }
    }
}

impl fmt::Debug for AlignedColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlignedColumn")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}
