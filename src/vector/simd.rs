//! `core::simd`-backed `V`/`minpos`.
//!
//! Ported in spirit from `PHMINPOSUW`: portable-SIMD has no direct
//! horizontal min-with-index instruction, so this expresses the same
//! reduction as a vectorized horizontal minimum (`reduce_min`) followed by
//! an equality mask (`simd_eq` + `to_bitmask`) whose lowest set bit gives
//! the first lane achieving that minimum - the tie-break PHMINPOSUW itself
//! guarantees.

use core::simd::{u16x8, SimdPartialEq, SimdUint, ToBitMask};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct V(u16x8);

impl V {
    pub const LANES: usize = 8;

    #[inline]
    pub fn splat(value: u16) -> V {
        V(u16x8::splat(value))
    }

    #[inline]
    pub fn from_array(arr: [u16; 8]) -> V {
        V(u16x8::from_array(arr))
    }

    #[inline]
    pub fn to_array(self) -> [u16; 8] {
        self.0.to_array()
    }

    #[inline]
    pub fn lane(self, i: usize) -> u16 {
        self.0.as_array()[i]
    }

    #[inline]
    pub fn set_lane(&mut self, i: usize, value: u16) {
        let mut arr = self.0.to_array();
        arr[i] = value;
        self.0 = u16x8::from_array(arr);
    }
}

/// Minimum lane value and the index of its first occurrence.
#[inline]
pub fn minpos(v: V) -> (u16, usize) {
    let min = v.0.reduce_min();
    let mask = v.0.simd_eq(u16x8::splat(min)).to_bitmask();
    (min, mask.trailing_zeros() as usize)
}
