//! Portable scalar fallback for `V`/`minpos`, used when the `simd` feature
//! is disabled. External behavior, including the lowest-index tie-break,
//! matches the `core::simd` backend exactly; only throughput differs.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C, align(16))]
pub struct V([u16; 8]);

impl V {
    pub const LANES: usize = 8;

    #[inline]
    pub fn splat(value: u16) -> V {
        V([value; 8])
    }

    #[inline]
    pub fn from_array(arr: [u16; 8]) -> V {
        V(arr)
    }

    #[inline]
    pub fn to_array(self) -> [u16; 8] {
        self.0
    }

    #[inline]
    pub fn lane(self, i: usize) -> u16 {
        self.0[i]
    }

    #[inline]
    pub fn set_lane(&mut self, i: usize, value: u16) {
        self.0[i] = value;
    }
}

/// Minimum lane value and the index of its first occurrence: an 8-way
/// linear scan keeping the first (lowest-index) winner on ties.
#[inline]
pub fn minpos(v: V) -> (u16, usize) {
    let arr = v.0;
    let mut best = arr[0];
    let mut best_idx = 0usize;
    for (i, &k) in arr.iter().enumerate().skip(1) {
        if k < best {
            best = k;
            best_idx = i;
        }
    }
    (best, best_idx)
}
