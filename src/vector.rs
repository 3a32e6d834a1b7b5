//! 8-lane `u16` vector primitive and the `minpos`/`sort8` reductions built
//! on it.
//!
//! `V` models one SIMD register: eight lanes of 16-bit keys, 16-byte
//! aligned, corresponding 1:1 to a node in every heap layout. `minpos` maps
//! to the SSE4.1 `PHMINPOSUW` instruction family. With the `simd` feature
//! enabled it is expressed through `core::simd`'s portable-SIMD reduction;
//! otherwise it falls back to an equivalent scalar scan. External
//! behavior - including the lowest-index tie-break, which heap callers
//! depend on for deterministic sift order - is identical either way.

#[cfg(feature = "simd")]
mod simd;
#[cfg(not(feature = "simd"))]
mod scalar;

#[cfg(feature = "simd")]
pub use self::simd::{minpos, V};
#[cfg(not(feature = "simd"))]
pub use self::scalar::{minpos, V};

use crate::util::K_MAX;

/// Sorts the 8 lanes of `v` in ascending order.
///
/// Eight rounds of `minpos`: each round extracts the current minimum and
/// masks its lane out with [`K_MAX`] so it cannot win again. Every lane of
/// the working copy equals `K_MAX` once the loop finishes; the output is a
/// sorted permutation of the input lanes.
pub fn sort8(v: V) -> V {
    let mut r = v;
    let mut out = [0u16; 8];
    for slot in &mut out {
        let (m, j) = minpos(r);
        *slot = m;
        r.set_lane(j, K_MAX);
    }
    V::from_array(out)
}
