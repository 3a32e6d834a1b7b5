use std::fmt;

use crate::error::{HeapError, HeapResult};
use crate::util::{first_child, parent_of, round_up_to_node, ARITY, K_MAX, SIZE_MAX};
use crate::vector::{minpos, V};

/// A packed 8-ary min-heap of bare `u16` keys.
///
/// `storage` holds `logical_size` live keys followed by [`K_MAX`] padding
/// out to the next node boundary; every node (group of 8 keys starting at a
/// multiple of 8) can therefore always be loaded as a full [`V`] regardless
/// of where `logical_size` falls within it. Position `p`'s children start
/// at `(p / 8 + 1) * 8` and its parent is at `p / 8 - 1` - see
/// [`crate::util`].
#[derive(Clone, PartialEq, Eq)]
pub struct Heap8 {
    storage: Vec<u16>,
    size: usize,
}

impl Heap8 {
    /// Creates an empty heap.
    #[inline]
    pub fn new() -> Heap8 {
        Heap8 { storage: Vec::new(), size: 0 }
    }

    /// Creates an empty heap with room for `nodes` nodes (`nodes * 8` keys)
    /// without reallocating.
    #[inline]
    pub fn with_capacity(nodes: usize) -> Heap8 {
        Heap8 { storage: Vec::with_capacity(nodes * ARITY), size: 0 }
    }

    /// Number of live keys.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of keys the backing storage can hold before it must grow.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Indexed read of a resident position, for tests and debugging only.
    ///
    /// Reads `storage` directly rather than gating on `size`: after
    /// [`Self::sort`], `size` is `0` but positions `[0, old_size)` still hold
    /// the sorted keys (spec.md §4.2), and callers need `get` to see them.
    #[inline]
    pub fn get(&self, i: usize) -> Option<u16> {
        self.storage.get(i).copied()
    }

    /// Grows storage by whole node units as needed and returns a writable
    /// view over the `n` newly added positions.
    ///
    /// The caller must fill the returned slice and then call [`Self::heapify`]
    /// before any of `top`/`pop`/`push`/`is_heap`: this moves the heap into
    /// the Unordered state of the crate's state machine.
    pub fn extend(&mut self, n: usize) -> HeapResult<&mut [u16]> {
        let old_size = self.size;
        let new_size = match old_size.checked_add(n) {
            Some(s) if s <= SIZE_MAX => s,
            _ => return Err(HeapError::allocation_failure(old_size.saturating_add(n), SIZE_MAX)),
        };
        let needed = round_up_to_node(new_size);
        if needed > self.storage.len() {
            self.storage.resize(needed, K_MAX);
        }
        self.size = new_size;
        Ok(&mut self.storage[old_size..new_size])
    }

    /// Appends every key of `iter`, padding the final node with [`K_MAX`].
    /// Same heapify obligation as [`Self::extend`].
    pub fn append(&mut self, iter: impl IntoIterator<Item = u16>) -> HeapResult<()> {
        let items: Vec<u16> = iter.into_iter().collect();
        let slice = self.extend(items.len())?;
        slice.copy_from_slice(&items);
        Ok(())
    }

    /// Inserts `key`, restoring the heap invariant via [`Self::pull_up`].
    pub fn push(&mut self, key: u16) -> HeapResult<()> {
        debug_assert_ne!(key, K_MAX, "K_MAX is reserved for padding");
        let pos = {
            let slice = self.extend(1)?;
            slice[0] = key;
            self.size - 1
        };
        self.pull_up(key, pos);
        Ok(())
    }

    fn node(&self, q: usize) -> V {
        let arr: [u16; ARITY] = self.storage[q..q + ARITY].try_into().unwrap();
        V::from_array(arr)
    }

    /// Assumes `q < size` and the heap invariant holds everywhere except
    /// possibly at `q`; writes `k` into the ancestor slot that restores it.
    pub fn pull_up(&mut self, k: u16, mut q: usize) {
        debug_assert!(q < self.size);
        while q >= ARITY {
            let p = parent_of(q);
            if self.storage[p] <= k {
                break;
            }
            self.storage[q] = self.storage[p];
            q = p;
        }
        self.storage[q] = k;
    }

    /// Assumes `p < size` and the heap invariant holds everywhere except
    /// possibly at `p`; sifts `k` toward the leaves.
    pub fn push_down(&mut self, k: u16, mut p: usize) {
        loop {
            let q = first_child(p);
            if q >= self.size {
                break;
            }
            let (b, j) = minpos(self.node(q));
            if k <= b {
                break;
            }
            self.storage[p] = b;
            p = q + j;
        }
        self.storage[p] = k;
    }

    /// Restores the heap invariant over arbitrary contents written via
    /// [`Self::extend`]/[`Self::append`].
    pub fn heapify(&mut self) {
        if self.size <= ARITY {
            return;
        }
        let mut q = (self.size - 1) / ARITY * ARITY;
        while q >= ARITY {
            let (b, j) = minpos(self.node(q));
            let p = parent_of(q);
            if b < self.storage[p] {
                let displaced = self.storage[p];
                self.storage[p] = b;
                if first_child(q + j) >= self.size {
                    // Bottom layer: position q + j's own children don't
                    // exist, so the swap alone restores the invariant there.
                    self.storage[q + j] = displaced;
                } else {
                    self.push_down(displaced, q + j);
                }
            }
            q -= ARITY;
        }
    }

    /// Runs the same scan as [`Self::heapify`] but reports a violation
    /// instead of repairing it.
    pub fn is_heap(&self) -> bool {
        if self.size <= ARITY {
            return true;
        }
        let mut q = (self.size - 1) / ARITY * ARITY;
        while q >= ARITY {
            let (b, _) = minpos(self.node(q));
            let p = parent_of(q);
            if b < self.storage[p] {
                return false;
            }
            q -= ARITY;
        }
        true
    }

    /// The minimum key. `size() > 0` is required.
    pub fn top(&self) -> u16 {
        debug_assert!(self.size > 0, "top on empty heap");
        minpos(self.node(0)).0
    }

    /// Removes and returns the minimum key.
    pub fn pop(&mut self) -> u16 {
        debug_assert!(self.size > 0, "pop on empty heap");
        let (top, j) = minpos(self.node(0));
        let last = self.size - 1;
        let a = self.storage[last];
        self.storage[last] = K_MAX;
        self.size -= 1;
        if j != self.size {
            self.push_down(a, j);
        }
        top
    }

    /// Drains the heap in place, writing the popped sequence into the same
    /// storage in descending order. After `sort`, `size() == 0` and
    /// positions `[0, old_size)` hold the sorted keys.
    pub fn sort(&mut self) {
        let mut end = self.size;
        while end > 0 {
            let chunk = end.min(ARITY);
            end -= chunk;
            let mut buf = V::splat(K_MAX);
            for slot in (0..chunk).rev() {
                buf.set_lane(slot, self.pop());
            }
            let arr = buf.to_array();
            self.storage[end..end + chunk].copy_from_slice(&arr[..chunk]);
        }
    }

    /// Returns whether positions `[0, n)` are in non-ascending order.
    pub fn is_sorted(&self, n: usize) -> bool {
        self.storage[..n].windows(2).all(|w| w[0] >= w[1])
    }

    /// Releases all storage.
    pub fn clear(&mut self) {
        self.storage = Vec::new();
        self.size = 0;
    }
}

impl Default for Heap8 {
    fn default() -> Self {
        Heap8::new()
    }
}

impl fmt::Debug for Heap8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.size <= 8 {
            write!(f, "Heap8<{:?}>", &self.storage[..self.size])
        } else {
            write!(f, "Heap8<{} keys, top {:?}>", self.size, self.top())
        }
    }
}
