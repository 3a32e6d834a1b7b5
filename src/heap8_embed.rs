use std::fmt;

use crate::error::{HeapError, HeapResult};
use crate::heap8_aux::Entry;
use crate::util::{first_child, parent_of, round_up_to_node, ARITY, K_MAX, SIZE_MAX};
use crate::vector::{minpos, V};

/// One node's worth of storage: 8 keys and their 8 payloads co-located so
/// both live on the same cache line. `S`'s size should divide neatly into
/// the record (16- to 48-bit payloads are the intended range) so the record
/// stays cache-resident.
#[derive(Clone, Copy)]
struct Record<S> {
    keys: V,
    payloads: [S; ARITY],
}

impl<S: Copy + Default> Record<S> {
    fn padding() -> Record<S> {
        Record { keys: V::splat(K_MAX), payloads: [S::default(); ARITY] }
    }
}

/// [`crate::Heap8`] with each 8-key node's payloads interleaved into the
/// same record, rather than held in a separate shadow array. `push_down`
/// therefore never has to touch a second array to move a payload: both
/// the key and its payload travel together whenever they move within a
/// record, and as a whole record when they cross a node boundary.
#[derive(Clone)]
pub struct Heap8Embed<S> {
    records: Vec<Record<S>>,
    size: usize,
}

impl<S: Copy + Default> Heap8Embed<S> {
    #[inline]
    pub fn new() -> Heap8Embed<S> {
        Heap8Embed { records: Vec::new(), size: 0 }
    }

    #[inline]
    pub fn with_capacity(nodes: usize) -> Heap8Embed<S> {
        Heap8Embed { records: Vec::with_capacity(nodes), size: 0 }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.records.len() * ARITY
    }

    fn node(&self, q: usize) -> V {
        self.records[q / ARITY].keys
    }

    fn key_at(&self, p: usize) -> u16 {
        self.records[p / ARITY].keys.lane(p % ARITY)
    }

    fn set_key_at(&mut self, p: usize, value: u16) {
        self.records[p / ARITY].keys.set_lane(p % ARITY, value);
    }

    fn payload_at(&self, p: usize) -> S {
        self.records[p / ARITY].payloads[p % ARITY]
    }

    fn set_payload_at(&mut self, p: usize, value: S) {
        self.records[p / ARITY].payloads[p % ARITY] = value;
    }

    fn ensure_nodes(&mut self, new_size: usize) {
        let needed = round_up_to_node(new_size) / ARITY;
        if needed > self.records.len() {
            self.records.resize(needed, Record::padding());
        }
    }

    fn reserve(&mut self, additional: usize) -> HeapResult<usize> {
        let old_size = self.size;
        let new_size = match old_size.checked_add(additional) {
            Some(s) if s <= SIZE_MAX => s,
            _ => {
                return Err(HeapError::allocation_failure(
                    old_size.saturating_add(additional),
                    SIZE_MAX,
                ))
            }
        };
        self.ensure_nodes(new_size);
        self.size = new_size;
        Ok(old_size)
    }

    pub fn entry(&self, i: usize) -> Entry<S> {
        debug_assert!(i < self.size);
        Entry::new(self.key_at(i), self.payload_at(i))
    }

    pub fn set_entry(&mut self, i: usize, e: Entry<S>) {
        debug_assert!(i < self.size);
        self.set_key_at(i, e.key);
        self.set_payload_at(i, e.payload);
    }

    /// Grows storage by whole nodes as needed. Callers must populate the
    /// new positions with [`Self::set_entry`] and then call
    /// [`Self::heapify`].
    pub fn extend(&mut self, n: usize) -> HeapResult<()> {
        self.reserve(n)?;
        Ok(())
    }

    pub fn append_entries(&mut self, iter: impl IntoIterator<Item = Entry<S>>) -> HeapResult<()> {
        let entries: Vec<Entry<S>> = iter.into_iter().collect();
        let old_size = self.reserve(entries.len())?;
        for (i, e) in entries.into_iter().enumerate() {
            self.set_key_at(old_size + i, e.key);
            self.set_payload_at(old_size + i, e.payload);
        }
        Ok(())
    }

    pub fn push_entry(&mut self, key: u16, payload: S) -> HeapResult<()> {
        debug_assert_ne!(key, K_MAX, "K_MAX is reserved for padding");
        let old_size = self.reserve(1)?;
        self.set_key_at(old_size, key);
        self.set_payload_at(old_size, payload);
        self.pull_up(key, payload, old_size);
        Ok(())
    }

    pub fn pull_up(&mut self, k: u16, s: S, mut q: usize) {
        debug_assert!(q < self.size);
        while q >= ARITY {
            let p = parent_of(q);
            if self.key_at(p) <= k {
                break;
            }
            self.set_key_at(q, self.key_at(p));
            self.set_payload_at(q, self.payload_at(p));
            q = p;
        }
        self.set_key_at(q, k);
        self.set_payload_at(q, s);
    }

    pub fn push_down(&mut self, k: u16, s: S, mut p: usize) {
        loop {
            let q = first_child(p);
            if q >= self.size {
                break;
            }
            let (b, j) = minpos(self.node(q));
            if k <= b {
                break;
            }
            self.set_key_at(p, b);
            self.set_payload_at(p, self.payload_at(q + j));
            p = q + j;
        }
        self.set_key_at(p, k);
        self.set_payload_at(p, s);
    }

    pub fn heapify(&mut self) {
        if self.size <= ARITY {
            return;
        }
        let mut q = (self.size - 1) / ARITY * ARITY;
        while q >= ARITY {
            let (b, j) = minpos(self.node(q));
            let p = parent_of(q);
            if b < self.key_at(p) {
                let displaced_key = self.key_at(p);
                let displaced_payload = self.payload_at(p);
                self.set_key_at(p, b);
                self.set_payload_at(p, self.payload_at(q + j));
                if first_child(q + j) >= self.size {
                    self.set_key_at(q + j, displaced_key);
                    self.set_payload_at(q + j, displaced_payload);
                } else {
                    self.push_down(displaced_key, displaced_payload, q + j);
                }
            }
            q -= ARITY;
        }
    }

    pub fn is_heap(&self) -> bool {
        if self.size <= ARITY {
            return true;
        }
        let mut q = (self.size - 1) / ARITY * ARITY;
        while q >= ARITY {
            let (b, _) = minpos(self.node(q));
            if b < self.key_at(parent_of(q)) {
                return false;
            }
            q -= ARITY;
        }
        true
    }

    pub fn top_entry(&self) -> Entry<S> {
        debug_assert!(self.size > 0, "top_entry on empty heap");
        let (key, j) = minpos(self.node(0));
        Entry::new(key, self.payload_at(j))
    }

    pub fn top_index(&self) -> usize {
        debug_assert!(self.size > 0, "top_index on empty heap");
        minpos(self.node(0)).1
    }

    pub fn pop_entry(&mut self) -> Entry<S> {
        debug_assert!(self.size > 0, "pop_entry on empty heap");
        let (top_key, j) = minpos(self.node(0));
        let top_payload = self.payload_at(j);
        let last = self.size - 1;
        let a_key = self.key_at(last);
        let a_payload = self.payload_at(last);
        self.set_key_at(last, K_MAX);
        self.size -= 1;
        if j != self.size {
            self.push_down(a_key, a_payload, j);
        }
        Entry::new(top_key, top_payload)
    }

    /// Drains the heap in place: keys end up descending within
    /// `[0, old_size)`, and each position's payload travels with its key.
    pub fn sort(&mut self) {
        let total = self.size;
        for i in 0..total {
            let e = self.pop_entry();
            // pop_entry just vacated exactly this slot, so writing the
            // popped entry back here overwrites only padding.
            let pos = total - 1 - i;
            self.set_key_at(pos, e.key);
            self.set_payload_at(pos, e.payload);
        }
    }

    pub fn is_sorted(&self, n: usize) -> bool {
        (0..n.saturating_sub(1)).all(|i| self.key_at(i) >= self.key_at(i + 1))
    }

    pub fn clear(&mut self) {
        self.records = Vec::new();
        self.size = 0;
    }
}

impl<S: Copy + Default> Default for Heap8Embed<S> {
    fn default() -> Self {
        Heap8Embed::new()
    }
}

impl<S: Copy + Default> fmt::Debug for Heap8Embed<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Heap8Embed<{} entries>", self.size)
    }
}
