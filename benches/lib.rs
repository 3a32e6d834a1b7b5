#![feature(test)]

extern crate test;

use test::Bencher;

use minpos8::{merge, Heap8, Heap8Aux, Heap8Embed, Stream};

fn lcg(seed: u64, len: usize) -> Vec<u16> {
    let mut x = seed;
    (0..len)
        .map(|_| {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            ((x >> 33) % 0xFFFE) as u16
        })
        .collect()
}

#[bench]
fn push_10_000(b: &mut Bencher) {
    let keys = lcg(1, 10_000);
    b.iter(|| {
        let mut h = Heap8::new();
        for &k in &keys {
            h.push(k).unwrap();
        }
        test::black_box(&h);
    });
}

#[bench]
fn append_then_heapify_10_000(b: &mut Bencher) {
    let keys = lcg(2, 10_000);
    b.iter(|| {
        let mut h = Heap8::new();
        h.append(keys.iter().copied()).unwrap();
        h.heapify();
        test::black_box(&h);
    });
}

#[bench]
fn pop_all_10_000(b: &mut Bencher) {
    let keys = lcg(3, 10_000);
    b.iter(|| {
        let mut h = Heap8::new();
        h.append(keys.iter().copied()).unwrap();
        h.heapify();
        while !h.is_empty() {
            test::black_box(h.pop());
        }
    });
}

#[bench]
fn sort_10_000(b: &mut Bencher) {
    let keys = lcg(4, 10_000);
    b.iter(|| {
        let mut h = Heap8::new();
        h.append(keys.iter().copied()).unwrap();
        h.heapify();
        h.sort();
        test::black_box(&h);
    });
}

#[bench]
fn aux_push_entry_10_000(b: &mut Bencher) {
    let keys = lcg(5, 10_000);
    b.iter(|| {
        let mut h: Heap8Aux<u16> = Heap8Aux::new();
        for &k in &keys {
            h.push_entry(k, k).unwrap();
        }
        test::black_box(&h);
    });
}

#[bench]
fn embed_push_entry_10_000(b: &mut Bencher) {
    let keys = lcg(6, 10_000);
    b.iter(|| {
        let mut h: Heap8Embed<u16> = Heap8Embed::new();
        for &k in &keys {
            h.push_entry(k, k).unwrap();
        }
        test::black_box(&h);
    });
}

#[bench]
fn merge_eight_streams_of_1_000(b: &mut Bencher) {
    let data: Vec<Vec<u16>> = (0..8u64)
        .map(|seed| {
            let mut v = lcg(seed + 10, 1_000);
            v.sort_unstable();
            v
        })
        .collect();
    b.iter(|| {
        let mut streams: Vec<Stream<'_>> = data.iter().map(|s| Stream::new(s)).collect();
        let mut count = 0usize;
        merge(&mut streams, |_k, _src| count += 1);
        test::black_box(count);
    });
}

#[bench]
fn minpos_over_a_single_node(b: &mut Bencher) {
    use minpos8::{minpos, V};
    let v = V::from_array([40, 10, 70, 20, 60, 30, 50, 0]);
    b.iter(|| test::black_box(minpos(test::black_box(v))));
}
