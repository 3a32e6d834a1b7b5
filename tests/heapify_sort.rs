use minpos8::Heap8;

#[test]
fn append_then_heapify_restores_invariant_over_arbitrary_sizes() {
    for n in [0usize, 1, 7, 8, 9, 31, 32, 33, 100] {
        let mut h = Heap8::new();
        h.append((0..n as u16).rev()).unwrap();
        h.heapify();
        assert!(h.is_heap(), "size {n} not a valid heap after heapify");
    }
}

#[test]
fn heapify_over_already_sorted_input_is_a_noop() {
    let mut h = Heap8::new();
    h.append(0..200u16).unwrap();
    h.heapify();
    assert!(h.is_heap());
    for expected in 0..200u16 {
        assert_eq!(h.pop(), expected);
    }
}

#[test]
fn sort_produces_descending_order_for_every_size_mod_eight() {
    for n in 0..40usize {
        let mut h = Heap8::new();
        h.append((0..n as u16).map(|k| k * 3 % 97)).unwrap();
        h.heapify();
        h.sort();
        assert_eq!(h.size(), 0);
        assert!(h.is_sorted(n), "size {n} not sorted descending after sort");
    }
}

#[test]
fn sort_matches_repeated_pop() {
    let mut expected = Heap8::new();
    expected.append((0..97u16).rev()).unwrap();
    expected.heapify();
    let mut popped = Vec::new();
    while !expected.is_empty() {
        popped.push(expected.pop());
    }

    let mut sorted = Heap8::new();
    sorted.append((0..97u16).rev()).unwrap();
    sorted.heapify();
    sorted.sort();

    let via_sort: Vec<u16> = (0..97).map(|i| sorted.get(i).unwrap()).collect();
    popped.reverse();
    assert_eq!(via_sort, popped);
}
