use minpos8::{Entry, Heap8Embed};

#[test]
fn push_entry_keeps_payload_with_its_key() {
    let mut h: Heap8Embed<u32> = Heap8Embed::new();
    h.push_entry(3, 300).unwrap();
    h.push_entry(1, 100).unwrap();
    h.push_entry(2, 200).unwrap();
    assert_eq!(h.top_entry(), Entry::new(1, 100));
    assert_eq!(h.pop_entry(), Entry::new(1, 100));
    assert_eq!(h.pop_entry(), Entry::new(2, 200));
    assert_eq!(h.pop_entry(), Entry::new(3, 300));
}

#[test]
fn extend_set_entry_heapify_round_trip() {
    let mut h: Heap8Embed<u32> = Heap8Embed::new();
    h.extend(20).unwrap();
    for (i, k) in (0..20u16).rev().enumerate() {
        h.set_entry(i, Entry::new(k, u32::from(k) * 10));
    }
    h.heapify();
    assert!(h.is_heap());
    for expected in 0..20u16 {
        let e = h.pop_entry();
        assert_eq!(e.key, expected);
        assert_eq!(e.payload, u32::from(expected) * 10);
    }
}

#[test]
fn sort_leaves_descending_keys_with_aligned_payloads() {
    let mut h: Heap8Embed<u16> = Heap8Embed::new();
    h.append_entries((0..19u16).map(|k| Entry::new(k, k * 2))).unwrap();
    h.heapify();
    h.sort();
    assert_eq!(h.size(), 0);
    assert!(h.is_sorted(19));
}

#[test]
fn heap8_aux_and_heap8_embed_agree_on_pop_order() {
    use minpos8::Heap8Aux;

    let keys: Vec<u16> = (0..300u16).map(|k| (k * 7919) % 4001).collect();

    let mut aux: Heap8Aux<u16> = Heap8Aux::new();
    aux.append_entries(keys.iter().map(|&k| Entry::new(k, k))).unwrap();
    aux.heapify();

    let mut embed: Heap8Embed<u16> = Heap8Embed::new();
    embed.append_entries(keys.iter().map(|&k| Entry::new(k, k))).unwrap();
    embed.heapify();

    while !aux.is_empty() {
        assert_eq!(aux.pop_entry(), embed.pop_entry());
    }
    assert!(embed.is_empty());
}
