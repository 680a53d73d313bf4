use canonkit_containers::{
    concat_groups, diff_groups_by, distinct_by_canonical, distinct_iter_by_canonical,
    drop_while_group, group_by_canonical, intersect_groups_by, max_by_canonical, max_by_global,
    min_by_canonical, min_by_global, min_by_group, sort_groups_by_number_desc,
    sort_json_by_canonical, stream_counts_by_canonical, stream_reduce_by_canonical,
    stream_sum_by_canonical, stream_top_k_by_canonical, take_while_group, top_k_by,
    unique_json_by_canonical, union_groups_by, CanonicalJsonMap, CanonicalJsonMultiMap,
    CanonicalJsonSet,
};
use canonkit_core::canonical_key;
use canonkit_json::{build, Json};

/// Two structurally distinct but canonically equal keys.
fn key_ab() -> Json {
    build::obj(vec![
        ("a".into(), build::num(1.0)),
        ("b".into(), build::num(2.0)),
    ])
}

fn key_ba() -> Json {
    build::obj(vec![
        ("b".into(), build::num(2.0)),
        ("a".into(), build::num(1.0)),
    ])
}

#[test]
fn map_last_write_wins_with_stable_position() {
    let mut map = CanonicalJsonMap::new();
    map.insert(&key_ab(), "a");
    map.insert(&key_ba(), "b");
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&key_ab()), Some(&"b"));
    let (stored, _) = map.get_entry(&key_ba()).unwrap();
    assert_eq!(canonical_key(stored), canonical_key(&key_ab()));
}

#[test]
fn map_preserves_insertion_order_across_overwrites() {
    let mut map = CanonicalJsonMap::new();
    map.insert(&build::num(1.0), "one");
    map.insert(&build::num(2.0), "two");
    map.insert(&build::num(1.0), "uno");
    let values: Vec<_> = map.values().copied().collect();
    assert_eq!(values, vec!["uno", "two"]);
}

#[test]
fn map_upsert_inserts_then_updates() {
    let mut map: CanonicalJsonMap<Vec<i32>> = CanonicalJsonMap::new();
    map.upsert(&key_ab(), Vec::new, |_| {}).push(1);
    map.upsert(&key_ba(), Vec::new, |bucket| bucket.push(2));
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&key_ab()), Some(&vec![1, 2]));
}

#[test]
fn set_deduplicates_canonically() {
    let mut set = CanonicalJsonSet::new();
    assert!(set.insert(&key_ab()));
    assert!(!set.insert(&key_ba()));
    assert_eq!(set.len(), 1);
    assert!(set.contains(&key_ba()));
    assert!(set.remove(&key_ab()));
    assert!(set.is_empty());
}

#[test]
fn multimap_accumulates_across_canonically_equal_keys() {
    let mut mm = CanonicalJsonMultiMap::new();
    mm.add(&key_ab(), "x");
    mm.add(&key_ba(), "y");
    assert_eq!(mm.len(), 1);
    assert_eq!(mm.get(&key_ab()), &["x", "y"]);
    assert_eq!(mm.get(&build::num(9.0)), &[] as &[&str]);
}

#[test]
fn group_by_is_canonically_invariant() {
    let items = vec![key_ab(), key_ba()];
    let groups = group_by_canonical(items, |item: &Json| item.clone());
    assert_eq!(groups.len(), 1);
    assert_eq!(groups.get(&key_ab()).len(), 2);
}

#[test]
fn concat_groups_concatenates_on_collision() {
    let a = group_by_canonical(vec![1, 2], |n| build::num((*n % 2) as f64));
    let b = group_by_canonical(vec![4], |n| build::num((*n % 2) as f64));
    let merged = concat_groups(&a, &b);
    assert_eq!(merged.get(&build::num(0.0)), &[2, 4]);
    assert_eq!(merged.get(&build::num(1.0)), &[1]);
}

#[test]
fn union_groups_dedups_by_element_key() {
    let mut a = CanonicalJsonMultiMap::new();
    a.add_all(&build::str("k"), vec!["x", "y"]);
    let mut b = CanonicalJsonMultiMap::new();
    b.add_all(&build::str("k"), vec!["y", "z"]);
    b.add(&build::str("only-b"), "w");
    let u = union_groups_by(&a, &b, |v| v.to_string());
    assert_eq!(u.get(&build::str("k")), &["x", "y", "z"]);
    assert_eq!(u.get(&build::str("only-b")), &["w"]);
}

#[test]
fn intersect_groups_keeps_matching_elements() {
    let mut a = CanonicalJsonMultiMap::new();
    a.add_all(&build::str("k"), vec!["x", "y"]);
    a.add(&build::str("a-only"), "q");
    let mut b = CanonicalJsonMultiMap::new();
    b.add_all(&build::str("k"), vec!["y", "z"]);
    let i = intersect_groups_by(&a, &b, |v| v.to_string());
    assert_eq!(i.len(), 1);
    assert_eq!(i.get(&build::str("k")), &["y"]);
}

#[test]
fn diff_groups_removes_matching_elements() {
    let mut a = CanonicalJsonMultiMap::new();
    a.add_all(&build::str("k"), vec!["x", "y"]);
    a.add(&build::str("a-only"), "q");
    let mut b = CanonicalJsonMultiMap::new();
    b.add(&build::str("k"), "y");
    let d = diff_groups_by(&a, &b, |v| v.to_string());
    assert_eq!(d.get(&build::str("k")), &["x"]);
    assert_eq!(d.get(&build::str("a-only")), &["q"]);
}

#[test]
fn diff_groups_drops_emptied_buckets() {
    let mut a = CanonicalJsonMultiMap::new();
    a.add(&build::str("k"), "x");
    let mut b = CanonicalJsonMultiMap::new();
    b.add(&build::str("k"), "x");
    let d = diff_groups_by(&a, &b, |v| v.to_string());
    assert!(d.is_empty());
}

#[test]
fn top_k_is_stable_descending() {
    let mut mm = CanonicalJsonMultiMap::new();
    mm.add_all(&build::str("k"), vec![("a", 1.0), ("b", 3.0), ("c", 3.0), ("d", 2.0)]);
    let top = top_k_by(&mm, 2, |(_, score)| *score);
    let names: Vec<&str> = top.get(&build::str("k")).iter().map(|(n, _)| *n).collect();
    // b and c tie at 3.0; b came first.
    assert_eq!(names, vec!["b", "c"]);
}

#[test]
fn sort_groups_reorders_buckets() {
    let mut mm = CanonicalJsonMultiMap::new();
    mm.add_all(&build::str("small"), vec![1]);
    mm.add_all(&build::str("big"), vec![1, 2, 3]);
    let sorted = sort_groups_by_number_desc(&mm, |_, bucket| bucket.len() as f64);
    let keys: Vec<String> = sorted.keys().map(canonical_key).collect();
    assert_eq!(keys, vec![r#""big""#.to_string(), r#""small""#.to_string()]);
}

#[test]
fn sort_groups_ties_fall_back_to_canonical_key_order() {
    let mut mm = CanonicalJsonMultiMap::new();
    mm.add(&build::str("z"), 1);
    mm.add(&build::str("a"), 1);
    let sorted = sort_groups_by_number_desc(&mm, |_, bucket| bucket.len() as f64);
    let keys: Vec<String> = sorted.keys().map(canonical_key).collect();
    assert_eq!(keys, vec![r#""a""#.to_string(), r#""z""#.to_string()]);
}

#[test]
fn min_by_group_takes_first_strict_minimum() {
    let mut mm = CanonicalJsonMultiMap::new();
    mm.add_all(&build::str("k"), vec![("a", 2.0), ("b", 1.0), ("c", 1.0)]);
    let mins = min_by_group(&mm, |(_, score)| *score);
    assert_eq!(mins.get(&build::str("k")), Some(&("b", 1.0)));
}

#[test]
fn global_extrema_scan_all_buckets() {
    let mut mm = CanonicalJsonMultiMap::new();
    mm.add_all(&build::str("k1"), vec![5.0, 2.0]);
    mm.add_all(&build::str("k2"), vec![7.0, 2.0]);
    let (min_key, min_value) = min_by_global(&mm, |v| *v).unwrap();
    assert_eq!(canonical_key(min_key), r#""k1""#);
    assert_eq!(*min_value, 2.0);
    let (max_key, max_value) = max_by_global(&mm, |v| *v).unwrap();
    assert_eq!(canonical_key(max_key), r#""k2""#);
    assert_eq!(*max_value, 7.0);
    let empty: CanonicalJsonMultiMap<f64> = CanonicalJsonMultiMap::new();
    assert!(min_by_global(&empty, |v| *v).is_none());
}

#[test]
fn take_and_drop_while_split_bucket_prefixes() {
    let mut mm = CanonicalJsonMultiMap::new();
    mm.add_all(&build::str("k"), vec![1, 2, 9, 3]);
    let taken = take_while_group(&mm, |v, _, _| *v < 5);
    assert_eq!(taken.get(&build::str("k")), &[1, 2]);
    let dropped = drop_while_group(&mm, |v, _, _| *v < 5);
    assert_eq!(dropped.get(&build::str("k")), &[9, 3]);
}

#[test]
fn take_while_predicate_sees_indices() {
    let mut mm = CanonicalJsonMultiMap::new();
    mm.add_all(&build::str("k"), vec![10, 10, 10]);
    let taken = take_while_group(&mm, |_, _, index| index < 2);
    assert_eq!(taken.get(&build::str("k")), &[10, 10]);
}

#[test]
fn stream_reduce_folds_one_pass() {
    let pairs = vec![
        (key_ab(), 1),
        (build::num(7.0), 10),
        (key_ba(), 2),
    ];
    let reduced = stream_reduce_by_canonical(pairs, || 0, |acc, v| *acc += v);
    assert_eq!(reduced.len(), 2);
    assert_eq!(reduced.get(&key_ab()), Some(&3));
    assert_eq!(reduced.get(&build::num(7.0)), Some(&10));
}

#[test]
fn stream_counts_and_sums() {
    let counts = stream_counts_by_canonical(vec![key_ab(), key_ba(), build::num(1.0)]);
    assert_eq!(counts.get(&key_ab()), Some(&2));
    assert_eq!(counts.get(&build::num(1.0)), Some(&1));

    let sums = stream_sum_by_canonical(vec![
        (build::str("k"), 1.5),
        (build::str("k"), 2.5),
    ]);
    assert_eq!(sums.get(&build::str("k")), Some(&4.0));
}

#[test]
fn stream_top_k_keeps_best_per_key() {
    let pairs = (0..100).map(|i| (build::str("k"), i as f64));
    let top = stream_top_k_by_canonical(pairs, 3, |v| *v);
    assert_eq!(top.get(&build::str("k")), &[99.0, 98.0, 97.0]);
}

#[test]
fn stream_reducers_handle_long_lazy_input() {
    // A long generator consumed in a single pass.
    let keys = (0..10_000).map(|i| build::num((i % 3) as f64));
    let counts = stream_counts_by_canonical(keys);
    assert_eq!(counts.len(), 3);
    assert_eq!(counts.get(&build::num(0.0)), Some(&3334));
    assert_eq!(counts.get(&build::num(1.0)), Some(&3333));
}

#[test]
fn array_sort_and_unique_follow_canonical_order() {
    let items = vec![build::num(10.0), build::num(2.0), build::num(10.0)];
    let sorted = sort_json_by_canonical(&items);
    // Canonical-key order is byte order: "10" < "2".
    assert_eq!(
        sorted,
        vec![build::num(10.0), build::num(10.0), build::num(2.0)]
    );
    let unique = unique_json_by_canonical(&items);
    assert_eq!(unique, vec![build::num(10.0), build::num(2.0)]);
}

#[test]
fn distinct_by_canonical_keys_on_projection() {
    let items = vec![("x", key_ab()), ("y", key_ba()), ("z", build::num(1.0))];
    let distinct = distinct_by_canonical(&items, |(_, key)| key.clone());
    let names: Vec<&str> = distinct.iter().map(|(n, _)| *n).collect();
    assert_eq!(names, vec!["x", "z"]);
}

#[test]
fn distinct_iter_is_lazy_and_single_pass() {
    // Infinite source; the adapter must not try to drain it.
    let items = (0..).map(|i| build::num((i % 2) as f64));
    let distinct: Vec<Json> = distinct_iter_by_canonical(items, |v| v.clone())
        .take(2)
        .collect();
    assert_eq!(distinct, vec![build::num(0.0), build::num(1.0)]);
}

#[test]
fn array_extrema_first_wins_ties() {
    let items = vec![build::num(2.0), build::num(1.0), build::num(1.0)];
    assert_eq!(min_by_canonical(&items), Some(&build::num(1.0)));
    assert_eq!(max_by_canonical(&items), Some(&build::num(2.0)));
    assert_eq!(min_by_canonical(&[]), None);
}
