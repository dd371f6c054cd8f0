//! Search engine tests (linear, recursive binary)


use seqalgo_search::{binary_search, binary_search_in_range, linear_search};
use seqalgo_sort::hybrid_quick_sort;
use test_data_gen::{random_ints, random_sorted_ints, rng};

const SORTED: [i32; 6] = [1, 2, 3, 4, 5, 6];

#[test]
fn test_concrete_scenarios() {
    assert_eq!(binary_search(&SORTED, &7), None);
    assert_eq!(binary_search(&SORTED, &1), Some(0));
    assert_eq!(linear_search(&SORTED, &2), Some(1));
    assert_eq!(linear_search(&SORTED, &7), None);
}

#[test]
fn test_binary_search_finds_present_values() {
    let mut r = rng(21);
    for len in [1, 2, 3, 10, 64, 101] {
        let v = random_sorted_ints(&mut r, len, 30);
        for target in -32..=32 {
            match binary_search(&v, &target) {
                Some(i) => assert_eq!(v[i], target),
                None => assert!(!v.contains(&target)),
            }
        }
    }
}

#[test]
fn test_linear_and_binary_agree_on_sorted_input() {
    let mut r = rng(22);
    let v = random_sorted_ints(&mut r, 200, 50);
    for target in -55..=55 {
        let lin = linear_search(&v, &target);
        let bin = binary_search(&v, &target);
        assert_eq!(lin.is_some(), bin.is_some(), "target {}", target);
        if let (Some(l), Some(b)) = (lin, bin) {
            // Linear returns the first occurrence, binary any occurrence.
            assert!(l <= b);
            assert_eq!(v[l], v[b]);
        }
    }
}

#[test]
fn test_search_after_sort() {
    let mut r = rng(23);
    let mut v = random_ints(&mut r, 500, 1_000);
    let probe = v[137];
    hybrid_quick_sort(&mut v, 12).unwrap();
    let pos = binary_search(&v, &probe).unwrap();
    assert_eq!(v[pos], probe);
}

#[test]
fn test_binary_search_in_range_only_sees_range() {
    let v = [10, 20, 30, 40, 50, 60, 70];
    assert_eq!(binary_search_in_range(&v, 2, 5, &60), Some(5));
    assert_eq!(binary_search_in_range(&v, 2, 5, &70), None);
    assert_eq!(binary_search_in_range(&v, 2, 5, &10), None);
    assert_eq!(binary_search_in_range(&v, 4, 3, &50), None);
}
