#![allow(clippy::uninlined_format_args)]
use std::collections::HashSet;

use freqhist_core::{BarChart, ChartConfig, FrequencyMap, Value, ValueKind};

/// Deterministic pseudo-random sequences over small alphabets.
fn sequences() -> Vec<Vec<i64>> {
    let mut out = vec![vec![], vec![0], vec![1, 1, 1], vec![-3, 7, -3, 0]];
    let mut state = 0x2545_f491_u64;
    for len in [10usize, 100, 1_000, 40_000] {
        let mut seq = Vec::with_capacity(len);
        for _ in 0..len {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            seq.push(i64::try_from(state % 23).unwrap() - 11);
        }
        out.push(seq);
    }
    out
}

#[test]
fn counts_sum_to_input_length() {
    for seq in sequences() {
        let map = FrequencyMap::count(seq.iter().copied());
        let sum: u64 = map.iter().map(|(_, n)| n).sum();
        assert_eq!(sum, seq.len() as u64, "sequence of length {}", seq.len());
        assert_eq!(map.total(), seq.len() as u64);
    }
}

#[test]
fn keys_are_exactly_the_distinct_elements() {
    for seq in sequences() {
        let map = FrequencyMap::count(seq.iter().copied());
        let distinct: HashSet<i64> = seq.iter().copied().collect();
        let keys: HashSet<i64> = map.keys().copied().collect();
        assert_eq!(keys, distinct);
        assert_eq!(map.len(), distinct.len());
        assert!(map.iter().all(|(_, n)| n > 0));
    }
}

#[test]
fn counting_is_idempotent() {
    for seq in sequences() {
        let first = FrequencyMap::count(seq.iter().copied());
        let second = FrequencyMap::count(seq.iter().copied());
        assert_eq!(first, second);
        assert_eq!(first, FrequencyMap::count_parallel(&seq));
    }
}

#[test]
fn scenario_integers() {
    let values = ValueKind::Auto.parse_all(["1", "1", "2", "3", "3", "3"]).unwrap();
    let map = FrequencyMap::count(values);
    assert_eq!(map.len(), 3);
    assert_eq!(map.get(&Value::Integer(1)), Some(2));
    assert_eq!(map.get(&Value::Integer(2)), Some(1));
    assert_eq!(map.get(&Value::Integer(3)), Some(3));
}

#[test]
fn scenario_strings() {
    let values = ValueKind::Auto.parse_all(["a", "b", "a"]).unwrap();
    let map = FrequencyMap::count(values);
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&Value::text("a")), Some(2));
    assert_eq!(map.get(&Value::text("b")), Some(1));
}

#[test]
fn scenario_empty_renders_zero_bars() {
    let map: FrequencyMap<Value> = FrequencyMap::count(Vec::new());
    assert!(map.is_empty());
    let chart = BarChart::from_frequencies(&map, &ChartConfig::default()).unwrap();
    assert_eq!(chart.len(), 0);
}

#[test]
fn scenario_single_value_renders_one_bar() {
    let map = FrequencyMap::count([Value::Integer(5)]);
    assert_eq!(map.get(&Value::Integer(5)), Some(1));
    let chart = BarChart::from_frequencies(&map, &ChartConfig::default()).unwrap();
    assert_eq!(chart.len(), 1);
    assert_eq!(chart.bars[0].height, 1);
    assert_eq!(chart.bars[0].label, "5");
}
