//! Property tests for the record utilities.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use objkit_records::{Record, group, make_word, merge_records, remove_properties, sell_tickets};
use quickcheck_macros::quickcheck;
use serde_json::Value;

fn int_record(entries: &HashMap<String, i32>) -> Record {
    entries
        .iter()
        .map(|(k, v)| (k.clone(), Value::from(*v)))
        .collect()
}

#[quickcheck]
fn prop_merge_single_record_is_identity(entries: HashMap<String, i32>) -> bool {
    let original = int_record(&entries);
    merge_records(std::slice::from_ref(&original)).is_ok_and(|merged| merged == original)
}

#[quickcheck]
fn prop_merge_sums_per_key(left: HashMap<String, i32>, right: HashMap<String, i32>) -> bool {
    let merged = match merge_records(&[int_record(&left), int_record(&right)]) {
        Ok(merged) => merged,
        Err(_) => return false,
    };
    let sums_match = merged.iter().all(|(key, value)| {
        let expected = i64::from(left.get(key).copied().unwrap_or(0))
            + i64::from(right.get(key).copied().unwrap_or(0));
        value.as_i64() == Some(expected)
    });
    let keys: HashSet<&String> = left.keys().chain(right.keys()).collect();
    sums_match && merged.len() == keys.len()
}

#[quickcheck]
fn prop_remove_properties_drops_exactly_listed(
    entries: HashMap<String, i32>,
    removed: Vec<String>,
) -> bool {
    let keys: Vec<&str> = removed.iter().map(String::as_str).collect();
    let result = remove_properties(int_record(&entries), &keys);
    entries
        .keys()
        .all(|k| result.contains_key(k) != removed.contains(k))
}

#[quickcheck]
fn prop_only_twenty_fives_always_sell(count: u8) -> bool {
    sell_tickets(&vec![25; usize::from(count)]).is_ok_and(|sold| sold)
}

#[quickcheck]
fn prop_group_keeps_every_value(numbers: Vec<i32>) -> bool {
    let grouped = group(&numbers, |n| n.rem_euclid(3), |n| *n);
    let flattened: usize = grouped.iter().map(|(_, values)| values.len()).sum();
    flattened == numbers.len()
}

#[quickcheck]
fn prop_make_word_length_is_distinct_positions(letters: BTreeMap<char, Vec<u8>>) -> bool {
    let letters: BTreeMap<char, Vec<usize>> = letters
        .into_iter()
        .map(|(c, positions)| (c, positions.into_iter().map(usize::from).collect()))
        .collect();
    let distinct: BTreeSet<usize> = letters.values().flatten().copied().collect();
    make_word(&letters).chars().count() == distinct.len()
}
