//! Building a word from letter positions.

use std::collections::BTreeMap;

/// Place each letter at each of its positions, then read the positions in
/// ascending order.
///
/// ```
/// use std::collections::BTreeMap;
/// use objkit_records::make_word;
///
/// let letters = BTreeMap::from([('a', vec![0, 1]), ('b', vec![2, 3]), ('c', vec![4, 5])]);
/// assert_eq!(make_word(&letters), "aabbcc");
/// ```
///
/// Positions nobody claims are skipped rather than left as gaps. If two
/// letters claim the same position, the one that sorts last wins.
#[must_use]
pub fn make_word(letters: &BTreeMap<char, Vec<usize>>) -> String {
    let mut placed: BTreeMap<usize, char> = BTreeMap::new();
    for (&letter, positions) in letters {
        for &position in positions {
            let _ = placed.insert(position, letter);
        }
    }
    placed.into_values().collect()
}
