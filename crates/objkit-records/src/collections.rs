//! Sorting and grouping over arrays of records.

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// A country/city pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CityRecord {
    /// Country name.
    pub country: String,
    /// City name.
    pub city: String,
}

impl CityRecord {
    /// Create a record from a country and city name.
    #[must_use]
    pub fn new(country: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            city: city.into(),
        }
    }
}

/// Sort by country, then by city within a country, both ascending.
pub fn sort_cities(cities: &mut [CityRecord]) {
    cities.sort_by(|a, b| a.country.cmp(&b.country).then_with(|| a.city.cmp(&b.city)));
}

/// Group items into a multimap.
///
/// `key_of` picks the group key and `value_of` the stored value. Groups
/// appear in the order their key is first seen; values keep input order.
///
/// ```
/// use objkit_records::{CityRecord, group};
///
/// let cities = [
///     CityRecord::new("Belarus", "Brest"),
///     CityRecord::new("Russia", "Omsk"),
///     CityRecord::new("Belarus", "Grodno"),
/// ];
/// let grouped = group(&cities, |c| c.country.clone(), |c| c.city.clone());
/// assert_eq!(
///     grouped,
///     vec![
///         ("Belarus".to_string(), vec!["Brest".to_string(), "Grodno".to_string()]),
///         ("Russia".to_string(), vec!["Omsk".to_string()]),
///     ]
/// );
/// ```
#[must_use]
pub fn group<'a, T, K, V, KF, VF>(
    items: impl IntoIterator<Item = &'a T>,
    mut key_of: KF,
    mut value_of: VF,
) -> Vec<(K, Vec<V>)>
where
    T: 'a,
    K: Eq + Hash + Clone,
    KF: FnMut(&T) -> K,
    VF: FnMut(&T) -> V,
{
    let mut groups: Vec<(K, Vec<V>)> = Vec::new();
    let mut index: HashMap<K, usize> = HashMap::new();

    for item in items {
        let key = key_of(item);
        let value = value_of(item);
        if let Some(&slot) = index.get(&key) {
            groups[slot].1.push(value);
        } else {
            let _ = index.insert(key.clone(), groups.len());
            groups.push((key, vec![value]));
        }
    }
    groups
}
