//! Operations on single records.

use std::ops::Deref;

#[cfg(feature = "merge-trace")]
use objkit_common::warning::warn_once;
use serde_json::{Map, Number, Value};

use crate::error::RecordError;

/// A plain key-value record.
pub type Record = Map<String, Value>;

/// Copy a record's own properties into a new record.
///
/// Nested values are owned by the record, so they are cloned along with it;
/// the copy never aliases the original.
#[must_use]
pub fn shallow_copy(record: &Record) -> Record {
    record.clone()
}

/// Merge records into one. When a key appears more than once its values are
/// summed.
///
/// ```
/// use objkit_records::merge_records;
/// use serde_json::json;
///
/// let a = json!({"a": 1, "b": 2}).as_object().cloned().unwrap();
/// let b = json!({"b": 3, "c": 5}).as_object().cloned().unwrap();
/// let merged = merge_records(&[a, b]).unwrap();
/// assert_eq!(serde_json::Value::Object(merged), json!({"a": 1, "b": 5, "c": 5}));
/// ```
///
/// # Errors
///
/// [`RecordError::NonNumericMerge`] if an overlapping key holds anything
/// other than numbers, [`RecordError::NonFiniteSum`] if a float sum
/// overflows.
pub fn merge_records(records: &[Record]) -> Result<Record, RecordError> {
    let mut merged = Record::new();
    for record in records {
        for (key, value) in record {
            if let Some(existing) = merged.get_mut(key) {
                *existing = add_values(key, existing, value)?;
            } else {
                let _ = merged.insert(key.clone(), value.clone());
            }
        }
    }
    Ok(merged)
}

/// Add two JSON numbers. Integers stay integers unless the sum overflows.
fn add_values(key: &str, left: &Value, right: &Value) -> Result<Value, RecordError> {
    let (Value::Number(left), Value::Number(right)) = (left, right) else {
        return Err(RecordError::NonNumericMerge {
            key: key.to_owned(),
        });
    };

    if let (Some(x), Some(y)) = (left.as_i64(), right.as_i64()) {
        if let Some(sum) = x.checked_add(y) {
            return Ok(Value::from(sum));
        }
        #[cfg(feature = "merge-trace")]
        {
            warn_once(
                "Records",
                &format!("integer sum for key '{key}' overflowed, falling back to floating point"),
            );
        }
    }

    let sum = left.as_f64().unwrap_or(f64::NAN) + right.as_f64().unwrap_or(f64::NAN);
    Number::from_f64(sum)
        .map(Value::Number)
        .ok_or_else(|| RecordError::NonFiniteSum {
            key: key.to_owned(),
        })
}

/// Remove the listed keys. Keys that are not present are ignored.
#[must_use]
pub fn remove_properties(mut record: Record, keys: &[&str]) -> Record {
    for key in keys {
        let _ = record.remove(*key);
    }
    record
}

/// Whether two records have the same keys with equal values.
///
/// Key order does not matter.
#[must_use]
pub fn compare_records(left: &Record, right: &Record) -> bool {
    left == right
}

/// Whether a record has no properties.
#[must_use]
pub fn is_empty_record(record: &Record) -> bool {
    record.is_empty()
}

/// A value that can be read but not changed.
///
/// Only shared access is exposed (there is no `DerefMut`), so attempts to
/// insert, remove or overwrite properties do not compile.
#[derive(Debug, Clone, PartialEq)]
pub struct Frozen<T>(T);

impl<T> Frozen<T> {
    /// Give up the read-only view and take the value back.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Frozen<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> AsRef<T> for Frozen<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

/// Freeze a record so none of its properties can change.
#[must_use]
pub fn make_immutable(record: Record) -> Frozen<Record> {
    Frozen(record)
}
