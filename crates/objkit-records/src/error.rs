use thiserror::Error;

/// Errors returned by the record utilities.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Two records share a key whose values cannot be added.
    #[error("cannot sum values for key '{key}': both must be numbers")]
    NonNumericMerge {
        /// The overlapping key.
        key: String,
    },

    /// Summing two numbers overflowed to a non-finite float.
    #[error("sum for key '{key}' is not a finite number")]
    NonFiniteSum {
        /// The overlapping key.
        key: String,
    },

    /// A customer paid with a bill the ticket seller does not accept.
    #[error("unsupported bill {0}: only 25, 50 and 100 are accepted")]
    UnsupportedBill(u32),

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
