//! Small utilities for plain key-value records and arrays of them.
//!
//! A [`Record`] is a JSON object (`serde_json::Map`), which gives the same
//! "string key to arbitrary value" shape as a plain object literal.
//!
//! # Scope
//!
//! - **Records** - copy, merge with summing, remove keys, compare, freeze
//! - **Words** - assemble a word from letter positions
//! - **Tickets** - change-making simulation for a ticket queue
//! - **Shapes** - a rectangle with an area
//! - **JSON** - typed round-trip helpers
//! - **Collections** - sort city records, group into a multimap

/// Sorting and grouping of record arrays.
pub mod collections;
/// Errors for the fallible utilities.
pub mod error;
/// JSON serialization helpers.
pub mod json;
/// Record copy, merge, comparison and freezing.
pub mod record;
/// Rectangle shape.
pub mod shapes;
/// Ticket queue simulation.
pub mod tickets;
/// Word assembly from letter positions.
pub mod word;

// Re-exports for convenience
pub use collections::{CityRecord, group, sort_cities};
pub use error::RecordError;
pub use json::{from_json, to_json};
pub use record::{
    Frozen, Record, compare_records, is_empty_record, make_immutable, merge_records,
    remove_properties, shallow_copy,
};
pub use shapes::Rectangle;
pub use tickets::{Bill, sell_tickets};
pub use word::make_word;
