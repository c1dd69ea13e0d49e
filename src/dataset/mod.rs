// src/dataset/mod.rs
//
// Dataset layer: tuple-key parsing and the session-scoped cached store.
//
// - key:   the `('railway', 'line', 'item')` key strings are parsed ONCE at
//          load time into typed ColumnKey records; nothing downstream touches
//          the raw key strings again.
// - store: DataStore owns the cached dataset for the session. Loaded once,
//          read-only afterwards; reset() is the only invalidation.

pub mod key;
pub mod store;

pub use key::{ColumnKey, Item, parse_key};
pub use store::{DataStore, Dataset, Row, parse_dataset};
