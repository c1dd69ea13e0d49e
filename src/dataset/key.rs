// src/dataset/key.rs

use crate::params::{ITEM_RENT, ITEM_STATION, ITEM_TIME, ITEM_TRANSFERS};

/// What a column holds for its station row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Item {
    /// Station name
    Station,
    /// Minutes to the reference station
    TimeToRef,
    /// Transfer count on that route
    Transfers,
    /// Rent estimate, in units of 10,000 yen
    Rent,
    /// Known key shape, unknown item label; ignored by extraction
    Other,
}

impl Item {
    pub fn from_label(label: &str) -> Item {
        match label {
            ITEM_STATION => Item::Station,
            ITEM_TIME => Item::TimeToRef,
            ITEM_TRANSFERS => Item::Transfers,
            ITEM_RENT => Item::Rent,
            _ => Item::Other,
        }
    }
}

/// A dataset column key, decomposed. Produced at load time from the raw
/// `('railway', 'line', 'item')` strings so matching never re-parses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnKey {
    pub railway: String,
    pub line: String,
    pub item: Item,
}

/// Parse a raw tuple-like key string. Keys that don't fit the structural
/// pattern yield None and are dropped (counted) at load.
///
/// Accepted shape: `('a', 'b', 'c')`: three non-empty single-quoted fields,
/// comma-separated, optional whitespace after each comma.
pub fn parse_key(raw: &str) -> Option<ColumnKey> {
    let inner = raw.strip_prefix('(')?.strip_suffix(')')?;

    let mut fields: [&str; 3] = [""; 3];
    let mut rest = inner;
    for (i, slot) in fields.iter_mut().enumerate() {
        rest = rest.strip_prefix('\'')?;
        let end = rest.find('\'')?;
        if end == 0 {
            return None; // empty field
        }
        *slot = &rest[..end];
        rest = &rest[end + 1..];
        if i < 2 {
            rest = rest.strip_prefix(',')?.trim_start();
        }
    }
    if !rest.is_empty() {
        return None;
    }

    Some(ColumnKey {
        railway: fields[0].to_string(),
        line: fields[1].to_string(),
        item: Item::from_label(fields[2]),
    })
}
