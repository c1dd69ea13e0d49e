// src/match_line.rs
//
// Key Matcher: decides whether a dataset column key denotes the same line as
// the user's selection. Line names in the source are inconsistent: some
// carry an operator prefix ("JR山手線"), some don't ("山手線"), so matching
// tolerates prefix/substring variation. First satisfied rule wins.
//
// Known limitation: rule 2/3 substring checks can false-positive on very
// short line names contained in unrelated longer names. Kept as-is.

use crate::dataset::ColumnKey;
use crate::params::OPERATOR_PREFIXES;

/// A prepared (railway, line) selection. The prefix-stripped forms are
/// computed once here; `matches` is then pure string comparison.
#[derive(Clone, Debug)]
pub struct LineSelection {
    railway: String,
    line: String,
    /// Line with the railway name and any known operator prefix stripped
    /// from the front ("JR山手線" → "山手線").
    clean_line: String,
    /// Line with the first occurrence of the raw railway name removed
    /// (anywhere, not only the front).
    line_sans_railway: String,
}

impl LineSelection {
    pub fn new(railway: &str, line: &str) -> Self {
        let mut clean = line.strip_prefix(railway).unwrap_or(line).trim().to_string();
        for prefix in OPERATOR_PREFIXES {
            if let Some(rest) = clean.strip_prefix(prefix) {
                clean = rest.trim().to_string();
                break;
            }
        }
        let sans = line.replacen(railway, "", 1).trim().to_string();

        Self {
            railway: railway.to_string(),
            line: line.to_string(),
            clean_line: clean,
            line_sans_railway: sans,
        }
    }

    pub fn railway(&self) -> &str { &self.railway }
    pub fn line(&self) -> &str { &self.line }
    pub fn clean_line(&self) -> &str { &self.clean_line }

    /// Does this column key belong to the selection?
    /// Railway compares exactly; the line rules short-circuit in order.
    pub fn matches(&self, key: &ColumnKey) -> bool {
        key.railway == self.railway && self.line_matches(&key.line)
    }

    fn line_matches(&self, key_line: &str) -> bool {
        // 1. Exact, or exact against the prefix-stripped selection
        if key_line == self.line || key_line == self.clean_line {
            return true;
        }
        // 2. Selection contains the key's line ("東京メトロ日比谷線" ⊇ "日比谷線")
        if self.line.contains(key_line) || self.clean_line.contains(key_line) {
            return true;
        }
        // 3. Key's line contains the stripped selection (reverse direction)
        key_line.contains(&self.clean_line) || key_line.contains(&self.line_sans_railway)
    }
}
