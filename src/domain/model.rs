use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Output column labels, in header order. The first four are extracted
/// fields, the rest map positionally onto the score vector.
pub const COLUMNS: [&str; 15] = [
    "ID", "Title", "Status", "Overall", "AU", "AP", "MU", "MP", "CU", "CP", "AL", "AV", "AM", "B",
    "A",
];

/// Number of score-vector elements emitted per row.
pub const VECTOR_LEN: usize = COLUMNS.len() - 4;

/// Status emitted when an entry has no progress record.
pub const DEFAULT_STATUS: &str = "Unknown";

/// The parsed bulk document. Both mappings share identifier keys; the values
/// stay as raw JSON so a malformed record fails at its own row, not at parse
/// time. Requires serde_json's `preserve_order` feature so iteration follows
/// source insertion order.
#[derive(Debug, Clone, Deserialize)]
pub struct Bulk {
    pub entries: Map<String, Value>,
    pub scores: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "DAH_meta")]
    pub meta: EntryMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryMeta {
    #[serde(rename = "DAH_entry_title")]
    pub title: Option<String>,
    #[serde(rename = "DAH_entry_progress")]
    pub progress: Option<Progress>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Progress {
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Score {
    #[serde(rename = "DAH_meta")]
    pub meta: ScoreMeta,
    #[serde(rename = "overallVector", default)]
    pub vector: Vec<Number>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreMeta {
    #[serde(rename = "DAH_overall_score")]
    pub overall: Option<Number>,
}

/// Transform output handed to the load phase.
#[derive(Debug, Clone)]
pub struct ExportResult {
    pub rows: usize,
    pub csv_output: Vec<u8>,
}
