use crate::core::{Bulk, ConfigProvider, Entry, ExportResult, Pipeline, Score, Storage, COLUMNS};
use crate::domain::model::{DEFAULT_STATUS, VECTOR_LEN};
use crate::utils::error::{ExportError, Result};
use serde::Deserialize;
use serde_json::Value;

pub struct ExportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ExportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

fn decode_record<'de, T: Deserialize<'de>>(kind: &str, id: &str, value: &'de Value) -> Result<T> {
    T::deserialize(value).map_err(|e| ExportError::ProcessingError {
        message: format!("malformed {} record '{}': {}", kind, id, e),
    })
}

/// Builds the 15 output fields for one identifier. The status falls back to
/// "Unknown" when the entry carries no progress record; vector elements past
/// the eleventh are ignored.
fn build_row(id: &str, entry: &Entry, score: &Score) -> Result<Vec<String>> {
    let title = entry
        .meta
        .title
        .as_deref()
        .ok_or_else(|| ExportError::MissingField {
            id: id.to_string(),
            field: "DAH_meta.DAH_entry_title",
        })?;

    let status = entry
        .meta
        .progress
        .as_ref()
        .and_then(|p| p.status.as_deref())
        .unwrap_or(DEFAULT_STATUS);

    let overall = score
        .meta
        .overall
        .as_ref()
        .ok_or_else(|| ExportError::MissingField {
            id: id.to_string(),
            field: "DAH_meta.DAH_overall_score",
        })?;

    if score.vector.len() < VECTOR_LEN {
        return Err(ExportError::ShortVector {
            id: id.to_string(),
            len: score.vector.len(),
            expected: VECTOR_LEN,
        });
    }

    let mut row = Vec::with_capacity(COLUMNS.len());
    row.push(id.to_string());
    row.push(title.to_string());
    row.push(status.to_string());
    row.push(overall.to_string());
    row.extend(score.vector.iter().take(VECTOR_LEN).map(|n| n.to_string()));

    debug_assert_eq!(row.len(), COLUMNS.len());
    Ok(row)
}

impl<S: Storage, C: ConfigProvider> Pipeline for ExportPipeline<S, C> {
    fn extract(&self) -> Result<Bulk> {
        tracing::debug!("Reading bulk document from: {}", self.config.input_path());
        let data = self.storage.read_file(self.config.input_path())?;

        let bulk: Bulk = serde_json::from_slice(&data)?;
        Ok(bulk)
    }

    fn transform(&self, bulk: Bulk) -> Result<ExportResult> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(COLUMNS)?;

        let mut rows = 0;
        for (id, value) in &bulk.entries {
            let entry: Entry = decode_record("entry", id, value)?;

            let score_value = bulk
                .scores
                .get(id)
                .ok_or_else(|| ExportError::MissingScore { id: id.clone() })?;
            let score: Score = decode_record("score", id, score_value)?;

            let row = build_row(id, &entry, &score)?;
            tracing::debug!("Row for entry '{}': {:?}", id, row);
            writer.write_record(&row)?;
            rows += 1;
        }

        writer.flush()?;
        let csv_output = writer
            .into_inner()
            .map_err(|e| ExportError::IoError(e.into_error()))?;

        Ok(ExportResult { rows, csv_output })
    }

    fn load(&self, result: ExportResult) -> Result<String> {
        let output_path = self.config.output_path().to_string();

        tracing::debug!(
            "Writing CSV file ({} bytes) to storage",
            result.csv_output.len()
        );
        self.storage.write_file(&output_path, &result.csv_output)?;

        Ok(output_path)
    }
}
