//! Batch normalization: pairs the i-th response with the i-th instrument,
//! as the collection job issues one request per instrument in order.

use serde::Serialize;
use serde_json::Value;

use crate::normalize::Normalizer;
use crate::record::{FailureRecord, Instrument, NormalizedRecord, PriceRecord};

/// Counts for one batch run.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub successful: usize,
    pub failed: usize,
}

/// Records produced by one batch, in response order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub records: Vec<NormalizedRecord>,
}

impl BatchReport {
    /// Rows ready for insertion.
    pub fn successes(&self) -> impl Iterator<Item = &PriceRecord> {
        self.records.iter().filter_map(NormalizedRecord::as_success)
    }

    pub fn failures(&self) -> impl Iterator<Item = &FailureRecord> {
        self.records.iter().filter_map(NormalizedRecord::as_failure)
    }

    pub fn summary(&self) -> BatchSummary {
        let successful = self.successes().count();
        BatchSummary {
            processed: self.records.len(),
            successful,
            failed: self.records.len() - successful,
        }
    }
}

impl Normalizer {
    /// Normalize `responses[i]` against `instruments[i]`.
    ///
    /// Responses beyond the end of `instruments` are normalized without a
    /// descriptor. Extra instruments are ignored.
    pub fn normalize_batch(&self, responses: &[Value], instruments: &[Instrument]) -> BatchReport {
        if responses.len() != instruments.len() {
            tracing::warn!(
                responses = responses.len(),
                instruments = instruments.len(),
                "Response and instrument counts differ"
            );
        }

        let records = responses
            .iter()
            .enumerate()
            .map(|(index, raw)| self.normalize(raw, instruments.get(index)))
            .collect();
        let report = BatchReport { records };

        let summary = report.summary();
        tracing::info!(
            processed = summary.processed,
            successful = summary.successful,
            failed = summary.failed,
            "Normalized chart batch"
        );
        report
    }
}
