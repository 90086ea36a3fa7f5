//! Reshapes a raw Yahoo chart response into a flat price row.
//!
//! The response is untrusted. Two failure paths exist:
//! - an absent or empty `chart.result` yields a no-data row that keeps the
//!   caller's instrument identity;
//! - anything wrong below that point yields an error row with placeholder
//!   identity and the extraction error's description.
//!
//! [`Normalizer::normalize`] never panics and never returns an error.

use serde_json::Value;
use yahoo_chart::{is_truthy, ChartResult};

use crate::config::{DateZone, NormalizerConfig};
use crate::error::NormalizeError;
use crate::record::{FailureRecord, Instrument, NormalizedRecord, PriceRecord};

/// Locate the first `chart.result` entry.
///
/// `Ok(None)` means the response carries no data. Containers of the wrong
/// kind are malformed rather than empty.
fn first_result(raw: &Value) -> Result<Option<&Value>, NormalizeError> {
    let root = raw
        .as_object()
        .ok_or_else(|| NormalizeError::Malformed("response is not a JSON object".to_string()))?;

    let chart = root.get("chart");
    if !is_truthy(chart) {
        return Ok(None);
    }
    let chart = chart
        .and_then(Value::as_object)
        .ok_or_else(|| NormalizeError::Malformed("chart is not a JSON object".to_string()))?;

    let results = chart.get("result");
    if !is_truthy(results) {
        return Ok(None);
    }
    let results = results
        .and_then(Value::as_array)
        .ok_or_else(|| NormalizeError::Malformed("chart.result is not an array".to_string()))?;

    Ok(results.first())
}

/// Stateless normalizer holding only its date configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    pub fn date_zone(&self) -> DateZone {
        self.config.date_zone
    }

    /// Normalize one response for one instrument.
    pub fn normalize(&self, raw: &Value, instrument: Option<&Instrument>) -> NormalizedRecord {
        match self.try_normalize(raw, instrument) {
            Ok(record) => {
                tracing::debug!(
                    ticker = %record.ticker,
                    date = %record.date,
                    close = record.close,
                    "Normalized chart response"
                );
                NormalizedRecord::Success(record)
            }
            Err(NormalizeError::NoData) => {
                tracing::debug!(
                    ticker = instrument.map(|i| i.ticker.as_str()).unwrap_or("-"),
                    "Chart response has no data"
                );
                NormalizedRecord::Failure(FailureRecord::no_data(
                    instrument,
                    NormalizeError::NoData.to_string(),
                ))
            }
            Err(e) => {
                tracing::warn!(
                    ticker = instrument.map(|i| i.ticker.as_str()).unwrap_or("-"),
                    "Malformed chart response: {}",
                    e
                );
                NormalizedRecord::Failure(FailureRecord::malformed(e.to_string()))
            }
        }
    }

    fn try_normalize(
        &self,
        raw: &Value,
        instrument: Option<&Instrument>,
    ) -> Result<PriceRecord, NormalizeError> {
        let entry = first_result(raw)?.ok_or(NormalizeError::NoData)?;

        let chart = ChartResult::from_value(entry)?;
        let quote = chart.indicators.first_quote()?;
        let timestamp = chart.first_timestamp()?;

        let date = self
            .config
            .date_zone
            .date_of(timestamp)
            .ok_or(yahoo_chart::Error::InvalidTimestamp(timestamp))?;

        let close = quote.first_close()?;
        let adjusted_close = chart.indicators.first_adjclose().unwrap_or(close);
        let open = quote.first_open()?;
        let high = quote.first_high()?;
        let low = quote.first_low()?;
        let volume = quote.first_volume()?;

        let instrument = instrument.ok_or(NormalizeError::MissingInstrument)?;

        if let Some(symbol) = chart.symbol() {
            if !symbol.eq_ignore_ascii_case(&instrument.ticker) {
                tracing::warn!(
                    expected = %instrument.ticker,
                    received = symbol,
                    "Chart symbol does not match instrument ticker"
                );
            }
        }

        Ok(PriceRecord {
            stock_id: instrument.id,
            ticker: instrument.ticker.clone(),
            name: instrument.name.clone(),
            date,
            open,
            high,
            low,
            close,
            volume,
            adjusted_close,
        })
    }
}

/// Normalize with the default configuration (local-time dates).
pub fn normalize(raw: &Value, instrument: Option<&Instrument>) -> NormalizedRecord {
    Normalizer::default().normalize(raw, instrument)
}
