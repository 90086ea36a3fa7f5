//! Instrument descriptors and the flat rows produced by normalization.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

/// Identity placeholder used when no instrument descriptor was supplied.
pub const UNKNOWN_PLACEHOLDER: &str = "unknown";
/// Identity placeholder used when extraction failed.
pub const ERROR_PLACEHOLDER: &str = "error";

/// Identifying metadata for the instrument being queried.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Instrument {
    pub id: i64,
    pub ticker: String,
    pub name: String,
}

impl Instrument {
    pub fn new(id: i64, ticker: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            ticker: ticker.into(),
            name: name.into(),
        }
    }
}

/// One day of prices for one instrument.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PriceRecord {
    pub stock_id: i64,
    pub ticker: String,
    pub name: String,
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    pub adjusted_close: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NoData,
    MalformedData,
}

/// A response that produced no price row.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FailureRecord {
    pub stock_id: Option<i64>,
    pub ticker: String,
    pub name: String,
    pub error: String,
    #[serde(skip)]
    pub kind: FailureKind,
}

impl FailureRecord {
    /// Empty response. Keeps the caller's identity when one was supplied.
    pub fn no_data(instrument: Option<&Instrument>, error: impl Into<String>) -> Self {
        let (stock_id, ticker, name) = match instrument {
            Some(i) => (Some(i.id), i.ticker.clone(), i.name.clone()),
            None => (
                None,
                UNKNOWN_PLACEHOLDER.to_string(),
                UNKNOWN_PLACEHOLDER.to_string(),
            ),
        };
        Self {
            stock_id,
            ticker,
            name,
            error: error.into(),
            kind: FailureKind::NoData,
        }
    }

    /// Extraction failure. Identity is always replaced with placeholders,
    /// even when a valid instrument was supplied.
    pub fn malformed(error: impl Into<String>) -> Self {
        Self {
            stock_id: None,
            ticker: ERROR_PLACEHOLDER.to_string(),
            name: ERROR_PLACEHOLDER.to_string(),
            error: error.into(),
            kind: FailureKind::MalformedData,
        }
    }
}

/// Outcome of normalizing one response.
///
/// Serializes to a single flat object with a `success` flag, the shape
/// the downstream insert step expects.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedRecord {
    Success(PriceRecord),
    Failure(FailureRecord),
}

#[derive(Serialize)]
struct Row<'a, T> {
    #[serde(flatten)]
    body: &'a T,
    success: bool,
}

impl Serialize for NormalizedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success(body) => Row {
                body,
                success: true,
            }
            .serialize(serializer),
            Self::Failure(body) => Row {
                body,
                success: false,
            }
            .serialize(serializer),
        }
    }
}

impl NormalizedRecord {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn as_success(&self) -> Option<&PriceRecord> {
        match self {
            Self::Success(r) => Some(r),
            Self::Failure(_) => None,
        }
    }

    pub fn as_failure(&self) -> Option<&FailureRecord> {
        match self {
            Self::Success(_) => None,
            Self::Failure(r) => Some(r),
        }
    }

    pub fn ticker(&self) -> &str {
        match self {
            Self::Success(r) => &r.ticker,
            Self::Failure(r) => &r.ticker,
        }
    }

    pub fn stock_id(&self) -> Option<i64> {
        match self {
            Self::Success(r) => Some(r.stock_id),
            Self::Failure(r) => r.stock_id,
        }
    }

    /// Error text for failures, `None` on success.
    pub fn error(&self) -> Option<&str> {
        self.as_failure().map(|r| r.error.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lvmh() -> Instrument {
        Instrument::new(1, "MC.PA", "LVMH")
    }

    #[test]
    fn success_serializes_flat() {
        let record = NormalizedRecord::Success(PriceRecord {
            stock_id: 1,
            ticker: "MC.PA".to_string(),
            name: "LVMH".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
            open: 745.2,
            high: 752.3,
            low: 742.1,
            close: 748.5,
            volume: 1234567,
            adjusted_close: 748.5,
        });
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "stock_id": 1,
                "ticker": "MC.PA",
                "name": "LVMH",
                "date": "2024-01-04",
                "open": 745.2,
                "high": 752.3,
                "low": 742.1,
                "close": 748.5,
                "volume": 1234567,
                "adjusted_close": 748.5,
                "success": true
            })
        );
    }

    #[test]
    fn failure_serializes_with_null_id_and_no_kind() {
        let record = NormalizedRecord::Failure(FailureRecord::malformed("quote is empty"));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "stock_id": null,
                "ticker": "error",
                "name": "error",
                "error": "quote is empty",
                "success": false
            })
        );
    }

    #[test]
    fn no_data_keeps_instrument_identity() {
        let record = FailureRecord::no_data(Some(&lvmh()), "No data in response");
        assert_eq!(record.stock_id, Some(1));
        assert_eq!(record.ticker, "MC.PA");
        assert_eq!(record.name, "LVMH");
        assert_eq!(record.kind, FailureKind::NoData);
    }

    #[test]
    fn no_data_without_instrument_uses_unknown() {
        let record = FailureRecord::no_data(None, "No data in response");
        assert_eq!(record.stock_id, None);
        assert_eq!(record.ticker, UNKNOWN_PLACEHOLDER);
        assert_eq!(record.name, UNKNOWN_PLACEHOLDER);
    }

    #[test]
    fn accessors_follow_variant() {
        let failure = NormalizedRecord::Failure(FailureRecord::no_data(Some(&lvmh()), "x"));
        assert!(!failure.is_success());
        assert!(failure.as_success().is_none());
        assert_eq!(failure.error(), Some("x"));
        assert_eq!(failure.ticker(), "MC.PA");
        assert_eq!(failure.stock_id(), Some(1));
    }

    #[test]
    fn instrument_deserializes() {
        let instrument: Instrument =
            serde_json::from_value(json!({ "id": 3, "ticker": "AIR.PA", "name": "Airbus" }))
                .unwrap();
        assert_eq!(instrument, Instrument::new(3, "AIR.PA", "Airbus"));
    }
}
