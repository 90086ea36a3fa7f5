use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::{is_truthy, Error};

/// One entry of `chart.result`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChartResult {
    #[serde(default)]
    pub meta: Option<ChartMeta>,

    pub timestamp: Vec<i64>,

    pub indicators: Indicators,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    pub symbol: Option<String>,

    pub currency: Option<String>,

    pub exchange_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Indicators {
    pub quote: Vec<QuoteBlock>,

    #[serde(default, deserialize_with = "falsy_as_none")]
    pub adjclose: Option<Vec<AdjCloseBlock>>,
}

/// Parallel per-period price series. Yahoo emits `null` for periods
/// without trades, hence the optional elements.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuoteBlock {
    pub open: Vec<Option<f64>>,

    pub high: Vec<Option<f64>>,

    pub low: Vec<Option<f64>>,

    pub close: Vec<Option<f64>>,

    #[serde(deserialize_with = "whole_number_series")]
    pub volume: Vec<Option<u64>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AdjCloseBlock {
    #[serde(default, deserialize_with = "falsy_as_none")]
    pub adjclose: Option<Vec<Option<f64>>>,
}

/// Optional blocks are tested for truthiness before their shape: a falsy
/// value of any type reads as absent, a truthy one must match `T`.
fn falsy_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if !is_truthy(Some(&value)) {
        return Ok(None);
    }
    T::deserialize(value).map(Some).map_err(de::Error::custom)
}

fn whole_number<E: de::Error>(n: &Number) -> Result<u64, E> {
    if let Some(v) = n.as_u64() {
        return Ok(v);
    }
    match n.as_f64() {
        Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => Ok(f as u64),
        _ => Err(E::custom(format!(
            "invalid volume `{}`, expected a non-negative whole number",
            n
        ))),
    }
}

/// Volumes arrive as integers, or as floats like `1234567.0`.
fn whole_number_series<'de, D>(deserializer: D) -> Result<Vec<Option<u64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<Option<Number>> = Vec::deserialize(deserializer)?;
    raw.iter()
        .map(|n| n.as_ref().map(whole_number::<D::Error>).transpose())
        .collect()
}

fn first_of<T: Copy>(series: &[Option<T>], field: &'static str) -> Result<T, Error> {
    match series.first() {
        Some(Some(value)) => Ok(*value),
        Some(None) => Err(Error::NullValue { field }),
        None => Err(Error::EmptySeries { field }),
    }
}

impl ChartResult {
    /// Deserialize a single result entry out of an untyped payload.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, Error> {
        Ok(Self::deserialize(value)?)
    }

    pub fn first_timestamp(&self) -> Result<i64, Error> {
        self.timestamp.first().copied().ok_or(Error::EmptySeries {
            field: "timestamp",
        })
    }

    /// Symbol the provider reports for this entry, if any.
    pub fn symbol(&self) -> Option<&str> {
        self.meta.as_ref().and_then(|m| m.symbol.as_deref())
    }
}

impl Indicators {
    pub fn first_quote(&self) -> Result<&QuoteBlock, Error> {
        self.quote
            .first()
            .ok_or(Error::EmptySeries { field: "quote" })
    }

    /// First adjusted close, when the block exists and carries a value.
    ///
    /// Returns `None` for a missing or empty `adjclose` list, a first entry
    /// without values, or a null first value.
    pub fn first_adjclose(&self) -> Option<f64> {
        self.adjclose
            .as_ref()?
            .first()?
            .adjclose
            .as_ref()?
            .first()
            .copied()
            .flatten()
    }
}

impl QuoteBlock {
    pub fn first_open(&self) -> Result<f64, Error> {
        first_of(&self.open, "open")
    }

    pub fn first_high(&self) -> Result<f64, Error> {
        first_of(&self.high, "high")
    }

    pub fn first_low(&self) -> Result<f64, Error> {
        first_of(&self.low, "low")
    }

    pub fn first_close(&self) -> Result<f64, Error> {
        first_of(&self.close, "close")
    }

    pub fn first_volume(&self) -> Result<u64, Error> {
        first_of(&self.volume, "volume")
    }
}
