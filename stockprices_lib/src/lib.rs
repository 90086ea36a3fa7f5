//! Library layer for the daily stock price job.
//!
//! Turns raw Yahoo Finance chart responses into flat price rows, with
//! explicit failure rows for empty or malformed payloads.

pub mod batch;
pub mod config;
pub mod error;
pub mod instruments;
pub mod normalize;
pub mod record;

pub use yahoo_chart;

pub use batch::{BatchReport, BatchSummary};
pub use config::{ConfigError, DateZone, NormalizerConfig};
pub use error::NormalizeError;
pub use instruments::{find_by_ticker, load_instruments, parse_instruments, InstrumentCatalogError};
pub use normalize::{normalize, Normalizer};
pub use record::{FailureKind, FailureRecord, Instrument, NormalizedRecord, PriceRecord};
