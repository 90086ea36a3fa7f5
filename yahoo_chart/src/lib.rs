//! Typed view of the Yahoo Finance v8 `chart` payload.
//!
//! Only the parts needed to build a daily price row are modelled. Unknown
//! keys are ignored so that provider additions do not break parsing.

mod errors;
mod truthy;
pub mod types;
pub use self::errors::Error;
pub use self::truthy::is_truthy;
pub use self::types::{AdjCloseBlock, ChartMeta, ChartResult, Indicators, QuoteBlock};
