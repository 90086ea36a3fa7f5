mod chart;
pub use self::chart::{AdjCloseBlock, ChartMeta, ChartResult, Indicators, QuoteBlock};
