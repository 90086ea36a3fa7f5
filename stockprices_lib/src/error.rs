//! Error types for the library layer.

use thiserror::Error;

/// Reasons a chart response could not be turned into a price row.
///
/// These never escape [`crate::normalize`]; they are folded into a
/// [`crate::FailureRecord`] whose `error` field carries the Display text.
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// `chart.result` is absent or empty.
    #[error("No data in response")]
    NoData,
    /// The payload has the wrong shape somewhere below `chart.result`.
    #[error("{0}")]
    Malformed(String),
    /// Data was present but there is no instrument to attach it to.
    #[error("instrument descriptor is missing")]
    MissingInstrument,
}

impl From<yahoo_chart::Error> for NormalizeError {
    fn from(e: yahoo_chart::Error) -> Self {
        Self::Malformed(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_data_message_is_fixed() {
        assert_eq!(NormalizeError::NoData.to_string(), "No data in response");
    }

    #[test]
    fn chart_errors_keep_their_description() {
        let err: NormalizeError = yahoo_chart::Error::EmptySeries { field: "volume" }.into();
        assert!(matches!(err, NormalizeError::Malformed(_)));
        assert_eq!(err.to_string(), "volume is empty");
    }
}
