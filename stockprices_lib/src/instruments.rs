//! Seed catalog of instruments collected by the daily price job.
//!
//! Follows a compile-time `include_str!` pattern: the YAML ships inside
//! the binary and is validated on load.

use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

use crate::record::Instrument;

/// Error types for instrument catalog operations.
#[derive(Error, Debug)]
pub enum InstrumentCatalogError {
    #[error("Failed to parse instrument YAML: {0}")]
    YamlParse(#[from] serde_yml::Error),
    #[error("Duplicate instrument id in catalog: {0}")]
    DuplicateId(i64),
    #[error("Duplicate ticker in catalog: {0}")]
    DuplicateTicker(String),
    #[error("Empty ticker for instrument id {0}")]
    EmptyTicker(i64),
}

/// Top-level structure for the instrument YAML file.
#[derive(Deserialize, Debug)]
struct InstrumentFile {
    instruments: Vec<Instrument>,
}

/// Parse and validate instruments from YAML content.
///
/// Tickers are trimmed. Ids and tickers (case-insensitive) must be unique.
pub fn parse_instruments(yaml_content: &str) -> Result<Vec<Instrument>, InstrumentCatalogError> {
    let file: InstrumentFile = serde_yml::from_str(yaml_content)?;

    let mut validated = Vec::with_capacity(file.instruments.len());
    let mut seen_ids = HashSet::new();
    let mut seen_tickers = HashSet::new();

    for mut instrument in file.instruments {
        instrument.ticker = instrument.ticker.trim().to_string();
        if instrument.ticker.is_empty() {
            return Err(InstrumentCatalogError::EmptyTicker(instrument.id));
        }
        if !seen_ids.insert(instrument.id) {
            return Err(InstrumentCatalogError::DuplicateId(instrument.id));
        }
        if !seen_tickers.insert(instrument.ticker.to_ascii_uppercase()) {
            return Err(InstrumentCatalogError::DuplicateTicker(instrument.ticker));
        }
        validated.push(instrument);
    }

    Ok(validated)
}

/// Load the instrument catalog from the embedded YAML file.
pub fn load_instruments() -> Result<Vec<Instrument>, InstrumentCatalogError> {
    let yaml_content = include_str!("../../seed_data/instruments.yml");
    parse_instruments(yaml_content)
}

/// Case-insensitive ticker lookup.
pub fn find_by_ticker<'a>(instruments: &'a [Instrument], ticker: &str) -> Option<&'a Instrument> {
    let ticker = ticker.trim();
    instruments
        .iter()
        .find(|i| i.ticker.eq_ignore_ascii_case(ticker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_instruments() {
        let yaml = r#"
instruments:
  - id: 1
    ticker: "MC.PA"
    name: "LVMH"
  - id: 3
    ticker: " AIR.PA "
    name: "Airbus"
"#;
        let result = parse_instruments(yaml).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0], Instrument::new(1, "MC.PA", "LVMH"));
        assert_eq!(result[1].ticker, "AIR.PA");
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let yaml = r#"
instruments:
  - id: 1
    ticker: "MC.PA"
    name: "LVMH"
  - id: 1
    ticker: "OR.PA"
    name: "L'Oréal"
"#;
        let result = parse_instruments(yaml);
        assert!(matches!(
            result.unwrap_err(),
            InstrumentCatalogError::DuplicateId(1)
        ));
    }

    #[test]
    fn test_duplicate_ticker_rejected_case_insensitive() {
        let yaml = r#"
instruments:
  - id: 1
    ticker: "MC.PA"
    name: "LVMH"
  - id: 2
    ticker: "mc.pa"
    name: "LVMH again"
"#;
        let result = parse_instruments(yaml);
        assert!(matches!(
            result.unwrap_err(),
            InstrumentCatalogError::DuplicateTicker(_)
        ));
    }

    #[test]
    fn test_empty_ticker_rejected() {
        let yaml = r#"
instruments:
  - id: 9
    ticker: "  "
    name: "Nothing"
"#;
        let result = parse_instruments(yaml);
        assert!(matches!(
            result.unwrap_err(),
            InstrumentCatalogError::EmptyTicker(9)
        ));
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let yaml = r#"
instruments:
  - id: 1
    name: "LVMH"
"#;
        let result = parse_instruments(yaml);
        assert!(matches!(
            result.unwrap_err(),
            InstrumentCatalogError::YamlParse(_)
        ));
    }

    #[test]
    fn test_load_instruments_succeeds() {
        let instruments = load_instruments().unwrap();
        assert_eq!(instruments.len(), 5);
        let lvmh = find_by_ticker(&instruments, "MC.PA").unwrap();
        assert_eq!(lvmh.id, 1);
        assert_eq!(lvmh.name, "LVMH");
    }

    #[test]
    fn test_find_by_ticker_ignores_case() {
        let instruments = vec![Instrument::new(4, "SAN.PA", "Sanofi")];
        assert_eq!(find_by_ticker(&instruments, "san.pa").map(|i| i.id), Some(4));
        assert!(find_by_ticker(&instruments, "TTE.PA").is_none());
    }
}
