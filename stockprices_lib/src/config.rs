//! Normalizer configuration, loadable from YAML.

use chrono::{DateTime, Local, NaiveDate};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse normalizer config YAML: {0}")]
    YamlParse(#[from] serde_yml::Error),
}

/// Time zone used to turn an epoch timestamp into a trading date.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DateZone {
    /// Zone of the host running the job.
    #[default]
    Local,
    Utc,
}

impl DateZone {
    /// Calendar date of `timestamp` (seconds since epoch) in this zone.
    ///
    /// Returns `None` when the timestamp is outside chrono's range.
    pub fn date_of(self, timestamp: i64) -> Option<NaiveDate> {
        let utc = DateTime::from_timestamp(timestamp, 0)?;
        Some(match self {
            Self::Local => utc.with_timezone(&Local).date_naive(),
            Self::Utc => utc.date_naive(),
        })
    }
}

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizerConfig {
    pub date_zone: DateZone,
}

impl NormalizerConfig {
    pub fn from_yaml_str(yaml_content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml_content)?)
    }
}
