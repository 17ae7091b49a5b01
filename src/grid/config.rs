//! Factor grid configuration

use crate::development::AverageSpec;
use serde::{Deserialize, Serialize};

/// What to do with an override that does not parse as a finite number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidEntryPolicy {
    /// Store a blank selection and carry on (logged as a warning)
    #[default]
    Blank,
    /// Refuse the edit and leave the selection untouched
    Reject,
}

/// How a blank selected factor is treated when developing to ultimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlankFactorPolicy {
    /// Use the fitted LDF for that column
    #[default]
    Fitted,
    /// Leave it blank; the CDFs to its left and their ultimates go blank too
    Propagate,
}

/// Configuration for a factor grid
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub invalid_entry: InvalidEntryPolicy,

    #[serde(default)]
    pub blank_factor: BlankFactorPolicy,

    /// Average used for the fitted LDF row
    #[serde(default)]
    pub average: AverageSpec,
}

impl EngineConfig {
    /// Reject bad overrides and never fill blanks from the fit
    pub fn strict() -> Self {
        Self {
            invalid_entry: InvalidEntryPolicy::Reject,
            blank_factor: BlankFactorPolicy::Propagate,
            ..Default::default()
        }
    }

    pub fn with_average(mut self, average: AverageSpec) -> Self {
        self.average = average;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::development::AverageMethod;

    #[test]
    fn test_deserialize_partial_config() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"invalid_entry": "reject", "average": {"method": "medial", "n_periods": 5}}"#)
                .unwrap();
        assert_eq!(config.invalid_entry, InvalidEntryPolicy::Reject);
        assert_eq!(config.blank_factor, BlankFactorPolicy::Fitted);
        assert_eq!(config.average, AverageSpec::latest(AverageMethod::Medial, 5));

        let empty: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, EngineConfig::default());
    }
}
