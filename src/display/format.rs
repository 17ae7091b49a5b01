//! Number formatting for table cells

use serde::{Deserialize, Serialize};

/// Whether a table holds monetary values or development ratios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Value,
    Ratio,
}

/// Formatting options shared by all tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Text shown for blank and not-yet-observed cells
    pub blank_text: String,

    /// Decimal places for link ratios and factors
    pub ratio_decimals: usize,

    /// Decimal places for losses
    pub value_decimals: usize,

    /// Group thousands in losses with commas
    pub thousands_separator: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            blank_text: String::new(),
            ratio_decimals: 3,
            value_decimals: 0,
            thousands_separator: true,
        }
    }
}

impl DisplayConfig {
    pub fn format(&self, value: Option<f64>, kind: ValueKind) -> String {
        match (value, kind) {
            (Some(v), _) if !v.is_finite() => self.blank_text.clone(),
            (Some(v), ValueKind::Ratio) => format!("{:.*}", self.ratio_decimals, v),
            (Some(v), ValueKind::Value) => {
                let text = format!("{:.*}", self.value_decimals, v);
                if self.thousands_separator {
                    group_thousands(&text)
                } else {
                    text
                }
            }
            (None, _) => self.blank_text.clone(),
        }
    }

    pub fn ratio(&self, value: Option<f64>) -> String {
        self.format(value, ValueKind::Ratio)
    }

    pub fn value(&self, value: Option<f64>) -> String {
        self.format(value, ValueKind::Value)
    }
}

/// Insert commas into the integer part of an already formatted number
fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (integer, fraction) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };

    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    format!("{}{}{}", sign, grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_and_value_formatting() {
        let config = DisplayConfig::default();
        assert_eq!(config.ratio(Some(2.99941)), "2.999");
        assert_eq!(config.value(Some(1234567.4)), "1,234,567");
        assert_eq!(config.value(Some(-9876.0)), "-9,876");
        assert_eq!(config.value(Some(999.0)), "999");
        assert_eq!(config.ratio(None), "");
        assert_eq!(config.ratio(Some(f64::NAN)), "");
    }

    #[test]
    fn test_custom_config() {
        let config = DisplayConfig {
            blank_text: "-".into(),
            value_decimals: 2,
            thousands_separator: false,
            ..Default::default()
        };
        assert_eq!(config.value(Some(1234.5)), "1234.50");
        assert_eq!(config.value(None), "-");

        let grouped = DisplayConfig { value_decimals: 2, ..Default::default() };
        assert_eq!(grouped.value(Some(1234.5)), "1,234.50");
    }
}
