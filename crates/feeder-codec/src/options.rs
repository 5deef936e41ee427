//! Encoder configuration.

use serde::{Deserialize, Serialize};

/// How the encoder treats numeric fields that are present but zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroValues {
    /// Write every present field, so `Some(0.0)` survives a round trip.
    #[default]
    Emit,
    /// Treat zero (and NaN) like an absent field. Matches the output older
    /// host software sent to controllers.
    Drop,
}

/// Encoder settings; the default writes every present field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    pub zero_values: ZeroValues,
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Byte-for-byte compatible with the legacy host encoder.
    pub fn legacy() -> Self {
        Self::new().with_zero_values(ZeroValues::Drop)
    }

    pub fn with_zero_values(mut self, zero_values: ZeroValues) -> Self {
        self.zero_values = zero_values;
        self
    }

    /// Whether a present numeric value should be written.
    pub(crate) fn emits(&self, value: f64) -> bool {
        match self.zero_values {
            ZeroValues::Emit => true,
            ZeroValues::Drop => value != 0.0 && !value.is_nan(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_emits_zero() {
        let options = EncodeOptions::default();
        assert_eq!(options.zero_values, ZeroValues::Emit);
        assert!(options.emits(0.0));
    }

    #[test]
    fn legacy_drops_zero_and_nan() {
        let options = EncodeOptions::legacy();
        assert!(!options.emits(0.0));
        assert!(!options.emits(-0.0));
        assert!(!options.emits(f64::NAN));
        assert!(options.emits(0.5));
        assert!(options.emits(-1.0));
    }

    #[test]
    fn options_load_from_json() {
        let options: EncodeOptions = serde_json::from_str(r#"{"zero_values": "drop"}"#).unwrap();
        assert_eq!(options, EncodeOptions::legacy());

        let options: EncodeOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, EncodeOptions::default());
    }
}
