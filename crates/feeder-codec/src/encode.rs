//! Feeder index + settings → `M620` command line.

use crate::options::EncodeOptions;
use crate::settings::{FeederIndex, FeederSettings, MARKER, Tag};

/// Build an `M620` line with the default [`EncodeOptions`].
pub fn encode(index: FeederIndex, settings: &FeederSettings) -> String {
    encode_with(index, settings, &EncodeOptions::default())
}

/// Like [`encode`], but a missing record yields an empty string instead of a line.
pub fn encode_opt(index: FeederIndex, settings: Option<&FeederSettings>) -> String {
    settings.map_or_else(String::new, |settings| encode(index, settings))
}

/// Build an `M620` line.
///
/// Fields are written in the fixed order A, B, C, F, U, V, W, X. Absent fields
/// are skipped; numbers use `f64`'s shortest `Display` form (`135.0` → `135`).
/// Values are not range-checked.
pub fn encode_with(
    index: FeederIndex,
    settings: &FeederSettings,
    options: &EncodeOptions,
) -> String {
    let mut line = format!("{MARKER} N{index}");

    for tag in Tag::NUMERIC {
        let Some(value) = settings.number(tag) else {
            continue;
        };
        if options.emits(value) {
            line.push_str(&format!(" {tag}{value}"));
        }
    }

    if let Some(ignore) = settings.ignore_feedback_pin {
        line.push_str(if ignore { " X1" } else { " X0" });
    }

    tracing::trace!(%index, %line, "Encoded feeder settings");
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;
    use crate::options::ZeroValues;

    fn full_settings() -> FeederSettings {
        FeederSettings {
            advanced_angle: Some(135.0),
            half_advanced_angle: Some(107.5),
            retract_angle: Some(80.0),
            feed_length: Some(2.0),
            settle_time: Some(300.0),
            pwm_0: Some(490.2),
            pwm_180: Some(980.4),
            ignore_feedback_pin: Some(true),
        }
    }

    #[test]
    fn encodes_all_fields_in_canonical_order() {
        assert_eq!(
            encode(FeederIndex::new(1), &full_settings()),
            "M620 N1 A135 B107.5 C80 F2 U300 V490.2 W980.4 X1"
        );
    }

    #[test]
    fn empty_settings_encode_index_only() {
        let line = encode(FeederIndex::new(9), &FeederSettings::default());
        assert_eq!(line, "M620 N9");

        let (index, settings) = decode(&line).unwrap();
        assert_eq!(index.get(), 9);
        assert!(settings.is_empty());
    }

    #[test]
    fn missing_record_encodes_to_empty_string() {
        assert_eq!(encode_opt(FeederIndex::new(3), None), "");
        assert_eq!(
            encode_opt(FeederIndex::new(3), Some(&FeederSettings::default())),
            "M620 N3"
        );
    }

    #[test]
    fn false_flag_is_written() {
        let settings = FeederSettings {
            ignore_feedback_pin: Some(false),
            ..Default::default()
        };
        let line = encode(FeederIndex::new(0), &settings);
        assert_eq!(line, "M620 N0 X0");

        let (_, decoded) = decode(&line).unwrap();
        assert_eq!(decoded.ignore_feedback_pin, Some(false));
    }

    #[test]
    fn roundtrip_nonzero_values() {
        for index in [0, 1, 47, u32::MAX] {
            let index = FeederIndex::new(index);
            let settings = full_settings();
            assert_eq!(decode(&encode(index, &settings)).unwrap(), (index, settings));
        }
    }

    #[test]
    fn zero_values_emitted_by_default() {
        let settings = FeederSettings {
            advanced_angle: Some(0.0),
            settle_time: Some(0.0),
            ..Default::default()
        };
        let line = encode(FeederIndex::new(2), &settings);
        assert_eq!(line, "M620 N2 A0 U0");
        assert_eq!(decode(&line).unwrap().1, settings);
    }

    #[test]
    fn legacy_options_drop_zero_values() {
        let settings = FeederSettings {
            advanced_angle: Some(0.0),
            feed_length: Some(4.0),
            pwm_0: Some(0.0),
            ignore_feedback_pin: Some(false),
            ..Default::default()
        };
        let line = encode_with(FeederIndex::new(2), &settings, &EncodeOptions::legacy());
        assert_eq!(line, "M620 N2 F4 X0");
    }

    #[test]
    fn options_builder_selects_policy() {
        let options = EncodeOptions::new().with_zero_values(ZeroValues::Drop);
        let settings = FeederSettings {
            retract_angle: Some(0.0),
            ..Default::default()
        };
        assert_eq!(encode_with(FeederIndex::new(5), &settings, &options), "M620 N5");
    }

    #[test]
    fn negative_and_fractional_values_keep_precision() {
        let settings = FeederSettings {
            retract_angle: Some(-12.25),
            pwm_180: Some(0.1),
            ..Default::default()
        };
        assert_eq!(encode(FeederIndex::new(4), &settings), "M620 N4 C-12.25 W0.1");
    }
}
