//! `M620` line → feeder index + settings.

use std::str::FromStr;

use crate::error::{DecodeError, Result};
use crate::settings::{FeederIndex, FeederSettings, MARKER, Tag};

/// Parse a controller response such as
/// `M620 N1 A135 B107.5 C80 F2 U300 V490.2 W980.4 X0`.
///
/// Tokens may appear in any order; a repeated tag keeps its last value.
/// The first bad token fails the whole line.
pub fn decode(line: &str) -> Result<(FeederIndex, FeederSettings)> {
    let payload = payload(line).ok_or_else(|| {
        tracing::debug!(line, "No M620 payload in line");
        DecodeError::MalformedLine
    })?;

    let mut index = None;
    let mut settings = FeederSettings::default();

    for token in payload.split_whitespace() {
        let mut chars = token.chars();
        let Some(code) = chars.next() else {
            continue;
        };
        let raw = chars.as_str();
        tracing::trace!(tag = %code, value = raw, "Decoding token");

        let tag = Tag::from_char(code).ok_or_else(|| {
            tracing::debug!(tag = %code, "Unknown tag");
            DecodeError::UnknownTag(code)
        })?;

        match tag {
            Tag::FeederIndex => index = Some(FeederIndex::new(parse_value(tag, raw)?)),
            Tag::IgnoreFeedbackPin => {
                settings.ignore_feedback_pin = Some(parse_flag(tag, raw)?);
            }
            _ => {
                let value = parse_number(tag, raw)?;
                if let Some(slot) = settings.number_mut(tag) {
                    *slot = Some(value);
                }
            }
        }
    }

    let index = index.ok_or_else(|| {
        tracing::debug!("Line has no feeder index");
        DecodeError::MissingFeederIndex
    })?;
    Ok((index, settings))
}

/// Everything after the first `M620` that is followed by whitespace.
fn payload(line: &str) -> Option<&str> {
    line.match_indices(MARKER).find_map(|(at, _)| {
        let rest = &line[at + MARKER.len()..];
        rest.starts_with(char::is_whitespace).then_some(rest)
    })
}

fn parse_value<T: FromStr>(tag: Tag, raw: &str) -> Result<T> {
    raw.parse().map_err(|_| invalid_value(tag, raw))
}

// `f64::from_str` accepts "inf" and "NaN"; neither is a usable setting.
fn parse_number(tag: Tag, raw: &str) -> Result<f64> {
    let value: f64 = parse_value(tag, raw)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid_value(tag, raw))
    }
}

/// Any non-zero integer sets the flag, however wide.
fn parse_flag(tag: Tag, raw: &str) -> Result<bool> {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_value(tag, raw));
    }
    Ok(digits.bytes().any(|b| b != b'0'))
}

fn invalid_value(tag: Tag, raw: &str) -> DecodeError {
    tracing::debug!(%tag, value = raw, "Invalid value for tag");
    DecodeError::InvalidValue {
        tag: tag.as_char(),
        raw: raw.to_string(),
    }
}
