//! Feeder settings record and the wire tags that address its fields.

use serde::{Deserialize, Serialize};

/// Command word that prefixes every feeder-settings line.
pub const MARKER: &str = "M620";

// ---------------------------------------------------------------------------
// Wire tags
// ---------------------------------------------------------------------------

/// One-letter token prefixes understood on an `M620` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `N`: feeder index
    FeederIndex,
    /// `A`
    AdvancedAngle,
    /// `B`
    HalfAdvancedAngle,
    /// `C`
    RetractAngle,
    /// `F`
    FeedLength,
    /// `U`
    SettleTime,
    /// `V`
    Pwm0,
    /// `W`
    Pwm180,
    /// `X`: 0/1 flag
    IgnoreFeedbackPin,
}

impl Tag {
    /// Numeric setting tags, in the order the encoder writes them.
    pub const NUMERIC: [Tag; 7] = [
        Tag::AdvancedAngle,
        Tag::HalfAdvancedAngle,
        Tag::RetractAngle,
        Tag::FeedLength,
        Tag::SettleTime,
        Tag::Pwm0,
        Tag::Pwm180,
    ];

    /// Tags are case-sensitive; `n1` is not a feeder index.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'N' => Some(Self::FeederIndex),
            'A' => Some(Self::AdvancedAngle),
            'B' => Some(Self::HalfAdvancedAngle),
            'C' => Some(Self::RetractAngle),
            'F' => Some(Self::FeedLength),
            'U' => Some(Self::SettleTime),
            'V' => Some(Self::Pwm0),
            'W' => Some(Self::Pwm180),
            'X' => Some(Self::IgnoreFeedbackPin),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::FeederIndex => 'N',
            Self::AdvancedAngle => 'A',
            Self::HalfAdvancedAngle => 'B',
            Self::RetractAngle => 'C',
            Self::FeedLength => 'F',
            Self::SettleTime => 'U',
            Self::Pwm0 => 'V',
            Self::Pwm180 => 'W',
            Self::IgnoreFeedbackPin => 'X',
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// ---------------------------------------------------------------------------
// Feeder index
// ---------------------------------------------------------------------------

/// Which physical feeder a line addresses (`N` tag).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeederIndex(u32);

impl FeederIndex {
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for FeederIndex {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for FeederIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Settings record
// ---------------------------------------------------------------------------

/// Actuation parameters for one feeder.
///
/// Every field is optional: `None` means "not specified" and is never written
/// to the wire, whereas `Some(0.0)` / `Some(false)` are real values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeederSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub half_advanced_angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retract_angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settle_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pwm_0: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pwm_180: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_feedback_pin: Option<bool>,
}

impl FeederSettings {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Value of a numeric field. `None` for absent fields and non-numeric tags.
    pub fn number(&self, tag: Tag) -> Option<f64> {
        match tag {
            Tag::AdvancedAngle => self.advanced_angle,
            Tag::HalfAdvancedAngle => self.half_advanced_angle,
            Tag::RetractAngle => self.retract_angle,
            Tag::FeedLength => self.feed_length,
            Tag::SettleTime => self.settle_time,
            Tag::Pwm0 => self.pwm_0,
            Tag::Pwm180 => self.pwm_180,
            Tag::FeederIndex | Tag::IgnoreFeedbackPin => None,
        }
    }

    pub(crate) fn number_mut(&mut self, tag: Tag) -> Option<&mut Option<f64>> {
        match tag {
            Tag::AdvancedAngle => Some(&mut self.advanced_angle),
            Tag::HalfAdvancedAngle => Some(&mut self.half_advanced_angle),
            Tag::RetractAngle => Some(&mut self.retract_angle),
            Tag::FeedLength => Some(&mut self.feed_length),
            Tag::SettleTime => Some(&mut self.settle_time),
            Tag::Pwm0 => Some(&mut self.pwm_0),
            Tag::Pwm180 => Some(&mut self.pwm_180),
            Tag::FeederIndex | Tag::IgnoreFeedbackPin => None,
        }
    }

    /// Overlay the fields present in `other`, leaving the rest untouched.
    pub fn merge(&mut self, other: &FeederSettings) {
        for tag in Tag::NUMERIC {
            if let (Some(value), Some(slot)) = (other.number(tag), self.number_mut(tag)) {
                *slot = Some(value);
            }
        }
        if other.ignore_feedback_pin.is_some() {
            self.ignore_feedback_pin = other.ignore_feedback_pin;
        }
    }
}

// ---------------------------------------------------------------------------
// Full line
// ---------------------------------------------------------------------------

/// A decoded `M620` line: the addressed feeder plus its settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeederConfig {
    pub index: FeederIndex,
    #[serde(default)]
    pub settings: FeederSettings,
}

impl FeederConfig {
    pub fn new(index: impl Into<FeederIndex>, settings: FeederSettings) -> Self {
        Self {
            index: index.into(),
            settings,
        }
    }
}

impl std::str::FromStr for FeederConfig {
    type Err = crate::error::DecodeError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (index, settings) = crate::decode::decode(line)?;
        Ok(Self { index, settings })
    }
}

impl std::fmt::Display for FeederConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::encode::encode(self.index, &self.settings))
    }
}
