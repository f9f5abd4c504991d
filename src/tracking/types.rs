use crate::error::TrackerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marker appended to click records in the serialized form.
const CLICK_MARKER: &str = "c";

/// Default minimum spacing between accepted motion samples, in milliseconds.
pub const DEFAULT_THROTTLE_INTERVAL_MS: u64 = 100;

/// Discriminator for recorded samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SampleKind {
    Move,
    Click,
}

/// One recorded observation: a surface-relative position, the time gap in
/// milliseconds since the previous recorded sample, and the event kind.
///
/// The first sample of a session measures its gap from tracking start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    pub x: i32,
    pub y: i32,
    pub gap_ms: u64,
    pub kind: SampleKind,
}

impl fmt::Display for Sample {
    /// Serializes as `"<x>,<y>,<gapMs>,<marker>"` with an empty marker for
    /// movement and `c` for clicks, so movement records carry a trailing
    /// comma. Historical format, kept bit-exact.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.kind {
            SampleKind::Move => "",
            SampleKind::Click => CLICK_MARKER,
        };
        write!(f, "{},{},{},{}", self.x, self.y, self.gap_ms, marker)
    }
}

impl FromStr for Sample {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TrackerError::MalformedRecord(s.to_string());

        let mut fields = s.split(',');
        let x = fields
            .next()
            .and_then(|f| f.parse().ok())
            .ok_or_else(malformed)?;
        let y = fields
            .next()
            .and_then(|f| f.parse().ok())
            .ok_or_else(malformed)?;
        let gap_ms = fields
            .next()
            .and_then(|f| f.parse().ok())
            .ok_or_else(malformed)?;
        let kind = match fields.next().ok_or_else(malformed)? {
            "" => SampleKind::Move,
            CLICK_MARKER => SampleKind::Click,
            _ => return Err(malformed()),
        };
        if fields.next().is_some() {
            return Err(malformed());
        }

        Ok(Sample { x, y, gap_ms, kind })
    }
}

/// Tracker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackerConfig {
    /// Minimum spacing between accepted motion samples, in milliseconds.
    /// Motion events arriving faster than this are dropped, not queued.
    pub throttle_interval_ms: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            throttle_interval_ms: DEFAULT_THROTTLE_INTERVAL_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_record_has_trailing_comma() {
        let sample = Sample {
            x: 12,
            y: 34,
            gap_ms: 56,
            kind: SampleKind::Move,
        };
        assert_eq!(sample.to_string(), "12,34,56,");
    }

    #[test]
    fn click_record_carries_marker() {
        let sample = Sample {
            x: 12,
            y: 34,
            gap_ms: 56,
            kind: SampleKind::Click,
        };
        assert_eq!(sample.to_string(), "12,34,56,c");
    }

    #[test]
    fn parses_click_record() {
        let sample: Sample = "12,34,56,c".parse().unwrap();
        assert_eq!((sample.x, sample.y), (12, 34));
        assert_eq!(sample.gap_ms, 56);
        assert_eq!(sample.kind, SampleKind::Click);
    }

    #[test]
    fn parses_move_record() {
        let sample: Sample = "12,34,56,".parse().unwrap();
        assert_eq!(sample.kind, SampleKind::Move);
    }

    #[test]
    fn parses_negative_coordinates() {
        let sample: Sample = "-5,-7,0,".parse().unwrap();
        assert_eq!((sample.x, sample.y), (-5, -7));
    }

    #[test]
    fn rejects_malformed_records() {
        for record in ["", "12,34", "12,34,56", "12,34,56,x", "12,34,56,c,9", "a,b,c,"] {
            assert!(
                record.parse::<Sample>().is_err(),
                "expected {record:?} to be rejected"
            );
        }
    }

    #[test]
    fn default_config_uses_100ms_throttle() {
        assert_eq!(
            TrackerConfig::default().throttle_interval_ms,
            DEFAULT_THROTTLE_INTERVAL_MS
        );
    }
}
