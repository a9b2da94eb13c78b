use std::fmt;
use std::str::FromStr;

use crate::types::VmakerError;

/// Position in a video, millisecond precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    pub const fn from_secs(secs: u64) -> Self {
        Self(secs * 1000)
    }

    /// Seconds as ffmpeg filter arguments expect them (`65` or `65.5`)
    pub fn to_ffmpeg(self) -> String {
        let secs = self.0 / 1000;
        let millis = self.0 % 1000;
        if millis == 0 {
            secs.to_string()
        } else {
            format!("{}.{:03}", secs, millis)
                .trim_end_matches('0')
                .to_string()
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0 / 1000;
        write!(
            f,
            "{:02}:{:02}:{:02}",
            total / 3600,
            (total % 3600) / 60,
            total % 60
        )?;
        if self.0 % 1000 != 0 {
            write!(f, ".{:03}", self.0 % 1000)?;
        }
        Ok(())
    }
}

/// Accepts `SS`, `MM:SS` or `HH:MM:SS`; the last part may carry a fraction
impl FromStr for Timestamp {
    type Err = VmakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || VmakerError::InvalidTimestamp(s.to_string());
        let parts: Vec<&str> = s.trim().split(':').collect();
        if parts.is_empty() || parts.len() > 3 || parts.iter().any(|p| p.is_empty()) {
            return Err(invalid());
        }

        let (whole, fraction) = parts[parts.len() - 1]
            .split_once('.')
            .map_or((parts[parts.len() - 1], None), |(w, f)| (w, Some(f)));

        let mut millis: u64 = 0;
        let mut fields: Vec<&str> = parts[..parts.len() - 1].to_vec();
        fields.push(whole);
        let count = fields.len();
        for (i, field) in fields.iter().enumerate() {
            if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            let value: u64 = field.parse().map_err(|_| invalid())?;
            // Only the leading field may exceed its unit
            if i > 0 && value >= 60 {
                return Err(invalid());
            }
            let unit = 60u64.pow((count - 1 - i) as u32);
            millis = value
                .checked_mul(unit * 1000)
                .and_then(|v| v.checked_add(millis))
                .ok_or_else(invalid)?;
        }

        if let Some(fraction) = fraction {
            if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            let padded = format!("{:0<3}", &fraction[..fraction.len().min(3)]);
            millis = padded
                .parse::<u64>()
                .ok()
                .and_then(|frac| millis.checked_add(frac))
                .ok_or_else(invalid)?;
        }

        Ok(Timestamp(millis))
    }
}
