//! NameWrapper argument helpers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::MAX_WRAPPED_LABEL_LENGTH;
use crate::error::{EnsError, Result};

/// An expiry as callers tend to have it at hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expiry {
    /// Unix seconds
    Seconds(u64),
    /// Unix seconds as a decimal string, or an RFC 3339 timestamp
    Text(String),
    /// A point in time
    Date(DateTime<Utc>),
}

impl From<u64> for Expiry {
    fn from(value: u64) -> Self {
        Expiry::Seconds(value)
    }
}

impl From<DateTime<Utc>> for Expiry {
    fn from(value: DateTime<Utc>) -> Self {
        Expiry::Date(value)
    }
}

/// Converts an optional expiry to unix seconds, falling back to `default`.
///
/// A zero or blank expiry counts as unset.
pub fn expiry_to_u64(expiry: Option<&Expiry>, default: u64) -> Result<u64> {
    let Some(expiry) = expiry else {
        return Ok(default);
    };

    match expiry {
        Expiry::Seconds(0) => Ok(default),
        Expiry::Seconds(secs) => Ok(*secs),
        Expiry::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(default);
            }
            if let Ok(secs) = text.parse::<u64>() {
                return Ok(secs);
            }
            DateTime::parse_from_rfc3339(text)
                .map_err(|e| EnsError::InvalidExpiry(format!("'{text}': {e}")))
                .and_then(|dt| timestamp_to_u64(dt.timestamp()))
        }
        Expiry::Date(dt) => timestamp_to_u64(dt.timestamp()),
    }
}

fn timestamp_to_u64(ts: i64) -> Result<u64> {
    u64::try_from(ts).map_err(|_| EnsError::InvalidExpiry(format!("{ts} is before the epoch")))
}

/// Fails if `label` is too long to be stored by the NameWrapper.
pub fn wrapped_label_length_check(label: &str) -> Result<()> {
    let byte_length = label.len();
    if byte_length > MAX_WRAPPED_LABEL_LENGTH {
        return Err(EnsError::WrappedLabelTooLarge {
            label: label.to_string(),
            byte_length,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_expiry_default() {
        assert_eq!(expiry_to_u64(None, 0).unwrap(), 0);
        assert_eq!(expiry_to_u64(Some(&Expiry::Seconds(0)), 7).unwrap(), 7);
        assert_eq!(expiry_to_u64(Some(&Expiry::Text(String::new())), 7).unwrap(), 7);
        assert_eq!(expiry_to_u64(Some(&Expiry::Text("  ".into())), 7).unwrap(), 7);
    }

    #[test]
    fn test_expiry_variants() {
        assert_eq!(expiry_to_u64(Some(&Expiry::Seconds(1_700_000_000)), 0).unwrap(), 1_700_000_000);
        assert_eq!(expiry_to_u64(Some(&Expiry::Text("1700000000".into())), 0).unwrap(), 1_700_000_000);

        let date = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(expiry_to_u64(Some(&Expiry::Date(date)), 0).unwrap(), 1_893_456_000);
        assert_eq!(
            expiry_to_u64(Some(&Expiry::Text("2030-01-01T00:00:00Z".into())), 0).unwrap(),
            1_893_456_000
        );
    }

    #[test]
    fn test_expiry_rejects_garbage() {
        assert!(expiry_to_u64(Some(&Expiry::Text("next tuesday".into())), 0).is_err());

        let before_epoch = Utc.with_ymd_and_hms(1960, 1, 1, 0, 0, 0).unwrap();
        assert!(expiry_to_u64(Some(&Expiry::Date(before_epoch)), 0).is_err());
    }

    #[test]
    fn test_wrapped_label_length_check() {
        assert!(wrapped_label_length_check(&"a".repeat(255)).is_ok());

        let err = wrapped_label_length_check(&"a".repeat(256)).unwrap_err();
        assert!(matches!(err, EnsError::WrappedLabelTooLarge { byte_length: 256, .. }));

        // multi-byte characters count by bytes, not chars
        assert!(wrapped_label_length_check(&"é".repeat(128)).is_err());
    }
}
