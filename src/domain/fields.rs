use crate::utils::error::{Result, TimeError};

pub(crate) const SECONDS_PER_MINUTE: u64 = 60;
pub(crate) const SECONDS_PER_HOUR: u64 = 3_600;
pub(crate) const SECONDS_PER_DAY: u64 = 86_400;

/// Splits `input` on `:` into exactly three `u8` fields.
///
/// Surrounding whitespace on a field is ignored. Any field that is empty,
/// non-numeric or above 255 is a format error, not a range error.
pub(crate) fn parse_hms(input: &str) -> Result<(u8, u8, u8)> {
    let parts: Vec<&str> = input.split(':').collect();
    if parts.len() != 3 {
        return Err(TimeError::invalid_format(
            input,
            format!("expected 3 colon-separated fields, found {}", parts.len()),
        ));
    }

    let mut fields = [0u8; 3];
    for (slot, part) in fields.iter_mut().zip(&parts) {
        *slot = part.trim().parse::<u8>().map_err(|e| {
            let reason = format!("field '{}' is not a number 0-255: {}", part, e);
            TimeError::invalid_format(input, reason)
        })?;
    }

    Ok((fields[0], fields[1], fields[2]))
}

pub(crate) fn to_seconds(hours: u64, minutes: u64, seconds: u64) -> u64 {
    hours * SECONDS_PER_HOUR + minutes * SECONDS_PER_MINUTE + seconds
}

/// Breaks a second count into (hours, minutes, seconds) with minutes and
/// seconds below 60.
pub(crate) fn split_seconds(total: u64) -> (u64, u64, u64) {
    (
        total / SECONDS_PER_HOUR,
        (total / SECONDS_PER_MINUTE) % 60,
        total % SECONDS_PER_MINUTE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hms() {
        assert_eq!(parse_hms("15:30:45").unwrap(), (15, 30, 45));
        assert_eq!(parse_hms("1:2:3").unwrap(), (1, 2, 3));
        assert_eq!(parse_hms(" 7 :08: 09").unwrap(), (7, 8, 9));
        assert_eq!(parse_hms("255:255:255").unwrap(), (255, 255, 255));
    }

    #[test]
    fn test_parse_hms_rejects_wrong_shape() {
        for input in ["", "15:30", "1:2:3:4", "::", "a:b:c", "256:00:00", "-1:00:00", "1.5:0:0"] {
            let err = parse_hms(input).unwrap_err();
            assert!(
                matches!(err, TimeError::InvalidFormat { .. }),
                "{input} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_split_seconds() {
        assert_eq!(split_seconds(0), (0, 0, 0));
        assert_eq!(split_seconds(9_045), (2, 30, 45));
        assert_eq!(split_seconds(SECONDS_PER_DAY * 2 + 61), (48, 1, 1));
        assert_eq!(to_seconds(2, 30, 45), 9_045);
    }
}
