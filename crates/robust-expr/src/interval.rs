//! Interval strings such as `"30s"`, `"5min"` or `"1d"`

use crate::{Error, Result};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Length of `unit` in seconds
fn unit_seconds(unit: &str) -> Option<i64> {
    let seconds = match unit {
        "s" | "sec" | "secs" | "second" | "seconds" => 1,
        "min" | "mins" | "minute" | "minutes" => MINUTE,
        "h" | "hour" | "hours" => HOUR,
        "d" | "day" | "days" => DAY,
        "w" | "week" | "weeks" => 7 * DAY,
        "mon" | "month" | "months" => 30 * DAY,
        "y" | "year" | "years" => 365 * DAY,
        _ => return None,
    };
    Some(seconds)
}

/// Parse a positive interval into seconds
///
/// ```rust
/// use robust_expr::parse_interval;
///
/// assert_eq!(parse_interval("5min").unwrap(), 300);
/// assert_eq!(parse_interval("2h").unwrap(), 7200);
/// assert!(parse_interval("5").is_err());
/// ```
pub fn parse_interval(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    let split = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (digits, unit) = trimmed.split_at(split);

    if digits.is_empty() {
        return Err(Error::InvalidInterval(format!("{text:?} has no count")));
    }
    let count: i64 = digits
        .parse()
        .map_err(|_| Error::InvalidInterval(format!("{text:?} count is out of range")))?;
    let seconds = unit_seconds(&unit.to_ascii_lowercase())
        .ok_or_else(|| Error::InvalidInterval(format!("{text:?} has unknown unit {unit:?}")))?;

    let total = count
        .checked_mul(seconds)
        .ok_or_else(|| Error::InvalidInterval(format!("{text:?} overflows")))?;
    if total == 0 {
        return Err(Error::InvalidInterval(format!("{text:?} is empty")));
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units() {
        assert_eq!(parse_interval("30s").unwrap(), 30);
        assert_eq!(parse_interval("10seconds").unwrap(), 10);
        assert_eq!(parse_interval("5min").unwrap(), 300);
        assert_eq!(parse_interval("1hour").unwrap(), 3600);
        assert_eq!(parse_interval("2d").unwrap(), 172_800);
        assert_eq!(parse_interval("1w").unwrap(), 604_800);
        assert_eq!(parse_interval("1mon").unwrap(), 2_592_000);
        assert_eq!(parse_interval("1y").unwrap(), 31_536_000);
        assert_eq!(parse_interval(" 3H ").unwrap(), 10_800);
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in ["", "min", "5", "5m", "-5min", "0h", "1.5h", "99999999999999999999s"] {
            assert!(
                matches!(parse_interval(bad), Err(Error::InvalidInterval(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
