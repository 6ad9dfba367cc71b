use crate::utils::error::{AppError, AppResult};

const HOURS_SEPARATOR: &str = " hours";
const MINUTES_SUFFIX: &str = " minutes";

/// Parse a duration written as `"<H> hours"` or `"<H> hours, <M> minutes"`
/// into whole minutes.
///
/// The separators are matched literally. A missing minutes segment counts as
/// zero minutes, but a malformed hour (or a present, malformed minutes
/// segment) is a `FormatError`.
pub fn parse_duration(duration: &str) -> AppResult<u32> {
    let (hours, rest) = duration
        .split_once(HOURS_SEPARATOR)
        .ok_or_else(|| format_error(duration))?;

    let hours: u32 = hours.trim().parse().map_err(|_| format_error(duration))?;

    let minutes = match rest.strip_prefix(',') {
        Some(segment) => segment
            .trim()
            .strip_suffix(MINUTES_SUFFIX)
            .and_then(|m| m.trim().parse::<u32>().ok())
            .ok_or_else(|| format_error(duration))?,
        None if rest.trim().is_empty() => 0,
        None => return Err(format_error(duration)),
    };

    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .ok_or_else(|| format_error(duration))
}

fn format_error(duration: &str) -> AppError {
    AppError::FormatError(format!("unrecognised duration '{}'", duration))
}
