//! Page/limit parsing shared by list endpoints.
//!
//! Pages are 1-indexed. Both values arrive as raw query strings so that a
//! non-numeric value and an out-of-range value produce the same error.

use crate::error::CoreError;

/// Page used when the `page` query parameter is absent.
pub const DEFAULT_PAGE: i64 = 1;

/// Limit used when the `limit` query parameter is absent.
pub const DEFAULT_LIMIT: i64 = 10;

/// Parse the `page` query parameter, defaulting to [`DEFAULT_PAGE`].
pub fn parse_page(raw: Option<&str>) -> Result<i64, CoreError> {
    parse_positive(raw, DEFAULT_PAGE, "Invalid page number")
}

/// Parse the `limit` query parameter, defaulting to [`DEFAULT_LIMIT`].
pub fn parse_limit(raw: Option<&str>) -> Result<i64, CoreError> {
    parse_positive(raw, DEFAULT_LIMIT, "Invalid limit")
}

/// Row offset for a 1-indexed page.
pub fn offset(page: i64, limit: i64) -> i64 {
    (page - 1).saturating_mul(limit)
}

fn parse_positive(raw: Option<&str>, default: i64, message: &str) -> Result<i64, CoreError> {
    let Some(raw) = raw else {
        return Ok(default);
    };

    match raw.trim().parse::<i64>() {
        Ok(value) if value >= 1 => Ok(value),
        _ => Err(CoreError::Validation(format!("{message}: {raw}"))),
    }
}
