//! Query parameter types for API handlers.

use persons_core::error::CoreError;
use persons_core::pagination;
use persons_db::models::person::PersonFilter;
use serde::Deserialize;

/// `GET /persons` query string.
///
/// Everything arrives as raw strings so malformed numbers surface as
/// validation errors with a useful message instead of a generic rejection.
#[derive(Debug, Default, Deserialize)]
pub struct PersonListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
}

impl PersonListParams {
    /// `(page, limit)`, defaulted and checked to be >= 1.
    pub fn pagination(&self) -> Result<(i64, i64), CoreError> {
        let page = pagination::parse_page(self.page.as_deref())?;
        let limit = pagination::parse_limit(self.limit.as_deref())?;
        Ok((page, limit))
    }

    /// Typed filter. Blank values are dropped; a non-integer `age` is an
    /// error.
    pub fn filter(&self) -> Result<PersonFilter, CoreError> {
        let age = match non_blank(&self.age) {
            Some(raw) => Some(
                raw.parse::<i32>()
                    .map_err(|_| CoreError::Validation(format!("Invalid age: {raw}")))?,
            ),
            None => None,
        };

        Ok(PersonFilter {
            name: non_blank(&self.name).map(str::to_string),
            surname: non_blank(&self.surname).map(str::to_string),
            age,
            gender: non_blank(&self.gender).map(str::to_string),
            nationality: non_blank(&self.nationality).map(str::to_string),
        })
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_page_and_limit() {
        let params = PersonListParams::default();
        assert_eq!(params.pagination().unwrap(), (1, 10));
    }

    #[test]
    fn rejects_zero_page() {
        let params = PersonListParams {
            page: Some("0".into()),
            ..Default::default()
        };
        assert!(params.pagination().is_err());
    }

    #[test]
    fn blank_filters_are_dropped() {
        let params = PersonListParams {
            name: Some("  ".into()),
            gender: Some(String::new()),
            nationality: Some("RU".into()),
            ..Default::default()
        };
        let filter = params.filter().unwrap();
        assert_eq!(
            filter,
            PersonFilter {
                nationality: Some("RU".into()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn parses_age_filter() {
        let params = PersonListParams {
            age: Some("42".into()),
            ..Default::default()
        };
        assert_eq!(params.filter().unwrap().age, Some(42));
    }

    #[test]
    fn rejects_non_numeric_age() {
        let params = PersonListParams {
            age: Some("forty".into()),
            ..Default::default()
        };
        assert!(matches!(params.filter(), Err(CoreError::Validation(_))));
    }
}
