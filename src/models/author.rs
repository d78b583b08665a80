//! Author model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Full author model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

/// Create author request, validated at the boundary
#[derive(Debug, Validate)]
pub struct CreateAuthor {
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: String,
    pub birth_date: NaiveDate,
    pub date_of_death: Option<NaiveDate>,
}

/// Raw add-author form submission
#[derive(Debug, Deserialize)]
pub struct AuthorForm {
    pub name: String,
    pub birthdate: String,
    #[serde(default)]
    pub date_of_death: String,
}

/// Parse a `YYYY-MM-DD` form field into a date
pub(crate) fn parse_date(field: &str, value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::Validation(format!("{} must be a date in YYYY-MM-DD format", field))
    })
}

impl TryFrom<AuthorForm> for CreateAuthor {
    type Error = AppError;

    fn try_from(form: AuthorForm) -> AppResult<Self> {
        let birth_date = parse_date("birthdate", &form.birthdate)?;
        // Empty date_of_death input means "living or unknown"
        let date_of_death = if form.date_of_death.trim().is_empty() {
            None
        } else {
            Some(parse_date("date_of_death", &form.date_of_death)?)
        };

        let create = CreateAuthor {
            name: form.name.trim().to_string(),
            birth_date,
            date_of_death,
        };
        create
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        Ok(create)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, birthdate: &str, date_of_death: &str) -> AuthorForm {
        AuthorForm {
            name: name.to_string(),
            birthdate: birthdate.to_string(),
            date_of_death: date_of_death.to_string(),
        }
    }

    #[test]
    fn empty_date_of_death_means_absent() {
        let create = CreateAuthor::try_from(form("Jane Austen", "1775-12-16", "")).unwrap();
        assert_eq!(create.name, "Jane Austen");
        assert_eq!(create.date_of_death, None);
    }

    #[test]
    fn date_of_death_is_parsed_when_present() {
        let create =
            CreateAuthor::try_from(form("Jane Austen", "1775-12-16", "1817-07-18")).unwrap();
        assert_eq!(
            create.date_of_death,
            NaiveDate::from_ymd_opt(1817, 7, 18)
        );
    }

    #[test]
    fn malformed_birthdate_is_rejected() {
        let result = CreateAuthor::try_from(form("Jane Austen", "december 1775", ""));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn empty_name_is_rejected() {
        let result = CreateAuthor::try_from(form("  ", "1775-12-16", ""));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
