use crate::{CoreError, MealFields, Registration, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use error_location::ErrorLocation;
use serde_json::{Map, Value};

/// Naive (offset-less) layouts accepted for a meal date, interpreted as UTC
const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const NAIVE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Validates client request bodies into typed domain input
pub struct RequestValidator;

impl RequestValidator {
    /// Validate a create/update meal body `{name, description, isOnDiet, date}`
    #[track_caller]
    pub fn validate_meal(body: &Value) -> CoreErrorResult<MealFields> {
        let object = Self::object(body)?;

        Ok(MealFields {
            name: Self::required_string(object, "name")?,
            description: Self::required_string(object, "description")?,
            is_on_diet: Self::required_bool(object, "isOnDiet")?,
            occurred_at: Self::required_date(object, "date")?,
        })
    }

    /// Validate a registration body `{name, email}`
    #[track_caller]
    pub fn validate_registration(body: &Value) -> CoreErrorResult<Registration> {
        let object = Self::object(body)?;

        let name = Self::required_string(object, "name")?;
        let email = Self::required_string(object, "email")?;

        if name.trim().is_empty() {
            return Err(CoreError::field("name", "name cannot be empty"));
        }

        if !email.contains('@') {
            return Err(CoreError::field("email", "email must be a valid address"));
        }

        Ok(Registration {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
        })
    }

    /// Coerce a date-like JSON value into a point in time.
    ///
    /// Numbers are epoch milliseconds. Strings may be RFC 3339, RFC 2822,
    /// `YYYY-MM-DD` or an offset-less date-time (taken as UTC).
    #[track_caller]
    pub fn coerce_date(value: &Value, field: &str) -> CoreErrorResult<DateTime<Utc>> {
        let parsed = match value {
            Value::Number(number) => number
                .as_i64()
                .or_else(|| {
                    number
                        .as_f64()
                        .filter(|f| f.is_finite())
                        .map(|f| f.trunc() as i64)
                })
                .and_then(DateTime::from_timestamp_millis),
            Value::String(raw) => Self::parse_date_string(raw.trim()),
            _ => None,
        };

        parsed.ok_or_else(|| CoreError::Validation {
            message: format!("{} must be a valid date", field),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    fn parse_date_string(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }

        if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
            return Some(dt.with_timezone(&Utc));
        }

        for format in NAIVE_DATE_TIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(naive.and_utc());
            }
        }

        NaiveDate::parse_from_str(raw, NAIVE_DATE_FORMAT)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }

    #[track_caller]
    fn object(body: &Value) -> CoreErrorResult<&Map<String, Value>> {
        body.as_object().ok_or_else(|| CoreError::Validation {
            message: "request body must be a JSON object".to_string(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    fn required<'a>(object: &'a Map<String, Value>, field: &str) -> CoreErrorResult<&'a Value> {
        match object.get(field) {
            Some(Value::Null) | None => {
                Err(CoreError::field(field, format!("{} is required", field)))
            }
            Some(value) => Ok(value),
        }
    }

    #[track_caller]
    fn required_string(object: &Map<String, Value>, field: &str) -> CoreErrorResult<String> {
        match Self::required(object, field)? {
            Value::String(s) => Ok(s.clone()),
            _ => Err(CoreError::field(field, format!("{} must be a string", field))),
        }
    }

    #[track_caller]
    fn required_bool(object: &Map<String, Value>, field: &str) -> CoreErrorResult<bool> {
        match Self::required(object, field)? {
            Value::Bool(b) => Ok(*b),
            _ => Err(CoreError::field(field, format!("{} must be a boolean", field))),
        }
    }

    #[track_caller]
    fn required_date(
        object: &Map<String, Value>,
        field: &str,
    ) -> CoreErrorResult<DateTime<Utc>> {
        let value = Self::required(object, field)?;
        Self::coerce_date(value, field)
    }
}
