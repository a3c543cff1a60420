//! Checks concrete values against a parameter's declared type.
//!
//! Rules per type:
//!
//! | type    | accepted value                                              |
//! |---------|-------------------------------------------------------------|
//! | string  | a JSON string                                               |
//! | number  | a JSON number (JSON cannot carry NaN)                       |
//! | boolean | `true` or `false`                                           |
//! | array   | any JSON array                                              |
//! | object  | a JSON object; arrays and `null` are rejected               |
//! | date    | a string or epoch-milliseconds number naming a valid instant |
//! |         | (ISO dates down to `YYYY`, RFC 3339/2822, minute precision)  |
//! | email   | a string shaped like `local@domain.tld`                     |
//! | url     | a string that parses as an absolute or relative URL         |
//!
//! Any other type tag accepts every value.

use crate::model::parameter::{Parameter, ParameterType, ParameterValue};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;
use url::Url;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Base used to decide whether a relative reference is well formed.
static RELATIVE_BASE: Lazy<Url> =
    Lazy::new(|| Url::parse("http://localhost/").expect("base url is valid"));

/// Largest epoch offset, in milliseconds, a date value may carry
/// (100 000 000 days either side of 1970-01-01).
const MAX_EPOCH_MILLIS: f64 = 8.64e15;

const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Minute-precision times with an offset; a `Z` is rewritten to `+00:00`
/// before these are tried.
const OFFSET_MINUTE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"];

/// Reduced-precision calendar dates: `YYYY` or `YYYY-MM`.
static REDUCED_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})(?:-(\d{2}))?$").expect("reduced date pattern is valid"));

/// Why a value does not fit its parameter's type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("expected a string")]
    NotString,
    #[error("expected a number")]
    NotNumber,
    #[error("expected a boolean")]
    NotBoolean,
    #[error("expected an array")]
    NotArray,
    #[error("expected an object")]
    NotObject,
    #[error("expected a valid date")]
    InvalidDate,
    #[error("expected an email address")]
    InvalidEmail,
    #[error("expected a URL")]
    InvalidUrl,
}

/// True when `value` is acceptable for `parameter`.
pub fn is_valid(parameter: &Parameter, value: &Value) -> bool {
    check(parameter, value).is_ok()
}

/// Like [`is_valid`], but says which rule failed.
pub fn check(parameter: &Parameter, value: &Value) -> Result<(), ValidationError> {
    check_type(&parameter.param_type, value)
}

/// Validates a bound parameter value.
pub fn check_value(bound: &ParameterValue) -> Result<(), ValidationError> {
    check(&bound.parameter, &bound.value)
}

pub fn check_type(param_type: &ParameterType, value: &Value) -> Result<(), ValidationError> {
    let ok = match param_type {
        ParameterType::String => value.is_string(),
        ParameterType::Number => value.as_f64().is_some_and(|n| !n.is_nan()),
        ParameterType::Boolean => value.is_boolean(),
        ParameterType::Array => value.is_array(),
        ParameterType::Object => value.is_object(),
        ParameterType::Date => is_date(value),
        ParameterType::Email => value.as_str().is_some_and(|s| EMAIL_RE.is_match(s)),
        ParameterType::Url => value.as_str().is_some_and(is_url),
        ParameterType::Other(_) => true,
    };

    if ok {
        Ok(())
    } else {
        Err(failure_for(param_type))
    }
}

fn failure_for(param_type: &ParameterType) -> ValidationError {
    match param_type {
        ParameterType::Number => ValidationError::NotNumber,
        ParameterType::Boolean => ValidationError::NotBoolean,
        ParameterType::Array => ValidationError::NotArray,
        ParameterType::Object => ValidationError::NotObject,
        ParameterType::Date => ValidationError::InvalidDate,
        ParameterType::Email => ValidationError::InvalidEmail,
        ParameterType::Url => ValidationError::InvalidUrl,
        ParameterType::String | ParameterType::Other(_) => ValidationError::NotString,
    }
}

fn is_date(value: &Value) -> bool {
    match value {
        Value::String(s) => parses_as_instant(s.trim()),
        Value::Number(n) => n
            .as_f64()
            .is_some_and(|ms| ms.is_finite() && ms.abs() <= MAX_EPOCH_MILLIS),
        _ => false,
    }
}

fn parses_as_instant(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    DateTime::parse_from_rfc3339(s).is_ok()
        || DateTime::parse_from_rfc2822(s).is_ok()
        || NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
        || NAIVE_DATETIME_FORMATS
            .iter()
            .any(|fmt| NaiveDateTime::parse_from_str(s, fmt).is_ok())
        || parses_with_minute_offset(s)
        || is_reduced_date(s)
}

fn parses_with_minute_offset(s: &str) -> bool {
    let normalized = match s.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{}+00:00", rest),
        None => s.to_string(),
    };
    OFFSET_MINUTE_FORMATS
        .iter()
        .any(|fmt| DateTime::parse_from_str(&normalized, fmt).is_ok())
}

fn is_reduced_date(s: &str) -> bool {
    let Some(caps) = REDUCED_DATE_RE.captures(s) else {
        return false;
    };
    let year = caps[1].parse::<i32>().ok();
    let month = match caps.get(2) {
        Some(m) => m.as_str().parse::<u32>().ok(),
        None => Some(1),
    };
    match (year, month) {
        (Some(y), Some(m)) => NaiveDate::from_ymd_opt(y, m, 1).is_some(),
        _ => false,
    }
}

fn is_url(s: &str) -> bool {
    if Url::parse(s).is_ok() {
        return true;
    }
    // Relative references: anything without whitespace that resolves
    // against a base.
    !s.is_empty() && !s.chars().any(char::is_whitespace) && RELATIVE_BASE.join(s).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn param(param_type: ParameterType) -> Parameter {
        Parameter {
            name: "p".to_string(),
            param_type,
            description: None,
            default_value: None,
            ..Default::default()
        }
    }

    #[test]
    fn string_accepts_only_strings() {
        let p = param(ParameterType::String);
        assert!(is_valid(&p, &json!("")));
        assert!(is_valid(&p, &json!("text")));
        assert!(!is_valid(&p, &json!(5)));
        assert!(!is_valid(&p, &Value::Null));
    }

    #[test]
    fn number_rejects_nan_and_numeric_strings() {
        let p = param(ParameterType::Number);
        assert!(is_valid(&p, &json!(42)));
        assert!(is_valid(&p, &json!(-0.5)));
        // serde_json turns a NaN into null.
        assert!(!is_valid(&p, &Value::from(f64::NAN)));
        assert!(!is_valid(&p, &json!("42")));
        assert_eq!(check(&p, &json!("42")), Err(ValidationError::NotNumber));
    }

    #[test]
    fn boolean_is_strict() {
        let p = param(ParameterType::Boolean);
        assert!(is_valid(&p, &json!(true)));
        assert!(is_valid(&p, &json!(false)));
        assert!(!is_valid(&p, &json!("true")));
        assert!(!is_valid(&p, &json!(1)));
    }

    #[test]
    fn array_and_object_are_distinct() {
        let array = param(ParameterType::Array);
        let object = param(ParameterType::Object);
        assert!(is_valid(&array, &json!([])));
        assert!(is_valid(&array, &json!([1, "a", null])));
        assert!(!is_valid(&array, &json!({})));
        assert!(is_valid(&object, &json!({})));
        assert!(is_valid(&object, &json!({"k": [1]})));
        assert!(!is_valid(&object, &json!([])));
        assert!(!is_valid(&object, &Value::Null));
    }

    #[test]
    fn dates_from_strings_and_epoch_millis() {
        let p = param(ParameterType::Date);
        assert!(is_valid(&p, &json!("2024-02-29")));
        assert!(is_valid(&p, &json!("2024-02-29T10:15:00Z")));
        assert!(is_valid(&p, &json!("2024-02-29T10:15:00.250+02:00")));
        assert!(is_valid(&p, &json!("2024-02-29 10:15:00")));
        assert!(is_valid(&p, &json!("Thu, 29 Feb 2024 10:15:00 +0000")));
        assert!(is_valid(&p, &json!(1_700_000_000_000i64)));
        assert!(!is_valid(&p, &json!("2023-02-29")));
        assert!(!is_valid(&p, &json!("tomorrow")));
        assert!(!is_valid(&p, &json!("")));
        assert!(!is_valid(&p, &json!(9e15)));
        assert!(!is_valid(&p, &json!(true)));
    }

    #[test]
    fn reduced_precision_and_minute_offset_dates() {
        let p = param(ParameterType::Date);
        assert!(is_valid(&p, &json!("2024")));
        assert!(is_valid(&p, &json!("2024-02")));
        assert!(is_valid(&p, &json!("2024-02-29T10:15Z")));
        assert!(is_valid(&p, &json!("2024-02-29T10:15+02:00")));
        assert!(is_valid(&p, &json!("2024-02-29T10:15-0530")));
        assert!(!is_valid(&p, &json!("2024-13")));
        assert!(!is_valid(&p, &json!("20245")));
        assert!(!is_valid(&p, &json!("2023-02-29T10:15Z")));
    }

    #[test]
    fn email_shape() {
        let p = param(ParameterType::Email);
        assert!(is_valid(&p, &json!("a@b.com")));
        assert!(is_valid(&p, &json!("first.last+tag@sub.example.org")));
        assert!(!is_valid(&p, &json!("not-an-email")));
        assert!(!is_valid(&p, &json!("a@b")));
        assert!(!is_valid(&p, &json!("a b@c.com")));
        assert!(!is_valid(&p, &json!(["a@b.com"])));
    }

    #[test]
    fn absolute_and_relative_urls() {
        let p = param(ParameterType::Url);
        assert!(is_valid(&p, &json!("https://example.com/login?next=/home")));
        assert!(is_valid(&p, &json!("mailto:qa@example.com")));
        assert!(is_valid(&p, &json!("/login")));
        assert!(is_valid(&p, &json!("../assets/logo.png")));
        assert!(!is_valid(&p, &json!("")));
        assert!(!is_valid(&p, &json!("two words")));
        assert!(!is_valid(&p, &json!("http://[::1")));
        assert!(!is_valid(&p, &json!(80)));
    }

    #[test]
    fn unknown_type_accepts_anything() {
        let p = param(ParameterType::Other("uuid".to_string()));
        assert!(is_valid(&p, &Value::Null));
        assert!(is_valid(&p, &json!({"x": 1})));
    }

    #[test]
    fn bound_values_are_checked_against_their_parameter() {
        let bound = ParameterValue::new(param(ParameterType::Email), json!("qa@example.com"));
        assert_eq!(check_value(&bound), Ok(()));
        let bound = ParameterValue::new(param(ParameterType::Email), json!("qa"));
        assert_eq!(check_value(&bound), Err(ValidationError::InvalidEmail));
    }
}
