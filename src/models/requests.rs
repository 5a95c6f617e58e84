//! Request DTOs for the posts API
//!
//! Defines the structure of incoming query strings and request bodies.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Request body for create (POST /api) and update (PUT /api/:id)
///
/// # Fields
/// - `title`: The post title. Optional on the wire; create rejects it when
///   missing or empty, update stores whatever arrives.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct TitleRequest {
    /// The post title
    #[serde(default)]
    #[schema(example = "post 4")]
    pub title: Option<String>,
}

impl TitleRequest {
    /// Creates a request carrying the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }

    /// Consumes the request, yielding the title or an empty string
    pub fn into_title(self) -> String {
        self.title.unwrap_or_default()
    }
}

/// Query string for the list operation (GET /api)
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Maximum number of posts to retrieve
    #[param(value_type = Option<i64>, minimum = 1)]
    pub limit: Option<String>,
}

impl ListQuery {
    /// Returns the limit when it parses to a positive integer.
    ///
    /// Anything else (absent, zero, negative, non-numeric) means no limit.
    pub fn effective_limit(&self) -> Option<usize> {
        self.limit
            .as_deref()
            .and_then(parse_leading_int)
            .filter(|n| *n > 0)
            .map(|n| usize::try_from(n).unwrap_or(usize::MAX))
    }
}

/// Parses the integer prefix of `raw`.
///
/// Leading whitespace and one sign character are skipped. A `0x`/`0X`
/// prefix switches to hexadecimal. Then the longest run of digits is read,
/// so `"12abc"` yields 12, `"0x1f"` yields 31 and `"abc"` yields None.
/// Values outside `i64` saturate.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let digits: Vec<u32> = rest.chars().map_while(|c| c.to_digit(radix)).collect();
    if digits.is_empty() {
        return None;
    }

    let value = digits.into_iter().fold(0i64, |acc, d| {
        acc.saturating_mul(i64::from(radix))
            .saturating_add(i64::from(d))
    });
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_request_deserialize() {
        let req: TitleRequest = serde_json::from_str(r#"{"title": "hello"}"#).unwrap();
        assert_eq!(req.title.as_deref(), Some("hello"));
    }

    #[test]
    fn test_title_request_missing_title() {
        let req: TitleRequest = serde_json::from_str("{}").unwrap();
        assert!(req.title.is_none());
        assert_eq!(req.into_title(), "");
    }

    #[test]
    fn test_title_request_null_title() {
        let req: TitleRequest = serde_json::from_str(r#"{"title": null}"#).unwrap();
        assert!(req.title.is_none());
    }

    #[test]
    fn test_title_request_rejects_non_string() {
        assert!(serde_json::from_str::<TitleRequest>(r#"{"title": 5}"#).is_err());
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("  7"), Some(7));
        assert_eq!(parse_leading_int("2abc"), Some(2));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+5"), Some(5));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("99999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn test_parse_leading_int_hex() {
        assert_eq!(parse_leading_int("0x1"), Some(1));
        assert_eq!(parse_leading_int("0X1f"), Some(31));
        assert_eq!(parse_leading_int("-0xA"), Some(-10));
        assert_eq!(parse_leading_int("0x"), None);
        assert_eq!(parse_leading_int("0xg"), None);
        assert_eq!(parse_leading_int("0"), Some(0));
        assert_eq!(parse_leading_int("09"), Some(9));
    }

    #[test]
    fn test_effective_limit() {
        let query = |v: &str| ListQuery {
            limit: Some(v.to_string()),
        };
        assert_eq!(query("2").effective_limit(), Some(2));
        assert_eq!(query("0").effective_limit(), None);
        assert_eq!(query("-1").effective_limit(), None);
        assert_eq!(query("many").effective_limit(), None);
        assert_eq!(ListQuery::default().effective_limit(), None);
    }
}
