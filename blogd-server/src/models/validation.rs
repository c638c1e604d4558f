//! Declarative request validation
//!
//! Rules are checked in declaration order and never short-circuit: a 422
//! response carries every violated rule, so a body missing `userId` reports
//! both the presence and the numeric-type failure for that field.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"));

/// A single violated rule, serialized into the 422 `{"errors": [...]}` body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub msg: &'static str,
    pub param: &'static str,
    pub location: &'static str,
}

impl FieldError {
    /// A violation on a JSON body field.
    pub fn body(param: &'static str, msg: &'static str) -> Self {
        Self {
            msg,
            param,
            location: "body",
        }
    }

    /// A violation on a path parameter.
    pub fn params(param: &'static str, msg: &'static str) -> Self {
        Self {
            msg,
            param,
            location: "params",
        }
    }
}

/// Ordered rule collector over a raw JSON body.
pub struct Rules<'a> {
    body: &'a Value,
    errors: Vec<FieldError>,
}

impl<'a> Rules<'a> {
    pub fn new(body: &'a Value) -> Self {
        Self {
            body,
            errors: Vec::new(),
        }
    }

    fn field(&self, name: &str) -> Option<&Value> {
        self.body.get(name)
    }

    fn push(&mut self, param: &'static str, msg: &'static str) {
        self.errors.push(FieldError::body(param, msg));
    }

    /// Field must be present, non-null, and (if a string) non-empty.
    pub fn require(&mut self, field: &'static str, msg: &'static str) {
        let present = match self.field(field) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        };
        if !present {
            self.push(field, msg);
        }
    }

    /// Field must be an integer: a JSON number or a numeric string with an
    /// optional leading sign. Values that don't fit an i64 fail the rule,
    /// so later extraction can never truncate.
    pub fn numeric(&mut self, field: &'static str, msg: &'static str) {
        let ok = match self.field(field) {
            Some(Value::Number(n)) => n.is_i64(),
            Some(Value::String(s)) => s.parse::<i64>().is_ok(),
            _ => false,
        };
        if !ok {
            self.push(field, msg);
        }
    }

    /// Field must be a string matching the email shape.
    pub fn email(&mut self, field: &'static str, msg: &'static str) {
        let ok = matches!(self.field(field), Some(Value::String(s)) if EMAIL_RE.is_match(s));
        if !ok {
            self.push(field, msg);
        }
    }

    /// String field length must fall within `min..=max` characters.
    /// A missing or non-string field counts as length zero.
    pub fn length(&mut self, field: &'static str, min: usize, max: usize, msg: &'static str) {
        let len = match self.field(field) {
            Some(Value::String(s)) => s.chars().count(),
            _ => 0,
        };
        if len < min || len > max {
            self.push(field, msg);
        }
    }

    /// Empty on success, the full ordered violation list otherwise.
    pub fn finish(self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Extract a string field after validation has passed.
/// Non-string scalars are coerced the way the rules coerced them.
pub(crate) fn str_field(body: &Value, field: &str) -> String {
    match body.get(field) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(v) => v.to_string(),
    }
}

/// Extract an integer field after the numeric rule has passed.
pub(crate) fn int_field(body: &Value, field: &str) -> i64 {
    match body.get(field) {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
        Some(Value::String(s)) => s.parse().unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_field_fails_every_rule_naming_it() {
        let body = json!({});
        let mut rules = Rules::new(&body);
        rules.require("userId", "userId is required");
        rules.numeric("userId", "userId should be numeric");
        let errors = rules.finish().unwrap_err();

        assert_eq!(
            errors,
            vec![
                FieldError::body("userId", "userId is required"),
                FieldError::body("userId", "userId should be numeric"),
            ]
        );
    }

    #[test]
    fn numeric_accepts_integers_and_digit_strings() {
        let body = json!({"a": 7, "b": "42", "c": "4x2", "d": 1.5});
        let mut rules = Rules::new(&body);
        rules.numeric("a", "a");
        rules.numeric("b", "b");
        rules.numeric("c", "c");
        rules.numeric("d", "d");
        let errors = rules.finish().unwrap_err();
        let params: Vec<_> = errors.iter().map(|e| e.param).collect();
        assert_eq!(params, ["c", "d"]);
    }

    #[test]
    fn numeric_accepts_signed_values() {
        let body = json!({"a": "-5", "b": "+5", "c": -5});
        let mut rules = Rules::new(&body);
        rules.numeric("a", "a");
        rules.numeric("b", "b");
        rules.numeric("c", "c");
        assert!(rules.finish().is_ok());
        assert_eq!(int_field(&body, "a"), -5);
        assert_eq!(int_field(&body, "c"), -5);
    }

    #[test]
    fn numeric_rejects_values_beyond_i64() {
        // i64::MAX + 1, as both a digit string and a raw JSON number.
        let body = json!({"a": "9223372036854775808", "b": 9223372036854775808u64});
        let mut rules = Rules::new(&body);
        rules.numeric("a", "a");
        rules.numeric("b", "b");
        let errors = rules.finish().unwrap_err();
        let params: Vec<_> = errors.iter().map(|e| e.param).collect();
        assert_eq!(params, ["a", "b"]);
    }

    #[test]
    fn email_rule() {
        let body = json!({"good": "ann@x.com", "bad": "ann@", "empty": ""});
        let mut rules = Rules::new(&body);
        rules.email("good", "Invalid email");
        rules.email("bad", "Invalid email");
        rules.email("empty", "Invalid email");
        rules.email("absent", "Invalid email");
        let errors = rules.finish().unwrap_err();
        let params: Vec<_> = errors.iter().map(|e| e.param).collect();
        assert_eq!(params, ["bad", "empty", "absent"]);
    }

    #[test]
    fn length_bounds() {
        let body = json!({"short": "12345", "ok": "123456", "absent_is_zero": null});
        let mut rules = Rules::new(&body);
        rules.length("short", 6, 50, "too short");
        rules.length("ok", 6, 50, "fine");
        rules.length("missing", 6, 50, "missing");
        let errors = rules.finish().unwrap_err();
        let params: Vec<_> = errors.iter().map(|e| e.param).collect();
        assert_eq!(params, ["short", "missing"]);
    }

    #[test]
    fn field_error_serializes_flat() {
        let err = FieldError::body("content", "content is required");
        let value = serde_json::to_value(err).unwrap();
        assert_eq!(
            value,
            json!({"msg": "content is required", "param": "content", "location": "body"})
        );
    }

    #[test]
    fn int_field_coerces_digit_strings() {
        let body = json!({"a": "42", "b": 7});
        assert_eq!(int_field(&body, "a"), 42);
        assert_eq!(int_field(&body, "b"), 7);
    }
}
