//! Rule-based validation over a record's resolved resource mapping.

use email_address::EmailAddress;
use regex::Regex;
use serde_json::{Map, Value};
use url::Url;
use uuid::Uuid;

use crate::errors::{RecordError, ValidationError, ValidationIssue};
use crate::record::Record;

/// One validation rule bound to a field name.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub field: String,
    pub rule: Rule,
}

impl FieldRule {
    pub fn new(field: impl Into<String>, rule: Rule) -> Self {
        Self {
            field: field.into(),
            rule,
        }
    }
}

/// The closed set of validation rules.
///
/// Every rule except `Required` skips absent (or null) values; presence is
/// `Required`'s job.
#[derive(Debug, Clone)]
pub enum Rule {
    Required,
    Email,
    Url,
    Uuid,
    Regex(String),
    Length { min: Option<usize>, max: Option<usize> },
    Range { min: Option<f64>, max: Option<f64> },
}

/// Records that declare validation rules over their fields.
pub trait Validatable: Record {
    fn validation_rules() -> Vec<FieldRule>;

    /// Evaluate every rule against the instance's resource mapping. On
    /// success returns the validated mapping; on failure every issue is
    /// collected, not just the first.
    fn validate(&self) -> Result<Map<String, Value>, RecordError> {
        let data = self.resource()?;
        let mut issues = Vec::new();

        for rule in Self::validation_rules() {
            if let Some(issue) = check(&rule, data.get(&rule.field)) {
                issues.push(issue);
            }
        }

        if issues.is_empty() {
            Ok(data)
        } else {
            Err(ValidationError::new(issues).into())
        }
    }
}

fn check(rule: &FieldRule, value: Option<&Value>) -> Option<ValidationIssue> {
    let field = rule.field.as_str();
    let present = value.filter(|value| !value.is_null());

    if let Rule::Required = rule.rule {
        return match present {
            Some(_) => None,
            None => Some(ValidationIssue::new(field, "required", "value is required")),
        };
    }

    let value = present?;

    match &rule.rule {
        Rule::Required => unreachable!("handled above"),
        Rule::Email => check_str(field, value, "email", "not a valid email address", EmailAddress::is_valid),
        Rule::Url => check_str(field, value, "url", "not a valid URL", |s| Url::parse(s).is_ok()),
        Rule::Uuid => check_str(field, value, "uuid", "not a valid UUID", |s| Uuid::parse_str(s).is_ok()),
        Rule::Regex(pattern) => match Regex::new(pattern) {
            Ok(re) => check_str(field, value, "regex", "does not match pattern", |s| re.is_match(s)),
            Err(_) => Some(ValidationIssue::new(field, "regex", "invalid validation pattern")),
        },
        Rule::Length { min, max } => {
            let len = match value {
                Value::String(s) => s.chars().count(),
                Value::Array(items) => items.len(),
                _ => return Some(ValidationIssue::new(field, "length", "value has no length")),
            };
            if min.is_some_and(|min| len < min) || max.is_some_and(|max| len > max) {
                Some(ValidationIssue::new(field, "length", format!("length {len} out of bounds")))
            } else {
                None
            }
        }
        Rule::Range { min, max } => match value.as_f64() {
            Some(n) => {
                if min.is_some_and(|min| n < min) || max.is_some_and(|max| n > max) {
                    Some(ValidationIssue::new(field, "range", format!("value {n} out of range")))
                } else {
                    None
                }
            }
            None => Some(ValidationIssue::new(field, "range", "value is not numeric")),
        },
    }
}

fn check_str(
    field: &str,
    value: &Value,
    code: &str,
    message: &str,
    pred: impl Fn(&str) -> bool,
) -> Option<ValidationIssue> {
    match value.as_str() {
        Some(s) if pred(s) => None,
        Some(_) => Some(ValidationIssue::new(field, code, message)),
        None => Some(ValidationIssue::new(field, code, "value is not a string")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn issue_for(rule: Rule, value: Option<Value>) -> Option<ValidationIssue> {
        check(&FieldRule::new("field", rule), value.as_ref())
    }

    #[test]
    fn required_rejects_absent_and_null() {
        assert!(issue_for(Rule::Required, None).is_some());
        assert!(issue_for(Rule::Required, Some(Value::Null)).is_some());
        assert!(issue_for(Rule::Required, Some(json!(""))).is_none());
    }

    #[test]
    fn non_required_rules_skip_absent_values() {
        assert!(issue_for(Rule::Email, None).is_none());
        assert!(issue_for(Rule::Email, Some(Value::Null)).is_none());
        assert!(issue_for(Rule::Email, Some(json!("nope"))).is_some());
        assert!(issue_for(Rule::Email, Some(json!("a@b.dev"))).is_none());
    }

    #[test]
    fn length_covers_strings_and_arrays() {
        let rule = Rule::Length {
            min: Some(2),
            max: Some(3),
        };
        assert!(issue_for(rule.clone(), Some(json!("ab"))).is_none());
        assert!(issue_for(rule.clone(), Some(json!("a"))).is_some());
        assert!(issue_for(rule.clone(), Some(json!([1, 2, 3, 4]))).is_some());
        assert!(issue_for(rule, Some(json!(42))).is_some());
    }

    #[test]
    fn range_checks_numbers() {
        let rule = Rule::Range {
            min: Some(0.0),
            max: Some(10.0),
        };
        assert!(issue_for(rule.clone(), Some(json!(7))).is_none());
        assert!(issue_for(rule, Some(json!(-1))).is_some());
    }
}
