use std::fmt;
use thiserror::Error;

pub const REQUIRED: &str = "required";
pub const ONE_OF: &str = "oneof";
pub const GT: &str = "gt";
pub const GTE: &str = "gte";
pub const LTE: &str = "lte";
pub const LTE_FIELD: &str = "ltefield";

/// A single broken rule: which rule (`tag`), on which field, with which parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub tag: String,
    pub field: String,
    pub param: String,
}

impl FieldError {
    pub fn new(tag: impl Into<String>, field: impl Into<String>, param: impl Into<String>) -> Self {
        FieldError {
            tag: tag.into(),
            field: field.into(),
            param: param.into(),
        }
    }

    pub fn message(&self) -> String {
        let (field, param) = (&self.field, &self.param);
        match self.tag.as_str() {
            REQUIRED => format!("field {field} is required"),
            ONE_OF => format!("the value of {field} must be one of {param}"),
            GT => format!("the value of {field} must be greater than {param}"),
            GTE => format!("the value of {field} must be greater than or equal {param}"),
            LTE => format!("the value of {field} must be less than or equal {param}"),
            LTE_FIELD => format!(
                "the value of {field} value must be lower than or equal value of field {param}"
            ),
            _ => "unknown error".to_string(),
        }
    }
}

/// Rule violations in the order they were found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(FieldError::message).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

/// Collects violations field by field. Each field reports only its first broken rule.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&mut self, name: &'static str) -> FieldCheck<'_> {
        FieldCheck {
            name,
            errors: &mut self.errors,
            failed: false,
        }
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.into_errors())
        }
    }

    pub fn into_errors(self) -> ValidationErrors {
        ValidationErrors(self.errors)
    }
}

pub struct FieldCheck<'a> {
    name: &'static str,
    errors: &'a mut Vec<FieldError>,
    failed: bool,
}

impl FieldCheck<'_> {
    fn check(mut self, ok: bool, tag: &str, param: String) -> Self {
        if !self.failed && !ok {
            self.errors.push(FieldError::new(tag, self.name, param));
            self.failed = true;
        }
        self
    }

    pub fn required(self, present: bool) -> Self {
        self.check(present, REQUIRED, String::new())
    }

    pub fn one_of(self, value: Option<&str>, allowed: &[&str]) -> Self {
        let ok = value.map_or(true, |v| allowed.contains(&v));
        self.check(ok, ONE_OF, allowed.join(" "))
    }

    pub fn gt(self, value: Option<f64>, bound: f64) -> Self {
        self.check(value.map_or(true, |v| v > bound), GT, bound.to_string())
    }

    pub fn gte(self, value: Option<i64>, bound: i64) -> Self {
        self.check(value.map_or(true, |v| v >= bound), GTE, bound.to_string())
    }

    pub fn lte(self, value: Option<i64>, bound: i64) -> Self {
        self.check(value.map_or(true, |v| v <= bound), LTE, bound.to_string())
    }

    /// Hands back `value` only when every rule on this field held.
    pub fn valid<T>(self, value: Option<T>) -> Option<T> {
        if self.failed {
            None
        } else {
            value
        }
    }
}

/// `required` for strings: present and non-empty. Whitespace counts as content.
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_message() {
        let cases = [
            ("required", "Name", "", "field Name is required"),
            ("oneof", "State", "NY CA TX", "the value of State must be one of NY CA TX"),
            ("gt", "Age", "18", "the value of Age must be greater than 18"),
            ("gte", "Members", "1", "the value of Members must be greater than or equal 1"),
            (
                "ltefield",
                "StartYear",
                "EndYear",
                "the value of StartYear value must be lower than or equal value of field EndYear",
            ),
            ("lte", "Age", "18", "the value of Age must be less than or equal 18"),
            ("unknown", "Field", "Param", "unknown error"),
            ("email", "Email", "", "unknown error"),
        ];

        for (tag, field, param, expected) in cases {
            assert_eq!(FieldError::new(tag, field, param).message(), expected);
        }
    }

    #[test]
    fn test_validator_reports_first_broken_rule_per_field() {
        let mut v = Validator::new();
        v.field("Amount").required(true).gt(Some(0.0), 0.0);
        v.field("TransactionType")
            .required(is_present(Some("")))
            .one_of(Some(""), &["income", "expense"]);
        v.field("Category").required(is_present(Some("food")));

        let errors = v.finish().unwrap_err();
        assert_eq!(
            errors.messages(),
            vec![
                "the value of Amount must be greater than 0".to_string(),
                "field TransactionType is required".to_string(),
            ]
        );
    }

    #[test]
    fn test_required_accepts_whitespace() {
        assert!(is_present(Some("  ")));
        assert!(!is_present(Some("")));
        assert!(!is_present(None));
    }

    #[test]
    fn test_valid_hands_back_checked_value() {
        let mut v = Validator::new();
        let amount = v.field("Amount").required(true).gt(Some(5.0), 0.0).valid(Some(5.0));
        let zero = v.field("Zero").required(true).gt(Some(0.0), 0.0).valid(Some(0.0));
        let name = v.field("Name").required(false).valid(None::<String>);

        assert_eq!(amount, Some(5.0));
        assert_eq!(zero, None);
        assert_eq!(name, None);
        assert_eq!(
            v.into_errors().messages(),
            vec![
                "the value of Zero must be greater than 0".to_string(),
                "field Name is required".to_string(),
            ]
        );
    }

    #[test]
    fn test_validator_ok() {
        let mut v = Validator::new();
        v.field("Page").gte(Some(1), 1);
        v.field("PerPage").gte(Some(100), 1).lte(Some(100), 100);
        assert!(v.finish().is_ok());
    }
}
