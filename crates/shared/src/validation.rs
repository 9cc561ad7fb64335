use serde::{Deserialize, Serialize};

/// Declarative request validation: each request type lists its
/// `(field, rule, value)` checks and a small evaluator turns violations
/// into field errors. Field names are expected lower-case.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    Positive,
    NonNegative,
    MinLength(usize),
    MaxLength(usize),
}

#[derive(Debug, Clone, Copy)]
pub enum Value<'a> {
    Str(&'a str),
    Int(i64),
}

#[derive(Debug, Clone, Copy)]
pub struct Check<'a> {
    pub field: &'static str,
    pub rule: Rule,
    pub value: Value<'a>,
}

impl<'a> Check<'a> {
    pub fn new(field: &'static str, rule: Rule, value: Value<'a>) -> Self {
        Self { field, rule, value }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub status: bool,
    pub message: String,
    pub errors: Vec<FieldError>,
}

impl ValidationErrorResponse {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self {
            status: false,
            message: "validation error".to_string(),
            errors,
        }
    }
}

/// A request shape that carries its own rule table.
pub trait ValidateRequest {
    fn checks(&self) -> Vec<Check<'_>>;

    fn validate(&self) -> Vec<FieldError> {
        evaluate(&self.checks())
    }
}

pub fn evaluate(checks: &[Check<'_>]) -> Vec<FieldError> {
    checks
        .iter()
        .filter(|check| violated(check.rule, check.value))
        .map(|check| FieldError {
            field: check.field.to_string(),
            message: message_for(check.rule, check.field),
        })
        .collect()
}

fn violated(rule: Rule, value: Value<'_>) -> bool {
    match (rule, value) {
        (Rule::Required, Value::Str(s)) => s.trim().is_empty(),
        (Rule::Required, Value::Int(n)) => n == 0,
        (Rule::Positive, Value::Int(n)) => n <= 0,
        (Rule::NonNegative, Value::Int(n)) => n < 0,
        (Rule::MinLength(min), Value::Str(s)) => s.chars().count() < min,
        (Rule::MaxLength(max), Value::Str(s)) => s.chars().count() > max,
        // Numeric rules never fire on strings and vice versa.
        _ => false,
    }
}

fn message_for(rule: Rule, field: &str) -> String {
    let template = match rule {
        Rule::Required => Some("{field} is required"),
        Rule::Positive => Some("{field} must be greater than zero"),
        Rule::NonNegative => Some("{field} cannot be negative"),
        Rule::MinLength(_) => Some("{field} must be at least {param} characters"),
        Rule::MaxLength(_) => Some("{field} must be less than {param} characters"),
    };

    let param = match rule {
        Rule::MinLength(n) | Rule::MaxLength(n) => n.to_string(),
        _ => String::new(),
    };

    match template {
        Some(template) => template.replace("{field}", field).replace("{param}", &param),
        None => format!("{field} is invalid"),
    }
}
