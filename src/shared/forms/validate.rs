// Pure validation of form values against a form definition.
//
// Responsibilities
// - Produce at most one message per field: the first failing rule wins.
// - Skip every rule except Required when the value is blank.
// - Matches compares the values exactly as entered, whitespace included.
// - Never perform input or output. Each call returns a fresh set of errors.

use crate::shared::core::form_values::{FieldValue, FormValues};
use crate::shared::forms::definition::{FormDefinition, ValidationRule};
use crate::shared::forms::field_errors::FieldErrors;
use regex::Regex;
use std::sync::LazyLock;

// local@domain.tld, no whitespace, exactly one @.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value.trim())
}

pub fn validate(definition: &FormDefinition, values: &FormValues) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for spec in &definition.fields {
        let failing = spec
            .rules
            .iter()
            .find(|rule| !rule_holds(rule, &spec.name, values));
        if let Some(rule) = failing {
            errors.insert(spec.name.clone(), rule.message());
        }
    }
    errors
}

fn rule_holds(rule: &ValidationRule, field: &str, values: &FormValues) -> bool {
    if values.is_blank(field) {
        return !matches!(rule, ValidationRule::Required { .. });
    }
    match rule {
        ValidationRule::Required { .. } => true,
        ValidationRule::Email { .. } => values.text(field).is_some_and(|v| is_valid_email(&v)),
        ValidationRule::Matches { field: other, .. } => {
            values.get(field).map(FieldValue::as_text) == values.get(other).map(FieldValue::as_text)
        }
        ValidationRule::Timestamp { .. } => values.timestamp(field).is_some(),
    }
}
