// Declarative form definitions.
//
// Purpose
// - Describe the fields of a form, their validation rules and messages, and
//   which fields are prefilled from the user context.
//
// Boundaries
// - No layout and no side effects. Renderers read the definition, the validator evaluates it.

use crate::shared::core::form_values::FormValues;
use crate::shared::core::user_context::UserContext;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum ValidationRule {
    Required { message: String },
    Email { message: String },
    Matches { field: String, message: String },
    Timestamp { message: String },
}

impl ValidationRule {
    pub fn message(&self) -> &str {
        match self {
            ValidationRule::Required { message }
            | ValidationRule::Email { message }
            | ValidationRule::Matches { message, .. }
            | ValidationRule::Timestamp { message } => message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    Text,
    Password,
    Email,
    Phone,
    DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub rules: Vec<ValidationRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefill_from: Option<String>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            rules: Vec::new(),
            prefill_from: None,
        }
    }

    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.rules.push(ValidationRule::Required {
            message: message.into(),
        });
        self
    }

    pub fn email(mut self, message: impl Into<String>) -> Self {
        self.rules.push(ValidationRule::Email {
            message: message.into(),
        });
        self
    }

    pub fn matches(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.rules.push(ValidationRule::Matches {
            field: field.into(),
            message: message.into(),
        });
        self
    }

    pub fn timestamp(mut self, message: impl Into<String>) -> Self {
        self.rules.push(ValidationRule::Timestamp {
            message: message.into(),
        });
        self
    }

    /// Prefill the field from a user context attribute (camelCase name).
    pub fn prefill_from(mut self, attribute: impl Into<String>) -> Self {
        self.prefill_from = Some(attribute.into());
        self
    }

    pub fn is_required(&self) -> bool {
        self.rules
            .iter()
            .any(|rule| matches!(rule, ValidationRule::Required { .. }))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormDefinition {
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

impl FormDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    pub fn field_named(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    /// Every `(field, rule, message)` triple, in declaration order.
    pub fn rules(&self) -> impl Iterator<Item = (&str, &ValidationRule, &str)> {
        self.fields.iter().flat_map(|spec| {
            spec.rules
                .iter()
                .map(move |rule| (spec.name.as_str(), rule, rule.message()))
        })
    }

    /// Initial values of a fresh form: every prefilled field the context can answer.
    pub fn initial_values(&self, user: &UserContext) -> FormValues {
        self.fields
            .iter()
            .filter_map(|spec| {
                let attribute = spec.prefill_from.as_deref()?;
                let value = user.attribute(attribute)?;
                Some((spec.name.clone(), value.to_string()))
            })
            .collect()
    }
}
