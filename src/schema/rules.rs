//! Validation rule descriptors produced by the annotated-env parser

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Mapping from variable name to its validation rule
///
/// Keys keep file declaration order. Redeclaring a key keeps its original
/// position and replaces the rule.
pub type SchemaMap = IndexMap<String, FieldRule>;

/// Validation rule derived from a type tag
///
/// Every variant except [`Optional`](FieldRule::Optional) requires the
/// variable to be present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldRule {
    /// Any non-empty string
    String,
    /// Integer or decimal number
    Number,
    /// `true` or `false`
    Boolean,
    /// Email address
    Email,
    /// Calendar date or timestamp
    Date,
    /// One of a fixed set of alternatives, in declaration order
    Enum { allowed: Vec<String> },
    /// Declared but unconstrained, may be absent
    Optional,
}

impl FieldRule {
    /// The type tag this rule was built from
    pub fn name(&self) -> &'static str {
        match self {
            FieldRule::String => "string",
            FieldRule::Number => "number",
            FieldRule::Boolean => "boolean",
            FieldRule::Email => "email",
            FieldRule::Date => "date",
            FieldRule::Enum { .. } => "enum",
            FieldRule::Optional => "optional",
        }
    }

    /// Whether the variable must be present and non-empty
    pub fn is_required(&self) -> bool {
        !matches!(self, FieldRule::Optional)
    }
}
