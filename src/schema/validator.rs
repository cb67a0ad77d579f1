use crate::schema::checks::{self, TypeCheck};
use crate::schema::SchemaMap;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fmt;
use tracing::{debug, warn};

/// Compiled validator for one parsed schema
///
/// Built from a [`SchemaMap`] with [`compile`](EnvSchema::compile); checks a
/// concrete key to value mapping and reports every failing field at once.
pub struct EnvSchema {
    fields: IndexMap<String, CompiledField>,
}

struct CompiledField {
    required: bool,
    check: Box<dyn TypeCheck>,
}

impl EnvSchema {
    /// Compiles a parsed schema into per-field checkers
    pub fn compile(rules: SchemaMap) -> Self {
        let mut fields = IndexMap::with_capacity(rules.len());
        for (key, rule) in rules {
            let field = CompiledField {
                required: rule.is_required(),
                check: checks::for_rule(&rule),
            };
            fields.insert(key, field);
        }
        debug!("Compiled checks for {} declared variables", fields.len());
        Self { fields }
    }

    /// Number of declared variables
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validates a concrete mapping against the schema
    ///
    /// Undeclared keys in `values` are ignored. All declared fields are
    /// checked; the report lists every failure in declaration order.
    pub fn validate(&self, values: &HashMap<String, String>) -> ValidationReport {
        let mut failures = Vec::new();

        for (key, field) in &self.fields {
            let problem = match values.get(key) {
                None if field.required => Some("Required variable is not set".to_string()),
                None => None,
                Some(value) if value.is_empty() && field.required => {
                    Some("Required variable is empty".to_string())
                }
                Some(value) => field.check.check(value).err().map(|e| e.to_string()),
            };

            if let Some(message) = problem {
                failures.push(FieldFailure {
                    key: key.clone(),
                    rule: field.check.name().to_string(),
                    message,
                });
            }
        }

        if failures.is_empty() {
            debug!("All {} declared variables valid", self.fields.len());
        } else {
            warn!(
                "{} of {} declared variables failed validation",
                failures.len(),
                self.fields.len()
            );
        }

        ValidationReport {
            checked: self.fields.len(),
            failures,
        }
    }

    /// Validates the current process environment
    pub fn validate_process_env(&self) -> ValidationReport {
        let values: HashMap<String, String> = env::vars().collect();
        self.validate(&values)
    }
}

impl fmt::Debug for EnvSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvSchema")
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Result of validating one mapping against a schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Number of declared variables that were checked
    pub checked: usize,
    /// One entry per failing variable, in declaration order
    pub failures: Vec<FieldFailure>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "environment valid, {} variables checked", self.checked)
        } else {
            writeln!(
                f,
                "{} of {} variables failed validation:",
                self.failures.len(),
                self.checked
            )?;
            for failure in &self.failures {
                writeln!(f, "  {} ({}): {}", failure.key, failure.rule, failure.message)?;
            }
            Ok(())
        }
    }
}

/// A single failed variable
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldFailure {
    pub key: String,
    pub rule: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;

    fn compile(content: &str) -> EnvSchema {
        EnvSchema::compile(parse_str(content).expect("content should parse"))
    }

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    const FULL_SCHEMA: &str = "\
// string
DATABASE_URL=postgres://localhost:5432/app
// number
PORT=8080
// boolean
DEBUG=true
// enum:dev|staging|prod
APP_MODE=dev
// optional
EXTRA_NOTES=
";

    #[test]
    fn test_all_valid() {
        let schema = compile(FULL_SCHEMA);
        let report = schema.validate(&values(&[
            ("DATABASE_URL", "postgres://db:5432/app"),
            ("PORT", "8080"),
            ("DEBUG", "false"),
            ("APP_MODE", "staging"),
        ]));

        assert!(report.is_valid());
        assert_eq!(report.checked, 5);
        assert!(report.failures.is_empty());
    }

    #[test]
    fn test_missing_required() {
        let schema = compile("// string\nDATABASE_URL=x\n");
        let report = schema.validate(&values(&[]));

        assert!(!report.is_valid());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].key, "DATABASE_URL");
        assert_eq!(report.failures[0].rule, "string");
        assert!(report.failures[0].message.contains("not set"));
    }

    #[test]
    fn test_empty_required() {
        let schema = compile("// string\nDATABASE_URL=x\n");
        let report = schema.validate(&values(&[("DATABASE_URL", "")]));

        assert!(!report.is_valid());
        assert!(report.failures[0].message.contains("empty"));
    }

    #[test]
    fn test_optional_absent_is_fine() {
        let schema = compile("// optional\nEXTRA_NOTES=\n");
        let report = schema.validate(&values(&[]));
        assert!(report.is_valid());
    }

    #[test]
    fn test_optional_empty_is_fine() {
        let schema = compile("// optional\nEXTRA_NOTES=\n");
        let report = schema.validate(&values(&[("EXTRA_NOTES", "")]));
        assert!(report.is_valid());
    }

    #[test]
    fn test_wrong_number() {
        let schema = compile("// number\nPORT=8080\n");
        let report = schema.validate(&values(&[("PORT", "eight")]));

        assert!(!report.is_valid());
        assert_eq!(report.failures[0].rule, "number");
    }

    #[test]
    fn test_enum_mismatch() {
        let schema = compile("// enum:dev|prod\nAPP_MODE=dev\n");
        let report = schema.validate(&values(&[("APP_MODE", "staging")]));

        assert!(!report.is_valid());
        assert!(report.failures[0].message.contains("dev, prod"));
    }

    #[test]
    fn test_undeclared_keys_ignored() {
        let schema = compile("// string\nNAME=x\n");
        let report = schema.validate(&values(&[("NAME", "app"), ("UNRELATED", "whatever")]));
        assert!(report.is_valid());
    }

    #[test]
    fn test_failures_follow_declaration_order() {
        let schema = compile(FULL_SCHEMA);
        let report = schema.validate(&values(&[("APP_MODE", "nope"), ("DEBUG", "maybe")]));

        let failed: Vec<&str> = report.failures.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(failed, vec!["DATABASE_URL", "PORT", "DEBUG", "APP_MODE"]);
    }

    #[test]
    fn test_empty_schema_is_always_valid() {
        let schema = compile("");
        assert!(schema.is_empty());
        let report = schema.validate(&values(&[("ANYTHING", "goes")]));
        assert!(report.is_valid());
        assert_eq!(report.checked, 0);
    }

    #[test]
    fn test_report_display() {
        let schema = compile("// number\nPORT=8080\n");

        let ok = schema.validate(&values(&[("PORT", "8080")]));
        assert_eq!(ok.to_string(), "environment valid, 1 variables checked");

        let bad = schema.validate(&values(&[("PORT", "eight")]));
        let rendered = bad.to_string();
        assert!(rendered.contains("1 of 1 variables failed"));
        assert!(rendered.contains("PORT (number)"));
    }

    #[test]
    fn test_report_serializes() {
        let schema = compile("// number\nPORT=8080\n");
        let report = schema.validate(&values(&[("PORT", "eight")]));

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"checked\":1"));
        assert!(json.contains("\"PORT\""));

        let parsed: ValidationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.failures.len(), 1);
    }
}
