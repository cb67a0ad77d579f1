//! Output formatting for multiple formats
//!
//! This module provides formatters for different output formats including JSON, YAML,
//! and human-readable text. Each formatter implements consistent styling and structure.
//!
//! # Example
//!
//! ```ignore
//! use envtag::cli::output::{OutputFormat, OutputFormatter};
//!
//! let rules = envtag::parse_str("// string\nNAME=app\n")?;
//! let formatter = OutputFormatter::new(OutputFormat::Json);
//! let output = formatter.format_schema(&rules)?;
//! println!("{}", output);
//! ```

use anyhow::{Context, Result};

use crate::schema::{FieldRule, SchemaMap, ValidationReport};

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format (human-friendly, version-control friendly)
    Yaml,
    /// Human-readable formatted text
    Human,
}

/// Output formatter for schemas and validation reports
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    /// Creates a new output formatter with the specified format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a parsed rule table according to the configured format
    pub fn format_schema(&self, rules: &SchemaMap) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_schema_json(rules),
            OutputFormat::Yaml => self.format_schema_yaml(rules),
            OutputFormat::Human => self.format_schema_human(rules),
        }
    }

    /// Formats a validation report according to the configured format
    pub fn format_report(&self, report: &ValidationReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_report_json(report),
            OutputFormat::Yaml => self.format_report_yaml(report),
            OutputFormat::Human => Ok(self.format_report_human(report)),
        }
    }

    // JSON formatting methods

    fn format_schema_json(&self, rules: &SchemaMap) -> Result<String> {
        serde_json::to_string_pretty(rules).context("Failed to serialize schema to JSON")
    }

    fn format_report_json(&self, report: &ValidationReport) -> Result<String> {
        serde_json::to_string_pretty(report)
            .context("Failed to serialize validation report to JSON")
    }

    // YAML formatting methods

    fn format_schema_yaml(&self, rules: &SchemaMap) -> Result<String> {
        serde_yaml::to_string(rules).context("Failed to serialize schema to YAML")
    }

    fn format_report_yaml(&self, report: &ValidationReport) -> Result<String> {
        serde_yaml::to_string(report).context("Failed to serialize validation report to YAML")
    }

    // Human-readable formatting methods

    fn format_schema_human(&self, rules: &SchemaMap) -> Result<String> {
        let mut output = String::new();

        output.push_str("Declared Variables\n");
        output.push_str(&heavy_rule());
        output.push_str("\n\n");

        if rules.is_empty() {
            output.push_str("(no variables declared)\n");
            return Ok(output);
        }

        let width = rules.keys().map(String::len).max().unwrap_or(0);
        for (key, rule) in rules {
            let marker = if rule.is_required() { "*" } else { " " };
            output.push_str(&format!(
                "{} {:<width$}  {}\n",
                marker,
                key,
                describe_rule(rule),
                width = width
            ));
        }

        output.push('\n');
        output.push_str(&format!("{} variables declared\n", rules.len()));
        output.push_str("* = required\n");

        Ok(output)
    }

    fn format_report_human(&self, report: &ValidationReport) -> String {
        let mut output = String::new();

        if report.is_valid() {
            output.push_str("\u{2713} Environment valid\n");
            output.push_str(&heavy_rule());
            output.push_str("\n\n");
            output.push_str(&format!(
                "{} variables checked, no problems found\n",
                report.checked
            ));
        } else {
            output.push_str("\u{2717} Environment validation failed\n");
            output.push_str(&heavy_rule());
            output.push_str("\n\n");

            for failure in &report.failures {
                output.push_str(&format!(
                    "\u{2717} {} ({}): {}\n",
                    failure.key, failure.rule, failure.message
                ));
            }

            output.push('\n');
            output.push_str(&format!(
                "{} of {} variables failed\n",
                report.failures.len(),
                report.checked
            ));
        }

        output
    }
}

fn heavy_rule() -> String {
    "\u{2501}".repeat(42)
}

fn describe_rule(rule: &FieldRule) -> String {
    match rule {
        FieldRule::Enum { allowed } => format!("enum ({})", allowed.join(" | ")),
        other => other.name().to_string(),
    }
}
