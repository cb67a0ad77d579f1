use crate::schema::FieldRule;
use anyhow::Result;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

pub trait TypeCheck: Send + Sync {
    fn name(&self) -> &'static str;
    fn check(&self, value: &str) -> Result<()>;
}

/// Builds the checker for a rule
pub fn for_rule(rule: &FieldRule) -> Box<dyn TypeCheck> {
    match rule {
        FieldRule::String => Box::new(StringCheck),
        FieldRule::Number => Box::new(NumberCheck),
        FieldRule::Boolean => Box::new(BooleanCheck),
        FieldRule::Email => Box::new(EmailCheck::new()),
        FieldRule::Date => Box::new(DateCheck),
        FieldRule::Enum { allowed } => Box::new(EnumCheck::new(allowed.clone())),
        FieldRule::Optional => Box::new(OptionalCheck),
    }
}

pub struct StringCheck;

impl TypeCheck for StringCheck {
    fn name(&self) -> &'static str {
        "string"
    }

    fn check(&self, _value: &str) -> Result<()> {
        Ok(())
    }
}

pub struct NumberCheck;

impl TypeCheck for NumberCheck {
    fn name(&self) -> &'static str {
        "number"
    }

    fn check(&self, value: &str) -> Result<()> {
        match value.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(()),
            _ => anyhow::bail!("Must be a number"),
        }
    }
}

pub struct BooleanCheck;

impl TypeCheck for BooleanCheck {
    fn name(&self) -> &'static str {
        "boolean"
    }

    fn check(&self, value: &str) -> Result<()> {
        if !value.eq_ignore_ascii_case("true") && !value.eq_ignore_ascii_case("false") {
            anyhow::bail!("Must be true or false");
        }
        Ok(())
    }
}

pub struct EmailCheck {
    re: Regex,
}

impl EmailCheck {
    pub fn new() -> Self {
        Self {
            re: Regex::new(EMAIL_PATTERN).expect("valid regex"),
        }
    }
}

impl Default for EmailCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeCheck for EmailCheck {
    fn name(&self) -> &'static str {
        "email"
    }

    fn check(&self, value: &str) -> Result<()> {
        if !self.re.is_match(value) {
            anyhow::bail!("Must be a valid email address");
        }
        Ok(())
    }
}

pub struct DateCheck;

impl TypeCheck for DateCheck {
    fn name(&self) -> &'static str {
        "date"
    }

    fn check(&self, value: &str) -> Result<()> {
        let parses = DateTime::parse_from_rfc3339(value).is_ok()
            || NaiveDateTime::parse_from_str(value, DATETIME_FORMAT).is_ok()
            || NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok();
        if !parses {
            anyhow::bail!("Must be a date (YYYY-MM-DD or an RFC 3339 timestamp)");
        }
        Ok(())
    }
}

pub struct EnumCheck {
    allowed: Vec<String>,
}

impl EnumCheck {
    pub fn new(allowed: Vec<String>) -> Self {
        Self { allowed }
    }
}

impl TypeCheck for EnumCheck {
    fn name(&self) -> &'static str {
        "enum"
    }

    fn check(&self, value: &str) -> Result<()> {
        if !self.allowed.iter().any(|candidate| candidate == value) {
            anyhow::bail!("Must be one of: {}", self.allowed.join(", "));
        }
        Ok(())
    }
}

pub struct OptionalCheck;

impl TypeCheck for OptionalCheck {
    fn name(&self) -> &'static str {
        "optional"
    }

    fn check(&self, _value: &str) -> Result<()> {
        Ok(())
    }
}
