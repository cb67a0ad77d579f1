//! Type tag line grammar and the tag to rule mapping

use crate::parser::ParseError;
use crate::schema::FieldRule;

/// A parsed type tag comment, e.g. `// enum:dev|staging|prod`
///
/// The tag is stored lowercased; the subtype keeps its original casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSpec {
    pub tag: String,
    pub subtype: Option<String>,
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn split_word_run(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !is_word_char(c)).unwrap_or(s.len());
    s.split_at(end)
}

/// Parses a trimmed `//` line into a [`TagSpec`]
///
/// Grammar: `//`, optional whitespace, a word-character tag, then optionally
/// `:` followed by a run of non-whitespace characters as the subtype. Text
/// after the tag or subtype is ignored. A `:` with nothing attached yields no
/// subtype. Returns `None` when no tag can be read.
pub fn parse_tag_line(line: &str) -> Option<TagSpec> {
    let rest = line.strip_prefix("//")?;
    let rest = rest.trim_start();

    let (tag, rest) = split_word_run(rest);
    if tag.is_empty() {
        return None;
    }

    let subtype = rest.strip_prefix(':').and_then(|after| {
        let end = after.find(char::is_whitespace).unwrap_or(after.len());
        if end == 0 {
            None
        } else {
            Some(after[..end].to_string())
        }
    });

    Some(TagSpec {
        tag: tag.to_ascii_lowercase(),
        subtype,
    })
}

impl TagSpec {
    /// Resolves this tag into the validation rule for `key`
    ///
    /// `line` is the variable line the tag applies to, used for error context.
    pub fn into_rule(self, key: &str, line: usize) -> Result<FieldRule, ParseError> {
        match self.tag.as_str() {
            "string" => Ok(FieldRule::String),
            "number" => Ok(FieldRule::Number),
            "boolean" => Ok(FieldRule::Boolean),
            "email" => Ok(FieldRule::Email),
            "date" => Ok(FieldRule::Date),
            "enum" => match self.subtype {
                Some(values) if !values.is_empty() => Ok(FieldRule::Enum {
                    allowed: values.split('|').map(str::to_string).collect(),
                }),
                _ => Err(ParseError::EnumMissingValues {
                    line,
                    key: key.to_string(),
                }),
            },
            "optional" => Ok(FieldRule::Optional),
            _ => Err(ParseError::UnknownTypeTag {
                line,
                tag: self.tag,
                key: key.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(line: &str) -> TagSpec {
        parse_tag_line(line).expect("tag line should parse")
    }

    #[test]
    fn test_plain_tag() {
        assert_eq!(
            tag("// string"),
            TagSpec {
                tag: "string".to_string(),
                subtype: None
            }
        );
    }

    #[test]
    fn test_tag_without_space() {
        assert_eq!(tag("//number").tag, "number");
    }

    #[test]
    fn test_tag_is_lowercased() {
        assert_eq!(tag("// STRING").tag, "string");
        assert_eq!(tag("// BoOlEaN").tag, "boolean");
    }

    #[test]
    fn test_subtype_keeps_casing() {
        let spec = tag("// enum:Dev|Staging|PROD");
        assert_eq!(spec.tag, "enum");
        assert_eq!(spec.subtype.as_deref(), Some("Dev|Staging|PROD"));
    }

    #[test]
    fn test_subtype_stops_at_whitespace() {
        let spec = tag("// enum:a|b extra junk");
        assert_eq!(spec.subtype.as_deref(), Some("a|b"));
    }

    #[test]
    fn test_subtype_may_contain_colons() {
        let spec = tag("// enum:http:8080|https:8443");
        assert_eq!(spec.subtype.as_deref(), Some("http:8080|https:8443"));
    }

    #[test]
    fn test_bare_colon_yields_no_subtype() {
        let spec = tag("// enum:");
        assert_eq!(spec.tag, "enum");
        assert_eq!(spec.subtype, None);
    }

    #[test]
    fn test_colon_then_space_yields_no_subtype() {
        let spec = tag("// enum: a|b");
        assert_eq!(spec.subtype, None);
    }

    #[test]
    fn test_trailing_text_after_tag_ignored() {
        let spec = tag("// string but why");
        assert_eq!(spec.tag, "string");
        assert_eq!(spec.subtype, None);
    }

    #[test]
    fn test_partial_word_tag() {
        // The tag ends at the first non-word character
        let spec = tag("// e-num");
        assert_eq!(spec.tag, "e");
    }

    #[test]
    fn test_no_tag_after_slashes() {
        assert_eq!(parse_tag_line("//"), None);
        assert_eq!(parse_tag_line("///"), None);
        assert_eq!(parse_tag_line("//   "), None);
        assert_eq!(parse_tag_line("// @string"), None);
    }

    #[test]
    fn test_into_rule_simple_tags() {
        for (raw, expected) in [
            ("string", FieldRule::String),
            ("number", FieldRule::Number),
            ("boolean", FieldRule::Boolean),
            ("email", FieldRule::Email),
            ("date", FieldRule::Date),
            ("optional", FieldRule::Optional),
        ] {
            let spec = TagSpec {
                tag: raw.to_string(),
                subtype: None,
            };
            assert_eq!(spec.into_rule("KEY", 1).unwrap(), expected);
        }
    }

    #[test]
    fn test_into_rule_enum() {
        let spec = tag("// enum:dev|staging|prod");
        let rule = spec.into_rule("APP_MODE", 2).unwrap();
        assert_eq!(
            rule,
            FieldRule::Enum {
                allowed: vec![
                    "dev".to_string(),
                    "staging".to_string(),
                    "prod".to_string()
                ]
            }
        );
    }

    #[test]
    fn test_into_rule_enum_keeps_empty_segments() {
        let spec = tag("// enum:a||b");
        let rule = spec.into_rule("KEY", 1).unwrap();
        assert_eq!(
            rule,
            FieldRule::Enum {
                allowed: vec!["a".to_string(), String::new(), "b".to_string()]
            }
        );
    }

    #[test]
    fn test_into_rule_enum_without_values() {
        let spec = tag("// enum:");
        let err = spec.into_rule("APP_MODE", 4).unwrap_err();
        match err {
            ParseError::EnumMissingValues { line, key } => {
                assert_eq!(line, 4);
                assert_eq!(key, "APP_MODE");
            }
            other => panic!("Expected EnumMissingValues, got {:?}", other),
        }
    }

    #[test]
    fn test_into_rule_unknown_tag() {
        let spec = tag("// uuid");
        let err = spec.into_rule("REQUEST_ID", 9).unwrap_err();
        match err {
            ParseError::UnknownTypeTag { line, tag, key } => {
                assert_eq!(line, 9);
                assert_eq!(tag, "uuid");
                assert_eq!(key, "REQUEST_ID");
            }
            other => panic!("Expected UnknownTypeTag, got {:?}", other),
        }
    }
}
