//! Line scanner turning annotated env content into a schema map

use crate::parser::tag::{parse_tag_line, TagSpec};
use crate::parser::ParseError;
use crate::schema::SchemaMap;
use tracing::debug;

/// Parses annotated env content into a [`SchemaMap`]
///
/// The scanner walks the input line by line. A `// type` comment declares the
/// rule for the next `KEY=VALUE` line; blank lines and `#` comments may sit
/// between the two. Exactly one variable consumes each tag. The whole input
/// parses or the first error is returned; no partial schema escapes.
pub fn parse_str(content: &str) -> Result<SchemaMap, ParseError> {
    let mut schema = SchemaMap::new();
    let mut pending: Option<TagSpec> = None;

    for (idx, raw_line) in content.lines().enumerate() {
        let number = idx + 1;
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with("//") {
            let spec =
                parse_tag_line(line).ok_or_else(|| ParseError::InvalidTypeTagSyntax {
                    line: number,
                    text: line.to_string(),
                })?;
            if let Some(previous) = pending.replace(spec) {
                debug!(
                    "Type tag '{}' replaced on line {} before any variable used it",
                    previous.tag, number
                );
            }
            continue;
        }

        let (raw_key, _value) = match line.split_once('=') {
            Some((raw_key, value)) if !raw_key.is_empty() => (raw_key, value),
            _ => {
                return Err(ParseError::InvalidVariableSyntax {
                    line: number,
                    text: line.to_string(),
                })
            }
        };
        let key = raw_key.trim();

        let spec = pending.take().ok_or_else(|| ParseError::MissingTypeTag {
            line: number,
            key: key.to_string(),
        })?;

        let rule = spec.into_rule(key, number)?;
        if schema.insert(key.to_string(), rule).is_some() {
            debug!("Key '{}' redeclared on line {}, keeping the last rule", key, number);
        }
    }

    if let Some(unused) = pending {
        debug!("Trailing type tag '{}' has no variable, dropped", unused.tag);
    }

    debug!("Parsed {} declared variables", schema.len());
    Ok(schema)
}
