use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::value::{Args, HostValue};

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""((?:[^"\\]|\\.)*)"|(\S+)"#).expect("valid token regex"));
static TARGET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_$][\w$]*(\.[A-Za-z_$][\w$]*)?$").expect("valid target regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid call target: {0}")]
    InvalidTarget(String),
    #[error("unterminated string starting at column {0}")]
    UnterminatedString(usize),
}

/// One host-initiated call, e.g. `myGoPackage.reverseString "héllo"`.
#[derive(Debug, Clone, PartialEq)]
pub struct HostCall {
    pub target: String,
    pub args: Args,
}

impl HostCall {
    /// Parses a call line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut tokens = TOKEN_RE.captures_iter(line);
        let Some(first) = tokens.next() else {
            return Ok(None);
        };

        let target = first.get(0).map(|m| m.as_str()).unwrap_or_default();
        if !TARGET_RE.is_match(target) {
            return Err(ParseError::InvalidTarget(target.to_string()));
        }

        let mut args = Args::new();
        for token in tokens {
            if let Some(quoted) = token.get(1) {
                args.push(HostValue::Str(unescape(quoted.as_str())));
            } else if let Some(bare) = token.get(2) {
                if bare.as_str().starts_with('"') {
                    let column = line[..bare.start()].chars().count() + 1;
                    return Err(ParseError::UnterminatedString(column));
                }
                args.push(parse_bare(bare.as_str()));
            }
        }

        Ok(Some(Self {
            target: target.to_string(),
            args,
        }))
    }
}

fn parse_bare(token: &str) -> HostValue {
    match token {
        "undefined" => return HostValue::Undefined,
        "null" => return HostValue::Null,
        "true" => return HostValue::Bool(true),
        "false" => return HostValue::Bool(false),
        _ => {}
    }

    if let Ok(value) = token.parse::<i64>() {
        return HostValue::Int(value);
    }

    // f64 parsing accepts words like "inf" and "nan"; those stay strings.
    if token.bytes().any(|b| b.is_ascii_digit()) {
        if let Ok(value) = token.parse::<f64>() {
            return HostValue::Float(value);
        }
    }

    HostValue::Str(token.to_string())
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> HostCall {
        HostCall::parse(line).unwrap().unwrap()
    }

    #[test]
    fn parses_namespaced_call_with_integers() {
        let call = parse("myGoPackage.add 2 -3");
        assert_eq!(call.target, "myGoPackage.add");
        assert_eq!(call.args.as_slice(), &[HostValue::Int(2), HostValue::Int(-3)]);
    }

    #[test]
    fn parses_quoted_strings_with_escapes() {
        let call = parse(r#"reverseString "say \"hi\" ✓""#);
        assert_eq!(call.args.as_slice(), &[HostValue::from("say \"hi\" ✓")]);
    }

    #[test]
    fn parses_literals() {
        let call = parse("f undefined null true 1.5 nan word");
        assert_eq!(
            call.args.as_slice(),
            &[
                HostValue::Undefined,
                HostValue::Null,
                HostValue::Bool(true),
                HostValue::Float(1.5),
                HostValue::from("nan"),
                HostValue::from("word"),
            ]
        );
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        assert_eq!(HostCall::parse("   "), Ok(None));
        assert_eq!(HostCall::parse("# add 1 2"), Ok(None));
    }

    #[test]
    fn rejects_bad_targets() {
        assert_eq!(
            HostCall::parse("1add 2"),
            Err(ParseError::InvalidTarget("1add".to_string()))
        );
        assert_eq!(
            HostCall::parse("a.b.c"),
            Err(ParseError::InvalidTarget("a.b.c".to_string()))
        );
    }

    #[test]
    fn rejects_unterminated_strings() {
        assert_eq!(
            HostCall::parse(r#"reverseString "abc"#),
            Err(ParseError::UnterminatedString(15))
        );
    }

    #[test]
    fn unterminated_string_column_counts_characters() {
        assert_eq!(
            HostCall::parse(r#"f "é" "ü"#),
            Err(ParseError::UnterminatedString(7))
        );
    }
}
