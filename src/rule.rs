//! Option value validation.
//!
//! A rule either names the exact literals it accepts or wraps a regular
//! expression that must match the whole value. Each kind formats its own
//! diagnostic.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::ValidationError;

pub static INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());
pub static UNIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9.]+(px|in|cm|mm)$").unwrap());
pub static RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+-?[0-9]*(\s*,\s*[0-9]+-?[0-9]*)*$").unwrap());

pub const TRUE_FALSE: &[&str] = &["true", "false"];

#[derive(Debug, Clone, Copy)]
pub enum ValidationRule {
    /// Exactly one of a fixed set of literals, case-sensitive.
    Enumerated(&'static [&'static str]),
    /// Anything the (anchored) expression matches.
    Pattern(&'static LazyLock<Regex>),
}

impl ValidationRule {
    /// Check `raw` for the option `option` (long name, no dashes).
    ///
    /// Accepted values are handed back untouched; coercion is the caller's job.
    pub fn validate<'a>(&self, option: &str, raw: &'a str) -> Result<&'a str, ValidationError> {
        let accepted = match self {
            ValidationRule::Enumerated(values) => values.iter().any(|v| *v == raw),
            ValidationRule::Pattern(regex) => regex.is_match(raw),
        };
        if accepted {
            Ok(raw)
        } else {
            Err(ValidationError::new(option, self.diagnostic(option)))
        }
    }

    pub fn diagnostic(&self, option: &str) -> String {
        match self {
            ValidationRule::Enumerated(values) => {
                format!("--{} - possible values: {}", option, values.join(", "))
            }
            ValidationRule::Pattern(regex) => format!("--{} - pattern: {}", option, regex.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paper::{Media, PaperFormat};

    #[test]
    fn test_enumerated_accepts_member_unchanged() {
        let rule = ValidationRule::Enumerated(Media::NAMES);
        assert_eq!(rule.validate("media", "print"), Ok("print"));
    }

    #[test]
    fn test_enumerated_lists_values_in_order() {
        let rule = ValidationRule::Enumerated(Media::NAMES);
        let err = rule.validate("media", "tv").unwrap_err();
        assert_eq!(err.option, "media");
        assert_eq!(err.message, "--media - possible values: print, screen");
    }

    #[test]
    fn test_enumerated_is_case_sensitive() {
        let rule = ValidationRule::Enumerated(PaperFormat::NAMES);
        let err = rule.validate("format", "a4").unwrap_err();
        assert_eq!(
            err.message,
            "--format - possible values: Letter, Legal, Tabloid, Ledger, A0, A1, A2, A3, A4, A5"
        );
    }

    #[test]
    fn test_pattern_echoes_rule_text() {
        let rule = ValidationRule::Pattern(&UNIT);
        let err = rule.validate("width", "10 furlongs").unwrap_err();
        assert_eq!(err.message, "--width - pattern: ^[0-9.]+(px|in|cm|mm)$");
    }

    #[test]
    fn test_integer_must_be_all_digits() {
        let rule = ValidationRule::Pattern(&INTEGER);
        assert_eq!(rule.validate("scale", "2"), Ok("2"));
        assert!(rule.validate("scale", "12abc").is_err());
        assert!(rule.validate("scale", "-1").is_err());
        assert!(rule.validate("scale", "").is_err());
    }

    #[test]
    fn test_unit_requires_suffix() {
        let rule = ValidationRule::Pattern(&UNIT);
        assert!(rule.validate("margin-top", "1.5cm").is_ok());
        assert!(rule.validate("margin-top", "20px").is_ok());
        assert!(rule.validate("margin-top", "0").is_err());
        assert!(rule.validate("margin-top", "1pt").is_err());
    }

    #[test]
    fn test_range_expressions() {
        let rule = ValidationRule::Pattern(&RANGE);
        for ok in ["1", "1-5", "3-", "1-5,8", "1-5, 8", "2,4,6-9"] {
            assert!(rule.validate("range", ok).is_ok(), "{} should match", ok);
        }
        for bad in ["", "-5", "a-b", "1-5,", "1--5"] {
            assert!(rule.validate("range", bad).is_err(), "{} should not match", bad);
        }
    }

    #[test]
    fn test_boolean_literals() {
        let rule = ValidationRule::Enumerated(TRUE_FALSE);
        assert!(rule.validate("landscape", "true").is_ok());
        assert!(rule.validate("landscape", "false").is_ok());
        let err = rule.validate("landscape", "TRUE").unwrap_err();
        assert_eq!(err.message, "--landscape - possible values: true, false");
    }
}
