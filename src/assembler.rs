//! Turns command-line tokens into a [`ParsedConfig`].
//!
//! A parse attempt runs every supplied value through its rule before giving
//! up, so one report carries every problem. Errors live only as long as the
//! call that collected them.

use clap::{ArgMatches, Command, parser::ValueSource};
use std::collections::HashMap;
use std::ffi::OsString;
use std::str::FromStr;

use crate::config::{Margin, ParsedConfig, PdfOptions};
use crate::error::{ParseError, ValidationError, ValidationErrors};
use crate::schema::{self, OPTIONS};

/// Literal boolean coercion: only the exact string `"true"` is true.
///
/// `"TRUE"`, `"1"` and `""` are all false. This is deliberate and matches the
/// behaviour existing callers depend on.
pub fn parse_bool(raw: &str) -> bool {
    raw == "true"
}

/// Parses argument lists against the declared options.
///
/// Holds only the tokenizer built from the schema; every call to
/// [`ConfigAssembler::parse`] starts from scratch.
#[derive(Debug, Clone)]
pub struct ConfigAssembler {
    command: Command,
}

impl Default for ConfigAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigAssembler {
    /// Build an assembler for the full option set.
    pub fn new() -> Self {
        Self {
            command: schema::command(),
        }
    }

    /// Parse `argv` (without the program name).
    ///
    /// Either every option resolved and the full configuration comes back, or
    /// nothing does and the error lists every rejected value in declaration
    /// order. Calls are independent; the same assembler can be reused.
    pub fn parse<I, T>(&self, argv: I) -> Result<ParsedConfig, ParseError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command.clone().try_get_matches_from(argv)?;

        let mut errors = Vec::new();
        let values = Values(resolve(&matches, &mut errors));
        let config = assemble(&matches, &values);

        let errors = ValidationErrors(errors);
        if errors.is_empty() {
            Ok(config)
        } else {
            Err(ParseError::Invalid(errors))
        }
    }
}

/// Pick the raw string for every declared option: the validated command-line
/// value, or the declared default. Rejected and unset-without-default options
/// are left out. Errors are appended in declaration order.
fn resolve(matches: &ArgMatches, errors: &mut Vec<ValidationError>) -> HashMap<&'static str, String> {
    let mut resolved = HashMap::new();

    for def in &OPTIONS {
        let value = match matches.value_source(def.long) {
            Some(ValueSource::CommandLine) => {
                let raw = matches
                    .get_one::<String>(def.long)
                    .map(String::as_str)
                    .unwrap_or_default();
                match def.rule.validate(def.long, raw).and_then(|v| fits(def.long, v)) {
                    Ok(accepted) => Some(accepted.to_string()),
                    Err(err) => {
                        errors.push(err);
                        None
                    }
                }
            }
            _ => def.default.map(str::to_string),
        };

        if let Some(value) = value {
            resolved.insert(def.long, value);
        }
    }

    resolved
}

/// Digit strings still have to fit the integer type they are coerced into.
fn fits<'a>(id: &str, raw: &'a str) -> Result<&'a str, ValidationError> {
    let fits = match id {
        "network-timeout" => raw.parse::<u64>().is_ok(),
        "scale" => raw.parse::<u32>().is_ok(),
        _ => true,
    };
    if fits {
        Ok(raw)
    } else {
        Err(ValidationError::new(
            id,
            format!("--{} - value out of range: {}", id, raw),
        ))
    }
}

/// Resolved raw values, coerced on the way out. Everything in here already
/// passed its rule, so coercion cannot fail.
struct Values(HashMap<&'static str, String>);

impl Values {
    fn text(&self, id: &str) -> Option<String> {
        self.0.get(id).cloned()
    }

    fn boolean(&self, id: &str) -> Option<bool> {
        self.0.get(id).map(|raw| parse_bool(raw))
    }

    fn typed<T: FromStr>(&self, id: &str) -> Option<T> {
        self.0.get(id).and_then(|raw| raw.parse().ok())
    }
}

fn positional(matches: &ArgMatches, id: &str) -> Option<String> {
    matches.get_one::<String>(id).cloned()
}

fn assemble(matches: &ArgMatches, values: &Values) -> ParsedConfig {
    ParsedConfig {
        version: matches.get_flag("version"),
        help: matches.get_flag("help"),
        args: schema::POSITIONALS
            .iter()
            .any(|p| matches.get_one::<String>(p.id).is_some()),

        url: positional(matches, "url"),
        media: values.typed("media"),
        network_timeout: values.typed("network-timeout"),

        pdf: PdfOptions {
            path: positional(matches, "dest"),
            landscape: values.boolean("landscape"),
            display_header_footer: values.boolean("header-footer"),
            print_background: values.boolean("background"),
            scale: values.typed("scale"),
            page_ranges: values.text("range"),
            format: values.typed("format"),
            width: values.text("width"),
            height: values.text("height"),
            margin: Margin {
                top: values.text("margin-top"),
                right: values.text("margin-right"),
                bottom: values.text("margin-bottom"),
                left: values.text("margin-left"),
            },
        },
    }
}
