//! The full set of supported flags and how they map onto the tokenizer.

use clap::{Arg, ArgAction, Command, crate_name, crate_version, value_parser};
use log::debug;

use crate::paper::{Media, PaperFormat};
use crate::rule::{INTEGER, RANGE, TRUE_FALSE, UNIT, ValidationRule};

pub const DESCRIPTION: &str = "Print a web page to a PDF file using a headless browser.";

/// Marker appended to the description; the help renderer swaps it for the
/// arguments section.
pub const ARGS_PLACEHOLDER: &str = "{{ARGS}}";

/// clap's stock wording for the help flag, kept so the rendered listing reads
/// like any other clap tool until the help renderer tidies it up.
pub const STOCK_HELP_DESCRIPTION: &str = "Print help";

/// A value-taking option.
#[derive(Debug)]
pub struct OptionDefinition {
    pub short: Option<char>,
    /// Long name without dashes; doubles as the tokenizer id.
    pub long: &'static str,
    pub value_name: &'static str,
    pub description: &'static str,
    pub rule: ValidationRule,
    /// Raw value used when the option is not supplied. Not validated.
    pub default: Option<&'static str>,
}

/// A presence-only flag controlling the tool itself.
#[derive(Debug)]
pub struct MetaFlag {
    pub short: char,
    pub long: &'static str,
    pub description: &'static str,
}

#[derive(Debug)]
pub struct Positional {
    pub id: &'static str,
    pub value_name: &'static str,
    pub description: &'static str,
}

pub static META_FLAGS: [MetaFlag; 2] = [
    MetaFlag {
        short: 'V',
        long: "version",
        description: "Output the version number.",
    },
    MetaFlag {
        short: 'h',
        long: "help",
        description: STOCK_HELP_DESCRIPTION,
    },
];

pub static POSITIONALS: [Positional; 2] = [
    Positional {
        id: "url",
        value_name: "URL",
        description: "The URL (with protocol) to visit.",
    },
    Positional {
        id: "dest",
        value_name: "DEST",
        description: "The file path to save the PDF to.",
    },
];

pub static OPTIONS: [OptionDefinition; 14] = [
    OptionDefinition {
        short: Some('t'),
        long: "network-timeout",
        value_name: "integer",
        description: "A timeout to wait before completing navigation in ms.",
        rule: ValidationRule::Pattern(&INTEGER),
        default: Some("1000"),
    },
    OptionDefinition {
        short: Some('m'),
        long: "media",
        value_name: "string",
        description: "Changes the CSS media type of the page.",
        rule: ValidationRule::Enumerated(Media::NAMES),
        default: Some("screen"),
    },
    OptionDefinition {
        short: Some('l'),
        long: "landscape",
        value_name: "boolean",
        description: "Paper orientation.",
        rule: ValidationRule::Enumerated(TRUE_FALSE),
        default: Some("false"),
    },
    // Shares -h with help; see `command`.
    OptionDefinition {
        short: Some('h'),
        long: "header-footer",
        value_name: "boolean",
        description: "Display header and footer.",
        rule: ValidationRule::Enumerated(TRUE_FALSE),
        default: Some("false"),
    },
    OptionDefinition {
        short: Some('b'),
        long: "background",
        value_name: "boolean",
        description: "Print background graphics.",
        rule: ValidationRule::Enumerated(TRUE_FALSE),
        default: Some("true"),
    },
    OptionDefinition {
        short: Some('s'),
        long: "scale",
        value_name: "integer",
        description: "Scale of the webpage rendering.",
        rule: ValidationRule::Pattern(&INTEGER),
        default: Some("1"),
    },
    OptionDefinition {
        short: Some('r'),
        long: "range",
        value_name: "string",
        description: "Paper ranges to print, e.g., \"1-5, 8\". Default prints all pages.",
        rule: ValidationRule::Pattern(&RANGE),
        default: Some(""),
    },
    OptionDefinition {
        short: Some('f'),
        long: "format",
        value_name: "string",
        description: "Paper format. If set, takes priority over width or height options.",
        rule: ValidationRule::Enumerated(PaperFormat::NAMES),
        default: Some("A4"),
    },
    OptionDefinition {
        short: None,
        long: "width",
        value_name: "string",
        description: "Paper width, accepts values labeled with units.",
        rule: ValidationRule::Pattern(&UNIT),
        default: None,
    },
    OptionDefinition {
        short: None,
        long: "height",
        value_name: "string",
        description: "Paper height, accepts values labeled with units.",
        rule: ValidationRule::Pattern(&UNIT),
        default: None,
    },
    OptionDefinition {
        short: None,
        long: "margin-top",
        value_name: "string",
        description: "Top margin, accepts values labeled with units.",
        rule: ValidationRule::Pattern(&UNIT),
        default: Some("0"),
    },
    OptionDefinition {
        short: None,
        long: "margin-right",
        value_name: "string",
        description: "Right margin, accepts values labeled with units.",
        rule: ValidationRule::Pattern(&UNIT),
        default: Some("0"),
    },
    OptionDefinition {
        short: None,
        long: "margin-bottom",
        value_name: "string",
        description: "Bottom margin, accepts values labeled with units.",
        rule: ValidationRule::Pattern(&UNIT),
        default: Some("0"),
    },
    OptionDefinition {
        short: None,
        long: "margin-left",
        value_name: "string",
        description: "Left margin, accepts values labeled with units.",
        rule: ValidationRule::Pattern(&UNIT),
        default: Some("0"),
    },
];

/// Look up an option by its long name.
pub fn option(long: &str) -> Option<&'static OptionDefinition> {
    OPTIONS.iter().find(|def| def.long == long)
}

/// Build the tokenizer for the declared flags.
///
/// Short names are claimed in declaration order. A short that is already
/// taken is dropped from the later declaration, which stays reachable by its
/// long name only. This is how `-h` ends up meaning `--help`.
pub fn command() -> Command {
    let mut claimed: Vec<char> = Vec::new();

    let mut cmd = Command::new(crate_name!())
        .version(crate_version!())
        .about(format!("{}{}", DESCRIPTION, ARGS_PLACEHOLDER))
        .override_usage(format!("{} [OPTIONS] <URL> <DEST>", crate_name!()))
        .term_width(0)
        .no_binary_name(true)
        .args_override_self(true)
        .disable_help_flag(true)
        .disable_version_flag(true);

    for flag in &META_FLAGS {
        let arg = Arg::new(flag.long)
            .long(flag.long)
            .help(flag.description)
            .action(ArgAction::SetTrue);
        cmd = cmd.arg(with_short(arg, flag.long, Some(flag.short), &mut claimed));
    }

    for def in &OPTIONS {
        let mut arg = Arg::new(def.long)
            .long(def.long)
            .value_name(def.value_name)
            .help(def.description)
            .action(ArgAction::Set)
            .value_parser(value_parser!(String));
        if let Some(default) = def.default.filter(|d| !d.is_empty()) {
            arg = arg.default_value(default);
        }
        cmd = cmd.arg(with_short(arg, def.long, def.short, &mut claimed));
    }

    // Described by the help renderer's arguments section instead.
    for (index, positional) in POSITIONALS.iter().enumerate() {
        cmd = cmd.arg(
            Arg::new(positional.id)
                .value_name(positional.value_name)
                .index(index + 1)
                .value_parser(value_parser!(String))
                .hide(true),
        );
    }

    cmd
}

fn with_short(arg: Arg, long: &str, short: Option<char>, claimed: &mut Vec<char>) -> Arg {
    match short {
        Some(c) if claimed.contains(&c) => {
            debug!("-{} is already registered, --{} keeps its long form only", c, long);
            arg
        }
        Some(c) => {
            claimed.push(c);
            arg.short(c)
        }
        None => arg,
    }
}
