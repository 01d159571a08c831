//! Help and version text.
//!
//! Starts from the tokenizer's generated listing and patches in what it
//! cannot express: the positional arguments and a reference of units and
//! paper sizes.

use crate::paper::{PaperFormat, Unit};
use crate::schema::{self, ARGS_PLACEHOLDER, POSITIONALS, STOCK_HELP_DESCRIPTION};

const HELP_DESCRIPTION: &str = "Output usage information.";

/// Full help text: option listing, arguments section and the units/formats
/// appendix.
pub fn render_help() -> String {
    let generated = schema::command().render_help().to_string();

    let mut output = generated
        .replace(STOCK_HELP_DESCRIPTION, HELP_DESCRIPTION)
        .replace(ARGS_PLACEHOLDER, &arguments_section());

    let trimmed = output.trim_end().len();
    output.truncate(trimmed);
    output.push_str(&appendix());
    output
}

/// `webpdf <version>` followed by a newline.
pub fn render_version() -> String {
    schema::command().render_version().to_string()
}

fn arguments_section() -> String {
    let width = POSITIONALS
        .iter()
        .map(|p| p.value_name.len())
        .max()
        .unwrap_or(0)
        + 2;

    let mut section = String::from("\n\nArguments:");
    for positional in &POSITIONALS {
        section.push_str(&format!(
            "\n  {:<width$}{}",
            positional.value_name,
            positional.description,
            width = width
        ));
    }
    section
}

fn appendix() -> String {
    let units: Vec<String> = Unit::ALL
        .iter()
        .map(|unit| format!("{} - {}", unit.suffix(), unit.name()))
        .collect();
    let formats: Vec<String> = PaperFormat::ALL
        .iter()
        .map(|format| {
            let (width, height) = format.dimensions();
            format!("{}: {} x {}", format, width, height)
        })
        .collect();

    let mut out = String::from("\n\nAdditional information:\n\n  All possible units are:\n\n");
    out.push_str(&two_columns(&units, 21));
    out.push_str("\n  The format options are:\n\n");
    out.push_str(&two_columns(&formats, 24));
    out
}

fn two_columns(cells: &[String], width: usize) -> String {
    let mut out = String::new();
    for row in cells.chunks(2) {
        let line = match row {
            [left, right] => format!("{:<width$}{}", left, right, width = width),
            [left] => left.clone(),
            _ => continue,
        };
        out.push_str("    ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}
