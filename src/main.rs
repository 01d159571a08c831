//! Webpdf command-line entry point.
//!
//! Parses the arguments and prints the resulting render configuration as
//! JSON, or the help/version text, or every problem with the arguments.

use anyhow::Result;
use log::debug;
use owo_colors::{OwoColorize, Stream::Stderr};
use std::process::ExitCode;

use webpdf::{ConfigAssembler, ParseError};

fn main() -> Result<ExitCode> {
    env_logger::init();

    let config = match ConfigAssembler::new().parse(std::env::args_os().skip(1)) {
        Ok(config) => config,
        Err(ParseError::Invalid(errors)) => {
            debug!("{} option(s) rejected", errors.len());
            for err in errors.iter() {
                eprintln!("{} {}", "error:".if_supports_color(Stderr, |t| t.red()), err);
            }
            return Ok(ExitCode::from(1));
        }
        Err(ParseError::Usage(err)) => {
            err.print()?;
            return Ok(ExitCode::from(2));
        }
    };

    if config.help {
        print!("{}", webpdf::render_help());
    } else if config.version {
        print!("{}", webpdf::render_version());
    } else if !config.args {
        debug!("no URL given, showing help");
        print!("{}", webpdf::render_help());
    } else {
        debug!(
            "rendering {} to {}",
            config.url.as_deref().unwrap_or_default(),
            config.pdf.path.as_deref().unwrap_or_default()
        );
        println!("{}", serde_json::to_string_pretty(&config)?);
    }

    Ok(ExitCode::SUCCESS)
}
