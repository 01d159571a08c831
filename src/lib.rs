//! Webpdf: command-line configuration for printing web pages to PDF.
//!
//! Takes the raw argument list, checks every option against its rule, and
//! either hands back a complete [`ParsedConfig`] for the renderer or every
//! problem found, at once.

pub mod assembler;
pub mod config;
pub mod error;
pub mod help;
pub mod paper;
pub mod rule;
pub mod schema;

pub use assembler::ConfigAssembler;
pub use config::{Margin, ParsedConfig, PdfOptions};
pub use error::{ParseError, ValidationError, ValidationErrors};
pub use help::{render_help, render_version};
pub use paper::{Media, PaperFormat, Unit};
pub use rule::ValidationRule;
