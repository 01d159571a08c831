//! Named media types, paper formats and length units.
//!
//! These are the closed sets behind the enumerated options. Each type keeps
//! its literal spellings in declaration order so the validator can list them
//! back to the user verbatim.
//!
//! ## Paper formats
//!
//! | Name    | Width   | Height  |
//! |---------|---------|---------|
//! | Letter  | 8.5in   | 11in    |
//! | Legal   | 8.5in   | 14in    |
//! | Tabloid | 11in    | 17in    |
//! | Ledger  | 17in    | 11in    |
//! | A0      | 33.1in  | 46.8in  |
//! | A1      | 23.4in  | 33.1in  |
//! | A2      | 16.5in  | 23.4in  |
//! | A3      | 11.7in  | 16.5in  |
//! | A4      | 8.27in  | 11.7in  |
//! | A5      | 5.83in  | 8.27in  |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// CSS media type the page is emulated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Media {
    Print,
    Screen,
}

impl Media {
    pub const NAMES: &'static [&'static str] = &["print", "screen"];

    pub fn as_str(self) -> &'static str {
        match self {
            Media::Print => "print",
            Media::Screen => "screen",
        }
    }
}

impl FromStr for Media {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "print" => Ok(Media::Print),
            "screen" => Ok(Media::Screen),
            _ => Err(format!("Unknown media type: {}", s)),
        }
    }
}

impl fmt::Display for Media {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named paper size. Takes priority over an explicit width/height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperFormat {
    Letter,
    Legal,
    Tabloid,
    Ledger,
    A0,
    A1,
    A2,
    A3,
    A4,
    A5,
}

impl PaperFormat {
    pub const ALL: [PaperFormat; 10] = [
        PaperFormat::Letter,
        PaperFormat::Legal,
        PaperFormat::Tabloid,
        PaperFormat::Ledger,
        PaperFormat::A0,
        PaperFormat::A1,
        PaperFormat::A2,
        PaperFormat::A3,
        PaperFormat::A4,
        PaperFormat::A5,
    ];

    pub const NAMES: &'static [&'static str] = &[
        "Letter", "Legal", "Tabloid", "Ledger", "A0", "A1", "A2", "A3", "A4", "A5",
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaperFormat::Letter => "Letter",
            PaperFormat::Legal => "Legal",
            PaperFormat::Tabloid => "Tabloid",
            PaperFormat::Ledger => "Ledger",
            PaperFormat::A0 => "A0",
            PaperFormat::A1 => "A1",
            PaperFormat::A2 => "A2",
            PaperFormat::A3 => "A3",
            PaperFormat::A4 => "A4",
            PaperFormat::A5 => "A5",
        }
    }

    /// Physical (width, height), already labeled with a unit.
    pub fn dimensions(self) -> (&'static str, &'static str) {
        match self {
            PaperFormat::Letter => ("8.5in", "11in"),
            PaperFormat::Legal => ("8.5in", "14in"),
            PaperFormat::Tabloid => ("11in", "17in"),
            PaperFormat::Ledger => ("17in", "11in"),
            PaperFormat::A0 => ("33.1in", "46.8in"),
            PaperFormat::A1 => ("23.4in", "33.1in"),
            PaperFormat::A2 => ("16.5in", "23.4in"),
            PaperFormat::A3 => ("11.7in", "16.5in"),
            PaperFormat::A4 => ("8.27in", "11.7in"),
            PaperFormat::A5 => ("5.83in", "8.27in"),
        }
    }
}

impl FromStr for PaperFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaperFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| format!("Unknown paper format: {}", s))
    }
}

impl fmt::Display for PaperFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Length unit accepted on width, height and margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Px,
    In,
    Cm,
    Mm,
}

impl Unit {
    pub const ALL: [Unit; 4] = [Unit::Px, Unit::In, Unit::Cm, Unit::Mm];

    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::In => "in",
            Unit::Cm => "cm",
            Unit::Mm => "mm",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Unit::Px => "pixel",
            Unit::In => "inch",
            Unit::Cm => "centimeter",
            Unit::Mm => "millimeter",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}
