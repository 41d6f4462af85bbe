use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Minimum window width treated as desktop.
pub const DESKTOP_MIN_WIDTH: u32 = 1024;
/// Minimum window width treated as tablet.
pub const TABLET_MIN_WIDTH: u32 = 768;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown format: {0} (expected desktop, tablet or mobile)")]
pub struct ParseFormatError(String);

/// Display format the layout tables are keyed by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Format {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl Format {
    #[must_use]
    pub fn from_width(width: u32) -> Self {
        if width >= DESKTOP_MIN_WIDTH {
            Self::Desktop
        } else if width >= TABLET_MIN_WIDTH {
            Self::Tablet
        } else {
            Self::Mobile
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Desktop => "desktop",
            Format::Tablet => "tablet",
            Format::Mobile => "mobile",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" => Ok(Self::Desktop),
            "tablet" => Ok(Self::Tablet),
            "mobile" => Ok(Self::Mobile),
            other => Err(ParseFormatError(other.to_string())),
        }
    }
}
