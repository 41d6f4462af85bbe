use std::path::PathBuf;

use clap::Parser;
use ui::Format;

pub const DEFAULT_WIDTH: u32 = 1024;
pub const DEFAULT_HEIGHT: u32 = 768;

#[derive(Parser, Debug)]
#[command(
    name = "legal-checkup",
    about = "Walk through a short legal checkup and find out whether you could use legal help",
    version
)]
pub struct Cli {
    /// JSON question catalog to use instead of the bundled one
    #[arg(long, env = "CHECKUP_CATALOG")]
    pub catalog: Option<PathBuf>,
    /// Force a layout format (desktop, tablet, mobile); derived from the window width otherwise
    #[arg(long, env = "CHECKUP_FORMAT")]
    pub format: Option<Format>,
    /// Log level or filter used when RUST_LOG is not set
    #[arg(long, env = "CHECKUP_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    /// Initial window width in logical pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,
    /// Initial window height in logical pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,
}

impl Cli {
    /// The explicit format, or the one the initial window width falls into.
    #[must_use]
    pub fn resolved_format(&self) -> Format {
        self.format.unwrap_or_else(|| Format::from_width(self.width))
    }
}
