use clap::Parser;
use std::path::PathBuf;

use crate::models::Variant;

pub const DEFAULT_DATA_FILE: &str = "Overall_Averages.xlsx";

/// Command-line and environment configuration. A `.env` file in the working
/// directory is read before parsing, so every `SCOREDASH_*` variable can live
/// there too.
#[derive(Parser, Debug, Clone)]
#[command(name = "scoredash", version, about = "Student test-score gauge dashboard")]
pub struct Config {
    /// Score workbook (.xlsx, .xls, .ods)
    #[arg(long, env = "SCOREDASH_DATA", default_value = DEFAULT_DATA_FILE)]
    pub data: PathBuf,

    /// Sheet to read; the first sheet when omitted
    #[arg(long, env = "SCOREDASH_SHEET")]
    pub sheet: Option<String>,

    #[arg(long, env = "SCOREDASH_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "SCOREDASH_PORT", default_value_t = 8050)]
    pub port: u16,

    /// Debug logging
    #[arg(long, env = "SCOREDASH_DEBUG")]
    pub debug: bool,

    /// Draw every gauge blue instead of red/blue/green score bands
    #[arg(long, env = "SCOREDASH_NO_COLOR_CODING")]
    pub no_color_coding: bool,

    /// Also strip bare A-/B-/C-/D- tokens from labels
    #[arg(long, env = "SCOREDASH_STRIP_BARE_PREFIXES")]
    pub strip_bare_prefixes: bool,
}

fn load_dotenv() {
    let _ = dotenv::dotenv();
}

impl Config {
    /// Reads `.env`, then the process arguments and environment.
    pub fn load() -> Self {
        load_dotenv();
        Config::parse()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn variant(&self) -> Variant {
        Variant {
            color_coded: !self.no_color_coding,
            strip_bare_prefixes: self.strip_bare_prefixes,
        }
    }
}
