use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "thirdparty-notice",
    about = "Aggregate build-generated third-party license texts into a single notice file",
    version
)]
pub struct Cli {
    /// Additional directory to search first (relative paths resolve against the project root)
    #[arg(long, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Explicit path to the metadata index (overrides search)
    #[arg(long, value_name = "PATH")]
    pub metadata: Option<PathBuf>,

    /// Explicit path to the combined license blob (overrides search)
    #[arg(long, value_name = "PATH")]
    pub licenses: Option<PathBuf>,

    /// Requested output filename; the canonical THIRDPARTY_NOTICE.txt is always written
    #[arg(long, value_name = "NAME", default_value = crate::report::notice::OUTPUT_NAME)]
    pub output: String,

    /// Follow bare license URLs and try to fetch the full license text
    #[arg(long)]
    pub fetch: bool,

    /// Per-request timeout in seconds when --fetch is used [default: 8.0]
    #[arg(long, value_name = "SECONDS")]
    pub fetch_timeout: Option<f64>,

    /// With --fetch, embed fetched text regardless of detected license family
    #[arg(long)]
    pub embed_all: bool,

    /// Project root used for relative paths, the output file and cleanup
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub project_root: PathBuf,

    /// Config file [default: ./.thirdparty-notice/config.toml, fallback ~/.config/thirdparty-notice/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Summary format printed after the notice is written
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print warnings and a one-line summary
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
