use clap::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(
    name = "ytsum",
    about = "YouTube transcript extractor with extractive summary",
    version = env!("CARGO_PKG_VERSION"),
)]
pub struct Cli {
    /// YouTube video URL or bare video ID
    pub url: Option<String>,

    /// Video ID, used as-is (takes priority over URL)
    #[arg(long)]
    pub video_id: Option<String>,

    /// Preferred caption language (first listed track if unavailable)
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Output format: text (default), json
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Run the HTTP API instead of a one-shot extraction
    #[arg(long)]
    pub serve: bool,

    /// Address to listen on with --serve
    #[arg(long)]
    pub listen: Option<String>,

    /// Show resolved config and extraction metadata
    #[arg(short, long)]
    pub verbose: bool,
}
