use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use eyre::Result;
use log::{info, warn};

mod cli;

use cli::{Cli, OutputFormat};
use ytsum::Query;
use ytsum::config::Config;
use ytsum::output::{self, Response};
use ytsum::pipeline::{self, Options};
use ytsum::server::{self, AppState};
use ytsum::youtube::TimedTextClient;

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytsum.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytsum")
        .join("logs")
}

fn build_query(cli: &Cli) -> Query {
    let mut query = Query {
        url: None,
        video_id: cli.video_id.clone(),
        lang: cli.lang.clone(),
    };
    if let Some(input) = cli.url.as_deref().map(str::trim) {
        if query.video_id.is_none() && ytsum::is_bare_video_id(input) {
            query.video_id = Some(input.to_string());
        } else {
            query.url = Some(input.to_string());
        }
    }
    query
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    setup_logging()?;

    let cli = Cli::parse();

    // Load config file (non-fatal if missing/invalid)
    let config = Config::load().unwrap_or_else(|e| {
        warn!("Ignoring invalid config: {e}");
        Config::default()
    });

    if cli.verbose {
        let config_path = ytsum::config::config_path();
        if config_path.exists() {
            eprintln!("Config: {}", config_path.display());
        }
        eprintln!("Caption list: {}\nTranscript: {}", config.caption_list_url, config.transcript_url);
    }

    let provider = TimedTextClient::new(&config)?;
    let options = Options {
        tuning: config.tuning.clone(),
        entity_mode: config.entity_mode,
        default_lang: config.default_lang.clone(),
    };

    if cli.serve {
        let listen = cli.listen.clone().unwrap_or_else(|| config.listen.clone());
        if cli.verbose {
            eprintln!("Listening on http://{listen}");
        }
        let state = AppState {
            provider,
            options,
            developer: config.developer.clone(),
        };
        server::serve(&listen, state).await?;
        return Ok(ExitCode::SUCCESS);
    }

    let query = build_query(&cli);
    let response = pipeline::run(&provider, &query, &options).await;

    if cli.verbose {
        if let Response::Available(ref extraction) = response {
            let stats = &extraction.transcript.stats;
            eprintln!(
                "Video: {}\nLanguage: {}\nSegments: {}\nWords: {}\nSpeaking time: ~{} min",
                extraction.video_id,
                extraction.language,
                stats.segments,
                stats.words,
                stats.estimated_speaking_minutes,
            );
        }
    }

    let rendered = match cli.format {
        OutputFormat::Text => output::render_text(&response),
        OutputFormat::Json => output::render_json(&response, &config.developer)?,
    };
    println!("{rendered}");

    Ok(match response {
        Response::MissingIdentifier => ExitCode::from(2),
        Response::Failed => ExitCode::FAILURE,
        Response::Unavailable { .. } | Response::Available(_) => ExitCode::SUCCESS,
    })
}
