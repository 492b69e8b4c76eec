use std::io::{self, BufRead};
use std::path::PathBuf;

use eyre::{Result, bail};
use log::info;

mod cli;

use cli::{Cli, OutputFormat};

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytcap.log");

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
        .join("ytcap")
        .join("logs")
}

fn build_after_help() -> String {
    format!("\nLogs are written to: {}", log_dir().join("ytcap.log").display())
}

fn resolve_format(flag: Option<OutputFormat>, config: &ytcap::config::Config) -> OutputFormat {
    if let Some(format) = flag {
        return format;
    }
    match config.default_format.as_deref() {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Text,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let after_help = build_after_help();
    let cmd = <Cli as clap::CommandFactory>::command().after_help(after_help);
    let matches = cmd.get_matches();
    let cli = <Cli as clap::FromArgMatches>::from_arg_matches(&matches)?;

    // Missing or invalid config is non-fatal
    let config = ytcap::config::Config::load().unwrap_or_default();

    let lang = cli
        .lang
        .clone()
        .or_else(|| config.default_lang.clone())
        .unwrap_or_else(|| "en".to_string());
    let format = resolve_format(cli.format, &config);

    let client = reqwest::Client::new();

    // Collect URLs: from arg or stdin
    let urls = if let Some(ref url) = cli.url {
        vec![url.clone()]
    } else {
        let stdin = io::stdin();
        stdin.lock().lines().collect::<Result<Vec<_>, _>>()?
    };

    if urls.is_empty() {
        bail!("no URL or video ID provided\n\nUsage: ytcap <URL>\n       echo <URL> | ytcap");
    }

    for url_input in &urls {
        let url_input = url_input.trim();
        if url_input.is_empty() {
            continue;
        }

        // One attempt per URL; the first failure of any stage is final
        let transcript = match ytcap::youtube::fetch_transcript(&client, url_input, &lang).await {
            Ok(transcript) => transcript,
            Err(ytcap::TranscriptError::InvalidInput(input)) => {
                bail!(
                    "could not extract video ID from: {input}\n\nSupported formats:\n  https://www.youtube.com/watch?v=ID\n  https://youtu.be/ID\n  https://www.youtube.com/embed/ID\n  https://www.youtube.com/shorts/ID\n  <11-character video ID>"
                );
            }
            Err(err) => return Err(err.into()),
        };

        if cli.verbose {
            eprintln!(
                "Video: {}\nLanguage: {}\nLines: {}",
                transcript.video_id,
                transcript.language,
                transcript.lines.len(),
            );
        }

        let rendered = match format {
            OutputFormat::Text => ytcap::output::render_text(&transcript),
            OutputFormat::Json => ytcap::output::render_json(&transcript),
        };

        if let Some(ref path) = cli.output {
            std::fs::write(path, &rendered)?;
            if cli.verbose {
                eprintln!("Output written to: {}", path.display());
            }
        } else {
            println!("{rendered}");
        }
    }

    Ok(())
}
