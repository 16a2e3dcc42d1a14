//! Interactive front end: ingest URLs, then ask questions about them.

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::FmtSubscriber;

use pageqa::ingestion::{IngestStatus, PageFetcher, ingest_urls, parse_url_block};
use pageqa::{AppConfig, GroqClient, PageQaError, QueryAnswerer, SessionStore};

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    // Missing configuration is fatal before any input is accepted.
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: AppConfig) -> Result<(), PageQaError> {
    let fetcher = PageFetcher::new(config.fetch_timeout)?;
    let provider = Arc::new(GroqClient::from_config(&config)?);
    let answerer = QueryAnswerer::new(provider, config.chunk_words);
    let mut session = SessionStore::new();

    println!("Web Content Q&A Tool");
    println!("Commands: ingest | ask <question> | pages | help | quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt("> ")?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        match line {
            "" => continue,
            "quit" | "exit" => break,
            "help" => print_help(),
            "pages" => {
                if session.is_empty() {
                    println!("(no pages ingested)");
                } else {
                    for url in session.urls() {
                        println!("{url}");
                    }
                }
            }
            "ingest" => run_ingest(&fetcher, &mut session, &mut lines).await?,
            "ask" => println!("Please enter a question."),
            _ if line.starts_with("ask ") => {
                let question = line["ask ".len()..].trim();
                if question.is_empty() {
                    println!("Please enter a question.");
                    continue;
                }
                let context = session.context();
                let answer = answerer.answer(&context, question).await;
                println!("Answer: {answer}");
            }
            other => println!("Unknown command '{other}'; type 'help' for usage."),
        }
    }

    Ok(())
}

/// Reads a URL block from stdin, ingests it, and prints per-URL results.
async fn run_ingest(
    fetcher: &PageFetcher,
    session: &mut SessionStore,
    lines: &mut Lines<BufReader<Stdin>>,
) -> Result<(), PageQaError> {
    println!("Enter URLs (one per line, blank line to finish):");
    let mut block = String::new();
    while let Some(url_line) = lines.next_line().await? {
        if url_line.trim().is_empty() {
            break;
        }
        block.push_str(&url_line);
        block.push('\n');
    }

    let (urls, mut reports) = parse_url_block(&block);
    if urls.is_empty() && reports.is_empty() {
        println!("Please enter at least one URL to ingest.");
        return Ok(());
    }

    reports.extend(ingest_urls(fetcher, session, &urls).await);

    println!("Ingestion results:");
    for report in &reports {
        match &report.status {
            IngestStatus::Ingested { bytes, from_cache } => {
                let origin = if *from_cache { "cache" } else { "network" };
                println!("  {} : success ({bytes} bytes, {origin})", report.url);
            }
            IngestStatus::Failed { message } => {
                println!("  {} : failed ({message})", report.url);
            }
        }
    }

    if !session.is_empty() {
        println!("Ingested URLs:");
        for url in session.urls() {
            println!("  {url}");
        }
    }

    Ok(())
}

fn print_help() {
    println!("ingest          read URLs (one per line, blank line ends the block) and ingest them");
    println!("ask <question>  answer a question from the ingested content");
    println!("pages           list ingested URLs");
    println!("quit            exit");
}

fn prompt(text: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{text}")?;
    stdout.flush()
}

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
