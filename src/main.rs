mod fetcher;
mod output;
mod parser;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing::info;

use fetcher::FetchError;
use output::LinkRecord;
use parser::nodes::{DEFAULT_HEADING_SELECTOR, DEFAULT_LINK_SELECTOR, DEFAULT_SOCIAL_SELECTOR};
use parser::{OverlapPolicy, Selectors};

#[derive(Parser)]
#[command(
    name = "linktree_scraper",
    about = "Export the links of a link-in-bio profile page to CSV"
)]
struct Cli {
    /// Profile page URL
    url: Option<String>,

    /// CSV destination (overwritten if it exists)
    #[arg(short, long, default_value = output::DEFAULT_CSV_PATH)]
    output: PathBuf,

    /// User-Agent header sent with the request
    #[arg(long, default_value = fetcher::DEFAULT_USER_AGENT)]
    user_agent: String,

    /// CSS selector for social icon links
    #[arg(long, default_value = DEFAULT_SOCIAL_SELECTOR)]
    social_selector: String,

    /// CSS selector for collection headings
    #[arg(long, default_value = DEFAULT_HEADING_SELECTOR)]
    heading_selector: String,

    /// CSS selector for link buttons
    #[arg(long, default_value = DEFAULT_LINK_SELECTOR)]
    link_selector: String,

    /// Skip link buttons whose URL was already recorded
    #[arg(long)]
    skip_seen: bool,

    /// Print the extracted links as a table
    #[arg(long)]
    preview: bool,
}

struct RunOptions {
    output: PathBuf,
    user_agent: String,
    selectors: Selectors,
    policy: OverlapPolicy,
}

impl RunOptions {
    fn from_cli(cli: &Cli) -> Result<Self> {
        Ok(Self {
            output: cli.output.clone(),
            user_agent: cli.user_agent.clone(),
            selectors: Selectors::parse(
                &cli.social_selector,
                &cli.heading_selector,
                &cli.link_selector,
            )?,
            policy: if cli.skip_seen {
                OverlapPolicy::SkipSeen
            } else {
                OverlapPolicy::Keep
            },
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let outcome = execute(&cli).await?;
    println!("{}", outcome.message);
    info!("Done in {:.1}s", t0.elapsed().as_secs_f64());
    if outcome.code != 0 {
        std::process::exit(outcome.code);
    }
    Ok(())
}

/// The single stdout line of a run and the process exit status.
#[derive(Debug)]
struct Outcome {
    message: String,
    code: i32,
}

/// Usage, bad status and success end in an `Outcome`. Any other failure
/// (network, I/O, bad selector) is returned as an error.
async fn execute(cli: &Cli) -> Result<Outcome> {
    let Some(url) = cli.url.as_deref() else {
        return Ok(Outcome {
            message: Cli::command().render_usage().to_string(),
            code: 1,
        });
    };
    let opts = RunOptions::from_cli(cli)?;

    let records = match run(url, &opts).await {
        Ok(records) => records,
        Err(e) => {
            if let Some(status @ FetchError::Status(_)) = e.downcast_ref::<FetchError>() {
                return Ok(Outcome {
                    message: status.to_string(),
                    code: 1,
                });
            }
            return Err(e);
        }
    };

    if cli.preview {
        print_table(&records);
    }
    Ok(Outcome {
        message: format!(
            "CSV file '{}' has been created successfully!",
            opts.output.display()
        ),
        code: 0,
    })
}

/// Fetch, parse, write. Nothing touches the output file unless the first two succeed.
async fn run(url: &str, opts: &RunOptions) -> Result<Vec<LinkRecord>> {
    let html = fetcher::fetch_page(url, &opts.user_agent).await?;
    let records = parser::extract_links(&html, &opts.selectors, opts.policy);
    output::write_csv(&opts.output, &records)?;
    Ok(records)
}

fn print_table(records: &[LinkRecord]) {
    println!(
        "{:>3} | {:<28} | {:<16} | {:<48}",
        "#", "Name", "Category", "URL"
    );
    println!("{}", "-".repeat(104));
    for (i, r) in records.iter().enumerate() {
        println!(
            "{:>3} | {:<28} | {:<16} | {:<48}",
            i + 1,
            truncate(&r.name, 28),
            truncate(&r.category, 16),
            truncate(&r.url, 48)
        );
    }
    println!("\n{} links", records.len());
}

/// Cut to `max` chars, marking the cut with "...". Newlines would break
/// the table, so they print as spaces.
fn truncate(s: &str, max: usize) -> String {
    let flat = s.replace(['\r', '\n'], " ");
    match flat.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &flat[..cut]),
        None => flat,
    }
}
