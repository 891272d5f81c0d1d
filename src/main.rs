use anyhow::Result;
use clap::Parser;
use clap::builder::NonEmptyStringValueParser;
use pubmed_paper_fetcher::affiliation::DEFAULT_COUNTRY;
use pubmed_paper_fetcher::config::DEFAULT_TOOL;
use pubmed_paper_fetcher::pipeline::{self, DEFAULT_OUTPUT, RunOptions};
use pubmed_paper_fetcher::{AffiliationClassifier, ClientConfig, PubMedClient};
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug)]
#[command(
    name = "pubmed-paper-fetcher",
    about = "Fetch PubMed research papers and filter them by author affiliation",
    long_about = "Searches PubMed, keeps papers with at least one author affiliated with a \
                  company in the target country, and writes them to a CSV file"
)]
struct Cli {
    /// Search query for PubMed
    #[arg(value_name = "QUERY")]
    query: String,

    /// Filename to save the results
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    file: PathBuf,

    /// Max number of results to fetch
    #[arg(short, long, default_value_t = pipeline::DEFAULT_MAX_RESULTS)]
    max: usize,

    /// Country an author's company must be located in
    #[arg(long, default_value = DEFAULT_COUNTRY, value_parser = NonEmptyStringValueParser::new())]
    country: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// API key for NCBI E-utilities (increases rate limit)
    #[arg(long, env = "NCBI_API_KEY")]
    api_key: Option<String>,

    /// Email for NCBI requests (recommended)
    #[arg(long, env = "NCBI_EMAIL")]
    email: Option<String>,

    /// Tool name for NCBI requests
    #[arg(long, env = "NCBI_TOOL", default_value = DEFAULT_TOOL)]
    tool: String,

    /// Override the E-utilities base URL
    #[arg(long, env = "NCBI_BASE_URL", hide = true)]
    base_url: Option<String>,
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new().with_tool(&self.tool);

        if let Some(key) = &self.api_key {
            config = config.with_api_key(key);
        }
        if let Some(email) = &self.email {
            config = config.with_email(email);
        }
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url);
        }

        config
    }

    fn run_options(&self) -> RunOptions {
        RunOptions::new(&self.query)
            .with_max_results(self.max)
            .with_output(&self.file)
            .with_classifier(AffiliationClassifier::new(&self.country))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let client = PubMedClient::with_config(cli.client_config());
    let summary = pipeline::run(&client, &cli.run_options()).await?;

    if let Some(output) = &summary.output {
        tracing::info!(
            identifiers = summary.identifiers_found,
            papers = summary.papers_fetched,
            rows = summary.rows_written,
            "Wrote {} rows to {}",
            summary.rows_written,
            output.display()
        );
    }

    Ok(())
}
