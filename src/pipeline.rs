//! Search → fetch → classify → export, end to end

use std::path::PathBuf;

use tracing::{info, instrument, warn};

use crate::affiliation::AffiliationClassifier;
use crate::error::Result;
use crate::export::write_csv;
use crate::pubmed::PubMedClient;
use crate::report::assemble_rows;

/// Default number of identifiers requested from ESearch
pub const DEFAULT_MAX_RESULTS: usize = 20;

/// Default CSV destination
pub const DEFAULT_OUTPUT: &str = "output.csv";

/// Inputs for one run
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub query: String,
    pub max_results: usize,
    pub output: PathBuf,
    pub classifier: AffiliationClassifier,
}

impl RunOptions {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            max_results: DEFAULT_MAX_RESULTS,
            output: PathBuf::from(DEFAULT_OUTPUT),
            classifier: AffiliationClassifier::default(),
        }
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_classifier(mut self, classifier: AffiliationClassifier) -> Self {
        self.classifier = classifier;
        self
    }
}

/// What a run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub identifiers_found: usize,
    pub papers_fetched: usize,
    pub rows_written: usize,
    /// Set only when a file was written
    pub output: Option<PathBuf>,
}

/// Run the whole pipeline once
///
/// Finding no identifiers is not an error: a warning is logged and the run
/// ends before any fetch. Transport and parse errors propagate unchanged.
///
/// # Example
///
/// ```no_run
/// use pubmed_paper_fetcher::PubMedClient;
/// use pubmed_paper_fetcher::pipeline::{RunOptions, run};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = PubMedClient::new();
///     let options = RunOptions::new("monoclonal antibody").with_output("antibodies.csv");
///     let summary = run(&client, &options).await?;
///     println!("{} rows written", summary.rows_written);
///     Ok(())
/// }
/// ```
#[instrument(skip_all, fields(query = %options.query, max_results = options.max_results))]
pub async fn run(client: &PubMedClient, options: &RunOptions) -> Result<RunSummary> {
    info!("Searching for papers related to: {}", options.query);

    let pmids = client
        .search_articles(&options.query, options.max_results)
        .await?;

    if pmids.is_empty() {
        warn!("No papers found for the given query.");
        return Ok(RunSummary {
            identifiers_found: 0,
            papers_fetched: 0,
            rows_written: 0,
            output: None,
        });
    }

    info!("Found PubMed IDs: {}", pmids.join(", "));

    let papers = client.fetch_papers(pmids.as_slice()).await?;
    let rows = assemble_rows(&papers, &options.classifier);
    let written = write_csv(&rows, &options.output)?;

    Ok(RunSummary {
        identifiers_found: pmids.len(),
        papers_fetched: papers.len(),
        rows_written: if written { rows.len() } else { 0 },
        output: written.then(|| options.output.clone()),
    })
}
