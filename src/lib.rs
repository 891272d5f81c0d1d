//! # PubMed Paper Fetcher
//!
//! Finds PubMed papers with at least one author working for a company in a
//! given country, and exports them as CSV.
//!
//! The pipeline is linear:
//!
//! 1. [`PubMedClient::search_articles`] - ESearch, returns PMIDs
//! 2. [`PubMedClient::fetch_papers`] - one batched EFetch, parsed into [`Paper`]s
//! 3. [`AffiliationClassifier`] - keeps authors whose affiliation names the
//!    target country and a commercial keyword
//! 4. [`report::assemble_rows`] - one [`OutputRow`] per qualifying paper
//! 5. [`export::write_csv`] - CSV file with a header row
//!
//! [`pipeline::run`] chains all five.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pubmed_paper_fetcher::{AffiliationClassifier, PubMedClient};
//! use pubmed_paper_fetcher::report::assemble_rows;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PubMedClient::new();
//!
//!     let pmids = client.search_articles("biosimilar insulin", 20).await?;
//!     let papers = client.fetch_papers(pmids.as_slice()).await?;
//!     let rows = assemble_rows(&papers, &AffiliationClassifier::new("india"));
//!
//!     for row in rows {
//!         println!("{}: {}", row.pubmed_id, row.non_academic_authors);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod affiliation;
pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod pubmed;
pub mod report;

// Re-export main types for convenience
pub use affiliation::{AffiliationClassifier, QualifyingAuthor, extract_email};
pub use config::ClientConfig;
pub use error::{PubMedError, Result};
pub use pubmed::{Author, NOT_AVAILABLE, Paper, PubMedClient, UNKNOWN};
pub use report::OutputRow;
