//! One output row per paper with at least one qualifying author

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::affiliation::AffiliationClassifier;
use crate::pubmed::models::{NOT_AVAILABLE, Paper};

/// A qualifying paper, flattened for export
///
/// Field names on the wire are the CSV header names.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct OutputRow {
    #[serde(rename = "PubmedID")]
    pub pubmed_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Publication Date")]
    pub publication_date: String,
    #[serde(rename = "Non-academic Author(s)")]
    pub non_academic_authors: String,
    #[serde(rename = "Company Affiliation(s)")]
    pub company_affiliations: String,
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_email: String,
}

/// Header row written by [`write_csv`](crate::export::write_csv)
pub const CSV_HEADERS: [&str; 6] = [
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academic Author(s)",
    "Company Affiliation(s)",
    "Corresponding Author Email",
];

/// Build a row for `paper`, or `None` when no author qualifies
pub fn assemble_row(paper: &Paper, classifier: &AffiliationClassifier) -> Option<OutputRow> {
    let qualifying = classifier.qualifying_authors(Some(paper.authors.as_slice()));
    let first = qualifying.first()?;

    let corresponding_email = if first.email.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        first.email.clone()
    };

    Some(OutputRow {
        pubmed_id: paper.pmid.clone(),
        title: paper.title.clone().unwrap_or_default(),
        publication_date: paper.pub_date.clone(),
        non_academic_authors: qualifying
            .iter()
            .map(|author| author.name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        company_affiliations: qualifying
            .iter()
            .map(|author| author.company.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        corresponding_email,
    })
}

/// Rows for every qualifying paper, in paper order
pub fn assemble_rows(papers: &[Paper], classifier: &AffiliationClassifier) -> Vec<OutputRow> {
    let rows: Vec<OutputRow> = papers
        .iter()
        .filter_map(|paper| {
            let row = assemble_row(paper, classifier);
            if row.is_none() {
                debug!(pmid = %paper.pmid, "No qualifying authors, dropping paper");
            }
            row
        })
        .collect();

    info!(
        papers = papers.len(),
        qualifying = rows.len(),
        "Filtered papers by author affiliation"
    );

    rows
}
