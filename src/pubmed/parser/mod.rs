//! PubMed EFetch XML parser
//!
//! Turns an EFetch response (`retmode=xml`) into flat [`Paper`] records.
//!
//! # Module Organization
//!
//! - `preprocessing` - XML cleaning before deserialization
//! - `deserializers` - text extraction for free-text elements
//! - `xml_types` - the subset of the PubMed article schema that is read

mod deserializers;
mod preprocessing;
mod xml_types;

use crate::error::{PubMedError, Result};
use crate::pubmed::models::Paper;
use preprocessing::strip_inline_html_tags;
use quick_xml::de::from_str;
use tracing::{debug, instrument, warn};
use xml_types::PubmedArticleSet;

/// Parse every `PubmedArticle` in an EFetch XML response
///
/// Records are returned in document order. Articles without a PMID are logged
/// and skipped.
///
/// # Errors
///
/// Returns [`PubMedError::XmlError`] if the document is empty or not
/// well-formed XML.
///
/// # Example
///
/// ```
/// use pubmed_paper_fetcher::pubmed::parser::parse_papers_from_xml;
///
/// let xml = r#"<?xml version="1.0"?>
/// <PubmedArticleSet>
///   <PubmedArticle>
///     <MedlineCitation>
///       <PMID>12345678</PMID>
///       <Article>
///         <ArticleTitle>Example Article</ArticleTitle>
///       </Article>
///     </MedlineCitation>
///   </PubmedArticle>
/// </PubmedArticleSet>"#;
///
/// let papers = parse_papers_from_xml(xml)?;
/// assert_eq!(papers[0].title.as_deref(), Some("Example Article"));
/// assert_eq!(papers[0].pub_date, "Unknown");
/// # Ok::<(), pubmed_paper_fetcher::PubMedError>(())
/// ```
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_papers_from_xml(xml: &str) -> Result<Vec<Paper>> {
    let cleaned_xml = strip_inline_html_tags(xml);
    let content = cleaned_xml.trim_start_matches('\u{feff}').trim_start();

    if content.is_empty() {
        return Err(PubMedError::XmlError("No element found in empty document".to_string()));
    }

    if !content.starts_with('<') {
        return Err(PubMedError::XmlError(
            "Response is not an XML document".to_string(),
        ));
    }

    let article_set: PubmedArticleSet = from_str(&cleaned_xml)
        .map_err(|e| PubMedError::XmlError(format!("Failed to deserialize XML: {}", e)))?;

    let papers: Vec<Paper> = article_set
        .articles
        .into_iter()
        .filter_map(|article_xml| match article_xml.pmid() {
            Some(pmid) => Some(article_xml.into_paper(pmid)),
            None => {
                warn!("PubmedArticle without PMID, skipping");
                None
            }
        })
        .collect();

    debug!(papers = papers.len(), "Parsed EFetch response");
    Ok(papers)
}
