//! Internal EFetch XML schema types
//!
//! Only the elements the paper records need are declared; serde skips the rest
//! of the document.

use serde::Deserialize;

use super::deserializers::XmlText;
use crate::pubmed::models::{Author, Paper, UNKNOWN};

#[derive(Debug, Deserialize)]
pub(super) struct PubmedArticleSet {
    #[serde(rename = "PubmedArticle", default)]
    pub articles: Vec<PubmedArticleXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PubmedArticleXml {
    #[serde(rename = "MedlineCitation")]
    pub medline_citation: Option<MedlineCitationXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct MedlineCitationXml {
    #[serde(rename = "PMID")]
    pub pmid: Option<XmlText>,
    #[serde(rename = "DateCompleted")]
    pub date_completed: Option<DateCompletedXml>,
    #[serde(rename = "Article")]
    pub article: Option<ArticleXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct DateCompletedXml {
    #[serde(rename = "Year")]
    pub year: Option<XmlText>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ArticleXml {
    #[serde(rename = "Journal")]
    pub journal: Option<JournalXml>,
    #[serde(rename = "ArticleTitle")]
    pub article_title: Option<XmlText>,
    #[serde(rename = "AuthorList")]
    pub author_list: Option<AuthorListXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct JournalXml {
    #[serde(rename = "JournalIssue")]
    pub journal_issue: Option<JournalIssueXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct JournalIssueXml {
    #[serde(rename = "PubDate")]
    pub pub_date: Option<PubDateXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PubDateXml {
    #[serde(rename = "Year")]
    pub year: Option<XmlText>,
    #[serde(rename = "Season")]
    pub season: Option<XmlText>,
    #[serde(rename = "Month")]
    pub month: Option<XmlText>,
    #[serde(rename = "Day")]
    pub day: Option<XmlText>,
    #[serde(rename = "MedlineDate")]
    pub medline_date: Option<XmlText>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AuthorListXml {
    #[serde(rename = "Author", default)]
    pub authors: Vec<AuthorXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AuthorXml {
    #[serde(rename = "LastName")]
    pub last_name: Option<XmlText>,
    #[serde(rename = "ForeName")]
    pub fore_name: Option<XmlText>,
    #[serde(rename = "CollectiveName")]
    pub collective_name: Option<XmlText>,
    #[serde(rename = "AffiliationInfo", default)]
    pub affiliation_info: Vec<AffiliationInfoXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AffiliationInfoXml {
    #[serde(rename = "Affiliation")]
    pub affiliation: Option<XmlText>,
}

fn text(value: Option<XmlText>) -> Option<String> {
    value.and_then(XmlText::into_non_empty)
}

impl PubDateXml {
    /// Render the date as published, e.g. "2023 Mar 15", "2021 Spring" or a MedlineDate range
    fn render(self) -> Option<String> {
        if let Some(medline_date) = text(self.medline_date) {
            return Some(medline_date);
        }

        let parts: Vec<String> = [self.year, self.season, self.month, self.day]
            .into_iter()
            .filter_map(text)
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

impl AuthorXml {
    fn into_author(self) -> Author {
        let last = text(self.last_name);
        let fore = text(self.fore_name);

        // A missing part is an empty string; the joining space is always kept
        let name = match (last, fore, text(self.collective_name)) {
            (None, None, Some(collective)) => collective,
            (last, fore, _) => format!(
                "{} {}",
                last.unwrap_or_default(),
                fore.unwrap_or_default()
            ),
        };

        let affiliation = self
            .affiliation_info
            .into_iter()
            .find_map(|info| text(info.affiliation))
            .unwrap_or_else(|| UNKNOWN.to_string());

        Author::new(name, affiliation)
    }
}

impl PubmedArticleXml {
    /// PMID of the record, if it has one
    pub fn pmid(&self) -> Option<String> {
        self.medline_citation
            .as_ref()
            .and_then(|citation| citation.pmid.clone())
            .and_then(XmlText::into_non_empty)
    }

    pub fn into_paper(self, pmid: String) -> Paper {
        let Some(citation) = self.medline_citation else {
            return Paper {
                pmid,
                title: None,
                pub_date: UNKNOWN.to_string(),
                authors: Vec::new(),
            };
        };

        let completed_year = citation.date_completed.and_then(|date| text(date.year));

        let (title, pub_date, authors) = match citation.article {
            Some(article) => {
                let pub_date = article
                    .journal
                    .and_then(|journal| journal.journal_issue)
                    .and_then(|issue| issue.pub_date)
                    .and_then(PubDateXml::render);
                let authors = article
                    .author_list
                    .map(|list| {
                        list.authors
                            .into_iter()
                            .map(AuthorXml::into_author)
                            .collect()
                    })
                    .unwrap_or_default();
                (text(article.article_title), pub_date, authors)
            }
            None => (None, None, Vec::new()),
        };

        Paper {
            pmid,
            title,
            pub_date: pub_date
                .or(completed_year)
                .unwrap_or_else(|| UNKNOWN.to_string()),
            authors,
        }
    }
}
