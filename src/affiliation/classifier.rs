use tracing::debug;

use crate::pubmed::models::Author;

/// Country matched against affiliations when none is configured
pub const DEFAULT_COUNTRY: &str = "india";

/// Substrings marking an affiliation as commercial rather than academic
///
/// Matching is case-insensitive and substring-based, so short tokens such as
/// `inc` also hit words that merely contain them.
pub const COMPANY_KEYWORDS: &[&str] = &[
    "pharma",
    "biotech",
    "inc",
    "ltd",
    "corporation",
    "gmbh",
    "s.a.",
    "pvt",
    "therapeutics",
    "biopharma",
    "research lab",
    "biosciences",
    "biosystems",
    "lifesciences",
    "genomics",
];

/// An author whose affiliation is a company in the target country
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifyingAuthor {
    pub name: String,
    /// The author's affiliation, lower-cased as it was matched
    pub company: String,
    pub email: String,
}

/// Selects non-academic authors located in one country
#[derive(Debug, Clone)]
pub struct AffiliationClassifier {
    country: String,
    keywords: Vec<String>,
}

impl AffiliationClassifier {
    /// Classifier for `country` using [`COMPANY_KEYWORDS`]
    ///
    /// A blank country matches no affiliation.
    pub fn new(country: impl AsRef<str>) -> Self {
        Self {
            country: country.as_ref().trim().to_lowercase(),
            keywords: COMPANY_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Add keywords on top of the built-in list
    pub fn with_extra_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.keywords
            .extend(keywords.into_iter().map(|k| k.as_ref().to_lowercase()));
        self
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Whether an affiliation names the target country and a commercial keyword
    pub fn is_company_in_country(&self, affiliation: &str) -> bool {
        self.matches_lowercase(&affiliation.to_lowercase())
    }

    fn matches_lowercase(&self, affiliation: &str) -> bool {
        !self.country.is_empty()
            && affiliation.contains(&self.country)
            && self
                .keywords
                .iter()
                .any(|keyword| affiliation.contains(keyword.as_str()))
    }

    /// Authors passing both conditions, in their original order
    ///
    /// `None` stands for a record without an author list and yields an empty
    /// result.
    pub fn qualifying_authors(&self, authors: Option<&[Author]>) -> Vec<QualifyingAuthor> {
        let Some(authors) = authors else {
            return Vec::new();
        };

        let qualifying: Vec<QualifyingAuthor> = authors
            .iter()
            .filter_map(|author| {
                let affiliation = author.affiliation.to_lowercase();
                self.matches_lowercase(&affiliation)
                    .then(|| QualifyingAuthor {
                        name: author.name.clone(),
                        company: affiliation,
                        email: author.email.clone(),
                    })
            })
            .collect();

        debug!(
            authors = authors.len(),
            qualifying = qualifying.len(),
            country = %self.country,
            "Classified author affiliations"
        );

        qualifying
    }
}

impl Default for AffiliationClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTRY)
    }
}
