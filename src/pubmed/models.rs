/// Placeholder used when a record has no affiliation or publication date
pub const UNKNOWN: &str = "Unknown";

/// Placeholder used when no email address could be found
pub const NOT_AVAILABLE: &str = "N/A";

/// An author entry as it appears on a PubMed record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    /// "LastName ForeName"
    pub name: String,
    /// Free-text affiliation, or [`UNKNOWN`]
    pub affiliation: String,
    /// Address found in the affiliation text, or [`NOT_AVAILABLE`]
    pub email: String,
}

impl Author {
    /// Build an author, deriving the email from the affiliation text
    pub fn new(name: impl Into<String>, affiliation: impl Into<String>) -> Self {
        let affiliation = affiliation.into();
        let email = crate::affiliation::extract_email(&affiliation);
        Self {
            name: name.into(),
            affiliation,
            email,
        }
    }
}

/// Represents a PubMed paper with the metadata needed for affiliation screening
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paper {
    /// PubMed ID
    pub pmid: String,
    /// Article title
    pub title: Option<String>,
    /// Publication date, free text as published
    pub pub_date: String,
    /// Authors in record order
    pub authors: Vec<Author>,
}
