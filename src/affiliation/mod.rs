//! Affiliation screening
//!
//! Keyword heuristics over free-text affiliations: which authors work for a
//! company in the target country, and which email address (if any) the
//! affiliation carries.

pub mod classifier;
pub mod email;

pub use classifier::{
    AffiliationClassifier, COMPANY_KEYWORDS, DEFAULT_COUNTRY, QualifyingAuthor,
};
pub use email::extract_email;
