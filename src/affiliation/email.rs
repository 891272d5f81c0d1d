use regex::Regex;
use std::sync::OnceLock;

use crate::pubmed::models::NOT_AVAILABLE;

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
            .expect("Failed to compile email regex")
    })
}

/// Extract the first email address found in free text
///
/// Returns the match verbatim, or `"N/A"` when the text holds no address.
///
/// # Example
///
/// ```
/// use pubmed_paper_fetcher::affiliation::extract_email;
///
/// let affiliation = "Dr. Reddy's Laboratories Ltd, Hyderabad, India. Electronic address: k.rao@drreddys.example.com.";
/// assert_eq!(extract_email(affiliation), "k.rao@drreddys.example.com");
/// assert_eq!(extract_email("Department of Chemistry, Delhi, India"), "N/A");
/// ```
pub fn extract_email(text: &str) -> String {
    email_regex()
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
