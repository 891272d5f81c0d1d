//! CSV export of assembled rows

use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::error::Result;
use crate::report::OutputRow;

/// Number of rows echoed to the debug log before writing
const PREVIEW_ROWS: usize = 5;

/// Write `rows` to `path` as CSV with a header row
///
/// An existing file at `path` is overwritten. When `rows` is empty a warning
/// is logged and nothing is written; the return value tells the two cases
/// apart.
///
/// # Errors
///
/// * `PubMedError::CsvError` - If a row cannot be serialized or written
/// * `PubMedError::IoError` - If the file cannot be flushed
///
/// # Example
///
/// ```no_run
/// use pubmed_paper_fetcher::export::write_csv;
/// use pubmed_paper_fetcher::report::OutputRow;
///
/// let rows = vec![OutputRow {
///     pubmed_id: "38000001".to_string(),
///     title: "Kinase inhibitors, revisited".to_string(),
///     publication_date: "2023 Dec".to_string(),
///     non_academic_authors: "Sharma Priya".to_string(),
///     company_affiliations: "Sun Pharma Ltd, Vadodara, India".to_string(),
///     corresponding_email: "N/A".to_string(),
/// }];
///
/// let written = write_csv(&rows, "output.csv")?;
/// assert!(written);
/// # Ok::<(), pubmed_paper_fetcher::PubMedError>(())
/// ```
#[instrument(skip_all, fields(rows = rows.len(), path = %path.as_ref().display()))]
pub fn write_csv(rows: &[OutputRow], path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();

    if rows.is_empty() {
        warn!("No valid papers found. Check API response or filtering.");
        return Ok(false);
    }

    info!("Saving {} records to {}", rows.len(), path.display());
    for row in rows.iter().take(PREVIEW_ROWS) {
        debug!(
            pmid = %row.pubmed_id,
            title = %row.title,
            authors = %row.non_academic_authors,
            "Row preview"
        );
    }

    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(true)
}
