//! CSV export tests: quoting round trip and assembled-row scenarios

use pubmed_paper_fetcher::export::write_csv;
use pubmed_paper_fetcher::report::{CSV_HEADERS, OutputRow, assemble_rows};
use pubmed_paper_fetcher::{AffiliationClassifier, Author, Paper};
use rstest::rstest;
use tempfile::tempdir;

fn read_back(path: &std::path::Path) -> (Vec<String>, Vec<OutputRow>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers = reader
        .headers()
        .unwrap()
        .iter()
        .map(|h| h.to_string())
        .collect();
    let rows = reader.deserialize().map(|row| row.unwrap()).collect();
    (headers, rows)
}

#[rstest]
#[case::commas("Sun Pharma Ltd, Vadodara, India")]
#[case::quotes(r#"The "Mumbai" lab of Lupin Ltd, India"#)]
#[case::newline("Cipla Ltd\nGoa, India")]
#[case::plain("Biocon")]
fn test_fields_round_trip(#[case] value: &str) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("round_trip.csv");

    let row = OutputRow {
        pubmed_id: "38000001".to_string(),
        title: format!("Title: {value}"),
        publication_date: "2023 Dec".to_string(),
        non_academic_authors: "Sharma Priya, Rao K".to_string(),
        company_affiliations: value.to_string(),
        corresponding_email: "N/A".to_string(),
    };

    assert!(write_csv(std::slice::from_ref(&row), &path).unwrap());

    let (headers, rows) = read_back(&path);
    assert_eq!(headers, CSV_HEADERS);
    assert_eq!(rows, vec![row]);
}

#[test]
fn test_two_qualifying_authors_scenario() {
    let papers = vec![Paper {
        pmid: "555".to_string(),
        title: Some("Scale-up of monoclonal antibody production".to_string()),
        pub_date: "2024".to_string(),
        authors: vec![
            Author::new("Name1", "Dr. Reddy's Laboratories Ltd, Hyderabad, India. a@x.com"),
            Author::new("Name2", "Glenmark Pharmaceuticals Ltd, Mumbai, India"),
        ],
    }];

    let rows = assemble_rows(&papers, &AffiliationClassifier::default());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].corresponding_email, "a@x.com");
    assert_eq!(rows[0].non_academic_authors, "Name1, Name2");

    let dir = tempdir().unwrap();
    let path = dir.path().join("scenario.csv");
    write_csv(&rows, &path).unwrap();

    let (_, read) = read_back(&path);
    assert_eq!(read, rows);
}

#[test]
fn test_no_qualifying_papers_no_file() {
    let papers = vec![Paper {
        pmid: "777".to_string(),
        title: Some("Academic only".to_string()),
        pub_date: "Unknown".to_string(),
        authors: vec![Author::new("Gupta Arjun", "Indian Institute of Technology, India")],
    }];

    let rows = assemble_rows(&papers, &AffiliationClassifier::default());
    assert!(rows.is_empty());

    let dir = tempdir().unwrap();
    let path = dir.path().join("nothing.csv");
    assert!(!write_csv(&rows, &path).unwrap());
    assert!(!path.exists());
}
