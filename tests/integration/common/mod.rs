//! Common fixtures and helpers for mocked E-utilities tests
#![allow(dead_code)]

use pubmed_paper_fetcher::{ClientConfig, PubMedClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Three articles: one with two qualifying authors, one academic-only, one without authors
pub const EFETCH_THREE_ARTICLES: &str = r#"<?xml version="1.0" ?>
<!DOCTYPE PubmedArticleSet PUBLIC "-//NLM//DTD PubMedArticle, 1st January 2024//EN" "https://dtd.nlm.nih.gov/ncbi/pubmed/out/pubmed_240101.dtd">
<PubmedArticleSet>
    <PubmedArticle>
        <MedlineCitation Status="MEDLINE" Owner="NLM">
            <PMID Version="1">39000001</PMID>
            <Article PubModel="Print-Electronic">
                <Journal>
                    <JournalIssue CitedMedium="Internet">
                        <Volume>45</Volume>
                        <PubDate>
                            <Year>2024</Year>
                            <Month>Mar</Month>
                        </PubDate>
                    </JournalIssue>
                    <Title>Journal of Biosimilars</Title>
                </Journal>
                <ArticleTitle>Comparative stability of biosimilar insulin, glargine and aspart</ArticleTitle>
                <AuthorList CompleteYN="Y">
                    <Author ValidYN="Y">
                        <LastName>Kulkarni</LastName>
                        <ForeName>Ravi</ForeName>
                        <Initials>R</Initials>
                        <AffiliationInfo>
                            <Affiliation>Biocon Biologics Ltd, Bengaluru, India. ravi.k@biocon.example.com</Affiliation>
                        </AffiliationInfo>
                    </Author>
                    <Author ValidYN="Y">
                        <LastName>Menon</LastName>
                        <ForeName>Asha</ForeName>
                        <Initials>A</Initials>
                        <AffiliationInfo>
                            <Affiliation>Department of Medicine, University of Kerala, Thiruvananthapuram, India.</Affiliation>
                        </AffiliationInfo>
                    </Author>
                    <Author ValidYN="Y">
                        <LastName>Patel</LastName>
                        <ForeName>Nisha</ForeName>
                        <Initials>N</Initials>
                        <AffiliationInfo>
                            <Affiliation>Intas Pharmaceuticals, Ahmedabad, India.</Affiliation>
                        </AffiliationInfo>
                    </Author>
                </AuthorList>
            </Article>
        </MedlineCitation>
    </PubmedArticle>
    <PubmedArticle>
        <MedlineCitation Status="MEDLINE" Owner="NLM">
            <PMID Version="1">39000002</PMID>
            <DateCompleted>
                <Year>2023</Year>
                <Month>11</Month>
                <Day>02</Day>
            </DateCompleted>
            <Article PubModel="Print">
                <Journal>
                    <JournalIssue CitedMedium="Print">
                        <Volume>7</Volume>
                    </JournalIssue>
                </Journal>
                <ArticleTitle>Insulin analogues in rural clinics</ArticleTitle>
                <AuthorList CompleteYN="Y">
                    <Author ValidYN="Y">
                        <LastName>Gupta</LastName>
                        <ForeName>Arjun</ForeName>
                        <AffiliationInfo>
                            <Affiliation>Indian Institute of Technology, Delhi, India.</Affiliation>
                        </AffiliationInfo>
                    </Author>
                </AuthorList>
            </Article>
        </MedlineCitation>
    </PubmedArticle>
    <PubmedArticle>
        <MedlineCitation Status="PubMed-not-MEDLINE" Owner="NLM">
            <PMID Version="1">39000003</PMID>
            <Article PubModel="Electronic">
                <Journal>
                    <JournalIssue CitedMedium="Internet">
                        <PubDate>
                            <MedlineDate>2022 Nov-Dec</MedlineDate>
                        </PubDate>
                    </JournalIssue>
                </Journal>
                <ArticleTitle>Editorial: insulin access</ArticleTitle>
            </Article>
        </MedlineCitation>
    </PubmedArticle>
</PubmedArticleSet>"#;

/// JSON body of an ESearch response
pub fn esearch_json_response(pmids: &[&str]) -> String {
    let id_list: Vec<String> = pmids.iter().map(|id| format!("\"{}\"", id)).collect();
    format!(
        r#"{{"esearchresult": {{"count": "{}", "retmax": "{}", "retstart": "0", "idlist": [{}]}}}}"#,
        pmids.len(),
        pmids.len(),
        id_list.join(",")
    )
}

/// Mount an ESearch mock returning `pmids`
pub async fn mount_esearch(mock_server: &MockServer, pmids: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(esearch_json_response(pmids)))
        .mount(mock_server)
        .await;
}

/// Mount an EFetch mock answering with `body`
pub async fn mount_efetch(mock_server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body.to_string())
                .insert_header("content-type", "application/xml"),
        )
        .mount(mock_server)
        .await;
}

/// Number of requests the mock server saw for `request_path`
pub async fn requests_to(mock_server: &MockServer, request_path: &str) -> usize {
    mock_server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| request.url.path() == request_path)
        .count()
}

/// Client pointing at a mock server
pub fn create_mock_client(mock_server: &MockServer) -> PubMedClient {
    let config = ClientConfig::new()
        .with_base_url(mock_server.uri())
        .with_tool("test-client")
        .with_email("tests@example.com");

    PubMedClient::with_config(config)
}
