//! PubMed client for searching and fetching paper metadata
//!
//! This module talks to the NCBI E-utilities ESearch and EFetch endpoints and
//! turns their responses into [`Paper`] records.

pub mod client;
pub mod models;
pub mod parser;
pub(crate) mod responses;

// Re-export public types
pub use client::PubMedClient;
pub use models::{Author, NOT_AVAILABLE, Paper, UNKNOWN};
pub use parser::parse_papers_from_xml;
