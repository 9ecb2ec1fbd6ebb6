//! Cross-reference resolution.
//!
//! Gene and organism records carry links to external databases as
//! `DATABASE:ACCESSION` pairs (for example `ECOCYC:G7954`). This module turns
//! such a pair into the URL of the entry on the external site.
//!
//! - [`source`]: the static table of known databases and their URL templates
//! - [`resolver`]: case-insensitive lookup and URL construction
//! - [`item`]: parsing of `DATABASE:ACCESSION` strings
//!
//! | Key | Example |
//! |-----|---------|
//! | ecocyc | `http://biocyc.org/ECOLI/new-image?type=GENE&object=G7954` |
//! | pubmed | `http://www.ncbi.nlm.nih.gov/pubmed/12345` |
//! | uniprotkb/swiss-prot | `http://www.uniprot.org/uniprot/P0A7B8` |

pub mod item;
pub mod resolver;
pub mod source;

/// Errors surfaced to clients of the resolver
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum XrefError {
    #[error("Unsupported Database {0}")]
    UnsupportedDatabase(String),
    #[error("Unknown format {0}")]
    UnknownFormat(String),
    #[error("Invalid cross-reference '{0}': expected DATABASE:ACCESSION")]
    InvalidItem(String),
    #[error("Expected /dbxref/<database>/<accession>/, got /dbxref/{0}")]
    InvalidPath(String),
}

impl XrefError {
    /// Short machine-readable name for the error kind
    #[must_use]
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::UnsupportedDatabase(_) => "unsupported_database",
            Self::UnknownFormat(_) => "unknown_format",
            Self::InvalidItem(_) => "invalid_item",
            Self::InvalidPath(_) => "invalid_path",
        }
    }
}
