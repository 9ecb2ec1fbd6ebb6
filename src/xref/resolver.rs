use serde::Serialize;

use crate::xref::source::CrossReferenceSource;
use crate::xref::XrefError;

/// Resolve a database name and accession to the external URL.
///
/// The database name is matched case-insensitively. Returns `None` when the
/// database is not known; this is not an error at this level, callers decide
/// how to surface it.
///
/// # Examples
///
/// ```
/// use dbxref::xref::resolver::resolve;
///
/// assert_eq!(
///     resolve("ECOCYC", "G7954").as_deref(),
///     Some("http://biocyc.org/ECOLI/new-image?type=GENE&object=G7954")
/// );
/// assert_eq!(resolve("bogus", "X"), None);
/// ```
#[must_use]
pub fn resolve(database: &str, accession: &str) -> Option<String> {
    let url = CrossReferenceSource::from_key(database)?.url_for(accession);
    tracing::debug!(
        database,
        accession,
        url = url.as_deref().unwrap_or(""),
        "resolved cross-reference"
    );
    url
}

/// Resolve with an empty string standing in for an unknown database
#[must_use]
pub fn resolve_or_empty(database: &str, accession: &str) -> String {
    resolve(database, accession).unwrap_or_default()
}

/// A single cross-reference lookup and its outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossReferenceResult {
    pub database: String,
    pub accession: String,
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CrossReferenceResult {
    /// Run the resolver for a database and accession
    #[must_use]
    pub fn lookup(database: &str, accession: &str) -> Self {
        Self {
            database: database.to_string(),
            accession: accession.to_string(),
            url: resolve(database, accession),
            error: None,
        }
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.url.is_some()
    }

    /// The URL, or an empty string when unresolved
    #[must_use]
    pub fn url_or_empty(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }

    /// Convert an unresolved lookup into an error
    ///
    /// # Errors
    ///
    /// Returns `XrefError::UnsupportedDatabase` if the database is unknown.
    pub fn require_url(&self) -> Result<&str, XrefError> {
        self.url
            .as_deref()
            .ok_or_else(|| XrefError::UnsupportedDatabase(self.database.clone()))
    }

    /// Attach an error message for display
    #[must_use]
    pub fn with_error(mut self, error: &XrefError) -> Self {
        self.error = Some(error.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ECOCYC_G7954: &str = "http://biocyc.org/ECOLI/new-image?type=GENE&object=G7954";

    #[test]
    fn test_resolve_known_databases() {
        let cases = [
            (
                "asap",
                "ABE-0000008",
                "https://asap.ahabs.wisc.edu/annotation/php/feature_info.php?FeatureID=ABE-0000008",
            ),
            ("ecocyc", "G7954", ECOCYC_G7954),
            ("ecogene", "EG10001", "http://ecogene.org/geneInfo.php?eg_id=EG10001"),
            (
                "geneid",
                "944742",
                "http://www.ncbi.nlm.nih.gov/sites/entrez?db=gene&cmd=Retrieve&dopt=full_report&list_uids=944742",
            ),
            ("gi", "16127994", "http://www.ncbi.nlm.nih.gov/nuccore/16127994"),
            ("project", "57779", "http://www.ncbi.nlm.nih.gov/bioproject/57779"),
            (
                "bioproject",
                "PRJNA57779",
                "http://www.ncbi.nlm.nih.gov/bioproject?term=PRJNA57779",
            ),
            ("pubmed", "9278503", "http://www.ncbi.nlm.nih.gov/pubmed/9278503"),
            (
                "uniprotkb/swiss-prot",
                "P0A7B8",
                "http://www.uniprot.org/uniprot/P0A7B8",
            ),
        ];

        for (database, accession, expected) in cases {
            assert_eq!(
                resolve(database, accession).as_deref(),
                Some(expected),
                "{database}:{accession}"
            );
        }
    }

    #[test]
    fn test_resolve_ignores_case() {
        assert_eq!(resolve("ECOCYC", "G7954"), resolve("ecocyc", "G7954"));
        assert_eq!(resolve("PubMed", "1"), resolve("pubmed", "1"));
        assert_eq!(resolve("ECOCYC", "G7954").as_deref(), Some(ECOCYC_G7954));
    }

    #[test]
    fn test_resolve_unknown_database() {
        assert_eq!(resolve("bogus", "X"), None);
        assert_eq!(resolve("", "X"), None);
        assert_eq!(resolve_or_empty("bogus", "X"), "");
    }

    #[test]
    fn test_resolve_is_repeatable() {
        let first = resolve("gi", "16127994");
        for _ in 0..10 {
            assert_eq!(resolve("gi", "16127994"), first);
        }
    }

    #[test]
    fn test_accession_case_is_preserved() {
        assert_eq!(
            resolve("ecocyc", "eg10001-MONOMER").as_deref(),
            Some("http://biocyc.org/ECOLI/new-image?type=GENE&object=eg10001-MONOMER")
        );
    }

    #[test]
    fn test_lookup_result() {
        let result = CrossReferenceResult::lookup("EcoCyc", "G7954");
        assert!(result.is_resolved());
        assert_eq!(result.database, "EcoCyc");
        assert_eq!(result.require_url().unwrap(), ECOCYC_G7954);

        let missing = CrossReferenceResult::lookup("bogus", "X");
        assert!(!missing.is_resolved());
        assert_eq!(missing.url_or_empty(), "");
        let err = missing.require_url().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported Database bogus");
    }

    #[test]
    fn test_result_serializes_without_error() {
        let result = CrossReferenceResult::lookup("pubmed", "1");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["url"], "http://www.ncbi.nlm.nih.gov/pubmed/1");
        assert!(json.get("error").is_none());

        let err = XrefError::UnsupportedDatabase("bogus".to_string());
        let json = serde_json::to_value(CrossReferenceResult::lookup("bogus", "X").with_error(&err))
            .unwrap();
        assert!(json["url"].is_null());
        assert_eq!(json["error"], "Unsupported Database bogus");
    }
}
