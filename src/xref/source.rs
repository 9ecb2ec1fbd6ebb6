use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

/// Everything but the RFC 3986 unreserved characters
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode an accession as a single path segment.
///
/// `.` and `..` would be read as dot segments and swallowed, so their dots
/// are encoded too.
fn encode_path_segment(accession: &str) -> String {
    match accession {
        "." => "%2E".to_string(),
        ".." => "%2E%2E".to_string(),
        other => utf8_percent_encode(other, PATH_SEGMENT).to_string(),
    }
}

/// How an accession is placed into a source URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlTemplate {
    /// Accession appended as the final path segment
    Path { base: &'static str },
    /// Accession appended as the last query parameter
    Query {
        base: &'static str,
        param: &'static str,
    },
}

impl UrlTemplate {
    /// Fill the template with an accession.
    ///
    /// The accession is percent-encoded for the position it lands in, so an
    /// accession can never add path segments, query parameters or a fragment
    /// to the link. Letters, digits, `-`, `.` and `_` pass through verbatim,
    /// except for the path segments `.` and `..`.
    ///
    /// Path URLs are built by appending to the base and are not re-parsed,
    /// since parsing would collapse an encoded `..` segment.
    ///
    /// Returns `None` only if the template base itself is not a valid URL.
    #[must_use]
    pub fn fill(&self, accession: &str) -> Option<String> {
        match self {
            Self::Path { base } => {
                let url = Url::parse(base).ok()?;
                let prefix = url.as_str();
                let sep = if prefix.ends_with('/') { "" } else { "/" };
                Some(format!("{prefix}{sep}{}", encode_path_segment(accession)))
            }
            Self::Query { base, param } => {
                let mut url = Url::parse(base).ok()?;
                url.query_pairs_mut().append_pair(param, accession);
                Some(url.into())
            }
        }
    }

    /// Human readable form with `ACC` standing in for the accession
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Path { base } => format!("{}/ACC", base.trim_end_matches('/')),
            Self::Query { base, param } => {
                let sep = if base.contains('?') { '&' } else { '?' };
                format!("{base}{sep}{param}=ACC")
            }
        }
    }
}

/// External databases that cross-references can point to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrossReferenceSource {
    Asap,
    EcoCyc,
    EcoGene,
    GeneId,
    Gi,
    Project,
    BioProject,
    PubMed,
    UniProtSwissProt,
}

impl CrossReferenceSource {
    /// Every known source, in display order
    pub const ALL: [CrossReferenceSource; 9] = [
        Self::Asap,
        Self::EcoCyc,
        Self::EcoGene,
        Self::GeneId,
        Self::Gi,
        Self::Project,
        Self::BioProject,
        Self::PubMed,
        Self::UniProtSwissProt,
    ];

    /// Canonical lower-case lookup key
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Asap => "asap",
            Self::EcoCyc => "ecocyc",
            Self::EcoGene => "ecogene",
            Self::GeneId => "geneid",
            Self::Gi => "gi",
            Self::Project => "project",
            Self::BioProject => "bioproject",
            Self::PubMed => "pubmed",
            Self::UniProtSwissProt => "uniprotkb/swiss-prot",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Asap => "ASAP",
            Self::EcoCyc => "EcoCyc",
            Self::EcoGene => "EcoGene",
            Self::GeneId => "NCBI Gene",
            Self::Gi => "NCBI Nucleotide (GI)",
            Self::Project => "NCBI BioProject",
            Self::BioProject => "NCBI BioProject (search)",
            Self::PubMed => "PubMed",
            Self::UniProtSwissProt => "UniProtKB/Swiss-Prot",
        }
    }

    #[must_use]
    pub fn template(self) -> UrlTemplate {
        match self {
            Self::Asap => UrlTemplate::Query {
                base: "https://asap.ahabs.wisc.edu/annotation/php/feature_info.php",
                param: "FeatureID",
            },
            Self::EcoCyc => UrlTemplate::Query {
                base: "http://biocyc.org/ECOLI/new-image?type=GENE",
                param: "object",
            },
            Self::EcoGene => UrlTemplate::Query {
                base: "http://ecogene.org/geneInfo.php",
                param: "eg_id",
            },
            Self::GeneId => UrlTemplate::Query {
                base: "http://www.ncbi.nlm.nih.gov/sites/entrez?db=gene&cmd=Retrieve&dopt=full_report",
                param: "list_uids",
            },
            Self::Gi => UrlTemplate::Path {
                base: "http://www.ncbi.nlm.nih.gov/nuccore/",
            },
            Self::Project => UrlTemplate::Path {
                base: "http://www.ncbi.nlm.nih.gov/bioproject/",
            },
            Self::BioProject => UrlTemplate::Query {
                base: "http://www.ncbi.nlm.nih.gov/bioproject",
                param: "term",
            },
            Self::PubMed => UrlTemplate::Path {
                base: "http://www.ncbi.nlm.nih.gov/pubmed/",
            },
            Self::UniProtSwissProt => UrlTemplate::Path {
                base: "http://www.uniprot.org/uniprot/",
            },
        }
    }

    /// Host of the external site, used to group sources on the index page
    #[must_use]
    pub fn host(self) -> &'static str {
        match self {
            Self::Asap => "asap.ahabs.wisc.edu",
            Self::EcoCyc => "biocyc.org",
            Self::EcoGene => "ecogene.org",
            Self::GeneId | Self::Gi | Self::Project | Self::BioProject | Self::PubMed => {
                "www.ncbi.nlm.nih.gov"
            }
            Self::UniProtSwissProt => "www.uniprot.org",
        }
    }

    /// Look up a source by name, ignoring case
    #[must_use]
    pub fn from_key(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::ALL.into_iter().find(|s| s.key() == lower)
    }

    /// Build the URL for an accession in this source
    #[must_use]
    pub fn url_for(self, accession: &str) -> Option<String> {
        self.template().fill(accession)
    }
}

impl std::fmt::Display for CrossReferenceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_unique_and_lowercase() {
        let keys: std::collections::HashSet<_> =
            CrossReferenceSource::ALL.iter().map(|s| s.key()).collect();
        assert_eq!(keys.len(), CrossReferenceSource::ALL.len());
        for key in keys {
            assert_eq!(key, key.to_lowercase());
        }
    }

    #[test]
    fn test_from_key_is_case_insensitive() {
        assert_eq!(
            CrossReferenceSource::from_key("EcoCyc"),
            Some(CrossReferenceSource::EcoCyc)
        );
        assert_eq!(
            CrossReferenceSource::from_key("UniProtKB/Swiss-Prot"),
            Some(CrossReferenceSource::UniProtSwissProt)
        );
        assert_eq!(CrossReferenceSource::from_key("bogus"), None);
        assert_eq!(CrossReferenceSource::from_key(""), None);
    }

    #[test]
    fn test_every_template_fills() {
        for source in CrossReferenceSource::ALL {
            let url = source.url_for("ABC123").unwrap();
            assert!(url.ends_with("ABC123"), "{source}: {url}");
            assert_eq!(url, source.template().display().replace("ACC", "ABC123"));
        }
    }

    #[test]
    fn test_query_template_appends_to_existing_query() {
        assert_eq!(
            CrossReferenceSource::GeneId.url_for("945803").unwrap(),
            "http://www.ncbi.nlm.nih.gov/sites/entrez?db=gene&cmd=Retrieve&dopt=full_report&list_uids=945803"
        );
    }

    #[test]
    fn test_path_template_escapes_separators() {
        let url = CrossReferenceSource::PubMed.url_for("1/../2?x#y").unwrap();
        assert_eq!(url, "http://www.ncbi.nlm.nih.gov/pubmed/1%2F..%2F2%3Fx%23y");
    }

    #[test]
    fn test_query_template_escapes_separators() {
        let url = CrossReferenceSource::EcoCyc.url_for("G1&type=X").unwrap();
        assert_eq!(
            url,
            "http://biocyc.org/ECOLI/new-image?type=GENE&object=G1%26type%3DX"
        );
    }

    #[test]
    fn test_dot_segments_are_kept() {
        assert_eq!(
            CrossReferenceSource::PubMed.url_for("..").unwrap(),
            "http://www.ncbi.nlm.nih.gov/pubmed/%2E%2E"
        );
        assert_eq!(
            CrossReferenceSource::Gi.url_for(".").unwrap(),
            "http://www.ncbi.nlm.nih.gov/nuccore/%2E"
        );
        assert_eq!(
            CrossReferenceSource::UniProtSwissProt.url_for("...").unwrap(),
            "http://www.uniprot.org/uniprot/..."
        );
        assert_eq!(
            CrossReferenceSource::EcoCyc.url_for("..").unwrap(),
            "http://biocyc.org/ECOLI/new-image?type=GENE&object=.."
        );
    }

    #[test]
    fn test_path_template_encodes_reserved_characters() {
        assert_eq!(
            CrossReferenceSource::Project.url_for("a b:c%").unwrap(),
            "http://www.ncbi.nlm.nih.gov/bioproject/a%20b%3Ac%25"
        );
        assert_eq!(
            CrossReferenceSource::PubMed.url_for("rna~1.2_x-y").unwrap(),
            "http://www.ncbi.nlm.nih.gov/pubmed/rna~1.2_x-y"
        );
    }

    #[test]
    fn test_empty_accession() {
        assert_eq!(
            CrossReferenceSource::Gi.url_for("").unwrap(),
            "http://www.ncbi.nlm.nih.gov/nuccore/"
        );
        assert_eq!(
            CrossReferenceSource::EcoGene.url_for("").unwrap(),
            "http://ecogene.org/geneInfo.php?eg_id="
        );
    }
}
