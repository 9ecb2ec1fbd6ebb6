use std::str::FromStr;

use crate::xref::XrefError;

/// A cross-reference as stored on a record: `DATABASE:ACCESSION`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XrefItem {
    pub database: String,
    pub accession: String,
}

impl XrefItem {
    pub fn new(database: impl Into<String>, accession: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            accession: accession.into(),
        }
    }

    /// Path of the redirect endpoint for this item, e.g. `/dbxref/ECOCYC/G7954/`
    #[must_use]
    pub fn dbxref_path(&self) -> String {
        format!("/dbxref/{}/{}/", self.database, self.accession)
    }
}

impl FromStr for XrefItem {
    type Err = XrefError;

    /// Split on the first `:`; the accession may itself contain colons
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((database, accession)) if !database.is_empty() && !accession.is_empty() => {
                Ok(Self::new(database, accession))
            }
            _ => Err(XrefError::InvalidItem(s.to_string())),
        }
    }
}

impl std::fmt::Display for XrefItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.database, self.accession)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item() {
        let item: XrefItem = "ECOCYC:G7954".parse().unwrap();
        assert_eq!(item, XrefItem::new("ECOCYC", "G7954"));
        assert_eq!(item.to_string(), "ECOCYC:G7954");
        assert_eq!(item.dbxref_path(), "/dbxref/ECOCYC/G7954/");
    }

    #[test]
    fn test_parse_item_keeps_colons_in_accession() {
        let item: XrefItem = "GO:GO:0008150".parse().unwrap();
        assert_eq!(item.database, "GO");
        assert_eq!(item.accession, "GO:0008150");
    }

    #[test]
    fn test_parse_invalid_items() {
        for bad in ["", "ECOCYC", ":G7954", "ECOCYC:"] {
            assert_eq!(
                bad.parse::<XrefItem>(),
                Err(XrefError::InvalidItem(bad.to_string())),
                "{bad:?}"
            );
        }
    }
}
