use std::str::FromStr;

use crate::xref::XrefError;

/// Formats that answer with a rendered document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    /// Plain text with the resolved URL
    Txt,
    /// XHTML page linking to the entry
    Html,
    /// XML document
    Xml,
    /// JSON object
    Json,
}

impl BodyFormat {
    pub const ALL: [BodyFormat; 4] = [Self::Txt, Self::Html, Self::Xml, Self::Json];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Html => "html",
            Self::Xml => "xml",
            Self::Json => "json",
        }
    }

    #[must_use]
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Txt => "text/plain; charset=utf-8",
            Self::Html => "application/xhtml+xml; charset=utf-8",
            Self::Xml => "application/xml; charset=utf-8",
            Self::Json => "application/json",
        }
    }
}

/// Output formats accepted by the `format` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    /// A rendered document
    Body(BodyFormat),
    /// HTTP redirect to the external entry
    #[default]
    Redirect,
}

impl ResponseFormat {
    pub const ALL: [ResponseFormat; 5] = [
        Self::Body(BodyFormat::Txt),
        Self::Body(BodyFormat::Html),
        Self::Body(BodyFormat::Xml),
        Self::Body(BodyFormat::Json),
        Self::Redirect,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Body(format) => format.as_str(),
            Self::Redirect => "redirect",
        }
    }
}

impl From<BodyFormat> for ResponseFormat {
    fn from(format: BodyFormat) -> Self {
        Self::Body(format)
    }
}

impl FromStr for ResponseFormat {
    type Err = XrefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| XrefError::UnknownFormat(s.to_string()))
    }
}

impl std::fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_formats() {
        for format in ResponseFormat::ALL {
            assert_eq!(format.as_str().parse::<ResponseFormat>(), Ok(format));
        }
        assert_eq!(
            "xml".parse::<ResponseFormat>(),
            Ok(ResponseFormat::Body(BodyFormat::Xml))
        );
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            "JSON".parse::<ResponseFormat>(),
            Err(XrefError::UnknownFormat("JSON".to_string()))
        );
    }

    #[test]
    fn test_parse_unknown_format() {
        let err = "yaml".parse::<ResponseFormat>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown format yaml");
        assert!("".parse::<ResponseFormat>().is_err());
    }

    #[test]
    fn test_default_is_redirect() {
        assert_eq!(ResponseFormat::default(), ResponseFormat::Redirect);
    }

    #[test]
    fn test_every_body_format_is_a_response_format() {
        for format in BodyFormat::ALL {
            assert!(ResponseFormat::ALL.contains(&format.into()));
        }
        assert_eq!(BodyFormat::Json.content_type(), "application/json");
        assert_eq!(BodyFormat::Txt.content_type(), "text/plain; charset=utf-8");
    }
}
