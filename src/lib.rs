//! # dbxref
//!
//! A library and web service for resolving biological database cross-references.
//!
//! Gene and organism records link to external databases with pairs such as
//! `ECOCYC:G7954` or `PUBMED:9278503`. `dbxref` turns such a pair into the URL of
//! the entry on the external site and serves it over HTTP, either as a redirect
//! or as a small document in text, XHTML, XML or JSON.
//!
//! ## Example
//!
//! ```rust
//! use dbxref::resolve;
//!
//! let url = resolve("ecocyc", "G7954");
//! assert_eq!(
//!     url.as_deref(),
//!     Some("http://biocyc.org/ECOLI/new-image?type=GENE&object=G7954")
//! );
//!
//! // Unknown databases resolve to nothing
//! assert!(resolve("bogus", "X").is_none());
//! ```
//!
//! ## Modules
//!
//! - [`xref`]: Source table, resolver and cross-reference items
//! - [`web`]: Format dispatch, templates and the web server
//! - [`cli`]: Command-line interface implementation
//! - [`utils`]: List and link helpers used when rendering pages

pub mod cli;
pub mod utils;
pub mod web;
pub mod xref;

// Re-export commonly used types for convenience
pub use web::dispatch::{dispatch, CrossReferenceRequest, Reply};
pub use web::format::{BodyFormat, ResponseFormat};
pub use xref::item::XrefItem;
pub use xref::resolver::{resolve, resolve_or_empty, CrossReferenceResult};
pub use xref::source::CrossReferenceSource;
pub use xref::XrefError;
