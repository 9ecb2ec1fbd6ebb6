//! Web service for cross-reference resolution.
//!
//! This module provides the HTTP interface using Axum. A request names a
//! database, an accession and an output format; the answer is either a
//! redirect to the external entry or a rendered document.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8080
//! dbxref serve
//!
//! # Custom port and auto-open browser
//! dbxref serve --port 3000 --open
//!
//! # Bind to all interfaces
//! dbxref serve --address 0.0.0.0
//! ```
//!
//! ## Endpoints
//!
//! - `GET /` - Index page with an example and the supported databases
//! - `GET /dbxref/<database>/<accession>/?format=...` - Resolve a cross-reference
//!   (`redirect` by default, or `txt`, `html`, `xml`, `json`)
//! - `GET /api/sources` - List the supported databases as JSON
//! - `GET /health` - Liveness check

pub mod dispatch;
pub mod format;
pub mod server;
pub mod templates;
