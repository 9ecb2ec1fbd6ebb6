use axum::{
    extract::{Path, Query, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::cli::ServeArgs;
use crate::web::dispatch::handle;
use crate::web::templates::{render_index, EXAMPLE_ITEM};
use crate::xref::item::XrefItem;
use crate::xref::source::CrossReferenceSource;
use crate::xref::XrefError;

/// Limits applied to every request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Requests slower than this get a 408
    pub request_timeout: Duration,
    /// Requests in flight at once
    pub max_concurrent_requests: usize,
    /// Seconds for a client IP to earn back one request of its quota
    pub rate_period_secs: u64,
    /// Requests a client IP may burst above the sustained rate
    pub rate_burst: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            max_concurrent_requests: 100,
            rate_period_secs: 1,
            rate_burst: 50,
        }
    }
}

impl From<&ServeArgs> for ServerConfig {
    fn from(args: &ServeArgs) -> Self {
        Self {
            request_timeout: Duration::from_secs(args.timeout),
            max_concurrent_requests: args.max_concurrent,
            rate_period_secs: args.rate_period,
            rate_burst: args.rate_burst,
        }
    }
}

/// Shared application state
pub struct AppState {
    /// Index page, rendered once at startup
    pub index_page: String,
}

impl AppState {
    /// # Errors
    ///
    /// Returns an error if the example cross-reference cannot be parsed.
    pub fn new() -> anyhow::Result<Self> {
        let example: XrefItem = EXAMPLE_ITEM.parse()?;
        Ok(Self {
            index_page: render_index(&example),
        })
    }
}

/// Error body for the JSON API
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
}

impl From<&XrefError> for ErrorResponse {
    fn from(error: &XrefError) -> Self {
        Self {
            error: error.to_string(),
            error_type: error.error_type().to_string(),
        }
    }
}

/// The `format` query parameter; when repeated, the last value wins
fn format_param(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .rev()
        .find(|(key, _)| key == "format")
        .map(|(_, value)| value.as_str())
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created or the server fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Routes without middleware.
///
/// # Errors
///
/// Returns an error if the application state cannot be built.
pub fn routes() -> anyhow::Result<Router> {
    let state = Arc::new(AppState::new()?);

    Ok(Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/api/sources", get(sources_handler))
        .route("/dbxref/{*path}", get(dbxref_handler))
        .with_state(state))
}

/// Create the application router with all routes and middleware configured.
///
/// # Errors
///
/// Returns an error if the state cannot be built or the rate limit is zero.
pub fn create_router(config: &ServerConfig) -> anyhow::Result<Router> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(config.rate_period_secs)
        .burst_size(config.rate_burst)
        .finish()
        .ok_or_else(|| anyhow::anyhow!("rate limit period and burst size must be non-zero"))?;

    let app = routes()?.layer(
        ServiceBuilder::new()
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("x-content-type-options"),
                HeaderValue::from_static("nosniff"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("x-frame-options"),
                HeaderValue::from_static("DENY"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("referrer-policy"),
                HeaderValue::from_static("strict-origin-when-cross-origin"),
            ))
            // IP-based rate limiting
            .layer(GovernorLayer {
                config: Arc::new(governor_conf),
            })
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                config.request_timeout,
            ))
            .layer(ConcurrencyLimitLayer::new(config.max_concurrent_requests)),
    );

    Ok(app)
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let config = ServerConfig::from(&args);
    let app = create_router(&config)?;

    let addr = format!("{}:{}", args.address, args.port);
    tracing::info!(?config, "starting server");
    println!("Starting dbxref web server at http://{addr}");

    if args.open {
        let _ = open::that(format!("http://{addr}"));
    }

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Main page handler
async fn index_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.index_page.clone())
}

async fn health_handler() -> &'static str {
    "ok"
}

/// Split `<database>/<accession>[/]` on the last slash.
///
/// Database keys may themselves contain a slash (`uniprotkb/swiss-prot`),
/// accessions may not.
fn split_dbxref_path(path: &str) -> Option<(&str, &str)> {
    let path = path.strip_suffix('/').unwrap_or(path);
    let path = path.strip_prefix('/').unwrap_or(path);
    path.rsplit_once('/')
        .filter(|(database, accession)| !database.is_empty() && !accession.is_empty())
}

/// Resolve a cross-reference and answer in the requested format
async fn dbxref_handler(
    Path(path): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let Some((database, accession)) = split_dbxref_path(&path) else {
        let error = XrefError::InvalidPath(path.clone());
        tracing::warn!("{error}");
        return (StatusCode::NOT_FOUND, Json(ErrorResponse::from(&error))).into_response();
    };

    handle(database, accession, format_param(&params)).into_response()
}

/// Return the list of supported databases
async fn sources_handler() -> Json<serde_json::Value> {
    let sources: Vec<serde_json::Value> = CrossReferenceSource::ALL
        .iter()
        .map(|s| {
            serde_json::json!({
                "key": s.key(),
                "display_name": s.display_name(),
                "host": s.host(),
                "template": s.template().display(),
            })
        })
        .collect();

    Json(serde_json::json!({
        "count": sources.len(),
        "sources": sources,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_dbxref_path() {
        assert_eq!(split_dbxref_path("ecocyc/G7954/"), Some(("ecocyc", "G7954")));
        assert_eq!(split_dbxref_path("ecocyc/G7954"), Some(("ecocyc", "G7954")));
        assert_eq!(
            split_dbxref_path("uniprotkb/swiss-prot/P0A7B8/"),
            Some(("uniprotkb/swiss-prot", "P0A7B8"))
        );
        assert_eq!(split_dbxref_path("ecocyc"), None);
        assert_eq!(split_dbxref_path("ecocyc/"), None);
        assert_eq!(split_dbxref_path("/G7954"), None);
    }

    #[test]
    fn test_last_format_param_wins() {
        let params = vec![
            ("format".to_string(), "yaml".to_string()),
            ("page".to_string(), "2".to_string()),
            ("format".to_string(), "json".to_string()),
        ];
        assert_eq!(format_param(&params), Some("json"));
        assert_eq!(format_param(&params[1..2]), None);
        assert_eq!(format_param(&[]), None);
    }

    #[test]
    fn test_error_response_from_xref_error() {
        let response = ErrorResponse::from(&XrefError::InvalidPath("ecocyc".to_string()));
        assert_eq!(response.error_type, "invalid_path");
        assert!(response.error.contains("/dbxref/ecocyc"));
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.max_concurrent_requests, 100);
    }

    #[test]
    fn test_zero_rate_is_rejected() {
        let config = ServerConfig {
            rate_period_secs: 0,
            ..ServerConfig::default()
        };
        assert!(create_router(&config).is_err());
    }
}
