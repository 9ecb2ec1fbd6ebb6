//! Page templates and rendering.
//!
//! Templates are embedded at compile time. Placeholders are written
//! `{{ name }}`; substitution is a single pass, so values containing
//! placeholder syntax are never expanded again.

use crate::utils::listutil::{dynamic_regroup, first_half, last_half, make_query, Group};
use crate::web::format::{BodyFormat, ResponseFormat};
use crate::xref::item::XrefItem;
use crate::xref::resolver::CrossReferenceResult;
use crate::xref::source::CrossReferenceSource;
use crate::xref::XrefError;

const OUTPUT_TXT: &str = include_str!("templates/output.txt");
const OUTPUT_HTML: &str = include_str!("templates/output.html");
const OUTPUT_XML: &str = include_str!("templates/output.xml");
const ERROR_HTML: &str = include_str!("templates/error.html");
const INDEX_HTML: &str = include_str!("templates/index.html");

/// Cross-reference shown on the index page
pub const EXAMPLE_ITEM: &str = "ECOCYC:G7954";

/// Substitute `{{ name }}` placeholders. Unknown names render as empty.
#[must_use]
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let name = after[..end].trim();
        if let Some((_, value)) = vars.iter().find(|(k, _)| *k == name) {
            out.push_str(value);
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

/// Escape text for HTML and XML bodies and attribute values
#[must_use]
pub fn escape_markup(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_escaped(template: &str, result: &CrossReferenceResult) -> String {
    let database = escape_markup(&result.database);
    let accession = escape_markup(&result.accession);
    let url = escape_markup(result.url_or_empty());
    render(
        template,
        &[
            ("database", database.as_str()),
            ("accession", accession.as_str()),
            ("url", url.as_str()),
        ],
    )
}

/// Render a resolution in one of the body formats
#[must_use]
pub fn render_result(format: BodyFormat, result: &CrossReferenceResult) -> String {
    match format {
        BodyFormat::Txt => render(OUTPUT_TXT, &[("url", result.url_or_empty())]),
        BodyFormat::Html => render_escaped(OUTPUT_HTML, result),
        BodyFormat::Xml => render_escaped(OUTPUT_XML, result),
        BodyFormat::Json => {
            let value = serde_json::json!({
                "database": result.database,
                "accession": result.accession,
                "url": result.url,
            });
            format!("{value:#}\n")
        }
    }
}

/// Render the error page for a failed request
#[must_use]
pub fn render_error(result: &CrossReferenceResult, error: &XrefError) -> String {
    let message = escape_markup(&error.to_string());
    let database = escape_markup(&result.database);
    let accession = escape_markup(&result.accession);
    render(
        ERROR_HTML,
        &[
            ("error", message.as_str()),
            ("database", database.as_str()),
            ("accession", accession.as_str()),
        ],
    )
}

fn format_links(item: &XrefItem) -> String {
    let path = escape_markup(&item.dbxref_path());
    ResponseFormat::ALL
        .iter()
        .map(|format| {
            let query = make_query(&[], "format", format.as_str());
            format!(
                "<li><a href=\"{path}?{}\">{}</a></li>",
                escape_markup(&query),
                format.as_str()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn source_column(groups: &[Group<&str, CrossReferenceSource>]) -> String {
    groups
        .iter()
        .map(|group| {
            let rows = group
                .list
                .iter()
                .map(|source| {
                    format!(
                        "<li><code>{}</code> {}<br /><small>{}</small></li>",
                        escape_markup(source.key()),
                        escape_markup(source.display_name()),
                        escape_markup(&source.template().display())
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            format!(
                "<h3>{}</h3>\n<ul>\n{rows}\n</ul>",
                escape_markup(group.grouper)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the index page: an example link per format and the source table
#[must_use]
pub fn render_index(example: &XrefItem) -> String {
    let mut sources = CrossReferenceSource::ALL.to_vec();
    sources.sort_by_key(|s| s.host());
    let groups = dynamic_regroup(sources, |s| s.host());

    let item = escape_markup(&example.to_string());
    let formats = format_links(example);
    let left = source_column(first_half(&groups));
    let right = source_column(last_half(&groups));

    render(
        INDEX_HTML,
        &[
            ("item", item.as_str()),
            ("formats", formats.as_str()),
            ("left", left.as_str()),
            ("right", right.as_str()),
        ],
    )
}
