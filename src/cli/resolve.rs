use clap::Args;

use crate::cli::OutputFormat;
use crate::xref::item::XrefItem;
use crate::xref::resolver::CrossReferenceResult;

#[derive(Args)]
pub struct ResolveArgs {
    /// Database name (case-insensitive), or a DATABASE:ACCESSION item
    #[arg(required = true)]
    pub database: String,

    /// Accession in the external database
    pub accession: Option<String>,
}

impl ResolveArgs {
    fn item(&self) -> anyhow::Result<XrefItem> {
        match &self.accession {
            Some(accession) => Ok(XrefItem::new(&self.database, accession)),
            None => Ok(self.database.parse()?),
        }
    }
}

/// Print the URL for a cross-reference
///
/// # Errors
///
/// Returns an error if the item is malformed or the database is not supported.
pub fn run(args: &ResolveArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let item = args.item()?;
    let result = CrossReferenceResult::lookup(&item.database, &item.accession);

    if verbose {
        eprintln!("Resolving {item}");
    }

    match format {
        OutputFormat::Text => {
            if let Some(url) = &result.url {
                println!("{url}");
            }
        }
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Tsv => print_tsv(&result),
    }

    result.require_url()?;
    Ok(())
}

fn print_json(result: &CrossReferenceResult) -> anyhow::Result<()> {
    let output = match result.require_url() {
        Ok(_) => result.clone(),
        Err(e) => result.clone().with_error(&e),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(result: &CrossReferenceResult) {
    println!("database\taccession\turl");
    println!(
        "{}\t{}\t{}",
        result.database,
        result.accession,
        result.url_or_empty()
    );
}
