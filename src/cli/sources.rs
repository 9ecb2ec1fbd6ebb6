use crate::cli::OutputFormat;
use crate::xref::source::CrossReferenceSource;

/// List the supported databases
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print_text(),
        OutputFormat::Json => print_json()?,
        OutputFormat::Tsv => print_tsv(),
    }
    Ok(())
}

fn print_text() {
    let width = CrossReferenceSource::ALL
        .iter()
        .map(|s| s.key().len())
        .max()
        .unwrap_or(0);

    println!("Supported databases ({}):", CrossReferenceSource::ALL.len());
    for source in CrossReferenceSource::ALL {
        println!(
            "  {:<width$}  {}",
            source.key(),
            source.template().display()
        );
    }
}

fn print_json() -> anyhow::Result<()> {
    let sources: Vec<serde_json::Value> = CrossReferenceSource::ALL
        .iter()
        .map(|s| {
            serde_json::json!({
                "key": s.key(),
                "display_name": s.display_name(),
                "template": s.template().display(),
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&sources)?);
    Ok(())
}

fn print_tsv() {
    println!("key\tdisplay_name\ttemplate");
    for source in CrossReferenceSource::ALL {
        println!(
            "{}\t{}\t{}",
            source.key(),
            source.display_name(),
            source.template().display()
        );
    }
}
