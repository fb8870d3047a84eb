// src/bin/cli.rs
use color_eyre::eyre::{bail, Result};
use sodexo_scrape::cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    let summary = cli::run()?;
    if !summary.failures.is_empty() {
        eprintln!("Skipped restaurant pages:");
        for f in &summary.failures {
            eprintln!("  [{}] {} <{}>: {}", f.category, f.name, f.url, f.error);
        }
        bail!(
            "{} restaurant page(s) could not be scraped; {} is incomplete",
            summary.failures.len(),
            summary.out.display()
        );
    }
    Ok(())
}
