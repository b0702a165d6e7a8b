use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::scraping::search_products::Product;

/// Appends a product to the CSV store. The store is read back in full and
/// rewritten with the new row at the end, so the file always carries a single
/// header row.
pub fn save_result(path: &str, product: &Product) -> Result<()> {
    let mut rows = read_existing_rows(path);
    rows.push(product.clone());

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to open store file {}", path))?;
    for row in &rows {
        writer
            .serialize(row)
            .context("Failed to write product row")?;
    }
    writer.flush().context("Failed to flush store file")?;

    println!("{} {}", "Data saved to".green(), path);
    Ok(())
}

/// Rows already present in the store. A missing file is an empty store; an
/// unreadable one is logged and dropped, and the store starts over from the
/// row being saved.
fn read_existing_rows(path: &str) -> Vec<Product> {
    if !Path::new(path).exists() {
        return Vec::new();
    }

    let mut reader = match csv::Reader::from_path(path) {
        Ok(reader) => reader,
        Err(e) => {
            eprintln!("Error reading store file: {}", e);
            return Vec::new();
        }
    };

    match reader
        .deserialize::<Product>()
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("Error reading store file: {}", e);
            Vec::new()
        }
    }
}
