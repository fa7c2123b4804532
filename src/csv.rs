use anyhow::Context;
use noble_types::Product;

pub const EXPORT_FILE_NAME: &str = "noble-life-sciences-products.csv";

const HEADER: [&str; 5] = [
    "Sr. No",
    "Product Name",
    "End Product",
    "CAS Number",
    "Category",
];

/// Wraps a text cell in double quotes, doubling any embedded quote.
fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Writes `products` as CSV, numbering rows from 1 in the given order.
///
/// The header and `Sr. No` are written bare, every text cell is quoted
/// regardless of its content.
pub fn export_products(products: &[Product]) -> Result<Vec<u8>, anyhow::Error> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::with_capacity(64 * (products.len() + 1)));
    writer.write_record(HEADER)?;
    for (i, p) in products.iter().enumerate() {
        writer.write_record([
            (i + 1).to_string(),
            quoted(&p.product_name),
            quoted(&p.end_product),
            quoted(&p.cas_number),
            quoted(&p.category),
        ])?;
    }
    writer
        .into_inner()
        .map_err(|err| err.into_error())
        .context("Unable to finish CSV export")
}
