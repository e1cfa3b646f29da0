//! Prints JSON Schemas for regions files and reports.

use imgmap_cli::schema::schema_document;

fn main() -> anyhow::Result<()> {
    let doc = schema_document()?;
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
