// src/extract/mod.rs
use anyhow::{bail, Context, Result};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

pub mod clean;
pub mod record;

pub use record::Record;

/// Caption text identifying the one table we want. Substring match, so the
/// surrounding markup can change without breaking the locator.
pub const TABLE_CAPTION: &str = "The 273 active municipalities of the State of Colorado";

/// Parse the page and pull one `Record` per data row of the target table.
///
/// Fatal conditions (`caption` absent, `tbody` absent) surface as errors;
/// per-field regex misses degrade to empty strings.
#[tracing::instrument(level = "info", skip(html))]
pub fn extract_municipalities(html: &str) -> Result<Vec<Record>> {
    let doc = Html::parse_document(html);
    let table = locate_table(&doc, TABLE_CAPTION)?;
    let tbody = table_body(table)?;

    let rows = data_rows(tbody);
    debug!("{} data rows under tbody", rows.len());

    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        let cells = cell_texts(row);
        let rec = Record::from_cells(&cells);
        if rec.municipality.is_empty() {
            warn!(cell = ?cells.first(), "name cell defeated the cleanup pattern");
        }
        records.push(rec);
    }
    Ok(records)
}

/// Find the table whose `<caption>` text contains `caption`.
fn locate_table<'a>(doc: &'a Html, caption: &str) -> Result<ElementRef<'a>> {
    let caption_sel = Selector::parse("caption").expect("CSS selector for captions should be valid");
    for cap in doc.select(&caption_sel) {
        let text: String = cap.text().collect();
        if text.contains(caption) {
            // A caption's parent is its enclosing table.
            return cap
                .parent()
                .and_then(ElementRef::wrap)
                .filter(|el| el.value().name() == "table")
                .context("caption has no enclosing table");
        }
    }
    bail!("table caption not found: {:?}", caption)
}

/// First `<tbody>` under the table.
fn table_body(table: ElementRef<'_>) -> Result<ElementRef<'_>> {
    let tbody_sel = Selector::parse("tbody").expect("CSS selector for tbody should be valid");
    table
        .select(&tbody_sel)
        .next()
        .context("table body not found")
}

/// Body rows that carry a row-header cell (`th[scope="row"]`) as a direct
/// child. Sub-header and summary rows don't, and are skipped.
fn data_rows(tbody: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    let tr_sel = Selector::parse("tr").expect("CSS selector for rows should be valid");
    tbody
        .select(&tr_sel)
        .filter(|tr| {
            tr.children().filter_map(ElementRef::wrap).any(|c| {
                c.value().name() == "th" && c.value().attr("scope") == Some("row")
            })
        })
        .collect()
}

/// Flattened text of the row's direct `th`/`td` children, in document order.
fn cell_texts(tr: ElementRef<'_>) -> Vec<String> {
    tr.children()
        .filter_map(ElementRef::wrap)
        .filter(|c| matches!(c.value().name(), "th" | "td"))
        .map(|c| c.text().collect::<String>().trim().to_string())
        .collect()
}
