// src/table.rs

use anyhow::{Context, Result};
use scraper::ElementRef;
use std::io::Write;
use tracing::{debug, trace};
use url::Url;

use crate::{
    fetch::{
        license_text::get_license_text,
        links::{is_license_text_link, resolve},
        Fetch,
    },
    html::{Node, DATA_CELL, HEADER_CELL, LINK, ROW},
};

/// Dump an HTML table as CSV, one record per `<tr>`, flushing after each.
///
/// Returns the number of rows written.
pub async fn dump_licenses_from_table<F, W>(
    table: ElementRef<'_>,
    fetcher: &F,
    base_url: &Url,
    out: W,
) -> Result<usize>
where
    F: Fetch + ?Sized,
    W: Write,
{
    let rows = table.find_all(&ROW);
    debug!(rows = rows.len(), "table rows");

    let mut writer = csv_writer(out);
    for (i, tr) in rows.iter().enumerate() {
        let record = transform_row(tr, fetcher, base_url).await?;
        trace!(row = i, fields = record.len(), "writing row");
        if record.is_empty() {
            // csv writes `""` for a record with no fields; a cell-less row is a bare line
            let mut inner = writer
                .into_inner()
                .map_err(|e| e.into_error())
                .context("flushing CSV output")?;
            inner
                .write_all(b"\n")
                .with_context(|| format!("writing CSV row {}", i))?;
            writer = csv_writer(inner);
        } else {
            writer
                .write_record(&record)
                .with_context(|| format!("writing CSV row {}", i))?;
        }
        writer.flush().context("flushing CSV output")?;
    }

    Ok(rows.len())
}

/// Header texts first, then data cell values, each in document order.
pub async fn transform_row<F>(
    tr: &ElementRef<'_>,
    fetcher: &F,
    base_url: &Url,
) -> Result<Vec<String>>
where
    F: Fetch + ?Sized,
{
    let mut record: Vec<String> = tr
        .find_all(&HEADER_CELL)
        .iter()
        .map(Node::text_joined)
        .collect();

    for td in tr.find_all(&DATA_CELL) {
        record.push(data_cell_value(&td, fetcher, base_url).await?);
    }

    Ok(record)
}

async fn data_cell_value<F>(td: &ElementRef<'_>, fetcher: &F, base_url: &Url) -> Result<String>
where
    F: Fetch + ?Sized,
{
    if let Some(url) = license_text_url(td, base_url)? {
        debug!(%url, "following license text link");
        if let Some(text) = get_license_text(fetcher, &url).await? {
            return Ok(text);
        }
        debug!(%url, "falling back to cell text");
    }
    Ok(td.text_joined())
}

/// Target of the cell's first link, when that link carries the marker.
fn license_text_url(td: &ElementRef<'_>, base_url: &Url) -> Result<Option<Url>> {
    let href = match td.find(&LINK).and_then(|a| a.value().attr("href")) {
        Some(href) if is_license_text_link(href) => href,
        _ => return Ok(None),
    };
    resolve(base_url, href).map(Some)
}

fn csv_writer<W: Write>(out: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out)
}
