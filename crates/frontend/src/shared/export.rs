//! CSV export of the loaded candidate rows and the browser download that
//! delivers it.

use contracts::dashboard::Row;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::shared::dialogs::warn_on_err;

pub const CSV_FILENAME: &str = "recruitment_data.csv";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportError {
    #[error("No data available to download.")]
    Empty,
    #[error("Download failed: {0}")]
    Browser(String),
}

/// Header line plus one line per row, `\n`-separated, no trailing newline.
pub fn build_csv(rows: &[Row], headers: &[String]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(headers.join(","));
    for row in rows {
        let cells: Vec<String> = headers
            .iter()
            .map(|header| escape_csv_cell(&row.text(header)))
            .collect();
        lines.push(cells.join(","));
    }
    lines.join("\n")
}

/// Quote a cell only when it contains a comma, a quote or a newline,
/// doubling embedded quotes.
pub fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Build the CSV and hand it to the browser as a file download.
pub fn export_to_csv(rows: &[Row], headers: &[String], filename: &str) -> Result<(), ExportError> {
    if rows.is_empty() {
        return Err(ExportError::Empty);
    }
    let content = build_csv(rows, headers);
    let blob = create_csv_blob(&content)?;
    download_blob(&blob, filename)
}

fn create_csv_blob(content: &str) -> Result<Blob, ExportError> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| ExportError::Browser(format!("Failed to create blob: {:?}", e)))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), ExportError> {
    let browser = |msg: &str| ExportError::Browser(msg.to_string());
    let window = web_sys::window().ok_or_else(|| browser("No window object"))?;
    let document = window.document().ok_or_else(|| browser("No document object"))?;
    let body = document.body().ok_or_else(|| browser("No body element"))?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| ExportError::Browser(format!("Failed to create object URL: {:?}", e)))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| ExportError::Browser(format!("Failed to create anchor: {:?}", e)))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| ExportError::Browser(format!("Failed to cast to anchor: {:?}", e)))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    warn_on_err("hide download anchor", anchor.style().set_property("visibility", "hidden"));

    body.append_child(&anchor)
        .map_err(|e| ExportError::Browser(format!("Failed to append anchor: {:?}", e)))?;
    anchor.click();
    warn_on_err("remove download anchor", body.remove_child(&anchor));

    Url::revoke_object_url(&url)
        .map_err(|e| ExportError::Browser(format!("Failed to revoke URL: {:?}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(v: serde_json::Value) -> Vec<Row> {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn quotes_commas_and_doubles_quotes() {
        let data = rows(json!([{"a": "x,y"}, {"a": "He said \"hi\""}]));
        assert_eq!(
            build_csv(&data, &["a".to_string()]),
            "a\n\"x,y\"\n\"He said \"\"hi\"\"\""
        );
    }

    #[test]
    fn missing_and_null_cells_are_empty() {
        let data = rows(json!([{"a": 1, "b": null}, {"b": "two"}]));
        let headers = vec!["a".to_string(), "b".to_string()];
        assert_eq!(build_csv(&data, &headers), "a,b\n1,\n,two");
    }

    #[test]
    fn newline_cells_are_quoted() {
        assert_eq!(escape_csv_cell("line1\nline2"), "\"line1\nline2\"");
        assert_eq!(escape_csv_cell("plain"), "plain");
        assert_eq!(escape_csv_cell(""), "");
    }

    #[test]
    fn empty_export_is_rejected() {
        assert_eq!(
            export_to_csv(&[], &["a".to_string()], CSV_FILENAME),
            Err(ExportError::Empty)
        );
    }
}
