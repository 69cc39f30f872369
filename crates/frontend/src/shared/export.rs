/// Выгрузка списка в CSV (открывается в Excel)
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::list_row::ListRow;

/// CSV с BOM (кириллица в Excel) и разделителем `;`
pub fn build_csv<T: ListRow>(rows: &[T]) -> String {
    let mut csv = String::from('\u{FEFF}');

    let headers: Vec<&str> = T::columns().iter().map(|c| c.title).collect();
    csv.push_str(&headers.join(";"));
    csv.push('\n');

    for row in rows {
        let cells: Vec<String> = row.cells().iter().map(|cell| escape_csv_cell(cell)).collect();
        csv.push_str(&cells.join(";"));
        csv.push('\n');
    }
    csv
}

/// Формирует CSV и инициирует скачивание
pub fn export_to_csv<T: ListRow>(rows: &[T], filename: &str) -> Result<(), String> {
    if rows.is_empty() {
        return Err("Нет данных для экспорта".to_string());
    }
    let blob = create_csv_blob(&build_csv(rows))?;
    download_blob(&blob, filename)
}

/// Имя файла выгрузки: `<screen>_<YYYYMMDD_HHMMSS>.csv`
pub fn export_filename(screen_id: &str) -> String {
    format!("{}_{}.csv", screen_id, chrono::Utc::now().format("%Y%m%d_%H%M%S"))
}

fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_row::ListColumn;

    #[derive(Clone)]
    struct Row(&'static str, &'static str);

    impl ListRow for Row {
        fn columns() -> &'static [ListColumn] {
            const COLUMNS: &[ListColumn] =
                &[ListColumn::text("Номер", 100), ListColumn::text("Описание", 200)];
            COLUMNS
        }

        fn row_key(&self) -> String {
            self.0.to_string()
        }

        fn cells(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn test_build_csv_escapes_cells() {
        let csv = build_csv(&[Row("R-1", "Оплата; аванс"), Row("R-2", "Счёт \"А\"")]);
        assert_eq!(
            csv,
            "\u{FEFF}Номер;Описание\nR-1;\"Оплата; аванс\"\nR-2;\"Счёт \"\"А\"\"\"\n"
        );
    }
}
