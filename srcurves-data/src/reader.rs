//! CSV parsing for the bundled group tables

use log::trace;

use crate::error::{DataError, Result};
use crate::table::RawTable;

/// Parse one delimited group table: first row is the native header labels,
/// every other row holds numeric cells. Empty cells are kept as absent.
pub(crate) fn parse_table(text: &str, source: &str) -> Result<RawTable> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| DataError::Csv {
            file: source.to_string(),
            source: e,
        })?
        .iter()
        .map(|header| header.trim().to_string())
        .collect();

    let mut columns: Vec<Vec<Option<f64>>> = vec![Vec::new(); headers.len()];
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|e| DataError::Csv {
            file: source.to_string(),
            source: e,
        })?;
        for (index, cell) in record.iter().enumerate() {
            let cell = cell.trim();
            let value = if cell.is_empty() {
                None
            } else {
                Some(cell.parse::<f64>().map_err(|_| DataError::Cell {
                    file: source.to_string(),
                    column: headers[index].clone(),
                    row: row + 1,
                    value: cell.to_string(),
                })?)
            };
            columns[index].push(value);
        }
    }

    trace!(
        "parsed {} table: {} columns x {} rows",
        source,
        headers.len(),
        columns.first().map_or(0, Vec::len)
    );
    Ok(RawTable::new(headers, columns))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_table() {
        let table = parse_table("Wavelength,Blue\n450,0.25\n460,0.5\n", "test").unwrap();
        assert_eq!(table.headers(), &["Wavelength", "Blue"]);
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.column("Blue").unwrap(), &[Some(0.25), Some(0.5)]);
        assert_eq!(table.column("Red"), None);
    }

    #[test]
    fn test_empty_cells_are_absent() {
        let table = parse_table("Wavelength,Blue,NIR2\n450,0.25,\n460,,0.5\n", "test").unwrap();
        assert_eq!(table.column("NIR2").unwrap(), &[None, Some(0.5)]);
        assert_eq!(table.column("Blue").unwrap(), &[Some(0.25), None]);
    }

    #[test]
    fn test_bad_cell_reports_position() {
        let err = parse_table("Wavelength,Blue\n450,0.25\n460,abc\n", "test").unwrap_err();
        match err {
            DataError::Cell { column, row, value, .. } => {
                assert_eq!(column, "Blue");
                assert_eq!(row, 2);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_ragged_record_is_a_csv_error() {
        let err = parse_table("Wavelength,Blue\n450\n", "test").unwrap_err();
        assert!(matches!(err, DataError::Csv { .. }));
    }
}
