//! Tabular containers for response-curve data.
//!
//! A [`RawTable`] holds a group file exactly as parsed: native column labels
//! and `Option<f64>` cells (the vendor tables are ragged, bands end at
//! different wavelengths). A [`NormalizedTable`] is the same data after the
//! native labels have been renamed into the canonical band vocabulary and
//! validated for completeness.

use srcurves_core::{Band, SensorGroup};

use crate::error::{DataError, Result};

/// Raw group table: native labels, column-major cells, absent cells as None
#[derive(Debug, Clone)]
pub struct RawTable {
    headers: Vec<String>,
    columns: Vec<Vec<Option<f64>>>,
}

impl RawTable {
    // Caller guarantees headers and columns are parallel and every column
    // has the same length; the CSV reader enforces this.
    pub(crate) fn new(headers: Vec<String>, columns: Vec<Vec<Option<f64>>>) -> Self {
        Self { headers, columns }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn column(&self, label: &str) -> Option<&[Option<f64>]> {
        self.headers
            .iter()
            .position(|header| header == label)
            .map(|index| self.columns[index].as_slice())
    }
}

/// Table after renaming: wavelength axis plus one column per canonical band.
///
/// The band set equals the group's full canonical set; absent cells are NaN,
/// matching what a numeric array view of the vendor table would hold.
#[derive(Debug, Clone)]
pub struct NormalizedTable {
    group: SensorGroup,
    wavelength: Vec<f64>,
    bands: Vec<(Band, Vec<f64>)>,
}

impl NormalizedTable {
    pub fn group(&self) -> SensorGroup {
        self.group
    }

    pub fn wavelength(&self) -> &[f64] {
        &self.wavelength
    }

    /// Band columns in the group's mapping-table order
    pub fn bands(&self) -> impl Iterator<Item = (Band, &[f64])> {
        self.bands.iter().map(|(band, values)| (*band, values.as_slice()))
    }

    pub fn band(&self, band: Band) -> Option<&[f64]> {
        self.bands
            .iter()
            .find(|(b, _)| *b == band)
            .map(|(_, values)| values.as_slice())
    }
}

/// Rename a raw table's native labels into canonical band keys and validate
/// that the rename was complete.
///
/// The column set after renaming must equal the group's canonical key set
/// exactly (wavelength included): extra native columns, missing columns and
/// unknown labels are all schema drift between the bundled table and the
/// mapping tables, and fail loudly.
pub fn normalize(raw: &RawTable, group: SensorGroup) -> Result<NormalizedTable> {
    let mut found: Vec<String> = Vec::with_capacity(raw.headers().len());
    for header in raw.headers() {
        if header == group.wavelength_column() {
            found.push("wavelength".to_string());
        } else if let Some(band) = group.band_for_column(header) {
            found.push(band.as_str().to_string());
        } else {
            // unknown native label: keep it so the mismatch error shows it
            found.push(header.clone());
        }
    }

    let mut expected: Vec<String> = vec!["wavelength".to_string()];
    expected.extend(group.band_columns().iter().map(|(band, _)| band.as_str().to_string()));

    let mut found_sorted = found.clone();
    found_sorted.sort_unstable();
    found_sorted.dedup();
    let mut expected_sorted = expected.clone();
    expected_sorted.sort_unstable();

    if found_sorted != expected_sorted {
        return Err(DataError::IncompleteRename {
            group: group.name(),
            found,
            expected,
        });
    }

    let wavelength = raw
        .column(group.wavelength_column())
        .ok_or(DataError::Schema(group.name()))?
        .iter()
        .map(|cell| cell.unwrap_or(f64::NAN))
        .collect();

    let mut bands = Vec::with_capacity(group.band_columns().len());
    for &(band, label) in group.band_columns() {
        let values = raw
            .column(label)
            .ok_or_else(|| DataError::IncompleteRename {
                group: group.name(),
                found: found.clone(),
                expected: expected.clone(),
            })?
            .iter()
            .map(|cell| cell.unwrap_or(f64::NAN))
            .collect();
        bands.push((band, values));
    }

    Ok(NormalizedTable {
        group,
        wavelength,
        bands,
    })
}
