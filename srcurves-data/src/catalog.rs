//! Sensor catalog: bundled group tables, loading and normalization.
//!
//! Every call reloads the bundled table from scratch. The tables are tiny,
//! read-only and embedded in the binary, so there is no cache and no shared
//! state; concurrent callers cannot interfere.

use log::debug;
use ndarray::{Array2, ArrayView1};
use srcurves_core::{Band, BandSelection, Sensor, SensorError, SensorGroup};

use crate::error::{DataError, Result};
use crate::reader::parse_table;
use crate::table::{NormalizedTable, RawTable, normalize};

/// Embedded reference tables, one per sensor group.
///
/// These files are a collaborator contract: their native column labels must
/// match the group mapping tables exactly, or normalization fails.
const GROUP_TABLES: &[(SensorGroup, &str)] = &[
    (SensorGroup::L7, include_str!("../data/L7.csv")),
    (SensorGroup::L8, include_str!("../data/L8.csv")),
    (SensorGroup::Phr, include_str!("../data/PHR.csv")),
    (SensorGroup::S2, include_str!("../data/S2.csv")),
    (SensorGroup::Wv, include_str!("../data/WV.csv")),
];

/// All supported sensors, sorted by name
pub fn supported_sensors() -> &'static [Sensor] {
    &Sensor::ALL
}

fn group_table(group: SensorGroup) -> Result<&'static str> {
    GROUP_TABLES
        .iter()
        .find(|(g, _)| *g == group)
        .map(|(_, text)| *text)
        .ok_or(DataError::MissingData(group.name()))
}

/// Load the bundled table for a sensor's group, native labels untouched
pub fn load_raw(sensor: Sensor) -> Result<RawTable> {
    let group = sensor.group();
    let text = group_table(group)?;
    debug!("loading response table for {sensor} (group {group})");
    parse_table(text, group.name())
}

/// Load the bundled table for a sensor's group with columns renamed to
/// canonical band keys and the rename validated for completeness
pub fn load_normalized(sensor: Sensor) -> Result<NormalizedTable> {
    let raw = load_raw(sensor)?;
    let normalized = normalize(&raw, sensor.group())?;
    if normalized.wavelength().is_empty() {
        return Err(DataError::Schema(normalized.group().name()));
    }
    Ok(normalized)
}

/// Wavelength axis and selected response curves for one sensor
#[derive(Debug, Clone)]
pub struct ResponseCurves {
    /// Wavelength axis shared by all curves (nanometres)
    pub wavelength: Vec<f64>,
    /// Selected bands, in selection order
    pub bands: Vec<Band>,
    /// One row per selected band, sampled at `wavelength`
    pub curves: Array2<f64>,
}

/// Response curves for a sensor, bands picked per `selection` with the
/// selection order preserved
pub fn response_curves(sensor: Sensor, selection: &BandSelection) -> Result<ResponseCurves> {
    let table = load_normalized(sensor)?;
    let bands = selection.resolve(sensor.group())?;

    let n_samples = table.wavelength().len();
    let mut curves = Array2::zeros((bands.len(), n_samples));
    for (row, &band) in bands.iter().enumerate() {
        // resolve() only hands out bands the group defines, and the table's
        // band set equals the group's canonical set after normalization
        let values = table.band(band).ok_or_else(|| {
            DataError::from(srcurves_core::CurveError::from(SensorError::UnknownBand {
                group: sensor.group().name(),
                band,
            }))
        })?;
        curves.row_mut(row).assign(&ArrayView1::from(values));
    }

    Ok(ResponseCurves {
        wavelength: table.wavelength().to_vec(),
        bands,
        curves,
    })
}
