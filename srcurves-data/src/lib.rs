//! Bundled spectral response tables and their loading/normalization layer

pub mod catalog;
pub mod error;
pub mod table;

mod reader;

pub use catalog::{ResponseCurves, load_normalized, load_raw, response_curves, supported_sensors};
pub use error::{DataError, Result};
pub use table::{NormalizedTable, RawTable};

// Re-export from srcurves-core for convenience
pub use srcurves_core::{Band, BandSelection, Sensor, SensorGroup};
