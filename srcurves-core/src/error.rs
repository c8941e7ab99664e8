use thiserror::Error;

use crate::band::Band;

/// Common errors across the response-curve crates
#[derive(Error, Debug)]
pub enum CurveError {
    #[error("Sensor error: {0}")]
    Sensor(#[from] SensorError),

    #[error("Resample error: {0}")]
    Resample(#[from] ResampleError),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SensorError {
    #[error("Sensor '{name}' is not supported. Choose from {choices:?}.")]
    Unsupported {
        name: String,
        choices: &'static [&'static str],
    },

    #[error("Unknown band key '{0}'")]
    UnknownBandKey(String),

    #[error("Band '{band}' is not defined for sensor group {group}")]
    UnknownBand { group: &'static str, band: Band },

    #[error("Band index {index} is out of range for sensor group {group} ({len} default bands)")]
    BandIndex {
        group: &'static str,
        index: usize,
        len: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResampleError {
    #[error("Invalid resampling input: {0}")]
    InvalidInput(String),

    #[error("Wavelength {wavelength} is outside the source domain [{start}, {end}]")]
    OutOfDomain {
        wavelength: f64,
        start: f64,
        end: f64,
    },
}

pub type Result<T> = std::result::Result<T, CurveError>;
