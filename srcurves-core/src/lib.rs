pub mod band;
pub mod error;
pub mod resample;

pub use band::{Band, BandSelection, Sensor, SensorGroup};
pub use error::{CurveError, ResampleError, Result, SensorError};
pub use resample::{Interpolation, resample, resample_response_curves};
