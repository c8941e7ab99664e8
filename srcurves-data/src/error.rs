use srcurves_core::CurveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error(transparent)]
    Curve(#[from] CurveError),

    #[error("Response table missing from package for sensor group {0}")]
    MissingData(&'static str),

    #[error("Failed to read the {file} table: {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },

    #[error("Bad cell '{value}' in column '{column}' of the {file} table (data row {row})")]
    Cell {
        file: String,
        column: String,
        row: usize,
        value: String,
    },

    #[error(
        "Renamed columns {found:?} do not match the canonical set {expected:?} for sensor group {group}"
    )]
    IncompleteRename {
        group: &'static str,
        found: Vec<String>,
        expected: Vec<String>,
    },

    #[error("No 'wavelength' column for sensor group {0} after renaming")]
    Schema(&'static str),
}

pub type Result<T> = std::result::Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;
    use srcurves_core::SensorError;

    #[test]
    fn test_missing_data_display() {
        let err = DataError::MissingData("WV");
        assert_eq!(
            err.to_string(),
            "Response table missing from package for sensor group WV"
        );
    }

    #[test]
    fn test_schema_display() {
        let err = DataError::Schema("L8");
        assert_eq!(
            err.to_string(),
            "No 'wavelength' column for sensor group L8 after renaming"
        );
    }

    #[test]
    fn test_sensor_error_wraps_transparently() {
        let curve: CurveError = SensorError::UnknownBandKey("foo".to_string()).into();
        let err: DataError = curve.into();
        assert_eq!(err.to_string(), "Sensor error: Unknown band key 'foo'");
    }
}
