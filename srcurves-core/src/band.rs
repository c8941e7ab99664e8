//! Canonical band vocabulary and the sensor/group catalog.
//!
//! Vendors label their response-curve columns inconsistently (one vendor's
//! "green" is not another's), so every table is renamed into this shared
//! vocabulary before anything downstream touches it. Sensors are grouped by
//! shared schema; a group is nothing more than its mapping tables and its
//! default band order.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::error::{Result, SensorError};

/// Canonical spectral band keys shared by every sensor group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    Coastal,
    Blue,
    Green,
    Yellow,
    Red,
    RedEdge,
    RedEdge2,
    RedEdge3,
    Nir1,
    Nir2,
    Nir3,
    Swir1,
    Swir2,
    Swir3,
    Pan,
}

impl Band {
    pub const fn as_str(self) -> &'static str {
        match self {
            Band::Coastal => "coastal",
            Band::Blue => "blue",
            Band::Green => "green",
            Band::Yellow => "yellow",
            Band::Red => "red",
            Band::RedEdge => "rededge",
            Band::RedEdge2 => "rededge2",
            Band::RedEdge3 => "rededge3",
            Band::Nir1 => "nir1",
            Band::Nir2 => "nir2",
            Band::Nir3 => "nir3",
            Band::Swir1 => "swir1",
            Band::Swir2 => "swir2",
            Band::Swir3 => "swir3",
            Band::Pan => "pan",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Band {
    type Err = SensorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "coastal" => Ok(Band::Coastal),
            "blue" => Ok(Band::Blue),
            "green" => Ok(Band::Green),
            "yellow" => Ok(Band::Yellow),
            "red" => Ok(Band::Red),
            "rededge" => Ok(Band::RedEdge),
            "rededge2" => Ok(Band::RedEdge2),
            "rededge3" => Ok(Band::RedEdge3),
            "nir1" => Ok(Band::Nir1),
            "nir2" => Ok(Band::Nir2),
            "nir3" => Ok(Band::Nir3),
            "swir1" => Ok(Band::Swir1),
            "swir2" => Ok(Band::Swir2),
            "swir3" => Ok(Band::Swir3),
            "pan" => Ok(Band::Pan),
            other => Err(SensorError::UnknownBandKey(other.to_string())),
        }
    }
}

/// Supported satellite sensors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sensor {
    L7,
    L8,
    Phr1a,
    Phr1b,
    S2a,
    S2b,
    Spot6,
    Wv2,
    Wv3,
}

impl Sensor {
    /// All supported sensors, sorted by name
    pub const ALL: [Sensor; 9] = [
        Sensor::L7,
        Sensor::L8,
        Sensor::Phr1a,
        Sensor::Phr1b,
        Sensor::S2a,
        Sensor::S2b,
        Sensor::Spot6,
        Sensor::Wv2,
        Sensor::Wv3,
    ];

    /// Sensor names, same order as [`Sensor::ALL`]
    pub const NAMES: [&'static str; 9] = [
        "L7", "L8", "PHR1A", "PHR1B", "S2A", "S2B", "SPOT6", "WV2", "WV3",
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Sensor::L7 => "L7",
            Sensor::L8 => "L8",
            Sensor::Phr1a => "PHR1A",
            Sensor::Phr1b => "PHR1B",
            Sensor::S2a => "S2A",
            Sensor::S2b => "S2B",
            Sensor::Spot6 => "SPOT6",
            Sensor::Wv2 => "WV2",
            Sensor::Wv3 => "WV3",
        }
    }

    /// The group whose response-curve schema this sensor shares
    pub const fn group(self) -> SensorGroup {
        match self {
            Sensor::L7 => SensorGroup::L7,
            Sensor::L8 => SensorGroup::L8,
            Sensor::Phr1a | Sensor::Phr1b | Sensor::Spot6 => SensorGroup::Phr,
            Sensor::S2a | Sensor::S2b => SensorGroup::S2,
            Sensor::Wv2 | Sensor::Wv3 => SensorGroup::Wv,
        }
    }
}

impl fmt::Display for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sensor {
    type Err = SensorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Sensor::ALL
            .iter()
            .find(|sensor| sensor.name() == s)
            .copied()
            .ok_or_else(|| SensorError::Unsupported {
                name: s.to_string(),
                choices: &Sensor::NAMES,
            })
    }
}

/// A cluster of sensors sharing one response-curve schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorGroup {
    L7,
    L8,
    Phr,
    S2,
    Wv,
}

impl SensorGroup {
    pub const ALL: [SensorGroup; 5] = [
        SensorGroup::L7,
        SensorGroup::L8,
        SensorGroup::Phr,
        SensorGroup::S2,
        SensorGroup::Wv,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            SensorGroup::L7 => "L7",
            SensorGroup::L8 => "L8",
            SensorGroup::Phr => "PHR",
            SensorGroup::S2 => "S2",
            SensorGroup::Wv => "WV",
        }
    }

    /// Native label of the wavelength column in this group's table
    pub const fn wavelength_column(self) -> &'static str {
        match self {
            SensorGroup::S2 => "SR_WL",
            _ => "Wavelength",
        }
    }

    /// Canonical band -> native column label, in the vendor table's order.
    ///
    /// Contents follow the bundled reference tables verbatim. In particular
    /// the PHR labels B2Green/B1Blue are kept exactly as validated against
    /// the data, even where they disagree with the vendor's documented band
    /// order.
    pub const fn band_columns(self) -> &'static [(Band, &'static str)] {
        match self {
            SensorGroup::S2 => &[
                (Band::Coastal, "SR_AV_B1"),
                (Band::Blue, "SR_AV_B2"),
                (Band::Green, "SR_AV_B3"),
                (Band::Red, "SR_AV_B4"),
                (Band::RedEdge, "SR_AV_B5"),
                (Band::RedEdge2, "SR_AV_B6"),
                (Band::RedEdge3, "SR_AV_B7"),
                (Band::Nir1, "SR_AV_B8"),
                (Band::Nir2, "SR_AV_B8A"),
                (Band::Nir3, "SR_AV_B9"),
                (Band::Swir1, "SR_AV_B10"),
                (Band::Swir2, "SR_AV_B11"),
                (Band::Swir3, "SR_AV_B12"),
            ],
            SensorGroup::Wv => &[
                (Band::Pan, "Panchromatic"),
                (Band::Coastal, "Coastal"),
                (Band::Blue, "Blue"),
                (Band::Green, "Green"),
                (Band::Yellow, "Yellow"),
                (Band::Red, "Red"),
                (Band::RedEdge, "Red Edge"),
                (Band::Nir1, "NIR1"),
                (Band::Nir2, "NIR2"),
            ],
            SensorGroup::Phr => &[
                (Band::Green, "B2Green"),
                (Band::Blue, "B1Blue"),
                (Band::Red, "B3Red"),
                (Band::Nir1, "B4NIR"),
            ],
            SensorGroup::L8 => &[
                (Band::Coastal, "L8B1Coast"),
                (Band::Blue, "L8B2Blue"),
                (Band::Green, "L8B3Green"),
                (Band::Red, "L8B4Red"),
                (Band::Nir1, "L8B5NIR"),
                (Band::Pan, "L8B8Pan"),
            ],
            SensorGroup::L7 => &[
                (Band::Blue, "L7B1Blue"),
                (Band::Green, "L7B2Green"),
                (Band::Red, "L7B3Red"),
                (Band::Nir1, "L7B4NIR"),
                (Band::Nir2, "L7B5NIR"),
                (Band::Pan, "L7B8Pan"),
            ],
        }
    }

    /// Default band order for curve queries
    pub const fn default_bands(self) -> &'static [Band] {
        match self {
            SensorGroup::S2 => &[
                Band::Coastal,
                Band::Blue,
                Band::Green,
                Band::Red,
                Band::RedEdge,
                Band::RedEdge2,
                Band::RedEdge3,
                Band::Nir1,
                Band::Nir2,
                Band::Nir3,
                Band::Swir1,
                Band::Swir2,
                Band::Swir3,
            ],
            SensorGroup::Wv => &[
                Band::Coastal,
                Band::Blue,
                Band::Green,
                Band::Yellow,
                Band::Red,
                Band::RedEdge,
                Band::Nir1,
                Band::Nir2,
            ],
            SensorGroup::Phr => &[Band::Red, Band::Blue, Band::Green, Band::Nir1],
            SensorGroup::L7 => &[Band::Blue, Band::Green, Band::Red, Band::Nir1],
            SensorGroup::L8 => &[
                Band::Coastal,
                Band::Blue,
                Band::Green,
                Band::Red,
                Band::Nir1,
                Band::Pan,
            ],
        }
    }

    /// Native column label for a canonical band, if this group defines it
    pub fn column_for(self, band: Band) -> Option<&'static str> {
        self.band_columns()
            .iter()
            .find(|(b, _)| *b == band)
            .map(|(_, label)| *label)
    }

    /// Canonical band for a native column label, if this group defines it
    pub fn band_for_column(self, label: &str) -> Option<Band> {
        column_index().get(&(self, label)).copied()
    }

    pub fn has_band(self, band: Band) -> bool {
        self.column_for(band).is_some()
    }
}

impl fmt::Display for SensorGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inverse lookup (native label -> band), built once from the forward tables
fn column_index() -> &'static HashMap<(SensorGroup, &'static str), Band> {
    static INDEX: Lazy<HashMap<(SensorGroup, &'static str), Band>> = Lazy::new(|| {
        let mut index = HashMap::new();
        for group in SensorGroup::ALL {
            for &(band, label) in group.band_columns() {
                let previous = index.insert((group, label), band);
                debug_assert!(previous.is_none(), "duplicate column label in {group} mapping");
            }
        }
        index
    });
    &INDEX
}

/// How to pick band curves out of a sensor's table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BandSelection {
    /// The group's default band sequence
    #[default]
    Default,
    /// Only the panchromatic band
    PanOnly,
    /// Explicit canonical keys, order preserved
    Keys(Vec<Band>),
    /// Indices into the group's default band sequence
    Indices(Vec<usize>),
}

impl BandSelection {
    /// Resolve the selection against a group's vocabulary into an ordered
    /// list of canonical keys
    pub fn resolve(&self, group: SensorGroup) -> Result<Vec<Band>> {
        match self {
            BandSelection::Default => Ok(group.default_bands().to_vec()),
            BandSelection::PanOnly => {
                if group.has_band(Band::Pan) {
                    Ok(vec![Band::Pan])
                } else {
                    Err(SensorError::UnknownBand {
                        group: group.name(),
                        band: Band::Pan,
                    }
                    .into())
                }
            }
            BandSelection::Keys(keys) => {
                for &band in keys {
                    if !group.has_band(band) {
                        return Err(SensorError::UnknownBand {
                            group: group.name(),
                            band,
                        }
                        .into());
                    }
                }
                Ok(keys.clone())
            }
            BandSelection::Indices(indices) => {
                let defaults = group.default_bands();
                indices
                    .iter()
                    .map(|&index| {
                        defaults.get(index).copied().ok_or_else(|| {
                            SensorError::BandIndex {
                                group: group.name(),
                                index,
                                len: defaults.len(),
                            }
                            .into()
                        })
                    })
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CurveError;

    #[test]
    fn test_sensor_names_sorted() {
        let mut names = Sensor::NAMES.to_vec();
        names.sort_unstable();
        assert_eq!(names, Sensor::NAMES.to_vec());
    }

    #[test]
    fn test_sensor_roundtrip() {
        for (sensor, name) in Sensor::ALL.iter().zip(Sensor::NAMES) {
            assert_eq!(sensor.name(), name);
            assert_eq!(name.parse::<Sensor>().unwrap(), *sensor);
        }
    }

    #[test]
    fn test_unsupported_sensor() {
        let err = "QB2".parse::<Sensor>().unwrap_err();
        assert!(matches!(err, SensorError::Unsupported { .. }));
        assert!(err.to_string().contains("WV2"));
    }

    #[test]
    fn test_sensor_groups() {
        assert_eq!(Sensor::Wv2.group(), SensorGroup::Wv);
        assert_eq!(Sensor::Wv3.group(), SensorGroup::Wv);
        assert_eq!(Sensor::Spot6.group(), SensorGroup::Phr);
        assert_eq!(Sensor::S2b.group(), SensorGroup::S2);
        assert_eq!(Sensor::L7.group(), SensorGroup::L7);
    }

    #[test]
    fn test_band_key_roundtrip() {
        for group in SensorGroup::ALL {
            for &(band, _) in group.band_columns() {
                assert_eq!(band.as_str().parse::<Band>().unwrap(), band);
            }
        }
        assert!(matches!(
            "thermal".parse::<Band>(),
            Err(SensorError::UnknownBandKey(_))
        ));
    }

    // The forward and inverse tables must be exact inverses of each other:
    // no duplicate bands, no duplicate labels, both directions total.
    #[test]
    fn test_mapping_tables_are_bijective() {
        for group in SensorGroup::ALL {
            let columns = group.band_columns();
            for &(band, label) in columns {
                assert_eq!(group.column_for(band), Some(label), "{group}/{band}");
                assert_eq!(group.band_for_column(label), Some(band), "{group}/{label}");
            }
            let inverse_entries = column_index()
                .keys()
                .filter(|(g, _)| *g == group)
                .count();
            assert_eq!(inverse_entries, columns.len(), "{group}");
        }
    }

    #[test]
    fn test_wavelength_is_not_a_band() {
        for group in SensorGroup::ALL {
            assert_eq!(group.band_for_column(group.wavelength_column()), None);
        }
    }

    #[test]
    fn test_default_bands_are_defined() {
        for group in SensorGroup::ALL {
            for &band in group.default_bands() {
                assert!(group.has_band(band), "{group}/{band}");
            }
        }
    }

    #[test]
    fn test_selection_default() {
        let keys = BandSelection::Default.resolve(SensorGroup::Phr).unwrap();
        assert_eq!(keys, vec![Band::Red, Band::Blue, Band::Green, Band::Nir1]);
    }

    #[test]
    fn test_selection_pan_only() {
        for group in [SensorGroup::Wv, SensorGroup::L7, SensorGroup::L8] {
            assert_eq!(
                BandSelection::PanOnly.resolve(group).unwrap(),
                vec![Band::Pan]
            );
        }
        for group in [SensorGroup::S2, SensorGroup::Phr] {
            let err = BandSelection::PanOnly.resolve(group).unwrap_err();
            assert!(matches!(
                err,
                CurveError::Sensor(SensorError::UnknownBand { .. })
            ));
        }
    }

    #[test]
    fn test_selection_keys_preserve_order() {
        let keys = vec![Band::Red, Band::Green, Band::Blue];
        for group in SensorGroup::ALL {
            let resolved = BandSelection::Keys(keys.clone()).resolve(group).unwrap();
            assert_eq!(resolved, keys);
        }
    }

    #[test]
    fn test_selection_unknown_key() {
        let err = BandSelection::Keys(vec![Band::Swir1])
            .resolve(SensorGroup::Wv)
            .unwrap_err();
        assert!(matches!(
            err,
            CurveError::Sensor(SensorError::UnknownBand {
                group: "WV",
                band: Band::Swir1
            })
        ));
    }

    #[test]
    fn test_selection_indices() {
        for group in SensorGroup::ALL {
            let defaults = group.default_bands();
            let resolved = BandSelection::Indices(vec![3, 2, 1]).resolve(group).unwrap();
            assert_eq!(resolved, vec![defaults[3], defaults[2], defaults[1]]);
        }
    }

    #[test]
    fn test_selection_index_out_of_range() {
        let err = BandSelection::Indices(vec![0, 11])
            .resolve(SensorGroup::Phr)
            .unwrap_err();
        assert!(matches!(
            err,
            CurveError::Sensor(SensorError::BandIndex {
                index: 11,
                len: 4,
                ..
            })
        ));
    }
}
