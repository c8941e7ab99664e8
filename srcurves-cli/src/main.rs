use anyhow::Result;
use clap::{Parser, Subcommand};
use log::debug;

use srcurves_core::{Band, BandSelection, Interpolation, Sensor, resample_response_curves};
use srcurves_data::{ResponseCurves, response_curves, supported_sensors};

#[derive(Parser, Debug)]
#[command(name = "srcurves")]
#[command(about = "Query bundled satellite sensor spectral response curves", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List supported sensor names
    Sensors,

    /// Show a sensor's default band sequence
    Bands {
        /// Sensor name, e.g. WV2 or S2A
        sensor: String,
    },

    /// Print wavelength and response curves as CSV on stdout
    Curves {
        /// Sensor name, e.g. WV2 or S2A
        sensor: String,

        /// Comma-separated canonical band keys (e.g. red,green,blue)
        #[arg(long, value_delimiter = ',')]
        bands: Option<Vec<String>>,

        /// Comma-separated indices into the default band sequence
        #[arg(long, value_delimiter = ',', conflicts_with = "bands")]
        band_ids: Option<Vec<usize>>,

        /// Panchromatic band only
        #[arg(long, conflicts_with_all = ["bands", "band_ids"])]
        pan: bool,

        /// Resample the curves to this wavelength resolution (nm)
        #[arg(long)]
        resolution: Option<f64>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Sensors => {
            for sensor in supported_sensors() {
                println!("{sensor}");
            }
        }
        Command::Bands { sensor } => {
            let sensor: Sensor = sensor.parse()?;
            for band in sensor.group().default_bands() {
                println!("{band}");
            }
        }
        Command::Curves {
            sensor,
            bands,
            band_ids,
            pan,
            resolution,
        } => {
            let sensor: Sensor = sensor.parse()?;
            let selection = build_selection(bands, band_ids, pan)?;
            debug!("querying {sensor} with {selection:?}");

            let mut result = response_curves(sensor, &selection)?;
            if let Some(resolution) = resolution {
                let (wavelength, curves) = resample_response_curves(
                    &result.wavelength,
                    &result.curves,
                    resolution,
                    Interpolation::Linear,
                )?;
                result.wavelength = wavelength;
                result.curves = curves;
            }
            print_csv(&result);
        }
    }
    Ok(())
}

fn build_selection(
    bands: Option<Vec<String>>,
    band_ids: Option<Vec<usize>>,
    pan: bool,
) -> Result<BandSelection> {
    if pan {
        Ok(BandSelection::PanOnly)
    } else if let Some(keys) = bands {
        let keys = keys
            .iter()
            .map(|key| key.parse::<Band>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(BandSelection::Keys(keys))
    } else if let Some(indices) = band_ids {
        Ok(BandSelection::Indices(indices))
    } else {
        Ok(BandSelection::Default)
    }
}

fn print_csv(result: &ResponseCurves) {
    print!("wavelength");
    for band in &result.bands {
        print!(",{band}");
    }
    println!();
    for (column, wavelength) in result.wavelength.iter().enumerate() {
        print!("{wavelength}");
        for row in 0..result.curves.nrows() {
            print!(",{}", result.curves[[row, column]]);
        }
        println!();
    }
}
