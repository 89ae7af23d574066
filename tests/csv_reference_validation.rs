//! Validation against reference data for the full daily pipeline.
//!
//! `tests/data/daily_yield_reference.csv` covers 9 latitudes from -60° to 85°, 6 tilts and 5 days
//! spread over the year, including polar day/night and zero-irradiance rows. Reference values use
//! beam fraction 0.7, γ = -0.004/°C and NOCT 45°C.

use csv::ReaderBuilder;
use pv_yield::{
    ModelConfig, declination_angle, geometric_factor_rb, ideal_daily_photovoltaic_energy_output,
    poa_irradiance_daily, pv_energy_temp_adjusted_daily, sunset_hour_angle,
};
use std::error::Error;
use std::fs::File;

const RELATIVE_TOLERANCE: f64 = 1e-9;

#[derive(Debug)]
struct ReferenceRow {
    latitude: f64,
    tilt: f64,
    day_of_year: i32,
    ghi: f64,
    temp_air: f64,
    capacity_kwp: f64,
    declination: f64,
    sunset_hour_angle: f64,
    rb: f64,
    poa: f64,
    ideal_energy: f64,
    adjusted_energy: f64,
}

fn load_reference_data() -> Result<Vec<ReferenceRow>, Box<dyn Error>> {
    let file = File::open("tests/data/daily_yield_reference.csv")?;
    let mut reader = ReaderBuilder::new()
        .comment(Some(b'#'))
        .has_headers(false)
        .from_reader(file);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.len() < 12 {
            continue;
        }
        rows.push(ReferenceRow {
            latitude: record[0].parse()?,
            tilt: record[1].parse()?,
            day_of_year: record[2].parse()?,
            ghi: record[3].parse()?,
            temp_air: record[4].parse()?,
            capacity_kwp: record[5].parse()?,
            declination: record[6].parse()?,
            sunset_hour_angle: record[7].parse()?,
            rb: record[8].parse()?,
            poa: record[9].parse()?,
            ideal_energy: record[10].parse()?,
            adjusted_energy: record[11].parse()?,
        });
    }

    Ok(rows)
}

fn assert_close(actual: f64, expected: f64, what: &str, row: &ReferenceRow) {
    let tolerance = RELATIVE_TOLERANCE * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "{what}: got {actual}, expected {expected} for lat {} tilt {} day {}",
        row.latitude,
        row.tilt,
        row.day_of_year
    );
}

#[test]
fn validate_geometry_against_reference() -> Result<(), Box<dyn Error>> {
    let rows = load_reference_data()?;
    assert_eq!(rows.len(), 270, "unexpected reference row count");

    for row in &rows {
        let delta = declination_angle(row.day_of_year);
        assert_close(delta, row.declination, "declination", row);
        assert_close(
            sunset_hour_angle(row.latitude, delta),
            row.sunset_hour_angle,
            "sunset hour angle",
            row,
        );
        assert_close(
            geometric_factor_rb(row.latitude, row.tilt, row.day_of_year),
            row.rb,
            "Rb",
            row,
        );
    }

    Ok(())
}

#[test]
fn validate_energy_against_reference() -> Result<(), Box<dyn Error>> {
    let rows = load_reference_data()?;
    let config = ModelConfig::standard();

    let mut max_relative_error = 0.0_f64;
    for row in &rows {
        let poa = poa_irradiance_daily(row.ghi, row.latitude, row.tilt, row.day_of_year, 0.7);
        assert_close(poa, row.poa, "POA", row);

        let ideal = ideal_daily_photovoltaic_energy_output(
            row.ghi,
            row.latitude,
            row.tilt,
            row.day_of_year,
            row.capacity_kwp,
            &config,
        );
        assert_close(ideal, row.ideal_energy, "ideal energy", row);
        assert_eq!(ideal, poa * row.capacity_kwp);

        let adjusted = pv_energy_temp_adjusted_daily(
            row.ghi,
            row.temp_air,
            row.latitude,
            row.tilt,
            row.day_of_year,
            row.capacity_kwp,
            &config,
        );
        assert_close(adjusted, row.adjusted_energy, "adjusted energy", row);

        if row.adjusted_energy != 0.0 {
            let relative = ((adjusted - row.adjusted_energy) / row.adjusted_energy).abs();
            max_relative_error = max_relative_error.max(relative);
        }
    }

    println!("✓ Validated {} daily yield cases", rows.len());
    println!("✓ Max relative error (adjusted energy): {max_relative_error:e}");
    Ok(())
}

#[test]
fn zero_irradiance_rows_yield_nothing() -> Result<(), Box<dyn Error>> {
    let rows = load_reference_data()?;
    let zero_rows: Vec<_> = rows.iter().filter(|row| row.ghi == 0.0).collect();
    assert!(!zero_rows.is_empty());

    for row in zero_rows {
        assert_eq!(
            poa_irradiance_daily(row.ghi, row.latitude, row.tilt, row.day_of_year, 0.7),
            0.0
        );
        assert_eq!(row.ideal_energy, 0.0);
    }

    Ok(())
}
