//! Daily photovoltaic energy yield.
//!
//! A system's rating in kWp is its output at 1000 W/m² and 25°C cell temperature, so daily POA
//! irradiance in kWh/m² multiplied by the rating gives the ideal daily yield in kWh (POA acts as
//! equivalent peak-sun hours). The temperature-adjusted yield derates this linearly with the cell
//! temperature estimated by the NOCT model.
//!
//! ## Cell temperature
//!
//! The NOCT model needs an irradiance in W/m². Daily POA in kWh/m² is converted with
//! `POA · 1000 / 6`, i.e. spread over six equivalent peak-sun hours. This is an empirical
//! approximation kept for compatibility, not an integral over the day.

#![allow(clippy::suboptimal_flops)]

use crate::irradiance::poa_irradiance_daily;
use crate::types::{DailyEstimate, ModelConfig};

/// Cell temperature at which the capacity rating applies, in °C.
pub const REFERENCE_CELL_TEMPERATURE: f64 = 25.0;

/// Ambient temperature of the NOCT test conditions, in °C.
pub const NOCT_AMBIENT_TEMPERATURE: f64 = 20.0;

/// Irradiance of the NOCT test conditions, in W/m².
pub const NOCT_IRRADIANCE: f64 = 800.0;

/// Equivalent hours over which daily POA is spread for the cell temperature estimate.
pub const PEAK_SUN_HOURS: f64 = 6.0;

/// Wh per kWh.
const WH_PER_KWH: f64 = 1000.0;

/// Converts daily POA irradiance (kWh/m²/day) to the average irradiance (W/m²) used by the
/// NOCT cell temperature model.
///
/// # Example
/// ```
/// use pv_yield::pv::average_poa_irradiance;
///
/// assert_eq!(average_poa_irradiance(6.0), 1000.0);
/// ```
#[must_use]
pub const fn average_poa_irradiance(poa_daily: f64) -> f64 {
    poa_daily * WH_PER_KWH / PEAK_SUN_HOURS
}

/// Estimates cell temperature with the NOCT model.
///
/// T_cell = T_air + (NOCT − 20) / 800 · G
///
/// # Arguments
/// * `temp_air` - Ambient air temperature in °C
/// * `irradiance` - Plane-of-array irradiance in W/m²
/// * `noct` - Nominal operating cell temperature in °C
#[must_use]
pub const fn cell_temperature(temp_air: f64, irradiance: f64, noct: f64) -> f64 {
    temp_air + ((noct - NOCT_AMBIENT_TEMPERATURE) / NOCT_IRRADIANCE) * irradiance
}

/// Linear temperature correction factor, 1 + γ · (T_cell − 25), floored at 0.
///
/// # Example
/// ```
/// use pv_yield::pv::temperature_correction_factor;
///
/// assert_eq!(temperature_correction_factor(25.0, -0.004), 1.0);
/// assert!((temperature_correction_factor(50.0, -0.004) - 0.9).abs() < 1e-12);
/// assert_eq!(temperature_correction_factor(400.0, -0.004), 0.0);
/// ```
#[must_use]
pub fn temperature_correction_factor(cell_temperature: f64, gamma: f64) -> f64 {
    let factor = 1.0 + gamma * (cell_temperature - REFERENCE_CELL_TEMPERATURE);
    factor.max(0.0)
}

/// Computes the ideal daily energy yield, without temperature losses.
///
/// No clamping is applied: negative capacity propagates linearly.
///
/// # Arguments
/// * `ghi` - Daily global horizontal irradiance in kWh/m²/day
/// * `latitude` - Latitude in degrees
/// * `tilt` - Panel tilt from horizontal in degrees
/// * `day_of_year` - Day of the year (1-365)
/// * `capacity_kwp` - System rating in kWp
/// * `config` - Model parameters (only the beam fraction is used here)
///
/// # Returns
/// Ideal daily energy yield in kWh
///
/// # Example
/// ```
/// use pv_yield::{ModelConfig, irradiance::poa_irradiance_daily, pv};
///
/// let config = ModelConfig::standard();
/// let energy = pv::ideal_daily_photovoltaic_energy_output(7.0, 40.0, 40.0, 172, 5.0, &config);
/// assert_eq!(energy, poa_irradiance_daily(7.0, 40.0, 40.0, 172, 0.7) * 5.0);
/// ```
#[must_use]
pub fn ideal_daily_photovoltaic_energy_output(
    ghi: f64,
    latitude: f64,
    tilt: f64,
    day_of_year: i32,
    capacity_kwp: f64,
    config: &ModelConfig,
) -> f64 {
    let poa = poa_irradiance_daily(ghi, latitude, tilt, day_of_year, config.beam_fraction());
    poa * capacity_kwp
}

/// Computes the daily energy yield derated for cell temperature.
///
/// Cell temperature comes from the NOCT model driven by the average POA irradiance (see the
/// module documentation for the six-hour approximation). The correction factor is floored at 0,
/// so the result is never negative for non-negative capacity.
///
/// # Arguments
/// * `ghi` - Daily global horizontal irradiance in kWh/m²/day
/// * `temp_air` - Daily mean ambient air temperature in °C
/// * `latitude` - Latitude in degrees
/// * `tilt` - Panel tilt from horizontal in degrees
/// * `day_of_year` - Day of the year (1-365)
/// * `capacity_kwp` - System rating in kWp
/// * `config` - Model parameters
///
/// # Returns
/// Temperature-adjusted daily energy yield in kWh
///
/// # Example
/// ```
/// use pv_yield::{ModelConfig, pv};
///
/// let config = ModelConfig::standard();
/// let ideal = pv::ideal_daily_photovoltaic_energy_output(5.0, 35.0, 35.0, 172, 10.0, &config);
/// let adjusted = pv::pv_energy_temp_adjusted_daily(5.0, 30.0, 35.0, 35.0, 172, 10.0, &config);
/// assert!(adjusted < ideal);
/// ```
#[must_use]
pub fn pv_energy_temp_adjusted_daily(
    ghi: f64,
    temp_air: f64,
    latitude: f64,
    tilt: f64,
    day_of_year: i32,
    capacity_kwp: f64,
    config: &ModelConfig,
) -> f64 {
    daily_estimate(
        ghi,
        temp_air,
        latitude,
        tilt,
        day_of_year,
        capacity_kwp,
        config,
    )
    .adjusted_energy
}

/// Full breakdown of the temperature-adjusted calculation.
pub(crate) fn daily_estimate(
    ghi: f64,
    temp_air: f64,
    latitude: f64,
    tilt: f64,
    day_of_year: i32,
    capacity_kwp: f64,
    config: &ModelConfig,
) -> DailyEstimate {
    let poa = poa_irradiance_daily(ghi, latitude, tilt, day_of_year, config.beam_fraction());

    let t_cell = cell_temperature(temp_air, average_poa_irradiance(poa), config.noct());
    let ft = temperature_correction_factor(t_cell, config.gamma());

    let ideal_energy = poa * capacity_kwp;

    DailyEstimate {
        poa_irradiance: poa,
        cell_temperature: t_cell,
        correction_factor: ft,
        ideal_energy,
        adjusted_energy: ideal_energy * ft,
    }
}
