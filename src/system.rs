//! Validated entry point for a fixed-tilt array at a known site.
//!
//! [`PvSystem`] checks site and rating once at construction; each call then validates the day
//! and delegates to the closed-form functions in [`pv`](crate::pv). Results equal the free
//! functions exactly for the same inputs.

use crate::error::{check_capacity, check_day_of_year, check_latitude, check_tilt};
use crate::pv::daily_estimate;
use crate::types::{DailyEstimate, DailyWeather, ModelConfig};
use crate::Result;
#[cfg(feature = "chrono")]
use chrono::Datelike;

/// A fixed-tilt, south-facing photovoltaic array.
///
/// # Example
/// ```
/// use pv_yield::{DailyWeather, PvSystem};
///
/// let system = PvSystem::new(48.2, 35.0, 9.6).unwrap();
/// let estimate = system.estimate(172, DailyWeather::new(6.4, 24.0).unwrap()).unwrap();
///
/// assert!(estimate.adjusted_energy() > 0.0);
/// assert!(estimate.adjusted_energy() < estimate.ideal_energy());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PvSystem {
    latitude: f64,
    tilt: f64,
    capacity_kwp: f64,
    config: ModelConfig,
}

impl PvSystem {
    /// Creates an array description with the standard model configuration.
    ///
    /// # Arguments
    /// * `latitude` - Site latitude in degrees (-90 to +90)
    /// * `tilt` - Panel tilt from horizontal in degrees (0 to 90)
    /// * `capacity_kwp` - System rating in kWp (≥ 0)
    ///
    /// # Errors
    /// Returns `InvalidLatitude`, `InvalidTilt` or `InvalidCapacity` for out-of-range values.
    pub fn new(latitude: f64, tilt: f64, capacity_kwp: f64) -> Result<Self> {
        check_latitude(latitude)?;
        check_tilt(tilt)?;
        check_capacity(capacity_kwp)?;
        Ok(Self {
            latitude,
            tilt,
            capacity_kwp,
            config: ModelConfig::standard(),
        })
    }

    /// Returns a copy using a different model configuration.
    #[must_use]
    pub const fn with_config(self, config: ModelConfig) -> Self {
        Self { config, ..self }
    }

    /// Gets the site latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the panel tilt in degrees.
    #[must_use]
    pub const fn tilt(&self) -> f64 {
        self.tilt
    }

    /// Gets the system rating in kWp.
    #[must_use]
    pub const fn capacity_kwp(&self) -> f64 {
        self.capacity_kwp
    }

    /// Gets the model configuration.
    #[must_use]
    pub const fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Estimates one day's yield with its intermediate quantities.
    ///
    /// # Errors
    /// Returns `InvalidDayOfYear` if `day_of_year` is outside 1 to 366.
    pub fn estimate(&self, day_of_year: i32, weather: DailyWeather) -> Result<DailyEstimate> {
        check_day_of_year(day_of_year)?;
        Ok(daily_estimate(
            weather.ghi(),
            weather.temp_air(),
            self.latitude,
            self.tilt,
            day_of_year,
            self.capacity_kwp,
            &self.config,
        ))
    }

    /// Estimates one day's yield for a calendar date.
    ///
    /// Uses the date's ordinal, so in leap years every day after February 28th is shifted by one.
    ///
    /// # Errors
    /// This function currently does not fail; the `Result` mirrors [`PvSystem::estimate`].
    ///
    /// # Example
    /// ```
    /// use chrono::NaiveDate;
    /// use pv_yield::{DailyWeather, PvSystem};
    ///
    /// let system = PvSystem::new(40.0, 40.0, 5.0).unwrap();
    /// let weather = DailyWeather::new(7.0, 25.0).unwrap();
    /// let date = NaiveDate::from_ymd_opt(2023, 6, 21).unwrap();
    ///
    /// let by_date = system.estimate_for_date(date, weather).unwrap();
    /// let by_day = system.estimate(172, weather).unwrap();
    /// assert_eq!(by_date, by_day);
    /// ```
    #[cfg(feature = "chrono")]
    #[allow(clippy::needless_pass_by_value)]
    pub fn estimate_for_date<D: Datelike>(
        &self,
        date: D,
        weather: DailyWeather,
    ) -> Result<DailyEstimate> {
        self.estimate(crate::time::day_of_year_from_date_like(date), weather)
    }

    /// Ideal daily yield in kWh, without temperature losses.
    ///
    /// # Errors
    /// Returns `InvalidDayOfYear` if `day_of_year` is outside 1 to 366.
    pub fn ideal_energy(&self, day_of_year: i32, weather: DailyWeather) -> Result<f64> {
        self.estimate(day_of_year, weather)
            .map(|estimate| estimate.ideal_energy())
    }

    /// Temperature-adjusted daily yield in kWh.
    ///
    /// # Errors
    /// Returns `InvalidDayOfYear` if `day_of_year` is outside 1 to 366.
    pub fn temperature_adjusted_energy(
        &self,
        day_of_year: i32,
        weather: DailyWeather,
    ) -> Result<f64> {
        self.estimate(day_of_year, weather)
            .map(|estimate| estimate.adjusted_energy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::pv::{ideal_daily_photovoltaic_energy_output, pv_energy_temp_adjusted_daily};

    #[test]
    fn test_new_validates_site() {
        assert!(PvSystem::new(40.0, 40.0, 5.0).is_ok());
        assert_eq!(
            PvSystem::new(95.0, 40.0, 5.0),
            Err(Error::invalid_latitude(95.0))
        );
        assert_eq!(
            PvSystem::new(40.0, 120.0, 5.0),
            Err(Error::invalid_tilt(120.0))
        );
        assert_eq!(
            PvSystem::new(40.0, 40.0, -1.0),
            Err(Error::invalid_capacity(-1.0))
        );
    }

    #[test]
    fn test_estimate_matches_free_functions() {
        let config = ModelConfig::new(0.65, -0.0037, 46.0).unwrap();
        let system = PvSystem::new(52.5, 30.0, 4.5).unwrap().with_config(config);
        let weather = DailyWeather::new(3.8, 17.5).unwrap();

        let estimate = system.estimate(130, weather).unwrap();
        assert_eq!(
            estimate.ideal_energy(),
            ideal_daily_photovoltaic_energy_output(3.8, 52.5, 30.0, 130, 4.5, &config)
        );
        assert_eq!(
            estimate.adjusted_energy(),
            pv_energy_temp_adjusted_daily(3.8, 17.5, 52.5, 30.0, 130, 4.5, &config)
        );
        assert_eq!(
            estimate.thermal_loss(),
            estimate.ideal_energy() - estimate.adjusted_energy()
        );
    }

    #[test]
    fn test_estimate_rejects_bad_day() {
        let system = PvSystem::new(40.0, 40.0, 5.0).unwrap();
        let weather = DailyWeather::new(7.0, 25.0).unwrap();
        assert_eq!(
            system.estimate(0, weather),
            Err(Error::invalid_day_of_year(0))
        );
        assert!(system.ideal_energy(367, weather).is_err());
        assert!(system.temperature_adjusted_energy(366, weather).is_ok());
    }

    #[test]
    fn test_zero_irradiance_day() {
        let system = PvSystem::new(40.0, 40.0, 5.0).unwrap();
        let estimate = system
            .estimate(10, DailyWeather::new(0.0, -5.0).unwrap())
            .unwrap();
        assert_eq!(estimate.poa_irradiance(), 0.0);
        assert_eq!(estimate.cell_temperature(), -5.0);
        assert_eq!(estimate.ideal_energy(), 0.0);
        assert_eq!(estimate.adjusted_energy(), 0.0);
    }
}
