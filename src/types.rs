//! Core data types for daily yield calculations.

use crate::Result;
use crate::error::{check_beam_fraction, check_gamma, check_irradiance, check_noct, check_temperature};

/// Tunable parameters of the daily yield model.
///
/// Groups the beam/diffuse split and the two temperature-derating parameters. Use
/// [`ModelConfig::standard`] (or `Default`) for the usual values.
///
/// # Example
/// ```
/// # use pv_yield::types::ModelConfig;
/// let standard = ModelConfig::standard();
/// assert_eq!(standard.beam_fraction(), 0.7);
/// assert_eq!(standard.gamma(), -0.004);
/// assert_eq!(standard.noct(), 45.0);
///
/// // Thin-film modules lose less power with temperature
/// let thin_film = standard.with_gamma(-0.0025).unwrap();
/// assert_eq!(thin_film.gamma(), -0.0025);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelConfig {
    /// Share of GHI treated as beam radiation (0 to 1)
    beam_fraction: f64,
    /// Temperature coefficient of power in 1/°C
    gamma: f64,
    /// Nominal operating cell temperature in °C
    noct: f64,
}

impl ModelConfig {
    /// Default share of GHI treated as beam radiation.
    pub const DEFAULT_BEAM_FRACTION: f64 = 0.7;
    /// Default temperature coefficient of power, typical of crystalline silicon.
    pub const DEFAULT_GAMMA: f64 = -0.004;
    /// Default nominal operating cell temperature.
    pub const DEFAULT_NOCT: f64 = 45.0;

    /// Creates a model configuration.
    ///
    /// # Errors
    /// Returns `InvalidBeamFraction`, `InvalidTemperatureCoefficient` or `InvalidNoct` for
    /// out-of-range values.
    ///
    /// # Example
    /// ```
    /// # use pv_yield::types::ModelConfig;
    /// let config = ModelConfig::new(0.6, -0.0035, 47.0).unwrap();
    /// assert_eq!(config.noct(), 47.0);
    ///
    /// assert!(ModelConfig::new(1.2, -0.004, 45.0).is_err());
    /// ```
    pub fn new(beam_fraction: f64, gamma: f64, noct: f64) -> Result<Self> {
        check_beam_fraction(beam_fraction)?;
        check_gamma(gamma)?;
        check_noct(noct)?;
        Ok(Self {
            beam_fraction,
            gamma,
            noct,
        })
    }

    /// Creates the standard configuration: beam fraction 0.7, γ = −0.004/°C, NOCT 45°C.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            beam_fraction: Self::DEFAULT_BEAM_FRACTION,
            gamma: Self::DEFAULT_GAMMA,
            noct: Self::DEFAULT_NOCT,
        }
    }

    /// Returns a copy with a different beam fraction.
    ///
    /// # Errors
    /// Returns `InvalidBeamFraction` if the fraction is outside 0 to 1.
    pub fn with_beam_fraction(self, beam_fraction: f64) -> Result<Self> {
        Self::new(beam_fraction, self.gamma, self.noct)
    }

    /// Returns a copy with a different temperature coefficient.
    ///
    /// # Errors
    /// Returns `InvalidTemperatureCoefficient` if gamma is not finite.
    pub fn with_gamma(self, gamma: f64) -> Result<Self> {
        Self::new(self.beam_fraction, gamma, self.noct)
    }

    /// Returns a copy with a different NOCT.
    ///
    /// # Errors
    /// Returns `InvalidNoct` if NOCT is not finite or not above 20°C.
    pub fn with_noct(self, noct: f64) -> Result<Self> {
        Self::new(self.beam_fraction, self.gamma, noct)
    }

    /// Gets the share of GHI treated as beam radiation.
    #[must_use]
    pub const fn beam_fraction(&self) -> f64 {
        self.beam_fraction
    }

    /// Gets the temperature coefficient of power in 1/°C.
    #[must_use]
    pub const fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Gets the nominal operating cell temperature in °C.
    #[must_use]
    pub const fn noct(&self) -> f64 {
        self.noct
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Daily-aggregated weather for one site and day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyWeather {
    /// Global horizontal irradiance in kWh/m²/day
    ghi: f64,
    /// Ambient air temperature in °C
    temp_air: f64,
}

impl DailyWeather {
    /// Creates a daily weather record.
    ///
    /// # Errors
    /// Returns `InvalidIrradiance` for negative or non-finite GHI and `InvalidTemperature` for
    /// temperatures outside -273.15 to 100°C.
    ///
    /// # Example
    /// ```
    /// # use pv_yield::types::DailyWeather;
    /// let weather = DailyWeather::new(5.8, 22.0).unwrap();
    /// assert_eq!(weather.ghi(), 5.8);
    ///
    /// assert!(DailyWeather::new(-1.0, 22.0).is_err());
    /// ```
    pub fn new(ghi: f64, temp_air: f64) -> Result<Self> {
        check_irradiance(ghi)?;
        check_temperature(temp_air)?;
        Ok(Self { ghi, temp_air })
    }

    /// Gets the global horizontal irradiance.
    #[must_use]
    pub const fn ghi(&self) -> f64 {
        self.ghi
    }

    /// Gets the ambient air temperature in °C.
    #[must_use]
    pub const fn temp_air(&self) -> f64 {
        self.temp_air
    }
}

/// Breakdown of one day's yield estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyEstimate {
    pub(crate) poa_irradiance: f64,
    pub(crate) cell_temperature: f64,
    pub(crate) correction_factor: f64,
    pub(crate) ideal_energy: f64,
    pub(crate) adjusted_energy: f64,
}

impl DailyEstimate {
    /// Plane-of-array irradiance in the unit of the input GHI.
    #[must_use]
    pub const fn poa_irradiance(&self) -> f64 {
        self.poa_irradiance
    }

    /// Estimated cell temperature in °C.
    #[must_use]
    pub const fn cell_temperature(&self) -> f64 {
        self.cell_temperature
    }

    /// Temperature correction factor applied to the ideal yield (≥ 0).
    #[must_use]
    pub const fn correction_factor(&self) -> f64 {
        self.correction_factor
    }

    /// Yield without temperature losses in kWh.
    #[must_use]
    pub const fn ideal_energy(&self) -> f64 {
        self.ideal_energy
    }

    /// Temperature-adjusted yield in kWh.
    #[must_use]
    pub const fn adjusted_energy(&self) -> f64 {
        self.adjusted_energy
    }

    /// Energy lost to cell heating in kWh (negative when the cells run below 25°C).
    #[must_use]
    pub const fn thermal_loss(&self) -> f64 {
        self.ideal_energy - self.adjusted_energy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_model_config_defaults() {
        let config = ModelConfig::default();
        assert_eq!(config, ModelConfig::standard());
        assert_eq!(config.beam_fraction(), 0.7);
        assert_eq!(config.gamma(), -0.004);
        assert_eq!(config.noct(), 45.0);
    }

    #[test]
    fn test_model_config_validation() {
        assert!(ModelConfig::new(0.0, 0.0, 20.5).is_ok());
        assert!(ModelConfig::new(1.0, -0.005, 60.0).is_ok());

        assert_eq!(
            ModelConfig::new(-0.1, -0.004, 45.0),
            Err(Error::invalid_beam_fraction(-0.1))
        );
        assert!(matches!(
            ModelConfig::new(0.7, f64::NAN, 45.0),
            Err(Error::InvalidTemperatureCoefficient { .. })
        ));
        assert_eq!(
            ModelConfig::new(0.7, -0.004, 15.0),
            Err(Error::invalid_noct(15.0))
        );
    }

    #[test]
    fn test_model_config_builders_keep_other_fields() {
        let config = ModelConfig::standard()
            .with_beam_fraction(0.55)
            .and_then(|c| c.with_noct(48.0))
            .unwrap();
        assert_eq!(config.beam_fraction(), 0.55);
        assert_eq!(config.gamma(), ModelConfig::DEFAULT_GAMMA);
        assert_eq!(config.noct(), 48.0);

        assert!(ModelConfig::standard().with_gamma(f64::INFINITY).is_err());
    }

    #[test]
    fn test_daily_weather_validation() {
        let weather = DailyWeather::new(0.0, -30.0).unwrap();
        assert_eq!(weather.ghi(), 0.0);
        assert_eq!(weather.temp_air(), -30.0);

        assert!(DailyWeather::new(f64::NAN, 10.0).is_err());
        assert!(DailyWeather::new(4.0, 120.0).is_err());
    }
}
