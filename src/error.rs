//! Error types for the validated photovoltaic yield API.
//!
//! The closed-form functions in [`geometry`](crate::geometry), [`irradiance`](crate::irradiance)
//! and [`pv`](crate::pv) never fail. Errors only come from constructing validated values
//! ([`PvSystem`](crate::PvSystem), [`DailyWeather`](crate::DailyWeather),
//! [`ModelConfig`](crate::ModelConfig)) and from the calendar helpers in [`time`](crate::time).

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur when validating model inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid panel tilt (must be between 0 and 90 degrees).
    InvalidTilt {
        /// The invalid tilt value provided.
        value: f64,
    },
    /// Invalid day of year (must be between 1 and 366).
    InvalidDayOfYear {
        /// The invalid day index provided.
        value: i32,
    },
    /// Invalid daily irradiance (must be finite and non-negative).
    InvalidIrradiance {
        /// The invalid irradiance value provided.
        value: f64,
    },
    /// Invalid system capacity (must be finite and non-negative).
    InvalidCapacity {
        /// The invalid capacity value provided.
        value: f64,
    },
    /// Invalid ambient air temperature.
    InvalidTemperature {
        /// The invalid temperature value provided.
        value: f64,
    },
    /// Invalid beam fraction (must be between 0 and 1).
    InvalidBeamFraction {
        /// The invalid fraction provided.
        value: f64,
    },
    /// Invalid temperature coefficient of power (must be finite).
    InvalidTemperatureCoefficient {
        /// The invalid coefficient provided.
        value: f64,
    },
    /// Invalid nominal operating cell temperature (must exceed the 20°C reference ambient).
    InvalidNoct {
        /// The invalid NOCT value provided.
        value: f64,
    },
    /// Invalid calendar date.
    InvalidDate {
        /// Description of the date constraint violation.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidTilt { value } => {
                write!(f, "invalid tilt {value}° (must be between 0° and 90°)")
            }
            Self::InvalidDayOfYear { value } => {
                write!(f, "invalid day of year {value} (must be between 1 and 366)")
            }
            Self::InvalidIrradiance { value } => {
                write!(
                    f,
                    "invalid irradiance {value} (must be finite and non-negative)"
                )
            }
            Self::InvalidCapacity { value } => {
                write!(
                    f,
                    "invalid capacity {value} kWp (must be finite and non-negative)"
                )
            }
            Self::InvalidTemperature { value } => {
                write!(
                    f,
                    "invalid temperature {value}°C (must be between -273.15°C and 100°C)"
                )
            }
            Self::InvalidBeamFraction { value } => {
                write!(f, "invalid beam fraction {value} (must be between 0 and 1)")
            }
            Self::InvalidTemperatureCoefficient { value } => {
                write!(
                    f,
                    "invalid temperature coefficient {value} 1/°C (must be finite)"
                )
            }
            Self::InvalidNoct { value } => {
                write!(f, "invalid NOCT {value}°C (must be finite and above 20°C)")
            }
            Self::InvalidDate { message } => {
                write!(f, "invalid date: {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid tilt error.
    #[must_use]
    pub const fn invalid_tilt(value: f64) -> Self {
        Self::InvalidTilt { value }
    }

    /// Creates an invalid day-of-year error.
    #[must_use]
    pub const fn invalid_day_of_year(value: i32) -> Self {
        Self::InvalidDayOfYear { value }
    }

    /// Creates an invalid irradiance error.
    #[must_use]
    pub const fn invalid_irradiance(value: f64) -> Self {
        Self::InvalidIrradiance { value }
    }

    /// Creates an invalid capacity error.
    #[must_use]
    pub const fn invalid_capacity(value: f64) -> Self {
        Self::InvalidCapacity { value }
    }

    /// Creates an invalid temperature error.
    #[must_use]
    pub const fn invalid_temperature(value: f64) -> Self {
        Self::InvalidTemperature { value }
    }

    /// Creates an invalid beam fraction error.
    #[must_use]
    pub const fn invalid_beam_fraction(value: f64) -> Self {
        Self::InvalidBeamFraction { value }
    }

    /// Creates an invalid temperature coefficient error.
    #[must_use]
    pub const fn invalid_temperature_coefficient(value: f64) -> Self {
        Self::InvalidTemperatureCoefficient { value }
    }

    /// Creates an invalid NOCT error.
    #[must_use]
    pub const fn invalid_noct(value: f64) -> Self {
        Self::InvalidNoct { value }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub const fn invalid_date(message: &'static str) -> Self {
        Self::InvalidDate { message }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates panel tilt is within the valid range (0 to 90 degrees).
///
/// # Errors
/// Returns `InvalidTilt` if tilt is outside 0 to 90 degrees.
pub fn check_tilt(tilt: f64) -> Result<()> {
    if !(0.0..=90.0).contains(&tilt) {
        return Err(Error::invalid_tilt(tilt));
    }
    Ok(())
}

/// Validates a 1-based day-of-year index.
///
/// # Errors
/// Returns `InvalidDayOfYear` if the index is outside 1 to 366.
pub fn check_day_of_year(day_of_year: i32) -> Result<()> {
    if !(1..=366).contains(&day_of_year) {
        return Err(Error::invalid_day_of_year(day_of_year));
    }
    Ok(())
}

/// Validates daily irradiance is finite and non-negative.
///
/// # Errors
/// Returns `InvalidIrradiance` for negative, infinite or NaN values.
pub fn check_irradiance(irradiance: f64) -> Result<()> {
    if !irradiance.is_finite() || irradiance < 0.0 {
        return Err(Error::invalid_irradiance(irradiance));
    }
    Ok(())
}

/// Validates system capacity is finite and non-negative.
///
/// # Errors
/// Returns `InvalidCapacity` for negative, infinite or NaN values.
pub fn check_capacity(capacity_kwp: f64) -> Result<()> {
    if !capacity_kwp.is_finite() || capacity_kwp < 0.0 {
        return Err(Error::invalid_capacity(capacity_kwp));
    }
    Ok(())
}

/// Validates ambient temperature is above absolute zero and physically plausible.
///
/// # Errors
/// Returns `InvalidTemperature` if temperature is outside -273.15 to 100°C.
pub fn check_temperature(temperature: f64) -> Result<()> {
    if !(-273.15..=100.0).contains(&temperature) {
        return Err(Error::invalid_temperature(temperature));
    }
    Ok(())
}

/// Validates a beam fraction lies within 0 to 1.
///
/// # Errors
/// Returns `InvalidBeamFraction` if the fraction is outside 0 to 1.
pub fn check_beam_fraction(beam_fraction: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&beam_fraction) {
        return Err(Error::invalid_beam_fraction(beam_fraction));
    }
    Ok(())
}

/// Validates the temperature coefficient of power is finite.
///
/// # Errors
/// Returns `InvalidTemperatureCoefficient` for infinite or NaN values.
pub fn check_gamma(gamma: f64) -> Result<()> {
    if !gamma.is_finite() {
        return Err(Error::invalid_temperature_coefficient(gamma));
    }
    Ok(())
}

/// Validates NOCT is finite and above the 20°C reference ambient it is defined against.
///
/// # Errors
/// Returns `InvalidNoct` if NOCT is not finite or not above 20°C.
pub fn check_noct(noct: f64) -> Result<()> {
    if !noct.is_finite() || noct <= 20.0 {
        return Err(Error::invalid_noct(noct));
    }
    Ok(())
}
