//! Daily solar geometry for fixed, south-facing surfaces.
//!
//! Provides the quantities needed to transpose daily beam irradiance onto a tilted plane:
//! - the solar declination δ (Cooper's equation),
//! - the sunset hour angle Ωs (half the angular day length),
//! - the geometric factor Rb, the ratio of daily extraterrestrial beam irradiation on the tilted
//!   surface to that on a horizontal surface.
//!
//! Angles are degrees at the interface and radians internally. Surfaces face the equator from the
//! northern hemisphere (azimuth 180°) with no horizon shading.
//!
//! ## References
//!
//! - Cooper, P. I. (1969). The absorption of radiation in solar stills. Solar Energy, 12(3), 333-346.
//! - Duffie, J. A.; Beckman, W. A. (2013). Solar Engineering of Thermal Processes, 4th ed., §1.6-1.8.

#![allow(clippy::suboptimal_flops)]

use crate::math::{PI, acos, clamp_unit, cos, degrees_to_radians, sin, tan};

/// Amplitude of the declination oscillation in degrees.
pub const MAX_DECLINATION: f64 = 23.45;

/// Day-number offset in Cooper's equation (day 284 + n puts δ = 0 at the spring equinox).
const COOPER_DAY_OFFSET: f64 = 284.0;

/// Length of the year assumed by the declination formula.
const DAYS_PER_YEAR: f64 = 365.0;

/// Classification of a day by whether the sun rises and sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayType {
    /// The sun rises and sets; Ωs lies strictly between 0 and π.
    RegularDay,
    /// The sun stays above the horizon all day; Ωs is clamped to π.
    PolarDay,
    /// The sun stays below the horizon all day; Ωs is clamped to 0.
    PolarNight,
}

/// Calculates the solar declination angle for a given day of the year.
///
/// δ = 23.45° · sin(360° · (284 + n) / 365)
///
/// Any integer is accepted; values outside 1-365 extrapolate the periodic formula.
///
/// # Arguments
/// * `day_of_year` - Day of the year (1 for January 1st, 365 for December 31st)
///
/// # Returns
/// Declination angle in degrees, within ±23.45°
///
/// # Example
/// ```
/// use pv_yield::geometry::declination_angle;
///
/// // Close to the June solstice
/// let delta = declination_angle(172);
/// assert!((delta - 23.45).abs() < 0.01);
/// ```
#[must_use]
pub fn declination_angle(day_of_year: i32) -> f64 {
    let fraction_of_year = (COOPER_DAY_OFFSET + f64::from(day_of_year)) / DAYS_PER_YEAR;
    let inner = degrees_to_radians(360.0 * fraction_of_year);
    MAX_DECLINATION * sin(inner)
}

/// Raw cosine of the sunset hour angle, −tan φ · tan δ, before clamping.
fn sunset_cosine(latitude: f64, declination: f64) -> f64 {
    -tan(degrees_to_radians(latitude)) * tan(degrees_to_radians(declination))
}

/// Calculates the sunset hour angle Ωs.
///
/// cos Ωs = −tan φ · tan δ. The cosine is clamped to [-1, 1] first, so polar latitudes yield
/// π (sun never sets) or 0 (sun never rises) instead of NaN.
///
/// # Arguments
/// * `latitude` - Latitude in degrees
/// * `declination` - Declination angle in degrees
///
/// # Returns
/// Sunset hour angle in radians, within [0, π]
///
/// # Example
/// ```
/// use pv_yield::geometry::sunset_hour_angle;
///
/// // Equinox: twelve hours of daylight everywhere
/// let omega_s = sunset_hour_angle(48.2, 0.0);
/// assert!((omega_s - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
///
/// // Midsummer above the arctic circle: continuous daylight
/// assert_eq!(sunset_hour_angle(80.0, 23.45), std::f64::consts::PI);
/// ```
#[must_use]
pub fn sunset_hour_angle(latitude: f64, declination: f64) -> f64 {
    acos(clamp_unit(sunset_cosine(latitude, declination)))
}

/// Checks whether the sunset-hour-angle cosine had to be clamped (polar day or polar night).
#[must_use]
pub fn is_sunset_angle_clamped(latitude: f64, declination: f64) -> bool {
    let cos_omega_s = sunset_cosine(latitude, declination);
    !(-1.0..=1.0).contains(&cos_omega_s)
}

/// Classifies the day at a latitude by whether the sun rises and sets.
///
/// # Example
/// ```
/// use pv_yield::geometry::{DayType, day_type, declination_angle};
///
/// assert_eq!(day_type(85.0, declination_angle(355)), DayType::PolarNight);
/// assert_eq!(day_type(85.0, declination_angle(172)), DayType::PolarDay);
/// assert_eq!(day_type(40.0, declination_angle(172)), DayType::RegularDay);
/// ```
#[must_use]
pub fn day_type(latitude: f64, declination: f64) -> DayType {
    let cos_omega_s = sunset_cosine(latitude, declination);
    if cos_omega_s < -1.0 {
        DayType::PolarDay
    } else if cos_omega_s > 1.0 {
        DayType::PolarNight
    } else {
        DayType::RegularDay
    }
}

/// Day length in hours, 24 · Ωs / π.
///
/// Returns 24 during polar day and 0 during polar night.
#[must_use]
pub fn day_length_hours(latitude: f64, day_of_year: i32) -> f64 {
    let omega_s = sunset_hour_angle(latitude, declination_angle(day_of_year));
    24.0 * omega_s / PI
}

/// Daily-integrated beam factor for a surface whose normal sits at `latitude` degrees.
///
/// cos φ · cos δ · sin Ωs + Ωs · sin φ · sin δ
///
/// A south-facing surface tilted by β behaves like a horizontal surface at latitude φ − β.
fn beam_factor(latitude_rad: f64, declination_rad: f64, sunset_hour_angle: f64) -> f64 {
    cos(latitude_rad) * cos(declination_rad) * sin(sunset_hour_angle)
        + sunset_hour_angle * sin(latitude_rad) * sin(declination_rad)
}

/// Horizontal-surface beam factor: the denominator of Rb.
///
/// Proportional to daily extraterrestrial beam irradiation on a horizontal plane.
///
/// # Arguments
/// * `latitude` - Latitude in degrees
/// * `declination` - Declination angle in degrees
/// * `sunset_hour_angle` - Sunset hour angle in radians
#[must_use]
pub fn horizontal_beam_factor(latitude: f64, declination: f64, sunset_hour_angle: f64) -> f64 {
    beam_factor(
        degrees_to_radians(latitude),
        degrees_to_radians(declination),
        sunset_hour_angle,
    )
}

/// Checks whether the horizontal beam factor is non-positive, in which case Rb is defined as 0.
///
/// # Example
/// ```
/// use pv_yield::geometry::has_degenerate_horizontal_beam;
///
/// assert!(has_degenerate_horizontal_beam(85.0, 355)); // polar night
/// assert!(!has_degenerate_horizontal_beam(40.0, 172));
/// ```
#[must_use]
pub fn has_degenerate_horizontal_beam(latitude: f64, day_of_year: i32) -> bool {
    let declination = declination_angle(day_of_year);
    let omega_s = sunset_hour_angle(latitude, declination);
    horizontal_beam_factor(latitude, declination, omega_s) <= 0.0
}

/// Calculates the geometric factor Rb for a south-facing surface.
///
/// Rb is the ratio of daily beam irradiation on the tilted surface to that on a horizontal surface,
/// integrated from sunrise to sunset:
///
/// ```text
///      cos(φ−β)·cos δ·sin Ωs + Ωs·sin(φ−β)·sin δ
/// Rb = -----------------------------------------
///          cos φ·cos δ·sin Ωs + Ωs·sin φ·sin δ
/// ```
///
/// Returns 0.0 when the denominator is ≤ 0 (polar night, or no horizontal beam under the model).
/// Values above 1 are expected for steep tilts at high latitudes in winter.
///
/// # Arguments
/// * `latitude` - Latitude in degrees
/// * `tilt` - Panel tilt from horizontal in degrees
/// * `day_of_year` - Day of the year (1-365)
///
/// # Returns
/// Dimensionless geometric factor
///
/// # Example
/// ```
/// use pv_yield::geometry::geometric_factor_rb;
///
/// // A horizontal surface sees exactly the horizontal beam
/// assert_eq!(geometric_factor_rb(45.0, 0.0, 100), 1.0);
///
/// // Steep tilt in mid-latitude winter collects more beam than the horizontal
/// assert!(geometric_factor_rb(50.0, 60.0, 355) > 1.0);
///
/// // Polar night
/// assert_eq!(geometric_factor_rb(85.0, 30.0, 355), 0.0);
/// ```
#[must_use]
pub fn geometric_factor_rb(latitude: f64, tilt: f64, day_of_year: i32) -> f64 {
    let declination = declination_angle(day_of_year);
    let omega_s = sunset_hour_angle(latitude, declination);

    let latitude_rad = degrees_to_radians(latitude);
    let declination_rad = degrees_to_radians(declination);
    let tilt_rad = degrees_to_radians(tilt);

    let numerator = beam_factor(latitude_rad - tilt_rad, declination_rad, omega_s);
    let denominator = beam_factor(latitude_rad, declination_rad, omega_s);

    if denominator <= 0.0 {
        return 0.0;
    }

    numerator / denominator
}
