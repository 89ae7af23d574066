//! Daily plane-of-array (POA) irradiance from daily global horizontal irradiance (GHI).
//!
//! GHI is split into beam and diffuse parts with a constant beam fraction. The beam part is
//! transposed with the geometric factor Rb from [`geometry`](crate::geometry); the diffuse part
//! uses the isotropic sky model. Ground reflection is not modelled.
//!
//! All irradiance values share the caller's unit, typically kWh/m²/day.

use crate::geometry::geometric_factor_rb;
use crate::math::{cos, degrees_to_radians};

/// Daily irradiance on the tilted plane, split by origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrradianceComponents {
    beam: f64,
    diffuse: f64,
}

impl IrradianceComponents {
    /// No irradiance.
    pub const ZERO: Self = Self {
        beam: 0.0,
        diffuse: 0.0,
    };

    /// Transposed beam irradiance on the tilted plane.
    #[must_use]
    pub const fn beam(&self) -> f64 {
        self.beam
    }

    /// Transposed diffuse irradiance on the tilted plane.
    #[must_use]
    pub const fn diffuse(&self) -> f64 {
        self.diffuse
    }

    /// Total plane-of-array irradiance (beam + diffuse).
    #[must_use]
    pub const fn total(&self) -> f64 {
        self.beam + self.diffuse
    }
}

/// Clamps a beam fraction to [0, 1].
#[must_use]
pub fn clamp_beam_fraction(beam_fraction: f64) -> f64 {
    beam_fraction.clamp(0.0, 1.0)
}

/// View factor of the sky dome for a surface tilted by `tilt` degrees, (1 + cos β) / 2.
///
/// # Example
/// ```
/// use pv_yield::irradiance::isotropic_diffuse_factor;
///
/// assert_eq!(isotropic_diffuse_factor(0.0), 1.0);
/// assert!((isotropic_diffuse_factor(90.0) - 0.5).abs() < 1e-12);
/// ```
#[must_use]
pub fn isotropic_diffuse_factor(tilt: f64) -> f64 {
    (1.0 + cos(degrees_to_radians(tilt))) / 2.0
}

/// Computes the transposed beam and diffuse components of daily POA irradiance.
///
/// Returns [`IrradianceComponents::ZERO`] when `ghi` ≤ 0. The beam fraction is clamped to [0, 1].
///
/// # Arguments
/// * `ghi` - Daily global horizontal irradiance (e.g. kWh/m²/day)
/// * `latitude` - Latitude in degrees
/// * `tilt` - Panel tilt from horizontal in degrees
/// * `day_of_year` - Day of the year (1-365)
/// * `beam_fraction` - Share of GHI treated as beam radiation
#[must_use]
pub fn poa_components_daily(
    ghi: f64,
    latitude: f64,
    tilt: f64,
    day_of_year: i32,
    beam_fraction: f64,
) -> IrradianceComponents {
    if ghi <= 0.0 {
        return IrradianceComponents::ZERO;
    }

    let beam_fraction = clamp_beam_fraction(beam_fraction);
    let diffuse_fraction = 1.0 - beam_fraction;

    let horizontal_beam = beam_fraction * ghi;
    let horizontal_diffuse = diffuse_fraction * ghi;

    let rb = geometric_factor_rb(latitude, tilt, day_of_year);

    IrradianceComponents {
        beam: horizontal_beam * rb,
        diffuse: horizontal_diffuse * isotropic_diffuse_factor(tilt),
    }
}

/// Computes daily plane-of-array irradiance for a fixed, south-facing surface.
///
/// Returns 0.0 when `ghi` ≤ 0. The result is not bounded by `ghi`: it exceeds it whenever Rb is
/// large enough, e.g. steep tilts in winter.
///
/// # Arguments
/// * `ghi` - Daily global horizontal irradiance (e.g. kWh/m²/day)
/// * `latitude` - Latitude in degrees
/// * `tilt` - Panel tilt from horizontal in degrees
/// * `day_of_year` - Day of the year (1-365)
/// * `beam_fraction` - Share of GHI treated as beam radiation, clamped to [0, 1] (typically 0.7)
///
/// # Returns
/// Daily POA irradiance in the unit of `ghi`
///
/// # Example
/// ```
/// use pv_yield::irradiance::poa_irradiance_daily;
///
/// // Horizontal surface, all beam: POA equals GHI
/// assert_eq!(poa_irradiance_daily(5.0, 35.0, 0.0, 172, 1.0), 5.0);
///
/// // No sun, no irradiance
/// assert_eq!(poa_irradiance_daily(0.0, 35.0, 35.0, 172, 0.7), 0.0);
/// ```
#[must_use]
pub fn poa_irradiance_daily(
    ghi: f64,
    latitude: f64,
    tilt: f64,
    day_of_year: i32,
    beam_fraction: f64,
) -> f64 {
    poa_components_daily(ghi, latitude, tilt, day_of_year, beam_fraction).total()
}
