//! # Daily PV Yield
//!
//! Daily energy yield estimation for fixed-tilt, south-facing photovoltaic arrays.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! From daily global horizontal irradiance (GHI), ambient temperature, site latitude, panel tilt,
//! day of year and system rating, the library computes:
//! - **Solar geometry**: declination, sunset hour angle and the beam transposition factor Rb
//! - **Irradiance transposition**: beam/diffuse split and plane-of-array (POA) irradiance with an
//!   isotropic sky
//! - **Energy**: ideal yield from the kWp rating, and yield derated for cell temperature (NOCT model)
//!
//! The closed-form functions never fail: polar day/night is absorbed by clamping, and
//! non-physical inputs propagate arithmetically. [`PvSystem`] and [`DailyWeather`] add a
//! validated layer on top that rejects out-of-range inputs with an [`Error`].
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Enable `Datelike` based day-of-year helpers
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! pv-yield = "0.1"
//!
//! # Minimal no_std (pure numeric API)
//! pv-yield = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## References
//!
//! - Duffie, J. A.; Beckman, W. A. (2013). Solar Engineering of Thermal Processes, 4th ed.
//!   Wiley. Sections 1.6-1.8 (declination, sunset hour angle, Rb) and 2.15-2.19 (isotropic sky).
//! - Ross, R. G. (1980). Flat-plate photovoltaic array design optimization. 14th IEEE Photovoltaic
//!   Specialists Conference, 1126-1132 (NOCT cell temperature model).
//!
//! ## Quick Start
//!
//! ### Free functions
//! ```rust
//! use pv_yield::{ModelConfig, pv};
//!
//! // 10 kWp at 35°N tilted 35°, June 21st, 5 kWh/m² of GHI at 28°C
//! let config = ModelConfig::standard();
//! let ideal = pv::ideal_daily_photovoltaic_energy_output(5.0, 35.0, 35.0, 172, 10.0, &config);
//! let adjusted = pv::pv_energy_temp_adjusted_daily(5.0, 28.0, 35.0, 35.0, 172, 10.0, &config);
//!
//! println!("Ideal yield: {ideal:.2} kWh");
//! println!("Temperature-adjusted yield: {adjusted:.2} kWh");
//! ```
//!
//! ### Validated system
//! ```rust
//! use pv_yield::{DailyWeather, PvSystem};
//!
//! let system = PvSystem::new(48.21, 30.0, 6.0)?;
//! let estimate = system.estimate(200, DailyWeather::new(6.1, 23.5)?)?;
//!
//! println!("POA: {:.2} kWh/m²", estimate.poa_irradiance());
//! println!("Cell temperature: {:.1}°C", estimate.cell_temperature());
//! println!("Yield: {:.2} kWh", estimate.adjusted_energy());
//! # Ok::<(), pv_yield::Error>(())
//! ```
//!
//! ## Conventions
//!
//! - Angles are degrees at the interface; radians are internal only
//! - Surfaces face south (azimuth 180°)
//! - Irradiance is daily energy per area (kWh/m²/day); energy is kWh
//! - Day of year is a 1-based integer index

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of closed-form results in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::geometry::{DayType, declination_angle, geometric_factor_rb, sunset_hour_angle};
pub use crate::irradiance::{IrradianceComponents, poa_irradiance_daily};
pub use crate::pv::{ideal_daily_photovoltaic_energy_output, pv_energy_temp_adjusted_daily};
pub use crate::system::PvSystem;
pub use crate::types::{DailyEstimate, DailyWeather, ModelConfig};

// Model modules
pub mod geometry;
pub mod irradiance;
pub mod pv;

// Core modules
pub mod error;
pub mod system;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;
