//! Regression tests covering polar day/night and other degenerate geometry.

use pv_yield::geometry::{
    DayType, day_length_hours, day_type, has_degenerate_horizontal_beam, is_sunset_angle_clamped,
};
use pv_yield::{
    ModelConfig, declination_angle, geometric_factor_rb, poa_irradiance_daily,
    pv_energy_temp_adjusted_daily, sunset_hour_angle,
};
use std::f64::consts::PI;

#[test]
fn sunset_hour_angle_never_leaves_domain() {
    for lat_tenths in -900..=900 {
        let latitude = f64::from(lat_tenths) / 10.0;
        for day in (1..=365).step_by(7) {
            let omega_s = sunset_hour_angle(latitude, declination_angle(day));
            assert!(
                (0.0..=PI).contains(&omega_s),
                "Ωs {omega_s} out of range at lat {latitude}, day {day}"
            );
        }
    }
}

#[test]
fn midsummer_high_arctic_has_continuous_daylight() {
    let omega_s = sunset_hour_angle(80.0, 23.45);
    assert!((omega_s - PI).abs() < 1e-12);
    assert!(is_sunset_angle_clamped(80.0, 23.45));
    assert_eq!(day_type(80.0, 23.45), DayType::PolarDay);
    assert_eq!(day_length_hours(80.0, 172), 24.0);
}

#[test]
fn polar_night_rb_is_zero() {
    assert!(has_degenerate_horizontal_beam(85.0, 355));
    for tilt in [0.0, 15.0, 45.0, 90.0] {
        assert_eq!(geometric_factor_rb(85.0, tilt, 355), 0.0);
    }
    // Southern hemisphere mirror
    assert_eq!(geometric_factor_rb(-85.0, 45.0, 172), 0.0);
}

#[test]
fn rb_is_finite_everywhere() {
    for lat in (-89..=89).step_by(4) {
        for tilt in (0..=90).step_by(15) {
            for day in (1..=365).step_by(13) {
                let rb = geometric_factor_rb(f64::from(lat), f64::from(tilt), day);
                assert!(
                    rb.is_finite(),
                    "Rb not finite at lat {lat}, tilt {tilt}, day {day}"
                );
            }
        }
    }
}

#[test]
fn poles_do_not_produce_nan() {
    let config = ModelConfig::standard();
    for latitude in [90.0, -90.0] {
        for day in [1, 80, 172, 266, 355] {
            let poa = poa_irradiance_daily(3.0, latitude, 30.0, day, 0.7);
            assert!(!poa.is_nan(), "POA is NaN at lat {latitude}, day {day}");

            let energy = pv_energy_temp_adjusted_daily(3.0, 0.0, latitude, 30.0, day, 2.0, &config);
            assert!(!energy.is_nan(), "energy is NaN at lat {latitude}, day {day}");
        }
    }
}

#[test]
fn polar_night_yield_comes_from_diffuse_only() {
    let config = ModelConfig::standard();
    let ghi = 0.3;
    let energy = pv_yield::ideal_daily_photovoltaic_energy_output(ghi, 85.0, 40.0, 355, 1.0, &config);

    let diffuse_only = 0.3 * ghi * (1.0 + 40.0_f64.to_radians().cos()) / 2.0;
    assert!((energy - diffuse_only).abs() < 1e-12, "{energy} vs {diffuse_only}");
}

#[test]
fn extreme_heat_never_turns_output_negative() {
    let steep = ModelConfig::new(0.7, -0.05, 60.0).unwrap();
    for temp_air in [40.0, 60.0, 90.0] {
        let energy = pv_energy_temp_adjusted_daily(8.0, temp_air, 25.0, 25.0, 172, 10.0, &steep);
        assert!(energy >= 0.0, "negative energy {energy} at {temp_air}°C");
    }
}
