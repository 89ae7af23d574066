//! Monthly yield table for a rooftop array from representative daily weather.

use chrono::NaiveDate;
use pv_yield::geometry::day_length_hours;
use pv_yield::{DailyWeather, ModelConfig, PvSystem};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 6 kWp on a 30° roof in Vienna
    let system = PvSystem::new(48.21, 30.0, 6.0)?;
    let thin_film = system.with_config(ModelConfig::standard().with_gamma(-0.0025)?);

    // Mean daily GHI (kWh/m²/day) and air temperature (°C) per month
    let climate = [
        (1.0, 0.5),
        (1.9, 2.0),
        (3.1, 6.5),
        (4.4, 11.5),
        (5.4, 16.5),
        (5.9, 19.5),
        (5.9, 21.5),
        (5.1, 21.0),
        (3.7, 16.5),
        (2.3, 11.0),
        (1.2, 5.5),
        (0.8, 1.5),
    ];

    println!("Month  Day length  POA    T_cell  Ideal    c-Si     thin-film");
    let mut annual = 0.0;
    for (month, &(ghi, temp_air)) in (1..=12).zip(climate.iter()) {
        // Mid-month day as the representative day
        let date = NaiveDate::from_ymd_opt(2023, month, 15).ok_or("invalid date")?;
        let weather = DailyWeather::new(ghi, temp_air)?;

        let estimate = system.estimate_for_date(date, weather)?;
        let thin = thin_film.estimate_for_date(date, weather)?;
        let day = pv_yield::time::day_of_year_from_date_like(date);

        println!(
            "{:>5}  {:>8.1} h  {:>5.2}  {:>5.1}°  {:>5.2} kWh  {:>5.2} kWh  {:>5.2} kWh",
            month,
            day_length_hours(system.latitude(), day),
            estimate.poa_irradiance(),
            estimate.cell_temperature(),
            estimate.ideal_energy(),
            estimate.adjusted_energy(),
            thin.adjusted_energy(),
        );
        annual += estimate.adjusted_energy() * 30.4;
    }

    println!("\nApproximate annual yield (c-Si): {annual:.0} kWh");
    Ok(())
}
