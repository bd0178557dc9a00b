use chrono::Local;
use miqat::{compute, CalculationConfig, GeoQuery, MethodId, TimeFormat};

fn main() -> miqat::Result<()> {
    env_logger::init();

    let now = Local::now();
    let date = now.date_naive();
    let query = GeoQuery::new(date, 21.4225, 39.8262, 3.0)?;
    let config = CalculationConfig::default()
        .with_method(MethodId::Makkah)
        .with_time_format(TimeFormat::TwelveHour);

    println!("{} ({})", date, config.calculation_method().name);
    let times = compute(&query, &config);
    print!("{times}");

    if let Some(next) = times.next_prayer(now.time()) {
        let when = if next.is_tomorrow { "tomorrow" } else { "today" };
        println!("next: {} at {} {when}", next.prayer, next.time.format(config.time_format));
    }
    Ok(())
}
