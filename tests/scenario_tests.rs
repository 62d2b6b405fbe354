use chrono::{Duration, NaiveDate, TimeZone, Timelike, Utc};
use daylight::comparison::{DayLabel, reference_day_for};
use daylight::solar::Phase;
use daylight::{Almanac, Coordinate, SolarDay, describe, humanize_duration, solstice};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn london_day(on: NaiveDate) -> SolarDay {
    SolarDay::new(on, Coordinate::DEFAULT, chrono_tz::Europe::London)
}

#[test]
fn test_london_gains_seconds_into_the_solstice() {
    let solstice = Almanac::for_day(london_day(date(2023, 6, 21)));
    let comparison = solstice.compare_with(&solstice.yesterday());

    let delta = comparison.delta_seconds();
    assert!(delta > 0.0 && delta < 60.0, "delta was {delta}");

    let sentence = describe(&comparison, &DayLabel::Today, &DayLabel::Yesterday);
    assert_eq!(sentence, "less than a minute more daylight today than yesterday.");
}

#[test]
fn test_london_solstice_daylight_length() {
    let daylight = *Almanac::for_day(london_day(date(2023, 6, 21))).daylight();
    let hours = daylight.duration_seconds() / 3600.0;
    assert!((16.5..16.75).contains(&hours), "{hours} hours");
}

#[test]
fn test_null_island_has_twelve_hours() {
    let coordinate = Coordinate::new(0.0, 0.0).unwrap();
    for on in [date(2024, 3, 20), date(2024, 6, 21), date(2024, 12, 21)] {
        let almanac = Almanac::for_day(SolarDay::new(on, coordinate, chrono_tz::UTC));
        let minutes = almanac.daylight().duration().num_minutes();
        assert!((12 * 60 - 15..=12 * 60 + 15).contains(&minutes), "{on}: {minutes}");
    }
}

#[test]
fn test_high_arctic_midsummer_is_full_day() {
    let svalbard = Coordinate::new(78.2232, 15.6267).unwrap();
    let day = SolarDay::new(date(2024, 6, 21), svalbard, chrono_tz::Arctic::Longyearbyen);
    let almanac = Almanac::for_day(day);

    assert_eq!(almanac.events().get(Phase::Sunrise), None);
    assert_eq!(almanac.events().get(Phase::Sunset), None);
    assert_eq!(almanac.daylight().begins(), day.start_of_day());
    assert_eq!(almanac.daylight().ends(), day.end_of_day());
}

#[test]
fn test_high_arctic_midwinter_is_a_sliver() {
    let svalbard = Coordinate::new(78.2232, 15.6267).unwrap();
    let day = SolarDay::new(date(2024, 12, 21), svalbard, chrono_tz::Arctic::Longyearbyen);
    let almanac = Almanac::for_day(day);
    let daylight = almanac.daylight();

    // The sun peaks just above -12°, so only the nautical dawn is available
    assert_eq!(almanac.events().get(Phase::CivilDawn), None);
    assert_eq!(daylight.begins(), almanac.events().get(Phase::NauticalDawn).unwrap());
    assert_eq!(daylight.duration(), Duration::milliseconds(100));
}

#[test]
fn test_humanized_durations() {
    assert_eq!(humanize_duration(45.0), "less than a minute");
    assert_eq!(humanize_duration(-45.0), "less than a minute");
    assert_eq!(humanize_duration(125.0), "2 minutes");
}

#[test]
fn test_reference_day_rules() {
    let today = date(2024, 6, 21);
    assert_eq!(reference_day_for(today, today), date(2024, 6, 20));
    assert_eq!(reference_day_for(date(2024, 12, 21), today), today);
}

#[test]
fn test_winter_comparison_sentence() {
    let today = date(2024, 6, 21);
    let winter = Almanac::for_day(london_day(date(2024, 12, 21)));
    let summer = Almanac::for_day(london_day(today));
    let comparison = winter.compare_with(&summer);

    assert!(!comparison.is_gain());
    let sentence = describe(
        &comparison,
        &DayLabel::relative_to(date(2024, 12, 21), today),
        &DayLabel::relative_to(today, today),
    );
    assert!(sentence.ends_with("less daylight on Dec 21, 2024 than today."), "{sentence}");
    assert!(sentence.contains("hours"), "{sentence}");
}

#[test]
fn test_solstices_bracket_an_instant() {
    let now = Utc.with_ymd_and_hms(2024, 9, 1, 12, 0, 0).unwrap();
    let previous = solstice::previous(now).unwrap();
    let next = solstice::next(now).unwrap();

    assert!(previous.instant <= now && now < next.instant);
    assert_eq!(previous.instant.date_naive(), date(2024, 6, 20));
    assert_eq!(next.instant.date_naive(), date(2024, 12, 21));
}

#[test]
fn test_sunrise_lands_on_the_local_morning() {
    let tokyo = Coordinate::new(35.6762, 139.6503).unwrap();
    let day = SolarDay::new(date(2024, 3, 20), tokyo, chrono_tz::Asia::Tokyo);
    let sunrise = Almanac::for_day(day)
        .events()
        .get(Phase::Sunrise)
        .unwrap()
        .with_timezone(&chrono_tz::Asia::Tokyo);

    assert_eq!(sunrise.date_naive(), date(2024, 3, 20));
    assert_eq!(sunrise.hour(), 5);
}
