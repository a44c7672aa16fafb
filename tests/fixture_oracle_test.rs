//! Fixture oracle loading from disk, the way the CLI uses it.

use saju_core::{
    BirthInput, CalendarSystem, FixtureOracle, Gender, ProfileEngine, SajuError,
};
use std::io::Write;
use tempfile::TempDir;

const FIXTURE: &str = r#"
[[chart]]
moment = "1995-03-21 00:00"
calendar = "solar"
solar_date = "1995-03-21"
year = "乙亥"
month = "己卯"
day = "甲辰"
day_master = "甲"
zodiac = "亥"
nayin_year = "山頭火"
nayin_month = "城頭土"
nayin_day = "覆燈火"
ten_gods_year = "劫財"
ten_gods_month = "正財"
"#;

#[test]
fn test_profile_end_to_end_from_fixture_file() {
    let temp_dir = TempDir::new().unwrap();
    let fixture_path = temp_dir.path().join("oracle.toml");
    let mut file = std::fs::File::create(&fixture_path).unwrap();
    file.write_all(FIXTURE.as_bytes()).unwrap();

    let oracle = FixtureOracle::from_path(&fixture_path).unwrap();
    assert_eq!(oracle.len(), 1);

    let input = BirthInput {
        calendar: CalendarSystem::Solar,
        leap_month: false,
        year: 1995,
        month: 3,
        day: 21,
        hour: None,
        minute: 0,
        gender: Gender::Male,
    };
    let profile = ProfileEngine::new(oracle).calculate(&input).unwrap();

    assert_eq!(profile.korean_ganji, "을해년 기묘월 갑진일");
    assert!(profile.pillars.hour.is_none());
    assert!(!profile.dst_applied);
    assert_eq!(profile.nayin_year, "山頭火");
}

#[test]
fn test_missing_fixture_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.toml");
    let err = FixtureOracle::from_path(&missing).unwrap_err();
    assert!(matches!(err, SajuError::Io(_)));
}

#[test]
fn test_unrecorded_moment_is_rejected_like_an_invalid_date() {
    let oracle = FixtureOracle::from_toml(FIXTURE).unwrap();
    let input = BirthInput {
        calendar: CalendarSystem::Solar,
        leap_month: false,
        year: 1995,
        month: 3,
        day: 22,
        hour: None,
        minute: 0,
        gender: Gender::Male,
    };
    let err = ProfileEngine::new(oracle).calculate(&input).unwrap_err();
    assert!(matches!(err, SajuError::InvalidBirthDate { .. }));
}
