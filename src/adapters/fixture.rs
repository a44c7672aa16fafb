//! TOML-backed calendar oracle for deterministic replay.
//!
//! A fixture file pre-records the chart for each (moment, calendar,
//! leap-month) query the pipeline will issue. The adapter does no calendar
//! arithmetic of its own: a missing entry means the oracle rejects the
//! moment, exactly like an invalid calendar date.

use crate::domain::ganzhi::{Branch, Stem};
use crate::domain::model::{CalendarSystem, CivilDate, CivilMoment, Pillar};
use crate::domain::ports::{CalendarOracle, NayinByPillar, OracleChart, TenGodsByPillar};
use crate::utils::error::{Result, SajuError};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct FixtureFile {
    #[serde(default)]
    chart: Vec<ChartEntry>,
}

#[derive(Debug, Deserialize)]
struct ChartEntry {
    moment: String,
    calendar: String,
    #[serde(default)]
    leap_month: bool,
    solar_date: String,
    year: String,
    month: String,
    day: String,
    hour: Option<String>,
    day_master: String,
    zodiac: String,
    nayin_year: String,
    nayin_month: String,
    nayin_day: String,
    nayin_hour: Option<String>,
    ten_gods_year: String,
    ten_gods_month: String,
    ten_gods_hour: Option<String>,
}

type QueryKey = (String, CalendarSystem, bool);

#[derive(Debug)]
pub struct FixtureOracle {
    charts: HashMap<QueryKey, OracleChart>,
}

impl FixtureOracle {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let file: FixtureFile = toml::from_str(text)?;

        let mut charts = HashMap::new();
        for entry in file.chart {
            let moment = parse_moment(&entry.moment)?;
            let calendar = parse_calendar(&entry.calendar)?;
            let key = (moment.to_string(), calendar, entry.leap_month);
            let chart = entry.into_chart()?;
            charts.insert(key, chart);
        }

        Ok(Self { charts })
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}

impl CalendarOracle for FixtureOracle {
    fn resolve(
        &self,
        moment: &CivilMoment,
        calendar: CalendarSystem,
        leap_month: bool,
    ) -> Result<OracleChart> {
        let key = (moment.to_string(), calendar, leap_month);
        self.charts
            .get(&key)
            .cloned()
            .ok_or_else(|| SajuError::InvalidBirthDate {
                message: format!("no chart recorded for {} ({:?})", moment, calendar),
            })
    }
}

impl ChartEntry {
    fn into_chart(self) -> Result<OracleChart> {
        Ok(OracleChart {
            solar_date: parse_date(&self.solar_date)?,
            year_pillar: parse_pillar("year", &self.year)?,
            month_pillar: parse_pillar("month", &self.month)?,
            day_pillar: parse_pillar("day", &self.day)?,
            hour_pillar: self
                .hour
                .as_deref()
                .map(|h| parse_pillar("hour", h))
                .transpose()?,
            day_master: parse_stem(&self.day_master)?,
            zodiac_branch: parse_branch(&self.zodiac)?,
            nayin: NayinByPillar {
                year: self.nayin_year,
                month: self.nayin_month,
                day: self.nayin_day,
                hour: self.nayin_hour,
            },
            ten_gods: TenGodsByPillar {
                year: self.ten_gods_year,
                month: self.ten_gods_month,
                hour: self.ten_gods_hour,
            },
        })
    }
}

fn contract_err(message: String) -> SajuError {
    SajuError::OracleContract { message }
}

fn parse_calendar(s: &str) -> Result<CalendarSystem> {
    match s {
        "solar" => Ok(CalendarSystem::Solar),
        "lunar" => Ok(CalendarSystem::Lunar),
        other => Err(contract_err(format!(
            "calendar must be 'solar' or 'lunar', got '{}'",
            other
        ))),
    }
}

/// `YYYY-MM-DD HH:MM`
fn parse_moment(s: &str) -> Result<CivilMoment> {
    let (date_part, time_part) = s
        .split_once(' ')
        .ok_or_else(|| contract_err(format!("moment '{}' is not 'YYYY-MM-DD HH:MM'", s)))?;
    let date = parse_date(date_part)?;
    let mut time = time_part.split(':');
    let hour = parse_field(time.next(), s, "hour")?;
    let minute = parse_field(time.next(), s, "minute")?;
    if time.next().is_some() {
        return Err(contract_err(format!("moment '{}' has trailing time fields", s)));
    }
    Ok(CivilMoment {
        year: date.year,
        month: date.month,
        day: date.day,
        hour,
        minute,
    })
}

/// `YYYY-MM-DD`
fn parse_date(s: &str) -> Result<CivilDate> {
    let mut parts = s.split('-');
    let year: i32 = parse_field(parts.next(), s, "year")?;
    let month = parse_field(parts.next(), s, "month")?;
    let day = parse_field(parts.next(), s, "day")?;
    if parts.next().is_some() {
        return Err(contract_err(format!("date '{}' has trailing fields", s)));
    }
    Ok(CivilDate { year, month, day })
}

fn parse_field<T: std::str::FromStr>(part: Option<&str>, source: &str, name: &str) -> Result<T> {
    part.and_then(|p| p.parse().ok())
        .ok_or_else(|| contract_err(format!("cannot read {} from '{}'", name, source)))
}

fn parse_pillar(name: &str, s: &str) -> Result<Pillar> {
    Pillar::from_hanja(s)
        .ok_or_else(|| contract_err(format!("{} pillar '{}' is not a stem-branch pair", name, s)))
}

fn parse_stem(s: &str) -> Result<Stem> {
    let mut chars = s.chars();
    match (chars.next().and_then(Stem::from_hanja), chars.next()) {
        (Some(stem), None) => Ok(stem),
        _ => Err(contract_err(format!("'{}' is not a heavenly stem", s))),
    }
}

fn parse_branch(s: &str) -> Result<Branch> {
    let mut chars = s.chars();
    match (chars.next().and_then(Branch::from_hanja), chars.next()) {
        (Some(branch), None) => Ok(branch),
        _ => Err(contract_err(format!("'{}' is not an earthly branch", s))),
    }
}
