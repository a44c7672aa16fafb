use crate::domain::model::{BirthInput, CalendarSystem, Gender};
use crate::utils::error::{Result, SajuError};
use crate::utils::validation::{validate_path, validate_range, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "saju-cli")]
#[command(about = "Four Pillars (saju) profile calculator")]
pub struct CliConfig {
    /// Birth year (civil)
    #[arg(long)]
    pub year: i32,

    /// Birth month, 1-12
    #[arg(long)]
    pub month: u32,

    /// Birth day, 1-31
    #[arg(long)]
    pub day: u32,

    /// Birth hour, 0-23; omit when the hour is unknown
    #[arg(long)]
    pub hour: Option<u32>,

    /// Birth minute, 0-59
    #[arg(long, default_value = "0")]
    pub minute: u32,

    /// Calendar system the date is expressed in: solar or lunar
    #[arg(long, default_value = "solar")]
    pub calendar: String,

    /// Treat the lunar month as a leap month
    #[arg(long)]
    pub leap_month: bool,

    /// Gender: male or female (carried through, does not affect the profile)
    #[arg(long, default_value = "female")]
    pub gender: String,

    /// Path to the calendar oracle fixture file (TOML)
    #[arg(long, default_value = "oracle.toml")]
    pub oracle: String,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl CliConfig {
    /// Convert the parsed arguments into a pipeline input.
    pub fn birth_input(&self) -> Result<BirthInput> {
        let calendar = match self.calendar.as_str() {
            "solar" => CalendarSystem::Solar,
            "lunar" => CalendarSystem::Lunar,
            other => {
                return Err(SajuError::InvalidConfigValue {
                    field: "calendar".to_string(),
                    value: other.to_string(),
                    reason: "Expected 'solar' or 'lunar'".to_string(),
                })
            }
        };

        let gender = match self.gender.as_str() {
            "male" => Gender::Male,
            "female" => Gender::Female,
            other => {
                return Err(SajuError::InvalidConfigValue {
                    field: "gender".to_string(),
                    value: other.to_string(),
                    reason: "Expected 'male' or 'female'".to_string(),
                })
            }
        };

        Ok(BirthInput {
            calendar,
            leap_month: self.leap_month,
            year: self.year,
            month: self.month,
            day: self.day,
            hour: self.hour,
            minute: self.minute,
            gender,
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_range("year", self.year, 1900, 2100)?;
        validate_range("month", self.month, 1, 12)?;
        validate_range("day", self.day, 1, 31)?;
        if let Some(hour) = self.hour {
            validate_range("hour", hour, 0, 23)?;
        }
        validate_range("minute", self.minute, 0, 59)?;
        validate_path("oracle", &self.oracle)?;
        // Calendar and gender values are checked during conversion.
        self.birth_input().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CliConfig {
        CliConfig {
            year: 1987,
            month: 6,
            day: 1,
            hour: Some(8),
            minute: 10,
            calendar: "solar".to_string(),
            leap_month: false,
            gender: "female".to_string(),
            oracle: "oracle.toml".to_string(),
            pretty: false,
            verbose: false,
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(config().validate().is_ok());

        let input = config().birth_input().unwrap();
        assert_eq!(input.calendar, CalendarSystem::Solar);
        assert_eq!(input.hour, Some(8));
        assert_eq!(input.minute, 10);
    }

    #[test]
    fn test_range_violations() {
        let mut c = config();
        c.month = 13;
        assert!(c.validate().is_err());

        let mut c = config();
        c.hour = Some(24);
        assert!(c.validate().is_err());

        let mut c = config();
        c.minute = 60;
        assert!(c.validate().is_err());

        let mut c = config();
        c.year = 1899;
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_unknown_hour_is_valid() {
        let mut c = config();
        c.hour = None;
        assert!(c.validate().is_ok());
        assert_eq!(c.birth_input().unwrap().hour, None);
    }

    #[test]
    fn test_bad_calendar_and_gender() {
        let mut c = config();
        c.calendar = "julian".to_string();
        assert!(matches!(
            c.birth_input().unwrap_err(),
            SajuError::InvalidConfigValue { .. }
        ));

        let mut c = config();
        c.gender = "unknown".to_string();
        assert!(c.validate().is_err());
    }
}
