//! Pillar resolution: one or two calendar-oracle queries merged by explicit
//! field provenance.
//!
//! The original-time chart owns every non-hour field. When the birth hour
//! is known, a second query at the true-solar-corrected moment supplies the
//! hour pillar and the hour ten-gods value; everything else in that reply
//! is discarded. The two charts are kept tagged by provenance rather than
//! merged by field-name overlap, so no field can silently switch source.

use crate::core::{dst, solar_time};
use crate::domain::model::{BirthInput, CalendarSystem, CivilMoment, FourPillars};
use crate::domain::ports::{CalendarOracle, OracleChart};
use crate::utils::error::{Result, SajuError};

/// Both oracle charts for one request, tagged by which moment produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCharts {
    /// Chart for the original birth moment; owns all non-hour fields.
    pub original: OracleChart,
    /// Chart for the true-solar-corrected moment; present iff the hour is
    /// known, consulted only for the hour pillar and hour ten-gods.
    pub corrected: Option<OracleChart>,
    /// Whether a summer-time shift was part of the applied correction.
    pub dst_applied: bool,
    /// The corrected moment fed to the second query, for transparency.
    pub corrected_moment: Option<CivilMoment>,
}

impl ResolvedCharts {
    /// Assemble the four pillars: year/month/day from the original-time
    /// chart, hour from the corrected-time chart.
    pub fn four_pillars(&self) -> FourPillars {
        FourPillars {
            year: self.original.year_pillar,
            month: self.original.month_pillar,
            day: self.original.day_pillar,
            hour: self.corrected.as_ref().and_then(|c| c.hour_pillar),
        }
    }

    /// Hour ten-gods value from the corrected-time chart, if any.
    pub fn hour_ten_gods(&self) -> Option<String> {
        self.corrected
            .as_ref()
            .and_then(|c| c.ten_gods.hour.clone())
    }
}

/// Resolve the charts for a birth input.
///
/// The input's calendar system and leap-month flag are forwarded to the
/// oracle verbatim; no leap-month resolution happens here. An unknown hour
/// short-circuits the whole correction path: no DST lookup, no second
/// query, no guessed default hour.
pub fn resolve_charts<O: CalendarOracle>(oracle: &O, input: &BirthInput) -> Result<ResolvedCharts> {
    let original_moment = CivilMoment {
        year: input.year,
        month: input.month,
        day: input.day,
        hour: input.hour.unwrap_or(0),
        minute: input.minute,
    };

    tracing::debug!("Resolving original-time chart for {}", original_moment);
    let original = oracle.resolve(&original_moment, input.calendar, input.leap_month)?;

    let Some(hour) = input.hour else {
        return Ok(ResolvedCharts {
            original,
            corrected: None,
            dst_applied: false,
            corrected_moment: None,
        });
    };

    // The DST predicate and the correction both work on the normalized
    // solar date, which for lunar inputs came back from the first query.
    let solar = original.solar_date;
    let dst_applied = dst::applies_dst(solar.year, solar.month, solar.day);
    let corrected_moment = solar_time::to_true_solar_time(
        solar.year,
        solar.month,
        solar.day,
        hour,
        input.minute,
        dst_applied,
    )?;

    tracing::debug!(
        "Resolving corrected-time chart for {} (dst_applied={})",
        corrected_moment,
        dst_applied
    );
    let corrected = oracle.resolve(&corrected_moment, CalendarSystem::Solar, false)?;

    if corrected.hour_pillar.is_none() {
        return Err(SajuError::OracleContract {
            message: format!("no hour pillar returned for {}", corrected_moment),
        });
    }

    Ok(ResolvedCharts {
        original,
        corrected: Some(corrected),
        dst_applied,
        corrected_moment: Some(corrected_moment),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ganzhi::{Branch, Stem};
    use crate::domain::model::{CivilDate, Gender, Pillar};
    use crate::domain::ports::{NayinByPillar, TenGodsByPillar};
    use std::sync::Mutex;

    /// Oracle that answers every query with a canned chart and records the
    /// moments it was asked about.
    struct ScriptedOracle {
        chart: OracleChart,
        calls: Mutex<Vec<(CivilMoment, CalendarSystem, bool)>>,
    }

    impl ScriptedOracle {
        fn new(chart: OracleChart) -> Self {
            Self {
                chart,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<(CivilMoment, CalendarSystem, bool)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl CalendarOracle for ScriptedOracle {
        fn resolve(
            &self,
            moment: &CivilMoment,
            calendar: CalendarSystem,
            leap_month: bool,
        ) -> Result<OracleChart> {
            self.calls
                .lock()
                .unwrap()
                .push((*moment, calendar, leap_month));
            Ok(self.chart.clone())
        }
    }

    struct RejectingOracle;

    impl CalendarOracle for RejectingOracle {
        fn resolve(
            &self,
            moment: &CivilMoment,
            _calendar: CalendarSystem,
            _leap_month: bool,
        ) -> Result<OracleChart> {
            Err(SajuError::InvalidBirthDate {
                message: format!("{} is not a calendar date", moment),
            })
        }
    }

    fn sample_chart(solar_date: CivilDate) -> OracleChart {
        OracleChart {
            solar_date,
            year_pillar: Pillar::from_hanja("丁卯").unwrap(),
            month_pillar: Pillar::from_hanja("乙巳").unwrap(),
            day_pillar: Pillar::from_hanja("庚辰").unwrap(),
            hour_pillar: Some(Pillar::from_hanja("庚辰").unwrap()),
            day_master: Stem::Geng,
            zodiac_branch: Branch::Mao,
            nayin: NayinByPillar {
                year: "爐中火".to_string(),
                month: "覆燈火".to_string(),
                day: "白蠟金".to_string(),
                hour: Some("白蠟金".to_string()),
            },
            ten_gods: TenGodsByPillar {
                year: "正官".to_string(),
                month: "正財".to_string(),
                hour: Some("比肩".to_string()),
            },
        }
    }

    fn input(hour: Option<u32>, minute: u32) -> BirthInput {
        BirthInput {
            calendar: CalendarSystem::Solar,
            leap_month: false,
            year: 1987,
            month: 6,
            day: 1,
            hour,
            minute,
            gender: Gender::Female,
        }
    }

    #[test]
    fn test_unknown_hour_issues_single_query() {
        let oracle = ScriptedOracle::new(sample_chart(CivilDate {
            year: 1987,
            month: 6,
            day: 1,
        }));
        let resolved = resolve_charts(&oracle, &input(None, 0)).unwrap();

        assert_eq!(oracle.calls().len(), 1);
        assert!(resolved.corrected.is_none());
        assert!(!resolved.dst_applied);
        assert!(resolved.corrected_moment.is_none());
        assert!(resolved.four_pillars().hour.is_none());
        assert!(resolved.hour_ten_gods().is_none());
    }

    #[test]
    fn test_known_hour_issues_corrected_second_query() {
        let oracle = ScriptedOracle::new(sample_chart(CivilDate {
            year: 1987,
            month: 6,
            day: 1,
        }));
        let resolved = resolve_charts(&oracle, &input(Some(8), 10)).unwrap();

        let calls = oracle.calls();
        assert_eq!(calls.len(), 2);
        // First query carries the original time and input calendar flags.
        assert_eq!(calls[0].0.to_string(), "1987-06-01 08:10");
        // Second query is always solar, never leap, at the corrected moment.
        assert_eq!(calls[1].0.to_string(), "1987-06-01 06:38");
        assert_eq!(calls[1].1, CalendarSystem::Solar);
        assert!(!calls[1].2);

        assert!(resolved.dst_applied);
        assert_eq!(
            resolved.corrected_moment.unwrap().to_string(),
            "1987-06-01 06:38"
        );
        assert!(resolved.four_pillars().hour.is_some());
        assert_eq!(resolved.hour_ten_gods().as_deref(), Some("比肩"));
    }

    #[test]
    fn test_correction_rollback_does_not_touch_date_pillars() {
        // 00:10 inside the 1987 DST range rolls the lookup moment back to
        // the previous day, but the date pillars come from the first query.
        let oracle = ScriptedOracle::new(sample_chart(CivilDate {
            year: 1987,
            month: 6,
            day: 1,
        }));
        let resolved = resolve_charts(&oracle, &input(Some(0), 10)).unwrap();

        let calls = oracle.calls();
        assert_eq!(calls[0].0.to_string(), "1987-06-01 00:10");
        assert_eq!(calls[1].0.to_string(), "1987-05-31 22:38");

        let pillars = resolved.four_pillars();
        assert_eq!(pillars.year, resolved.original.year_pillar);
        assert_eq!(pillars.month, resolved.original.month_pillar);
        assert_eq!(pillars.day, resolved.original.day_pillar);
    }

    #[test]
    fn test_lunar_flags_forwarded_verbatim() {
        let oracle = ScriptedOracle::new(sample_chart(CivilDate {
            year: 1987,
            month: 6,
            day: 26,
        }));
        let birth = BirthInput {
            calendar: CalendarSystem::Lunar,
            leap_month: true,
            year: 1987,
            month: 6,
            day: 1,
            hour: None,
            minute: 0,
            gender: Gender::Male,
        };
        resolve_charts(&oracle, &birth).unwrap();

        let calls = oracle.calls();
        assert_eq!(calls[0].1, CalendarSystem::Lunar);
        assert!(calls[0].2);
    }

    #[test]
    fn test_dst_predicate_uses_normalized_solar_date() {
        // A lunar input whose solar conversion lands inside the DST range:
        // the predicate must look at the converted date, not the raw input.
        let oracle = ScriptedOracle::new(sample_chart(CivilDate {
            year: 1987,
            month: 6,
            day: 26,
        }));
        let birth = BirthInput {
            calendar: CalendarSystem::Lunar,
            leap_month: false,
            year: 1987,
            month: 5,
            day: 1,
            hour: Some(8),
            minute: 0,
            gender: Gender::Male,
        };
        let resolved = resolve_charts(&oracle, &birth).unwrap();

        assert!(resolved.dst_applied);
        // Correction is applied to the solar date plus the input clock time.
        assert_eq!(
            oracle.calls()[1].0.to_string(),
            "1987-06-26 06:28"
        );
    }

    #[test]
    fn test_oracle_rejection_surfaces_as_invalid_birth_date() {
        let err = resolve_charts(&RejectingOracle, &input(Some(8), 0)).unwrap_err();
        assert!(matches!(err, SajuError::InvalidBirthDate { .. }));
    }

    #[test]
    fn test_missing_hour_pillar_is_contract_violation() {
        let mut chart = sample_chart(CivilDate {
            year: 1987,
            month: 6,
            day: 1,
        });
        chart.hour_pillar = None;
        let oracle = ScriptedOracle::new(chart);

        let err = resolve_charts(&oracle, &input(Some(8), 10)).unwrap_err();
        assert!(matches!(err, SajuError::OracleContract { .. }));
    }
}
