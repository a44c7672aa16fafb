//! Profile engine: runs the resolve → aggregate → select pipeline against a
//! calendar oracle and assembles the final profile.

use crate::core::{resolver, wuxing};
use crate::domain::model::{BaziProfile, BirthInput, DayMaster, TenGods};
use crate::domain::ports::CalendarOracle;
use crate::utils::error::Result;

pub struct ProfileEngine<O: CalendarOracle> {
    oracle: O,
}

impl<O: CalendarOracle> ProfileEngine<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    /// Compute the full profile for one birth input.
    ///
    /// Referentially transparent: no clock, no caching, no retries; the
    /// gender field is carried through the input untouched and never read.
    pub fn calculate(&self, input: &BirthInput) -> Result<BaziProfile> {
        tracing::debug!(
            "Calculating profile for {:04}-{:02}-{:02} (calendar {:?}, hour {:?})",
            input.year,
            input.month,
            input.day,
            input.calendar,
            input.hour
        );

        let resolved = resolver::resolve_charts(&self.oracle, input)?;
        let pillars = resolved.four_pillars();

        let wu_xing = wuxing::aggregate(&pillars);
        let dominant_element = wuxing::dominant_element(&wu_xing);
        let weak_element = wuxing::weak_element(&wu_xing);

        // Every non-hour field below reads the original-time chart; the
        // corrected-time chart contributes the hour pillar and hour
        // ten-gods through the resolver accessors only.
        let original = &resolved.original;
        let profile = BaziProfile {
            korean_ganji: pillars.korean_ganji(),
            pillars,
            day_master: DayMaster::from_stem(original.day_master),
            wu_xing,
            dominant_element,
            weak_element,
            shi_shen: TenGods {
                year: original.ten_gods.year.clone(),
                month: original.ten_gods.month.clone(),
                hour: resolved.hour_ten_gods(),
            },
            zodiac: original.zodiac_branch.zodiac(),
            nayin_year: original.nayin.year.clone(),
            nayin_day: original.nayin.day.clone(),
            dst_applied: resolved.dst_applied,
        };

        tracing::debug!(
            "Resolved {} (dominant {}, weak {})",
            profile.korean_ganji,
            profile.dominant_element.name(),
            profile.weak_element.name()
        );

        Ok(profile)
    }
}
