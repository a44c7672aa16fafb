use crate::domain::ganzhi::{Branch, Stem};
use crate::domain::model::{CalendarSystem, CivilDate, CivilMoment, Pillar};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// Nayin (sound-element) name per pillar. Opaque strings; never recomputed
/// locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NayinByPillar {
    pub year: String,
    pub month: String,
    pub day: String,
    pub hour: Option<String>,
}

/// Ten-gods value per stem, relative to the day master. Opaque strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenGodsByPillar {
    pub year: String,
    pub month: String,
    pub hour: Option<String>,
}

/// One oracle reply: the sexagenary chart for a single civil moment.
///
/// `solar_date` is the moment normalized to the civil solar calendar; for
/// lunar queries this is the oracle's conversion, so normalization costs no
/// extra query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleChart {
    pub solar_date: CivilDate,
    pub year_pillar: Pillar,
    pub month_pillar: Pillar,
    pub day_pillar: Pillar,
    pub hour_pillar: Option<Pillar>,
    pub day_master: Stem,
    pub zodiac_branch: Branch,
    pub nayin: NayinByPillar,
    pub ten_gods: TenGodsByPillar,
}

/// Boundary to the external sexagenary calendar engine.
///
/// The engine owns all lunisolar arithmetic: solar⇄lunar conversion,
/// leap-month resolution and the stem/branch/ten-gods/nayin cycles. The
/// pipeline invokes it once per request when the birth hour is unknown and
/// twice when it is known (original time, then corrected time). A rejected
/// moment (not a valid calendar date) must surface as
/// `SajuError::InvalidBirthDate`.
pub trait CalendarOracle: Send + Sync {
    fn resolve(
        &self,
        moment: &CivilMoment,
        calendar: CalendarSystem,
        leap_month: bool,
    ) -> Result<OracleChart>;
}
