use crate::domain::ganzhi::{Branch, Element, Polarity, Stem, Zodiac};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar system the birth date is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarSystem {
    Solar,
    Lunar,
}

/// Opaque pass-through; the pipeline never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Birth data as entered by the caller. Hour `None` means the birth hour is
/// unknown; that is a valid state, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInput {
    pub calendar: CalendarSystem,
    pub leap_month: bool,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: Option<u32>,
    pub minute: u32,
    pub gender: Gender,
}

/// Calendar date with no time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Normalized civil date and time used for correction arithmetic and as the
/// oracle query key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CivilMoment {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl CivilMoment {
    pub fn date(&self) -> CivilDate {
        CivilDate {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }
}

impl fmt::Display for CivilMoment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

/// One pillar: an ordered (stem, branch) pair, e.g. 乙亥.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Parse a two-character hanja pair like `乙亥`.
    pub fn from_hanja(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let stem = Stem::from_hanja(chars.next()?)?;
        let branch = Branch::from_hanja(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Self { stem, branch })
    }

    /// Korean reading of the pair, e.g. `을해`.
    pub fn korean(&self) -> String {
        format!("{}{}", self.stem.korean(), self.branch.korean())
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem.hanja(), self.branch.hanja())
    }
}

/// The four pillars. The hour pillar exists iff the birth hour was known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Option<Pillar>,
}

impl FourPillars {
    /// The pillars that are present, in year/month/day/hour order.
    pub fn present(&self) -> Vec<Pillar> {
        let mut pillars = vec![self.year, self.month, self.day];
        if let Some(hour) = self.hour {
            pillars.push(hour);
        }
        pillars
    }

    /// Korean ganji sentence, e.g. `을해년 기묘월 갑진일 신미시`.
    pub fn korean_ganji(&self) -> String {
        let mut parts = vec![
            format!("{}년", self.year.korean()),
            format!("{}월", self.month.korean()),
            format!("{}일", self.day.korean()),
        ];
        if let Some(hour) = self.hour {
            parts.push(format!("{}시", hour.korean()));
        }
        parts.join(" ")
    }
}

/// Element balance as integer percentages. The five values are not
/// renormalized; independent rounding may leave a small surplus or deficit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WuXingDistribution {
    pub wood: u8,
    pub fire: u8,
    pub earth: u8,
    pub metal: u8,
    pub water: u8,
}

impl WuXingDistribution {
    pub const fn get(&self, element: Element) -> u8 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    pub fn total(&self) -> u32 {
        self.wood as u32 + self.fire as u32 + self.earth as u32 + self.metal as u32 + self.water as u32
    }
}

/// The day pillar's stem with its element and polarity; the profile anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMaster {
    pub stem: Stem,
    pub element: Element,
    pub polarity: Polarity,
}

impl DayMaster {
    pub const fn from_stem(stem: Stem) -> Self {
        Self {
            stem,
            element: stem.element(),
            polarity: stem.polarity(),
        }
    }

    /// Korean label, e.g. `갑목`.
    pub fn korean(&self) -> String {
        format!("{}{}", self.stem.korean(), self.element.korean_short())
    }
}

/// Ten-gods classification of the year/month/hour stems relative to the day
/// master. Opaque strings sourced from the calendar oracle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenGods {
    pub year: String,
    pub month: String,
    pub hour: Option<String>,
}

/// The assembled profile. Deterministic: identical `BirthInput` yields an
/// identical profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaziProfile {
    pub pillars: FourPillars,
    pub korean_ganji: String,
    pub day_master: DayMaster,
    pub wu_xing: WuXingDistribution,
    pub dominant_element: Element,
    pub weak_element: Element,
    pub shi_shen: TenGods,
    pub zodiac: Zodiac,
    pub nayin_year: String,
    pub nayin_day: String,
    pub dst_applied: bool,
}
