//! Sexagenary symbol sets: the 10 Heavenly Stems and 12 Earthly Branches,
//! with their fixed element, polarity, zodiac and display-name tables.
//!
//! These are closed cyclic sets; all tables are const lookups with no
//! runtime mutation path. Branch elements follow the primary-element
//! convention (hidden-stem weighting is not modeled).

use serde::{Deserialize, Serialize};

/// The five elements (wu xing / o-haeng).
///
/// Array order doubles as the tie-break priority for dominant/weak
/// selection: wood, fire, earth, metal, water.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in tie-break priority order.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// English name, matching the serialized form.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Metal => "metal",
            Self::Water => "water",
        }
    }

    /// Korean label with the hanja in parentheses, e.g. `목(木)`.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Wood => "목(木)",
            Self::Fire => "화(火)",
            Self::Earth => "토(土)",
            Self::Metal => "금(金)",
            Self::Water => "수(水)",
        }
    }

    /// Bare Korean syllable, e.g. `목`, for compound labels like `갑목`.
    pub const fn korean_short(self) -> &'static str {
        match self {
            Self::Wood => "목",
            Self::Fire => "화",
            Self::Earth => "토",
            Self::Metal => "금",
            Self::Water => "수",
        }
    }
}

/// Yin/yang polarity of a stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Yang,
    Yin,
}

/// The 10 Heavenly Stems (cheon-gan), in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stem {
    #[serde(rename = "甲")]
    Jia,
    #[serde(rename = "乙")]
    Yi,
    #[serde(rename = "丙")]
    Bing,
    #[serde(rename = "丁")]
    Ding,
    #[serde(rename = "戊")]
    Wu,
    #[serde(rename = "己")]
    Ji,
    #[serde(rename = "庚")]
    Geng,
    #[serde(rename = "辛")]
    Xin,
    #[serde(rename = "壬")]
    Ren,
    #[serde(rename = "癸")]
    Gui,
}

/// All 10 stems in cycle order (Jia=0 .. Gui=9).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    /// Hanja symbol, the canonical wire form.
    pub const fn hanja(self) -> char {
        match self {
            Self::Jia => '甲',
            Self::Yi => '乙',
            Self::Bing => '丙',
            Self::Ding => '丁',
            Self::Wu => '戊',
            Self::Ji => '己',
            Self::Geng => '庚',
            Self::Xin => '辛',
            Self::Ren => '壬',
            Self::Gui => '癸',
        }
    }

    /// Korean reading of the stem.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Jia => "갑",
            Self::Yi => "을",
            Self::Bing => "병",
            Self::Ding => "정",
            Self::Wu => "무",
            Self::Ji => "기",
            Self::Geng => "경",
            Self::Xin => "신",
            Self::Ren => "임",
            Self::Gui => "계",
        }
    }

    /// Element of the stem (10-entry fixed table).
    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }

    /// Polarity of the stem: even cycle positions are yang, odd are yin.
    pub const fn polarity(self) -> Polarity {
        match self {
            Self::Jia | Self::Bing | Self::Wu | Self::Geng | Self::Ren => Polarity::Yang,
            Self::Yi | Self::Ding | Self::Ji | Self::Xin | Self::Gui => Polarity::Yin,
        }
    }

    /// Parse from the hanja symbol.
    pub fn from_hanja(ch: char) -> Option<Self> {
        ALL_STEMS.iter().copied().find(|s| s.hanja() == ch)
    }
}

/// The 12 Earthly Branches (ji-ji), in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    #[serde(rename = "子")]
    Zi,
    #[serde(rename = "丑")]
    Chou,
    #[serde(rename = "寅")]
    Yin,
    #[serde(rename = "卯")]
    Mao,
    #[serde(rename = "辰")]
    Chen,
    #[serde(rename = "巳")]
    Si,
    #[serde(rename = "午")]
    Wu,
    #[serde(rename = "未")]
    Wei,
    #[serde(rename = "申")]
    Shen,
    #[serde(rename = "酉")]
    You,
    #[serde(rename = "戌")]
    Xu,
    #[serde(rename = "亥")]
    Hai,
}

/// All 12 branches in cycle order (Zi=0 .. Hai=11).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

impl Branch {
    /// Hanja symbol, the canonical wire form.
    pub const fn hanja(self) -> char {
        match self {
            Self::Zi => '子',
            Self::Chou => '丑',
            Self::Yin => '寅',
            Self::Mao => '卯',
            Self::Chen => '辰',
            Self::Si => '巳',
            Self::Wu => '午',
            Self::Wei => '未',
            Self::Shen => '申',
            Self::You => '酉',
            Self::Xu => '戌',
            Self::Hai => '亥',
        }
    }

    /// Korean reading of the branch.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Zi => "자",
            Self::Chou => "축",
            Self::Yin => "인",
            Self::Mao => "묘",
            Self::Chen => "진",
            Self::Si => "사",
            Self::Wu => "오",
            Self::Wei => "미",
            Self::Shen => "신",
            Self::You => "유",
            Self::Xu => "술",
            Self::Hai => "해",
        }
    }

    /// Primary element of the branch (12-entry fixed table).
    pub const fn element(self) -> Element {
        match self {
            Self::Zi | Self::Hai => Element::Water,
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
        }
    }

    /// Zodiac animal of the branch (12-entry fixed table).
    pub const fn zodiac(self) -> Zodiac {
        match self {
            Self::Zi => Zodiac::Rat,
            Self::Chou => Zodiac::Ox,
            Self::Yin => Zodiac::Tiger,
            Self::Mao => Zodiac::Rabbit,
            Self::Chen => Zodiac::Dragon,
            Self::Si => Zodiac::Snake,
            Self::Wu => Zodiac::Horse,
            Self::Wei => Zodiac::Goat,
            Self::Shen => Zodiac::Monkey,
            Self::You => Zodiac::Rooster,
            Self::Xu => Zodiac::Dog,
            Self::Hai => Zodiac::Pig,
        }
    }

    /// Parse from the hanja symbol.
    pub fn from_hanja(ch: char) -> Option<Self> {
        ALL_BRANCHES.iter().copied().find(|b| b.hanja() == ch)
    }
}

/// The 12 zodiac animals (tti), keyed by the year branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zodiac {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl Zodiac {
    /// English name, matching the serialized form.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rat => "rat",
            Self::Ox => "ox",
            Self::Tiger => "tiger",
            Self::Rabbit => "rabbit",
            Self::Dragon => "dragon",
            Self::Snake => "snake",
            Self::Horse => "horse",
            Self::Goat => "goat",
            Self::Monkey => "monkey",
            Self::Rooster => "rooster",
            Self::Dog => "dog",
            Self::Pig => "pig",
        }
    }

    /// Korean label, e.g. `돼지띠`.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Rat => "쥐띠",
            Self::Ox => "소띠",
            Self::Tiger => "호랑이띠",
            Self::Rabbit => "토끼띠",
            Self::Dragon => "용띠",
            Self::Snake => "뱀띠",
            Self::Horse => "말띠",
            Self::Goat => "양띠",
            Self::Monkey => "원숭이띠",
            Self::Rooster => "닭띠",
            Self::Dog => "개띠",
            Self::Pig => "돼지띠",
        }
    }
}
