use std::fmt;

use serde::Serialize;

/// Inflection class of a dictionary-form verb.
///
/// The discriminant order is the column order of every per-class allomorph
/// table in [`crate::stem`]: the three っ-euphony godan classes first, the
/// remaining godan classes next, ichidan last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InflectionClass {
    U,
    Tsu,
    RuGodan,
    Ku,
    Gu,
    Mu,
    Nu,
    Bu,
    Su,
    RuIchidan,
}

impl InflectionClass {
    pub const COUNT: usize = 10;

    pub const ALL: [InflectionClass; Self::COUNT] = [
        InflectionClass::U,
        InflectionClass::Tsu,
        InflectionClass::RuGodan,
        InflectionClass::Ku,
        InflectionClass::Gu,
        InflectionClass::Mu,
        InflectionClass::Nu,
        InflectionClass::Bu,
        InflectionClass::Su,
        InflectionClass::RuIchidan,
    ];

    /// Column index into the allomorph tables
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_ichidan(self) -> bool {
        self == InflectionClass::RuIchidan
    }

    /// Dictionary-form ending of the class
    pub fn ending(self) -> char {
        match self {
            InflectionClass::U => 'う',
            InflectionClass::Tsu => 'つ',
            InflectionClass::RuGodan | InflectionClass::RuIchidan => 'る',
            InflectionClass::Ku => 'く',
            InflectionClass::Gu => 'ぐ',
            InflectionClass::Mu => 'む',
            InflectionClass::Nu => 'ぬ',
            InflectionClass::Bu => 'ぶ',
            InflectionClass::Su => 'す',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InflectionClass::U => "u",
            InflectionClass::Tsu => "tsu",
            InflectionClass::RuGodan => "ru-godan",
            InflectionClass::Ku => "ku",
            InflectionClass::Gu => "gu",
            InflectionClass::Mu => "mu",
            InflectionClass::Nu => "nu",
            InflectionClass::Bu => "bu",
            InflectionClass::Su => "su",
            InflectionClass::RuIchidan => "ru-ichidan",
        }
    }
}

impl fmt::Display for InflectionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// i-row and e-row moras; a る preceded by one of these marks an ichidan verb
const ICHIDAN_INDICATORS: &[char] = &[
    'い', 'き', 'ぎ', 'し', 'じ', 'ち', 'に', 'ひ', 'び', 'ぴ', 'み', 'り', //
    'え', 'け', 'げ', 'せ', 'ぜ', 'て', 'で', 'ね', 'へ', 'べ', 'ぺ', 'め', 'れ',
];

/// Classify by final character, `None` when it is not a verb ending.
///
/// Kanji before る gives no vowel information, so 見る or 寝る land in
/// godan-ru here; irregular verbs are resolved before this is consulted.
pub fn try_classify(verb: &str) -> Option<InflectionClass> {
    let mut chars = verb.chars().rev();
    let last = chars.next()?;

    let class = match last {
        'う' => InflectionClass::U,
        'つ' => InflectionClass::Tsu,
        'く' => InflectionClass::Ku,
        'ぐ' => InflectionClass::Gu,
        'む' => InflectionClass::Mu,
        'ぬ' => InflectionClass::Nu,
        'ぶ' => InflectionClass::Bu,
        'す' => InflectionClass::Su,
        'る' => match chars.next() {
            Some(prev) if ICHIDAN_INDICATORS.contains(&prev) => InflectionClass::RuIchidan,
            // single-mora る has no preceding mora to inspect
            _ => InflectionClass::RuGodan,
        },
        _ => return None,
    };

    Some(class)
}

/// Total classification: unknown endings fall back to godan-ru
pub fn classify(verb: &str) -> InflectionClass {
    try_classify(verb).unwrap_or_else(|| {
        tracing::warn!("Unclassifiable verb '{}', treating as godan-ru", verb);
        InflectionClass::RuGodan
    })
}
