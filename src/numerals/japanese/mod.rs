use serde::Serialize;
use std::ops::RangeInclusive;

use super::ensure_in_range;
use super::magnitude::{GroupScheme, compose};
use crate::error::NumeralError;

mod group;
pub mod kana;
pub mod lexicon;

pub use group::MAX_GROUP;
pub use kana::hiragana_to_katakana;

use group::read_group_forms;
use lexicon::{Forms, Morpheme, morpheme};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JapaneseReading {
    pub romanized: String,
    pub hiragana: String,
    pub katakana: String,
    pub kanji: String,
}

impl From<Forms> for JapaneseReading {
    fn from(forms: Forms) -> Self {
        let katakana = hiragana_to_katakana(&forms.hiragana);
        JapaneseReading {
            romanized: forms.romanized,
            hiragana: forms.hiragana,
            katakana,
            kanji: forms.kanji,
        }
    }
}

/// Unit names for 10,000^tier.
const TIER_UNITS: [Morpheme; 5] = [
    morpheme("", "", ""),
    morpheme("man", "まん", "万"),
    morpheme("oku", "おく", "億"),
    morpheme("chou", "ちょう", "兆"),
    morpheme("kei", "けい", "京"),
];

/// Whole-group readings that depend on the tier they sit in, checked in
/// order before the group reader.
const TIER_IRREGULARS: [(u64, RangeInclusive<usize>, Morpheme); 3] = [
    (1_000, 1..=4, morpheme("issen", "いっせん", "一千")),
    (1, 3..=3, morpheme("ic", "いっ", "一")),
    (1, 4..=4, morpheme("ik", "いっ", "一")),
];

fn tier_irregular(group: u64, tier: usize) -> Option<Morpheme> {
    TIER_IRREGULARS
        .iter()
        .find(|(value, tiers, _)| *value == group && tiers.contains(&tier))
        .map(|(_, _, forms)| *forms)
}

struct Myriad;

impl GroupScheme for Myriad {
    const NAME: &'static str = "japanese";
    const BASE: u64 = 10_000;
    type Output = Forms;

    fn push_group(output: &mut Forms, group: u64, tier: usize) {
        match tier_irregular(group, tier) {
            Some(irregular) => output.push(irregular),
            None => output.extend(&read_group_forms(group)),
        }
        output.push(TIER_UNITS[tier]);
    }
}

/// Reads a single `0..=9999` group in all four scripts. Zero reads as empty.
pub fn read_group(n: u64) -> JapaneseReading {
    read_group_forms(n).into()
}

pub fn transcribe_japanese(n: u64) -> Result<JapaneseReading, NumeralError> {
    if n == 0 {
        let zero = lexicon::lookup(0);
        return Ok(JapaneseReading {
            romanized: zero.romanized.to_string(),
            hiragana: zero.hiragana.to_string(),
            katakana: zero.katakana.to_string(),
            kanji: zero.kanji.to_string(),
        });
    }
    ensure_in_range(n)?;
    Ok(compose::<Myriad>(n).into())
}
