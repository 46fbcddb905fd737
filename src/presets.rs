use serde::Serialize;
use std::collections::HashSet;

use crate::numerals::MAX_VALUE;

/// A labelled group of sample numbers for quick browsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetSection {
    pub key: &'static str,
    pub title: &'static str,
    pub numbers: Vec<u64>,
}

fn steps(step: u64) -> Vec<u64> {
    (1..=9).map(|i| i * step).collect()
}

/// Sections in display order. A number listed by an earlier section is
/// dropped from later ones.
pub fn sections() -> Vec<PresetSection> {
    let raw: [(&'static str, &'static str, Vec<u64>); 9] = [
        ("basic", "0-10", (0..=10).collect()),
        ("11_99", "11-99 (step 1)", (11..=99).collect()),
        ("hundreds", "100-900 (by 100)", steps(100)),
        ("thousands", "1,000-9,000 (by 1,000)", steps(1_000)),
        ("ten_thousands", "10,000-90,000 (by 10,000)", steps(10_000)),
        ("hundred_thousands", "100,000-900,000 (by 100,000)", steps(100_000)),
        ("millions", "1,000,000-9,000,000 (by 1,000,000)", steps(1_000_000)),
        ("ten_millions", "10,000,000-90,000,000 (by 10,000,000)", steps(10_000_000)),
        (
            "special",
            "10^8, 10^12, 10^16",
            vec![100_000_000, 1_000_000_000_000, MAX_VALUE],
        ),
    ];

    let mut seen = HashSet::new();
    raw.into_iter()
        .map(|(key, title, numbers)| PresetSection {
            key,
            title,
            numbers: numbers.into_iter().filter(|n| seen.insert(*n)).collect(),
        })
        .collect()
}
