//! Five-element aggregation over the resolved pillars.
//!
//! Each present pillar contributes two symbols: its stem and its branch,
//! mapped to an element through the fixed ganzhi tables. The input set is
//! exactly 6 symbols when the hour is unknown and 8 when it is known.

use crate::domain::ganzhi::{Element, ALL_ELEMENTS};
use crate::domain::model::{FourPillars, WuXingDistribution};

/// Count element occurrences and convert to rounded integer percentages.
///
/// Percentages are rounded half-up independently per element and are NOT
/// renormalized to sum to exactly 100; small rounding drift is accepted.
pub fn aggregate(pillars: &FourPillars) -> WuXingDistribution {
    let mut counts = [0u32; 5];
    for pillar in pillars.present() {
        counts[element_slot(pillar.stem.element())] += 1;
        counts[element_slot(pillar.branch.element())] += 1;
    }

    let total: u32 = counts.iter().sum();
    let percent = |count: u32| ((count * 100 + total / 2) / total) as u8;

    WuXingDistribution {
        wood: percent(counts[0]),
        fire: percent(counts[1]),
        earth: percent(counts[2]),
        metal: percent(counts[3]),
        water: percent(counts[4]),
    }
}

/// Element with the strictly maximum percentage; ties go to the earliest
/// element in the fixed priority order (wood, fire, earth, metal, water).
pub fn dominant_element(dist: &WuXingDistribution) -> Element {
    let mut best = ALL_ELEMENTS[0];
    for &element in &ALL_ELEMENTS[1..] {
        if dist.get(element) > dist.get(best) {
            best = element;
        }
    }
    best
}

/// Element with the strictly minimum percentage; same tie-break as
/// [`dominant_element`].
pub fn weak_element(dist: &WuXingDistribution) -> Element {
    let mut weakest = ALL_ELEMENTS[0];
    for &element in &ALL_ELEMENTS[1..] {
        if dist.get(element) < dist.get(weakest) {
            weakest = element;
        }
    }
    weakest
}

const fn element_slot(element: Element) -> usize {
    match element {
        Element::Wood => 0,
        Element::Fire => 1,
        Element::Earth => 2,
        Element::Metal => 3,
        Element::Water => 4,
    }
}
