//! Complexity score and pricing tier.
//!
//! The two are deliberately independent: the tier is a coarse bucket of the
//! area count alone and selects a pricing band, while the finer score also
//! weighs industry and company size and only positions the estimate inside
//! that band.

use crate::error::Result;
use crate::model::{BusinessProfile, ComplexityAssessment, Level};
use crate::tables::{lookup, RoiTables};

pub const MAX_COMPLEXITY_SCORE: u8 = 10;

/// ≤2 areas → 1, ≤4 → 2, ≤6 → 3, else 4.
pub fn area_count_band(area_count: usize) -> u8 {
    match area_count {
        0..=2 => 1,
        3..=4 => 2,
        5..=6 => 3,
        _ => 4,
    }
}

/// ≤3 areas → low, ≤6 → medium, else high.
pub fn complexity_tier(area_count: usize) -> Level {
    match area_count {
        0..=3 => Level::Low,
        4..=6 => Level::Medium,
        _ => Level::High,
    }
}

pub fn assess_complexity(
    profile: &BusinessProfile,
    tables: &RoiTables,
) -> Result<ComplexityAssessment> {
    let area_count = profile.area_count();
    let industry_weight = lookup(
        "industry_complexity_weight",
        &tables.industry_complexity_weight,
        profile.industry,
    )?;
    let size_weight = lookup(
        "size_complexity_weight",
        &tables.size_complexity_weight,
        profile.company_size,
    )?;

    let raw = 1u16 + area_count_band(area_count) as u16 + industry_weight as u16 + size_weight as u16;
    let score = raw.min(MAX_COMPLEXITY_SCORE as u16) as u8;

    Ok(ComplexityAssessment {
        score,
        tier: complexity_tier(area_count),
    })
}
