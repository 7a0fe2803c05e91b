//! Per-service relevance score.
//!
//! Stages apply in a fixed order: base, size fit, industry bonus, challenge
//! and goal alignment, then the budget and timeline multipliers. Absent
//! criteria leave the score untouched.

use super::catalog::Service;
use super::criteria::{RelevanceCriteria, ServiceCategory};
use crate::error::{EngineError, Result};
use crate::tables::{lookup, RelevanceTables};
use std::collections::BTreeMap;
use std::fmt::Display;

pub const MAX_RELEVANCE_SCORE: u8 = 100;

/// Score one service against the criteria, rounded and clamped to 0-100.
pub fn score_service(
    service: &Service,
    criteria: &RelevanceCriteria,
    tables: &RelevanceTables,
) -> Result<u8> {
    let category = service.category;
    let mut score = tables.base_score;

    if let Some(size) = criteria.company_size {
        let row = nested_row("size_scores", &tables.size_scores, category)?;
        let fit = lookup("size_scores", row, size)?;
        score = (score + fit) / 2.0;
    }

    if let Some(industry) = criteria.industry {
        let row = nested_row("industry_bonus", &tables.industry_bonus, industry)?;
        score += lookup("industry_bonus", row, category)?;
    }

    score += alignment(
        "challenge_categories",
        &tables.challenge_categories,
        &criteria.challenges,
        category,
        tables,
    )?;
    score += alignment(
        "goal_categories",
        &tables.goal_categories,
        &criteria.goals,
        category,
        tables,
    )?;

    if let Some(budget) = criteria.budget {
        let row = nested_row("budget_factors", &tables.budget_factors, budget)?;
        score *= lookup("budget_factors", row, category)?;
    }

    if let Some(timeline) = criteria.timeline {
        let row = nested_row("timeline_factors", &tables.timeline_factors, timeline)?;
        score *= lookup("timeline_factors", row, category)?;
    }

    Ok(clamp_score(score))
}

/// Points for each selected key that maps to `category`, capped.
///
/// Repeated keys count once per occurrence; the cap bounds the total.
pub fn alignment<K>(
    table: &'static str,
    map: &BTreeMap<K, Vec<ServiceCategory>>,
    selected: &[K],
    category: ServiceCategory,
    tables: &RelevanceTables,
) -> Result<f64>
where
    K: Ord + Copy + Display,
{
    let mut matches = 0u32;
    for key in selected {
        let categories = nested_row(table, map, *key)?;
        if categories.contains(&category) {
            matches += 1;
        }
    }
    Ok((f64::from(matches) * tables.alignment_points).min(tables.alignment_cap))
}

fn nested_row<'a, K, V>(table: &'static str, map: &'a BTreeMap<K, V>, key: K) -> Result<&'a V>
where
    K: Ord + Display,
{
    map.get(&key)
        .ok_or_else(|| EngineError::lookup_miss(table, key))
}

fn clamp_score(score: f64) -> u8 {
    if score.is_nan() {
        return 0;
    }
    score.round().clamp(0.0, f64::from(MAX_RELEVANCE_SCORE)) as u8
}
