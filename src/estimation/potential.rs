use crate::error::{EngineError, Result};
use crate::model::{AutomationArea, AutomationPotential, Industry, Level};
use crate::tables::{lookup, RoiTables};

/// Average efficiency of the selected areas, scaled by the industry
/// multiplier, rounded to a whole percent and capped.
pub fn calculate_automation_potential(
    areas: &[AutomationArea],
    industry: Industry,
    tables: &RoiTables,
) -> Result<AutomationPotential> {
    if areas.is_empty() {
        return Err(EngineError::invalid(
            "automation_areas",
            "at least one automation area is required",
        ));
    }

    let mut total = 0.0;
    for area in areas {
        total += lookup("area_efficiency", &tables.area_efficiency, *area)?;
    }
    let average = total / areas.len() as f64;
    let multiplier = lookup("industry_multiplier", &tables.industry_multiplier, industry)?;

    let efficiency_percent = (average * multiplier)
        .round()
        .min(tables.efficiency_cap)
        .max(0.0);

    Ok(AutomationPotential {
        efficiency_percent,
        complexity: complexity_label(areas.len()),
    })
}

/// More than three areas is high, more than one is medium.
pub fn complexity_label(area_count: usize) -> Level {
    match area_count {
        0..=1 => Level::Low,
        2..=3 => Level::Medium,
        _ => Level::High,
    }
}
