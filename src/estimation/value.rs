//! The four annual value streams.
//!
//! Each stream is a pure function of the profile, the automation potential
//! and the coefficient tables. None of them may go negative; the total is
//! their plain sum.

use crate::error::Result;
use crate::model::{AutomationPotential, BusinessProfile, CostSavings, TimeSavings, ValueBreakdown};
use crate::tables::{lookup, RoiTables};

/// Manual hours per week that automation gives back.
pub fn weekly_hours_saved(profile: &BusinessProfile, potential: &AutomationPotential) -> f64 {
    profile.manual_task_hours * potential.efficiency_percent / 100.0
}

/// Cost of the freed hours over a year at the prospect's hourly rate.
pub fn direct_savings(
    profile: &BusinessProfile,
    potential: &AutomationPotential,
    tables: &RoiTables,
) -> f64 {
    weekly_hours_saved(profile, potential) * profile.average_hourly_rate * tables.weeks_per_year
}

/// Value of redirecting freed hours to higher-value work.
///
/// Scales with role seniority (industry) and organizational breadth (size).
pub fn opportunity_value(
    profile: &BusinessProfile,
    potential: &AutomationPotential,
    tables: &RoiTables,
) -> Result<f64> {
    let industry = lookup(
        "industry_opportunity",
        &tables.industry_opportunity,
        profile.industry,
    )?;
    let size = lookup(
        "size_opportunity",
        &tables.size_opportunity,
        profile.company_size,
    )?;

    Ok(weekly_hours_saved(profile, potential)
        * profile.average_hourly_rate
        * tables.weeks_per_year
        * industry
        * size)
}

/// Rough annual revenue: representative headcount × labor cost × revenue per labor dollar.
pub fn estimated_annual_revenue(profile: &BusinessProfile, tables: &RoiTables) -> Result<f64> {
    let employees = lookup(
        "bucket_employees",
        &tables.bucket_employees,
        profile.company_size,
    )?;

    Ok(employees as f64
        * profile.average_hourly_rate
        * tables.annual_hours_per_employee
        * tables.revenue_per_labor_dollar)
}

/// Company-wide productivity boost, growing with the number of areas up to the cap.
pub fn productivity_gains(profile: &BusinessProfile, tables: &RoiTables) -> Result<f64> {
    let rate = (tables.productivity_base
        + tables.productivity_per_area * profile.area_count() as f64)
        .min(tables.productivity_cap);

    Ok(estimated_annual_revenue(profile, tables)? * rate)
}

/// Share of current errors that automation removes, in percent.
pub fn error_reduction_percent(profile: &BusinessProfile, tables: &RoiTables) -> f64 {
    (profile.error_rate_percent * tables.error_reduction_per_point)
        .min(tables.max_error_reduction_percent)
}

/// Annual cost of errors that automation avoids.
pub fn error_reduction(profile: &BusinessProfile, tables: &RoiTables) -> f64 {
    let annual_manual_cost =
        profile.manual_task_hours * profile.average_hourly_rate * tables.weeks_per_year;
    let current_error_cost =
        annual_manual_cost * (profile.error_rate_percent / 100.0) * tables.error_cost_multiplier;

    current_error_cost * error_reduction_percent(profile, tables) / 100.0
}

pub fn aggregate_value(
    profile: &BusinessProfile,
    potential: &AutomationPotential,
    tables: &RoiTables,
) -> Result<ValueBreakdown> {
    let direct_savings = direct_savings(profile, potential, tables).max(0.0);
    let opportunity_value = opportunity_value(profile, potential, tables)?.max(0.0);
    let productivity_gains = productivity_gains(profile, tables)?.max(0.0);
    let error_reduction = error_reduction(profile, tables).max(0.0);

    Ok(ValueBreakdown {
        direct_savings,
        opportunity_value,
        productivity_gains,
        error_reduction,
        error_reduction_percent: error_reduction_percent(profile, tables).max(0.0),
        total_annual_value: direct_savings + opportunity_value + productivity_gains + error_reduction,
    })
}

pub fn time_savings(
    profile: &BusinessProfile,
    potential: &AutomationPotential,
    tables: &RoiTables,
) -> TimeSavings {
    let weekly = weekly_hours_saved(profile, potential);
    TimeSavings {
        hours_per_week: weekly,
        hours_per_month: weekly * tables.weeks_per_month,
        hours_per_year: weekly * tables.weeks_per_year,
    }
}

pub fn cost_savings(
    profile: &BusinessProfile,
    potential: &AutomationPotential,
    tables: &RoiTables,
) -> CostSavings {
    let weekly = weekly_hours_saved(profile, potential) * profile.average_hourly_rate;
    CostSavings {
        weekly,
        monthly: weekly * tables.weeks_per_month,
        annual: weekly * tables.weeks_per_year,
    }
}
