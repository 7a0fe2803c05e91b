//! Plain-text reports for the terminal.
//!
//! Money values stay unrounded in the data model; rounding happens here,
//! for display only.

use crate::model::RoiEstimate;
use crate::relevance::{Bucket, ScoredService, ServiceRecommendations};
use colored::*;
use std::fmt::{self, Write};

const DIVIDER: &str = "════════════════════════════════════════════════════════════";

/// Whole dollars with thousands separators, e.g. `-$12,345`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "n/a".to_string();
    }
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

fn heading(text: &str, color: bool) -> String {
    if color {
        text.bright_cyan().bold().to_string()
    } else {
        text.to_string()
    }
}

fn banner(out: &mut String, title: &str, color: bool) -> fmt::Result {
    let divider = if color {
        DIVIDER.bright_blue().to_string()
    } else {
        DIVIDER.to_string()
    };
    writeln!(out, "{divider}")?;
    let title = if color {
        title.bright_white().bold().to_string()
    } else {
        title.to_string()
    };
    writeln!(out, "    {title}")?;
    writeln!(out, "{divider}")
}

/// Render an estimate as a multi-section text report.
pub fn render_estimate(estimate: &RoiEstimate, color: bool) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_estimate(&mut out, estimate, color);
    out
}

fn write_estimate(out: &mut String, e: &RoiEstimate, color: bool) -> fmt::Result {
    banner(out, "AUTOMATION ROI ESTIMATE", color)?;
    writeln!(out)?;

    writeln!(out, "{}", heading("Automation potential", color))?;
    writeln!(out, "  Efficiency:        {:.0}%", e.potential.efficiency_percent)?;
    writeln!(out, "  Complexity:        {}", e.potential.complexity)?;
    writeln!(out, "  Timeframe:         {}", e.timeframe)?;
    writeln!(
        out,
        "  Hours saved:       {:.1}/week, {:.0}/month, {:.0}/year",
        e.time_savings.hours_per_week, e.time_savings.hours_per_month, e.time_savings.hours_per_year
    )?;
    writeln!(out)?;

    writeln!(out, "{}", heading("Investment", color))?;
    writeln!(
        out,
        "  Tier:              {} (complexity {}/10)",
        e.investment.tier, e.investment.complexity_score
    )?;
    writeln!(out, "  Setup:             {}", format_currency(e.investment.setup))?;
    writeln!(out, "  Monthly:           {}", format_currency(e.investment.monthly))?;
    writeln!(out, "  First-year total:  {}", format_currency(e.investment.total))?;
    writeln!(out, "  Typical range:     {}", e.investment.range_label)?;
    writeln!(out)?;

    let v = &e.value;
    writeln!(out, "{}", heading("Annual value", color))?;
    writeln!(out, "  Direct savings:    {}", format_currency(v.direct_savings))?;
    writeln!(out, "  Opportunity:       {}", format_currency(v.opportunity_value))?;
    writeln!(out, "  Productivity:      {}", format_currency(v.productivity_gains))?;
    writeln!(
        out,
        "  Error reduction:   {} ({:.0}% fewer errors)",
        format_currency(v.error_reduction),
        v.error_reduction_percent
    )?;
    writeln!(out, "  Total:             {}", format_currency(v.total_annual_value))?;
    writeln!(out)?;

    writeln!(out, "{}", heading("Return", color))?;
    writeln!(out, "  ROI:               {:.0}%", e.roi.percentage)?;
    writeln!(out, "  Six-month ROI:     {:.0}%", e.roi.six_month_roi)?;
    writeln!(out, "  Payback:           {:.1} months", e.roi.payback_period_months)?;
    writeln!(out, "  Break-even:        {}", e.roi.break_even_date)?;
    writeln!(out, "  Three-year value:  {}", format_currency(e.roi.three_year_value))?;
    writeln!(
        out,
        "  Confidence:        {} ({}/100)",
        e.confidence, e.confidence_score
    )?;

    if !e.insights.recommendations.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", heading("Recommendations", color))?;
        for rec in &e.insights.recommendations {
            writeln!(out, "  - {}: {}", rec.title, rec.description)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", heading("Next steps", color))?;
    for (i, step) in e.insights.next_steps.iter().enumerate() {
        writeln!(out, "  {}. {step}", i + 1)?;
    }

    writeln!(out)?;
    writeln!(out, "{}", heading("Assumptions", color))?;
    for assumption in &e.assumptions {
        writeln!(out, "  * {assumption}")?;
    }
    Ok(())
}

/// Render grouped service recommendations with the roadmap.
pub fn render_recommendations(recs: &ServiceRecommendations, color: bool) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_recommendations(&mut out, recs, color);
    out
}

fn bucket_label(bucket: Bucket) -> &'static str {
    match bucket {
        Bucket::HighlyRecommended => "Highly recommended",
        Bucket::Recommended => "Recommended",
        Bucket::ConsiderLater => "Consider later",
        Bucket::Excluded => "Not a fit right now",
    }
}

fn write_service(out: &mut String, scored: &ScoredService) -> fmt::Result {
    writeln!(
        out,
        "  [{:>3}] {} ({})",
        scored.relevance_score, scored.service.title, scored.service.id
    )?;
    for reason in &scored.reasons {
        writeln!(out, "        - {reason}")?;
    }
    Ok(())
}

fn write_recommendations(
    out: &mut String,
    recs: &ServiceRecommendations,
    color: bool,
) -> fmt::Result {
    banner(out, "SERVICE RECOMMENDATIONS", color)?;

    for bucket in [
        Bucket::HighlyRecommended,
        Bucket::Recommended,
        Bucket::ConsiderLater,
        Bucket::Excluded,
    ] {
        let services = recs.bucket(bucket);
        if services.is_empty() {
            continue;
        }
        writeln!(out)?;
        writeln!(out, "{}", heading(bucket_label(bucket), color))?;
        for scored in services {
            write_service(out, scored)?;
        }
    }

    if recs.roadmap.is_empty() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "{}", heading("Roadmap", color))?;
    for phase in &recs.roadmap {
        writeln!(out, "  {}. {} ({})", phase.phase, phase.title, phase.duration)?;
        writeln!(out, "     Services:     {}", phase.services.join(", "))?;
        writeln!(out, "     Deliverables: {}", phase.deliverables.join(", "))?;
    }

    let budget = &recs.estimated_budget;
    writeln!(out)?;
    writeln!(
        out,
        "  Budget:   {} - {} setup, {} - {}/month",
        format_currency(budget.setup.min),
        format_currency(budget.setup.max),
        format_currency(budget.monthly.min),
        format_currency(budget.monthly.max)
    )?;
    let timeline = &recs.estimated_timeline;
    writeln!(
        out,
        "  Timeline: {} weeks (~{} months), {}",
        timeline.weeks, timeline.months, timeline.description
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimation::RoiCalculator;
    use crate::model::{AutomationArea, BusinessProfile, CompanySize, Industry, PrimaryGoal};
    use crate::relevance::{Challenge, RelevanceCriteria, RelevanceScorer, ServiceGoal};
    use chrono::NaiveDate;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(1_000.0), "$1,000");
        assert_eq!(format_currency(3_333.5), "$3,334");
        assert_eq!(format_currency(1_234_567.0), "$1,234,567");
        assert_eq!(format_currency(-42_000.0), "-$42,000");
        assert_eq!(format_currency(-0.3), "$0");
        assert_eq!(format_currency(f64::NAN), "n/a");
    }

    #[test]
    fn test_render_estimate_sections() {
        let profile = BusinessProfile {
            company_size: CompanySize::Small,
            industry: Industry::Technology,
            employee_count: 25,
            average_hourly_rate: 50.0,
            manual_task_hours: 20.0,
            error_rate_percent: 5.0,
            automation_areas: vec![AutomationArea::DataEntry, AutomationArea::Reporting],
            primary_goal: PrimaryGoal::Efficiency,
            timeframe: Default::default(),
        };
        let estimate = RoiCalculator::default()
            .estimate(&profile, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap())
            .unwrap();
        let report = render_estimate(&estimate, false);

        for section in ["Automation potential", "Investment", "Annual value", "Return", "Next steps"] {
            assert!(report.contains(section), "missing {section}");
        }
        assert!(report.contains("Efficiency:        85%"));
        assert!(report.contains("Setup:             $3,333"));
        assert!(report.contains("$2,000 - $4,000 setup, $1,500 - $3,000/month"));
    }

    #[test]
    fn test_render_recommendations_lists_buckets_and_roadmap() {
        let criteria = RelevanceCriteria {
            company_size: Some(CompanySize::Small),
            challenges: vec![Challenge::ManualTasks, Challenge::Strategy],
            goals: vec![ServiceGoal::Efficiency, ServiceGoal::Strategy],
            ..Default::default()
        };
        let recs = RelevanceScorer::default().recommend(&criteria).unwrap();
        let report = render_recommendations(&recs, false);

        assert!(report.contains("SERVICE RECOMMENDATIONS"));
        assert!(report.contains("Highly recommended"));
        assert!(report.contains("Roadmap"));
        assert!(report.contains("Perfect for eliminating repetitive manual tasks"));
        assert!(report.contains("Timeline:"));
    }

    #[test]
    fn test_render_recommendations_without_top_bucket_has_no_roadmap() {
        let recs = RelevanceScorer::default()
            .recommend(&RelevanceCriteria::default())
            .unwrap();
        let report = render_recommendations(&recs, false);
        assert!(report.contains("Consider later"));
        assert!(!report.contains("Roadmap"));
    }
}
